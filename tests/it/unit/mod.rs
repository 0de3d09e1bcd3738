//! Unit tests for boxparts.
