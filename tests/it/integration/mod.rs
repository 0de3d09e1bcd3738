//! Multi-component workflow tests.

mod drag_workflow_tests;
