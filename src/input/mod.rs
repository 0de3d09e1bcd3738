//! Pointer-drag input handling for the resizable box.
//!
//! This module implements the whole interaction model: classifying where a
//! gesture started, locking a mode for the gesture's duration, and turning
//! each incremental translation into a replacement geometry.
//!
//! ## Architecture
//!
//! Gesture state lives in an explicit [`DragSession`] state machine keyed by
//! box id, not in the view, because the view is recreated on every render.
//! A session is started by the first changed event of a gesture, transformed
//! by every subsequent event from the snapshot taken at start, and returned
//! to idle on the ended (or cancelled) event.
//!
//! ## Modules
//!
//! - `state` - Drag session state machine and transform math
//! - `hit` - Hit-zone classifier mapping a start point to one of nine modes
//! - `drag` - Per-box controller wiring gesture events to the session

pub mod hit;
mod drag;
mod state;

pub use drag::{BoxStyle, ResizableBox};
pub use state::{DragError, DragMode, DragSession};
