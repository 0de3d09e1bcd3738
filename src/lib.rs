//! boxparts - reusable UI parts around a resizable/draggable box core.
//!
//! The engineering core is the resizable box interaction model: an immutable
//! [`BoxGeometry`] snapshot evolved by pointer-drag gestures through nine
//! interaction modes (whole-body move plus eight resize handles), with
//! minimum-size clamping and per-box session state that survives re-renders
//! of a stateless view tree. Around it sit a handful of cosmetic peer parts
//! (button labels, a list row, a loading cover, a clear accessory) that
//! carry no state machine of their own.
//!
//! Hosts drive the core through [`ResizableBox`]: feed it the current
//! geometry plus each gesture event, store the geometry it returns, and
//! match on [`BoxFrame`] to place the rendered box.

pub mod constants;
pub mod geometry;
pub mod input;
pub mod parts;
pub mod perf;
pub mod session;

pub use geometry::{BoxFrame, BoxGeometry, Point, Size};
pub use input::{BoxStyle, DragError, DragMode, DragSession, ResizableBox};
pub use session::{BoxId, SessionManager};
