//! Drag session state machine - per-box state for an in-progress gesture.
//!
//! A [`DragSession`] exists because the visual box component is recreated on
//! every render of a stateless view tree and cannot hold gesture state
//! itself. The session outlives renders and carries two things: which
//! interaction mode the gesture locked in, and the geometry snapshot taken
//! when the gesture started. All transforms are computed from that snapshot,
//! never from an intermediate value, so the gesture stays idempotent with
//! respect to the running translation.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (start - first changed event of a gesture)
//! Dragging -> Idle       (stop - gesture ended; cancel - gesture aborted)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{BoxGeometry, Point, Size};

/// The nine interaction modes of a resizable box.
///
/// Chosen once per gesture by the hit-zone classifier and fixed for the
/// gesture's duration: four corner handles, four edge handles, and a
/// whole-body move as the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragMode {
    /// Move the whole box without resizing
    Body,
    /// Resize from the top-left corner
    LeftTop,
    /// Resize from the top-right corner
    RightTop,
    /// Resize from the bottom-right corner
    RightBottom,
    /// Resize from the bottom-left corner
    LeftBottom,
    /// Resize from the top edge
    Top,
    /// Resize from the bottom edge
    Bottom,
    /// Resize from the left edge
    Left,
    /// Resize from the right edge
    Right,
}

/// Errors surfaced by drag session operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DragError {
    /// Transform requested while no gesture is active. A logic error in the
    /// caller's event plumbing; callers log it and keep their geometry.
    #[error("drag transform requested with no active mode")]
    NoActiveMode,
}

/// Mutable per-box record of the active gesture.
///
/// One instance per box id, owned by the
/// [`SessionManager`](crate::session::SessionManager) and reused across many
/// gestures. The only externally visible transition is the mode toggling
/// between set and absent.
#[derive(Debug, Default)]
pub struct DragSession {
    mode: Option<DragMode>,
    size: Size,
    origin: Point,
    min_length: f32,
}

impl DragSession {
    /// The locked-in mode, or `None` when idle.
    pub fn mode(&self) -> Option<DragMode> {
        self.mode
    }

    /// Returns true if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// Size captured at gesture start.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Origin captured at gesture start.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Minimum dimension enforced by this gesture.
    pub fn min_length(&self) -> f32 {
        self.min_length
    }

    /// Upper fence for the origin x: moving the origin past it would leave
    /// less than `min_length` of width on the opposite edge.
    pub fn fence_x_max(&self) -> f32 {
        self.origin.x + self.size.width - self.min_length
    }

    /// Upper fence for the origin y, analogous to [`Self::fence_x_max`].
    pub fn fence_y_max(&self) -> f32 {
        self.origin.y + self.size.height - self.min_length
    }

    /// Lock in a mode and snapshot the geometry the gesture starts from.
    ///
    /// Called exactly once per gesture, on the first changed event while the
    /// session is idle.
    pub fn start(&mut self, mode: DragMode, size: Size, origin: Point, min_length: f32) {
        self.mode = Some(mode);
        self.size = size;
        self.origin = origin;
        self.min_length = min_length;
    }

    /// End the gesture, returning the session to idle. The snapshot is kept
    /// until the next `start` overwrites it.
    pub fn stop(&mut self) {
        self.mode = None;
    }

    /// Abort the gesture without a final transform. The controller reverts
    /// the published geometry to the snapshot; this only clears the mode.
    pub fn cancel(&mut self) {
        self.mode = None;
    }

    /// Compute a replacement geometry from the gesture-start snapshot.
    ///
    /// Width and height grow by the given deltas but never drop below the
    /// minimum length. The origin shifts by its deltas but is fenced so a
    /// resize can never push an edge past the minimum size of the opposite
    /// edge. Only the upper bound is fenced; growth away from the fence is
    /// already made meaningless by the size floor.
    pub fn transform(&self, dw: f32, dh: f32, dx: f32, dy: f32) -> Result<BoxGeometry, DragError> {
        if self.mode.is_none() {
            return Err(DragError::NoActiveMode);
        }

        let new_width = (self.size.width + dw).max(self.min_length);
        let new_height = (self.size.height + dh).max(self.min_length);

        let new_x = (self.origin.x + dx).min(self.fence_x_max());
        let new_y = (self.origin.y + dy).min(self.fence_y_max());

        Ok(BoxGeometry::anchored(
            Size::new(new_width, new_height),
            Point::new(new_x, new_y),
        ))
    }
}
