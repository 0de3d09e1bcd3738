//! Drag event handling - the per-box interaction controller.
//!
//! [`ResizableBox`] is the glue between a host's gesture stream and the
//! geometry model. The host owns the current [`BoxGeometry`] (typically via
//! a two-way binding) and calls one method per pointer event; every call
//! returns the replacement geometry for the owner to store and feed back in
//! on the next event.
//!
//! ## Performance Notes
//!
//! `drag_changed` is called at pointer-move rate (60+ times per second).
//! The work per call is constant: one hash lookup, one classification on
//! the first event of a gesture, one transform. Enable profiling with
//! `cargo build --features profiling` to see timing.

use std::sync::Arc;

use crate::constants::{min_length, DEFAULT_BORDER_WIDTH, DEFAULT_BOX_COLOR, DEFAULT_BOX_OPACITY, DEFAULT_CORNER_SIZE};
use crate::geometry::{BoxGeometry, Point};
use crate::input::hit;
use crate::input::state::{DragMode, DragSession};
use crate::profile_scope;
use crate::session::{BoxId, SessionManager};

/// Cosmetic parameters of a resizable box. Not part of the interaction
/// contract; carried for hosts that render the box.
#[derive(Clone, Debug)]
pub struct BoxStyle {
    /// Fill and border color as a hex string
    pub color: String,
    /// Fill opacity of the box interior
    pub opacity: f32,
    /// Border stroke width
    pub border_width: f32,
    /// Whether the corner handles are drawn
    pub corners_visible: bool,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_BOX_COLOR.to_string(),
            opacity: DEFAULT_BOX_OPACITY,
            border_width: DEFAULT_BORDER_WIDTH,
            corners_visible: true,
        }
    }
}

/// Interaction controller for one named resizable box.
///
/// The value itself is cheap and can be recreated on every render; all
/// gesture state lives in the shared [`SessionManager`] under this box's id.
/// Two live boxes must never share an id.
pub struct ResizableBox {
    id: BoxId,
    corner_size: f32,
    style: BoxStyle,
    sessions: Arc<SessionManager>,
}

impl ResizableBox {
    pub fn new(id: impl Into<BoxId>, sessions: Arc<SessionManager>) -> Self {
        Self {
            id: id.into(),
            corner_size: DEFAULT_CORNER_SIZE,
            style: BoxStyle::default(),
            sessions,
        }
    }

    /// Override the hit-band width (and with it the minimum dimension).
    pub fn with_corner_size(mut self, corner_size: f32) -> Self {
        self.corner_size = corner_size;
        self
    }

    pub fn with_style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> &BoxId {
        &self.id
    }

    pub fn corner_size(&self) -> f32 {
        self.corner_size
    }

    /// Smallest width/height this box can be resized to.
    pub fn min_length(&self) -> f32 {
        min_length(self.corner_size)
    }

    pub fn style(&self) -> &BoxStyle {
        &self.style
    }

    /// Handle one changed event of a drag gesture.
    ///
    /// The first changed event after an idle session classifies the start
    /// location into a mode and snapshots the current geometry; every event
    /// (including the first) then transforms the snapshot by the running
    /// translation. Returns the replacement geometry for the owner.
    pub fn drag_changed(
        &self,
        current: &BoxGeometry,
        start_location: Point,
        translation: Point,
    ) -> BoxGeometry {
        profile_scope!("drag_changed");

        let session = self.sessions.session(&self.id);
        let mut session = session.lock();
        if !session.is_active() {
            let mode = hit::classify(start_location, current, self.corner_size);
            session.start(mode, current.size(), current.origin(), self.min_length());
        }
        self.transformed(&session, current, translation)
    }

    /// Handle the ended event of a drag gesture: one final transform, then
    /// the session returns to idle.
    pub fn drag_ended(&self, current: &BoxGeometry, translation: Point) -> BoxGeometry {
        profile_scope!("drag_ended");

        let session = self.sessions.session(&self.id);
        let mut session = session.lock();
        let geometry = self.transformed(&session, current, translation);
        session.stop();
        geometry
    }

    /// Abort an in-progress gesture (multi-touch interruption, focus loss).
    ///
    /// Reverts the published geometry to the gesture-start snapshot and
    /// returns the session to idle. A no-op on an idle session.
    pub fn drag_cancelled(&self, current: &BoxGeometry) -> BoxGeometry {
        let session = self.sessions.session(&self.id);
        let mut session = session.lock();
        if !session.is_active() {
            return *current;
        }
        let reverted = BoxGeometry::anchored(session.size(), session.origin());
        session.cancel();
        reverted
    }

    /// One-time placement of a floating box.
    ///
    /// Called by the host when the box's rendered frame is first known.
    /// Returns the anchored replacement iff the geometry is still floating;
    /// the flag guard means this can never re-fire once anchored.
    pub fn on_appear(&self, current: &BoxGeometry, frame_origin: Point) -> Option<BoxGeometry> {
        if current.is_floating() {
            Some(current.with_origin(frame_origin))
        } else {
            None
        }
    }

    /// Apply the mode's transform dispatch to the session snapshot.
    ///
    /// Per mode, the translation (dx, dy) feeds the transform as
    /// (dwidth, dheight, dx, dy): the body moves without resizing, the
    /// left/top handles grow the box opposite to the drag while shifting the
    /// origin with it, and the right/bottom handles grow with the drag.
    fn transformed(
        &self,
        session: &DragSession,
        current: &BoxGeometry,
        translation: Point,
    ) -> BoxGeometry {
        let Some(mode) = session.mode() else {
            tracing::error!(id = %self.id, "BUG: transform requested with no active mode");
            return *current;
        };

        let (dx, dy) = (translation.x, translation.y);
        let result = match mode {
            DragMode::Body => session.transform(0.0, 0.0, dx, dy),
            DragMode::LeftTop => session.transform(-dx, -dy, dx, dy),
            DragMode::RightTop => session.transform(dx, -dy, 0.0, dy),
            DragMode::RightBottom => session.transform(dx, dy, 0.0, 0.0),
            DragMode::LeftBottom => session.transform(-dx, dy, dx, 0.0),
            DragMode::Top => session.transform(0.0, -dy, 0.0, dy),
            DragMode::Bottom => session.transform(0.0, dy, 0.0, 0.0),
            DragMode::Left => session.transform(-dx, 0.0, dx, 0.0),
            DragMode::Right => session.transform(dx, 0.0, 0.0, 0.0),
        };

        match result {
            Ok(geometry) => geometry,
            Err(err) => {
                tracing::error!(id = %self.id, %err, "drag transform failed");
                *current
            }
        }
    }
}
