//! Hit-zone classification - mapping a gesture start point to a drag mode.
//!
//! The box is divided into nine zones by four border lines inset by the
//! corner size: four corner squares, four edge bands, and the interior body.
//! Corners are tested before edges because a point inside a corner square
//! also satisfies two edge tests, and the corner must win.

use crate::geometry::{BoxGeometry, Point};
use crate::input::state::DragMode;

/// Classify a gesture start point against the current geometry.
///
/// `corner_size` is the width of the border hit bands. Points outside the box
/// entirely still classify (the host's gesture recognizer only delivers
/// touches that landed on the box, so out-of-bounds points behave like the
/// nearest band).
pub fn classify(start: Point, geometry: &BoxGeometry, corner_size: f32) -> DragMode {
    let x = start.x;
    let y = start.y;

    // Border lines of the hit bands, in the same space as the start point.
    let top = geometry.origin().y + corner_size;
    let left = geometry.origin().x + corner_size;
    let right = geometry.origin().x + geometry.size().width - corner_size;
    let bottom = geometry.origin().y + geometry.size().height - corner_size;

    // Corners first; the ordering is load-bearing.
    if x <= left && y <= top {
        return DragMode::LeftTop;
    }
    if x >= right && y <= top {
        return DragMode::RightTop;
    }
    if x >= right && y >= bottom {
        return DragMode::RightBottom;
    }
    if x <= left && y >= bottom {
        return DragMode::LeftBottom;
    }

    if x <= left {
        return DragMode::Left;
    }
    if x >= right {
        return DragMode::Right;
    }
    if y <= top {
        return DragMode::Top;
    }
    if y >= bottom {
        return DragMode::Bottom;
    }

    DragMode::Body
}
