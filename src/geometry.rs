//! Core geometry types for the resizable box system.
//!
//! This module defines the fundamental value types used throughout the crate:
//! sizes, points, and the immutable [`BoxGeometry`] snapshot that describes
//! where a box currently sits. Geometry values are never mutated in place;
//! every interaction produces a replacement value that the owner stores and
//! feeds back in on the next event.

use serde::{Deserialize, Serialize};

/// A width/height pair. Both dimensions are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// An x/y position in the host's coordinate space.
///
/// All inputs to one box (gesture locations, layout origins) must share a
/// single consistent space; which space that is does not matter to the math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Immutable snapshot of a box's size and placement.
///
/// Size and origin live in one value so a single drag event emits a single
/// replacement, never two independent visual updates for one logical change.
///
/// A geometry constructed without an origin is *floating*: the box has not
/// been absolutely positioned yet and waits for its first layout callback.
/// Supplying any origin (at construction or via [`BoxGeometry::with_origin`])
/// clears the flag permanently; it never reverts to floating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    size: Size,
    origin: Point,
    floating: bool,
}

impl BoxGeometry {
    /// Create a geometry with no known origin yet. The origin defaults to
    /// (0, 0) and is replaced on the first layout callback.
    pub fn floating(size: Size) -> Self {
        Self {
            size,
            origin: Point::ZERO,
            floating: true,
        }
    }

    /// Create an absolutely positioned geometry.
    pub fn anchored(size: Size, origin: Point) -> Self {
        Self {
            size,
            origin,
            floating: false,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn is_floating(&self) -> bool {
        self.floating
    }

    /// True iff both dimensions are at least `min_length`.
    pub fn satisfies_min_length(&self, min_length: f32) -> bool {
        self.size.width >= min_length && self.size.height >= min_length
    }

    /// The box center, derived from origin and size.
    ///
    /// Never stored independently; it is always consistent with the origin
    /// and size of this snapshot.
    pub fn position(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Replacement geometry with the same size and the given origin.
    /// The result is always anchored, regardless of the current flag.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::anchored(self.size, origin)
    }

    /// Resolve this geometry into its placement variant for the host.
    pub fn frame(&self) -> BoxFrame {
        if self.floating {
            BoxFrame::Floating(self.size)
        } else {
            BoxFrame::Anchored(*self)
        }
    }
}

/// How the host should place a box, as a closed set of variants.
///
/// A floating box renders at its natural layout position until the first
/// layout callback anchors it; an anchored box renders at an absolute
/// position. Hosts match on this exhaustively instead of branching on the
/// flag at render time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxFrame {
    /// Not yet positioned; only the size is meaningful.
    Floating(Size),
    /// Absolutely positioned at the geometry's center.
    Anchored(BoxGeometry),
}
