//! Library-wide constants.
//!
//! Centralizes magic numbers and default styling values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Resizable Box Interaction
// ============================================================================

/// Width of the corner/edge hit bands, in points.
///
/// Also the basis for the minimum box dimension: a box never shrinks below
/// [`min_length`] so that opposing handles stay individually hittable.
pub const DEFAULT_CORNER_SIZE: f32 = 30.0;

/// Minimum dimension multiplier applied to the corner size.
pub const MIN_LENGTH_FACTOR: f32 = 2.0;

/// Minimum box dimension for a given corner size.
#[inline]
pub fn min_length(corner_size: f32) -> f32 {
    corner_size * MIN_LENGTH_FACTOR
}

// ============================================================================
// Resizable Box Defaults (cosmetic)
// ============================================================================

/// Default fill/border color for a resizable box
pub const DEFAULT_BOX_COLOR: &str = "#00c853";

/// Default fill opacity for the box interior
pub const DEFAULT_BOX_OPACITY: f32 = 0.4;

/// Default border stroke width
pub const DEFAULT_BORDER_WIDTH: f32 = 3.0;

// ============================================================================
// Peer Part Defaults
// ============================================================================

/// Default button label size (width, height)
pub const DEFAULT_BUTTON_SIZE: (f32, f32) = (200.0, 50.0);

/// Default circle button diameter
pub const DEFAULT_CIRCLE_BUTTON_SIZE: f32 = 40.0;

/// Fraction of the circle button diameter occupied by its glyph
pub const DEFAULT_IMAGE_SIZE_RATIO: f32 = 0.6;

/// Default padding around the loading cover's optional text
pub const DEFAULT_LOADING_TEXT_PADDING: f32 = 25.0;

/// Dimming opacity of the loading cover backdrop
pub const LOADING_COVER_OPACITY: f32 = 0.4;

/// Accent color used by submit buttons
pub const TINT_COLOR: &str = "#007aff";

/// Disabled/neutral gray
pub const GRAY_COLOR: &str = "#8e8e93";

/// Darker gray for disabled cancel-button text and borders
pub const DARK_GRAY_COLOR: &str = "#555555";

/// Plain white, used for cancel-button fills and submit-button labels
pub const WHITE_COLOR: &str = "#ffffff";
