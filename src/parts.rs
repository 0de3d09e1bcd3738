//! Cosmetic peer parts: button labels, a list row, a loading cover, and the
//! text-field clear accessory.
//!
//! These are plain descriptors plus the small bits of branching logic they
//! carry (color roles, derived sizes, visibility). Actual rendering is the
//! host's job; it matches on the descriptor fields exhaustively.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DARK_GRAY_COLOR, DEFAULT_BUTTON_SIZE, DEFAULT_CIRCLE_BUTTON_SIZE, DEFAULT_IMAGE_SIZE_RATIO,
    DEFAULT_LOADING_TEXT_PADDING, GRAY_COLOR, TINT_COLOR, WHITE_COLOR,
};

// ============================================================================
// Button Labels
// ============================================================================

/// Visual role of a rectangular button label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonStyle {
    /// Filled accent button for the primary action
    #[default]
    Submit,
    /// Outlined button for the dismissing action
    Cancel,
}

/// A rounded rectangular button label with a text title.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UsualButtonLabel {
    pub title: String,
    pub style: ButtonStyle,
    pub disabled: bool,
    pub width: f32,
    pub height: f32,
}

impl UsualButtonLabel {
    pub fn new(title: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            title: title.into(),
            style,
            disabled: false,
            width: DEFAULT_BUTTON_SIZE.0,
            height: DEFAULT_BUTTON_SIZE.1,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fill color of the button body.
    pub fn fill_color(&self) -> &'static str {
        if self.disabled {
            return GRAY_COLOR;
        }
        match self.style {
            ButtonStyle::Submit => TINT_COLOR,
            ButtonStyle::Cancel => WHITE_COLOR,
        }
    }

    /// Border color. Only cancel-style buttons draw their border distinctly.
    pub fn border_color(&self) -> &'static str {
        match self.style {
            ButtonStyle::Submit => TINT_COLOR,
            ButtonStyle::Cancel => {
                if self.disabled {
                    DARK_GRAY_COLOR
                } else {
                    TINT_COLOR
                }
            }
        }
    }

    /// Color of the title text.
    pub fn label_color(&self) -> &'static str {
        match self.style {
            ButtonStyle::Submit => WHITE_COLOR,
            ButtonStyle::Cancel => {
                if self.disabled {
                    DARK_GRAY_COLOR
                } else {
                    TINT_COLOR
                }
            }
        }
    }
}

/// A circular button label holding a single glyph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CircleButtonLabel {
    /// Diameter of the circle
    pub size: f32,
    /// Fraction of the diameter occupied by the glyph
    pub image_size_ratio: f32,
    pub disabled: bool,
}

impl Default for CircleButtonLabel {
    fn default() -> Self {
        Self {
            size: DEFAULT_CIRCLE_BUTTON_SIZE,
            image_size_ratio: DEFAULT_IMAGE_SIZE_RATIO,
            disabled: false,
        }
    }
}

impl CircleButtonLabel {
    /// Edge length of the glyph inside the circle.
    pub fn image_size(&self) -> f32 {
        self.size * self.image_size_ratio
    }
}

// ============================================================================
// List Row
// ============================================================================

/// A list row with a title and a smaller subtitle underneath.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListEntryTextWithSubtitle {
    pub title: String,
    pub subtitle: String,
}

impl ListEntryTextWithSubtitle {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

// ============================================================================
// Loading Cover
// ============================================================================

/// A dimming overlay with a spinner and optional caption, shown while the
/// owner is loading. Renders nothing when not visible.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadingCover {
    pub visible: bool,
    pub text: Option<String>,
    pub text_padding: f32,
}

impl Default for LoadingCover {
    fn default() -> Self {
        Self::new(false)
    }
}

impl LoadingCover {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            text: None,
            text_padding: DEFAULT_LOADING_TEXT_PADDING,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

// ============================================================================
// Text-Field Clear Accessory
// ============================================================================

/// Whether the clear accessory should be shown for the given field content.
pub fn clear_button_visible(text: &str) -> bool {
    !text.is_empty()
}

/// The clear accessory's tap action: empty the field.
pub fn clear_text(text: &mut String) {
    text.clear();
}
