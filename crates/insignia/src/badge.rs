//! Badge model: the specification handed to a renderer.

use serde::{Deserialize, Serialize};

/// Badge fill color
///
/// The three named variants carry the shields.io hex values conventionally
/// used for CI badges. `Custom` passes an arbitrary CSS color through to the
/// renderer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeColor {
    /// Bright green (`#4c1`)
    Success,
    /// Orange (`#fe7d37`)
    Important,
    /// Red (`#e05d44`)
    Critical,
    /// Any CSS color understood by the renderer
    Custom(String),
}

impl BadgeColor {
    /// CSS color value for this variant
    #[must_use]
    pub fn as_css(&self) -> &str {
        match self {
            Self::Success => "#4c1",
            Self::Important => "#fe7d37",
            Self::Critical => "#e05d44",
            Self::Custom(color) => color,
        }
    }
}

/// Badge rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BadgeStyle {
    /// Rounded corners with a subtle vertical gradient
    #[default]
    Flat,
    /// Square corners, solid fills
    FlatSquare,
}

impl BadgeStyle {
    /// Corner radius in pixels
    #[must_use]
    pub const fn corner_radius(self) -> u32 {
        match self {
            Self::Flat => 3,
            Self::FlatSquare => 0,
        }
    }
}

/// A badge specification: everything a renderer needs to draw one
///
/// Transient record constructed immediately before rendering and consumed by
/// the renderer. The conventional two-segment badge draws `label` on a grey
/// field and `message` on a field filled with `color`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeSpec {
    /// Left-hand segment text
    pub label: String,
    /// Right-hand segment text
    pub message: String,
    /// Fill color of the message segment
    pub color: BadgeColor,
    /// Rendering style
    pub style: BadgeStyle,
}

impl BadgeSpec {
    /// Create a badge spec with the default color and style
    #[must_use]
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            color: BadgeColor::Success,
            style: BadgeStyle::Flat,
        }
    }

    /// Set the message segment color
    #[must_use]
    pub fn with_color(mut self, color: BadgeColor) -> Self {
        self.color = color;
        self
    }

    /// Set the rendering style
    #[must_use]
    pub const fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }
}
