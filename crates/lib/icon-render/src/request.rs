//! Render requests.

use crate::Rgba;

/// What to compose: a square icon with an optional badge and status dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Side length of the square icon, in pixels.
    pub size: u32,

    /// Text for the bottom-right badge. Empty text means no badge.
    pub badge_text: Option<String>,

    /// Color of the top-right status dot.
    pub dot_color: Option<Rgba>,
}

impl IconRequest {
    /// A request for the bare base icon.
    pub const fn plain(size: u32) -> Self {
        Self {
            size,
            badge_text: None,
            dot_color: None,
        }
    }

    /// A request with a badge.
    pub fn with_badge(size: u32, text: impl Into<String>) -> Self {
        Self {
            badge_text: Some(text.into()),
            ..Self::plain(size)
        }
    }

    /// The badge text, if a badge should be drawn.
    pub fn badge(&self) -> Option<&str> {
        self.badge_text.as_deref().filter(|text| !text.is_empty())
    }
}
