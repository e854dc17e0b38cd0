//! Colors used while composing icons.

/// A straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,

    /// Green channel.
    pub g: u8,

    /// Blue channel.
    pub b: u8,

    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Opaque white, the badge text color.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// The badge background accent.
    pub const BADGE: Self = Self::rgb(255, 36, 66);

    /// Construct an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Construct a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Bytes in the RGBA order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgba> for tiny_skia::Color {
    fn from(value: Rgba) -> Self {
        tiny_skia::Color::from_rgba8(value.r, value.g, value.b, value.a)
    }
}

impl From<Rgba> for cosmic_text::Color {
    fn from(value: Rgba) -> Self {
        cosmic_text::Color::rgba(value.r, value.g, value.b, value.a)
    }
}

/// Error returned when parsing a hex color string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    /// The string has a length other than `#rrggbb` or `#rrggbbaa`.
    #[error("color must be #rrggbb or #rrggbbaa: {0:?}")]
    Length(String),

    /// A channel is not valid hex.
    #[error("invalid hex digits in color {0:?}")]
    Digits(String),
}

impl core::str::FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_owned()))?;

        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(ParseColorError::Length(s.to_owned()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParseColorError::Digits(s.to_owned()))
        };

        let alpha = if hex.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}
