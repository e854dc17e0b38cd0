//! Shared configuration types for earbud-tray.

/// Root configuration.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name shown on the first line of the tray tooltip.
    pub display_name: String,

    /// Whether to draw the battery level onto the tray icon.
    pub tray_icon_battery: bool,

    /// Font family of the battery badge.
    pub font_family: String,

    /// Side length of the composed tray icon, in pixels.
    pub icon_size: u32,
}

impl Config {
    /// The default display name.
    pub const DEFAULT_DISPLAY_NAME: &'static str = "Earbuds";

    /// The default badge font family.
    pub const DEFAULT_FONT_FAMILY: &'static str = "sans-serif";

    /// The default icon size.
    pub const DEFAULT_ICON_SIZE: u32 = 64;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_name: Self::DEFAULT_DISPLAY_NAME.to_owned(),
            tray_icon_battery: true,
            font_family: Self::DEFAULT_FONT_FAMILY.to_owned(),
            icon_size: Self::DEFAULT_ICON_SIZE,
        }
    }
}
