//! Icon utilities for the tray application.

/// Produce the static default icon: the bare base art.
pub fn default_icon(size: u32) -> color_eyre::eyre::Result<tray_icon::Icon> {
    let base = icon_render::BaseIcon::embedded()?;
    let data = base.to_icon_data(size)?;
    Ok(from_icon_data(data)?)
}

/// Convert composed icon data to a tray icon.
pub fn from_icon_data(data: icon_render::IconData) -> Result<tray_icon::Icon, tray_icon::BadIcon> {
    let icon_render::IconData {
        pixels,
        width,
        height,
    } = data;

    tray_icon::Icon::from_rgba(pixels.into_vec(), width, height)
}
