//! Renders a single tray icon with a battery badge into a PNG file.

use std::io::Read as _;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    let text = text.trim();

    let output_path: std::path::PathBuf = envfury::must("TRAY_ICON_OUTPUT")?;

    let size: u32 = envfury::or("TRAY_ICON_SIZE", 64)?;
    let dot_color: Option<icon_render::Rgba> = envfury::maybe("TRAY_ICON_DOT")?;
    let font_family: Option<String> = envfury::maybe("TRAY_ICON_FONT_FAMILY")?;
    let font_family = font_family.unwrap_or_else(|| String::from("sans-serif"));

    let mut composer = icon_render::Composer::new(font_family)?;

    let request = icon_render::IconRequest {
        size,
        badge_text: Some(text.to_owned()),
        dot_color,
    };
    let icon = composer.compose(&request)?;

    match composer.fonts().get(icon_render::geometry::badge_text_height(size)) {
        Some(Some(fit)) => tracing::info!(message = "Composed badge", text, ?fit),
        Some(None) => tracing::warn!(message = "No font fits, badge omitted", text),
        None => tracing::info!(message = "Composed icon without a badge"),
    }

    let img = image::RgbaImage::from_raw(icon.width, icon.height, icon.pixels.into_vec())
        .ok_or_else(|| color_eyre::eyre::eyre!("Failed to create image from raw data"))?;

    img.save(&output_path)?;

    println!("Image saved to: {}", output_path.display());
    println!("Dimensions: {}x{}", icon.width, icon.height);

    Ok(())
}
