//! The vector art every icon starts from.

use resvg::usvg;

use crate::{ComposeError, IconData};

/// Embedded SVG data for the default base icon.
static ICON_SVG: &[u8] = include_bytes!("../assets/icon.svg");

/// Error returned when the base icon cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse base icon SVG: {0}")]
pub struct BaseIconError(#[from] usvg::Error);

/// A parsed base icon, ready to be rasterized at any size.
pub struct BaseIcon {
    /// The parsed SVG tree.
    tree: usvg::Tree,
}

impl BaseIcon {
    /// Parse the embedded default icon.
    pub fn embedded() -> Result<Self, BaseIconError> {
        Self::from_svg_data(ICON_SVG)
    }

    /// Parse an icon from SVG data.
    pub fn from_svg_data(data: &[u8]) -> Result<Self, BaseIconError> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
        Ok(Self { tree })
    }

    /// Rasterize the bare icon at the given size.
    pub fn to_icon_data(&self, size: u32) -> Result<IconData, ComposeError> {
        self.rasterize(size).map(IconData::from_pixmap)
    }

    /// Rasterize the icon onto a fresh transparent canvas.
    pub(crate) fn rasterize(&self, size: u32) -> Result<tiny_skia::Pixmap, ComposeError> {
        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(ComposeError::Canvas { size })?;
        self.render(&mut pixmap.as_mut());
        Ok(pixmap)
    }

    /// Rasterize the icon scaled to fill the whole pixmap.
    fn render(&self, pixmap: &mut tiny_skia::PixmapMut<'_>) {
        let size = self.tree.size();
        let scale_x = pixmap.width() as f32 / size.width();
        let scale_y = pixmap.height() as f32 / size.height();
        let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

        resvg::render(&self.tree, transform, pixmap);
    }
}

impl core::fmt::Debug for BaseIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.tree.size();
        f.debug_struct("BaseIcon")
            .field("width", &size.width())
            .field("height", &size.height())
            .finish()
    }
}
