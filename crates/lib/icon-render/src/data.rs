//! The composed icon data.

/// The composed icon image.
pub struct IconData {
    /// Image pixels, as the straight RGBA byte sequences.
    pub pixels: Box<[u8]>,

    /// Image width.
    pub width: u32,

    /// Image height.
    pub height: u32,
}

impl IconData {
    /// Take over the pixels of a rendered pixmap, undoing the alpha premultiplication.
    pub(crate) fn from_pixmap(pixmap: tiny_skia::Pixmap) -> Self {
        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        Self {
            pixels,
            width: pixmap.width(),
            height: pixmap.height(),
        }
    }

    /// The RGBA value at the given coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(rgba)
    }
}

impl core::fmt::Debug for IconData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconData")
            .field("pixels", &format_args!("{} bytes", self.pixels.len()))
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
