//! Font metrics and text drawing.

use cosmic_text::{
    Align, Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight, Wrap, fontdb,
};

use crate::geometry::Bounds;
use crate::{FontFit, Rgba};

/// Pixels per typographic point at 96 DPI.
const PX_PER_POINT: f32 = 96.0 / 72.0;

/// Measures and draws bold text for the badge.
pub trait Typesetter {
    /// Line height in pixels of the bold `family` face at `point_size`.
    ///
    /// `None` if the family has no usable face.
    fn line_height(&mut self, family: &str, point_size: u32) -> Option<u32>;

    /// Width in pixels of `text` set in `font`.
    fn text_width(&mut self, font: &FontFit, text: &str) -> f32;

    /// Draw `text` right-aligned into `bounds`, clipped to them.
    fn draw_text(
        &mut self,
        font: &FontFit,
        text: &str,
        bounds: Bounds,
        color: Rgba,
        pixmap: &mut tiny_skia::PixmapMut<'_>,
    );
}

/// A [`Typesetter`] backed by [`cosmic_text`].
pub struct CosmicTypesetter {
    /// Loaded fonts.
    font_system: FontSystem,

    /// Rasterized glyph cache.
    cache: SwashCache,
}

impl CosmicTypesetter {
    /// Create a typesetter over the system fonts and the embedded font.
    ///
    /// `sans-serif` resolves to the embedded font.
    pub fn new() -> Self {
        let mut font_system = FontSystem::new();
        crate::load_font(font_system.db_mut());
        Self::with_font_system(font_system)
    }

    /// Create a typesetter that only knows the embedded font.
    pub fn embedded() -> Self {
        let mut db = fontdb::Database::new();
        crate::load_font(&mut db);
        Self::with_font_system(FontSystem::new_with_locale_and_db("en-US".to_owned(), db))
    }

    /// Create a typesetter over a prepared font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self {
            font_system,
            cache: SwashCache::new(),
        }
    }

    /// Access the font database, e.g. to load extra fonts.
    pub fn font_db_mut(&mut self) -> &mut fontdb::Database {
        self.font_system.db_mut()
    }
}

impl Default for CosmicTypesetter {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for CosmicTypesetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicTypesetter")
            .field("faces", &self.font_system.db().len())
            .finish()
    }
}

/// Map CSS-like generic names onto font families.
///
/// Generic names resolve through the families configured on the database.
fn family_of(name: &str) -> Family<'_> {
    match name {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        name => Family::Name(name),
    }
}

/// Buffer metrics for a fitted font.
fn metrics(font: &FontFit) -> Metrics {
    Metrics::new(
        font.point_size as f32 * PX_PER_POINT,
        font.line_height as f32,
    )
}

impl Typesetter for CosmicTypesetter {
    fn line_height(&mut self, family: &str, point_size: u32) -> Option<u32> {
        let families = [family_of(family)];
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let db = self.font_system.db();
        let id = db.query(&query)?;
        let (ascender, descender, units_per_em) = db.with_face_data(id, |data, index| {
            let face = ttf_parser::Face::parse(data, index).ok()?;
            Some((face.ascender(), face.descender(), face.units_per_em()))
        })??;

        let px = point_size as f32 * PX_PER_POINT;
        let extent = (i32::from(ascender) - i32::from(descender)) as f32;
        Some((extent * px / f32::from(units_per_em)).ceil() as u32)
    }

    fn text_width(&mut self, font: &FontFit, text: &str) -> f32 {
        let mut buffer = Buffer::new_empty(metrics(font));
        let mut buffer = buffer.borrow_with(&mut self.font_system);

        buffer.set_size(None, None);
        buffer.set_wrap(Wrap::None);

        let attrs = Attrs::new()
            .family(family_of(&font.family))
            .weight(Weight::BOLD);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(false);

        buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0, f32::max)
            .ceil()
    }

    fn draw_text(
        &mut self,
        font: &FontFit,
        text: &str,
        bounds: Bounds,
        color: Rgba,
        pixmap: &mut tiny_skia::PixmapMut<'_>,
    ) {
        let mut buffer = Buffer::new_empty(metrics(font));
        let mut buffer = buffer.borrow_with(&mut self.font_system);

        buffer.set_size(Some(bounds.width), Some(bounds.height));
        buffer.set_wrap(Wrap::None);

        let attrs = Attrs::new()
            .family(family_of(&font.family))
            .weight(Weight::BOLD);
        buffer.set_text(text, &attrs, Shaping::Advanced, Some(Align::Right));
        buffer.shape_until_scroll(false);

        let mut paint = tiny_skia::Paint::default();
        buffer.draw(&mut self.cache, color.into(), |x, y, w, h, color| {
            let [r, g, b, a] = color.as_rgba();
            if a == 0 {
                return;
            }

            let left = (bounds.x + x as f32).max(bounds.x);
            let top = (bounds.y + y as f32).max(bounds.y);
            let right = (bounds.x + x as f32 + w as f32).min(bounds.right());
            let bottom = (bounds.y + y as f32 + h as f32).min(bounds.bottom());
            let Some(rect) = tiny_skia::Rect::from_ltrb(left, top, right, bottom) else {
                return;
            };

            paint.set_color_rgba8(r, g, b, a);
            pixmap.fill_rect(rect, &paint, tiny_skia::Transform::identity(), None);
        });
    }
}
