//! Library for composing tray icon images: the base art, a battery badge
//! and a status dot.

mod base;
mod color;
mod data;
mod font_fit;
pub mod geometry;
mod request;
mod typesetter;

pub use base::{BaseIcon, BaseIconError};
pub use color::{ParseColorError, Rgba};
pub use data::IconData;
pub use font_fit::{FontFit, FontFitCache, MAX_POINT_SIZE, fit, fit_point_size};
pub use request::IconRequest;
pub use typesetter::{CosmicTypesetter, Typesetter};

pub use tiny_skia;

/// Embedded font data for the default badge font.
static FONT_DATA: &[u8] = include_bytes!("../assets/font.ttf");

/// Family name of the embedded font.
pub const EMBEDDED_FONT_FAMILY: &str = "DejaVu Sans";

/// Loads the embedded badge font into a `fontdb` of some
/// [`cosmic_text::FontSystem`] and makes it the `sans-serif` family.
pub fn load_font(db: &mut cosmic_text::fontdb::Database) {
    db.load_font_data(FONT_DATA.to_vec());
    db.set_sans_serif_family(EMBEDDED_FONT_FAMILY);
}

/// Errors returned while composing an icon.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// The base icon could not be loaded.
    #[error(transparent)]
    BaseIcon(#[from] BaseIconError),

    /// The canvas could not be allocated.
    #[error("cannot allocate a {size}x{size} icon canvas")]
    Canvas {
        /// Requested icon size.
        size: u32,
    },
}

/// Composes icons, remembering the font fits it has resolved.
///
/// Composition takes `&mut self`; a composer belongs to a single thread.
#[derive(Debug)]
pub struct Composer<T = CosmicTypesetter> {
    /// The art under everything else.
    base: BaseIcon,

    /// Text metrics and drawing.
    typesetter: T,

    /// Badge font family.
    family: String,

    /// Resolved fonts by desired text height.
    fonts: FontFitCache,
}

impl Composer<CosmicTypesetter> {
    /// Create a composer with the embedded base icon and font, and the
    /// system fonts.
    pub fn new(family: impl Into<String>) -> Result<Self, ComposeError> {
        Ok(Self::with_typesetter(
            BaseIcon::embedded()?,
            CosmicTypesetter::new(),
            family,
        ))
    }
}

impl<T: Typesetter> Composer<T> {
    /// Create a composer from its parts.
    pub fn with_typesetter(base: BaseIcon, typesetter: T, family: impl Into<String>) -> Self {
        Self {
            base,
            typesetter,
            family: family.into(),
            fonts: FontFitCache::new(),
        }
    }

    /// The font fits resolved so far.
    pub fn fonts(&self) -> &FontFitCache {
        &self.fonts
    }

    /// The typesetter in use.
    pub fn typesetter(&self) -> &T {
        &self.typesetter
    }

    /// Compose an icon.
    pub fn compose(&mut self, request: &IconRequest) -> Result<IconData, ComposeError> {
        let size = request.size;
        let mut pixmap = self.base.rasterize(size)?;

        if let Some(text) = request.badge() {
            self.draw_badge(&mut pixmap.as_mut(), size, text);
        }

        if let Some(color) = request.dot_color {
            draw_dot(&mut pixmap.as_mut(), size, color);
        }

        Ok(IconData::from_pixmap(pixmap))
    }

    /// Draw the bottom-right badge, unless no font fits.
    fn draw_badge(&mut self, pixmap: &mut tiny_skia::PixmapMut<'_>, size: u32, text: &str) {
        let desired = geometry::badge_text_height(size);
        let Some(font) = self
            .fonts
            .get_or_fit(&mut self.typesetter, &self.family, desired)
        else {
            return;
        };

        let text_width = self.typesetter.text_width(font, text);
        let layout = geometry::badge_layout(size, text_width, font.line_height as f32);

        if let Some(path) = geometry::rounded_rect(layout.background, geometry::BADGE_CORNER_RADIUS)
        {
            let mut paint = tiny_skia::Paint::default();
            paint.set_color(Rgba::BADGE.into());
            paint.anti_alias = true;
            pixmap.fill_path(
                &path,
                &paint,
                tiny_skia::FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }

        self.typesetter
            .draw_text(font, text, layout.text, Rgba::WHITE, pixmap);
    }
}

/// Draw the top-right status dot.
fn draw_dot(pixmap: &mut tiny_skia::PixmapMut<'_>, size: u32, color: Rgba) {
    let bounds = geometry::dot_bounds(size);
    let radius = bounds.width / 2.0;
    let Some(path) =
        tiny_skia::PathBuilder::from_circle(bounds.x + radius, bounds.y + radius, radius)
    else {
        return;
    };

    let mut paint = tiny_skia::Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    pixmap.fill_path(
        &path,
        &paint,
        tiny_skia::FillRule::Winding,
        tiny_skia::Transform::identity(),
        None,
    );
}
