//! Tests for icon composition.

use icon_render::geometry::Bounds;
use icon_render::{
    BaseIcon, ComposeError, Composer, CosmicTypesetter, FontFit, IconRequest, Rgba, Typesetter,
    tiny_skia,
};

/// An SVG that paints nothing.
const EMPTY_SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;

/// A typesetter with made-up metrics that records instead of drawing.
#[derive(Debug, Default)]
struct Synthetic {
    /// Line height as a function of point size.
    heights: Option<fn(u32) -> u32>,

    /// Number of line height queries made.
    height_queries: usize,

    /// Text draw calls made.
    drawn: Vec<(String, Bounds)>,
}

fn identity_height(point_size: u32) -> u32 {
    point_size
}

fn tiny_height(_point_size: u32) -> u32 {
    3
}

impl Synthetic {
    /// Line height equal to the point size.
    fn identity() -> Self {
        Self {
            heights: Some(identity_height as fn(u32) -> u32),
            ..Self::default()
        }
    }

    /// Line height stuck at 3 pixels.
    fn tiny() -> Self {
        Self {
            heights: Some(tiny_height as fn(u32) -> u32),
            ..Self::default()
        }
    }
}

impl Typesetter for Synthetic {
    fn line_height(&mut self, _family: &str, point_size: u32) -> Option<u32> {
        self.height_queries += 1;
        self.heights.map(|heights| heights(point_size))
    }

    fn text_width(&mut self, _font: &FontFit, text: &str) -> f32 {
        text.chars().count() as f32 * 10.0
    }

    fn draw_text(
        &mut self,
        _font: &FontFit,
        text: &str,
        bounds: Bounds,
        _color: Rgba,
        _pixmap: &mut tiny_skia::PixmapMut<'_>,
    ) {
        self.drawn.push((text.to_owned(), bounds));
    }
}

fn empty_composer(typesetter: Synthetic) -> Composer<Synthetic> {
    let base = BaseIcon::from_svg_data(EMPTY_SVG).expect("empty SVG should parse");
    Composer::with_typesetter(base, typesetter, "sans-serif")
}

fn embedded_composer(typesetter: Synthetic) -> Composer<Synthetic> {
    let base = BaseIcon::embedded().expect("embedded icon should parse");
    Composer::with_typesetter(base, typesetter, "sans-serif")
}

#[test]
fn plain_icon_has_requested_size() {
    let mut composer = embedded_composer(Synthetic::identity());

    for size in [1, 16, 32, 64, 77] {
        let icon = composer.compose(&IconRequest::plain(size)).unwrap();
        assert_eq!(icon.width, size);
        assert_eq!(icon.height, size);
        assert_eq!(icon.pixels.len(), (size * size * 4) as usize);
    }
}

#[test]
fn plain_icon_is_transparent_without_art() {
    let mut composer = empty_composer(Synthetic::identity());

    let icon = composer.compose(&IconRequest::plain(32)).unwrap();

    assert!(icon.pixels.iter().all(|&byte| byte == 0));
}

#[test]
fn embedded_art_paints_something() {
    let mut composer = embedded_composer(Synthetic::identity());

    let icon = composer.compose(&IconRequest::plain(64)).unwrap();

    assert!(icon.pixels.chunks_exact(4).any(|pixel| pixel[3] != 0));
}

#[test]
fn zero_size_is_rejected() {
    let mut composer = empty_composer(Synthetic::identity());

    let error = composer.compose(&IconRequest::plain(0)).unwrap_err();

    assert!(matches!(error, ComposeError::Canvas { size: 0 }));
}

#[test]
fn invalid_base_art_fails() {
    assert!(BaseIcon::from_svg_data(b"not an svg").is_err());
}

#[test]
fn badge_is_drawn_bottom_right() {
    let mut composer = embedded_composer(Synthetic::identity());

    let icon = composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();

    // Text height 51, text width 20: background spans x 40..64, y 13..64.
    assert_eq!(icon.pixel(50, 40), Some(Rgba::BADGE.to_array()));
    assert_eq!(icon.pixel(63, 40), Some(Rgba::BADGE.to_array()));
    assert_ne!(icon.pixel(20, 40), Some(Rgba::BADGE.to_array()));

    let drawn = &composer.typesetter().drawn;
    assert_eq!(drawn.len(), 1);
    let (text, bounds) = &drawn[0];
    assert_eq!(text, "42");
    assert_eq!(
        *bounds,
        Bounds {
            x: 42.0,
            y: 13.0,
            width: 20.0,
            height: 51.0,
        }
    );

    // No dot: the top-right corner keeps whatever the art painted there.
    let plain = composer.compose(&IconRequest::plain(64)).unwrap();
    assert_eq!(icon.pixel(60, 3), plain.pixel(60, 3));
}

#[test]
fn font_fit_is_cached_per_height() {
    let mut composer = empty_composer(Synthetic::identity());

    composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();
    let queries = composer.typesetter().height_queries;
    assert_eq!(queries, 51);

    composer
        .compose(&IconRequest::with_badge(64, "7"))
        .unwrap();
    assert_eq!(composer.typesetter().height_queries, queries);
    assert_eq!(composer.fonts().len(), 1);

    let fit = composer.fonts().get(51).flatten().expect("fit for 51");
    assert_eq!(fit.point_size, 51);
    assert_eq!(fit.line_height, 51);
    assert_eq!(fit.family, "sans-serif");

    composer
        .compose(&IconRequest::with_badge(32, "7"))
        .unwrap();
    assert_eq!(composer.fonts().len(), 2);
}

#[test]
fn missing_fit_skips_badge() {
    let mut composer = empty_composer(Synthetic::tiny());

    let icon = composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();

    assert!(icon.pixels.iter().all(|&byte| byte == 0));
    assert!(composer.typesetter().drawn.is_empty());
    assert_eq!(composer.fonts().get(51), Some(None));

    // The miss is remembered as well.
    composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();
    assert_eq!(
        composer.typesetter().height_queries,
        icon_render::MAX_POINT_SIZE as usize
    );
}

#[test]
fn unmeasurable_family_skips_badge() {
    let mut composer = empty_composer(Synthetic::default());

    let icon = composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();

    assert!(icon.pixels.iter().all(|&byte| byte == 0));
    assert_eq!(composer.typesetter().height_queries, 1);
}

#[test]
fn dot_is_drawn_top_right() {
    let red = Rgba::rgb(255, 0, 0);
    let mut composer = empty_composer(Synthetic::identity());

    let icon = composer
        .compose(&IconRequest {
            size: 64,
            badge_text: None,
            dot_color: Some(red),
        })
        .unwrap();

    // Dot spans x 38.4..64, y 0..25.6, centered at (51.2, 12.8).
    assert_eq!(icon.pixel(51, 12), Some(red.to_array()));
    assert_eq!(icon.pixel(40, 23), Some([0, 0, 0, 0]));
    assert_eq!(icon.pixel(51, 30), Some([0, 0, 0, 0]));
    assert_eq!(icon.pixel(30, 12), Some([0, 0, 0, 0]));
    assert!(composer.typesetter().drawn.is_empty());
}

#[test]
fn empty_badge_behaves_as_no_badge() {
    let blue = Rgba::rgb(0, 0, 255);
    let mut composer = embedded_composer(Synthetic::identity());

    let with_empty = composer
        .compose(&IconRequest {
            size: 64,
            badge_text: Some(String::new()),
            dot_color: Some(blue),
        })
        .unwrap();
    let without = composer
        .compose(&IconRequest {
            size: 64,
            badge_text: None,
            dot_color: Some(blue),
        })
        .unwrap();

    assert_eq!(with_empty.pixels, without.pixels);
    assert_eq!(with_empty.pixel(51, 12), Some(blue.to_array()));
    assert!(composer.typesetter().drawn.is_empty());
    assert!(composer.fonts().is_empty());
}

#[test]
fn dot_is_drawn_over_badge() {
    let green = Rgba::rgb(0, 255, 0);
    let mut composer = empty_composer(Synthetic::identity());

    // A long badge reaches under the dot.
    let icon = composer
        .compose(&IconRequest {
            size: 64,
            badge_text: Some("1234".to_owned()),
            dot_color: Some(green),
        })
        .unwrap();

    assert_eq!(icon.pixel(51, 20), Some(green.to_array()));
    assert_eq!(icon.pixel(30, 40), Some(Rgba::BADGE.to_array()));
}

#[test]
fn bare_base_icon_matches_plain_composition() {
    let base = BaseIcon::embedded().expect("embedded icon should parse");
    let bare = base.to_icon_data(48).unwrap();

    let mut composer = embedded_composer(Synthetic::identity());
    let plain = composer.compose(&IconRequest::plain(48)).unwrap();

    assert_eq!(bare.pixels, plain.pixels);
    assert!(composer.fonts().is_empty());
}

#[test]
fn embedded_font_draws_visible_badge() {
    let base = BaseIcon::from_svg_data(EMPTY_SVG).expect("empty SVG should parse");
    let mut composer =
        Composer::with_typesetter(base, CosmicTypesetter::embedded(), "sans-serif");

    let icon = composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();

    let fit = composer
        .fonts()
        .get(51)
        .flatten()
        .cloned()
        .expect("embedded font should fit height 51");
    assert_eq!(fit.point_size, 33);
    assert_eq!(fit.line_height, 52);

    let text_width = CosmicTypesetter::embedded().text_width(&fit, "42");
    let layout =
        icon_render::geometry::badge_layout(64, text_width, fit.line_height as f32);
    assert_eq!(layout.text.y, 12.0);

    let mut accent = 0;
    let mut white = 0;
    for y in 0..64 {
        for x in 0..64 {
            match icon.pixel(x, y) {
                Some(pixel) if pixel == Rgba::BADGE.to_array() => accent += 1,
                Some(pixel) if pixel == Rgba::WHITE.to_array() => {
                    white += 1;
                    assert!(x as f32 >= layout.text.x.floor(), "glyph at x {x}");
                    assert!(y as f32 >= layout.text.y, "glyph at y {y}");
                }
                _ => {}
            }
        }
    }
    assert!(accent > 0);
    assert!(white > 0);
}

#[test]
fn default_composer_fits_sans_serif() {
    let mut composer = Composer::new("sans-serif").expect("embedded icon should parse");

    composer
        .compose(&IconRequest::with_badge(64, "42"))
        .unwrap();

    assert!(composer.fonts().get(51).flatten().is_some());
}
