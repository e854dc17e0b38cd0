//! Placement of the badge and the status dot.

/// Gap between the badge text and the badge edge, horizontal and vertical.
pub const BADGE_MARGIN: (f32, f32) = (2.0, 0.0);

/// Corner radius of the badge background.
pub const BADGE_CORNER_RADIUS: f32 = 10.0;

/// Badge text height relative to the icon size.
pub const BADGE_TEXT_HEIGHT_RATIO: f64 = 0.8;

/// Dot diameter relative to the icon size.
pub const DOT_DIAMETER_RATIO: f32 = 0.4;

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub x: f32,

    /// Top edge.
    pub y: f32,

    /// Width.
    pub width: f32,

    /// Height.
    pub height: f32,
}

impl Bounds {
    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Where the badge text and its background go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeLayout {
    /// The text box, flush with the bottom-right corner minus the margin.
    pub text: Bounds,

    /// The rounded background, the text box grown by the margin.
    pub background: Bounds,
}

/// The pixel height the badge text should have on an icon of `size`.
pub fn badge_text_height(size: u32) -> u32 {
    (f64::from(size) * BADGE_TEXT_HEIGHT_RATIO) as u32
}

/// Lay out a badge for text of the given measured size.
pub fn badge_layout(size: u32, text_width: f32, text_height: f32) -> BadgeLayout {
    let size = size as f32;
    let (margin_x, margin_y) = BADGE_MARGIN;

    let text = Bounds {
        x: size - text_width - margin_x,
        y: size - text_height - margin_y,
        width: text_width,
        height: text_height,
    };
    let background = Bounds {
        x: text.x - margin_x,
        y: text.y - margin_y,
        width: text.width + margin_x * 2.0,
        height: text.height + margin_y * 2.0,
    };

    BadgeLayout { text, background }
}

/// The bounding box of the status dot.
pub fn dot_bounds(size: u32) -> Bounds {
    let size = size as f32;
    let diameter = size * DOT_DIAMETER_RATIO;
    Bounds {
        x: size - diameter,
        y: 0.0,
        width: diameter,
        height: diameter,
    }
}

/// A rounded rectangle path, the radius clamped to half the shorter side.
pub fn rounded_rect(bounds: Bounds, radius: f32) -> Option<tiny_skia::Path> {
    // Control point offset for a quarter circle approximated by a cubic.
    const KAPPA: f32 = 0.552_284_8;

    let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0).max(0.0);
    let k = r * KAPPA;
    let (left, top, right, bottom) = (bounds.x, bounds.y, bounds.right(), bounds.bottom());

    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}
