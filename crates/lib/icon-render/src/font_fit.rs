//! Picking a font size whose line height matches a pixel height.

use std::collections::HashMap;

use crate::Typesetter;

/// The largest point size tried when fitting.
pub const MAX_POINT_SIZE: u32 = 99;

/// A bold font resolved for a desired line height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFit {
    /// Font family name.
    pub family: String,

    /// Point size of the font.
    pub point_size: u32,

    /// Line height of the font at `point_size`, in pixels.
    pub line_height: u32,
}

/// Find the first point size whose line height reaches `desired`.
///
/// Sizes are scanned upwards from 1. A size is accepted when its height
/// equals `desired`, or when it exceeds `desired` while the previous size
/// was still below it. Returns the point size and its height.
///
/// `height_at` returning `None` means the face cannot be measured at all,
/// and nothing fits.
pub fn fit_point_size<F>(desired: u32, mut height_at: F) -> Option<(u32, u32)>
where
    F: FnMut(u32) -> Option<u32>,
{
    let mut last_height = 0;

    for point_size in 1..=MAX_POINT_SIZE {
        let height = height_at(point_size)?;
        if height == desired || (last_height < desired && height > desired) {
            return Some((point_size, height));
        }
        last_height = height;
    }

    None
}

/// Resolve a bold font of `family` whose line height matches `desired`.
pub fn fit<T>(typesetter: &mut T, family: &str, desired: u32) -> Option<FontFit>
where
    T: Typesetter + ?Sized,
{
    let fit = fit_point_size(desired, |point_size| {
        typesetter.line_height(family, point_size)
    });

    match fit {
        Some((point_size, line_height)) => {
            tracing::info!(
                message = "Found a suitable font for the tray icon",
                %family,
                %desired,
                %line_height,
                %point_size
            );
            Some(FontFit {
                family: family.to_owned(),
                point_size,
                line_height,
            })
        }
        None => {
            tracing::warn!(
                message = "Cannot find a suitable font for the tray icon",
                %family,
                %desired
            );
            None
        }
    }
}

/// Fit outcomes keyed by the desired line height.
///
/// Both fits and misses are remembered. The family is not part of the key,
/// so a cache must only ever be used with one family.
#[derive(Debug, Default)]
pub struct FontFitCache {
    /// Outcomes by desired height.
    fits: HashMap<u32, Option<FontFit>>,
}

impl FontFitCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the fit for `desired`, fitting and remembering it on first use.
    pub fn get_or_fit<T>(
        &mut self,
        typesetter: &mut T,
        family: &str,
        desired: u32,
    ) -> Option<&FontFit>
    where
        T: Typesetter + ?Sized,
    {
        self.fits
            .entry(desired)
            .or_insert_with(|| fit(typesetter, family, desired))
            .as_ref()
    }

    /// The remembered outcome for `desired`, if it was ever fitted.
    pub fn get(&self, desired: u32) -> Option<Option<&FontFit>> {
        self.fits.get(&desired).map(Option::as_ref)
    }

    /// Number of remembered heights.
    pub fn len(&self) -> usize {
        self.fits.len()
    }

    /// Whether nothing has been fitted yet.
    pub fn is_empty(&self) -> bool {
        self.fits.is_empty()
    }
}
