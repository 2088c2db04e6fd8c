//! Uniform-grid palette with brute-force nearest-color matching.

use super::error::PaletteError;
use crate::color::Rgb;

/// Default grid step: 8 values per channel, 512 colors total.
pub const DEFAULT_STEP: u16 = 32;

/// A fixed set of RGB colors sampled on a uniform 3-D grid.
///
/// The palette is built once at process startup and shared read-only
/// across all conversions; it is never mutated after construction, so
/// concurrent readers need no synchronization (put it behind an `Arc`
/// in server state).
///
/// # Generation order
///
/// Entries are generated red-outer, green-middle, blue-inner, each
/// channel ascending from 0 in steps of `step`. [`nearest()`] breaks
/// distance ties in favor of the first minimal candidate in this
/// order, which makes quantization fully deterministic.
///
/// # Performance
///
/// [`nearest()`] is a brute-force O(n) scan. With the default 512
/// entries and at most 100x50 pixels per image this is the dominant
/// conversion cost but still far below a millisecond per image. Since
/// the palette is itself a uniform grid, nearest-color lookup could be
/// replaced with per-channel rounding; the scan is kept because it is
/// the reference behavior and the tie-break order falls out of it
/// directly.
///
/// [`nearest()`]: Palette::nearest
///
/// # Example
/// ```
/// use ascii_art::{Palette, Rgb};
///
/// let palette = Palette::uniform(32).unwrap();
/// assert_eq!(palette.len(), 512);
/// assert_eq!(palette.nearest(Rgb::new(10, 10, 10)), Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    step: u16,
}

impl Palette {
    /// Build a palette sampling every channel at multiples of `step`.
    ///
    /// `step = 32` yields 8 values per channel (0, 32, ..., 224) and
    /// 512 colors total.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidStep`] when `step` is 0 or
    /// greater than 255.
    pub fn uniform(step: u16) -> Result<Self, PaletteError> {
        if step == 0 || step > 255 {
            return Err(PaletteError::InvalidStep { step });
        }
        let per_channel = (0u16..256).step_by(step as usize).count();
        let mut colors = Vec::with_capacity(per_channel.pow(3));
        for r in (0u16..256).step_by(step as usize) {
            for g in (0u16..256).step_by(step as usize) {
                for b in (0u16..256).step_by(step as usize) {
                    colors.push(Rgb::new(r as u8, g as u8, b as u8));
                }
            }
        }
        Ok(Self { colors, step })
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: `uniform()` produces at least one color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The grid step this palette was built with.
    #[inline]
    pub fn step(&self) -> u16 {
        self.step
    }

    /// All palette entries in generation order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// True if `color` is an exact member of the palette.
    pub fn contains(&self, color: Rgb) -> bool {
        self.colors.contains(&color)
    }

    /// Find the palette entry nearest to `pixel` under squared
    /// Euclidean distance.
    ///
    /// Ties go to the first minimal candidate in generation order
    /// (strict `<` comparison in the scan).
    #[inline]
    pub fn nearest(&self, pixel: Rgb) -> Rgb {
        let mut best = self.colors[0];
        let mut best_dist = pixel.distance_squared(best);

        for &candidate in &self.colors[1..] {
            let dist = pixel.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }

        best
    }
}

impl Default for Palette {
    /// The fixed 512-color palette with step 32.
    fn default() -> Self {
        // DEFAULT_STEP is in range
        Self::uniform(DEFAULT_STEP).unwrap()
    }
}
