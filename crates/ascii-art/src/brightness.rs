//! Brightness-to-glyph mapping built from the image's own luminance
//! histogram.
//!
//! A fixed linear threshold table wastes most of the ramp on images that
//! are predominantly dark or light. Building the mapping from the
//! image's cumulative luminance distribution spreads the glyphs over the
//! brightness range the image actually uses.

use std::fmt;

use crate::ramp::GlyphRamp;

/// Error type for brightness map construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrightnessError {
    /// Zero pixels supplied; the CDF normalization would divide by zero
    EmptyHistogram,
}

impl fmt::Display for BrightnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrightnessError::EmptyHistogram => {
                write!(f, "cannot build brightness map from zero pixels")
            }
        }
    }
}

impl std::error::Error for BrightnessError {}

/// A total mapping from every 8-bit luminance level to one ramp glyph.
///
/// Stored as a fixed 256-entry array indexed directly by luminance, so
/// "every level resolves" is a structural guarantee rather than a
/// runtime lookup risk. Built fresh per image, immutable once built,
/// consumed only by the conversion that built it.
///
/// # Algorithm
///
/// Histogram the grayscale channel into 256 bins, take the cumulative
/// distribution (running count over total pixels, non-decreasing in
/// `[0, 1]`), then assign level `l` the glyph at
/// `floor(cdf[l] * (K - 1))` for a ramp of length K. Because the CDF is
/// non-decreasing, glyph indices are non-decreasing in luminance.
///
/// # Example
/// ```
/// use ascii_art::{BrightnessMap, GlyphRamp};
///
/// let ramp = GlyphRamp::default();
/// // All-black 2x2 image: the sole level's CDF is 1.0, so level 0 maps
/// // to the sparsest glyph.
/// let map = BrightnessMap::build(&[0, 0, 0, 0], &ramp).unwrap();
/// assert_eq!(map.glyph(0), '.');
/// ```
#[derive(Debug, Clone)]
pub struct BrightnessMap {
    glyphs: [char; 256],
}

impl BrightnessMap {
    /// Build the mapping from a grayscale pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`BrightnessError::EmptyHistogram`] when `gray` is
    /// empty. Callers constructing a [`PixelGrid`] never hit this
    /// (empty grids are rejected there), but the guard keeps the
    /// divide-by-zero explicit.
    ///
    /// [`PixelGrid`]: crate::PixelGrid
    pub fn build(gray: &[u8], ramp: &GlyphRamp) -> Result<Self, BrightnessError> {
        if gray.is_empty() {
            return Err(BrightnessError::EmptyHistogram);
        }

        let mut histogram = [0u64; 256];
        for &level in gray {
            histogram[level as usize] += 1;
        }

        let total = gray.len() as f64;
        let max_index = ramp.len() - 1;
        let mut glyphs = ['\0'; 256];
        let mut cumulative = 0u64;
        for (level, slot) in glyphs.iter_mut().enumerate() {
            cumulative += histogram[level];
            let cdf = cumulative as f64 / total;
            // cdf is in [0, 1] so the floor lands in [0, max_index];
            // the min() guards against float rounding above 1.0
            let index = ((cdf * max_index as f64) as usize).min(max_index);
            *slot = ramp.glyph(index);
        }

        Ok(Self { glyphs })
    }

    /// Glyph assigned to the given luminance level. Total: defined for
    /// every 8-bit input.
    #[inline]
    pub fn glyph(&self, level: u8) -> char {
        self.glyphs[level as usize]
    }
}
