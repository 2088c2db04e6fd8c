//! 8-bit RGB color type
//!
//! The conversion pipeline works entirely in 8-bit sRGB; there is no
//! linear-light or perceptual color space involved. Distances are plain
//! squared Euclidean over the raw channel values.

use std::fmt;

/// An 8-bit RGB color.
///
/// Used for source pixels, palette entries and the styled output colors.
///
/// # Example
/// ```
/// use ascii_art::Rgb;
/// let c = Rgb::new(255, 128, 0);
/// assert_eq!(c.css(), "rgb(255,128,0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance to another color.
    ///
    /// `(Δr)² + (Δg)² + (Δb)²` over the raw 8-bit channels. The maximum
    /// possible value is `3 * 255²`, well within `u32`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Integer mean of the three channels.
    ///
    /// This is the simple channel average used to pick a glyph for a
    /// pixel. It is intentionally NOT the same as the luma weighting an
    /// image decoder applies when deriving the grayscale channel; the two
    /// brightness paths are kept separate on purpose.
    #[inline]
    pub fn channel_mean(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }

    /// Add `amount` to every channel, saturating at 255.
    ///
    /// Used to derive the text color from the source pixel so the glyph
    /// stays distinguishable against its quantized background.
    #[inline]
    pub fn brighten(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }

    /// CSS `rgb(R,G,B)` string: decimal channels, comma-separated,
    /// no spaces.
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
