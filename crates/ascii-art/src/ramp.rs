//! Glyph ramp: the ordered character set used for brightness rendering.

use std::fmt;

/// Default ramp, densest to sparsest. The space character is
/// deliberately excluded: a space span would render as a bare colored
/// block with no glyph on top.
pub const DEFAULT_RAMP: &str = "@%#*+=-:.";

/// Error type for glyph ramp validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RampError {
    /// No glyphs provided
    EmptyRamp,
    /// The same glyph appears more than once
    DuplicateGlyph {
        /// The repeated glyph
        glyph: char,
    },
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampError::EmptyRamp => write!(f, "glyph ramp cannot be empty"),
            RampError::DuplicateGlyph { glyph } => {
                write!(f, "duplicate glyph {:?} in ramp", glyph)
            }
        }
    }
}

impl std::error::Error for RampError {}

/// An ordered sequence of single characters, from visually densest to
/// visually sparsest.
///
/// The ramp is fixed for the lifetime of the process; brightness maps
/// index into it by position. Construction validates that the ramp is
/// non-empty and that no two entries collapse to the same character.
///
/// # Example
/// ```
/// use ascii_art::GlyphRamp;
///
/// let ramp = GlyphRamp::default();
/// assert_eq!(ramp.len(), 9);
/// assert_eq!(ramp.glyph(0), '@');
/// assert_eq!(ramp.glyph(8), '.');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string of glyphs, ordered densest first.
    ///
    /// # Errors
    ///
    /// Returns [`RampError::EmptyRamp`] for an empty string and
    /// [`RampError::DuplicateGlyph`] if any character repeats.
    pub fn new(glyphs: &str) -> Result<Self, RampError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(RampError::EmptyRamp);
        }
        for (i, &g) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(&g) {
                return Err(RampError::DuplicateGlyph { glyph: g });
            }
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: empty ramps are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph at the given ramp index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Brightness maps only ever produce
    /// indices in `[0, len())`.
    #[inline]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }

    /// Position of a glyph in the ramp, if present. Used by tests to
    /// check index monotonicity.
    pub fn position(&self, glyph: char) -> Option<usize> {
        self.glyphs.iter().position(|&g| g == glyph)
    }
}

impl Default for GlyphRamp {
    /// The fixed reference ramp `"@%#*+=-:."`.
    fn default() -> Self {
        // DEFAULT_RAMP is non-empty and duplicate-free
        Self::new(DEFAULT_RAMP).unwrap()
    }
}
