//! Public one-call conversion API and unified error type.

use std::fmt;

use crate::brightness::{BrightnessError, BrightnessMap};
use crate::grid::{GridError, PixelGrid};
use crate::palette::{Palette, PaletteError};
use crate::ramp::{GlyphRamp, RampError};
use crate::render::render_html;

/// Unified error type for the ascii-art public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use ascii_art::{AsciiArtError, Palette};
///
/// fn build_palette() -> Result<Palette, AsciiArtError> {
///     let palette = Palette::uniform(32)?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsciiArtError {
    /// Glyph ramp validation error
    Ramp(RampError),
    /// Palette construction error
    Palette(PaletteError),
    /// Pixel grid validation error (empty image, buffer mismatch)
    Grid(GridError),
    /// Brightness map construction error (zero-pixel histogram)
    Brightness(BrightnessError),
}

impl AsciiArtError {
    /// True for errors caused by invalid input rather than
    /// misconfiguration (bad ramp or palette constants).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AsciiArtError::Grid(_) | AsciiArtError::Brightness(_)
        )
    }
}

impl fmt::Display for AsciiArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsciiArtError::Ramp(err) => write!(f, "ramp error: {}", err),
            AsciiArtError::Palette(err) => write!(f, "palette error: {}", err),
            AsciiArtError::Grid(err) => write!(f, "invalid image: {}", err),
            AsciiArtError::Brightness(err) => write!(f, "invalid image: {}", err),
        }
    }
}

impl std::error::Error for AsciiArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AsciiArtError::Ramp(err) => Some(err),
            AsciiArtError::Palette(err) => Some(err),
            AsciiArtError::Grid(err) => Some(err),
            AsciiArtError::Brightness(err) => Some(err),
        }
    }
}

impl From<RampError> for AsciiArtError {
    fn from(err: RampError) -> Self {
        AsciiArtError::Ramp(err)
    }
}

impl From<PaletteError> for AsciiArtError {
    fn from(err: PaletteError) -> Self {
        AsciiArtError::Palette(err)
    }
}

impl From<GridError> for AsciiArtError {
    fn from(err: GridError) -> Self {
        AsciiArtError::Grid(err)
    }
}

impl From<BrightnessError> for AsciiArtError {
    fn from(err: BrightnessError) -> Self {
        AsciiArtError::Brightness(err)
    }
}

/// Convert a pixel grid to a colorized ASCII art HTML document.
///
/// Builds the per-image brightness map from the grid's grayscale
/// channel, then renders every pixel as a styled `<span>` fragment.
/// Pure and deterministic: the same grid, ramp and palette always
/// produce byte-identical output. Fails as a whole; no partial
/// document is ever returned.
///
/// # Example
///
/// ```
/// use ascii_art::{convert, GlyphRamp, Palette, PixelGrid, Rgb};
///
/// let ramp = GlyphRamp::default();
/// let palette = Palette::default();
/// let grid = PixelGrid::new(1, 1, vec![Rgb::new(0, 0, 0)], vec![0]).unwrap();
///
/// let html = convert(&grid, &ramp, &palette).unwrap();
/// assert!(html.starts_with("<pre>"));
/// ```
pub fn convert(
    grid: &PixelGrid,
    ramp: &GlyphRamp,
    palette: &Palette,
) -> Result<String, AsciiArtError> {
    let map = BrightnessMap::build(grid.grayscale(), ramp)?;
    Ok(render_html(grid, &map, palette))
}
