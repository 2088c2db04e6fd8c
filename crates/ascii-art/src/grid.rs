//! Pixel grid: the decoded, resized image handed to the converter.

use std::fmt;

use crate::color::Rgb;

/// Error type for pixel grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Zero-width or zero-height image
    EmptyImage,
    /// Buffer length does not match width * height
    DimensionMismatch {
        /// Expected number of pixels (width * height)
        expected: usize,
        /// Actual RGB buffer length
        rgb: usize,
        /// Actual grayscale buffer length
        gray: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyImage => write!(f, "image has zero pixels"),
            GridError::DimensionMismatch {
                expected,
                rgb,
                gray,
            } => write!(
                f,
                "buffer length mismatch: expected {} pixels, got {} rgb and {} gray",
                expected, rgb, gray
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A decoded image: row-major RGB pixels plus a parallel grayscale
/// channel.
///
/// The grayscale channel is supplied by the caller (the image decoder's
/// luma conversion) rather than derived here. The renderer uses the
/// plain channel mean to look up glyphs while the brightness map is
/// built from this grayscale channel; the two paths are intentionally
/// separate.
///
/// A grid is owned by a single conversion and discarded afterwards.
///
/// # Example
/// ```
/// use ascii_art::{PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(2, 1, vec![Rgb::new(0, 0, 0); 2], vec![0; 2]).unwrap();
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    rgb: Vec<Rgb>,
    gray: Vec<u8>,
}

impl PixelGrid {
    /// Create a grid from row-major RGB and grayscale buffers.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyImage`] if either dimension is zero and
    /// [`GridError::DimensionMismatch`] if either buffer length differs
    /// from `width * height`.
    pub fn new(
        width: u32,
        height: u32,
        rgb: Vec<Rgb>,
        gray: Vec<u8>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyImage);
        }
        let expected = width as usize * height as usize;
        if rgb.len() != expected || gray.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                rgb: rgb.len(),
                gray: gray.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgb,
            gray,
        })
    }

    /// Grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels. Never zero.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.rgb.len()
    }

    /// Row-major RGB pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.rgb
    }

    /// Row-major grayscale channel.
    #[inline]
    pub fn grayscale(&self) -> &[u8] {
        &self.gray
    }

    /// Iterate over rows of RGB pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.rgb.chunks_exact(self.width as usize)
    }
}
