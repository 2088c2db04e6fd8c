//! ascii-art: colorized ASCII art conversion for raster images
//!
//! Converts a small decoded image into an HTML document where each
//! pixel becomes one character drawn from a density-ordered glyph
//! ramp, with a background color snapped to a fixed 512-color palette
//! and a text color derived from the source pixel.
//!
//! # Quick Start
//!
//! ```
//! use ascii_art::{convert, GlyphRamp, Palette, PixelGrid, Rgb};
//!
//! let ramp = GlyphRamp::default();
//! let palette = Palette::default();
//!
//! let pixels = vec![Rgb::new(200, 40, 40); 4];
//! let gray = vec![90u8; 4];
//! let grid = PixelGrid::new(2, 2, pixels, gray).unwrap();
//!
//! let html = convert(&grid, &ramp, &palette).unwrap();
//! assert!(html.starts_with("<pre>") && html.ends_with("</pre>"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! decoded image (RGB + grayscale channel, at most 100x50)
//!     |
//!     +--> grayscale histogram --> CDF --> BrightnessMap
//!     |         (adapts the glyph ramp to this image's tones)
//!     |
//!     v
//! per pixel: glyph = BrightnessMap[(r+g+b)/3]
//!            background = Palette::nearest(pixel)
//!            text = pixel + 50 per channel, clamped
//!     |
//!     v
//! <pre> <span style=...>c</span> ... <br> ... </pre>
//! ```
//!
//! Two distinct brightness computations are involved and deliberately
//! NOT unified: the [`BrightnessMap`] is built from the decoder's
//! grayscale (luma-weighted) channel, while the per-pixel glyph lookup
//! uses the plain integer channel mean. Changing either alters the
//! visual output.
//!
//! The crate is pure and synchronous: one conversion owns its
//! [`PixelGrid`] and [`BrightnessMap`]; only the [`Palette`] is meant
//! to be shared (build it once at startup, pass by shared reference).

pub mod api;
pub mod brightness;
pub mod color;
pub mod grid;
pub mod palette;
pub mod ramp;
pub mod render;

#[cfg(test)]
mod domain_tests;

pub use api::{convert, AsciiArtError};
pub use brightness::{BrightnessError, BrightnessMap};
pub use color::Rgb;
pub use grid::{GridError, PixelGrid};
pub use palette::{Palette, PaletteError, DEFAULT_STEP};
pub use ramp::{GlyphRamp, RampError, DEFAULT_RAMP};
pub use render::render_html;
