//! Fixed color palette and nearest-color quantization.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, DEFAULT_STEP};
