//! Error types for palette construction.

use std::fmt;

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// Grid step must be in 1..=255
    InvalidStep {
        /// The rejected step value
        step: u16,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidStep { step } => {
                write!(f, "invalid palette step {} (must be 1..=255)", step)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
