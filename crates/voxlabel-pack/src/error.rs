//! Error types for voxlabel-pack

use thiserror::Error;

/// Errors that can occur while repacking a label volume
#[derive(Debug, Error)]
pub enum PackError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxlabel_core::Error),

    /// Input depth is not wider than the output depth
    #[error("unsupported depth: cannot pack {input}-bit labels into {output}-bit windows")]
    UnsupportedDepth { input: u32, output: u32 },

    /// Window width outside 1..=max
    #[error("invalid window width {width}: must be between 1 and {max}")]
    InvalidWindowWidth { width: u32, max: u32 },
}

/// Result type for pack operations
pub type PackResult<T> = Result<T, PackError>;
