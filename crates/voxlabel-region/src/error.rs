//! Error types for voxlabel-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxlabel_core::Error),

    /// Unsupported voxel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Seed outside the volume
    #[error("seed ({x}, {y}, {z}) lies outside the volume")]
    SeedOutOfBounds { x: u32, y: u32, z: u32 },

    /// Requested label does not occur in the volume
    #[error("label {0} not found in volume")]
    LabelNotFound(u32),

    /// Volumes that must share extents do not
    #[error("dimension mismatch: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32, u32),
        actual: (u32, u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
