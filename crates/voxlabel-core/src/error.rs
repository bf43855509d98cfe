//! Error types for voxlabel-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant carries the offending value or coordinate so that a failed
//! precondition can be diagnosed from the message alone.

use thiserror::Error;

/// voxlabel-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid volume dimensions
    #[error("invalid volume dimensions: {width}x{height}x{slices}")]
    InvalidDimension { width: u32, height: u32, slices: u32 },

    /// Invalid voxel depth
    #[error("invalid voxel depth: {0} bits")]
    InvalidDepth(u32),

    /// Value does not fit the voxel depth of the volume
    #[error("value {value} out of range for {bits}-bit volume")]
    ValueOutOfRange { value: u32, bits: u32 },

    /// Coordinate outside the volume
    #[error("voxel ({x}, {y}, {z}) out of bounds for {width}x{height}x{slices} volume")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        z: u32,
        width: u32,
        height: u32,
        slices: u32,
    },

    /// Volume dimension mismatch
    #[error("dimension mismatch: expected {}x{}x{}, got {}x{}x{}", .expected.0, .expected.1, .expected.2, .actual.0, .actual.1, .actual.2)]
    DimensionMismatch {
        expected: (u32, u32, u32),
        actual: (u32, u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed seed text
    #[error("seed parse error on line {line}: {message}")]
    SeedParse { line: usize, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for voxlabel-core operations
pub type Result<T> = std::result::Result<T, Error>;
