//! Error types for voxlabel

use std::path::PathBuf;
use thiserror::Error;
use voxlabel_pack::PackError;
use voxlabel_region::RegionError;

/// Errors that can occur while running or exporting a correction
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voxlabel_core::Error),

    /// Relabeling, claim or filtering error
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// Packing error
    #[error("pack error: {0}")]
    Pack(#[from] PackError),

    /// Volume store failure
    #[error("store error at {}: {message}", .path.display())]
    Store { path: PathBuf, message: String },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
