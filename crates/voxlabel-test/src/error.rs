//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture volume could not be built
    #[error("failed to build fixture volume: {0}")]
    VolumeBuild(#[from] voxlabel_core::Error),

    /// Fixture parameters are inconsistent
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
