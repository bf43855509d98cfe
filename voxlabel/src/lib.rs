//! voxlabel - Seed-driven correction of 3D label volumes
//!
//! Segmentation tools often emit label volumes in which one label covers
//! several disconnected objects, or in which spurious objects carry labels
//! of their own. Given the seed points the tool started from, voxlabel
//! repairs such a volume:
//!
//! 1. **Relabel** - every connected piece of every input label gets its
//!    own label
//! 2. **Assign** - each seed claims the piece under it; later seeds on an
//!    already claimed piece are collisions
//! 3. **Filter** - pieces no seed claimed are zeroed
//! 4. **Pack** - the corrected 32-bit labels are split into 16-bit windows
//!
//! # Example
//!
//! ```
//! use voxlabel::{run_pipeline, CancelToken, PipelineOptions, Seed, Volume, VoxelDepth};
//!
//! let vol = Volume::from_data(4, 1, 1, VoxelDepth::Bit16, vec![3, 0, 3, 3]).unwrap();
//! let seeds = [Seed::new(2, 0, 0)];
//!
//! let outcome = run_pipeline(&vol, &seeds, &PipelineOptions::default(), &CancelToken::new())
//!     .unwrap();
//! let report = outcome.report().unwrap();
//! assert_eq!(report.corrected.data(), &[0, 0, 2, 2]);
//! ```

pub mod cancel;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod shape;
pub mod store;

// Re-export core types (primary data structures used everywhere)
pub use voxlabel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use voxlabel_pack as pack;
pub use voxlabel_region as region;

pub use cancel::CancelToken;
pub use error::{PipelineError, PipelineResult};
pub use options::PipelineOptions;
pub use pipeline::{
    CorrectionReport, PackPlan, PipelineOutcome, Stage, run_pipeline, run_pipeline_with,
};
pub use shape::{BasicShapeStatistics, MeasureRow, MeasureTable, ShapeStatistics};
pub use store::{
    MemoryStore, VolumeStore, correct_file, correct_file_with, corrected_path, export_report,
    window_path,
};
