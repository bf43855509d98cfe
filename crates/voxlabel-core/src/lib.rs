//! voxlabel Core - Basic data structures for label-volume processing
//!
//! This crate provides the fundamental data structures shared by the
//! voxlabel crates:
//!
//! - [`Volume`] / [`VolumeMut`] - 3D label volume (immutable / mutable)
//! - [`VoxelDepth`] - Value range of a volume
//! - [`VoxelBox`] - Axis-aligned box in voxel coordinates
//! - [`Seed`] - Ordered seed coordinates and their text format

pub mod bounds;
pub mod error;
pub mod seed;
pub mod volume;

pub use bounds::VoxelBox;
pub use error::{Error, Result};
pub use seed::{Seed, parse_seeds, read_seeds};
pub use volume::{Volume, VolumeMut, VoxelDepth};
