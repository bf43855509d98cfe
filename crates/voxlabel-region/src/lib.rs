//! voxlabel-region - Region processing for voxlabel
//!
//! This crate provides the label-space operations of the correction
//! pipeline:
//!
//! - **Connected component relabeling** - Splitting every input label into
//!   its connected pieces, with dense output labels
//! - **Component statistics** - Voxel count, centroid and bounding box
//! - **Seed claims** - Resolving ordered seeds into claims, collisions and
//!   orphans
//! - **Label selection** - Keeping claimed labels, replacing label sets
//! - **Separability** - Whether seeds on one label fall on distinct pieces
//!
//! # Examples
//!
//! ## Relabeling a volume
//!
//! ```
//! use voxlabel_region::{label_components, ConnectivityType};
//! use voxlabel_core::{Volume, VoxelDepth};
//!
//! let vol = Volume::new(8, 8, 4, VoxelDepth::Bit16).unwrap();
//! let mut vol_mut = vol.try_into_mut().unwrap();
//!
//! // One input label in two disconnected pieces
//! vol_mut.set_voxel(1, 1, 0, 300).unwrap();
//! vol_mut.set_voxel(2, 1, 0, 300).unwrap();
//! vol_mut.set_voxel(6, 6, 3, 300).unwrap();
//!
//! let vol: Volume = vol_mut.into();
//!
//! let labeled = label_components(&vol, ConnectivityType::TwentySixWay).unwrap();
//! assert_eq!(labeled.num_components(), 2);
//! assert_eq!(labeled.representative(2), Some(300));
//! ```
//!
//! ## Claiming components with seeds
//!
//! ```
//! use voxlabel_region::{assign_seeds, label_components, retain_labels, ConnectivityType};
//! use voxlabel_core::{Seed, Volume, VoxelDepth};
//!
//! let vol = Volume::from_data(4, 1, 1, VoxelDepth::Bit8, vec![5, 0, 5, 6]).unwrap();
//! let labeled = label_components(&vol, ConnectivityType::default()).unwrap();
//!
//! let seeds = [Seed::new(3, 0, 0), Seed::new(2, 0, 0)];
//! let claims = assign_seeds(labeled.labels(), &vol, &seeds).unwrap();
//! assert_eq!(claims.claimed_labels(), vec![2, 3]);
//!
//! let filtered = retain_labels(labeled.labels(), &claims.retain_set()).unwrap();
//! assert_eq!(filtered.data(), &[0, 0, 2, 3]);
//! ```

pub mod claim;
pub mod conncomp;
pub mod error;
pub mod label;
pub mod select;
pub mod separate;

// Re-export core types
pub use voxlabel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{
    ConnectedComponent, ConnectivityType, LabeledVolume, count_components,
    find_connected_components, label_components,
};

// Re-export label types and functions
pub use label::{
    Centroid, ComponentStats, ComponentTable, get_component_bounds, get_component_sizes,
    get_component_stats,
};

// Re-export claim types and functions
pub use claim::{ClaimTable, DesiredLabel, SeedOutcome, SeedRecord, assign_seeds, desired_labels};

pub use select::{RetainSet, remove_labels, replace_labels, retain_labels};
pub use separate::{LabelSubset, Separability, extract_label_subset, label_separability};
