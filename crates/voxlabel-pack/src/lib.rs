//! voxlabel-pack - Bit-depth repacking for voxlabel
//!
//! A corrected label volume can hold more distinct labels than a 16-bit
//! volume can represent. This crate splits such a volume into windows:
//! window `k` keeps the labels `1 + k*W ..= (k + 1)*W`, shifted onto
//! `1..=W`, and zeroes everything else. A [`ProvenanceTable`] records where
//! each input label went.
//!
//! # Examples
//!
//! ```
//! use voxlabel_pack::{pack_volume, PackOptions};
//! use voxlabel_core::{Volume, VoxelDepth};
//!
//! let vol = Volume::from_data(3, 1, 1, VoxelDepth::Bit32, vec![1, 65536, 70000]).unwrap();
//! let packed = pack_volume(&vol, &PackOptions::default()).unwrap();
//!
//! assert_eq!(packed.windows.len(), 2);
//! assert_eq!(packed.windows[1].volume.data(), &[0, 1, 4465]);
//!
//! let entry = packed.provenance.lookup(70000).unwrap();
//! assert_eq!((entry.window_index, entry.output_label), (1, 4465));
//! ```

pub mod error;
pub mod pack;
pub mod provenance;
pub mod window;

pub use voxlabel_core;

pub use error::{PackError, PackResult};
pub use pack::{PackOptions, PackedVolume, PackedWindow, WindowPacker, pack_volume, pack_windows};
pub use provenance::{ProvenanceEntry, ProvenanceTable, locate};
pub use window::{LabelWindow, window_count};
