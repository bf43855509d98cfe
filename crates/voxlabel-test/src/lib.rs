//! voxlabel-test - Regression test support for voxlabel
//!
//! This crate provides the shared pieces of the voxlabel regression tests:
//!
//! - [`RegParams`]: accumulates comparisons and reports every failure at
//!   the end of a test instead of stopping at the first one
//! - Fixture builders for small synthetic label volumes
//!
//! # Usage
//!
//! ```ignore
//! use voxlabel_test::RegParams;
//!
//! let mut rp = RegParams::new("conncomp");
//! rp.compare_values(2.0, labeled.num_components() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
mod volumes;

pub use error::{TestError, TestResult};
pub use params::RegParams;
pub use volumes::{fill_box, make_blocks, make_volume, random_label_volume};
