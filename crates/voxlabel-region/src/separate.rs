//! Label separability and label subsets
//!
//! A label is separable for a group of seeds when the seeds fall on
//! distinct connected pieces of that label's mask.

use crate::claim::check_seed;
use crate::conncomp::{ConnectivityType, label_components};
use crate::error::{RegionError, RegionResult};
use std::collections::HashSet;
use voxlabel_core::{Seed, Volume};

/// Separability of one label with respect to a list of seeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separability {
    /// `separable[i]` is true iff seed `i` is the first seed on its piece
    pub separable: Vec<bool>,
    /// Piece id under each seed, 0 for seeds off the label
    pub component_ids: Vec<u32>,
}

impl Separability {
    /// True when every seed lies on its own piece.
    pub fn all_separable(&self) -> bool {
        self.separable.iter().all(|&s| s)
    }
}

/// Check whether `seeds` fall on distinct connected pieces of `target`
///
/// The mask of voxels equal to `target` is labeled under `connectivity`
/// and each seed is given the piece id under it. Seeds off the mask get
/// id 0, which is treated like any other id: only the first such seed is
/// separable.
///
/// # Errors
///
/// Returns [`RegionError::LabelNotFound`] if no voxel equals `target`, and
/// [`RegionError::SeedOutOfBounds`] for a seed outside the volume.
pub fn label_separability(
    volume: &Volume,
    target: u32,
    seeds: &[Seed],
    connectivity: ConnectivityType,
) -> RegionResult<Separability> {
    if !volume.contains_label(target) {
        return Err(RegionError::LabelNotFound(target));
    }
    let indices = seeds
        .iter()
        .map(|seed| check_seed(volume, seed))
        .collect::<RegionResult<Vec<usize>>>()?;

    let pieces = label_components(&volume.mask_equal(target), connectivity)?;
    let piece_data = pieces.labels().data();

    let component_ids: Vec<u32> = indices.iter().map(|&i| piece_data[i]).collect();
    let mut seen = HashSet::with_capacity(component_ids.len());
    let separable = component_ids.iter().map(|&id| seen.insert(id)).collect();

    Ok(Separability {
        separable,
        component_ids,
    })
}

/// A volume restricted to some labels, with the seeds that land on them.
#[derive(Debug, Clone)]
pub struct LabelSubset {
    pub volume: Volume,
    pub seeds: Vec<Seed>,
}

/// Keep only the voxels whose value is in `labels`
///
/// Seeds are kept, in order, when they land on a retained voxel.
///
/// # Errors
///
/// Returns [`RegionError::LabelNotFound`] for the first requested label
/// that does not occur in `volume`, and [`RegionError::SeedOutOfBounds`]
/// for a seed outside the volume.
pub fn extract_label_subset(
    volume: &Volume,
    labels: &[u32],
    seeds: &[Seed],
) -> RegionResult<LabelSubset> {
    let present = volume.unique_labels();
    for &label in labels {
        if label != 0 && present.binary_search(&label).is_err() {
            return Err(RegionError::LabelNotFound(label));
        }
    }

    let wanted: HashSet<u32> = labels.iter().copied().collect();
    let subset = volume.remap(volume.depth(), |v| if wanted.contains(&v) { v } else { 0 })?;

    let mut kept = Vec::new();
    for seed in seeds {
        let index = check_seed(&subset, seed)?;
        if subset.data()[index] != 0 {
            kept.push(*seed);
        }
    }

    Ok(LabelSubset {
        volume: subset,
        seeds: kept,
    })
}
