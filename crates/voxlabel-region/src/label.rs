//! Component statistics
//!
//! Per-label measurements gathered in one pass over a label volume:
//! voxel count, centroid and bounding box. These are the only shape
//! measurements computed in-crate.

use crate::error::RegionResult;
use std::collections::HashMap;
use voxlabel_core::{Volume, VoxelBox};

/// Mean voxel coordinate of a component, in (x, y, z) order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Component statistics
#[derive(Debug, Clone)]
pub struct ComponentStats {
    /// Component label
    pub label: u32,
    /// Bounding box
    pub bounds: VoxelBox,
    /// Number of voxels
    pub voxel_count: u64,
    /// Mean voxel coordinate
    pub centroid: Centroid,
}

#[derive(Clone, Copy)]
struct Accum {
    count: u64,
    sum_x: u64,
    sum_y: u64,
    sum_z: u64,
    bounds: VoxelBox,
}

impl Accum {
    fn new(x: u32, y: u32, z: u32) -> Self {
        Self {
            count: 0,
            sum_x: 0,
            sum_y: 0,
            sum_z: 0,
            bounds: VoxelBox::from_voxel(x, y, z),
        }
    }

    fn add(&mut self, x: u32, y: u32, z: u32) {
        self.count += 1;
        self.sum_x += u64::from(x);
        self.sum_y += u64::from(y);
        self.sum_z += u64::from(z);
        self.bounds.include(x, y, z);
    }

    fn finish(self, label: u32) -> ComponentStats {
        let n = self.count as f64;
        ComponentStats {
            label,
            bounds: self.bounds,
            voxel_count: self.count,
            centroid: Centroid {
                x: self.sum_x as f64 / n,
                y: self.sum_y as f64 / n,
                z: self.sum_z as f64 / n,
            },
        }
    }
}

/// Statistics for every label of a volume, ordered by label.
///
/// Lookup is constant time when labels are dense (as produced by
/// [`crate::label_components`]) and logarithmic otherwise.
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    stats: Vec<ComponentStats>,
}

impl ComponentTable {
    /// Gather statistics for every nonzero label in `labeled`.
    ///
    /// Uses a dense accumulator indexed by label when the largest label does
    /// not exceed the voxel count, and a hashed one otherwise.
    pub fn from_labels(labeled: &Volume) -> Self {
        let max_label = labeled.max_label() as usize;
        let stats = if max_label <= labeled.voxel_count() {
            let mut acc: Vec<Option<Accum>> = vec![None; max_label];
            for (i, &label) in labeled.data().iter().enumerate() {
                if label == 0 {
                    continue;
                }
                let (x, y, z) = labeled.coords_of(i);
                acc[label as usize - 1]
                    .get_or_insert_with(|| Accum::new(x, y, z))
                    .add(x, y, z);
            }
            acc.into_iter()
                .enumerate()
                .filter_map(|(i, a)| a.map(|a| a.finish(i as u32 + 1)))
                .collect()
        } else {
            let mut acc: HashMap<u32, Accum> = HashMap::new();
            for (i, &label) in labeled.data().iter().enumerate() {
                if label == 0 {
                    continue;
                }
                let (x, y, z) = labeled.coords_of(i);
                acc.entry(label)
                    .or_insert_with(|| Accum::new(x, y, z))
                    .add(x, y, z);
            }
            let mut stats: Vec<ComponentStats> =
                acc.into_iter().map(|(label, a)| a.finish(label)).collect();
            stats.sort_by_key(|s| s.label);
            stats
        };
        Self { stats }
    }

    /// Statistics of `label`, if present.
    pub fn get(&self, label: u32) -> Option<&ComponentStats> {
        let direct = (label as usize)
            .checked_sub(1)
            .and_then(|i| self.stats.get(i))
            .filter(|s| s.label == label);
        direct.or_else(|| {
            self.stats
                .binary_search_by_key(&label, |s| s.label)
                .ok()
                .map(|i| &self.stats[i])
        })
    }

    /// Number of labels present.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Check whether no label is present.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Iterate over statistics in label order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentStats> {
        self.stats.iter()
    }

    /// Consume the table.
    pub fn into_vec(self) -> Vec<ComponentStats> {
        self.stats
    }
}

/// Get detailed statistics for all labels
///
/// # Arguments
///
/// * `labeled` - Label volume of any depth
///
/// # Returns
///
/// A vector of component statistics, ordered by label.
pub fn get_component_stats(labeled: &Volume) -> RegionResult<Vec<ComponentStats>> {
    Ok(ComponentTable::from_labels(labeled).into_vec())
}

/// Get voxel count for each label, ordered by label.
pub fn get_component_sizes(labeled: &Volume) -> RegionResult<Vec<u64>> {
    Ok(ComponentTable::from_labels(labeled)
        .iter()
        .map(|s| s.voxel_count)
        .collect())
}

/// Get bounding boxes for each label, ordered by label.
pub fn get_component_bounds(labeled: &Volume) -> RegionResult<Vec<VoxelBox>> {
    Ok(ComponentTable::from_labels(labeled)
        .iter()
        .map(|s| s.bounds)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlabel_core::VoxelDepth;
    use voxlabel_test::make_volume;

    #[test]
    fn test_get_component_stats() {
        // L-shape of label 1 and a single voxel of label 2
        let vol = make_volume(
            4,
            4,
            2,
            VoxelDepth::Bit32,
            &[(0, 0, 0, 1), (2, 0, 0, 1), (1, 1, 1, 1), (3, 3, 1, 2)],
        )
        .unwrap();

        let stats = get_component_stats(&vol).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].voxel_count, 3);
        assert!((stats[0].centroid.x - 1.0).abs() < 1e-9);
        assert!((stats[0].centroid.y - 1.0 / 3.0).abs() < 1e-9);
        assert!((stats[0].centroid.z - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!((stats[0].bounds.w, stats[0].bounds.h, stats[0].bounds.d), (3, 2, 2));
        assert_eq!(stats[1].label, 2);
        assert_eq!(stats[1].voxel_count, 1);
    }

    #[test]
    fn test_sparse_labels_use_hashed_table() {
        let vol = make_volume(2, 2, 1, VoxelDepth::Bit32, &[(0, 0, 0, 900_000), (1, 1, 0, 7)])
            .unwrap();
        let table = ComponentTable::from_labels(&vol);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(7).map(|s| s.voxel_count), Some(1));
        assert_eq!(table.get(900_000).map(|s| s.bounds.x), Some(0));
        assert!(table.get(8).is_none());
        assert_eq!(get_component_sizes(&vol).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_empty_volume() {
        let vol = Volume::new(3, 3, 3, VoxelDepth::Bit32).unwrap();
        assert!(ComponentTable::from_labels(&vol).is_empty());
        assert!(get_component_bounds(&vol).unwrap().is_empty());
    }
}
