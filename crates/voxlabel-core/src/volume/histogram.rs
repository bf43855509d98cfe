//! Label census
//!
//! Whole-volume queries over the set of labels present.

use super::Volume;
use std::collections::HashMap;

impl Volume {
    /// Largest voxel value (0 for an all-background volume).
    pub fn max_label(&self) -> u32 {
        self.data().iter().copied().max().unwrap_or(0)
    }

    /// Number of nonzero voxels.
    pub fn count_nonzero(&self) -> usize {
        self.data().iter().filter(|&&v| v != 0).count()
    }

    /// Number of voxels equal to `value`.
    pub fn count_value(&self, value: u32) -> usize {
        self.data().iter().filter(|&&v| v == value).count()
    }

    /// Check whether any voxel equals `value`.
    pub fn contains_label(&self, value: u32) -> bool {
        self.data().contains(&value)
    }

    /// Distinct nonzero labels in ascending order.
    pub fn unique_labels(&self) -> Vec<u32> {
        let mut labels: Vec<u32> = self.data().iter().copied().filter(|&v| v != 0).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Voxel count per distinct nonzero label, sorted by label.
    pub fn label_counts(&self) -> Vec<(u32, usize)> {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for &v in self.data() {
            if v != 0 {
                *counts.entry(v).or_insert(0) += 1;
            }
        }
        let mut counts: Vec<(u32, usize)> = counts.into_iter().collect();
        counts.sort_unstable_by_key(|&(label, _)| label);
        counts
    }
}

#[cfg(test)]
mod tests {
    use crate::{Volume, VoxelDepth};

    #[test]
    fn test_label_census() {
        let vol =
            Volume::from_data(3, 2, 1, VoxelDepth::Bit16, vec![0, 7, 7, 300, 0, 7]).unwrap();
        assert_eq!(vol.max_label(), 300);
        assert_eq!(vol.count_nonzero(), 4);
        assert_eq!(vol.count_value(7), 3);
        assert!(vol.contains_label(300));
        assert!(!vol.contains_label(8));
        assert_eq!(vol.unique_labels(), vec![7, 300]);
        assert_eq!(vol.label_counts(), vec![(7, 3), (300, 1)]);
    }

    #[test]
    fn test_empty_volume_census() {
        let vol = Volume::new(2, 2, 2, VoxelDepth::Bit32).unwrap();
        assert_eq!(vol.max_label(), 0);
        assert!(vol.unique_labels().is_empty());
        assert!(vol.label_counts().is_empty());
    }
}
