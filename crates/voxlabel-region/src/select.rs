//! Label selection
//!
//! Keeps or replaces whole labels of a volume. [`retain_labels`] zeroes
//! every label outside a [`RetainSet`] with a dense lookup table;
//! [`replace_labels`] handles arbitrary, possibly sparse, label sets with a
//! hashed lookup.

use crate::error::RegionResult;
use std::collections::HashSet;
use voxlabel_core::Volume;

/// Set of labels to keep, stored as a dense table indexed by label.
///
/// Label 0 (background) is never a member; it is kept implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetainSet {
    keep: Vec<bool>,
    len: usize,
}

impl RetainSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding `labels`.
    pub fn from_labels<I: IntoIterator<Item = u32>>(labels: I) -> Self {
        let mut set = Self::new();
        for label in labels {
            set.insert(label);
        }
        set
    }

    /// Add `label`; returns false if it was already present or is 0.
    pub fn insert(&mut self, label: u32) -> bool {
        if label == 0 {
            return false;
        }
        let i = label as usize;
        if i >= self.keep.len() {
            self.keep.resize(i + 1, false);
        }
        if self.keep[i] {
            return false;
        }
        self.keep[i] = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, label: u32) -> bool {
        self.keep.get(label as usize).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending order.
    pub fn labels(&self) -> Vec<u32> {
        self.keep
            .iter()
            .enumerate()
            .filter(|&(_, &k)| k)
            .map(|(label, _)| label as u32)
            .collect()
    }
}

/// Zero every label not in `retain`
///
/// Output has the same extents and depth as `labeled`. Background and
/// retained labels are copied unchanged.
pub fn retain_labels(labeled: &Volume, retain: &RetainSet) -> RegionResult<Volume> {
    let filtered = labeled.remap(labeled.depth(), |v| {
        if v == 0 || retain.contains(v) { v } else { 0 }
    })?;
    Ok(filtered)
}

/// Set every voxel whose value is in `labels` to `value`
///
/// # Errors
///
/// Returns [`voxlabel_core::Error::ValueOutOfRange`] (wrapped) if `value`
/// does not fit the volume depth.
pub fn replace_labels(volume: &Volume, labels: &[u32], value: u32) -> RegionResult<Volume> {
    let targets: HashSet<u32> = labels.iter().copied().collect();
    let replaced = volume.remap(volume.depth(), |v| {
        if targets.contains(&v) { value } else { v }
    })?;
    Ok(replaced)
}

/// Zero every voxel whose value is in `labels`.
pub fn remove_labels(volume: &Volume, labels: &[u32]) -> RegionResult<Volume> {
    replace_labels(volume, labels, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use voxlabel_core::VoxelDepth;

    fn sample() -> Volume {
        Volume::from_data(3, 2, 1, VoxelDepth::Bit32, vec![1, 2, 3, 0, 2, 5]).unwrap()
    }

    #[test]
    fn test_retain_set() {
        let mut set = RetainSet::from_labels([4, 2, 4]);
        assert_eq!(set.len(), 2);
        assert!(!set.insert(0));
        assert!(set.insert(9));
        assert!(set.contains(9));
        assert!(!set.contains(3));
        assert!(!set.contains(1_000_000));
        assert_eq!(set.labels(), vec![2, 4, 9]);
    }

    #[test]
    fn test_retain_labels() {
        let filtered = retain_labels(&sample(), &RetainSet::from_labels([2, 5])).unwrap();
        assert_eq!(filtered.data(), &[0, 2, 0, 0, 2, 5]);
        assert_eq!(filtered.depth(), VoxelDepth::Bit32);

        let empty = retain_labels(&sample(), &RetainSet::new()).unwrap();
        assert_eq!(empty.max_label(), 0);
    }

    #[test]
    fn test_replace_labels() {
        let vol = sample();
        let merged = replace_labels(&vol, &[1, 3], 7).unwrap();
        assert_eq!(merged.data(), &[7, 2, 7, 0, 2, 5]);
        assert_eq!(remove_labels(&vol, &[2]).unwrap().data(), &[1, 0, 3, 0, 0, 5]);

        let small = Volume::from_data(2, 1, 1, VoxelDepth::Bit8, vec![1, 2]).unwrap();
        assert!(matches!(
            replace_labels(&small, &[1], 300),
            Err(RegionError::Core(voxlabel_core::Error::ValueOutOfRange { value: 300, .. }))
        ));
    }
}
