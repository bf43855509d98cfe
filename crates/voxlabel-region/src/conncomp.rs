//! Connected component analysis
//!
//! This module finds and labels connected components in label volumes.
//! Labeling is value-sensitive: two neighboring voxels belong to the same
//! component only if they hold the same nonzero value, so touching regions
//! with different input labels are never merged, and one input label split
//! into disconnected pieces yields one output label per piece.
//!
//! Components are grown breadth-first from seeds taken in raster order
//! (z, then y, then x), which makes the output labels dense (1..=K) and
//! deterministic.

use crate::error::RegionResult;
use std::collections::VecDeque;
use voxlabel_core::{Volume, VoxelBox, VoxelDepth};

/// Connectivity type for component analysis
///
/// On a single-slice volume `SixWay` behaves as 2D 4-connectivity and
/// `TwentySixWay` as 2D 8-connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// Face neighbors only
    SixWay,
    /// Face and edge neighbors
    EighteenWay,
    /// Face, edge and corner neighbors
    #[default]
    TwentySixWay,
}

impl ConnectivityType {
    /// Neighbor offsets `(dx, dy, dz)` for this connectivity.
    pub fn offsets(self) -> Vec<(i32, i32, i32)> {
        let max_nonzero = match self {
            ConnectivityType::SixWay => 1,
            ConnectivityType::EighteenWay => 2,
            ConnectivityType::TwentySixWay => 3,
        };
        let mut offsets = Vec::with_capacity(26);
        for dz in -1..=1i32 {
            for dy in -1..=1i32 {
                for dx in -1..=1i32 {
                    let nonzero = [dx, dy, dz].iter().filter(|&&d| d != 0).count();
                    if nonzero > 0 && nonzero <= max_nonzero {
                        offsets.push((dx, dy, dz));
                    }
                }
            }
        }
        offsets
    }
}

/// A connected component in a label volume
#[derive(Debug, Clone)]
pub struct ConnectedComponent {
    /// Label assigned to this component
    pub label: u32,
    /// Input value shared by every voxel of the component
    pub value: u32,
    /// Number of voxels in this component
    pub voxel_count: u64,
    /// Bounding box of this component
    pub bounds: VoxelBox,
}

/// Result of relabeling a volume into connected components.
#[derive(Debug, Clone)]
pub struct LabeledVolume {
    labels: Volume,
    representatives: Vec<u32>,
}

impl LabeledVolume {
    /// The 32-bit label volume; 0 is background, components are 1..=K.
    pub fn labels(&self) -> &Volume {
        &self.labels
    }

    /// Consume the result, keeping only the label volume.
    pub fn into_labels(self) -> Volume {
        self.labels
    }

    /// Number of components K.
    pub fn num_components(&self) -> usize {
        self.representatives.len()
    }

    /// Input value of component `label`, or `None` for 0 and labels > K.
    pub fn representative(&self, label: u32) -> Option<u32> {
        let index = (label as usize).checked_sub(1)?;
        self.representatives.get(index).copied()
    }

    /// Input value of every component, indexed by `label - 1`.
    pub fn representatives(&self) -> &[u32] {
        &self.representatives
    }
}

#[inline]
fn neighbor_index(
    dims: (u32, u32, u32),
    (x, y, z): (u32, u32, u32),
    (dx, dy, dz): (i32, i32, i32),
) -> Option<usize> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    let nz = z.checked_add_signed(dz)?;
    let (w, h, s) = dims;
    if nx >= w || ny >= h || nz >= s {
        return None;
    }
    Some((nz as usize * h as usize + ny as usize) * w as usize + nx as usize)
}

/// Label all value-sensitive connected components of a volume
///
/// Every maximal set of connected voxels sharing the same nonzero value
/// receives its own label. Labels are dense, starting at 1, and assigned in
/// the raster order of each component's first voxel. An all-zero volume
/// yields zero components.
///
/// # Arguments
///
/// * `volume` - Input label volume of any depth
/// * `connectivity` - Neighborhood used to join voxels
///
/// # Returns
///
/// The 32-bit label volume together with each component's input value.
pub fn label_components(
    volume: &Volume,
    connectivity: ConnectivityType,
) -> RegionResult<LabeledVolume> {
    let dims = volume.dimensions();
    let data = volume.data();
    let offsets = connectivity.offsets();

    let mut labels = vec![0u32; data.len()];
    let mut representatives = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..data.len() {
        let value = data[start];
        if value == 0 || labels[start] != 0 {
            continue;
        }

        representatives.push(value);
        let label = representatives.len() as u32;
        labels[start] = label;
        queue.push_back(start);

        while let Some(i) = queue.pop_front() {
            let pos = volume.coords_of(i);
            for &offset in &offsets {
                let Some(n) = neighbor_index(dims, pos, offset) else {
                    continue;
                };
                if labels[n] == 0 && data[n] == value {
                    labels[n] = label;
                    queue.push_back(n);
                }
            }
        }
    }

    let (w, h, s) = dims;
    let labels = Volume::from_data(w, h, s, VoxelDepth::Bit32, labels)?;

    Ok(LabeledVolume {
        labels,
        representatives,
    })
}

/// Find all value-sensitive connected components in a volume
///
/// Returns one entry per component, ordered by label, with its input value,
/// voxel count and bounding box.
pub fn find_connected_components(
    volume: &Volume,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let labeled = label_components(volume, connectivity)?;

    let mut components: Vec<Option<ConnectedComponent>> = vec![None; labeled.num_components()];
    let labels = labeled.labels();

    for (i, &label) in labels.data().iter().enumerate() {
        if label == 0 {
            continue;
        }
        let (x, y, z) = labels.coords_of(i);
        let value = labeled.representatives()[label as usize - 1];
        let comp = components[label as usize - 1].get_or_insert_with(|| ConnectedComponent {
            label,
            value,
            voxel_count: 0,
            bounds: VoxelBox::from_voxel(x, y, z),
        });
        comp.voxel_count += 1;
        comp.bounds.include(x, y, z);
    }

    Ok(components.into_iter().flatten().collect())
}

/// Count value-sensitive connected components
pub fn count_components(volume: &Volume, connectivity: ConnectivityType) -> RegionResult<usize> {
    Ok(label_components(volume, connectivity)?.num_components())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlabel_test::make_volume;

    #[test]
    fn test_offsets_count() {
        assert_eq!(ConnectivityType::SixWay.offsets().len(), 6);
        assert_eq!(ConnectivityType::EighteenWay.offsets().len(), 18);
        assert_eq!(ConnectivityType::TwentySixWay.offsets().len(), 26);
    }

    #[test]
    fn test_corner_voxels_not_adjacent() {
        // Two voxels valued 5 at opposite corners of a 3x3x3 volume
        let vol = make_volume(3, 3, 3, VoxelDepth::Bit8, &[(0, 0, 0, 5), (2, 2, 2, 5)]).unwrap();
        let labeled = label_components(&vol, ConnectivityType::TwentySixWay).unwrap();
        assert_eq!(labeled.num_components(), 2);
        assert_eq!(labeled.labels().get_voxel(0, 0, 0), Some(1));
        assert_eq!(labeled.labels().get_voxel(2, 2, 2), Some(2));
        assert_eq!(labeled.representative(1), Some(5));
        assert_eq!(labeled.representative(2), Some(5));
        assert_eq!(labeled.representative(3), None);
        assert_eq!(labeled.representative(0), None);
    }

    #[test]
    fn test_diagonal_depends_on_connectivity() {
        let vol = make_volume(2, 2, 2, VoxelDepth::Bit8, &[(0, 0, 0, 1), (1, 1, 1, 1)]).unwrap();
        assert_eq!(count_components(&vol, ConnectivityType::TwentySixWay).unwrap(), 1);
        assert_eq!(count_components(&vol, ConnectivityType::EighteenWay).unwrap(), 2);

        let vol = make_volume(2, 2, 1, VoxelDepth::Bit8, &[(0, 0, 0, 1), (1, 1, 0, 1)]).unwrap();
        assert_eq!(count_components(&vol, ConnectivityType::EighteenWay).unwrap(), 1);
        assert_eq!(count_components(&vol, ConnectivityType::SixWay).unwrap(), 2);
    }

    #[test]
    fn test_adjacent_different_values_stay_separate() {
        let vol = make_volume(3, 1, 1, VoxelDepth::Bit8, &[(0, 0, 0, 4), (1, 0, 0, 4), (2, 0, 0, 9)])
            .unwrap();
        let comps = find_connected_components(&vol, ConnectivityType::TwentySixWay).unwrap();
        assert_eq!(comps.len(), 2);
        assert_eq!((comps[0].value, comps[0].voxel_count), (4, 2));
        assert_eq!((comps[1].value, comps[1].voxel_count), (9, 1));
        assert_eq!(comps[0].bounds.w, 2);
    }

    #[test]
    fn test_empty_volume() {
        let vol = Volume::new(4, 4, 4, VoxelDepth::Bit32).unwrap();
        let labeled = label_components(&vol, ConnectivityType::default()).unwrap();
        assert_eq!(labeled.num_components(), 0);
        assert_eq!(labeled.labels().max_label(), 0);
        assert_eq!(labeled.labels().depth(), VoxelDepth::Bit32);
    }
}
