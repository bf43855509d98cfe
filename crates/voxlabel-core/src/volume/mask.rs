//! Masks and value remapping
//!
//! Elementwise transforms that produce a new volume with the same extents.

use super::{Volume, VoxelDepth};
use crate::error::{Error, Result};

impl Volume {
    /// Binary mask of voxels equal to `value`.
    ///
    /// Returns a 1-bit volume holding 1 where the voxel equals `value`
    /// and 0 elsewhere.
    pub fn mask_equal(&self, value: u32) -> Volume {
        let data = self.data().iter().map(|&v| u32::from(v == value)).collect();
        self.with_data(VoxelDepth::Bit1, data)
    }

    /// Binary mask of nonzero voxels.
    pub fn mask_nonzero(&self) -> Volume {
        let data = self.data().iter().map(|&v| u32::from(v != 0)).collect();
        self.with_data(VoxelDepth::Bit1, data)
    }

    /// Apply `f` to every voxel, producing a volume of the given depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] for the first mapped value that
    /// does not fit `depth`.
    pub fn remap<F>(&self, depth: VoxelDepth, mut f: F) -> Result<Volume>
    where
        F: FnMut(u32) -> u32,
    {
        let max = depth.max_value();
        let mut data = Vec::with_capacity(self.voxel_count());
        for &v in self.data() {
            let mapped = f(v);
            if mapped > max {
                return Err(Error::ValueOutOfRange {
                    value: mapped,
                    bits: depth.bits(),
                });
            }
            data.push(mapped);
        }
        Ok(self.with_data(depth, data))
    }

    /// Change the declared depth, keeping voxel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if the largest value does not fit.
    pub fn convert_depth(&self, depth: VoxelDepth) -> Result<Volume> {
        let max = self.max_label();
        if max > depth.max_value() {
            return Err(Error::ValueOutOfRange {
                value: max,
                bits: depth.bits(),
            });
        }
        Ok(self.with_data(depth, self.data().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Volume, VoxelDepth};

    fn sample() -> Volume {
        Volume::from_data(3, 1, 2, VoxelDepth::Bit32, vec![0, 5, 70000, 5, 0, 2]).unwrap()
    }

    #[test]
    fn test_mask_equal() {
        let mask = sample().mask_equal(5);
        assert_eq!(mask.depth(), VoxelDepth::Bit1);
        assert_eq!(mask.data(), &[0, 1, 0, 1, 0, 0]);
        assert_eq!(sample().mask_nonzero().data(), &[0, 1, 1, 1, 0, 1]);
    }

    #[test]
    fn test_remap_checks_range() {
        let vol = sample();
        let halved = vol.remap(VoxelDepth::Bit32, |v| v / 2).unwrap();
        assert_eq!(halved.data(), &[0, 2, 35000, 2, 0, 1]);
        assert!(vol.remap(VoxelDepth::Bit16, |v| v).is_err());
        let clipped = vol.remap(VoxelDepth::Bit8, |v| v.min(255)).unwrap();
        assert_eq!(clipped.depth(), VoxelDepth::Bit8);
        assert_eq!(clipped.data(), &[0, 5, 255, 5, 0, 2]);
    }

    #[test]
    fn test_convert_depth() {
        let vol = Volume::from_data(2, 1, 1, VoxelDepth::Bit32, vec![3, 200]).unwrap();
        assert_eq!(vol.convert_depth(VoxelDepth::Bit8).unwrap().depth(), VoxelDepth::Bit8);
        assert!(vol.convert_depth(VoxelDepth::Bit1).is_err());
    }
}
