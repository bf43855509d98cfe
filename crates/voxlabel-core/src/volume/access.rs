//! Voxel access functions
//!
//! Getting and setting individual voxels, and conversion between
//! (x, y, z) coordinates and linear buffer indices.

use super::{Volume, VolumeMut};
use crate::error::{Error, Result};

#[inline]
fn linear_index(dims: (u32, u32, u32), x: u32, y: u32, z: u32) -> Option<usize> {
    let (w, h, s) = dims;
    if x >= w || y >= h || z >= s {
        return None;
    }
    Some((z as usize * h as usize + y as usize) * w as usize + x as usize)
}

#[inline]
fn coords(dims: (u32, u32, u32), index: usize) -> (u32, u32, u32) {
    let w = dims.0 as usize;
    let h = dims.1 as usize;
    let x = index % w;
    let y = (index / w) % h;
    let z = index / (w * h);
    (x as u32, y as u32, z as u32)
}

impl Volume {
    /// Linear buffer index of (x, y, z), or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        linear_index(self.dimensions(), x, y, z)
    }

    /// Coordinates `(x, y, z)` of a linear buffer index.
    ///
    /// The index is not validated.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32, u32) {
        coords(self.dimensions(), index)
    }

    /// Check whether (x, y, z) lies inside the volume.
    #[inline]
    pub fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        self.index_of(x, y, z).is_some()
    }

    /// Get a voxel value at (x, y, z).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_voxel(&self, x: u32, y: u32, z: u32) -> Option<u32> {
        self.index_of(x, y, z).map(|i| self.data()[i])
    }

    /// Get a voxel value, failing with [`Error::IndexOutOfBounds`].
    pub fn voxel(&self, x: u32, y: u32, z: u32) -> Result<u32> {
        self.get_voxel(x, y, z)
            .ok_or_else(|| self.out_of_bounds(x, y, z))
    }

    /// Get a voxel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn get_voxel_unchecked(&self, x: u32, y: u32, z: u32) -> u32 {
        let (w, h, _) = self.dimensions();
        self.data()[(z as usize * h as usize + y as usize) * w as usize + x as usize]
    }

    pub(crate) fn out_of_bounds(&self, x: u32, y: u32, z: u32) -> Error {
        let (width, height, slices) = self.dimensions();
        Error::IndexOutOfBounds {
            x,
            y,
            z,
            width,
            height,
            slices,
        }
    }
}

impl VolumeMut {
    /// Linear buffer index of (x, y, z), or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        linear_index(self.dimensions(), x, y, z)
    }

    /// Coordinates `(x, y, z)` of a linear buffer index.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32, u32) {
        coords(self.dimensions(), index)
    }

    /// Get a voxel value at (x, y, z).
    pub fn get_voxel(&self, x: u32, y: u32, z: u32) -> Option<u32> {
        self.index_of(x, y, z).map(|i| self.data()[i])
    }

    /// Set a voxel value at (x, y, z).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::ValueOutOfRange`] if `val` exceeds the volume depth.
    pub fn set_voxel(&mut self, x: u32, y: u32, z: u32, val: u32) -> Result<()> {
        let depth = self.depth();
        if val > depth.max_value() {
            return Err(Error::ValueOutOfRange {
                value: val,
                bits: depth.bits(),
            });
        }
        let (width, height, slices) = self.dimensions();
        let index = self.index_of(x, y, z).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            z,
            width,
            height,
            slices,
        })?;
        self.data_mut()[index] = val;
        Ok(())
    }

    /// Set a voxel value without bounds or depth checking.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn set_voxel_unchecked(&mut self, x: u32, y: u32, z: u32, val: u32) {
        let (w, h, _) = self.dimensions();
        let index = (z as usize * h as usize + y as usize) * w as usize + x as usize;
        self.data_mut()[index] = val;
    }
}

#[cfg(test)]
mod tests {
    use crate::{Volume, VoxelDepth};

    #[test]
    fn test_index_roundtrip() {
        let vol = Volume::new(4, 3, 2, VoxelDepth::Bit8).unwrap();
        assert_eq!(vol.index_of(0, 0, 0), Some(0));
        assert_eq!(vol.index_of(3, 0, 0), Some(3));
        assert_eq!(vol.index_of(0, 1, 0), Some(4));
        assert_eq!(vol.index_of(0, 0, 1), Some(12));
        assert_eq!(vol.index_of(4, 0, 0), None);
        assert_eq!(vol.coords_of(23), (3, 2, 1));
        assert_eq!(vol.coords_of(13), (1, 0, 1));
    }

    #[test]
    fn test_set_and_get() {
        let mut vm = Volume::new(3, 3, 3, VoxelDepth::Bit8).unwrap().to_mut();
        vm.set_voxel(1, 2, 0, 9).unwrap();
        assert!(vm.set_voxel(3, 0, 0, 1).is_err());
        assert!(vm.set_voxel(0, 0, 0, 300).is_err());

        let vol: Volume = vm.into();
        assert_eq!(vol.get_voxel(1, 2, 0), Some(9));
        assert_eq!(vol.get_voxel_unchecked(1, 2, 0), 9);
        assert_eq!(vol.get_voxel(0, 0, 3), None);
        assert!(vol.voxel(0, 3, 0).is_err());
    }
}
