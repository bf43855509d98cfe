//! Volume - The main label-volume container
//!
//! The `Volume` structure holds a 3D array of non-negative integer labels.
//! Label 0 is background.
//!
//! # Voxel layout
//!
//! - One `u32` per voxel regardless of depth
//! - Voxels are stored slice by slice, row by row:
//!   `index = (z * height + y) * width + x`
//! - Every stored value is bounded by [`VoxelDepth::max_value`]
//!
//! # Ownership model
//!
//! `Volume` uses `Arc` for cheap cloning (shared ownership).
//! To modify voxel data, convert to `VolumeMut` via [`Volume::try_into_mut`]
//! or [`Volume::to_mut`], then convert back with `Into<Volume>`.

mod access;
mod histogram;
mod mask;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Voxel depth (bits per voxel)
///
/// Bounds the range of values a volume may hold. Storage is always `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum VoxelDepth {
    /// 1-bit binary mask
    Bit1 = 1,
    /// 8-bit labels
    Bit8 = 8,
    /// 16-bit labels
    Bit16 = 16,
    /// 32-bit labels
    Bit32 = 32,
}

impl VoxelDepth {
    /// Create `VoxelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 1, 8, 16, or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(VoxelDepth::Bit1),
            8 => Ok(VoxelDepth::Bit8),
            16 => Ok(VoxelDepth::Bit16),
            32 => Ok(VoxelDepth::Bit32),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per voxel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum voxel value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            VoxelDepth::Bit32 => u32::MAX,
            _ => (1u32 << self.bits()) - 1,
        }
    }

    /// Smallest depth able to hold `value`.
    pub fn for_max_value(value: u32) -> Self {
        match value {
            0..=1 => VoxelDepth::Bit1,
            2..=0xff => VoxelDepth::Bit8,
            0x100..=0xffff => VoxelDepth::Bit16,
            _ => VoxelDepth::Bit32,
        }
    }
}

/// Internal volume data
#[derive(Debug)]
struct VolumeData {
    width: u32,
    height: u32,
    slices: u32,
    depth: VoxelDepth,
    data: Vec<u32>,
}

impl VolumeData {
    fn zeroed(width: u32, height: u32, slices: u32, depth: VoxelDepth) -> Self {
        let len = width as usize * height as usize * slices as usize;
        Self {
            width,
            height,
            slices,
            depth,
            data: vec![0u32; len],
        }
    }
}

/// Label volume
///
/// A 3D array indexed by (x, y, z). Cloning shares the voxel buffer.
///
/// # Examples
///
/// ```
/// use voxlabel_core::{Volume, VoxelDepth};
///
/// let vol = Volume::new(4, 3, 2, VoxelDepth::Bit32).unwrap();
/// assert_eq!(vol.dimensions(), (4, 3, 2));
/// assert_eq!(vol.voxel_count(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct Volume {
    inner: Arc<VolumeData>,
}

impl Volume {
    /// Create a zero-filled volume.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any extent is 0 or the voxel
    /// count does not fit in `u32`.
    pub fn new(width: u32, height: u32, slices: u32, depth: VoxelDepth) -> Result<Self> {
        Self::check_dimensions(width, height, slices)?;
        Ok(Volume {
            inner: Arc::new(VolumeData::zeroed(width, height, slices, depth)),
        })
    }

    /// Create a volume from raw voxel data in z/y/x raster order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for bad extents,
    /// [`Error::InvalidParameter`] if `data.len()` does not match, and
    /// [`Error::ValueOutOfRange`] if a value exceeds `depth`.
    pub fn from_data(
        width: u32,
        height: u32,
        slices: u32,
        depth: VoxelDepth,
        data: Vec<u32>,
    ) -> Result<Self> {
        Self::check_dimensions(width, height, slices)?;
        let expected = width as usize * height as usize * slices as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "voxel buffer holds {} values, {}x{}x{} volume needs {}",
                data.len(),
                width,
                height,
                slices,
                expected
            )));
        }
        let max = depth.max_value();
        if let Some(&value) = data.iter().find(|&&v| v > max) {
            return Err(Error::ValueOutOfRange {
                value,
                bits: depth.bits(),
            });
        }
        Ok(Volume {
            inner: Arc::new(VolumeData {
                width,
                height,
                slices,
                depth,
                data,
            }),
        })
    }

    fn check_dimensions(width: u32, height: u32, slices: u32) -> Result<()> {
        let total = u64::from(width) * u64::from(height) * u64::from(slices);
        if total == 0 || total > u64::from(u32::MAX) {
            return Err(Error::InvalidDimension {
                width,
                height,
                slices,
            });
        }
        Ok(())
    }

    /// Width (x extent).
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height (y extent).
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of slices (z extent).
    #[inline]
    pub fn slices(&self) -> u32 {
        self.inner.slices
    }

    /// `(width, height, slices)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.inner.width, self.inner.height, self.inner.slices)
    }

    /// Voxel depth.
    #[inline]
    pub fn depth(&self) -> VoxelDepth {
        self.inner.depth
    }

    /// Total number of voxels.
    #[inline]
    pub fn voxel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Raw voxel data in z/y/x raster order.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Number of strong references to the voxel buffer.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two volumes have the same extents (depth is not compared).
    pub fn same_shape(&self, other: &Volume) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Check if two volumes have the same extents and depth.
    pub fn sizes_equal(&self, other: &Volume) -> bool {
        self.same_shape(other) && self.inner.depth == other.inner.depth
    }

    /// Fail with [`Error::DimensionMismatch`] unless `other` has the same extents.
    pub fn check_same_shape(&self, other: &Volume) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            })
        }
    }

    /// Create a zero-filled volume with the same extents and the given depth.
    pub fn create_template(&self, depth: VoxelDepth) -> Self {
        Volume {
            inner: Arc::new(VolumeData::zeroed(
                self.inner.width,
                self.inner.height,
                self.inner.slices,
                depth,
            )),
        }
    }

    /// Create an independent copy of this volume.
    ///
    /// Unlike `clone()` which shares data via Arc, the copy owns its buffer.
    pub fn deep_clone(&self) -> Self {
        Volume {
            inner: Arc::new(self.copy_data()),
        }
    }

    /// Try to get mutable access to the voxel data.
    ///
    /// Succeeds only if there is exactly one reference to the buffer.
    pub fn try_into_mut(self) -> std::result::Result<VolumeMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(VolumeMut { inner: data }),
            Err(arc) => Err(Volume { inner: arc }),
        }
    }

    /// Create a mutable copy of this volume.
    pub fn to_mut(&self) -> VolumeMut {
        VolumeMut {
            inner: self.copy_data(),
        }
    }

    /// Take mutable ownership, copying only if the buffer is shared.
    pub fn into_mut(self) -> VolumeMut {
        self.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }

    /// Build a volume with this volume's extents around a buffer whose
    /// length and values have already been checked.
    fn with_data(&self, depth: VoxelDepth, data: Vec<u32>) -> Volume {
        debug_assert_eq!(data.len(), self.voxel_count());
        Volume {
            inner: Arc::new(VolumeData {
                width: self.inner.width,
                height: self.inner.height,
                slices: self.inner.slices,
                depth,
                data,
            }),
        }
    }

    fn copy_data(&self) -> VolumeData {
        VolumeData {
            width: self.inner.width,
            height: self.inner.height,
            slices: self.inner.slices,
            depth: self.inner.depth,
            data: self.inner.data.clone(),
        }
    }
}

/// Mutable volume
///
/// Allows modification of voxel data. Convert back to an immutable
/// [`Volume`] using `Into<Volume>`.
#[derive(Debug)]
pub struct VolumeMut {
    inner: VolumeData,
}

impl VolumeMut {
    /// Width (x extent).
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height (y extent).
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of slices (z extent).
    #[inline]
    pub fn slices(&self) -> u32 {
        self.inner.slices
    }

    /// `(width, height, slices)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.inner.width, self.inner.height, self.inner.slices)
    }

    /// Voxel depth.
    #[inline]
    pub fn depth(&self) -> VoxelDepth {
        self.inner.depth
    }

    /// Raw voxel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Mutable voxel data.
    ///
    /// Callers writing through this slice are responsible for keeping values
    /// within the volume depth.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<VolumeMut> for Volume {
    fn from(vm: VolumeMut) -> Self {
        Volume {
            inner: Arc::new(vm.inner),
        }
    }
}
