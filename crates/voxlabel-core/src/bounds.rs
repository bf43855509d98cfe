//! Axis-aligned voxel boxes

/// Axis-aligned box in voxel coordinates.
///
/// `(x, y, z)` is the minimum corner; `w`, `h`, `d` are extents in voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelBox {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub w: u32,
    pub h: u32,
    pub d: u32,
}

impl VoxelBox {
    /// Box covering a single voxel.
    pub fn from_voxel(x: u32, y: u32, z: u32) -> Self {
        Self {
            x,
            y,
            z,
            w: 1,
            h: 1,
            d: 1,
        }
    }

    /// Grow the box to include (x, y, z).
    pub fn include(&mut self, x: u32, y: u32, z: u32) {
        let (x1, y1, z1) = self.max_corner();
        let (x0, y0, z0) = (self.x.min(x), self.y.min(y), self.z.min(z));
        let (x1, y1, z1) = (x1.max(x), y1.max(y), z1.max(z));
        *self = Self {
            x: x0,
            y: y0,
            z: z0,
            w: x1 - x0 + 1,
            h: y1 - y0 + 1,
            d: z1 - z0 + 1,
        };
    }

    /// Inclusive maximum corner.
    pub fn max_corner(&self) -> (u32, u32, u32) {
        (self.x + self.w - 1, self.y + self.h - 1, self.z + self.d - 1)
    }

    /// Number of voxels covered by the box.
    pub fn volume(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h) * u64::from(self.d)
    }

    /// Check whether (x, y, z) lies inside the box.
    pub fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        let (x1, y1, z1) = self.max_corner();
        (self.x..=x1).contains(&x) && (self.y..=y1).contains(&y) && (self.z..=z1).contains(&z)
    }
}
