//! Synthetic fixture volumes

use crate::error::{TestError, TestResult};
use voxlabel_core::{Volume, VolumeMut, VoxelBox, VoxelDepth};

/// Build a volume from a list of `(x, y, z, value)` voxels; all other
/// voxels are background.
pub fn make_volume(
    width: u32,
    height: u32,
    slices: u32,
    depth: VoxelDepth,
    voxels: &[(u32, u32, u32, u32)],
) -> TestResult<Volume> {
    let mut vm = Volume::new(width, height, slices, depth)?.to_mut();
    for &(x, y, z, v) in voxels {
        vm.set_voxel(x, y, z, v)?;
    }
    Ok(vm.into())
}

/// Fill every voxel of `region` with `value`.
pub fn fill_box(vm: &mut VolumeMut, region: VoxelBox, value: u32) -> TestResult<()> {
    let (x1, y1, z1) = region.max_corner();
    for z in region.z..=z1 {
        for y in region.y..=y1 {
            for x in region.x..=x1 {
                vm.set_voxel(x, y, z, value)?;
            }
        }
    }
    Ok(())
}

/// Build a volume from a list of `(box, value)` blocks, later blocks
/// overwriting earlier ones.
pub fn make_blocks(
    width: u32,
    height: u32,
    slices: u32,
    depth: VoxelDepth,
    blocks: &[(VoxelBox, u32)],
) -> TestResult<Volume> {
    let mut vm = Volume::new(width, height, slices, depth)?.to_mut();
    for &(region, value) in blocks {
        fill_box(&mut vm, region, value)?;
    }
    Ok(vm.into())
}

/// Random label volume.
///
/// Each voxel is foreground with probability `fill_percent / 100` and then
/// takes a label drawn uniformly from `1..=max_label`. Small `max_label`
/// values produce many adjacent equal-valued voxels; large values produce
/// mostly singleton components.
pub fn random_label_volume(
    width: u32,
    height: u32,
    slices: u32,
    max_label: u32,
    fill_percent: u32,
) -> TestResult<Volume> {
    if max_label == 0 || fill_percent > 100 {
        return Err(TestError::InvalidFixture(format!(
            "max_label = {max_label}, fill_percent = {fill_percent}"
        )));
    }
    let depth = VoxelDepth::for_max_value(max_label).max(VoxelDepth::Bit8);
    let mut vm = Volume::new(width, height, slices, depth)?.to_mut();
    for v in vm.data_mut() {
        if rand::random_range(0..100u32) < fill_percent {
            *v = rand::random_range(1..=max_label);
        }
    }
    Ok(vm.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_blocks_overwrites() {
        let vol = make_blocks(
            4,
            4,
            2,
            VoxelDepth::Bit8,
            &[
                (
                    VoxelBox {
                        x: 0,
                        y: 0,
                        z: 0,
                        w: 2,
                        h: 2,
                        d: 2,
                    },
                    3,
                ),
                (VoxelBox::from_voxel(1, 1, 1), 4),
            ],
        )
        .unwrap();
        assert_eq!(vol.count_value(3), 7);
        assert_eq!(vol.get_voxel(1, 1, 1), Some(4));
    }

    #[test]
    fn test_random_volume_bounds() {
        let vol = random_label_volume(6, 5, 4, 3, 50).unwrap();
        assert!(vol.max_label() <= 3);
        assert!(random_label_volume(2, 2, 2, 0, 50).is_err());
    }
}
