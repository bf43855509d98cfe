//! Bit-depth packing
//!
//! Splits a label volume whose labels may exceed the output depth into
//! several windowed volumes of that depth. Window volumes are produced one
//! at a time by [`WindowPacker`], so a caller that writes each window out
//! before asking for the next never holds more than one of them.

use crate::error::{PackError, PackResult};
use crate::provenance::ProvenanceTable;
use crate::window::{LabelWindow, window_count};
use voxlabel_core::{Volume, VoxelDepth};

/// Options for packing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackOptions {
    /// Number of input labels per window
    pub window_width: u32,
    /// Depth of the window volumes
    pub output_depth: VoxelDepth,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            window_width: 65535,
            output_depth: VoxelDepth::Bit16,
        }
    }
}

impl PackOptions {
    /// Options for windows of the given depth, as wide as the depth allows.
    pub fn new(output_depth: VoxelDepth) -> Self {
        Self {
            window_width: output_depth.max_value(),
            output_depth,
        }
    }

    /// Set the window width
    pub fn with_window_width(mut self, width: u32) -> Self {
        self.window_width = width;
        self
    }

    /// Set the output depth
    pub fn with_output_depth(mut self, depth: VoxelDepth) -> Self {
        self.output_depth = depth;
        self
    }

    /// Check the options against an input depth.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidWindowWidth`] unless
    /// `1 <= window_width <= output_depth.max_value()`, and
    /// [`PackError::UnsupportedDepth`] unless `input` is wider than the
    /// output depth.
    pub fn validate(&self, input: VoxelDepth) -> PackResult<()> {
        let max = self.output_depth.max_value();
        if self.window_width == 0 || self.window_width > max {
            return Err(PackError::InvalidWindowWidth {
                width: self.window_width,
                max,
            });
        }
        if input <= self.output_depth {
            return Err(PackError::UnsupportedDepth {
                input: input.bits(),
                output: self.output_depth.bits(),
            });
        }
        Ok(())
    }
}

/// One windowed volume.
#[derive(Debug, Clone)]
pub struct PackedWindow {
    /// Label range this volume covers
    pub window: LabelWindow,
    /// Windowed labels, at the output depth
    pub volume: Volume,
}

impl PackedWindow {
    pub fn index(&self) -> usize {
        self.window.index
    }
}

/// Iterator producing window volumes in window order.
#[derive(Debug)]
pub struct WindowPacker<'a> {
    source: &'a Volume,
    options: PackOptions,
    next: usize,
    count: usize,
}

impl WindowPacker<'_> {
    /// Number of windows the volume needs.
    pub fn window_count(&self) -> usize {
        self.count
    }

    /// Provenance of every label of the source volume.
    pub fn provenance(&self) -> ProvenanceTable {
        ProvenanceTable::from_labels(&self.source.unique_labels(), self.options.window_width)
    }

    fn build(&self, index: usize) -> PackResult<PackedWindow> {
        let window = LabelWindow::new(index, self.options.window_width).ok_or(
            PackError::InvalidWindowWidth {
                width: self.options.window_width,
                max: self.options.output_depth.max_value(),
            },
        )?;
        let volume = self
            .source
            .remap(self.options.output_depth, |v| window.map(v))?;
        Ok(PackedWindow { window, volume })
    }
}

impl Iterator for WindowPacker<'_> {
    type Item = PackResult<PackedWindow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.build(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowPacker<'_> {}

/// Start packing `volume` window by window
///
/// # Errors
///
/// Fails when the options are invalid for the volume depth; see
/// [`PackOptions::validate`].
pub fn pack_windows<'a>(volume: &'a Volume, options: &PackOptions) -> PackResult<WindowPacker<'a>> {
    options.validate(volume.depth())?;
    Ok(WindowPacker {
        source: volume,
        options: *options,
        next: 0,
        count: window_count(volume.max_label(), options.window_width),
    })
}

/// All window volumes of a packed label volume, with provenance.
#[derive(Debug, Clone)]
pub struct PackedVolume {
    pub windows: Vec<PackedWindow>,
    pub provenance: ProvenanceTable,
}

/// Pack `volume` into windowed volumes
///
/// A volume without nonzero labels packs into zero windows and an empty
/// provenance table.
///
/// # Arguments
///
/// * `volume` - Label volume wider than `options.output_depth`
/// * `options` - Window width and output depth
pub fn pack_volume(volume: &Volume, options: &PackOptions) -> PackResult<PackedVolume> {
    let packer = pack_windows(volume, options)?;
    let provenance = packer.provenance();
    let windows = packer.collect::<PackResult<Vec<_>>>()?;
    Ok(PackedVolume {
        windows,
        provenance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Volume {
        Volume::from_data(4, 1, 1, VoxelDepth::Bit32, vec![0, 1, 65536, 70000]).unwrap()
    }

    #[test]
    fn test_options_validate() {
        let opts = PackOptions::default();
        assert!(opts.validate(VoxelDepth::Bit32).is_ok());
        assert!(matches!(
            opts.validate(VoxelDepth::Bit16),
            Err(PackError::UnsupportedDepth { input: 16, output: 16 })
        ));
        assert!(matches!(
            opts.with_window_width(0).validate(VoxelDepth::Bit32),
            Err(PackError::InvalidWindowWidth { width: 0, .. })
        ));
        assert!(matches!(
            opts.with_window_width(65536).validate(VoxelDepth::Bit32),
            Err(PackError::InvalidWindowWidth { max: 65535, .. })
        ));
        assert_eq!(PackOptions::new(VoxelDepth::Bit8).window_width, 255);
    }

    #[test]
    fn test_pack_volume() {
        let packed = pack_volume(&sample(), &PackOptions::default()).unwrap();
        assert_eq!(packed.windows.len(), 2);
        assert_eq!(packed.windows[0].volume.data(), &[0, 1, 0, 0]);
        assert_eq!(packed.windows[1].volume.data(), &[0, 0, 1, 4465]);
        assert_eq!(packed.windows[1].volume.depth(), VoxelDepth::Bit16);
        assert_eq!(packed.provenance.len(), 3);
    }

    #[test]
    fn test_packer_is_exact_size() {
        let vol = sample();
        let mut packer = pack_windows(&vol, &PackOptions::default()).unwrap();
        assert_eq!(packer.len(), 2);
        assert_eq!(packer.next().unwrap().unwrap().index(), 0);
        assert_eq!(packer.len(), 1);
    }
}
