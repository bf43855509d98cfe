//! Provenance of packed labels
//!
//! Records, for every distinct nonzero input label, the window it was
//! written to and its label inside that window.

use crate::window::LabelWindow;

/// Where one input label ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProvenanceEntry {
    pub input_label: u32,
    pub window_index: usize,
    pub output_label: u32,
}

/// Closed-form window and windowed label of `label`; `None` for 0 or a
/// zero width.
///
/// Agrees with [`LabelWindow::map`] for the returned window.
pub fn locate(label: u32, width: u32) -> Option<(usize, u32)> {
    let offset = label.checked_sub(1)?;
    let window = offset.checked_div(width)?;
    Some((window as usize, offset % width + 1))
}

/// Provenance entries sorted by input label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvenanceTable {
    entries: Vec<ProvenanceEntry>,
    window_width: u32,
}

impl ProvenanceTable {
    /// Build the table for `labels`, which must be sorted and distinct
    /// (as returned by `Volume::unique_labels`). Zeros are skipped.
    pub fn from_labels(labels: &[u32], width: u32) -> Self {
        let entries = labels
            .iter()
            .filter_map(|&label| {
                locate(label, width).map(|(window_index, output_label)| ProvenanceEntry {
                    input_label: label,
                    window_index,
                    output_label,
                })
            })
            .collect();
        Self {
            entries,
            window_width: width,
        }
    }

    /// Width of the windows the table refers to.
    pub fn window_width(&self) -> u32 {
        self.window_width
    }

    /// All entries in input-label order.
    pub fn entries(&self) -> &[ProvenanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for `input_label`, if the label was present.
    pub fn lookup(&self, input_label: u32) -> Option<&ProvenanceEntry> {
        self.entries
            .binary_search_by_key(&input_label, |e| e.input_label)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Entries written to window `index`, in input-label order.
    pub fn for_window(&self, index: usize) -> &[ProvenanceEntry] {
        let Some(window) = LabelWindow::new(index, self.window_width) else {
            return &[];
        };
        let start = self
            .entries
            .partition_point(|e| e.input_label < window.input_start);
        let end = self
            .entries
            .partition_point(|e| e.input_label <= window.input_end);
        &self.entries[start..end]
    }

    /// Iterate over entries in input-label order.
    pub fn iter(&self) -> impl Iterator<Item = &ProvenanceEntry> {
        self.entries.iter()
    }
}
