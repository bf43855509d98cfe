//! Volume storage and export
//!
//! [`VolumeStore`] is the seam between the pipeline and whatever reads and
//! writes volume files. Output names are derived from the input path:
//!
//! - corrected volume: `<stem>_corrected32Bit<.ext>`
//! - window `k`: `<stem>_16bit_<k><.ext>`

use crate::cancel::CancelToken;
use crate::error::{PipelineError, PipelineResult};
use crate::options::PipelineOptions;
use crate::pipeline::{CorrectionReport, PipelineOutcome, Stage, enter_stage, run_pipeline_with};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use voxlabel_core::{Seed, Volume};
use voxlabel_pack::pack_windows;

/// Loads and saves volumes by path.
pub trait VolumeStore {
    fn save_volume(&mut self, volume: &Volume, path: &Path) -> PipelineResult<()>;
    fn load_volume(&self, path: &Path) -> PipelineResult<Volume>;
}

/// In-memory store keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    volumes: HashMap<PathBuf, Volume>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Volume saved at `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&Volume> {
        self.volumes.get(path)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Stored paths, sorted.
    pub fn paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.volumes.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}

impl VolumeStore for MemoryStore {
    fn save_volume(&mut self, volume: &Volume, path: &Path) -> PipelineResult<()> {
        self.volumes.insert(path.to_path_buf(), volume.clone());
        Ok(())
    }

    fn load_volume(&self, path: &Path) -> PipelineResult<Volume> {
        self.volumes
            .get(path)
            .cloned()
            .ok_or_else(|| PipelineError::Store {
                path: path.to_path_buf(),
                message: "no volume stored at this path".to_string(),
            })
    }
}

fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// Path of the corrected volume for `input`.
pub fn corrected_path(input: &Path) -> PathBuf {
    with_suffix(input, "_corrected32Bit")
}

/// Path of window `index` for `input`.
pub fn window_path(input: &Path, index: usize) -> PathBuf {
    with_suffix(input, &format!("_16bit_{index}"))
}

/// Save a report's volumes next to `input`
///
/// Writes the corrected volume and, when the report carries a pack plan,
/// every window volume. Windows are generated and saved one at a time.
///
/// # Returns
///
/// The written paths, corrected volume first.
pub fn export_report<S: VolumeStore + ?Sized>(
    store: &mut S,
    report: &CorrectionReport,
    input: &Path,
) -> PipelineResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    let path = corrected_path(input);
    store.save_volume(&report.corrected, &path)?;
    debug!("saved {}", path.display());
    written.push(path);

    if let Some(plan) = &report.pack {
        for window in pack_windows(&report.corrected, &plan.options)? {
            let window = window?;
            let path = window_path(input, window.index());
            store.save_volume(&window.volume, &path)?;
            debug!("saved {}", path.display());
            written.push(path);
        }
    }

    info!("exported {} volumes for {}", written.len(), input.display());
    Ok(written)
}

/// Load `input` from the store, correct it and export the results
///
/// Nothing is written when the run is cancelled, including cancellation
/// requested after the last pipeline stage but before export.
pub fn correct_file<S: VolumeStore + ?Sized>(
    store: &mut S,
    input: &Path,
    seeds: &[Seed],
    options: &PipelineOptions,
    cancel: &CancelToken,
) -> PipelineResult<PipelineOutcome> {
    correct_file_with(store, input, seeds, options, cancel, |_| {})
}

/// Like [`correct_file`], calling `after_stage` each time a pipeline stage
/// finishes; see [`run_pipeline_with`](crate::pipeline::run_pipeline_with).
pub fn correct_file_with<S: VolumeStore + ?Sized, F: FnMut(Stage)>(
    store: &mut S,
    input: &Path,
    seeds: &[Seed],
    options: &PipelineOptions,
    cancel: &CancelToken,
    after_stage: F,
) -> PipelineResult<PipelineOutcome> {
    let volume = store.load_volume(input)?;
    let outcome = run_pipeline_with(&volume, seeds, options, cancel, after_stage)?;
    if let PipelineOutcome::Completed(report) = &outcome {
        if !enter_stage(cancel, Stage::Export) {
            return Ok(PipelineOutcome::Cancelled {
                stage: Stage::Export,
            });
        }
        export_report(store, report, input)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let input = Path::new("/data/run1/cells_label.tif");
        assert_eq!(
            corrected_path(input),
            PathBuf::from("/data/run1/cells_label_corrected32Bit.tif")
        );
        assert_eq!(
            window_path(input, 2),
            PathBuf::from("/data/run1/cells_label_16bit_2.tif")
        );
        assert_eq!(
            corrected_path(Path::new("volume")),
            PathBuf::from("volume_corrected32Bit")
        );
    }

    #[test]
    fn test_memory_store_missing_path() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load_volume(Path::new("absent.tif")),
            Err(PipelineError::Store { .. })
        ));
        assert!(store.is_empty());
    }
}
