//! Correction pipeline
//!
//! Runs relabel, assign, filter and pack in order on one volume. Each
//! stage allocates its own output; the input volume is never modified.

use crate::cancel::CancelToken;
use crate::error::PipelineResult;
use crate::options::PipelineOptions;
use crate::shape::{MeasureTable, ShapeStatistics};
use log::{debug, info, warn};
use std::fmt;
use voxlabel_core::{Seed, Volume};
use voxlabel_pack::{PackOptions, ProvenanceTable, pack_windows};
use voxlabel_region::{ClaimTable, assign_seeds, label_components, retain_labels};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Relabel,
    Assign,
    Filter,
    Pack,
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Relabel => "relabel",
            Stage::Assign => "assign",
            Stage::Filter => "filter",
            Stage::Pack => "pack",
            Stage::Export => "export",
        };
        f.write_str(name)
    }
}

/// Window layout of the corrected volume.
///
/// Window volumes themselves are not kept; they are regenerated one at a
/// time on export.
#[derive(Debug, Clone)]
pub struct PackPlan {
    pub options: PackOptions,
    pub window_count: usize,
    pub provenance: ProvenanceTable,
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct CorrectionReport {
    /// Per-seed claim table
    pub claims: ClaimTable,
    /// Relabeled volume with unclaimed components zeroed (32-bit)
    pub corrected: Volume,
    /// Number of components before filtering
    pub num_components: usize,
    /// Present when packing was requested
    pub pack: Option<PackPlan>,
}

impl CorrectionReport {
    /// Measure the corrected volume.
    pub fn measure<S: ShapeStatistics + ?Sized>(&self, stats: &S) -> PipelineResult<MeasureTable> {
        stats.measure(&self.corrected)
    }
}

/// Result of a pipeline run that did not fail.
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// All stages ran
    Completed(CorrectionReport),
    /// Cancellation was seen before `stage` started; nothing was produced
    Cancelled { stage: Stage },
}

impl PipelineOutcome {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PipelineOutcome::Cancelled { .. })
    }

    /// The report of a completed run.
    pub fn report(&self) -> Option<&CorrectionReport> {
        match self {
            PipelineOutcome::Completed(report) => Some(report),
            PipelineOutcome::Cancelled { .. } => None,
        }
    }

    pub fn into_report(self) -> Option<CorrectionReport> {
        match self {
            PipelineOutcome::Completed(report) => Some(report),
            PipelineOutcome::Cancelled { .. } => None,
        }
    }
}

/// Check the token at a stage boundary, logging the outcome.
pub(crate) fn enter_stage(cancel: &CancelToken, stage: Stage) -> bool {
    if cancel.is_cancelled() {
        warn!("cancelled before {stage} stage");
        return false;
    }
    info!("{stage} stage");
    true
}

/// Correct a label volume using ordered seeds
///
/// # Arguments
///
/// * `volume` - Label volume from the segmentation tool
/// * `seeds` - Seeds in precedence order
/// * `options` - Connectivity and packing
/// * `cancel` - Polled before each stage
///
/// # Returns
///
/// [`PipelineOutcome::Completed`] with the report, or
/// [`PipelineOutcome::Cancelled`] naming the stage that did not start.
///
/// # Errors
///
/// Fails on an out-of-bounds seed or invalid pack options; see
/// [`voxlabel_region::assign_seeds`] and [`voxlabel_pack::pack_windows`].
pub fn run_pipeline(
    volume: &Volume,
    seeds: &[Seed],
    options: &PipelineOptions,
    cancel: &CancelToken,
) -> PipelineResult<PipelineOutcome> {
    run_pipeline_with(volume, seeds, options, cancel, |_| {})
}

/// Like [`run_pipeline`], calling `after_stage` each time a stage finishes.
///
/// The callback runs before the token is polled for the next stage, so a
/// callback that cancels the token stops the run at that boundary.
pub fn run_pipeline_with<F: FnMut(Stage)>(
    volume: &Volume,
    seeds: &[Seed],
    options: &PipelineOptions,
    cancel: &CancelToken,
    mut after_stage: F,
) -> PipelineResult<PipelineOutcome> {
    if !enter_stage(cancel, Stage::Relabel) {
        return Ok(PipelineOutcome::Cancelled {
            stage: Stage::Relabel,
        });
    }
    let labeled = label_components(volume, options.connectivity)?;
    debug!(
        "{} components from {} input labels",
        labeled.num_components(),
        volume.unique_labels().len()
    );
    after_stage(Stage::Relabel);

    if !enter_stage(cancel, Stage::Assign) {
        return Ok(PipelineOutcome::Cancelled {
            stage: Stage::Assign,
        });
    }
    let claims = assign_seeds(labeled.labels(), volume, seeds)?;
    debug!(
        "{} seeds: {} claims, {} collisions, {} orphans",
        seeds.len(),
        claims.claim_count(),
        claims.collision_count(),
        claims.orphan_count()
    );
    after_stage(Stage::Assign);

    if !enter_stage(cancel, Stage::Filter) {
        return Ok(PipelineOutcome::Cancelled {
            stage: Stage::Filter,
        });
    }
    let retain = claims.retain_set();
    let corrected = retain_labels(labeled.labels(), &retain)?;
    debug!(
        "kept {} of {} components",
        retain.len(),
        labeled.num_components()
    );
    after_stage(Stage::Filter);

    let pack = match options.pack {
        Some(pack_options) => {
            if !enter_stage(cancel, Stage::Pack) {
                return Ok(PipelineOutcome::Cancelled { stage: Stage::Pack });
            }
            let packer = pack_windows(&corrected, &pack_options)?;
            let plan = PackPlan {
                options: pack_options,
                window_count: packer.window_count(),
                provenance: packer.provenance(),
            };
            debug!(
                "{} labels in {} windows of width {}",
                plan.provenance.len(),
                plan.window_count,
                pack_options.window_width
            );
            after_stage(Stage::Pack);
            Some(plan)
        }
        None => None,
    };

    info!("correction complete");
    Ok(PipelineOutcome::Completed(CorrectionReport {
        claims,
        num_components: labeled.num_components(),
        corrected,
        pack,
    }))
}
