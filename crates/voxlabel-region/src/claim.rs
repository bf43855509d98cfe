//! Seed claims
//!
//! Resolves an ordered list of seeds against a relabeled volume. Each
//! component can be claimed by one seed only: the first seed (in list
//! order) landing on a component claims it, later seeds landing on the same
//! component are collisions, and seeds on background are orphans. Orphans
//! and collisions are outcomes, not errors, so every seed gets a record.

use crate::error::{RegionError, RegionResult};
use crate::label::{Centroid, ComponentTable};
use crate::select::RetainSet;
use voxlabel_core::{Seed, Volume, VoxelDepth};

/// What happened to one seed.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// First seed on a component; carries the component's statistics.
    Claim {
        label: u32,
        centroid: Centroid,
        voxel_count: u64,
    },
    /// Component already claimed by the seed at index `claimed_by`.
    Collision { claimed_by: usize },
    /// Seed lies on background.
    Orphan,
}

/// One row of the claim table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRecord {
    /// Seed coordinate
    pub seed: Seed,
    /// Value of the original (pre-relabeling) volume at the seed
    pub original_label: u32,
    /// Outcome of the seed
    pub outcome: SeedOutcome,
}

impl SeedRecord {
    /// Relabeled label claimed by this seed; `None` for collisions and orphans.
    pub fn new_label(&self) -> Option<u32> {
        match self.outcome {
            SeedOutcome::Claim { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Centroid of the claimed component.
    pub fn centroid(&self) -> Option<Centroid> {
        match self.outcome {
            SeedOutcome::Claim { centroid, .. } => Some(centroid),
            _ => None,
        }
    }

    /// Voxel count of the claimed component.
    pub fn voxel_count(&self) -> Option<u64> {
        match self.outcome {
            SeedOutcome::Claim { voxel_count, .. } => Some(voxel_count),
            _ => None,
        }
    }

    pub fn is_claim(&self) -> bool {
        matches!(self.outcome, SeedOutcome::Claim { .. })
    }

    pub fn is_collision(&self) -> bool {
        matches!(self.outcome, SeedOutcome::Collision { .. })
    }

    pub fn is_orphan(&self) -> bool {
        matches!(self.outcome, SeedOutcome::Orphan)
    }
}

/// Per-seed outcomes in seed order, plus the claimed-label table.
#[derive(Debug, Clone)]
pub struct ClaimTable {
    records: Vec<SeedRecord>,
    /// Seed index of the claim, indexed by label
    claims: Vec<Option<usize>>,
}

impl ClaimTable {
    /// Records in seed order.
    pub fn records(&self) -> &[SeedRecord] {
        &self.records
    }

    /// Consume the table, keeping the records.
    pub fn into_records(self) -> Vec<SeedRecord> {
        self.records
    }

    /// Check whether `label` was claimed.
    pub fn is_claimed(&self, label: u32) -> bool {
        self.claims
            .get(label as usize)
            .is_some_and(|c| c.is_some())
    }

    /// Index of the seed that claimed `label`.
    pub fn claimed_by(&self, label: u32) -> Option<usize> {
        self.claims.get(label as usize).copied().flatten()
    }

    /// Claimed labels in ascending order.
    pub fn claimed_labels(&self) -> Vec<u32> {
        self.claims
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .map(|(label, _)| label as u32)
            .collect()
    }

    /// Set of labels to keep when filtering.
    pub fn retain_set(&self) -> RetainSet {
        RetainSet::from_labels(self.claimed_labels())
    }

    pub fn claim_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_claim()).count()
    }

    pub fn collision_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_collision()).count()
    }

    pub fn orphan_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_orphan()).count()
    }
}

pub(crate) fn check_seed(volume: &Volume, seed: &Seed) -> RegionResult<usize> {
    volume
        .index_of(seed.x, seed.y, seed.z)
        .ok_or(RegionError::SeedOutOfBounds {
            x: seed.x,
            y: seed.y,
            z: seed.z,
        })
}

/// Resolve seeds against a relabeled volume
///
/// # Arguments
///
/// * `relabeled` - Dense label volume from [`crate::label_components`]
/// * `original` - Volume the labels were computed from
/// * `seeds` - Seeds in precedence order
///
/// # Returns
///
/// One record per seed, in seed order.
///
/// # Errors
///
/// Returns [`RegionError::DimensionMismatch`] if the volumes differ in
/// extents, [`RegionError::UnsupportedDepth`] unless `relabeled` is 32-bit,
/// [`RegionError::SeedOutOfBounds`] for a seed outside the volume,
/// and [`RegionError::InvalidParameters`] if `relabeled` is not densely
/// labeled.
pub fn assign_seeds(
    relabeled: &Volume,
    original: &Volume,
    seeds: &[Seed],
) -> RegionResult<ClaimTable> {
    if !relabeled.same_shape(original) {
        return Err(RegionError::DimensionMismatch {
            expected: relabeled.dimensions(),
            actual: original.dimensions(),
        });
    }
    if relabeled.depth() != VoxelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit",
            actual: relabeled.depth().bits(),
        });
    }
    let max_label = relabeled.max_label() as usize;
    if max_label > relabeled.voxel_count() {
        return Err(RegionError::InvalidParameters(format!(
            "relabeled volume has label {} but only {} voxels; labels must be dense",
            max_label,
            relabeled.voxel_count()
        )));
    }

    // All seeds are checked before the first claim is made.
    let indices = seeds
        .iter()
        .map(|seed| check_seed(relabeled, seed))
        .collect::<RegionResult<Vec<usize>>>()?;

    let components = ComponentTable::from_labels(relabeled);
    let mut claims: Vec<Option<usize>> = vec![None; max_label + 1];
    let mut records = Vec::with_capacity(seeds.len());

    for (i, (seed, index)) in seeds.iter().zip(indices).enumerate() {
        let new_label = relabeled.data()[index];
        let original_label = original.data()[index];

        let outcome = if new_label == 0 {
            SeedOutcome::Orphan
        } else if let Some(first) = claims[new_label as usize] {
            SeedOutcome::Collision { claimed_by: first }
        } else {
            claims[new_label as usize] = Some(i);
            let stats = components.get(new_label).ok_or_else(|| {
                RegionError::InvalidParameters(format!("no statistics for label {new_label}"))
            })?;
            SeedOutcome::Claim {
                label: new_label,
                centroid: stats.centroid,
                voxel_count: stats.voxel_count,
            }
        };

        records.push(SeedRecord {
            seed: *seed,
            original_label,
            outcome,
        });
    }

    Ok(ClaimTable { records, claims })
}

/// A seed on a nonzero voxel and the label it should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesiredLabel {
    pub seed: Seed,
    /// Current value of the volume at the seed
    pub current_label: u32,
    /// Replacement label: the seed's 1-based position in the seed list
    pub replacement_label: u32,
}

/// List the replacement label wanted for each seed on a nonzero voxel
///
/// Seed `i` (0-based) maps to replacement label `i + 1`; seeds on
/// background are skipped but still consume their position.
pub fn desired_labels(volume: &Volume, seeds: &[Seed]) -> RegionResult<Vec<DesiredLabel>> {
    let mut rows = Vec::with_capacity(seeds.len());
    for (i, seed) in seeds.iter().enumerate() {
        let index = check_seed(volume, seed)?;
        let current_label = volume.data()[index];
        if current_label > 0 {
            rows.push(DesiredLabel {
                seed: *seed,
                current_label,
                replacement_label: i as u32 + 1,
            });
        }
    }
    Ok(rows)
}
