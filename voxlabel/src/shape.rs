//! Per-label measurements
//!
//! [`ShapeStatistics`] is the seam for measuring a corrected volume. Richer
//! descriptors (surface area, sphericity, moments) live in external
//! implementations; [`BasicShapeStatistics`] reports what the region crate
//! already computes.

use crate::error::PipelineResult;
use voxlabel_core::{Error, Volume};
use voxlabel_region::get_component_stats;

/// One measured label.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureRow {
    pub label: u32,
    /// One value per table column
    pub values: Vec<f64>,
}

/// Named columns of per-label values, ordered by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasureTable {
    columns: Vec<String>,
    rows: Vec<MeasureRow>,
}

impl MeasureTable {
    /// Create an empty table with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the value count differs from
    /// the column count.
    pub fn push_row(&mut self, label: u32, values: Vec<f64>) -> PipelineResult<()> {
        if values.len() != self.columns.len() {
            return Err(Error::InvalidParameter(format!(
                "row for label {label} has {} values, table has {} columns",
                values.len(),
                self.columns.len()
            ))
            .into());
        }
        self.rows.push(MeasureRow { label, values });
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[MeasureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row of `label`, if measured.
    pub fn row(&self, label: u32) -> Option<&MeasureRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Value of `column` for `label`.
    pub fn get(&self, label: u32, column: &str) -> Option<f64> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.row(label).map(|r| r.values[col])
    }
}

/// Computes a [`MeasureTable`] for every label of a volume.
pub trait ShapeStatistics {
    fn measure(&self, volume: &Volume) -> PipelineResult<MeasureTable>;
}

/// Centroid, voxel count and bounding-box extents.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicShapeStatistics;

impl BasicShapeStatistics {
    pub const COLUMNS: [&'static str; 7] = [
        "centroid_x",
        "centroid_y",
        "centroid_z",
        "voxel_count",
        "extent_x",
        "extent_y",
        "extent_z",
    ];
}

impl ShapeStatistics for BasicShapeStatistics {
    fn measure(&self, volume: &Volume) -> PipelineResult<MeasureTable> {
        let mut table = MeasureTable::new(Self::COLUMNS);
        for s in get_component_stats(volume)? {
            table.push_row(
                s.label,
                vec![
                    s.centroid.x,
                    s.centroid.y,
                    s.centroid.z,
                    s.voxel_count as f64,
                    f64::from(s.bounds.w),
                    f64::from(s.bounds.h),
                    f64::from(s.bounds.d),
                ],
            )?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlabel_core::VoxelDepth;
    use voxlabel_test::make_volume;

    #[test]
    fn test_basic_statistics() {
        let vol = make_volume(
            3,
            3,
            2,
            VoxelDepth::Bit32,
            &[(0, 0, 0, 4), (2, 2, 1, 4), (1, 1, 0, 6)],
        )
        .unwrap();
        let table = BasicShapeStatistics.measure(&vol).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns().len(), 7);
        assert_eq!(table.get(4, "voxel_count"), Some(2.0));
        assert_eq!(table.get(4, "centroid_z"), Some(0.5));
        assert_eq!(table.get(4, "extent_x"), Some(3.0));
        assert_eq!(table.get(6, "extent_z"), Some(1.0));
        assert_eq!(table.get(5, "voxel_count"), None);
        assert_eq!(table.get(4, "sphericity"), None);
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut table = MeasureTable::new(["a", "b"]);
        assert!(table.push_row(1, vec![1.0]).is_err());
        assert!(table.push_row(1, vec![1.0, 2.0]).is_ok());
        assert_eq!(table.row(1).map(|r| r.values.len()), Some(2));
    }
}
