//! Pipeline options

use voxlabel_pack::PackOptions;
use voxlabel_region::ConnectivityType;

/// Options for [`crate::run_pipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Neighborhood used for relabeling
    pub connectivity: ConnectivityType,
    /// Packing of the corrected volume; `None` skips the pack stage
    pub pack: Option<PackOptions>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            connectivity: ConnectivityType::TwentySixWay,
            pack: Some(PackOptions::default()),
        }
    }
}

impl PipelineOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            ..Self::default()
        }
    }

    /// Set the pack options
    pub fn with_pack(mut self, pack: PackOptions) -> Self {
        self.pack = Some(pack);
        self
    }

    /// Skip the pack stage
    pub fn without_pack(mut self) -> Self {
        self.pack = None;
        self
    }
}
