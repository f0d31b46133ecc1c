//! Configuration for the statistics pass.

use serde::{Deserialize, Serialize};

use crate::MIN_NORMAL_LENGTH;

/// Controls which statistics are computed and the degenerate-normal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Normals shorter than this are replaced by `(1, 0, 0)`.
    pub min_normal_length: f64,
    /// Whether to run the sort-and-collapse unique point pass. When disabled
    /// `num_points` is reported as 0.
    pub count_unique_points: bool,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_normal_length: MIN_NORMAL_LENGTH,
            count_unique_points: true,
        }
    }
}

impl StatsConfig {
    /// Every statistic.
    pub fn full() -> Self {
        Self::default()
    }

    /// Skip unique point counting (O(n log n) over all corners).
    pub fn fast() -> Self {
        Self {
            count_unique_points: false,
            ..Self::default()
        }
    }
}
