pub mod config;
pub mod geometry;
pub mod statistics;

// Re-export the operations most callers need at crate root.
pub use config::StatsConfig;
pub use geometry::{calculate_normal, facet_area, normalize_vector, unit_normal};
pub use statistics::bounds::{BoundsAccumulator, BoundsSummary};
pub use statistics::{analyze, compute_stats};

/// Normals shorter than this are replaced by [`DEGENERATE_NORMAL`].
pub const MIN_NORMAL_LENGTH: f64 = 1e-12;

/// Substitute for the normal of a zero-area facet.
pub const DEGENERATE_NORMAL: stl_types::Normal = stl_types::Vec3::X;
