//! Derived mesh statistics.
//!
//! The bounding box and shortest-edge estimate are accumulated while a
//! decoder populates facets ([`bounds::BoundsAccumulator`]). Unique points,
//! surface and volume need the complete facet sequence and are derived
//! afterwards by [`compute_stats`].

pub mod bounds;
pub mod points;
pub mod volume;

use stl_types::{Facet, Stats};
use tracing::{debug, info, instrument};

use crate::config::StatsConfig;
use bounds::{BoundsAccumulator, BoundsSummary};

/// Combine a finished bounds pass with the follow-up passes over `facets`.
#[instrument(skip_all, fields(facets = facets.len()))]
pub fn compute_stats(facets: &[Facet], bounds: &BoundsSummary, config: &StatsConfig) -> Stats {
    let num_points = if config.count_unique_points {
        points::unique_point_count(facets)
    } else {
        debug!("unique point count skipped");
        0
    };
    let surface = volume::surface_area(facets, config.min_normal_length);
    let signed_volume = volume::signed_volume(facets, config.min_normal_length);

    let stats = Stats {
        num_facets: facets.len(),
        num_points,
        bounds: bounds.bounds,
        size: bounds.size,
        bounding_diameter: bounds.bounding_diameter,
        shortest_edge: bounds.shortest_edge,
        volume: signed_volume.abs(),
        signed_volume,
        surface,
    };
    info!(
        num_facets = stats.num_facets,
        num_points = stats.num_points,
        volume = stats.volume,
        surface = stats.surface,
        "mesh statistics complete"
    );
    stats
}

/// Run every statistics pass over an already-populated facet sequence.
pub fn analyze(facets: &[Facet], config: &StatsConfig) -> Stats {
    let mut acc = BoundsAccumulator::new();
    for facet in facets {
        acc.observe(facet);
    }
    compute_stats(facets, &acc.finish(), config)
}
