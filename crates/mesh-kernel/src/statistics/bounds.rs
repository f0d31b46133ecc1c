use serde::{Deserialize, Serialize};
use stl_types::{BoundingBox, Facet, Vertex};

use crate::geometry::max_axis_distance;

/// Running bounding box and shortest-edge estimate, fed one facet at a time
/// while a decoder populates the facet storage.
#[derive(Debug, Clone, Default)]
pub struct BoundsAccumulator {
    bounds: Option<BoundingBox>,
    shortest_edge: f32,
}

/// Result of a completed [`BoundsAccumulator`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundsSummary {
    pub bounds: BoundingBox,
    pub size: Vertex,
    pub bounding_diameter: f64,
    pub shortest_edge: f32,
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every corner of `facet` into the running min/max.
    ///
    /// The shortest edge is only taken from the first facet observed:
    /// the largest per-axis distance between its first two corners.
    pub fn observe(&mut self, facet: &Facet) {
        if self.bounds.is_none() {
            self.shortest_edge = max_axis_distance(&facet.vertices[0], &facet.vertices[1]);
        }
        let bounds = self
            .bounds
            .get_or_insert_with(|| BoundingBox::from_point(facet.vertices[0]));
        for v in &facet.vertices {
            bounds.expand_to_include(v);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Derive size and diameter from the observed corners. An accumulator
    /// that saw no facets yields an all-zero summary.
    pub fn finish(&self) -> BoundsSummary {
        let Some(bounds) = self.bounds else {
            return BoundsSummary::default();
        };
        BoundsSummary {
            bounds,
            size: bounds.size(),
            bounding_diameter: bounds.diameter(),
            shortest_edge: self.shortest_edge,
        }
    }
}
