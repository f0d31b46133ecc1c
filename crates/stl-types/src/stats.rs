use serde::{Deserialize, Serialize};

use crate::vector::Vertex;

/// Axis-aligned bounds of every observed facet corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vertex,
    pub max: Vertex,
}

impl BoundingBox {
    /// A box containing only `p`.
    pub fn from_point(p: Vertex) -> Self {
        Self { min: p, max: p }
    }

    pub fn expand_to_include(&mut self, p: &Vertex) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// `max - min`, component-wise.
    pub fn size(&self) -> Vertex {
        self.max - self.min
    }

    /// Euclidean length of [`BoundingBox::size`].
    pub fn diameter(&self) -> f64 {
        self.size().length()
    }
}

/// Derived statistics of a decoded mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of facets; always equals the length of the facet sequence.
    pub num_facets: usize,
    /// Distinct corners under exact floating-point equality.
    pub num_points: usize,
    pub bounds: BoundingBox,
    /// `bounds.max - bounds.min`.
    pub size: Vertex,
    /// Euclidean norm of `size`.
    pub bounding_diameter: f64,
    /// Largest per-axis distance between the first two corners of the first
    /// facet. This is an estimate, not the minimum edge length of the mesh.
    pub shortest_edge: f32,
    /// Enclosed volume, always non-negative.
    pub volume: f64,
    /// Divergence-theorem sum before the absolute value. Negative for a
    /// closed mesh usually means inward-facing normals.
    pub signed_volume: f64,
    /// Total surface area, always non-negative.
    pub surface: f64,
}

impl Stats {
    /// True when the signed volume disagrees in sign with outward normals.
    pub fn has_inverted_orientation(&self) -> bool {
        self.signed_volume < 0.0
    }
}
