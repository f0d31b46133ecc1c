use std::cmp::Ordering;

use stl_types::{Facet, Vertex};

/// Number of distinct facet corners.
///
/// Corners are sorted lexicographically by `(x, y, z)` and consecutive exact
/// duplicates are collapsed. There is no epsilon: corners that differ in the
/// last bit stay distinct. `-0.0` is folded into `+0.0` first so the sort
/// order agrees with IEEE equality, and NaN corners never merge.
pub fn unique_point_count(facets: &[Facet]) -> usize {
    let mut corners: Vec<Vertex> = facets
        .iter()
        .flat_map(|f| f.vertices)
        .map(fold_negative_zero)
        .collect();
    corners.sort_unstable_by(lexicographic);
    corners.dedup_by(|a, b| a == b);
    corners.len()
}

fn fold_negative_zero(v: Vertex) -> Vertex {
    // -0.0 + 0.0 == +0.0; every other value is unchanged.
    Vertex::new(v.x + 0.0, v.y + 0.0, v.z + 0.0)
}

fn lexicographic(a: &Vertex, b: &Vertex) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.z.total_cmp(&b.z))
}
