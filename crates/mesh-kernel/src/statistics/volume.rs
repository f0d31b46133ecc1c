use stl_types::Facet;

use crate::geometry::{dot, facet_area_with, sub};

/// Sum of facet areas, absolute-valued.
pub fn surface_area(facets: &[Facet], min_normal_length: f64) -> f64 {
    facets
        .iter()
        .map(|f| facet_area_with(f, min_normal_length))
        .sum::<f64>()
        .abs()
}

/// Divergence-theorem volume before the absolute value.
///
/// Each facet contributes the signed tetrahedron between it and a fixed
/// reference point (the first corner of the first facet):
/// `area * (n · (v0 - reference)) / 3`, with `n` the normal stored in the
/// file. Only meaningful for a closed, consistently oriented surface.
pub fn signed_volume(facets: &[Facet], min_normal_length: f64) -> f64 {
    let Some(first) = facets.first() else {
        return 0.0;
    };
    let reference = first.vertices[0].to_f64();

    facets
        .iter()
        .map(|f| {
            let offset = sub(f.vertices[0].to_f64(), reference);
            let height = dot(f.normal.to_f64(), offset);
            facet_area_with(f, min_normal_length) * height / 3.0
        })
        .sum()
}
