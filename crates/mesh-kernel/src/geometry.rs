//! Per-facet vector primitives: normals, normalization and area.
//!
//! Coordinates are stored as `f32`; every product here is formed in `f64`
//! and only the final result is narrowed back.

use stl_types::{Facet, Normal, Vertex};

use crate::{DEGENERATE_NORMAL, MIN_NORMAL_LENGTH};

/// Unnormalized facet normal: `(v1 - v0) × (v2 - v0)`.
pub fn calculate_normal(facet: &Facet) -> Normal {
    let [v0, v1, v2] = facet.vertices.map(|v| v.to_f64());
    let a = sub(v1, v0);
    let b = sub(v2, v0);
    let n = cross(a, b);
    narrow(n)
}

/// Scale `v` to unit length. Vectors shorter than `1e-12` become `(1, 0, 0)`.
pub fn normalize_vector(v: Normal) -> Normal {
    normalize_vector_with(v, MIN_NORMAL_LENGTH)
}

/// [`normalize_vector`] with an explicit degenerate threshold.
pub fn normalize_vector_with(v: Normal, min_length: f64) -> Normal {
    let length = v.length();
    if length < min_length {
        return DEGENERATE_NORMAL;
    }
    let factor = 1.0 / length;
    let [x, y, z] = v.to_f64();
    narrow([x * factor, y * factor, z * factor])
}

/// Unit normal re-derived from the corners, ignoring the stored normal.
pub fn unit_normal(facet: &Facet) -> Normal {
    normalize_vector(calculate_normal(facet))
}

/// `Σ vᵢ × vᵢ₊₁` over the three corners; twice the vector area of the facet.
pub fn edge_cross_sum(facet: &Facet) -> [f64; 3] {
    let corners = facet.vertices.map(|v| v.to_f64());
    let mut sum = [0.0; 3];
    for i in 0..3 {
        let c = cross(corners[i], corners[(i + 1) % 3]);
        sum = add(sum, c);
    }
    sum
}

/// Facet area, signed by the re-derived normal so it is non-negative for any
/// non-degenerate triangle.
pub fn facet_area(facet: &Facet) -> f64 {
    facet_area_with(facet, MIN_NORMAL_LENGTH)
}

/// [`facet_area`] with an explicit degenerate threshold.
pub fn facet_area_with(facet: &Facet, min_normal_length: f64) -> f64 {
    let n = normalize_vector_with(calculate_normal(facet), min_normal_length).to_f64();
    let sum = edge_cross_sum(facet);
    0.5 * dot(n, sum)
}

/// Largest absolute per-axis difference between two corners.
pub fn max_axis_distance(a: &Vertex, b: &Vertex) -> f32 {
    (*a - *b).abs().max_component()
}

// ── f64 helpers ─────────────────────────────────────────────────────────────

pub(crate) fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn narrow(v: [f64; 3]) -> Normal {
    Normal::new(v[0] as f32, v[1] as f32, v[2] as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use stl_types::Vec3;

    fn right_triangle() -> Facet {
        Facet::new(
            Vec3::Z,
            [
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_normal_of_xy_triangle_points_up() {
        let n = calculate_normal(&right_triangle());
        assert_eq!(n, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_normal_follows_winding() {
        let mut facet = right_triangle();
        facet.vertices.swap(1, 2);
        assert_eq!(unit_normal(&facet), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize_scales_to_unit_length() {
        let n = normalize_vector(Vec3::new(3.0, 0.0, 4.0));
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-6);
        assert_abs_diff_eq!(n.z, 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_substitutes_x_axis() {
        assert_eq!(normalize_vector(Vec3::ZERO), Vec3::X);
        assert_eq!(normalize_vector(Vec3::new(1e-20, 0.0, 0.0)), Vec3::X);
    }

    #[test]
    fn test_collinear_facet_has_x_axis_normal_and_zero_area() {
        let facet = Facet::new(
            Vec3::ZERO,
            [
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 1.0, 1.0),
                Vertex::new(2.0, 2.0, 2.0),
            ],
        );
        assert_eq!(unit_normal(&facet), Vec3::X);
        assert_abs_diff_eq!(facet_area(&facet), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_area_of_right_triangle() {
        assert_abs_diff_eq!(facet_area(&right_triangle()), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_area_is_independent_of_winding() {
        let mut facet = right_triangle();
        facet.vertices.swap(0, 2);
        assert_abs_diff_eq!(facet_area(&facet), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_area_away_from_origin() {
        let facet = Facet::new(
            Vec3::X,
            [
                Vertex::new(10.0, 0.0, 0.0),
                Vertex::new(10.0, 2.0, 0.0),
                Vertex::new(10.0, 0.0, 2.0),
            ],
        );
        assert_abs_diff_eq!(facet_area(&facet), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_max_axis_distance() {
        let a = Vertex::new(0.0, 0.0, 0.0);
        let b = Vertex::new(0.5, -2.0, 1.0);
        assert_eq!(max_axis_distance(&a, &b), 2.0);
    }
}
