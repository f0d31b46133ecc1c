//! Property-based tests for mesh kernel invariants using the `proptest` crate.

use proptest::prelude::*;

use mesh_kernel::geometry::{calculate_normal, facet_area, normalize_vector, unit_normal};
use mesh_kernel::statistics::points::unique_point_count;
use mesh_kernel::{analyze, StatsConfig};
use stl_types::{Facet, Vec3, Vertex};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary coordinate triple in a range where f32 keeps ~1e-4 absolute precision.
fn arb_vertex() -> impl Strategy<Value = Vertex> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Vertex::new(x, y, z))
}

fn arb_facet() -> impl Strategy<Value = Facet> {
    (arb_vertex(), arb_vertex(), arb_vertex()).prop_map(|(a, b, c)| {
        let mut facet = Facet::new(Vec3::ZERO, [a, b, c]);
        facet.normal = unit_normal(&facet);
        facet
    })
}

fn arb_facets() -> impl Strategy<Value = Vec<Facet>> {
    prop::collection::vec(arb_facet(), 1..40)
}

/// Box extents large enough to avoid degenerate facets.
fn arb_extent() -> impl Strategy<Value = f32> {
    0.5f32..50.0
}

/// Closed axis-aligned box with outward normals.
fn box_facets(origin: Vertex, w: f32, h: f32, d: f32) -> Vec<Facet> {
    let p = |x: f32, y: f32, z: f32| Vertex::new(origin.x + x, origin.y + y, origin.z + z);
    let c = [
        p(0.0, 0.0, 0.0),
        p(w, 0.0, 0.0),
        p(w, h, 0.0),
        p(0.0, h, 0.0),
        p(0.0, 0.0, d),
        p(w, 0.0, d),
        p(w, h, d),
        p(0.0, h, d),
    ];
    let quads: [([usize; 4], Vec3); 6] = [
        ([0, 3, 2, 1], Vec3::new(0.0, 0.0, -1.0)),
        ([4, 5, 6, 7], Vec3::new(0.0, 0.0, 1.0)),
        ([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)),
        ([3, 7, 6, 2], Vec3::new(0.0, 1.0, 0.0)),
        ([0, 4, 7, 3], Vec3::new(-1.0, 0.0, 0.0)),
        ([1, 2, 6, 5], Vec3::new(1.0, 0.0, 0.0)),
    ];
    quads
        .iter()
        .flat_map(|&([a, b, cc, d], n)| {
            [
                Facet::new(n, [c[a], c[b], c[cc]]),
                Facet::new(n, [c[a], c[cc], c[d]]),
            ]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Normalized vectors are unit length or the degenerate substitute
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalize_yields_unit_length(v in arb_vertex()) {
        let n = normalize_vector(v);
        prop_assert!((n.length() - 1.0).abs() < 1e-5,
            "normalize({:?}) has length {}", v, n.length());
    }
}

// ---------------------------------------------------------------------------
// 2. The calculated normal is perpendicular to both edges
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normal_perpendicular_to_edges(f in arb_facet()) {
        let n = calculate_normal(&f);
        let [v0, v1, v2] = f.vertices;
        let scale = (n.length() * (v1 - v0).length().max(1.0) * (v2 - v0).length().max(1.0)).max(1.0);
        let d1 = f64::from(n.dot(&(v1 - v0))).abs() / scale;
        let d2 = f64::from(n.dot(&(v2 - v0))).abs() / scale;
        prop_assert!(d1 < 1e-4, "n·e1 relative = {}", d1);
        prop_assert!(d2 < 1e-4, "n·e2 relative = {}", d2);
    }
}

// ---------------------------------------------------------------------------
// 3. Area is non-negative and equals half the cross-product length
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn area_matches_half_cross_length(f in arb_facet()) {
        let area = facet_area(&f);
        let expected = calculate_normal(&f).length() / 2.0;
        prop_assert!(area >= -1e-3, "negative area {}", area);
        prop_assert!((area - expected).abs() <= 1e-3 * expected.max(1.0),
            "area {} != |cross|/2 {}", area, expected);
    }
}

// ---------------------------------------------------------------------------
// 4. Unique point count bounds: 1 <= points <= 3 * facets
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn unique_points_bounded_by_corner_count(facets in arb_facets()) {
        let n = unique_point_count(&facets);
        prop_assert!(n >= 1);
        prop_assert!(n <= 3 * facets.len());
    }
}

// ---------------------------------------------------------------------------
// 5. Duplicating every facet leaves the unique point count unchanged
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn duplicated_facets_add_no_points(facets in arb_facets()) {
        let mut doubled = facets.clone();
        doubled.extend(facets.iter().copied());
        prop_assert_eq!(unique_point_count(&doubled), unique_point_count(&facets));
    }
}

// ---------------------------------------------------------------------------
// 6. Statistics invariants: size = max - min, diameter = |size|, non-negative
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn stats_invariants(facets in arb_facets()) {
        let stats = analyze(&facets, &StatsConfig::default());
        prop_assert_eq!(stats.num_facets, facets.len());
        prop_assert_eq!(stats.size, stats.bounds.max - stats.bounds.min);
        prop_assert!((stats.bounding_diameter - stats.size.length()).abs() < 1e-9);
        prop_assert!(stats.volume >= 0.0);
        prop_assert!(stats.surface >= 0.0);
        prop_assert!((stats.volume - stats.signed_volume.abs()).abs() < 1e-12);
        for f in &facets {
            for v in &f.vertices {
                prop_assert!(v.x >= stats.bounds.min.x && v.x <= stats.bounds.max.x);
                prop_assert!(v.y >= stats.bounds.min.y && v.y <= stats.bounds.max.y);
                prop_assert!(v.z >= stats.bounds.min.z && v.z <= stats.bounds.max.z);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 7. Closed boxes: volume = w*h*d, surface = 2(wh + hd + wd), 8 points
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn closed_box_volume_and_surface(
        origin in arb_vertex(),
        w in arb_extent(),
        h in arb_extent(),
        d in arb_extent(),
    ) {
        let facets = box_facets(origin, w, h, d);
        let stats = analyze(&facets, &StatsConfig::default());
        // Recover the extents actually representable after f32 rounding.
        let size = stats.size.to_f64();
        let volume = size[0] * size[1] * size[2];
        let surface = 2.0 * (size[0] * size[1] + size[1] * size[2] + size[0] * size[2]);
        prop_assert!((stats.volume - volume).abs() <= 1e-3 * volume.max(1.0),
            "volume {} expected {}", stats.volume, volume);
        prop_assert!((stats.surface - surface).abs() <= 1e-3 * surface.max(1.0),
            "surface {} expected {}", stats.surface, surface);
        prop_assert!(stats.signed_volume > 0.0);
        prop_assert_eq!(stats.num_points, 8);
    }
}
