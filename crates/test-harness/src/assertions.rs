//! Assertion helpers with diagnostic output.
//!
//! Every failure names the calling context plus expected and actual values.

use stl_format::DecodeWarning;
use stl_mesh::Mesh;
use stl_types::{Facet, Stats, Vertex};

use crate::helpers::HarnessError;

fn fail(detail: String) -> Result<(), HarnessError> {
    Err(HarnessError::AssertionFailed { detail })
}

/// Assert facet and unique point counts.
pub fn assert_counts(
    stats: &Stats,
    expected_facets: usize,
    expected_points: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    if stats.num_facets == expected_facets && stats.num_points == expected_points {
        Ok(())
    } else {
        fail(format!(
            "[{}] expected facets={} points={}, got facets={} points={}",
            ctx, expected_facets, expected_points, stats.num_facets, stats.num_points,
        ))
    }
}

/// Assert `actual` is within `rel_tol` relative error of `expected`.
pub fn assert_close(
    what: &str,
    actual: f64,
    expected: f64,
    rel_tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let scale = expected.abs().max(f64::MIN_POSITIVE);
    if ((actual - expected) / scale).abs() <= rel_tol {
        Ok(())
    } else {
        fail(format!(
            "[{}] {}: expected {:.6}, got {:.6} (rel tol={})",
            ctx, what, expected, actual, rel_tol,
        ))
    }
}

/// Assert volume and surface of a closed mesh.
pub fn assert_volume_surface(
    stats: &Stats,
    expected_volume: f64,
    expected_surface: f64,
    rel_tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    assert_close("volume", stats.volume, expected_volume, rel_tol, ctx)?;
    assert_close("surface", stats.surface, expected_surface, rel_tol, ctx)
}

/// Assert the bounding box matches within an absolute tolerance.
pub fn assert_bounds(
    stats: &Stats,
    expected_min: Vertex,
    expected_max: Vertex,
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual_min = stats.bounds.min.to_array();
    let actual_max = stats.bounds.max.to_array();
    let expected_min = expected_min.to_array();
    let expected_max = expected_max.to_array();

    for i in 0..3 {
        if (actual_min[i] - expected_min[i]).abs() > tol {
            return fail(format!(
                "[{}] bounding box min[{}]: expected {:.4}, got {:.4} (tol={})",
                ctx, i, expected_min[i], actual_min[i], tol,
            ));
        }
        if (actual_max[i] - expected_max[i]).abs() > tol {
            return fail(format!(
                "[{}] bounding box max[{}]: expected {:.4}, got {:.4} (tol={})",
                ctx, i, expected_max[i], actual_max[i], tol,
            ));
        }
    }
    Ok(())
}

/// Assert two facet sequences agree component-wise within `tol`, with equal
/// lengths and identical attribute bytes.
pub fn assert_facets_match(
    actual: &[Facet],
    expected: &[Facet],
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    if actual.len() != expected.len() {
        return fail(format!(
            "[{}] facet count: expected {}, got {}",
            ctx,
            expected.len(),
            actual.len(),
        ));
    }
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let af = a.to_floats();
        let ef = e.to_floats();
        if let Some(k) = (0..12).find(|&k| (af[k] - ef[k]).abs() > tol) {
            return fail(format!(
                "[{}] facet {} float {}: expected {}, got {} (tol={})",
                ctx, i, k, ef[k], af[k], tol,
            ));
        }
        if a.extra != e.extra {
            return fail(format!(
                "[{}] facet {} extra: expected {:?}, got {:?}",
                ctx, i, e.extra, a.extra,
            ));
        }
    }
    Ok(())
}

/// Assert the mesh's decode warnings are exactly `expected`.
pub fn assert_warnings(
    mesh: &Mesh,
    expected: &[DecodeWarning],
    ctx: &str,
) -> Result<(), HarnessError> {
    if mesh.warnings() == expected {
        Ok(())
    } else {
        let actual: Vec<String> = mesh.warnings().iter().map(|w| w.to_string()).collect();
        fail(format!(
            "[{}] expected warnings {:?}, got [{}]",
            ctx,
            expected,
            if actual.is_empty() {
                "none".to_string()
            } else {
                actual.join("; ")
            },
        ))
    }
}
