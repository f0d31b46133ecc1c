//! Helper functions: error type, fixture meshes, encoded fixture bytes.

use std::fs;
use std::path::{Path, PathBuf};

use stl_format::{encode, CodecConfig, StlError};
use stl_types::{Facet, Format, Normal, Vec3, Vertex};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("STL error: {0}")]
    Stl(#[from] StlError),

    #[error("fixture I/O error for {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Fixture Meshes ──────────────────────────────────────────────────────────

/// Closed axis-aligned box with consistent outward normals, two facets per
/// side.
pub fn box_facets(origin: Vertex, w: f32, h: f32, d: f32) -> Vec<Facet> {
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
    let sides: [([usize; 4], Normal); 6] = [
        ([0, 3, 2, 1], Vec3::new(0.0, 0.0, -1.0)),
        ([4, 5, 6, 7], Vec3::new(0.0, 0.0, 1.0)),
        ([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)),
        ([3, 7, 6, 2], Vec3::new(0.0, 1.0, 0.0)),
        ([0, 4, 7, 3], Vec3::new(-1.0, 0.0, 0.0)),
        ([1, 2, 6, 5], Vec3::new(1.0, 0.0, 0.0)),
    ];
    sides
        .iter()
        .flat_map(|&([a, b, cc, dd], n)| {
            [
                Facet::new(n, [c[a], c[b], c[cc]]),
                Facet::new(n, [c[a], c[cc], c[dd]]),
            ]
        })
        .collect()
}

/// Unit cube at the origin: 12 facets sharing 8 corners.
pub fn unit_cube_facets() -> Vec<Facet> {
    box_facets(Vertex::ZERO, 1.0, 1.0, 1.0)
}

/// Unit cube as hand-formatted ASCII STL, the way other tools write it.
pub fn unit_cube_ascii() -> String {
    let mut out = String::from("solid cube\n");
    for f in unit_cube_facets() {
        let n = f.normal;
        out.push_str(&format!("  facet normal {} {} {}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in f.vertices {
            out.push_str(&format!("      vertex {} {} {}\n", v.x, v.y, v.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str("endsolid cube\n");
    out
}

/// Three collinear corners with a zero stored normal.
pub fn degenerate_facet() -> Facet {
    Facet::new(
        Vec3::ZERO,
        [
            Vertex::new(0.0, 0.0, 0.0),
            Vertex::new(1.0, 1.0, 1.0),
            Vertex::new(2.0, 2.0, 2.0),
        ],
    )
}

// ── Encoded Fixtures ────────────────────────────────────────────────────────

/// Encode `facets` as binary STL with a zero header.
pub fn binary_stl_bytes(facets: &[Facet]) -> Result<Vec<u8>, HarnessError> {
    encoded_bytes(facets, Format::Binary)
}

/// Encode `facets` as ASCII STL with default precision.
pub fn ascii_stl_bytes(facets: &[Facet]) -> Result<Vec<u8>, HarnessError> {
    encoded_bytes(facets, Format::Ascii)
}

fn encoded_bytes(facets: &[Facet], format: Format) -> Result<Vec<u8>, HarnessError> {
    let mut buf = Vec::new();
    encode(&mut buf, facets, "", format, &CodecConfig::default())?;
    Ok(buf)
}

/// Overwrite the facet count stored after the binary header.
pub fn set_stated_count(bytes: &mut [u8], count: u32) -> Result<(), HarnessError> {
    let len = bytes.len();
    let slot = bytes
        .get_mut(80..84)
        .ok_or_else(|| HarnessError::AssertionFailed {
            detail: format!("binary STL of {} bytes has no facet count", len),
        })?;
    slot.copy_from_slice(&count.to_le_bytes());
    Ok(())
}

/// Write `bytes` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, HarnessError> {
    let path = dir.join(name);
    fs::write(&path, bytes).map_err(|source| HarnessError::Fixture {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
