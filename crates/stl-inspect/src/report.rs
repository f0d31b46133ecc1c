//! Text and JSON rendering of mesh information.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use stl_mesh::{DecodeWarning, Format, Mesh, Stats, Vertex};

/// Everything `info` prints about one file.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub path: String,
    pub format: Format,
    pub header: String,
    pub stats: Stats,
    pub warnings: Vec<DecodeWarning>,
}

impl InfoReport {
    pub fn new(path: &Path, mesh: &Mesh) -> Self {
        Self {
            path: path.display().to_string(),
            format: mesh.format(),
            header: mesh.header().to_string(),
            stats: mesh.stats(),
            warnings: mesh.warnings().to_vec(),
        }
    }

    /// Aligned `label: value` lines, warnings last.
    pub fn to_text(&self) -> String {
        let s = &self.stats;
        let mut out = String::new();
        let mut line = |label: &str, value: String| {
            let _ = writeln!(out, "{label:<18}{value}");
        };
        line("File:", self.path.clone());
        line("Format:", self.format.to_string());
        line("Header:", self.header.clone());
        line("Facets:", s.num_facets.to_string());
        line("Points:", s.num_points.to_string());
        line("Min:", vertex(&s.bounds.min));
        line("Max:", vertex(&s.bounds.max));
        line("Size:", vertex(&s.size));
        line("Diameter:", format!("{:.6}", s.bounding_diameter));
        line("Shortest edge:", format!("{:.6}", s.shortest_edge));
        line("Volume:", format!("{:.6}", s.volume));
        line("Surface:", format!("{:.6}", s.surface));
        if s.has_inverted_orientation() {
            line("Orientation:", "inverted (negative signed volume)".to_string());
        }
        for w in &self.warnings {
            let _ = writeln!(out, "warning: {w}");
        }
        out
    }
}

fn vertex(v: &Vertex) -> String {
    format!("{:.6} {:.6} {:.6}", v.x, v.y, v.z)
}
