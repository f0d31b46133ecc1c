use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use mesh_kernel::{compute_stats, StatsConfig};
use stl_format::{CodecConfig, DecodeWarning, Decoded, StlError, StlResult};
use stl_types::{Facet, Format, Stats};
use tracing::{info, instrument};

/// A decoded STL document.
///
/// Holds the facets exactly as read, the statistics derived from them, and
/// the format tag used by the next [`Mesh::write`]. A new mesh is empty;
/// opening a file is the only way to populate one.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Facets in file order. Fixed once decoding finishes.
    facets: Vec<Facet>,
    /// Detected on open, changed by `set_format`.
    format: Format,
    /// Binary header text or the ASCII `solid` line.
    header: String,
    stats: Stats,
    /// Non-fatal findings from the last open.
    warnings: Vec<DecodeWarning>,
}

impl Mesh {
    /// Create an empty mesh tagged as binary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and decode `path` with default configuration.
    pub fn open(path: impl AsRef<Path>) -> StlResult<Self> {
        Self::open_with(path, &CodecConfig::default(), &StatsConfig::default())
    }

    /// Open and decode `path`, detecting the encoding.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open_with(
        path: impl AsRef<Path>,
        codec: &CodecConfig,
        stats: &StatsConfig,
    ) -> StlResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StlError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::open_reader_with(file, codec, stats)
    }

    /// Decode from any seekable stream with default configuration.
    pub fn open_reader<R: Read + Seek>(reader: R) -> StlResult<Self> {
        Self::open_reader_with(reader, &CodecConfig::default(), &StatsConfig::default())
    }

    /// Decode from any seekable stream.
    pub fn open_reader_with<R: Read + Seek>(
        reader: R,
        codec: &CodecConfig,
        stats: &StatsConfig,
    ) -> StlResult<Self> {
        let decoded = stl_format::decode(BufReader::new(reader), codec)?;
        Ok(Self::from_decoded(decoded, stats))
    }

    fn from_decoded(decoded: Decoded, config: &StatsConfig) -> Self {
        let Decoded {
            format,
            header,
            facets,
            bounds,
            warnings,
        } = decoded;
        let stats = compute_stats(&facets, &bounds, config);
        info!(%format, facets = facets.len(), "mesh opened");
        Self {
            facets,
            format,
            header,
            stats,
            warnings,
        }
    }

    /// Write to `path` in `format`, or the mesh's own format when `None`.
    pub fn write(&self, path: impl AsRef<Path>, format: Option<Format>) -> StlResult<()> {
        self.write_with(path, format, &CodecConfig::default())
    }

    /// Write to `path`, creating or truncating it. The mesh is not modified.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn write_with(
        &self,
        path: impl AsRef<Path>,
        format: Option<Format>,
        codec: &CodecConfig,
    ) -> StlResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| StlError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to_with(BufWriter::new(file), format.unwrap_or(self.format), codec)
    }

    /// Encode into `writer` with default configuration.
    pub fn write_to<W: Write>(&self, writer: W, format: Format) -> StlResult<()> {
        self.write_to_with(writer, format, &CodecConfig::default())
    }

    pub fn write_to_with<W: Write>(
        &self,
        writer: W,
        format: Format,
        codec: &CodecConfig,
    ) -> StlResult<()> {
        stl_format::encode(writer, &self.facets, &self.header, format, codec)
    }

    /// Snapshot of the derived statistics.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Change the format used by the next write. Facets are untouched.
    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn warnings(&self) -> &[DecodeWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Release the facet storage and return to the empty state.
    pub fn close(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;
    use stl_types::{Vec3, Vertex};

    fn triangle_bytes(format: Format) -> Vec<u8> {
        let facet = Facet::new(
            Vec3::Z,
            [
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(3.0, 0.0, 0.0),
                Vertex::new(0.0, 4.0, 0.0),
            ],
        );
        let mut buf = Vec::new();
        stl_format::encode(&mut buf, &[facet], "", format, &CodecConfig::default()).unwrap();
        buf
    }

    #[test]
    fn test_new_mesh_is_empty_binary() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.format(), Format::Binary);
        assert_eq!(mesh.stats(), Stats::default());
        assert_eq!(mesh.header(), "");
    }

    #[test]
    fn test_open_reader_populates_stats() {
        let mesh = Mesh::open_reader(Cursor::new(triangle_bytes(Format::Binary))).unwrap();
        let stats = mesh.stats();
        assert_eq!(mesh.facets().len(), stats.num_facets);
        assert_eq!(stats.num_points, 3);
        assert_relative_eq!(stats.surface, 6.0, max_relative = 1e-9);
        assert_eq!(stats.size, Vec3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(stats.bounding_diameter, 5.0, max_relative = 1e-9);
        assert_eq!(stats.shortest_edge, 3.0);
    }

    #[test]
    fn test_format_follows_detection() {
        let mesh = Mesh::open_reader(Cursor::new(triangle_bytes(Format::Ascii))).unwrap();
        assert_eq!(mesh.format(), Format::Ascii);
        assert_eq!(mesh.header(), "solid");
    }

    #[test]
    fn test_set_format_leaves_facets_alone() {
        let mut mesh = Mesh::open_reader(Cursor::new(triangle_bytes(Format::Binary))).unwrap();
        let before = mesh.facets().to_vec();
        mesh.set_format(Format::Ascii);
        assert_eq!(mesh.format(), Format::Ascii);
        assert_eq!(mesh.facets(), before.as_slice());

        let mut out = Vec::new();
        mesh.write_to(&mut out, mesh.format()).unwrap();
        assert!(out.starts_with(b"solid"));
    }

    #[test]
    fn test_close_resets() {
        let mut mesh = Mesh::open_reader(Cursor::new(triangle_bytes(Format::Ascii))).unwrap();
        mesh.close();
        assert!(mesh.is_empty());
        assert_eq!(mesh.format(), Format::Binary);
        assert_eq!(mesh.stats(), Stats::default());
        assert!(mesh.warnings().is_empty());
    }

    #[test]
    fn test_open_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.stl");
        let err = Mesh::open(&path).unwrap_err();
        assert!(matches!(err, StlError::Open { path: p, .. } if p == path));
    }

    #[test]
    fn test_write_to_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.stl");
        let err = Mesh::new().write(&path, None).unwrap_err();
        assert!(matches!(err, StlError::Create { .. }));
    }

    #[test]
    fn test_write_empty_mesh_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        for format in [Format::Binary, Format::Ascii] {
            let path = dir.path().join(format!("empty.{format}.stl"));
            Mesh::new().write(&path, Some(format)).unwrap();
            let mesh = Mesh::open(&path).unwrap();
            assert!(mesh.is_empty());
            assert_eq!(mesh.format(), format);
        }
    }
}
