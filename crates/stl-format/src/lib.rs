//! STL encoding detection and the binary/ASCII codecs.
//!
//! Decoding is two explicit traversals of a seekable stream: the first sizes
//! the facet storage, the second populates it while accumulating the
//! bounding box. Encoding mirrors the layout of each codec.

pub mod ascii;
pub mod binary;
pub mod config;
pub mod detect;
pub mod errors;
pub mod le;

pub use config::CodecConfig;
pub use detect::detect_format;
pub use errors::{DecodeWarning, StlError, StlResult};

use std::io::{BufRead, Seek, Write};

use detect::is_space_char;
use mesh_kernel::BoundsSummary;
use stl_types::{Facet, Format};
use tracing::instrument;

/// Everything a decoder produces in one open.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub format: Format,
    /// Binary header text up to the first NUL, or the first ASCII line.
    pub header: String,
    pub facets: Vec<Facet>,
    /// Bounding box and shortest-edge estimate gathered while populating.
    pub bounds: BoundsSummary,
    pub warnings: Vec<DecodeWarning>,
}

/// Detect the encoding of `reader` and decode it with the matching codec.
#[instrument(skip_all)]
pub fn decode<R: BufRead + Seek>(mut reader: R, config: &CodecConfig) -> StlResult<Decoded> {
    match detect_format(&mut reader)? {
        Format::Ascii => ascii::decode(reader, config),
        Format::Binary => binary::decode(reader, config),
    }
}

/// Encode `facets` in `format`. `header` is only written when
/// `config.preserve_header` is set.
pub fn encode<W: Write>(
    writer: W,
    facets: &[Facet],
    header: &str,
    format: Format,
    config: &CodecConfig,
) -> StlResult<()> {
    let header = config.preserve_header.then_some(header);
    match format {
        Format::Ascii => ascii::encode(writer, facets, header, config.ascii_precision),
        Format::Binary => binary::encode(writer, facets, header),
    }
}

/// Reserve storage for exactly `count` facets, reporting failure as a value.
pub(crate) fn allocate_facets(count: u64) -> StlResult<Vec<Facet>> {
    let alloc_error = || StlError::Allocation { facets: count };
    let len = usize::try_from(count).map_err(|_| alloc_error())?;
    let mut facets = Vec::new();
    facets.try_reserve_exact(len).map_err(|_| alloc_error())?;
    Ok(facets)
}

/// Drop leading `solid` tokens so a header can't be mistaken for, or
/// duplicate, the ASCII opening keyword.
pub(crate) fn strip_solid_keyword(text: &str) -> &str {
    let mut rest = text.trim_start_matches(is_space_char);
    loop {
        let end = rest.find(is_space_char).unwrap_or(rest.len());
        if !rest[..end].eq_ignore_ascii_case("solid") {
            return rest;
        }
        rest = rest[end..].trim_start_matches(is_space_char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_solid_keyword() {
        assert_eq!(strip_solid_keyword("solid cube"), "cube");
        assert_eq!(strip_solid_keyword("  SOLID  solid part 1"), "part 1");
        assert_eq!(strip_solid_keyword("solid"), "");
        assert_eq!(strip_solid_keyword("solidworks part"), "solidworks part");
        assert_eq!(strip_solid_keyword(""), "");
    }

    #[test]
    fn test_strip_solid_keyword_vertical_tab() {
        assert_eq!(strip_solid_keyword("solid\x0Bpart"), "part");
        assert_eq!(strip_solid_keyword("\x0Bsolid\x0B\x0Bsolid\tpart"), "part");
    }

    #[test]
    fn test_allocate_zero() {
        let facets = allocate_facets(0).unwrap();
        assert!(facets.is_empty());
    }

    #[test]
    fn test_allocate_impossible_count_is_an_error() {
        let err = allocate_facets(u64::MAX).unwrap_err();
        assert!(matches!(err, StlError::Allocation { facets } if facets == u64::MAX));
    }
}
