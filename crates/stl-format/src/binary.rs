//! Binary STL codec.
//!
//! ```text
//! UINT8[80]    header (arbitrary, zero-padded on write)
//! UINT32       facet count (advisory on read)
//! foreach facet
//!     REAL32[3]  normal
//!     REAL32[3]  vertex 0
//!     REAL32[3]  vertex 1
//!     REAL32[3]  vertex 2
//!     UINT8[2]   extra ("attribute byte count"), carried through
//! end
//! ```
//!
//! Every multi-byte value is little-endian.

use std::io::{Read, Seek, SeekFrom, Write};

use mesh_kernel::BoundsAccumulator;
use stl_types::{Facet, Format};
use tracing::{debug, info, instrument, warn};

use crate::config::CodecConfig;
use crate::errors::{DecodeWarning, StlError, StlResult};
use crate::le::{f32_to_le, floats_from_le, u32_from_le, u32_to_le};
use crate::{allocate_facets, Decoded};

/// Header bytes before the facet count.
pub const HEADER_SIZE: usize = 80;

/// Header plus the facet count.
pub const PREAMBLE_SIZE: u64 = 84;

/// Bytes per facet record: 12 floats and 2 extra bytes.
pub const FACET_SIZE: u64 = 50;

/// Number of facets implied by a file size, or `None` if the size is not
/// `84 + 50k`.
pub fn facets_for_size(file_size: u64) -> Option<u64> {
    let body = file_size.checked_sub(PREAMBLE_SIZE)?;
    (body % FACET_SIZE == 0).then_some(body / FACET_SIZE)
}

/// Decode a binary STL.
///
/// Pass 1 sizes the storage from the stream length; the count stored after
/// the header is only compared against it. Pass 2 reads every record and
/// accumulates the bounding box.
#[instrument(skip_all)]
pub fn decode<R: Read + Seek>(mut reader: R, config: &CodecConfig) -> StlResult<Decoded> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let num_facets = facets_for_size(file_size).ok_or(StlError::SizeMismatch { file_size })?;

    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;
    let mut count = [0u8; 4];
    reader.read_exact(&mut count)?;
    let stated = u32_from_le(count);

    let mut warnings = Vec::new();
    if u64::from(stated) != num_facets {
        if config.strict_facet_count {
            return Err(StlError::FacetCountMismatch {
                stated,
                actual: num_facets,
            });
        }
        warn!(
            stated,
            actual = num_facets,
            "file size doesn't match number of facets in the header"
        );
        warnings.push(DecodeWarning::FacetCountMismatch {
            stated,
            actual: num_facets,
        });
    }
    debug!(file_size, num_facets, "binary STL sized");

    let mut facets = allocate_facets(num_facets)?;
    let mut bounds = BoundsAccumulator::new();
    let mut record = [0u8; FACET_SIZE as usize];
    for _ in 0..num_facets {
        reader.read_exact(&mut record)?;
        let facet = decode_facet(&record);
        bounds.observe(&facet);
        facets.push(facet);
    }

    info!(facets = facets.len(), "binary STL decoded");
    Ok(Decoded {
        format: Format::Binary,
        header: header_text(&header),
        facets,
        bounds: bounds.finish(),
        warnings,
    })
}

/// Decode one 50-byte facet record.
pub fn decode_facet(record: &[u8; FACET_SIZE as usize]) -> Facet {
    let floats = floats_from_le::<12>(&record[..48]);
    Facet::from_floats(floats, [record[48], record[49]])
}

/// Encode one facet into its 50-byte record.
pub fn encode_facet(facet: &Facet) -> [u8; FACET_SIZE as usize] {
    let mut record = [0u8; FACET_SIZE as usize];
    for (i, value) in facet.to_floats().iter().enumerate() {
        record[i * 4..i * 4 + 4].copy_from_slice(&f32_to_le(*value));
    }
    record[48] = facet.extra[0];
    record[49] = facet.extra[1];
    record
}

/// Encode facets as binary STL. `header` is written truncated or
/// zero-padded to 80 bytes; `None` writes an all-zero header.
#[instrument(skip_all, fields(facets = facets.len()))]
pub fn encode<W: Write>(mut writer: W, facets: &[Facet], header: Option<&str>) -> StlResult<()> {
    let count = u32::try_from(facets.len()).map_err(|_| StlError::TooManyFacets {
        facets: facets.len(),
    })?;

    writer.write_all(&header_bytes(header))?;
    writer.write_all(&u32_to_le(count))?;
    for facet in facets {
        writer.write_all(&encode_facet(facet))?;
    }
    writer.flush()?;

    info!(format = %Format::Binary, "binary STL encoded");
    Ok(())
}

/// Header text up to the first NUL, lossily decoded.
fn header_text(header: &[u8; HEADER_SIZE]) -> String {
    let end = header.iter().position(|&b| b == 0).unwrap_or(HEADER_SIZE);
    String::from_utf8_lossy(&header[..end]).trim_end().to_string()
}

/// A header beginning with the token `solid` would make the file detect as
/// ASCII, so that token is dropped.
fn header_bytes(header: Option<&str>) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    if let Some(text) = header {
        let text = crate::strip_solid_keyword(text);
        let bytes = text.as_bytes();
        let len = bytes.len().min(HEADER_SIZE);
        out[..len].copy_from_slice(&bytes[..len]);
    }
    out
}
