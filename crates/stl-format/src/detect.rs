use std::io::{self, Read, Seek, SeekFrom};

use stl_types::Format;
use tracing::debug;

const ASCII_MARKER: &[u8] = b"solid";

/// Classify a stream as ASCII or binary STL.
///
/// The first whitespace-delimited token is compared case-insensitively with
/// `solid`; anything else (including an empty stream) is binary. The stream
/// is rewound to offset 0 before returning.
pub fn detect_format<R: Read + Seek>(reader: &mut R) -> io::Result<Format> {
    reader.seek(SeekFrom::Start(0))?;
    let token = first_token(reader)?;
    reader.seek(SeekFrom::Start(0))?;

    let format = if token.eq_ignore_ascii_case(ASCII_MARKER) {
        Format::Ascii
    } else {
        Format::Binary
    };
    debug!(%format, "format detected");
    Ok(format)
}

/// Read the first token, keeping at most one byte more than the marker.
fn first_token<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut token = Vec::with_capacity(ASCII_MARKER.len() + 1);
    for byte in reader.bytes() {
        let byte = byte?;
        if is_space(byte) {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
        if token.len() > ASCII_MARKER.len() {
            break;
        }
    }
    Ok(token)
}

/// C `isspace`: ASCII whitespace plus vertical tab. Detection, header
/// stripping and the ASCII tokenizer all split on exactly this set.
pub(crate) fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

/// [`is_space`] for `char`; anything outside ASCII is not a separator.
pub(crate) fn is_space_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_space)
}
