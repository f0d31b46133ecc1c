//! ASCII STL codec.
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Whitespace is free-form. Keywords are consumed positionally and not
//! checked, so only the numbers and the closing `endsolid` matter.

use std::collections::VecDeque;
use std::io::{self, BufRead, Seek, SeekFrom, Write};

use mesh_kernel::BoundsAccumulator;
use stl_types::{Facet, Format, Normal, Vertex};
use tracing::{debug, info, instrument, warn};

use crate::binary::HEADER_SIZE;
use crate::config::CodecConfig;
use crate::detect::is_space_char;
use crate::errors::{DecodeWarning, StlError, StlResult};
use crate::{allocate_facets, Decoded};

/// Grammar lines per facet, used to turn a line count into a facet estimate.
pub const LINES_PER_FACET: usize = 7;

/// Lines of this many bytes or fewer (terminator included) are not counted.
const SHORT_LINE: usize = 4;

/// Pass 1: estimate the facet count from the number of non-short lines.
///
/// The count starts at one to cover a final line without a terminator, then
/// every `\n`-terminated line longer than four bytes is counted. Exact for
/// a well-formed file; an approximation otherwise.
pub fn estimate_facets<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut lines = 1usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') && buf.len() > SHORT_LINE {
            lines += 1;
        }
    }
    debug!(lines, "ASCII lines counted");
    Ok(lines / LINES_PER_FACET)
}

/// Decode an ASCII STL.
#[instrument(skip_all)]
pub fn decode<R: BufRead + Seek>(mut reader: R, _config: &CodecConfig) -> StlResult<Decoded> {
    reader.seek(SeekFrom::Start(0))?;
    let estimated = estimate_facets(&mut reader)?;
    reader.seek(SeekFrom::Start(0))?;

    let header = read_header(&mut reader)?;
    let mut facets = allocate_facets(estimated as u64)?;
    let mut bounds = BoundsAccumulator::new();
    let mut tokens = Tokens::new(reader);

    while let Some(facet) = read_facet(&mut tokens, facets.len())? {
        bounds.observe(&facet);
        facets.push(facet);
    }

    let mut warnings = Vec::new();
    if facets.len() != estimated {
        warn!(
            estimated,
            actual = facets.len(),
            "ASCII facet estimate doesn't match parsed facets"
        );
        warnings.push(DecodeWarning::AsciiFacetEstimate {
            estimated,
            actual: facets.len(),
        });
    }

    info!(facets = facets.len(), "ASCII STL decoded");
    Ok(Decoded {
        format: Format::Ascii,
        header,
        facets,
        bounds: bounds.finish(),
        warnings,
    })
}

/// First line without its terminator, truncated to 80 bytes.
fn read_header<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    line.truncate(HEADER_SIZE);
    Ok(String::from_utf8_lossy(&line).into_owned())
}

/// Read one facet block. `None` at `endsolid` or end of input.
fn read_facet<R: BufRead>(tokens: &mut Tokens<R>, index: usize) -> StlResult<Option<Facet>> {
    match tokens.next_token()? {
        None => return Ok(None),
        Some(t) if t.eq_ignore_ascii_case("endsolid") => return Ok(None),
        Some(_facet) => {}
    }
    tokens.skip(1, index)?; // normal
    let normal = read_vec(tokens, index)?;
    tokens.skip(2, index)?; // outer loop
    let mut vertices = [Vertex::ZERO; 3];
    for v in &mut vertices {
        tokens.skip(1, index)?; // vertex
        *v = read_vec(tokens, index)?;
    }
    tokens.skip(2, index)?; // endloop endfacet
    Ok(Some(Facet::new(normal, vertices)))
}

fn read_vec<R: BufRead>(tokens: &mut Tokens<R>, index: usize) -> StlResult<Normal> {
    let x = tokens.float(index)?;
    let y = tokens.float(index)?;
    let z = tokens.float(index)?;
    Ok(Normal::new(x, y, z))
}

/// Whitespace-delimited tokens read line by line from a stream.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            let text = String::from_utf8_lossy(&self.line);
            self.pending.extend(
                text.split(is_space_char)
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned),
            );
        }
        Ok(self.pending.pop_front())
    }

    fn expect_token(&mut self, index: usize) -> StlResult<String> {
        self.next_token()?
            .ok_or_else(|| StlError::malformed(index, "unexpected end of input"))
    }

    fn skip(&mut self, count: usize, index: usize) -> StlResult<()> {
        for _ in 0..count {
            self.expect_token(index)?;
        }
        Ok(())
    }

    fn float(&mut self, index: usize) -> StlResult<f32> {
        let token = self.expect_token(index)?;
        token
            .parse::<f32>()
            .map_err(|_| StlError::malformed(index, format!("invalid number {token:?}")))
    }
}

/// Encode facets as ASCII STL with `precision` significant digits in
/// scientific notation. `name` follows `solid`/`endsolid` when given.
#[instrument(skip_all, fields(facets = facets.len()))]
pub fn encode<W: Write>(
    mut writer: W,
    facets: &[Facet],
    name: Option<&str>,
    precision: usize,
) -> StlResult<()> {
    let name = name
        .map(|n| crate::strip_solid_keyword(n.lines().next().unwrap_or("")).trim())
        .filter(|n| !n.is_empty());
    let digits = precision.max(1) - 1;
    let v = |x: f32| scientific(x, digits);

    match name {
        Some(name) => writeln!(writer, "solid {name}")?,
        None => writeln!(writer, "solid")?,
    }
    for facet in facets {
        let n = facet.normal;
        writeln!(writer, "  facet normal {} {} {}", v(n.x), v(n.y), v(n.z))?;
        writeln!(writer, "    outer loop")?;
        for p in &facet.vertices {
            writeln!(writer, "      vertex {} {} {}", v(p.x), v(p.y), v(p.z))?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    match name {
        Some(name) => writeln!(writer, "endsolid {name}")?,
        None => writeln!(writer, "endsolid")?,
    }
    writer.flush()?;

    info!(format = %Format::Ascii, "ASCII STL encoded");
    Ok(())
}

/// `d.ddde+XX`: the exponent always carries a sign and at least two digits.
fn scientific(value: f32, digits: usize) -> String {
    let text = format!("{value:.digits$e}");
    let Some(pos) = text.find('e') else {
        return text;
    };
    let Ok(exp) = text[pos + 1..].parse::<i32>() else {
        return text;
    };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{sign}{:02}", &text[..pos], exp.unsigned_abs())
}
