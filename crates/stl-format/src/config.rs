//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Default significant digits for ASCII output.
pub const DEFAULT_ASCII_PRECISION: usize = 8;

/// Options shared by the binary and ASCII codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Treat a binary header/size facet-count disagreement as an error
    /// instead of a warning.
    pub strict_facet_count: bool,
    /// Significant digits of each float in ASCII output.
    pub ascii_precision: usize,
    /// Write the mesh header text back out (binary header bytes, or the name
    /// after `solid`). When false, binary headers are zero-filled and ASCII
    /// output starts with a bare `solid`.
    pub preserve_header: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_facet_count: false,
            ascii_precision: DEFAULT_ASCII_PRECISION,
            preserve_header: false,
        }
    }
}

impl CodecConfig {
    /// Mismatches are warnings.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Mismatches are errors.
    pub fn strict() -> Self {
        Self {
            strict_facet_count: true,
            ..Self::default()
        }
    }

    pub fn with_preserved_header(mut self) -> Self {
        self.preserve_header = true;
        self
    }
}
