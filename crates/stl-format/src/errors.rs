use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for STL decode/encode operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that abort an STL open or write.
#[derive(Debug, thiserror::Error)]
pub enum StlError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary STL size {file_size} is not 84 + 50k bytes")]
    SizeMismatch { file_size: u64 },

    #[error("facet count mismatch: header states {stated}, file size implies {actual}")]
    FacetCountMismatch { stated: u32, actual: u64 },

    #[error("cannot allocate storage for {facets} facets")]
    Allocation { facets: u64 },

    #[error("malformed ASCII STL at facet {facet}: {message}")]
    MalformedAscii { facet: usize, message: String },

    #[error("{facets} facets exceed the binary STL facet count limit")]
    TooManyFacets { facets: usize },
}

impl StlError {
    pub(crate) fn malformed(facet: usize, message: impl Into<String>) -> Self {
        Self::MalformedAscii {
            facet,
            message: message.into(),
        }
    }
}

/// Non-fatal findings reported alongside a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DecodeWarning {
    /// The binary header's facet count disagrees with the file size; the
    /// size-derived count was used.
    FacetCountMismatch { stated: u32, actual: u64 },
    /// The ASCII line-count estimate disagrees with the parsed structure; the
    /// parsed count was used.
    AsciiFacetEstimate { estimated: usize, actual: usize },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FacetCountMismatch { stated, actual } => write!(
                f,
                "file size doesn't match number of facets in the header ({stated} stated, {actual} used)"
            ),
            Self::AsciiFacetEstimate { estimated, actual } => write!(
                f,
                "estimated {estimated} facets from line count, parsed {actual}"
            ),
        }
    }
}
