use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two STL encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Keyword grammar starting with `solid`.
    Ascii,
    /// 80-byte header, facet count, 50 bytes per facet.
    #[default]
    Binary,
}

impl Format {
    /// The other encoding.
    pub fn opposite(self) -> Self {
        match self {
            Self::Ascii => Self::Binary,
            Self::Binary => Self::Ascii,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

/// Error returned when a format name is not `ascii` or `binary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown STL format: {} (expected ascii or binary)", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" | "text" => Ok(Self::Ascii),
            "binary" | "bin" => Ok(Self::Binary),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ASCII".parse::<Format>(), Ok(Format::Ascii));
        assert_eq!("Binary".parse::<Format>(), Ok(Format::Binary));
        assert!("obj".parse::<Format>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for format in [Format::Ascii, Format::Binary] {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Format::Ascii.opposite(), Format::Binary);
        assert_eq!(Format::default().opposite(), Format::Ascii);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Format::Ascii).unwrap();
        assert_eq!(json, "\"ascii\"");
    }
}
