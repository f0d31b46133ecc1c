//! STL mesh document: open a file, inspect its facets and statistics, write
//! it back out in either encoding.
//!
//! # Key Components
//!
//! - [`Mesh`]: owns the facet sequence, statistics and format tag
//! - [`stl_format`]: detection and the binary/ASCII codecs
//! - [`mesh_kernel`]: normals, areas and the statistics passes

pub mod mesh;

pub use mesh::Mesh;

pub use mesh_kernel::StatsConfig;
pub use stl_format::{CodecConfig, DecodeWarning, StlError, StlResult};
pub use stl_types::{BoundingBox, Facet, Format, Normal, Stats, Vec3, Vertex};
