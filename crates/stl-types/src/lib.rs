pub mod facet;
pub mod format;
pub mod stats;
pub mod vector;

pub use facet::*;
pub use format::*;
pub use stats::*;
pub use vector::*;
