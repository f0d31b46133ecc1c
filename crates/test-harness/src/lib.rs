//! Test harness for STL mesh scenarios.
//!
//! Provides canned meshes in both encodings, helpers to place them on disk,
//! and assertions that report what was expected, what was found, and where.
//!
//! # Key Components
//!
//! - [`helpers`]: error type, fixture meshes, byte builders
//! - [`assertions`]: statistics and facet assertions with diagnostics

pub mod assertions;
pub mod helpers;

pub use helpers::HarnessError;
