//! Adjacency-list graph model
//!
//! Provides the in-memory graph the traversal engine walks:
//! - `Vertex`: opaque vertex label
//! - `GraphModel`: ordered, directed adjacency mapping
//! - Tolerant text parsing with an optional diagnostics channel

pub mod model;
pub mod parse;
pub mod types;

pub use model::{GraphModel, SAMPLE_GRAPH};
pub use parse::{DiagnosticKind, ParseDiagnostic};
pub use types::Vertex;
