//! Parsed form of the graph DSL.

pub mod types;

pub use types::{Edge, Flags, GraphModel};
