//! Parsing of graph source text into a [`GraphModel`].

pub mod base;
pub mod dsl;
pub mod matrix;

pub use base::Parser;

use crate::error::ParseError;
use crate::syntax::types::GraphModel;
use dsl::GraphParser;

/// Parse DSL source into a graph model.
pub fn parse(src: &str) -> Result<GraphModel, ParseError> {
    GraphParser.parse(src)
}
