//! Line-by-line parser for the circle-graph DSL.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::syntax::types::{Edge, GraphModel};

use super::base::{LineKind, Parser, classify, source_lines};
use super::matrix::AdjacencyMatrix;

/// Parser for vertex lists, edge lists, paths and adjacency matrices.
pub struct GraphParser;

impl Parser for GraphParser {
    fn parse(&self, src: &str) -> Result<GraphModel, ParseError> {
        let mut builder = GraphBuilder::default();
        for (k, line) in source_lines(src).into_iter().enumerate() {
            let kind = classify(line.text, k == 0)
                .ok_or(ParseError::InvalidLine { line: line.number })?;
            trace!(line = line.number, kind = kind.name(), "classified line");
            builder.apply(kind, line.number)?;
        }
        builder.finish()
    }
}

/// Mutable state for one parse.
#[derive(Default)]
struct GraphBuilder {
    model: GraphModel,
    matrix: AdjacencyMatrix,
}

impl GraphBuilder {
    fn apply(&mut self, kind: LineKind<'_>, line: usize) -> Result<(), ParseError> {
        let is_row = matches!(kind, LineKind::MatrixRow(_));
        if !is_row && !self.matrix.is_empty() {
            return Err(ParseError::MatrixFormatConflict { line });
        }

        match kind {
            LineKind::Flags(flags) => self.model.flags = flags,
            LineKind::MatrixRow(row) => {
                if self.matrix.is_empty() && !self.model.edges.is_empty() {
                    return Err(ParseError::MatrixFormatConflict { line });
                }
                self.matrix.push_row(row);
            }
            LineKind::VertexList(names) => {
                for name in names {
                    self.model.push_vertex(name);
                }
            }
            LineKind::EdgeList(pairs) => {
                for (from, to) in pairs {
                    let from = self.resolve(from, line)?;
                    let to = self.resolve(to, line)?;
                    self.model.edges.push(Edge::new(from, to));
                }
            }
            LineKind::Path(names) => {
                let mut prev: Option<usize> = None;
                for name in names {
                    let index = self.resolve(name, line)?;
                    if let Some(from) = prev {
                        self.model.edges.push(Edge::new(from, index));
                    }
                    prev = Some(index);
                }
            }
        }
        Ok(())
    }

    /// Look a vertex up by name, declaring it when the `auto` flag allows.
    fn resolve(&mut self, name: &str, line: usize) -> Result<usize, ParseError> {
        if let Some(index) = self.model.index_of(name) {
            return Ok(index);
        }
        if self.model.flags.auto {
            debug!(name, line, "auto-declared vertex");
            return Ok(self.model.push_vertex(name));
        }
        Err(ParseError::UndefinedVertex { name: name.to_string(), line })
    }

    fn finish(mut self) -> Result<GraphModel, ParseError> {
        if !self.matrix.is_empty() {
            let offsets = self.model.visible_offsets();
            let edges = self.matrix.materialize(&self.model.flags, &offsets)?;
            self.model.edges.extend(edges);
        }
        debug!(
            vertices = self.model.vertices.len(),
            edges = self.model.edges.len(),
            matrix_rows = self.matrix.row_count(),
            "parsed graph"
        );
        Ok(self.model)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
