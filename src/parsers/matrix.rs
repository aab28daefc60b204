//! Adjacency matrix rows and their expansion into edges.
//!
//! Matrix coordinates only ever range over visible vertices. The offset table
//! from [`GraphModel::visible_offsets`](crate::syntax::types::GraphModel::visible_offsets)
//! translates them into full vertex indices.

use tracing::debug;

use crate::error::ParseError;
use crate::syntax::types::{Edge, Flags};

/// Parse one matrix row.
///
/// A row with no internal whitespace is compact: one cell per digit. Anything
/// else is split on whitespace and each token read as a count. Returns `None`
/// if a token is not a number or overflows.
pub fn parse_row(text: &str) -> Option<Vec<u32>> {
    let text = text.trim();
    if !text.contains(char::is_whitespace) {
        return text.chars().map(|c| c.to_digit(10)).collect();
    }
    text.split_whitespace().map(|t| t.parse().ok()).collect()
}

/// Upper bound on the edges one matrix may expand to.
pub const MAX_MATRIX_EDGES: usize = 100_000;

/// Accumulates matrix rows in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<u32>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, flags: &Flags, i: usize, j: usize) -> u32 {
        if flags.flipped {
            self.rows[j][i]
        } else {
            self.rows[i][j]
        }
    }

    fn check_dimensions(&self, n: usize) -> Result<(), ParseError> {
        let bad_width = self.rows.iter().map(Vec::len).find(|&w| w != n);
        if self.rows.len() != n || bad_width.is_some() {
            return Err(ParseError::MatrixDimensionMismatch {
                expected: n,
                rows: self.rows.len(),
                width: bad_width.unwrap_or(n),
            });
        }
        Ok(())
    }

    /// Expand the matrix into edges over full vertex indices.
    ///
    /// `offsets[k]` is the full index of the `k`-th visible vertex, so the
    /// matrix must be `offsets.len()` square. Directed cells count parallel
    /// edges `i -> j`. Undirected graphs read the lower triangle only, require
    /// symmetry, and treat the diagonal as twice the self-loop count.
    pub fn materialize(&self, flags: &Flags, offsets: &[usize]) -> Result<Vec<Edge>, ParseError> {
        let n = offsets.len();
        self.check_dimensions(n)?;

        let mut edges = Vec::new();
        for i in 0..n {
            let columns = if flags.directed { n } else { i + 1 };
            for j in 0..columns {
                let mut count = self.cell(flags, i, j);
                if !flags.directed {
                    if i != j && count != self.cell(flags, j, i) {
                        return Err(ParseError::MatrixAsymmetry { row: i + 1, column: j + 1 });
                    }
                    if i == j {
                        if count % 2 != 0 {
                            return Err(ParseError::MatrixOddSelfLoop { vertex: i + 1 });
                        }
                        count /= 2;
                    }
                }
                let count = count as usize;
                if edges.len().saturating_add(count) > MAX_MATRIX_EDGES {
                    return Err(ParseError::MatrixTooManyEdges { limit: MAX_MATRIX_EDGES });
                }
                let edge = Edge::new(offset(offsets, i)?, offset(offsets, j)?);
                edges.extend(std::iter::repeat_n(edge, count));
            }
        }
        debug!(size = n, edges = edges.len(), directed = flags.directed, "materialized adjacency matrix");
        Ok(edges)
    }
}

fn offset(offsets: &[usize], k: usize) -> Result<usize, ParseError> {
    offsets
        .get(k)
        .copied()
        .ok_or_else(|| ParseError::Internal(format!("no offset for visible vertex {k}")))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
