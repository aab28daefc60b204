//! Bend assignment for parallel, reciprocal and looping edges.
//!
//! Every unordered vertex pair keeps the orientation it was first seen in and
//! a running count. An edge's bend index is its position in that count, and
//! edges running against the first orientation are flipped so that all edges
//! of a pair share one tangent frame.

use std::collections::HashMap;

use crate::syntax::types::Edge;

/// Bend assignment for one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bend {
    pub index: usize,
    /// Endpoints in drawing order.
    pub from: usize,
    pub to: usize,
    /// The edge was flipped to match its pair's first orientation.
    pub reversed: bool,
}

#[derive(Debug, Clone, Copy)]
struct PairCount {
    first: (usize, usize),
    count: usize,
}

/// Running per-pair edge counts for one render.
#[derive(Debug, Default)]
pub struct BendTracker {
    pairs: HashMap<(usize, usize), PairCount>,
}

impl BendTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next bend for `edge` and advance its pair's counter.
    pub fn assign(&mut self, edge: Edge) -> Bend {
        let key = (edge.from.min(edge.to), edge.from.max(edge.to));
        let entry = self.pairs.entry(key).or_insert(PairCount {
            first: (edge.from, edge.to),
            count: 0,
        });
        let index = entry.count;
        entry.count += 1;
        if entry.first == (edge.from, edge.to) {
            Bend { index, from: edge.from, to: edge.to, reversed: false }
        } else {
            Bend { index, from: edge.to, to: edge.from, reversed: true }
        }
    }
}

/// Perpendicular offset of an edge's anchor from its straight-line midpoint.
///
/// Non-loop bends alternate sides and grow every second step:
/// 0, -2, +2, -4, +4, ... times `bendiness`. Loops always stack outwards:
/// 2, 4, 6, ... times `bendiness`.
pub fn displacement(bend: usize, bendiness: f64, is_loop: bool) -> f64 {
    if is_loop {
        return bendiness * (bend + 1) as f64 * 2.0;
    }
    let steps = bend.div_ceil(2) as f64;
    let sign = if bend % 2 == 0 { 1.0 } else { -1.0 };
    bendiness * steps * 2.0 * sign
}
