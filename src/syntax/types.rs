//! Graph model produced by the parser.
//!
//! The model is deliberately flat: vertices are addressed by their position in
//! the declaration sequence and edges are plain index pairs. Both orders are
//! significant downstream (matrix unrolling, bend assignment).

/// Leading character that marks a vertex as invisible.
pub const INVISIBLE_MARKER: char = '_';

/// Returns true if a vertex with this name is laid out but never drawn.
pub fn is_invisible(name: &str) -> bool {
    name.starts_with(INVISIBLE_MARKER)
}

// ─── Flags ───────────────────────────────────────────────────────────────────

/// Mode toggles read from the optional first line (`-dsaf`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub directed: bool,
    /// Draw only the first edge of every vertex pair.
    pub simple: bool,
    /// Declare vertices implicitly on first reference in an edge or path.
    pub auto: bool,
    /// Read the adjacency matrix transposed.
    pub flipped: bool,
}

impl Flags {
    /// Apply single-letter toggles. Unknown letters are ignored.
    pub fn from_letters(letters: &str) -> Self {
        let mut flags = Self::default();
        for ch in letters.chars() {
            match ch {
                'd' => flags.directed = true,
                's' => flags.simple = true,
                'a' => flags.auto = true,
                'f' => flags.flipped = true,
                _ => {}
            }
        }
        flags
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// An ordered pair of vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

// ─── GraphModel ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphModel {
    pub flags: Flags,
    /// Vertex names in declaration order, duplicates included.
    pub vertices: Vec<String>,
    pub edges: Vec<Edge>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first vertex slot carrying `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v == name)
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, name: impl Into<String>) -> usize {
        self.vertices.push(name.into());
        self.vertices.len() - 1
    }

    pub fn visible_count(&self) -> usize {
        self.vertices.iter().filter(|v| !is_invisible(v)).count()
    }

    /// Maps a vertex's position among visible vertices to its full index.
    ///
    /// Entry `k` is `k` plus the number of invisible vertices declared before
    /// the `k`-th visible one.
    pub fn visible_offsets(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, name)| !is_invisible(name))
            .map(|(index, _)| index)
            .collect()
    }

    /// Edge endpoints as names, mostly useful for assertions and debugging.
    /// Edges pointing outside the vertex sequence are skipped.
    pub fn edge_names(&self) -> Vec<(&str, &str)> {
        self.edges
            .iter()
            .filter_map(|e| {
                let from = self.vertices.get(e.from)?;
                let to = self.vertices.get(e.to)?;
                Some((from.as_str(), to.as_str()))
            })
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
