//! Parser trait, source preprocessing and line classification.
//!
//! The DSL is line oriented. Every kept line is classified exactly once, in a
//! fixed priority order, into a [`LineKind`]. Several forms overlap textually
//! (`a` is both a vertex list and the start of a path, `12` is both a compact
//! matrix row and a vertex name), so the order below is part of the grammar.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::syntax::types::{Flags, GraphModel};

use super::matrix;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for graph source parsers.
pub trait Parser {
    /// Parse the input source string into a graph model.
    fn parse(&self, src: &str) -> Result<GraphModel, ParseError>;
}

// ─── Patterns ────────────────────────────────────────────────────────────────

static FLAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(.*)$").expect("flags pattern"));
static MATRIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s]+$").expect("matrix pattern"));
static EDGE_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*\w+\s*,\s*\w+\s*\)(?:\s*,?\s*\(\s*\w+\s*,\s*\w+\s*\))*$")
        .expect("edge list pattern")
});
static EDGE_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\w+)\s*,\s*(\w+)\s*\)").expect("edge group pattern"));
static VERTEX_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(?:\s*,\s*\w+)*$").expect("vertex list pattern"));
static PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(?:\s*-\s*\w+)+$").expect("path pattern"));

// ─── Preprocessing ───────────────────────────────────────────────────────────

/// A non-blank source line with its comment stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the original text.
    pub number: usize,
    pub text: &'a str,
}

/// Split into lines, strip `//` comments, trim, and drop blank lines.
pub fn source_lines(src: &str) -> Vec<SourceLine<'_>> {
    src.lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let code = raw.find("//").map_or(raw, |at| &raw[..at]);
            let text = code.trim();
            (!text.is_empty()).then_some(SourceLine { number: i + 1, text })
        })
        .collect()
}

// ─── LineKind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Flags(Flags),
    MatrixRow(Vec<u32>),
    EdgeList(Vec<(&'a str, &'a str)>),
    VertexList(Vec<&'a str>),
    Path(Vec<&'a str>),
}

impl LineKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Flags(_) => "flags",
            LineKind::MatrixRow(_) => "matrix row",
            LineKind::EdgeList(_) => "edge list",
            LineKind::VertexList(_) => "vertex list",
            LineKind::Path(_) => "path",
        }
    }
}

/// Classify one trimmed line. `first` is true only for the first kept line,
/// the one place a flags line is legal. Returns `None` for lines that match
/// no form.
pub fn classify(text: &str, first: bool) -> Option<LineKind<'_>> {
    if first {
        if let Some(caps) = FLAGS_RE.captures(text) {
            return Some(LineKind::Flags(Flags::from_letters(&caps[1])));
        }
    }
    if MATRIX_RE.is_match(text) {
        return matrix::parse_row(text).map(LineKind::MatrixRow);
    }
    if EDGE_LIST_RE.is_match(text) {
        let pairs = EDGE_GROUP_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let from = caps.get(1)?.as_str();
                let to = caps.get(2)?.as_str();
                Some((from, to))
            })
            .collect();
        return Some(LineKind::EdgeList(pairs));
    }
    if VERTEX_LIST_RE.is_match(text) {
        return Some(LineKind::VertexList(split_names(text, ',')));
    }
    if PATH_RE.is_match(text) {
        return Some(LineKind::Path(split_names(text, '-')));
    }
    None
}

fn split_names(text: &str, sep: char) -> Vec<&str> {
    text.split(sep).map(str::trim).collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
