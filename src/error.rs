//! Error types for parsing and rendering.
//!
//! Every failure carries two pieces of routing information for the host:
//! the [`Stage`] it happened in and its [`ErrorClass`]. User errors describe
//! malformed input and their message is safe to show verbatim; unexpected
//! errors mean an internal invariant broke and are worth reporting.

use thiserror::Error;

/// Which half of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Render,
}

/// Whether a failure is the author's fault or ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    UserError,
    UnexpectedError,
}

/// Failures raised while turning source text into a [`GraphModel`](crate::syntax::types::GraphModel).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: vertex '{name}' is not defined (declare it first or use the 'a' flag)")]
    UndefinedVertex { name: String, line: usize },

    #[error("line {line} is not valid")]
    InvalidLine { line: usize },

    #[error("line {line}: an adjacency matrix cannot be combined with other edge definitions")]
    MatrixFormatConflict { line: usize },

    /// `expected` is the number of visible vertices.
    #[error("adjacency matrix must be {expected}x{expected}, found {rows} row(s) of width {width}")]
    MatrixDimensionMismatch {
        expected: usize,
        rows: usize,
        width: usize,
    },

    #[error("adjacency matrix of an undirected graph must be symmetrical (row {row}, column {column})")]
    MatrixAsymmetry { row: usize, column: usize },

    #[error("vertex {vertex} must connect to itself an even amount of times in an undirected adjacency matrix")]
    MatrixOddSelfLoop { vertex: usize },

    #[error("adjacency matrix expands to more than {limit} edges")]
    MatrixTooManyEdges { limit: usize },

    #[error("internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ParseError::Internal(_) => ErrorClass::UnexpectedError,
            _ => ErrorClass::UserError,
        }
    }
}

/// Failures raised by a drawing [`Surface`](crate::renderers::Surface).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("could not obtain a drawing context: {0}")]
    NoContext(String),

    #[error("non-finite coordinate in {0} command")]
    NonFinite(&'static str),
}

/// Failures raised while laying out and drawing a parsed graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("edges may not connect to invisible vertices ('{name}')")]
    InvisibleEndpoint { name: String },

    #[error("edge references vertex {index} but only {count} vertices exist")]
    VertexOutOfRange { index: usize, count: usize },

    #[error("could not fit an arc for edge {from} -> {to}")]
    DegenerateArc { from: usize, to: usize },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl RenderError {
    pub fn class(&self) -> ErrorClass {
        match self {
            RenderError::InvisibleEndpoint { .. } => ErrorClass::UserError,
            _ => ErrorClass::UnexpectedError,
        }
    }
}

/// Umbrella error returned by the one-shot entry points in the crate root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Parse(_) => Stage::Parse,
            Error::Render(_) => Stage::Render,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Parse(e) => e.class(),
            Error::Render(e) => e.class(),
        }
    }
}
