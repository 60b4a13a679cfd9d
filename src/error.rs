//! Error types for tagquery
//!
//! Every variant here is a malformed-input failure: the grammar is fixed and
//! trusted, so parsing stops at the first violation. A query that simply finds
//! nothing is not an error and never produces one of these.

use std::fmt;
use thiserror::Error;

/// Position in the input text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    /// Byte offset from the start of input
    pub offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, counted in characters)
    pub col: u32,
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// What went wrong
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("expected {expected:?}, found {found:?}")]
    UnexpectedChar { expected: char, found: char },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag { expected: String, found: String },
    #[error("max nesting depth exceeded: {max}")]
    MaxDepthExceeded { max: usize },
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Main error type for tagquery
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("error at {pos}: {kind}")]
pub struct Error {
    kind: ErrorKind,
    pos: Pos,
}

impl Error {
    pub const fn new(kind: ErrorKind, pos: Pos) -> Self {
        Self { kind, pos }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Shorthand for an end-of-input error
    pub fn eof(expected: impl Into<String>, pos: Pos) -> Self {
        Self::new(
            ErrorKind::UnexpectedEof {
                expected: expected.into(),
            },
            pos,
        )
    }
}

/// Result type alias for tagquery
pub type Result<T> = std::result::Result<T, Error>;
