//! Error types for scanning, parsing, reduction, and file generation.

use thiserror::Error;

/// Lexical errors. `offset` is the byte position in the input buffer where
/// the offending literal begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString { offset: usize },

    #[error("invalid numeric literal {literal:?} at byte {offset}")]
    InvalidNumber { literal: String, offset: usize },

    #[error("unexpected byte {byte:#04x} at byte {offset}")]
    UnexpectedByte { byte: u8, offset: usize },
}

/// Structural errors. `offset` is a token index into the scanned sequence;
/// for an exhausted sequence it is one past the final token.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected ',' or ']' at token {offset}")]
    ExpectedArrayDelimiter { offset: usize },

    #[error("expected ']' at token {offset}")]
    ExpectedArrayClose { offset: usize },

    #[error("expected string key at token {offset}")]
    ExpectedObjectKey { offset: usize },

    #[error("expected ':' at token {offset}")]
    ExpectedColon { offset: usize },

    #[error("expected ',' or '}}' at token {offset}")]
    ExpectedObjectDelimiter { offset: usize },

    #[error("expected '}}' at token {offset}")]
    ExpectedObjectClose { offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("top-level JSON must be an object")]
    TopLevelMustBeObject,

    #[error("unexpected token at {offset}")]
    UnexpectedToken { offset: usize },
}

/// Raised by the reduction walker when the parsed document does not match
/// the expected point layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("document has no \"points\" key")]
    MissingPoints,

    #[error("\"points\" is not an array")]
    PointsNotArray,

    #[error("points[{index}] is not an object")]
    PointNotObject { index: usize },

    #[error("points[{index}] is missing coordinate {key:?}")]
    MissingCoordinate { index: usize, key: &'static str },

    #[error("points[{index}] coordinate {key:?} is not a number")]
    CoordinateNotNumber { index: usize, key: &'static str },
}

/// Umbrella error for composed operations (file generation, scan + parse).
#[derive(Error, Debug)]
pub enum HaverError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used by composed operations.
pub type Result<T> = std::result::Result<T, HaverError>;
