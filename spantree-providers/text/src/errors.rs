use std::io;

use spantree_core::{GeometryError, GraphError};
use thiserror::Error;

/// Fatal errors raised while loading a text input.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TextProviderError {
    /// The input held no non-blank line to read a header from.
    #[error("input is empty; expected a header line")]
    EmptyInput,
    /// The header line did not have the expected shape.
    #[error("line {line}: expected header `{expected}`, found `{found}`")]
    MalformedHeader {
        /// 1-based line number of the header.
        line: usize,
        /// Description of the expected header.
        expected: &'static str,
        /// Header text as read.
        found: String,
    },
    /// The header line is not valid UTF-8.
    #[error("line {line}: header is not valid UTF-8")]
    InvalidEncoding {
        /// 1-based line number of the header.
        line: usize,
    },
    /// The declared vertex count is outside `1..=max`.
    #[error("line {line}: vertex count {got} is outside 1..={max}")]
    VertexCountOutOfRange {
        /// 1-based line number of the header.
        line: usize,
        /// Declared vertex count.
        got: i64,
        /// Largest accepted vertex count.
        max: usize,
    },
    /// A coordinate file ended before every declared point was read.
    #[error("expected {expected} coordinate lines but found {found}")]
    MissingCoordinates {
        /// Declared number of points.
        expected: usize,
        /// Number of points actually read.
        found: usize,
    },
    /// A coordinate line did not hold two finite numbers.
    #[error("line {line}: expected `x y` with finite numbers, found `{found}`")]
    MalformedCoordinate {
        /// 1-based line number.
        line: usize,
        /// Line text as read.
        found: String,
    },
    /// Building the graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Deriving point-to-point weights failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Why an edge line was skipped.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SkipReason {
    /// Fewer than three fields were present.
    #[error("expected `u v w` but found {found} field(s)")]
    MissingFields {
        /// Number of fields on the line.
        found: usize,
    },
    /// A field did not parse as the expected integer.
    #[error("`{token}` is not a valid {field}")]
    InvalidNumber {
        /// Which field failed to parse.
        field: &'static str,
        /// The offending token.
        token: String,
    },
    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidEncoding,
    /// The graph refused the edge.
    #[error(transparent)]
    Rejected(#[from] GraphError),
}
