//! Error types for grid construction and evaluation

use thiserror::Error;

use crate::point::Point;

#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be turned into a rectangular grid of digits.
    /// `line` is 1-based; 0 refers to the input as a whole.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A position outside `[0, width) x [0, height)` was requested.
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfRange {
        position: Point,
        width: usize,
        height: usize,
    },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed<S: Into<String>>(line: usize, reason: S) -> Self {
        Error::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
