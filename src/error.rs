use crate::coordinate::Coordinate;
use thiserror::Error;

/// Precondition violations. An unreachable goal is not one of these: it is reported as an
/// empty [Path](crate::Path).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate {coordinate} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coordinate: Coordinate,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map symbol {symbol:?} at ({row}, {col})")]
    InvalidCell {
        symbol: char,
        row: usize,
        col: usize,
    },

    #[error("map has no {0} marker")]
    MissingEndpoint(&'static str),

    #[error("map has more than one {0} marker")]
    DuplicateEndpoint(&'static str),
}

pub type Result<T> = std::result::Result<T, GridError>;
