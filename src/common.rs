//! Common types: line families and board errors.

use core::fmt;

/// The four families of lines a conflict can occur on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Runs from left to right.
    Row,
    /// Runs from top to bottom.
    Column,
    /// Runs from top-left to bottom-right.
    MajorDiagonal,
    /// Runs from top-right to bottom-left.
    MinorDiagonal,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row => write!(f, "row"),
            Line::Column => write!(f, "column"),
            Line::MajorDiagonal => write!(f, "major diagonal"),
            Line::MinorDiagonal => write!(f, "minor diagonal"),
        }
    }
}

/// Errors returned by board and conflict operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Matrix row has a different length than the matrix has rows.
    NonSquareMatrix {
        row: usize,
        len: usize,
        rows: usize,
    },
    /// Cell coordinates are out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize },
    /// Line index is outside the valid domain for that line family.
    LineOutOfBounds { line: Line, index: isize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NonSquareMatrix { row, len, rows } => {
                write!(
                    f,
                    "NonSquareMatrix: row {} has {} cells, expected {}",
                    row, len, rows
                )
            }
            BoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BoardError::LineOutOfBounds { line, index } => {
                write!(f, "LineOutOfBounds: no {} with index {}", line, index)
            }
        }
    }
}
