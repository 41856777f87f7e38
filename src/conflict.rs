//! Read-only conflict predicates over a board.
//!
//! A line is in conflict when strictly more than one of its cells holds the
//! value one. Cells with other nonzero counts are storable but do not count
//! as occupied. The checker borrows the board and keeps no state of its own.

use crate::board::Board;
use crate::common::{BoardError, Line};
use crate::diagonal::{DiagonalCells, MajorDiagonal, MinorDiagonal};
use num_traits::{PrimInt, Unsigned, Zero};

/// Stateless conflict queries over a borrowed [`Board`].
#[derive(Clone, Copy)]
pub struct ConflictChecker<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a Board<T>,
}

impl<'a, T> ConflictChecker<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    pub fn new(board: &'a Board<T>) -> Self {
        ConflictChecker { board }
    }

    /// True when `row` holds more than one piece.
    pub fn has_row_conflict_at(&self, row: usize) -> Result<bool, BoardError> {
        let cells = self.board.row_at(row)?;
        Ok(line_has_conflict(cells.iter().copied()))
    }

    /// True when any row holds more than one piece.
    pub fn has_any_row_conflicts(&self) -> bool {
        self.board
            .rows()
            .any(|cells| line_has_conflict(cells.iter().copied()))
    }

    /// True when `col` holds more than one piece.
    pub fn has_col_conflict_at(&self, col: usize) -> Result<bool, BoardError> {
        if col >= self.board.size() {
            return Err(BoardError::LineOutOfBounds {
                line: Line::Column,
                index: col as isize,
            });
        }
        Ok(line_has_conflict(self.board.rows().map(|cells| cells[col])))
    }

    /// True when any column holds more than one piece.
    pub fn has_any_col_conflicts(&self) -> bool {
        (0..self.board.size())
            .any(|col| line_has_conflict(self.board.rows().map(|cells| cells[col])))
    }

    /// True when the major diagonal with the given id holds more than one
    /// piece. Ids run over `[-(n-1), n-1]`; see [`MajorDiagonal`].
    pub fn has_major_diagonal_conflict_at(&self, id: isize) -> Result<bool, BoardError> {
        let diagonal = MajorDiagonal::new(id);
        if !diagonal.in_bounds(self.board.size()) {
            return Err(BoardError::LineOutOfBounds {
                line: Line::MajorDiagonal,
                index: id,
            });
        }
        Ok(self.walk_has_conflict(diagonal.cells(self.board.size())))
    }

    /// True when any major diagonal holds more than one piece.
    pub fn has_any_major_diagonal_conflicts(&self) -> bool {
        MajorDiagonal::ids(self.board.size())
            .any(|diagonal| self.walk_has_conflict(diagonal.cells(self.board.size())))
    }

    /// True when the minor diagonal with the given id holds more than one
    /// piece. Ids run over `[0, 2n-2]`; see [`MinorDiagonal`].
    pub fn has_minor_diagonal_conflict_at(&self, id: usize) -> Result<bool, BoardError> {
        let diagonal = MinorDiagonal::new(id);
        if !diagonal.in_bounds(self.board.size()) {
            return Err(BoardError::LineOutOfBounds {
                line: Line::MinorDiagonal,
                index: id as isize,
            });
        }
        Ok(self.walk_has_conflict(diagonal.cells(self.board.size())))
    }

    /// True when any minor diagonal holds more than one piece.
    pub fn has_any_minor_diagonal_conflicts(&self) -> bool {
        MinorDiagonal::ids(self.board.size())
            .any(|diagonal| self.walk_has_conflict(diagonal.cells(self.board.size())))
    }

    /// True when any row or column is in conflict.
    pub fn has_any_rooks_conflicts(&self) -> bool {
        self.has_any_row_conflicts() || self.has_any_col_conflicts()
    }

    /// True when any line of any family is in conflict.
    pub fn has_any_queens_conflicts(&self) -> bool {
        self.has_any_rooks_conflicts()
            || self.has_any_major_diagonal_conflicts()
            || self.has_any_minor_diagonal_conflicts()
    }

    /// True when the row, column, or either diagonal passing through
    /// (`row`, `col`) is in conflict. Answers "does the piece placed here
    /// clash with another" once the piece is on the board.
    pub fn has_any_queen_conflicts_on(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.board.cell_at(row, col)?;
        Ok(self.has_row_conflict_at(row)?
            || self.has_col_conflict_at(col)?
            || self.has_major_diagonal_conflict_at(MajorDiagonal::of(row, col).id())?
            || self.has_minor_diagonal_conflict_at(MinorDiagonal::of(row, col).id())?)
    }

    fn walk_has_conflict(&self, cells: DiagonalCells) -> bool {
        let mut pieces = 0;
        for (row, col) in cells {
            if self.board.at(row, col) == T::one() {
                pieces += 1;
                if pieces > 1 {
                    return true;
                }
            }
        }
        false
    }
}

fn line_has_conflict<T, I>(cells: I) -> bool
where
    T: PrimInt + Unsigned + Zero,
    I: Iterator<Item = T>,
{
    let mut pieces = 0;
    for value in cells {
        if value == T::one() {
            pieces += 1;
            if pieces > 1 {
                return true;
            }
        }
    }
    false
}
