//! Board state: an n×n grid of piece counts, mutated by toggling cells.
//!
//! Cells hold small unsigned counts rather than plain booleans; a cell is
//! *occupied* exactly when its value equals one. The grid is generic over
//! the count type, with `u8` as the everyday choice (see [`aliases`]).

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec, vec::Vec};

use crate::common::{BoardError, Line};
use crate::conflict::ConflictChecker;
use crate::observer::{BoardObserver, CellChange};
use core::{any, fmt};
use log::debug;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

/// Serializable board state for syncing or saving positions.
///
/// Snapshots carry only the grid; observer registrations stay behind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot<T> {
    pub size: usize,
    pub cells: Vec<Vec<T>>,
}

/// Main board state: the grid plus registered change observers.
pub struct Board<T>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    cells: Vec<Vec<T>>,
    observers: Vec<Box<dyn BoardObserver<T>>>,
}

impl<T> Board<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty `size`×`size` board (all cells zero).
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![vec![T::zero(); size]; size],
            observers: Vec::new(),
        }
    }

    /// Create a board from a caller-supplied matrix, sized to its row
    /// count. The matrix is taken by value, so later board mutations can
    /// never alias the caller's data.
    pub fn from_matrix(matrix: Vec<Vec<T>>) -> Result<Self, BoardError> {
        let rows = matrix.len();
        for (row, cells) in matrix.iter().enumerate() {
            if cells.len() != rows {
                return Err(BoardError::NonSquareMatrix {
                    row,
                    len: cells.len(),
                    rows,
                });
            }
        }
        Ok(Board {
            size: rows,
            cells: matrix,
            observers: Vec::new(),
        })
    }

    /// Board with one piece per row at a random column, a common starting
    /// arrangement for queens experiments.
    pub fn random_arrangement<R: Rng>(rng: &mut R, size: usize) -> Self {
        let mut board = Board::new(size);
        for row in 0..size {
            let col = rng.random_range(0..size);
            board.cells[row][col] = T::one();
        }
        board
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// The cells of one row.
    pub fn row_at(&self, row: usize) -> Result<&[T], BoardError> {
        self.cells
            .get(row)
            .map(Vec::as_slice)
            .ok_or(BoardError::LineOutOfBounds {
                line: Line::Row,
                index: row as isize,
            })
    }

    /// The value at (`row`, `col`).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<T, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Flip the cell at (`row`, `col`) between zero and one, returning the
    /// value left behind. Any nonzero count toggles down to zero. Observers
    /// are notified in registration order before this returns.
    pub fn toggle_piece_at(&mut self, row: usize, col: usize) -> Result<T, BoardError> {
        self.check_bounds(row, col)?;
        let value = if self.cells[row][col].is_zero() {
            T::one()
        } else {
            T::zero()
        };
        self.cells[row][col] = value;
        debug!("toggled piece at ({}, {})", row, col);
        let change = CellChange { row, col, value };
        for observer in self.observers.iter_mut() {
            observer.board_changed(&change);
        }
        Ok(value)
    }

    /// Register an observer for future toggles.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: BoardObserver<T> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Conflict queries over the current grid.
    pub fn conflicts(&self) -> ConflictChecker<'_, T> {
        ConflictChecker::new(self)
    }

    /// Number of occupied cells (value exactly one).
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|value| **value == T::one())
            .count()
    }

    /// Returns true if every cell is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Zero::is_zero)
    }

    /// Iterator over the occupied cells of the board, row-major.
    pub fn pieces(&self) -> Pieces<'_, T> {
        Pieces {
            board: self,
            row: 0,
            col: 0,
        }
    }

    /// Cell value without bounds checking. Callers guarantee coordinates
    /// produced by an in-bounds line walk.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.cells[row][col]
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            Err(BoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Board<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Error = BoardError;

    fn try_from(matrix: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Board::from_matrix(matrix)
    }
}

impl<T> fmt::Debug for Board<T>
where
    T: PrimInt + Unsigned + Zero + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board<{}> {}x{}:",
            any::type_name::<T>(),
            self.size,
            self.size
        )?;
        for row in &self.cells {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for Board<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for value in row {
                let cell = if *value == T::one() { '■' } else { '□' };
                write!(f, "{} ", cell)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T> From<&Board<T>> for BoardSnapshot<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from(board: &Board<T>) -> Self {
        BoardSnapshot {
            size: board.size,
            cells: board.cells.clone(),
        }
    }
}

impl<T> From<BoardSnapshot<T>> for Board<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from(snapshot: BoardSnapshot<T>) -> Self {
        Board {
            size: snapshot.cells.len(),
            cells: snapshot.cells,
            observers: Vec::new(),
        }
    }
}

/// Iterator over the occupied cells of a board.
#[derive(Clone, Copy)]
pub struct Pieces<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a Board<T>,
    row: usize,
    col: usize,
}

impl<'a, T> Iterator for Pieces<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.board.size {
            let (row, col) = (self.row, self.col);
            if self.col + 1 < self.board.size {
                self.col += 1;
            } else {
                self.col = 0;
                self.row += 1;
            }
            if self.board.at(row, col) == T::one() {
                return Some((row, col));
            }
        }
        None
    }
}

/// Convenience aliases for common count widths.
pub mod aliases {
    use super::Board;

    /// Board with `u8` piece counts, the common case.
    pub type Board8 = Board<u8>;
    /// Board with `u16` piece counts.
    pub type Board16 = Board<u16>;
    /// Board with `u32` piece counts.
    pub type Board32 = Board<u32>;
}
