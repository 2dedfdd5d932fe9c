//! Validated square boards.
//!
//! A [`Board`] can only be obtained from [`Board::validate`], so every board
//! in the crate is square, between 1x1 and 8x8, and holds exactly one king.

use std::fmt;

use thiserror::Error;

use crate::constants::{Direction, MAX_SIDE};
use crate::grid::Grid;
use crate::piece::Piece;

/// (row, column), zero-indexed from the top-left corner.
pub type Square = (usize, usize);

/// Why a grid is not a usable board. The first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no board: input has no rows")]
    Empty,
    /// `rows` counts what the parser kept, so it is at most `MAX_SIDE + 1`.
    #[error("board has {rows} rows, at most {max} allowed", max = MAX_SIDE)]
    TooLarge { rows: usize },
    /// `len` is capped at `MAX_SIDE + 1` like `rows` above.
    #[error("board is not square: row {row} has {len} cells, expected {side}")]
    NotSquare { row: usize, len: usize, side: usize },
    #[error("board has no king")]
    NoKing,
    #[error("board has {count} kings, expected exactly one")]
    MultipleKings { count: usize },
}

/// Coarse grouping of [`BoardError`]s.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// Empty, oversized, or ragged input.
    Structural,
    /// Zero kings or more than one.
    KingCount,
}

impl BoardError {
    pub fn class(&self) -> ErrorClass {
        match self {
            BoardError::Empty | BoardError::TooLarge { .. } | BoardError::NotSquare { .. } => {
                ErrorClass::Structural
            }
            BoardError::NoKing | BoardError::MultipleKings { .. } => ErrorClass::KingCount,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<char>,
}

impl Board {
    /// Check a parsed grid and locate its king.
    ///
    /// Checks run in order: row count, squareness, king count.
    pub fn validate(grid: Grid) -> Result<(Board, Square), BoardError> {
        let size = grid.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if size > MAX_SIDE {
            return Err(BoardError::TooLarge { rows: size });
        }
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoardError::NotSquare {
                row,
                len: cells.len(),
                side: size,
            });
        }

        let board = Board {
            size,
            cells: grid.into_iter().flatten().collect(),
        };

        let mut kings = board.squares().filter(|&sq| board.piece(sq) == Piece::King);
        let king = kings.next().ok_or(BoardError::NoKing)?;
        let extra = kings.count();
        if extra > 0 {
            return Err(BoardError::MultipleKings { count: extra + 1 });
        }
        Ok((board, king))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, (row, col): Square) -> usize {
        row * self.size + col
    }

    /// Raw symbol at a square, `None` off the board.
    pub fn get(&self, sq: Square) -> Option<char> {
        if sq.0 >= self.size || sq.1 >= self.size {
            return None;
        }
        Some(self.cells[self.idx(sq)])
    }

    /// Piece at a square. Off-board squares read as empty.
    pub fn piece(&self, sq: Square) -> Piece {
        self.get(sq).map_or(Piece::Empty, Piece::from_symbol)
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        !self.piece(sq).is_empty()
    }

    /// The neighbouring square one step away, if it is on the board.
    pub fn step(&self, (row, col): Square, (dr, dc): Direction) -> Option<Square> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    /// Every non-empty square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares()
            .map(|sq| (sq, self.piece(sq)))
            .filter(|(_, p)| !p.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
