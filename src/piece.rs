//! Symbol to piece classification.

use std::fmt;

use crate::constants::{BISHOP, EMPTY, KING, PAWN, QUEEN, ROOK};

/// What a board cell holds. Anything unrecognised is `Empty`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    King,
    Rook,
    Bishop,
    Queen,
    Pawn,
    Empty,
}

impl Piece {
    /// Classify a single symbol. Case-sensitive: `'k'` is empty, not a king.
    pub fn from_symbol(c: char) -> Piece {
        match c {
            KING => Piece::King,
            ROOK => Piece::Rook,
            BISHOP => Piece::Bishop,
            QUEEN => Piece::Queen,
            PAWN => Piece::Pawn,
            _ => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Canonical symbol, `None` for empty cells.
    pub fn symbol(self) -> Option<char> {
        match self {
            Piece::King => Some(KING),
            Piece::Rook => Some(ROOK),
            Piece::Bishop => Some(BISHOP),
            Piece::Queen => Some(QUEEN),
            Piece::Pawn => Some(PAWN),
            Piece::Empty => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol().unwrap_or(EMPTY))
    }
}
