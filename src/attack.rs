//! Attack detection against the lone king.
//!
//! Sliding pieces share one ray caster, [`first_obstacle`], parameterized by
//! direction tables from [`crate::constants`]. Every non-empty cell blocks a
//! ray, whoever it belongs to, so one enemy can shield the king from another.

use crate::board::{Board, Square};
use crate::constants::{ALL_DIRECTIONS, DIAGONAL, Direction, ORTHOGONAL, PAWN_CAPTURES};
use crate::piece::Piece;

/// Walk from `from` (exclusive) in direction `dir` and return the first
/// occupied square, or `None` if the ray leaves the board.
pub fn first_obstacle(board: &Board, from: Square, dir: Direction) -> Option<Square> {
    let mut cur = board.step(from, dir)?;
    while !board.is_occupied(cur) {
        cur = board.step(cur, dir)?;
    }
    Some(cur)
}

fn ray_hits(board: &Board, from: Square, dirs: &[Direction], target: Square) -> bool {
    dirs.iter()
        .any(|&dir| first_obstacle(board, from, dir) == Some(target))
}

/// True iff `piece` standing on `from` attacks `target`.
pub fn threatens(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece {
        Piece::Pawn => PAWN_CAPTURES
            .iter()
            .any(|&dir| board.step(from, dir) == Some(target)),
        Piece::Rook => ray_hits(board, from, &ORTHOGONAL, target),
        Piece::Bishop => ray_hits(board, from, &DIAGONAL, target),
        Piece::Queen => ray_hits(board, from, &ALL_DIRECTIONS, target),
        Piece::King | Piece::Empty => false,
    }
}

/// Squares of every piece attacking the king, row-major.
pub fn attackers(board: &Board, king: Square) -> Vec<Square> {
    board
        .pieces()
        .filter(|&(sq, piece)| sq != king && threatens(board, sq, piece, king))
        .inspect(|(sq, piece)| tracing::trace!(?sq, %piece, "attacker"))
        .map(|(sq, _)| sq)
        .collect()
}

/// True iff any piece attacks the king. Stops at the first attacker found.
pub fn is_in_check(board: &Board, king: Square) -> bool {
    board
        .pieces()
        .any(|(sq, piece)| sq != king && threatens(board, sq, piece, king))
}
