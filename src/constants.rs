//! Constants for board bounds, piece symbols, verdict texts, and ray directions.
//!
//! Everything here is fixed at compile time. The board side is bounded by
//! [`MAX_SIDE`] so that the worst case the attack engine ever looks at is a
//! standard 8x8 chessboard.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest accepted board side (NxN). Anything bigger is rejected before
/// movement analysis.
pub const MAX_SIDE: usize = 8;

/// Symbol used by [`crate::board::Board`]'s `Display` and the demo generator
/// for an empty cell. Any unknown symbol behaves the same way.
pub const EMPTY: char = '.';

// =============================================================================
// Piece Symbols (case-sensitive)
// =============================================================================

pub const KING: char = 'K';
pub const ROOK: char = 'R';
pub const BISHOP: char = 'B';
pub const QUEEN: char = 'Q';
pub const PAWN: char = 'P';

// =============================================================================
// Verdict Texts
// =============================================================================

/// Printed when the king is attacked.
pub const SUCCESS_TEXT: &str = "Success";

/// Printed when the board is valid and the king is safe.
pub const FAIL_TEXT: &str = "Fail";

/// Printed for every malformed board.
pub const ERROR_TEXT: &str = "Error";

/// Printed by the collaborator tools when they have nothing to report.
pub const NONE_TEXT: &str = "none";

// =============================================================================
// Ray Directions
// =============================================================================

/// A step on the board as (row delta, column delta). Negative rows go "up".
pub type Direction = (isize, isize);

/// Order: North, East, South, West
pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Order: NE, SE, SW, NW
pub const DIAGONAL: [Direction; 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// Union of [`ORTHOGONAL`] and [`DIAGONAL`].
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),  // North
    (0, 1),   // East
    (1, 0),   // South
    (0, -1),  // West
    (-1, 1),  // NE
    (1, 1),   // SE
    (1, -1),  // SW
    (-1, -1), // NW
];

/// Squares a pawn captures on, relative to itself. Pawns only strike upward.
pub const PAWN_CAPTURES: [Direction; 2] = [(-1, -1), (-1, 1)];
