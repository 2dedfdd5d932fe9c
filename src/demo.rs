//! Random board generation for the `demo` subcommand.
//!
//! Boards always have exactly one king; the rest is a random mix of
//! attackers, empty cells and symbols the classifier ignores.

use crate::constants::{BISHOP, EMPTY, KING, MAX_SIDE, PAWN, QUEEN, ROOK};

const ATTACKERS: [char; 4] = [ROOK, BISHOP, QUEEN, PAWN];
const NOISE: [char; 4] = ['x', 'k', '#', '1'];

/// Seeded board generator.
pub struct BoardGenerator {
    rng: fastrand::Rng,
}

impl BoardGenerator {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// A board of side `size` (clamped to 1..=8) as board text.
    pub fn board(&mut self, size: usize) -> String {
        let size = size.clamp(1, MAX_SIDE);
        let king = self.rng.usize(..size * size);

        let mut rows = Vec::with_capacity(size);
        for row in 0..size {
            let line: String = (0..size)
                .map(|col| {
                    if row * size + col == king {
                        KING
                    } else {
                        self.cell()
                    }
                })
                .collect();
            rows.push(line);
        }
        rows.join("\n")
    }

    /// A board with a random side.
    pub fn any_board(&mut self) -> String {
        let size = self.rng.usize(1..=MAX_SIDE);
        self.board(size)
    }

    fn cell(&mut self) -> char {
        match self.rng.u8(..10) {
            0 | 1 => ATTACKERS[self.rng.usize(..ATTACKERS.len())],
            2 => NOISE[self.rng.usize(..NOISE.len())],
            _ => EMPTY,
        }
    }
}
