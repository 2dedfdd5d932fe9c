//! Checkmate: is the lone king in check?
//!
//! Given a textual board (rows separated by `'\n'`, at most 8x8, exactly one
//! `K`), this crate decides whether any `R`, `B`, `Q` or `P` attacks the king,
//! taking blocking into account. Every other symbol is an empty cell.
//!
//! ## Modules
//!
//! - [`constants`] - Board bound, symbols, verdict texts, ray directions
//! - [`grid`] - Input boundary and row splitting
//! - [`piece`] - Symbol classification
//! - [`board`] - Board validation and king lookup
//! - [`attack`] - Ray casting and per-piece attack rules
//! - [`verdict`] - `Success` / `Fail` / `Error` and the `checkmate` entry point
//! - [`demo`] - Random board generation
//! - [`params`], [`scan`] - Logic behind the `aff_rev_params` and `scan_it` tools
//!
//! ## Example
//!
//! ```
//! use checkmate::{analyze, BoardInput, Verdict};
//!
//! let board = "R...\n.K..\n..P.\n....";
//! assert_eq!(analyze(&BoardInput::from(board)), Verdict::Success);
//!
//! // Lowercase letters are not pieces, so this board has no king.
//! assert!(analyze(&BoardInput::from("..\n.k")).is_error());
//! ```

pub mod attack;
pub mod board;
pub mod constants;
pub mod demo;
pub mod grid;
pub mod params;
pub mod piece;
pub mod scan;
pub mod verdict;

pub use board::{Board, BoardError, ErrorClass, Square};
pub use grid::BoardInput;
pub use piece::Piece;
pub use verdict::{Verdict, analyze, checkmate, report};
