//! Raw input to rows of characters.
//!
//! The parser is total: whatever comes in, a finite [`Grid`] comes out. Input
//! that is not text at all is represented by [`BoardInput::NonText`] and
//! yields zero rows, which the validator then rejects like an empty board.

use std::ffi::OsString;

use crate::constants::MAX_SIDE;

/// Rows of symbols exactly as they appeared in the input.
pub type Grid = Vec<Vec<char>>;

/// A board description as received at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardInput {
    /// Board text, rows separated by `'\n'`.
    Text(String),
    /// Something that could not be read as text (missing value, invalid
    /// UTF-8 bytes, non-Unicode OS string).
    NonText,
}

impl From<&str> for BoardInput {
    fn from(s: &str) -> Self {
        BoardInput::Text(s.to_string())
    }
}

impl From<String> for BoardInput {
    fn from(s: String) -> Self {
        BoardInput::Text(s)
    }
}

impl From<Option<&str>> for BoardInput {
    fn from(s: Option<&str>) -> Self {
        s.map_or(BoardInput::NonText, BoardInput::from)
    }
}

impl From<Vec<u8>> for BoardInput {
    fn from(bytes: Vec<u8>) -> Self {
        String::from_utf8(bytes).map_or(BoardInput::NonText, BoardInput::Text)
    }
}

impl From<&[u8]> for BoardInput {
    fn from(bytes: &[u8]) -> Self {
        std::str::from_utf8(bytes).map_or(BoardInput::NonText, BoardInput::from)
    }
}

impl From<OsString> for BoardInput {
    fn from(s: OsString) -> Self {
        s.into_string().map_or(BoardInput::NonText, BoardInput::Text)
    }
}

/// Split the input into rows.
///
/// Only `'\n'` separates rows. Blank leading or trailing lines are kept as
/// empty rows and `'\r'` stays inside its row as an ordinary symbol, so CRLF
/// text usually fails the square check later on.
///
/// At most `MAX_SIDE + 1` rows of at most `MAX_SIDE + 1` symbols are read.
/// Anything past that cannot be a valid board, and the truncated grid still
/// fails validation for the same reason the full input would.
pub fn parse_grid(input: &BoardInput) -> Grid {
    match input {
        BoardInput::NonText => {
            tracing::debug!("non-text board input, treating as empty");
            Vec::new()
        }
        BoardInput::Text(text) if text.is_empty() => Vec::new(),
        BoardInput::Text(text) => text
            .split('\n')
            .take(MAX_SIDE + 1)
            .map(|row| row.chars().take(MAX_SIDE + 1).collect())
            .collect(),
    }
}
