//! The three possible answers and the `checkmate` entry point.

use std::fmt;
use std::io::{self, Write};

use crate::attack::{attackers, is_in_check};
use crate::board::{Board, BoardError};
use crate::constants::{ERROR_TEXT, FAIL_TEXT, SUCCESS_TEXT};
use crate::grid::{BoardInput, parse_grid};

/// Outcome of analysing one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The king is attacked.
    Success,
    /// Valid board, king safe.
    Fail,
    /// Malformed board. The reason is kept for callers but never printed.
    Error(BoardError),
}

impl Verdict {
    pub fn is_error(&self) -> bool {
        matches!(self, Verdict::Error(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Success => SUCCESS_TEXT,
            Verdict::Fail => FAIL_TEXT,
            Verdict::Error(_) => ERROR_TEXT,
        };
        f.write_str(text)
    }
}

/// Parse, validate and check a board. Pure: same input, same verdict.
pub fn analyze(input: &BoardInput) -> Verdict {
    let (board, king) = match Board::validate(parse_grid(input)) {
        Ok(found) => found,
        Err(err) => {
            tracing::debug!(%err, "board rejected");
            return Verdict::Error(err);
        }
    };

    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!(size = board.size(), ?king, attackers = ?attackers(&board, king), "board analysed");
    }

    if is_in_check(&board, king) {
        Verdict::Success
    } else {
        Verdict::Fail
    }
}

/// Analyse `input` and write the verdict line to `out`.
pub fn report<W: Write>(input: &BoardInput, out: &mut W) -> io::Result<Verdict> {
    let verdict = analyze(input);
    writeln!(out, "{verdict}")?;
    Ok(verdict)
}

/// Print `Success`, `Fail` or `Error` for the given board on stdout.
///
/// ```
/// checkmate::checkmate("R...\n.K..\n..P.\n....");  // Success
/// checkmate::checkmate(None::<&str>);             // Error
/// ```
pub fn checkmate(input: impl Into<BoardInput>) {
    println!("{}", analyze(&input.into()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_texts() {
        assert_eq!(Verdict::Success.to_string(), "Success");
        assert_eq!(Verdict::Fail.to_string(), "Fail");
        assert_eq!(Verdict::Error(BoardError::NoKing).to_string(), "Error");
    }

    #[test]
    fn test_analyze_outcomes() {
        assert_eq!(analyze(&"R...\n.K..\n..P.\n....".into()), Verdict::Success);
        assert_eq!(analyze(&"..\n.K".into()), Verdict::Fail);
        assert_eq!(analyze(&"".into()), Verdict::Error(BoardError::Empty));
        assert_eq!(analyze(&BoardInput::NonText), Verdict::Error(BoardError::Empty));
    }

    #[test]
    fn test_report_writes_one_line() {
        let mut out = Vec::new();
        let verdict = report(&"K...\n....\n..K.\n....".into(), &mut out).unwrap();
        assert!(verdict.is_error());
        assert_eq!(String::from_utf8(out).unwrap(), "Error\n");
    }
}
