//! Property tests over generated boards.

use proptest::prelude::*;

use checkmate::constants::{ALL_DIRECTIONS, Direction};
use checkmate::{BoardInput, Verdict, analyze};

/// Cells that never count as pieces.
fn filler() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('.'),
        Just(' '),
        Just('x'),
        Just('k'),
        Just('r'),
        Just('q'),
        Just('3'),
        Just('\u{0e01}'),
    ]
}

fn any_cell() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => filler(),
        1 => Just('R'),
        1 => Just('B'),
        1 => Just('Q'),
        1 => Just('P'),
    ]
}

/// Side, king square and cells of an NxN board. The king is placed by
/// [`with_king`].
fn valid_board() -> impl Strategy<Value = (usize, (usize, usize), Vec<char>)> {
    (1usize..=8).prop_flat_map(|n| {
        (
            Just(n),
            (0..n, 0..n),
            proptest::collection::vec(any_cell(), n * n),
        )
    })
}

fn render(n: usize, cells: &[char]) -> String {
    cells
        .chunks(n)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn with_king(n: usize, king: (usize, usize), mut cells: Vec<char>) -> String {
    cells[king.0 * n + king.1] = 'K';
    render(n, &cells)
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_text(text in "\\PC{0,80}") {
        let _ = analyze(&BoardInput::from(text.as_str()));
    }

    #[test]
    fn never_panics_on_arbitrary_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..80)) {
        let _ = analyze(&BoardInput::from(bytes));
    }

    #[test]
    fn analysis_is_idempotent((n, king, cells) in valid_board()) {
        let input = BoardInput::from(with_king(n, king, cells));
        prop_assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn valid_boards_never_error((n, king, cells) in valid_board()) {
        let verdict = analyze(&BoardInput::from(with_king(n, king, cells)));
        prop_assert!(!verdict.is_error());
    }

    #[test]
    fn lone_king_is_never_in_check(
        n in 1usize..=8,
        fill in proptest::collection::vec(filler(), 64),
        king in (0usize..8, 0usize..8),
    ) {
        let king = (king.0 % n, king.1 % n);
        let cells = fill[..n * n].to_vec();
        prop_assert_eq!(analyze(&BoardInput::from(with_king(n, king, cells))), Verdict::Fail);
    }

    #[test]
    fn oversized_boards_error(n in 9usize..=12) {
        let row = ".".repeat(n);
        let mut rows = vec![row; n];
        rows[0].replace_range(0..1, "K");
        prop_assert!(analyze(&BoardInput::from(rows.join("\n"))).is_error());
    }

    #[test]
    fn ragged_boards_error(n in 2usize..=8, short in 0usize..8, extra in 1usize..4) {
        let short = short % n;
        let mut rows = vec![".".repeat(n); n];
        rows[0].replace_range(0..1, "K");
        rows[short].push_str(&".".repeat(extra));
        prop_assert!(analyze(&BoardInput::from(rows.join("\n"))).is_error());
    }

    #[test]
    fn second_king_always_errors((n, king, cells) in valid_board(), other in (0usize..8, 0usize..8)) {
        let other = (other.0 % n, other.1 % n);
        prop_assume!(other != king);
        let mut cells = cells;
        cells[other.0 * n + other.1] = 'K';
        let verdict = analyze(&BoardInput::from(with_king(n, king, cells)));
        prop_assert!(verdict.is_error());
    }

    #[test]
    fn lowercase_king_is_no_king((n, king, cells) in valid_board()) {
        let mut cells = cells;
        cells[king.0 * n + king.1] = 'k';
        prop_assert!(analyze(&BoardInput::from(render(n, &cells))).is_error());
    }

    /// Slider and king on one ray, any direction. A blocker strictly between
    /// them turns Success into Fail, and taking it away turns it back.
    #[test]
    fn blocker_between_slider_and_king_flips_verdict(
        n in 3usize..=8,
        king in (0usize..8, 0usize..8),
        dir in 0usize..8,
        dist in 0usize..8,
        at in 0usize..8,
        queen in any::<bool>(),
        pawn in any::<bool>(),
        noise in filler(),
    ) {
        let king = (king.0 % n, king.1 % n);
        let dir = ALL_DIRECTIONS[dir];
        let reach = (1..n).take_while(|&k| offset(n, king, dir, k).is_some()).count();
        prop_assume!(reach >= 2);

        let dist = 2 + dist % (reach - 1);
        let at = 1 + at % (dist - 1);
        let (Some(slider), Some(between)) = (offset(n, king, dir, dist), offset(n, king, dir, at)) else {
            unreachable!("both squares lie within reach");
        };

        let orthogonal = dir.0 == 0 || dir.1 == 0;
        let slider_piece = match (queen, orthogonal) {
            (true, _) => 'Q',
            (false, true) => 'R',
            (false, false) => 'B',
        };
        // a blocker that cannot attack the king along this line itself
        let blocker = match (orthogonal, pawn) {
            (true, true) => 'P',
            (true, false) => 'B',
            (false, _) => 'R',
        };

        let mut cells = vec!['.'; n * n];
        cells[king.0 * n + king.1] = 'K';
        cells[slider.0 * n + slider.1] = slider_piece;
        prop_assert_eq!(analyze(&BoardInput::from(render(n, &cells))), Verdict::Success);

        cells[between.0 * n + between.1] = blocker;
        prop_assert_eq!(analyze(&BoardInput::from(render(n, &cells))), Verdict::Fail);

        // symbols that are not pieces never block
        cells[between.0 * n + between.1] = noise;
        prop_assert_eq!(analyze(&BoardInput::from(render(n, &cells))), Verdict::Success);

        cells[between.0 * n + between.1] = '.';
        prop_assert_eq!(analyze(&BoardInput::from(render(n, &cells))), Verdict::Success);
    }
}

/// The square `k` steps from `from` in direction `dir`, if on an NxN board.
fn offset(n: usize, from: (usize, usize), dir: Direction, k: usize) -> Option<(usize, usize)> {
    let k = isize::try_from(k).ok()?;
    let row = from.0.checked_add_signed(dir.0 * k)?;
    let col = from.1.checked_add_signed(dir.1 * k)?;
    (row < n && col < n).then_some((row, col))
}
