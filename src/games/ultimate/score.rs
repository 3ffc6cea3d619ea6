//! Sub-board outcomes and line detection.
//!
//! Lines are scanned in a fixed order: rows, then columns, then the main
//! diagonal, then the anti-diagonal. The same scan serves a single
//! sub-board (over cells) and the meta-board (over scores).

use serde::{Deserialize, Serialize};

use crate::core::Player;

use super::grid::Mark;

/// Resolved outcome of one sub-board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// No completed line and at least one empty cell.
    #[default]
    Undecided,
    /// A full line is owned by this player.
    Won(Player),
    /// Every cell is filled and no line is complete.
    Drawn,
}

impl Score {
    /// Check if the sub-board is still being played.
    #[inline]
    #[must_use]
    pub fn is_undecided(self) -> bool {
        matches!(self, Score::Undecided)
    }

    /// Check if the sub-board has an outcome.
    #[inline]
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !self.is_undecided()
    }

    /// Winner of the sub-board, if any.
    #[inline]
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Score::Won(p) => Some(p),
            _ => None,
        }
    }

    /// Check if the sub-board may be named as the next forced target.
    ///
    /// Only a won sub-board is never forced. A drawn one can be, and then
    /// yields no moves, which frees the constraint.
    #[inline]
    #[must_use]
    pub fn is_open_to_forcing(self) -> bool {
        matches!(self, Score::Undecided | Score::Drawn)
    }
}

/// One straight line of an `n x n` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Line {
    Row(usize),
    Col(usize),
    Diag,
    Anti,
}

impl Line {
    /// Position of the `k`-th cell along the line.
    #[inline]
    fn cell(self, n: usize, k: usize) -> (usize, usize) {
        match self {
            Line::Row(r) => (r, k),
            Line::Col(c) => (k, c),
            Line::Diag => (k, k),
            Line::Anti => (k, n - 1 - k),
        }
    }
}

/// Every line of an `n x n` grid, in scan order.
fn lines(n: usize) -> impl Iterator<Item = Line> {
    (0..n)
        .map(Line::Row)
        .chain((0..n).map(Line::Col))
        .chain([Line::Diag, Line::Anti])
}

/// Owner of the first complete line of an `n x n` grid of marks.
///
/// A line is complete when each of its `n - 1` adjacent pairs holds equal,
/// non-empty marks.
pub(crate) fn first_complete_line(n: usize, at: impl Fn(usize, usize) -> Mark) -> Option<Player> {
    let mark = |line: Line, k: usize| {
        let (r, c) = line.cell(n, k);
        at(r, c)
    };
    lines(n).find_map(|line| {
        let complete = (1..n).all(|k| {
            let (a, b) = (mark(line, k - 1), mark(line, k));
            !a.is_empty() && a == b
        });
        if complete {
            mark(line, 0).owner()
        } else {
            None
        }
    })
}

/// Score of an `n x n` sub-board given a cell accessor.
pub(crate) fn sub_board_score(n: usize, at: impl Fn(usize, usize) -> Mark) -> Score {
    if let Some(winner) = first_complete_line(n, &at) {
        return Score::Won(winner);
    }
    let any_empty = (0..n).any(|r| (0..n).any(|c| at(r, c).is_empty()));
    if any_empty {
        Score::Undecided
    } else {
        Score::Drawn
    }
}

/// Check if `player` owns a full line of an `n x n` score grid.
pub(crate) fn owns_meta_line(n: usize, player: Player, at: impl Fn(usize, usize) -> Score) -> bool {
    lines(n).any(|line| {
        (0..n).all(|k| {
            let (r, c) = line.cell(n, k);
            at(r, c) == Score::Won(player)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Vec<Vec<Mark>> {
        rows.iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match ch {
                        'O' => Mark::Owned(Player::One),
                        'X' => Mark::Owned(Player::Two),
                        _ => Mark::Empty,
                    })
                    .collect()
            })
            .collect()
    }

    fn score_of(rows: &[&str]) -> Score {
        let g = grid(rows);
        sub_board_score(g.len(), |r, c| g[r][c])
    }

    #[test]
    fn test_empty_is_undecided() {
        assert_eq!(score_of(&["...", "...", "..."]), Score::Undecided);
    }

    #[test]
    fn test_row_column_diagonals() {
        assert_eq!(score_of(&["...", "XXX", "O.O"]), Score::Won(Player::Two));
        assert_eq!(score_of(&["O.X", "O.X", "O.."]), Score::Won(Player::One));
        assert_eq!(score_of(&["X.O", ".XO", "..X"]), Score::Won(Player::Two));
        assert_eq!(score_of(&["X.O", ".O.", "OX."]), Score::Won(Player::One));
    }

    #[test]
    fn test_full_without_line_is_drawn() {
        assert_eq!(score_of(&["OXO", "OXX", "XOO"]), Score::Drawn);
    }

    #[test]
    fn test_full_with_line_is_won() {
        assert_eq!(score_of(&["OOO", "XXO", "XOX"]), Score::Won(Player::One));
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Row 0 belongs to One and column 2 to Two cannot both hold in play,
        // but the scan order still decides which is reported.
        let g = grid(&["OOO", "X.X", "X.X"]);
        assert_eq!(first_complete_line(3, |r, c| g[r][c]), Some(Player::One));
        let g = grid(&["X.O", "X.O", "X.O"]);
        assert_eq!(first_complete_line(3, |r, c| g[r][c]), Some(Player::Two));
    }

    #[test]
    fn test_two_by_two() {
        assert_eq!(score_of(&["OX", "O."]), Score::Won(Player::One));
        assert_eq!(score_of(&["O.", ".O"]), Score::Won(Player::One));
        assert_eq!(score_of(&["OX", "XO"]), Score::Won(Player::One));
        assert_eq!(score_of(&["O.", "X."]), Score::Undecided);
    }

    #[test]
    fn test_score_is_idempotent() {
        let rows = ["OX.", "XO.", "..."];
        assert_eq!(score_of(&rows), score_of(&rows));
    }

    #[test]
    fn test_meta_line() {
        let won = Score::Won(Player::One);
        let scores = [
            [won, Score::Drawn, Score::Undecided],
            [Score::Won(Player::Two), won, Score::Undecided],
            [Score::Drawn, Score::Undecided, won],
        ];
        assert!(owns_meta_line(3, Player::One, |r, c| scores[r][c]));
        assert!(!owns_meta_line(3, Player::Two, |r, c| scores[r][c]));
    }

    #[test]
    fn test_open_to_forcing() {
        assert!(Score::Undecided.is_open_to_forcing());
        assert!(Score::Drawn.is_open_to_forcing());
        assert!(!Score::Won(Player::One).is_open_to_forcing());
        assert_eq!(Score::Won(Player::Two).winner(), Some(Player::Two));
        assert!(Score::Drawn.is_resolved());
    }

    #[test]
    fn test_lines_cover_rows_columns_and_diagonals() {
        let all: Vec<Line> = lines(4).collect();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0], Line::Row(0));
        assert_eq!(all[4], Line::Col(0));

        let cells = |line: Line| (0..4).map(|k| line.cell(4, k)).collect::<Vec<_>>();
        assert_eq!(cells(Line::Row(2)), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(cells(Line::Col(1)), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(cells(Line::Diag), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(cells(Line::Anti), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn test_anti_diagonal_win_on_larger_grid() {
        let g = grid(&["...X", "..X.", ".X..", "X..."]);
        assert_eq!(sub_board_score(4, |r, c| g[r][c]), Score::Won(Player::Two));
    }
}
