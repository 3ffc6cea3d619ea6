//! Plain-text rendering of boards.
//!
//! ```text
//!    0 1 2 |3 4 5 |6 7 8 |
//! 0 |/ / / |- - - |- - - |
//! ```
//!
//! `O` and `X` are the players, `/` marks a legal cell and `-` any other
//! empty cell. A score grid follows: the winner's symbol, `=` for a draw and
//! `.` for a sub-board still in play.

use std::fmt::{self, Write as _};

use crate::core::{BoardTensor, FREE_PLAY, PLAYER_ONE, PLAYER_TWO};

use super::board::Board;
use super::encoding::{decode, encode};
use super::grid::SubBoard;
use super::score::Score;

fn cell_symbol(value: f32) -> char {
    if value == PLAYER_ONE {
        'O'
    } else if value == PLAYER_TWO {
        'X'
    } else if value == FREE_PLAY {
        '/'
    } else {
        '-'
    }
}

fn score_symbol(score: Score) -> char {
    match score {
        Score::Undecided => '.',
        Score::Won(p) => p.symbol(),
        Score::Drawn => '=',
    }
}

fn write_rule(out: &mut String, side: usize) {
    out.push_str("  ");
    for _ in 0..side {
        out.push_str("--");
    }
    out.push_str("----\n");
}

/// Render a board tensor as text.
///
/// Panics if the tensor is not a valid board.
#[must_use]
pub fn render(tensor: &BoardTensor) -> String {
    let side = tensor.side();
    let board = decode(tensor);
    let n = board.n();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..side {
        let _ = write!(out, "{col} ");
        if col % n == n - 1 {
            out.push('|');
        }
    }
    out.push('\n');
    write_rule(&mut out, side);

    for row in 0..side {
        let _ = write!(out, "{row} |");
        for col in 0..side {
            out.push(cell_symbol(tensor.get(row, col)));
            out.push(' ');
            if col % n == n - 1 {
                out.push('|');
            }
        }
        out.push('\n');
        if row % n == n - 1 {
            write_rule(&mut out, side);
        }
    }

    out.push_str("scores:\n");
    for r in 0..n {
        out.push_str("  ");
        for c in 0..n {
            out.push(score_symbol(board.score(SubBoard::new(r, c))));
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&encode(self)))
    }
}
