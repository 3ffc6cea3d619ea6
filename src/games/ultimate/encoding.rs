//! Conversion between `Board` and `BoardTensor`.
//!
//! Encoding writes each player's marker, and `FREE_PLAY` on every empty
//! cell that is currently legal. Decoding strips the sentinels back to
//! empty cells and reads the constraint from where they sit: all inside one
//! sub-board means that sub-board is forced, anything else is free play.
//! Markers that do not match the legal cells of the rebuilt board are
//! rejected.

use im::Vector;

use crate::core::{BoardTensor, Error, Player, Result, EMPTY, FREE_PLAY, PLAYER_ONE, PLAYER_TWO};

use super::board::{Board, Constraint};
use super::grid::{Mark, Square, SubBoard};

/// Tensor marker for a cell content.
#[inline]
#[must_use]
pub fn marker(mark: Mark) -> f32 {
    match mark {
        Mark::Empty => EMPTY,
        Mark::Owned(Player::One) => PLAYER_ONE,
        Mark::Owned(Player::Two) => PLAYER_TWO,
    }
}

/// Encode a board, marking legal cells with `FREE_PLAY`.
#[must_use]
pub fn encode(board: &Board) -> BoardTensor {
    let side = board.side();
    let mut tensor = BoardTensor::zeros(side);
    for row in 0..side {
        for col in 0..side {
            tensor.set(row, col, marker(board.cell(Square::new(row, col))));
        }
    }
    for sq in board.legal_squares() {
        tensor.set(sq.row, sq.col, FREE_PLAY);
    }
    tensor
}

/// Sub-board size for a grid side, if the side is `n²` with `n >= 2`.
#[must_use]
pub fn sub_board_size(side: usize) -> Option<usize> {
    let n = (side as f64).sqrt().round() as usize;
    (n >= 2 && n * n == side).then_some(n)
}

impl TryFrom<&BoardTensor> for Board {
    type Error = Error;

    fn try_from(tensor: &BoardTensor) -> Result<Self> {
        let side = tensor.side();
        let n = sub_board_size(side).ok_or(Error::BoardSide { side })?;

        let mut cells = Vector::new();
        let mut sentinels = Vec::new();
        for row in 0..side {
            for col in 0..side {
                let value = tensor.get(row, col);
                let mark = if value == PLAYER_ONE {
                    Mark::Owned(Player::One)
                } else if value == PLAYER_TWO {
                    Mark::Owned(Player::Two)
                } else if value == EMPTY {
                    Mark::Empty
                } else if value == FREE_PLAY {
                    sentinels.push(Square::new(row, col));
                    Mark::Empty
                } else {
                    return Err(Error::UnknownMarker { value, row, col });
                };
                cells.push_back(mark);
            }
        }

        let active = match sentinel_sub_boards(tensor, n).as_slice() {
            [sb] => Constraint::Forced(*sb),
            _ => Constraint::Free,
        };

        let board = Board::from_parts(n, cells, active);
        if let Some(sq) = sentinels
            .iter()
            .find(|s| board.score(s.sub_board(n)).winner().is_some())
        {
            return Err(Error::SentinelInWonSubBoard {
                row: sq.row,
                col: sq.col,
            });
        }

        // A tensor without markers is read as free play. Otherwise the
        // markers must be exactly the legal cells of the rebuilt board.
        if !sentinels.is_empty() {
            let legal = board.legal_squares();
            if sentinels != legal {
                return Err(Error::InconsistentSentinels {
                    marked: sentinels.len(),
                    legal: legal.len(),
                });
            }
        }
        Ok(board)
    }
}

/// Decode a tensor produced by `encode`.
///
/// Panics on a malformed tensor.
#[must_use]
pub fn decode(tensor: &BoardTensor) -> Board {
    match Board::try_from(tensor) {
        Ok(board) => board,
        Err(e) => panic!("malformed board tensor: {e}"),
    }
}

/// Sub-boards holding at least one `FREE_PLAY` marker.
#[must_use]
pub fn sentinel_sub_boards(tensor: &BoardTensor, n: usize) -> Vec<SubBoard> {
    let side = tensor.side();
    let mut found: Vec<SubBoard> = Vec::new();
    for row in 0..side {
        for col in 0..side {
            if tensor.get(row, col) == FREE_PLAY {
                let sb = Square::new(row, col).sub_board(n);
                if !found.contains(&sb) {
                    found.push(sb);
                }
            }
        }
    }
    found
}
