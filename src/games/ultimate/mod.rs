//! Ultimate Tic-Tac-Toe.
//!
//! A meta-board of `n x n` sub-boards, each an `n x n` tic-tac-toe board.
//! The cell a player takes inside its sub-board names the sub-board the
//! opponent must play in next.
//!
//! - `Board` is the engine state: cells, sub-board scores, constraint.
//! - `UltimateTicTacToe` adapts it to the tensor-based `Game` contract.

mod board;
mod display;
mod encoding;
mod game;
mod grid;
mod score;
mod symmetry;

pub use board::{Board, Constraint, SubBoardMoves};
pub use display::render;
pub use encoding::{decode, encode, marker, sentinel_sub_boards, sub_board_size};
pub use game::{UltimateTicTacToe, DRAW_VALUE};
pub use grid::{Mark, Square, SubBoard};
pub use score::Score;
pub use symmetry::Symmetry;
