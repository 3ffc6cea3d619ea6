//! Game implementations.

pub mod ultimate;

pub use ultimate::UltimateTicTacToe;
