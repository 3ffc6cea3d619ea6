//! Game contract for search and training.
//!
//! Games implement `Game` to define:
//! - Legal actions for each board
//! - How actions produce the next board
//! - Terminal values and board symmetries
//!
//! Search, training and players call into `Game` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{Game, GameResult, SymmetryList, SymmetryPair};
