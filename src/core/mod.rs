//! Core engine types: players, RNG, board tensors, errors.
//!
//! This module contains the game-agnostic building blocks. Rule engines,
//! search and training all exchange `BoardTensor`s and `Player`s from here.

pub mod error;
pub mod player;
pub mod rng;
pub mod tensor;

pub use error::{Error, Result};
pub use player::Player;
pub use rng::GameRng;
pub use tensor::{BoardTensor, EMPTY, FREE_PLAY, PLAYER_ONE, PLAYER_TWO};
