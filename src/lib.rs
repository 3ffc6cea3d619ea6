//! # uttt-zero
//!
//! Ultimate Tic-Tac-Toe rule engine and self-play toolkit for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **Tensor Boundary**: Search, evaluators and trainers only ever see
//!    `BoardTensor`s. The typed engine state is rebuilt from a tensor on
//!    every adapter call.
//!
//! 2. **Canonical Boards**: The player to move is always `+1` on boards
//!    handed to search and networks; values flip sign at every ply.
//!
//! 3. **Any Sub-Board Size**: The grid is `n² × n²` for any `n >= 2`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for the cell
//!   and score grids.
//!
//! - **Explicit Configuration**: Search and self-play settings are plain
//!   values handed to constructors.
//!
//! ## Modules
//!
//! - `core`: Players, board tensors, RNG, errors
//! - `rules`: The `Game` contract consumed by search and training
//! - `games`: Ultimate Tic-Tac-Toe engine state and adapter
//! - `nn`: Policy-value network interface
//! - `mcts`: Monte Carlo Tree Search
//! - `training`: Self-play episodes and training samples
//! - `players`: Random, human and search agents
//! - `arena`: Head-to-head matches

pub mod core;
pub mod rules;
pub mod games;
pub mod nn;
pub mod mcts;
pub mod training;
pub mod players;
pub mod arena;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{BoardTensor, Error, GameRng, Player, Result};

pub use crate::rules::{Game, GameResult};

pub use crate::games::ultimate::{Board, Constraint, Score, Square, SubBoard};
pub use crate::games::UltimateTicTacToe;

pub use crate::nn::{PolicyValueNetwork, UniformPolicyZeroValue};

pub use crate::mcts::{MCTSConfig, MCTSSearch, SearchStats};

pub use crate::training::{SelfPlayConfig, SelfPlayWorker, Trajectory, TrainingSample};

pub use crate::players::{Agent, HumanPlayer, MctsPlayer, RandomPlayer};

pub use crate::arena::{Arena, ArenaRecord};
