//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! AlphaZero-style search driven only through the `Game` contract and a
//! `PolicyValueNetwork`. Key features:
//!
//! - **Canonical boards**: the player to move is always `+1`, values flip
//!   sign at every ply
//! - **Transpositions**: nodes are keyed by the board's string representation
//! - **Configurable selection**: PUCT (default) or UCB1
//! - **Serializable**: config and statistics can be saved/loaded
//!
//! ## Usage
//!
//! ```rust
//! use uttt_zero::core::Player;
//! use uttt_zero::games::UltimateTicTacToe;
//! use uttt_zero::mcts::{MCTSConfig, MCTSSearch};
//! use uttt_zero::nn::UniformPolicyZeroValue;
//! use uttt_zero::rules::Game;
//!
//! let game = UltimateTicTacToe::new(3);
//! let network = UniformPolicyZeroValue::new(game.action_size());
//! let mut search = MCTSSearch::new(game, network, MCTSConfig::default());
//!
//! let canonical = game.canonical_form(&game.init_board(), Player::One);
//! let probs = search.action_probabilities(&canonical, 1.0);
//! assert_eq!(probs.len(), game.action_size());
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{Edge, Node};
pub use policy::{SelectionPolicy, PUCT, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
