//! Neural network integration.
//!
//! This module provides the evaluator interface used by search for
//! AlphaZero-style training.
//!
//! ## Overview
//!
//! - **Trait**: `PolicyValueNetwork` over canonical `BoardTensor`s
//! - **Baseline**: `UniformPolicyZeroValue` for testing
//!
//! ## Usage
//!
//! ```rust
//! use uttt_zero::games::UltimateTicTacToe;
//! use uttt_zero::nn::{PolicyValueNetwork, UniformPolicyZeroValue};
//! use uttt_zero::rules::Game;
//!
//! let game = UltimateTicTacToe::new(3);
//! let network = UniformPolicyZeroValue::new(game.action_size());
//!
//! let (policy, value) = network.predict(&game.init_board());
//! assert_eq!(policy.len(), 82);
//! assert_eq!(value, 0.0);
//! ```

pub mod traits;

pub use traits::{PolicyValueNetwork, UniformPolicyZeroValue};
