//! Training infrastructure for neural network integration.
//!
//! This module provides the data structures and self-play loop for
//! generating training data in an AlphaZero-style training pipeline.
//!
//! ## Overview
//!
//! - **Trajectory**: Records a complete game with boards, policies, and outcome
//! - **SelfPlayWorker**: Runs games using MCTS to generate trajectories
//!
//! ## Usage
//!
//! ```rust
//! use uttt_zero::games::UltimateTicTacToe;
//! use uttt_zero::nn::UniformPolicyZeroValue;
//! use uttt_zero::rules::Game;
//! use uttt_zero::training::{SelfPlayConfig, SelfPlayWorker};
//!
//! let game = UltimateTicTacToe::new(2);
//! let network = UniformPolicyZeroValue::new(game.action_size());
//! let config = SelfPlayConfig::default().with_simulations(4);
//! let worker = SelfPlayWorker::new(game, network, config);
//!
//! let trajectory = worker.execute_episode(42);
//! let samples = trajectory.to_training_samples(&game);
//! assert_eq!(samples.len(), trajectory.len() * 8);
//! ```

pub mod self_play;
pub mod trajectory;

// Re-export main types
pub use self_play::{SelfPlayConfig, SelfPlayWorker};
pub use trajectory::{Step, Trajectory, TrainingSample};
