//! Python bindings for the Ultimate Tic-Tac-Toe engine.
//!
//! This module provides PyO3 bindings for training neural networks with MCTS self-play.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import uttt_zero as uz
//!
//! game = uz.UltimateTicTacToeGame(n=3)
//! board = game.getInitBoard()
//! board, player = game.getNextState(board, 1, 40)
//! print(uz.UltimateTicTacToeGame.display(board))
//!
//! config = uz.SelfPlayConfig(num_mcts_sims=50)
//! worker = uz.SelfPlayWorker(config, n=3)
//! examples = worker.execute_episode(seed=42).examples()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;
mod py_nn;
mod py_self_play;
mod py_training;

pub use py_games::*;
pub use py_nn::*;
pub use py_self_play::*;
pub use py_training::*;

/// uttt_zero: Ultimate Tic-Tac-Toe for AlphaZero-style training.
///
/// This module provides:
/// - The game adapter with camel-case methods
/// - MCTS self-play infrastructure
/// - Training data collection
/// - Neural network integration via Python callbacks
#[pymodule]
fn uttt_zero(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Games
    m.add_class::<PyUltimateTicTacToe>()?;

    // Neural network types
    m.add_class::<PyPolicyValueNetwork>()?;

    // Training types
    m.add_class::<PyStep>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_class::<PyTrainingSample>()?;

    // Self-play
    m.add_class::<PySelfPlayConfig>()?;
    m.add_class::<PySelfPlayWorker>()?;

    m.add("DRAW_VALUE", crate::games::ultimate::DRAW_VALUE)?;

    Ok(())
}
