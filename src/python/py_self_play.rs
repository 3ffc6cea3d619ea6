//! Self-play bindings for Python.

use pyo3::prelude::*;

use crate::games::UltimateTicTacToe;
use crate::mcts::MCTSConfig;
use crate::nn::{PolicyValueNetwork, UniformPolicyZeroValue};
use crate::rules::Game;
use crate::training::{SelfPlayConfig, SelfPlayWorker};

use super::py_nn::PyPolicyValueNetwork;
use super::py_training::PyTrajectory;

/// Python wrapper for SelfPlayConfig.
#[pyclass(name = "SelfPlayConfig")]
#[derive(Clone)]
pub struct PySelfPlayConfig(pub SelfPlayConfig);

#[pymethods]
impl PySelfPlayConfig {
    /// Create a self-play configuration.
    ///
    /// # Arguments
    /// - num_mcts_sims: Simulations per move (default: 25)
    /// - cpuct: PUCT exploration constant (default: 1.0)
    /// - temp_threshold: Moves played at temperature 1 (default: 15)
    /// - max_moves: Move cap per game, 0 for none (default: 0)
    #[new]
    #[pyo3(signature = (
        num_mcts_sims = 25,
        cpuct = 1.0,
        temp_threshold = 15,
        max_moves = 0
    ))]
    fn new(num_mcts_sims: u32, cpuct: f64, temp_threshold: usize, max_moves: usize) -> Self {
        Self(
            SelfPlayConfig::default()
                .with_mcts(
                    MCTSConfig::default()
                        .with_simulations(num_mcts_sims)
                        .with_cpuct(cpuct),
                )
                .with_temp_threshold(temp_threshold)
                .with_max_moves(max_moves),
        )
    }

    #[getter]
    fn num_mcts_sims(&self) -> u32 {
        self.0.mcts.num_simulations
    }

    #[getter]
    fn cpuct(&self) -> f64 {
        self.0.mcts.cpuct
    }

    #[getter]
    fn temp_threshold(&self) -> usize {
        self.0.temp_threshold
    }

    #[getter]
    fn max_moves(&self) -> usize {
        self.0.max_moves
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayConfig(sims={}, cpuct={}, temp_threshold={}, max_moves={})",
            self.0.mcts.num_simulations, self.0.mcts.cpuct, self.0.temp_threshold, self.0.max_moves
        )
    }
}

/// Self-play worker for Ultimate Tic-Tac-Toe.
///
/// Concrete over the game so PyO3 never sees the generic worker.
#[pyclass(name = "SelfPlayWorker")]
pub struct PySelfPlayWorker {
    inner: SelfPlayWorker<UltimateTicTacToe, Box<dyn PolicyValueNetwork>>,
}

#[pymethods]
impl PySelfPlayWorker {
    /// Create a worker.
    ///
    /// Without a `network` the search runs on uniform priors and zero values.
    #[new]
    #[pyo3(signature = (config, n = 3, network = None))]
    fn new(
        py: Python<'_>,
        config: &PySelfPlayConfig,
        n: usize,
        network: Option<PyRef<'_, PyPolicyValueNetwork>>,
    ) -> PyResult<Self> {
        if n < 2 {
            return Err(pyo3::exceptions::PyValueError::new_err(format!(
                "sub-board size must be at least 2, got {n}"
            )));
        }
        let game = UltimateTicTacToe::new(n);
        let network: Box<dyn PolicyValueNetwork> = match network {
            Some(net) => Box::new(net.clone_ref(py)),
            None => Box::new(UniformPolicyZeroValue::new(game.action_size())),
        };
        Ok(Self {
            inner: SelfPlayWorker::new(game, network, config.0.clone()),
        })
    }

    /// Play one game against itself.
    fn execute_episode(&self, seed: u64) -> PyTrajectory {
        PyTrajectory {
            inner: self.inner.execute_episode(seed),
            game: *self.inner.game(),
        }
    }

    /// Play `count` games with consecutive seeds from `base_seed`.
    fn play_episodes(&self, count: usize, base_seed: u64) -> Vec<PyTrajectory> {
        (0..count)
            .map(|i| self.execute_episode(base_seed.wrapping_add(i as u64)))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayWorker(n={}, sims={})",
            self.inner.game().n(),
            self.inner.config().mcts.num_simulations
        )
    }
}
