//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Simulations run per move decision.
    pub num_simulations: u32,

    /// PUCT exploration constant (default: 1.0).
    /// Higher values favor exploration over exploitation.
    pub cpuct: f64,

    /// Maximum simulation depth (0 = unlimited).
    /// At the limit the network value stands in for the subtree.
    pub max_depth: u32,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            num_simulations: 25,
            cpuct: 1.0,
            max_depth: 0,
        }
    }
}

impl MCTSConfig {
    /// Set the number of simulations per move.
    #[must_use]
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.num_simulations = simulations;
        self
    }

    /// Set the exploration constant.
    #[must_use]
    pub fn with_cpuct(mut self, cpuct: f64) -> Self {
        self.cpuct = cpuct;
        self
    }

    /// Set the maximum simulation depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}
