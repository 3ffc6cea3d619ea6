//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one move decision.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Simulations performed.
    pub simulations: u32,

    /// Boards expanded with a network evaluation.
    pub nodes_expanded: u32,

    /// Simulations that ended on a terminal board.
    pub terminal_hits: u32,

    /// Maximum depth reached during search.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate simulations per second.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of simulations that expanded a new board.
    #[must_use]
    pub fn expansion_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.simulations as f64
        }
    }
}
