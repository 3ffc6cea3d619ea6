//! Search statistics per board.
//!
//! Nodes live in a hash table keyed by the canonical board's string
//! representation, so transpositions share one node. Each node keeps one
//! edge per legal action.

use serde::{Deserialize, Serialize};

/// Edge statistics for one legal action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Action index.
    pub action: usize,

    /// Prior probability from the policy network.
    pub prior: f32,

    /// Visit count for this action.
    pub visits: u32,

    /// Mean value for the player to move at the parent.
    pub q: f64,
}

impl Edge {
    /// Create an unvisited edge.
    #[must_use]
    pub fn new(action: usize, prior: f32) -> Self {
        Self {
            action,
            prior,
            visits: 0,
            q: 0.0,
        }
    }

    /// Fold one backed-up value into the running mean.
    pub fn record(&mut self, value: f64) {
        self.q = (self.visits as f64 * self.q + value) / (self.visits as f64 + 1.0);
        self.visits += 1;
    }
}

/// An expanded board.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// One edge per legal action, in action order.
    pub edges: Vec<Edge>,

    /// Total visits through this node.
    pub visits: u32,
}

impl Node {
    /// Expand from a masked prior.
    ///
    /// Priors are restricted to valid actions and renormalized. If the
    /// network puts no mass on any valid action the prior becomes uniform
    /// over valid actions; the returned flag reports that case.
    #[must_use]
    pub fn expand(priors: &[f32], valid: &[bool]) -> (Self, bool) {
        debug_assert_eq!(priors.len(), valid.len(), "prior length must match mask");
        let masked: Vec<(usize, f32)> = valid
            .iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(a, _)| (a, priors.get(a).copied().unwrap_or(0.0).max(0.0)))
            .collect();

        let total: f32 = masked.iter().map(|(_, p)| p).sum();
        let all_masked = total <= 0.0;
        let uniform = 1.0 / masked.len().max(1) as f32;

        let edges = masked
            .into_iter()
            .map(|(a, p)| Edge::new(a, if all_masked { uniform } else { p / total }))
            .collect();

        (Self { edges, visits: 0 }, all_masked)
    }

    /// Visit count per action over the full action space.
    #[must_use]
    pub fn visit_counts(&self, action_size: usize) -> Vec<u32> {
        let mut counts = vec![0; action_size];
        for edge in &self.edges {
            counts[edge.action] = edge.visits;
        }
        counts
    }

    /// Edge with the most visits (first on ties).
    #[must_use]
    pub fn best_edge_by_visits(&self) -> Option<&Edge> {
        self.edges.iter().fold(None, |best: Option<&Edge>, e| match best {
            Some(b) if b.visits >= e.visits => Some(b),
            _ => Some(e),
        })
    }
}
