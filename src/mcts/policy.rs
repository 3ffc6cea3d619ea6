//! Selection policies.
//!
//! `SelectionPolicy` decides which edge of an expanded node to follow:
//! - `PUCT`: prior-guided, the default for network-driven search
//! - `UCB1`: ignores priors, useful with the uniform baseline

use super::config::MCTSConfig;
use super::node::Node;

/// Policy for selecting which edge to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select an edge index from a node.
    ///
    /// Returns `None` if the node has no edges.
    fn select(&self, node: &Node, config: &MCTSConfig) -> Option<usize>;
}

fn argmax(scores: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, s) in scores.enumerate() {
        match best {
            Some((_, b)) if b >= s => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

/// PUCT selection policy (Predictor + UCB for Trees).
///
/// Formula: Q(a) + c * P(a) * sqrt(N) / (1 + n(a)). An unvisited edge
/// scores c * P(a) * sqrt(N + eps) so priors still rank the first visit.
#[derive(Clone, Debug, Default)]
pub struct PUCT;

const EPS: f64 = 1e-8;

impl SelectionPolicy for PUCT {
    fn select(&self, node: &Node, config: &MCTSConfig) -> Option<usize> {
        let parent = node.visits as f64;
        argmax(node.edges.iter().map(|edge| {
            let prior = edge.prior as f64;
            if edge.visits == 0 {
                config.cpuct * prior * (parent + EPS).sqrt()
            } else {
                edge.q + config.cpuct * prior * parent.sqrt() / (1.0 + edge.visits as f64)
            }
        }))
    }
}

/// UCB1 selection policy.
///
/// Formula: Q(a) + c * sqrt(ln(N) / n(a)). Unvisited edges go first.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, node: &Node, config: &MCTSConfig) -> Option<usize> {
        let ln_parent = (node.visits.max(1) as f64).ln();
        argmax(node.edges.iter().map(|edge| {
            if edge.visits == 0 {
                f64::INFINITY
            } else {
                edge.q + config.cpuct * (ln_parent / edge.visits as f64).sqrt()
            }
        }))
    }
}
