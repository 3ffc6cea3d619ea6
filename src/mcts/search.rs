//! Core MCTS search algorithm.
//!
//! AlphaZero-style search over canonical boards. Each simulation walks down
//! from the root by the selection policy, evaluates the first unexpanded
//! board with the network (or reads a cached terminal value), and backs the
//! value up the path, flipping its sign at every ply.

use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{BoardTensor, Player};
use crate::nn::PolicyValueNetwork;
use crate::rules::Game;

use super::config::MCTSConfig;
use super::node::Node;
use super::policy::{SelectionPolicy, PUCT};
use super::stats::SearchStats;

type Key = Vec<u8>;

/// Main MCTS search context.
///
/// Generic over the game and the evaluator. Owns the node table, which
/// persists across move decisions until `reset` is called.
pub struct MCTSSearch<G: Game, N: PolicyValueNetwork> {
    /// The game contract.
    game: G,

    /// Policy-value evaluator.
    network: N,

    /// Search configuration.
    config: MCTSConfig,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Expanded boards.
    nodes: FxHashMap<Key, Node>,

    /// Cached `game_ended` values, including `0.0` for ongoing boards.
    ended: FxHashMap<Key, f32>,

    /// Search statistics.
    stats: SearchStats,
}

impl<G: Game, N: PolicyValueNetwork> MCTSSearch<G, N> {
    /// Create a new search context.
    pub fn new(game: G, network: N, config: MCTSConfig) -> Self {
        Self {
            game,
            network,
            config,
            selection: Box::new(PUCT),
            nodes: FxHashMap::default(),
            ended: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Forget every expanded board.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.ended.clear();
        self.stats.reset();
    }

    /// Run the configured number of simulations from `canonical` and return
    /// the move distribution.
    ///
    /// With `temperature == 0` the distribution is one-hot on the most
    /// visited action (first on ties). Otherwise it is proportional to
    /// `visits^(1/temperature)`.
    pub fn action_probabilities(&mut self, canonical: &BoardTensor, temperature: f32) -> Vec<f32> {
        let start = Instant::now();
        self.stats.reset();

        for _ in 0..self.config.num_simulations {
            self.simulate(canonical);
        }
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let counts = self.visit_counts(canonical);
        debug!(
            simulations = self.stats.simulations,
            expanded = self.stats.nodes_expanded,
            nodes = self.nodes.len(),
            time_us = self.stats.time_us,
            "search finished"
        );

        self.counts_to_probabilities(canonical, &counts, temperature)
    }

    fn counts_to_probabilities(
        &self,
        canonical: &BoardTensor,
        counts: &[u32],
        temperature: f32,
    ) -> Vec<f32> {
        let action_size = counts.len();
        let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();

        if total == 0 {
            // Terminal root: fall back to the legal mask.
            let valid = self.game.valid_moves(canonical, Player::One);
            let legal = valid.iter().filter(|&&v| v).count().max(1) as f32;
            return valid
                .iter()
                .map(|&v| if v { 1.0 / legal } else { 0.0 })
                .collect();
        }

        if temperature <= 0.0 {
            let mut best = 0;
            for (a, &c) in counts.iter().enumerate() {
                if c > counts[best] {
                    best = a;
                }
            }
            let mut probs = vec![0.0; action_size];
            probs[best] = 1.0;
            return probs;
        }

        sharpen(counts, temperature)
    }

    /// Most visited action after a full search (temperature 0).
    pub fn best_action(&mut self, canonical: &BoardTensor) -> usize {
        let probs = self.action_probabilities(canonical, 0.0);
        probs
            .iter()
            .position(|&p| p == 1.0)
            .unwrap_or(self.game.action_size() - 1)
    }

    /// Root visit counts over the full action space.
    #[must_use]
    pub fn visit_counts(&self, canonical: &BoardTensor) -> Vec<u32> {
        let action_size = self.game.action_size();
        let key = self.game.string_representation(canonical);
        match self.nodes.get(&key) {
            Some(node) => node.visit_counts(action_size),
            None => vec![0; action_size],
        }
    }

    /// Run a single simulation from `canonical`.
    pub fn simulate(&mut self, canonical: &BoardTensor) {
        let mut path: Vec<(Key, usize)> = Vec::new();
        let mut board = canonical.clone();
        self.stats.simulations += 1;

        let mut value = loop {
            let key = self.game.string_representation(&board);

            // === TERMINAL ===
            let ended = match self.ended.get(&key) {
                Some(&v) => v,
                None => {
                    let v = self.game.game_ended(&board, Player::One);
                    self.ended.insert(key.clone(), v);
                    v
                }
            };
            if ended != 0.0 {
                self.stats.terminal_hits += 1;
                break f64::from(ended);
            }

            // === EXPANSION ===
            if !self.nodes.contains_key(&key) {
                let value = self.expand(key, &board);
                break value;
            }

            // === DEPTH LIMIT ===
            if self.config.max_depth > 0 && path.len() >= self.config.max_depth as usize {
                let (_, v) = self.network.predict(&board);
                break f64::from(v);
            }

            // === SELECTION ===
            let Some(node) = self.nodes.get(&key) else {
                unreachable!("node present after expansion check");
            };
            let Some(idx) = self.selection.select(node, &self.config) else {
                // No legal action on a non-terminal board; score as a draw.
                break 0.0;
            };
            let action = node.edges[idx].action;
            path.push((key, idx));

            let (next, next_player) = self.game.next_state(&board, Player::One, action);
            board = self.game.canonical_form(&next, next_player);
        };

        let depth = path.len().min(u16::MAX as usize) as u16;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // === BACKPROPAGATION ===
        for (key, idx) in path.iter().rev() {
            value = -value;
            if let Some(node) = self.nodes.get_mut(key) {
                node.edges[*idx].record(value);
                node.visits += 1;
            }
        }
    }

    /// Expand a new board and return its network value.
    fn expand(&mut self, key: Key, board: &BoardTensor) -> f64 {
        let (priors, value) = self.network.predict(board);
        let valid = self.game.valid_moves(board, Player::One);
        assert_eq!(
            priors.len(),
            valid.len(),
            "network policy length must equal the action count"
        );

        let (node, all_masked) = Node::expand(&priors, &valid);
        if all_masked {
            warn!("all valid moves were masked, using a uniform prior");
        }
        self.nodes.insert(key, node);
        self.stats.nodes_expanded += 1;
        f64::from(value)
    }

    /// Get search statistics of the last move decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of expanded boards.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the game reference.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the network reference.
    pub fn network(&self) -> &N {
        &self.network
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

/// Visit counts raised to `1 / temperature`, normalized.
///
/// Counts are divided by the largest one first so the power stays in
/// `[0, 1]` however small the temperature.
fn sharpen(counts: &[u32], temperature: f32) -> Vec<f32> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; counts.len()];
    }
    let exponent = 1.0 / f64::from(temperature);
    let weights: Vec<f64> = counts
        .iter()
        .map(|&c| (f64::from(c) / f64::from(max)).powf(exponent))
        .collect();
    let sum: f64 = weights.iter().sum();
    weights.iter().map(|&w| (w / sum) as f32).collect()
}
