//! Self-play loop for generating training data.
//!
//! Runs games using MCTS to generate trajectories for training neural
//! networks in an AlphaZero-style loop. All tuning lives in an explicit
//! `SelfPlayConfig` handed to the worker.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, Player};
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::nn::PolicyValueNetwork;
use crate::rules::Game;

use super::trajectory::{Step, Trajectory};

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Search settings used for every move.
    pub mcts: MCTSConfig,

    /// Moves played at temperature 1 before switching to greedy.
    pub temp_threshold: usize,

    /// Maximum moves per game (0 = unlimited).
    pub max_moves: usize,

    /// Seed offset for RNG (combined with game index for unique seeds).
    pub seed_offset: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            mcts: MCTSConfig::default(),
            temp_threshold: 15,
            max_moves: 0,
            seed_offset: 0,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search settings.
    #[must_use]
    pub fn with_mcts(mut self, mcts: MCTSConfig) -> Self {
        self.mcts = mcts;
        self
    }

    /// Set MCTS simulations per move.
    #[must_use]
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.mcts.num_simulations = simulations;
        self
    }

    /// Set the move threshold for switching to greedy.
    #[must_use]
    pub fn with_temp_threshold(mut self, threshold: usize) -> Self {
        self.temp_threshold = threshold;
        self
    }

    /// Set maximum moves per game.
    #[must_use]
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set seed offset.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Get the temperature for a given move number.
    #[must_use]
    pub fn temperature(&self, move_number: usize) -> f32 {
        if move_number < self.temp_threshold {
            1.0
        } else {
            0.0
        }
    }
}

/// Worker for running self-play games.
///
/// Each episode gets a fresh search tree.
pub struct SelfPlayWorker<G: Game + Clone, N: PolicyValueNetwork> {
    game: G,
    network: N,
    config: SelfPlayConfig,
}

impl<G: Game + Clone, N: PolicyValueNetwork> SelfPlayWorker<G, N> {
    /// Create a new self-play worker.
    pub fn new(game: G, network: N, config: SelfPlayConfig) -> Self {
        Self {
            game,
            network,
            config,
        }
    }

    /// Play one game against itself.
    ///
    /// At each move the canonical board and the MCTS policy are recorded and
    /// the action is sampled from that policy. The game ends when the
    /// terminal value for the player to move is non-zero.
    pub fn execute_episode(&self, seed: u64) -> Trajectory {
        let game = &self.game;
        let mut rng = GameRng::new(seed);
        let mut search = MCTSSearch::new(game.clone(), &self.network, self.config.mcts.clone());
        let mut trajectory = Trajectory::new(seed);

        let mut board = game.init_board();
        let mut player = Player::One;
        let mut move_number = 0;

        loop {
            let ended = game.game_ended(&board, player);
            if ended != 0.0 {
                trajectory.finish(player, ended);
                break;
            }
            if self.config.max_moves > 0 && move_number >= self.config.max_moves {
                break;
            }

            let canonical = game.canonical_form(&board, player);
            let temperature = self.config.temperature(move_number);
            let policy = search.action_probabilities(&canonical, temperature);

            let action = match rng.choose_weighted(&policy) {
                Some(a) => a,
                None => game.action_size() - 1,
            };
            debug!(move_number, %player, action, temperature, "self-play move");

            trajectory.push(Step::new(canonical, policy, action, player, move_number));
            (board, player) = game.next_state(&board, player, action);
            move_number += 1;
        }

        info!(
            seed,
            moves = trajectory.len(),
            finished = trajectory.is_finished(),
            value = trajectory.final_value,
            "episode finished"
        );
        trajectory
    }

    /// Play `count` games with seeds `seed_offset..seed_offset + count`.
    pub fn play_episodes(&self, count: usize) -> Vec<Trajectory> {
        (0..count)
            .map(|i| {
                let seed = self.config.seed_offset.wrapping_add(i as u64);
                self.execute_episode(seed)
            })
            .collect()
    }

    /// Get the game.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &SelfPlayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::UltimateTicTacToe;
    use crate::nn::UniformPolicyZeroValue;

    fn worker(simulations: u32) -> SelfPlayWorker<UltimateTicTacToe, UniformPolicyZeroValue> {
        let game = UltimateTicTacToe::new(2);
        let network = UniformPolicyZeroValue::new(game.action_size());
        SelfPlayWorker::new(
            game,
            network,
            SelfPlayConfig::default().with_simulations(simulations),
        )
    }

    #[test]
    fn test_self_play_config_default() {
        let config = SelfPlayConfig::default();
        assert_eq!(config.mcts.num_simulations, 25);
        assert_eq!(config.temp_threshold, 15);
        assert_eq!(config.max_moves, 0);
    }

    #[test]
    fn test_temperature_schedule() {
        let config = SelfPlayConfig::default().with_temp_threshold(10);
        assert_eq!(config.temperature(0), 1.0);
        assert_eq!(config.temperature(9), 1.0);
        assert_eq!(config.temperature(10), 0.0);
        assert_eq!(config.temperature(100), 0.0);
    }

    #[test]
    fn test_episode_finishes() {
        let worker = worker(8);
        let traj = worker.execute_episode(7);

        assert!(traj.is_finished());
        assert!(!traj.is_empty());
        assert!(traj.len() <= 16);
        assert_ne!(traj.final_value, 0.0);

        // Players alternate and every recorded policy is a distribution.
        for (i, step) in traj.steps.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(step.player, expected);
            assert_eq!(step.move_number, i);
            assert!((step.policy.iter().sum::<f32>() - 1.0).abs() < 1e-4);
            assert!(step.taken_action_prob() > 0.0);
        }
    }

    #[test]
    fn test_episode_is_deterministic() {
        let worker = worker(6);
        assert_eq!(worker.execute_episode(3), worker.execute_episode(3));
    }

    #[test]
    fn test_max_moves_cuts_game() {
        let game = UltimateTicTacToe::new(3);
        let worker = SelfPlayWorker::new(
            game,
            UniformPolicyZeroValue::new(game.action_size()),
            SelfPlayConfig::default().with_simulations(4).with_max_moves(3),
        );
        let traj = worker.execute_episode(1);
        assert_eq!(traj.len(), 3);
        assert!(!traj.is_finished());
    }

    #[test]
    fn test_play_episodes_seeds() {
        let worker = SelfPlayWorker::new(
            UltimateTicTacToe::new(2),
            UniformPolicyZeroValue::new(17),
            SelfPlayConfig::default()
                .with_simulations(4)
                .with_seed_offset(100),
        );
        let trajs = worker.play_episodes(2);
        assert_eq!(trajs.len(), 2);
        assert_eq!(trajs[0].seed, 100);
        assert_eq!(trajs[1].seed, 101);
    }
}
