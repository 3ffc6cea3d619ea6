//! Trajectories recorded during self-play.
//!
//! A trajectory records a complete game from MCTS self-play, capturing:
//! - Canonical boards at each decision point
//! - MCTS action probabilities (the "target" policy)
//! - Actions actually taken
//! - Final value for value targets

use serde::{Deserialize, Serialize};

use crate::core::{BoardTensor, Player, Result};
use crate::rules::Game;

/// A single step in a trajectory.
///
/// Captures the board, MCTS policy, and action taken at one decision point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Board from the acting player's perspective.
    pub board: BoardTensor,

    /// MCTS action probabilities (target for policy network).
    pub policy: Vec<f32>,

    /// The action that was actually taken.
    pub action: usize,

    /// The player who made this decision.
    pub player: Player,

    /// Move number in the game (0-indexed).
    pub move_number: usize,
}

impl Step {
    /// Create a new step.
    #[must_use]
    pub fn new(
        board: BoardTensor,
        policy: Vec<f32>,
        action: usize,
        player: Player,
        move_number: usize,
    ) -> Self {
        Self {
            board,
            policy,
            action,
            player,
            move_number,
        }
    }

    /// Get the probability assigned to the taken action.
    #[must_use]
    pub fn taken_action_prob(&self) -> f32 {
        self.policy.get(self.action).copied().unwrap_or(0.0)
    }
}

/// A complete game trajectory from self-play.
///
/// The final value is the terminal value seen by the player to move at the
/// end. Every step's value target is that value, negated for steps taken by
/// the other player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// All steps in the game.
    pub steps: Vec<Step>,

    /// Player to move on the final board, once the game has ended.
    pub final_player: Option<Player>,

    /// Terminal value for `final_player` (`0.0` if unfinished).
    pub final_value: f32,

    /// Random seed used for this game.
    pub seed: u64,
}

impl Trajectory {
    /// Create a new trajectory.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            steps: Vec::new(),
            final_player: None,
            final_value: 0.0,
            seed,
        }
    }

    /// Add a step to the trajectory.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Record the terminal value seen by the player to move at the end.
    pub fn finish(&mut self, player: Player, value: f32) {
        self.final_player = Some(player);
        self.final_value = value;
    }

    /// Check if the game reached a terminal board.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.final_player.is_some()
    }

    /// Get the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if trajectory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get steps for a specific player.
    pub fn player_steps(&self, player: Player) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(move |s| s.player == player)
    }

    /// Value target for `player`.
    #[must_use]
    pub fn player_value(&self, player: Player) -> f32 {
        match self.final_player {
            Some(p) if p == player => self.final_value,
            Some(_) => -self.final_value,
            None => 0.0,
        }
    }

    /// Convert to training samples, one per symmetric image of each step.
    pub fn to_training_samples<G: Game>(&self, game: &G) -> Vec<TrainingSample> {
        self.steps
            .iter()
            .flat_map(|step| {
                let value = self.player_value(step.player);
                game.symmetries(&step.board, &step.policy)
                    .into_iter()
                    .map(move |(board, policy)| TrainingSample {
                        board,
                        policy,
                        value,
                    })
            })
            .collect()
    }

    /// Serialize into a binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// A single training sample extracted from a trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Canonical board.
    pub board: BoardTensor,

    /// Target policy (MCTS visit distribution).
    pub policy: Vec<f32>,

    /// Target value for the player to move on `board`.
    pub value: f32,
}
