//! Neural network traits for policy and value prediction.
//!
//! These traits define the interface between the search and network
//! implementations (typically in Python via PyO3). Networks always see
//! canonical boards: the player to move is the `+1` side.

use crate::core::BoardTensor;

/// Combined policy-value network.
///
/// Many architectures share early layers between policy and value heads,
/// so a single forward pass yields both outputs.
pub trait PolicyValueNetwork: Send + Sync {
    /// Predict policy and value for a canonical board.
    ///
    /// Returns `(policy, value)`: one prior per action (pass included) and
    /// the expected outcome for the player to move, in `[-1, 1]`.
    fn predict(&self, board: &BoardTensor) -> (Vec<f32>, f32);

    /// Batch prediction for multiple boards (optional optimization).
    fn predict_batch(&self, boards: &[BoardTensor]) -> Vec<(Vec<f32>, f32)> {
        boards.iter().map(|b| self.predict(b)).collect()
    }
}

impl<T: PolicyValueNetwork + ?Sized> PolicyValueNetwork for &T {
    fn predict(&self, board: &BoardTensor) -> (Vec<f32>, f32) {
        (**self).predict(board)
    }
}

impl<T: PolicyValueNetwork + ?Sized> PolicyValueNetwork for Box<T> {
    fn predict(&self, board: &BoardTensor) -> (Vec<f32>, f32) {
        (**self).predict(board)
    }
}

/// Uniform policy and zero value (baseline for testing).
///
/// Search driven by this network reduces to visit-count MCTS with
/// terminal values only.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicyZeroValue {
    action_size: usize,
}

impl UniformPolicyZeroValue {
    /// Create a new baseline network.
    #[must_use]
    pub fn new(action_size: usize) -> Self {
        Self { action_size }
    }
}

impl PolicyValueNetwork for UniformPolicyZeroValue {
    fn predict(&self, _board: &BoardTensor) -> (Vec<f32>, f32) {
        let policy = if self.action_size == 0 {
            vec![]
        } else {
            let prob = 1.0 / self.action_size as f32;
            vec![prob; self.action_size]
        };
        (policy, 0.0)
    }
}
