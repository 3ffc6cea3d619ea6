//! Game contract consumed by search, training and players.
//!
//! Games implement `Game` to expose:
//! - Board shape and action count
//! - Legal actions as a fixed-length mask
//! - How an action produces the next board
//! - Terminal values, canonical form and symmetries
//!
//! Boards cross this boundary only as `BoardTensor`s. Implementations keep
//! no state between calls beyond their construction parameters.

use smallvec::SmallVec;

use crate::core::{BoardTensor, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Value of this result from `player`'s point of view.
    ///
    /// `1.0` for a win, `-1.0` for a loss and `draw_value` for a draw.
    #[must_use]
    pub fn value_for(&self, player: Player, draw_value: f32) -> f32 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => draw_value,
        }
    }
}

/// One augmented training pair: a transformed board and its policy.
pub type SymmetryPair = (BoardTensor, Vec<f32>);

/// Symmetric images of a board, usually eight.
pub type SymmetryList = SmallVec<[SymmetryPair; 8]>;

/// Two-player game contract.
///
/// ## Implementation Notes
///
/// - `valid_moves`: the last action is a pass, set iff no board action is legal
/// - `next_state`: must be deterministic for search consistency
/// - `game_ended`: `0.0` means the game continues, a draw is a small non-zero value
/// - `canonical_form`: boards passed to search are always canonical
pub trait Game {
    /// Board at the start of an episode.
    fn init_board(&self) -> BoardTensor;

    /// Board shape as `(rows, cols)`.
    fn board_size(&self) -> (usize, usize);

    /// Number of actions, pass included.
    fn action_size(&self) -> usize;

    /// Apply `action` for `player`.
    ///
    /// Returns the next board and the player to move on it. The pass action
    /// hands the turn over without touching the board.
    fn next_state(&self, board: &BoardTensor, player: Player, action: usize)
        -> (BoardTensor, Player);

    /// Legality mask of length `action_size()`.
    fn valid_moves(&self, board: &BoardTensor, player: Player) -> Vec<bool>;

    /// Terminal value from `player`'s point of view.
    ///
    /// `1.0` if `player` won, `-1.0` if they lost, a small non-zero draw
    /// value, or `0.0` while the game continues.
    fn game_ended(&self, board: &BoardTensor, player: Player) -> f32;

    /// Board seen from `player`'s side.
    fn canonical_form(&self, board: &BoardTensor, player: Player) -> BoardTensor;

    /// Symmetric images of `(board, policy)` for data augmentation.
    fn symmetries(&self, board: &BoardTensor, policy: &[f32]) -> SymmetryList;

    /// Hashable key for transposition tables.
    fn string_representation(&self, board: &BoardTensor) -> Vec<u8>;

    // === Convenience Methods ===

    /// Indices of all legal actions.
    fn legal_actions(&self, board: &BoardTensor, player: Player) -> Vec<usize> {
        self.valid_moves(board, player)
            .iter()
            .enumerate()
            .filter_map(|(a, &ok)| ok.then_some(a))
            .collect()
    }

    /// Check if the game has ended.
    fn is_terminal(&self, board: &BoardTensor, player: Player) -> bool {
        self.game_ended(board, player) != 0.0
    }
}
