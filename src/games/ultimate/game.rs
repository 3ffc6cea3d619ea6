//! `Game` adapter for Ultimate Tic-Tac-Toe.
//!
//! Boards cross the adapter as tensors only: every call decodes a fresh
//! `Board`, works on it and encodes the result. The adapter holds nothing
//! but `n`.

use crate::core::{BoardTensor, Player};
use crate::rules::{Game, GameResult, SymmetryList};

use super::board::Board;
use super::encoding::{decode, encode};
use super::grid::Square;
use super::symmetry::Symmetry;

/// Terminal value of a drawn game.
///
/// Small and non-zero so a finished draw is never read as "still playing".
pub const DRAW_VALUE: f32 = 1e-4;

/// Ultimate Tic-Tac-Toe with `n x n` sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UltimateTicTacToe {
    n: usize,
}

impl UltimateTicTacToe {
    /// Create the game. Panics if `n < 2`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n >= 2, "sub-board size must be at least 2, got {n}");
        Self { n }
    }

    /// Sub-board size.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Side of the full grid.
    #[must_use]
    pub fn side(&self) -> usize {
        self.n * self.n
    }

    /// Index of the pass action.
    #[must_use]
    pub fn pass_action(&self) -> usize {
        self.side() * self.side()
    }

    /// Decode a tensor of this game's shape.
    ///
    /// Panics if the tensor does not belong to this game.
    #[must_use]
    pub fn board(&self, tensor: &BoardTensor) -> Board {
        assert_eq!(
            tensor.side(),
            self.side(),
            "board tensor side {} does not match n = {}",
            tensor.side(),
            self.n
        );
        decode(tensor)
    }

    /// Outcome of a board, or `None` while it continues.
    #[must_use]
    pub fn result(&self, tensor: &BoardTensor) -> Option<GameResult> {
        self.board(tensor).result()
    }
}

impl Default for UltimateTicTacToe {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Game for UltimateTicTacToe {
    fn init_board(&self) -> BoardTensor {
        encode(&Board::new(self.n))
    }

    fn board_size(&self) -> (usize, usize) {
        (self.side(), self.side())
    }

    fn action_size(&self) -> usize {
        self.pass_action() + 1
    }

    fn next_state(
        &self,
        board: &BoardTensor,
        player: Player,
        action: usize,
    ) -> (BoardTensor, Player) {
        assert!(
            action < self.action_size(),
            "action {action} out of range 0..{}",
            self.action_size()
        );
        if action == self.pass_action() {
            return (board.clone(), player.opponent());
        }
        let mut b = self.board(board);
        b.execute_move(Square::from_action(self.n, action), player);
        (encode(&b), player.opponent())
    }

    fn valid_moves(&self, board: &BoardTensor, _player: Player) -> Vec<bool> {
        let mut valid = vec![false; self.action_size()];
        let legal = self.board(board).legal_moves();
        if legal.is_empty() {
            valid[self.pass_action()] = true;
        } else {
            for sq in legal {
                valid[sq.to_action(self.n)] = true;
            }
        }
        valid
    }

    fn game_ended(&self, board: &BoardTensor, player: Player) -> f32 {
        self.board(board)
            .result()
            .map_or(0.0, |result| result.value_for(player, DRAW_VALUE))
    }

    fn canonical_form(&self, board: &BoardTensor, player: Player) -> BoardTensor {
        board.oriented_for(player)
    }

    fn symmetries(&self, board: &BoardTensor, policy: &[f32]) -> SymmetryList {
        assert_eq!(
            policy.len(),
            self.action_size(),
            "policy length must equal the action count"
        );
        let side = self.side();
        Symmetry::all()
            .into_iter()
            .map(|sym| (sym.apply_board(board), sym.apply_policy(side, policy)))
            .collect()
    }

    fn string_representation(&self, board: &BoardTensor) -> Vec<u8> {
        board.canonical_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FREE_PLAY, PLAYER_ONE, PLAYER_TWO};

    #[test]
    fn test_shapes() {
        let game = UltimateTicTacToe::new(3);
        assert_eq!(game.board_size(), (9, 9));
        assert_eq!(game.action_size(), 82);
        assert_eq!(game.pass_action(), 81);

        let small = UltimateTicTacToe::new(2);
        assert_eq!(small.action_size(), 17);
    }

    #[test]
    fn test_next_state_alternates() {
        let game = UltimateTicTacToe::default();
        let board = game.init_board();
        let (next, player) = game.next_state(&board, Player::One, 40);
        assert_eq!(player, Player::Two);
        assert_eq!(next.get(4, 4), PLAYER_ONE);

        let valid = game.valid_moves(&next, player);
        let legal: Vec<usize> = game.legal_actions(&next, player);
        assert_eq!(legal.len(), 8);
        assert!(legal.iter().all(|&a| valid[a]));
        assert!(!valid[game.pass_action()]);
    }

    #[test]
    fn test_pass_keeps_board() {
        let game = UltimateTicTacToe::default();
        let board = game.init_board();
        let (next, player) = game.next_state(&board, Player::Two, game.pass_action());
        assert_eq!(next, board);
        assert_eq!(player, Player::One);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_action_out_of_range() {
        let game = UltimateTicTacToe::default();
        let _ = game.next_state(&game.init_board(), Player::One, 82);
    }

    #[test]
    fn test_game_ended_values() {
        let game = UltimateTicTacToe::new(2);
        let mut board = Board::new(2);
        assert_eq!(game.game_ended(&encode(&board), Player::One), 0.0);

        for sq in [(0, 0), (1, 0), (0, 2), (1, 2)] {
            board.execute_move(Square::new(sq.0, sq.1), Player::One);
        }
        let tensor = encode(&board);
        assert_eq!(game.game_ended(&tensor, Player::One), 1.0);
        assert_eq!(game.game_ended(&tensor, Player::Two), -1.0);
        assert!(game.is_terminal(&tensor, Player::Two));
        assert_eq!(game.result(&tensor), Some(GameResult::Winner(Player::One)));
    }

    #[test]
    fn test_canonical_form() {
        let game = UltimateTicTacToe::default();
        let (board, _) = game.next_state(&game.init_board(), Player::One, 0);

        let same = game.canonical_form(&board, Player::One);
        assert_eq!(same, board);

        let flipped = game.canonical_form(&board, Player::Two);
        assert_eq!(flipped.get(0, 0), PLAYER_TWO);
        assert_eq!(flipped.get(0, 1), FREE_PLAY);
        assert_eq!(game.canonical_form(&flipped, Player::Two), board);
    }

    #[test]
    fn test_symmetries_count_and_pass() {
        let game = UltimateTicTacToe::default();
        let board = game.init_board();
        let mut policy = vec![0.0; 82];
        policy[81] = 0.5;
        policy[0] = 0.5;

        let syms = game.symmetries(&board, &policy);
        assert_eq!(syms.len(), 8);
        for (b, p) in &syms {
            assert_eq!(b.shape(), (9, 9));
            assert_eq!(p.len(), 82);
            assert_eq!(p[81], 0.5);
        }
    }

    #[test]
    fn test_string_representation() {
        let game = UltimateTicTacToe::default();
        let a = game.init_board();
        let (b, _) = game.next_state(&a, Player::One, 3);
        assert_eq!(game.string_representation(&a), game.string_representation(&a.clone()));
        assert_ne!(game.string_representation(&a), game.string_representation(&b));
    }
}
