//! Engine state: cell grid, score grid and the active-cell constraint.
//!
//! ## Rules
//!
//! - A move is legal on an empty cell of a sub-board that is still undecided.
//! - The local position of the last move names the sub-board the next player
//!   is forced into, unless that sub-board is already won.
//! - A forced sub-board without legal cells (a drawn one, for instance)
//!   frees the constraint before moves are generated.
//! - The game is won by a line of won sub-boards, or by majority once every
//!   sub-board is resolved.
//!
//! Grids are `im::Vector`s so cloning a board for a simulated rollout is O(1)
//! and never aliases the original.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Result};
use crate::rules::GameResult;

use super::grid::{Mark, Square, SubBoard};
use super::score::{owns_meta_line, sub_board_score, Score};

/// Legal cells of a single sub-board.
pub type SubBoardMoves = SmallVec<[Square; 9]>;

/// Where the next move may be played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    /// Any undecided sub-board.
    #[default]
    Free,
    /// Only this sub-board.
    Forced(SubBoard),
}

/// Ultimate Tic-Tac-Toe position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    n: usize,
    cells: Vector<Mark>,
    scores: Vector<Score>,
    active: Constraint,
}

impl Board {
    /// Create an empty board made of `n x n` sub-boards.
    ///
    /// Panics if `n < 2`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n >= 2, "sub-board size must be at least 2, got {n}");
        let side = n * n;
        Self {
            n,
            cells: std::iter::repeat(Mark::Empty).take(side * side).collect(),
            scores: std::iter::repeat(Score::Undecided).take(side).collect(),
            active: Constraint::Free,
        }
    }

    /// Rebuild a board from raw cells and a constraint.
    ///
    /// Scores are derived from the cells. A forced sub-board that is already
    /// won is replaced by `Constraint::Free`.
    pub(crate) fn from_parts(n: usize, cells: Vector<Mark>, active: Constraint) -> Self {
        let side = n * n;
        assert_eq!(cells.len(), side * side, "cell grid does not match n = {n}");
        let mut board = Self {
            n,
            cells,
            scores: std::iter::repeat(Score::Undecided).take(side).collect(),
            active: Constraint::Free,
        };
        for sb in SubBoard::all(n) {
            let score = board.compute_score(sb);
            board.scores.set(sb.index(n), score);
        }
        board.active = match active {
            Constraint::Forced(sb) if board.score(sb).is_open_to_forcing() => active,
            _ => Constraint::Free,
        };
        board
    }

    /// Sub-board size `n`.
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Side of the full grid (`n²`).
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.n * self.n
    }

    /// Content of a cell.
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Mark {
        self.cells[sq.index(self.n)]
    }

    /// Stored score of a sub-board.
    #[inline]
    #[must_use]
    pub fn score(&self, sb: SubBoard) -> Score {
        self.scores[sb.index(self.n)]
    }

    /// Stored constraint, before any fallback is applied.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.active
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Score of a sub-board computed from its cells.
    #[must_use]
    pub fn compute_score(&self, sb: SubBoard) -> Score {
        let n = self.n;
        sub_board_score(n, |r, c| self.cell(sb.square_at(n, r, c)))
    }

    /// Empty cells of `sb`, or none if the sub-board is resolved.
    #[must_use]
    pub fn sub_board_moves(&self, sb: SubBoard) -> SubBoardMoves {
        if !self.score(sb).is_undecided() {
            return SubBoardMoves::new();
        }
        sb.squares(self.n)
            .filter(|&sq| self.cell(sq).is_empty())
            .collect()
    }

    fn sub_board_has_moves(&self, sb: SubBoard) -> bool {
        self.score(sb).is_undecided() && sb.squares(self.n).any(|sq| self.cell(sq).is_empty())
    }

    /// Constraint after the forced-sub-board fallback.
    ///
    /// A forced sub-board that has no legal cell frees the constraint.
    #[must_use]
    pub fn effective_constraint(&self) -> Constraint {
        match self.active {
            Constraint::Forced(sb) if self.sub_board_has_moves(sb) => self.active,
            _ => Constraint::Free,
        }
    }

    /// Legal cells under the effective constraint, in row-major order.
    #[must_use]
    pub fn legal_squares(&self) -> Vec<Square> {
        let mut moves = match self.effective_constraint() {
            Constraint::Forced(sb) => self.sub_board_moves(sb).into_vec(),
            Constraint::Free => SubBoard::all(self.n)
                .flat_map(|sb| self.sub_board_moves(sb))
                .collect(),
        };
        moves.sort_unstable();
        moves
    }

    /// Legal cells for the player to move, in row-major order.
    ///
    /// Applies the fallback: if the forced sub-board has no legal cell, the
    /// stored constraint becomes `Free`. An empty result means the mover can
    /// only pass.
    pub fn legal_moves(&mut self) -> Vec<Square> {
        self.active = self.effective_constraint();
        self.legal_squares()
    }

    /// Check if at least one cell is playable.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        match self.effective_constraint() {
            Constraint::Forced(_) => true,
            Constraint::Free => SubBoard::all(self.n).any(|sb| self.sub_board_has_moves(sb)),
        }
    }

    /// Check if `sq` may be played now.
    #[must_use]
    pub fn is_legal(&self, sq: Square) -> bool {
        let side = self.side();
        if sq.row >= side || sq.col >= side || !self.cell(sq).is_empty() {
            return false;
        }
        let sb = sq.sub_board(self.n);
        if !self.score(sb).is_undecided() {
            return false;
        }
        match self.effective_constraint() {
            Constraint::Forced(forced) => forced == sb,
            Constraint::Free => true,
        }
    }

    /// Play `sq` for `player`.
    ///
    /// Legality is the caller's responsibility. Panics if the cell is out of
    /// range or already taken.
    pub fn execute_move(&mut self, sq: Square, player: Player) {
        let n = self.n;
        let side = self.side();
        assert!(
            sq.row < side && sq.col < side,
            "square {sq} is outside a {side}x{side} board"
        );
        assert!(self.cell(sq).is_empty(), "square {sq} is already taken");

        self.cells.set(sq.index(n), Mark::Owned(player));

        let owner = sq.sub_board(n);
        if self.score(owner).is_undecided() {
            let score = self.compute_score(owner);
            self.scores.set(owner.index(n), score);
        }

        let target = sq.local(n);
        self.active = if self.score(target).is_open_to_forcing() {
            Constraint::Forced(target)
        } else {
            Constraint::Free
        };
    }

    /// Check if `player` has won the meta-board.
    ///
    /// Scores are recomputed from the cells. A line of sub-boards won by
    /// `player` wins. Once every sub-board is resolved, `player` wins with
    /// strictly more won sub-boards than the opponent. A tie is not a win for
    /// either side.
    #[must_use]
    pub fn is_win(&self, player: Player) -> bool {
        let n = self.n;
        let scores: Vec<Score> = SubBoard::all(n).map(|sb| self.compute_score(sb)).collect();

        if owns_meta_line(n, player, |r, c| scores[r * n + c]) {
            return true;
        }

        if scores.iter().any(|s| s.is_undecided()) {
            return false;
        }
        let mine = scores.iter().filter(|&&s| s == Score::Won(player)).count();
        let theirs = scores
            .iter()
            .filter(|&&s| s == Score::Won(player.opponent()))
            .count();
        mine > theirs
    }

    /// Outcome of the game, or `None` while it continues.
    ///
    /// A board where nobody has won and no cell is playable is a draw.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        for player in Player::ALL {
            if self.is_win(player) {
                return Some(GameResult::Winner(player));
            }
        }
        if self.has_legal_moves() {
            None
        } else {
            Some(GameResult::Draw)
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    /// Fill sub-board `sb` with a drawn pattern, bypassing turn rules.
    fn fill_drawn(board: &mut Board, sb: SubBoard) {
        let pattern = ["OXO", "OXX", "XOO"];
        for (r, row) in pattern.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let p = if ch == 'O' { Player::One } else { Player::Two };
                board.execute_move(sb.square_at(3, r, c), p);
            }
        }
    }

    #[test]
    fn test_new_board() {
        let mut board = Board::new(3);
        assert_eq!(board.side(), 9);
        assert_eq!(board.constraint(), Constraint::Free);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.legal_moves().len(), 81);
        assert!(board.result().is_none());
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_new_rejects_tiny_board() {
        let _ = Board::new(1);
    }

    #[test]
    fn test_move_forces_local_sub_board() {
        let mut board = Board::new(3);
        board.execute_move(sq(4, 7), Player::One);

        assert_eq!(board.cell(sq(4, 7)), Mark::Owned(Player::One));
        assert_eq!(board.constraint(), Constraint::Forced(SubBoard::new(1, 1)));

        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9);
        assert!(moves.iter().all(|m| m.sub_board(3) == SubBoard::new(1, 1)));
        assert!(board.is_legal(sq(3, 3)));
        assert!(!board.is_legal(sq(0, 0)));
    }

    #[test]
    #[should_panic(expected = "already taken")]
    fn test_execute_on_taken_cell_panics() {
        let mut board = Board::new(3);
        board.execute_move(sq(0, 0), Player::One);
        board.execute_move(sq(0, 0), Player::Two);
    }

    #[test]
    fn test_sub_board_win_and_forcing() {
        let mut board = Board::new(3);
        // One takes the top row of sub-board (0,0); Two answers elsewhere.
        board.execute_move(sq(0, 0), Player::One);
        board.execute_move(sq(3, 3), Player::Two);
        board.execute_move(sq(0, 1), Player::One);
        board.execute_move(sq(4, 4), Player::Two);
        board.execute_move(sq(0, 2), Player::One);

        assert_eq!(board.score(SubBoard::new(0, 0)), Score::Won(Player::One));
        assert_eq!(board.constraint(), Constraint::Forced(SubBoard::new(0, 2)));
    }

    #[test]
    fn test_won_sub_board_is_never_forced() {
        let mut board = Board::new(3);
        board.execute_move(sq(0, 0), Player::One);
        board.execute_move(sq(0, 1), Player::One);
        board.execute_move(sq(0, 2), Player::One);
        assert_eq!(board.score(SubBoard::new(0, 0)), Score::Won(Player::One));

        // Local (0,0) points back at the won sub-board.
        board.execute_move(sq(3, 3), Player::Two);
        assert_eq!(board.constraint(), Constraint::Free);

        let moves = board.legal_moves();
        assert!(moves.iter().all(|m| m.sub_board(3) != SubBoard::new(0, 0)));
        assert!(!board.is_legal(sq(1, 1)));
    }

    #[test]
    fn test_drawn_sub_board_forced_then_freed() {
        let mut board = Board::new(3);
        fill_drawn(&mut board, SubBoard::new(1, 1));
        assert_eq!(board.score(SubBoard::new(1, 1)), Score::Drawn);

        // Local (1,1) of sub-board (0,0) names the drawn sub-board.
        board.execute_move(sq(1, 1), Player::One);
        assert_eq!(board.constraint(), Constraint::Forced(SubBoard::new(1, 1)));
        assert_eq!(board.effective_constraint(), Constraint::Free);
        assert!(board.has_legal_moves());

        let moves = board.legal_moves();
        assert_eq!(board.constraint(), Constraint::Free);
        assert_eq!(moves.len(), 81 - 9 - 1);
    }

    #[test]
    fn test_resolved_score_never_changes() {
        let mut board = Board::new(3);
        for k in 0..3 {
            board.execute_move(sq(1, k), Player::One);
        }
        assert_eq!(board.score(SubBoard::new(0, 0)), Score::Won(Player::One));

        // A later row 0 for Two would be found first by a fresh scan.
        for k in 0..3 {
            board.execute_move(sq(0, k), Player::Two);
        }
        assert_eq!(board.score(SubBoard::new(0, 0)), Score::Won(Player::One));
    }

    #[test]
    fn test_meta_line_wins() {
        let mut board = Board::new(2);
        // 2x2 sub-boards: a column inside a sub-board wins it.
        board.execute_move(sq(0, 0), Player::One);
        board.execute_move(sq(1, 0), Player::One);
        board.execute_move(sq(0, 2), Player::One);
        board.execute_move(sq(1, 2), Player::One);

        assert!(board.is_win(Player::One));
        assert!(!board.is_win(Player::Two));
        assert_eq!(board.result(), Some(GameResult::Winner(Player::One)));
    }

    /// Resolve every sub-board from a meta pattern: `O`/`X` win the top
    /// row for that player, `D` fills a drawn pattern.
    fn resolve_all(pattern: [&str; 3]) -> Board {
        let mut board = Board::new(3);
        for (r, row) in pattern.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let sb = SubBoard::new(r, c);
                match ch {
                    'O' | 'X' => {
                        let p = if ch == 'O' { Player::One } else { Player::Two };
                        for k in 0..3 {
                            board.execute_move(sb.square_at(3, 0, k), p);
                        }
                    }
                    _ => fill_drawn(&mut board, sb),
                }
            }
        }
        board
    }

    #[test]
    fn test_majority_on_resolved_board() {
        let board = resolve_all(["OXO", "OXX", "XOO"]);
        assert_eq!(board.score(SubBoard::new(2, 2)), Score::Won(Player::One));

        assert!(board.is_win(Player::One));
        assert!(!board.is_win(Player::Two));
        assert!(!board.has_legal_moves());
        assert_eq!(board.result(), Some(GameResult::Winner(Player::One)));
    }

    #[test]
    fn test_majority_tie_is_draw() {
        let board = resolve_all(["OXO", "OXX", "XOD"]);
        assert_eq!(board.score(SubBoard::new(2, 2)), Score::Drawn);

        assert!(!board.is_win(Player::One));
        assert!(!board.is_win(Player::Two));
        assert_eq!(board.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_no_majority_while_unresolved() {
        let mut board = Board::new(3);
        for k in 0..3 {
            board.execute_move(sq(0, k), Player::One);
        }
        assert!(!board.is_win(Player::One));
        assert!(board.result().is_none());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut board = Board::new(3);
        board.execute_move(sq(4, 7), Player::One);
        board.execute_move(sq(3, 4), Player::Two);

        let bytes = board.to_bytes().unwrap();
        let restored = Board::from_bytes(&bytes).unwrap();
        assert_eq!(board, restored);
        assert!(Board::from_bytes(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut board = Board::new(3);
        let snapshot = board.clone();
        board.execute_move(sq(0, 0), Player::One);
        assert_eq!(snapshot.cell(sq(0, 0)), Mark::Empty);
        assert_eq!(snapshot.move_count(), 0);
        assert_eq!(board.move_count(), 1);
    }
}
