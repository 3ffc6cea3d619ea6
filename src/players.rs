//! Agents that pick moves on canonical boards.
//!
//! Every agent sees the board from its own side (its marks are `+1`) and
//! returns an action index, the pass action included.
//!
//! - `RandomPlayer`: uniform over legal actions
//! - `HumanPlayer`: reads `row col` lines from any `BufRead`
//! - `MctsPlayer`: greedy search with a policy-value network

use std::io::{BufRead, Write};

use crate::core::{BoardTensor, Error, GameRng, Player, Result};
use crate::mcts::{MCTSConfig, MCTSSearch};
use crate::nn::PolicyValueNetwork;
use crate::rules::Game;

/// A move-picking agent.
pub trait Agent {
    /// Choose an action for the player to move on a canonical board.
    fn play(&mut self, board: &BoardTensor) -> Result<usize>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    fn play(&mut self, board: &BoardTensor) -> Result<usize> {
        (**self).play(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Plays a uniformly random legal action.
pub struct RandomPlayer<G: Game> {
    game: G,
    rng: GameRng,
}

impl<G: Game> RandomPlayer<G> {
    /// Create a random player with its own RNG stream.
    pub fn new(game: G, seed: u64) -> Self {
        Self {
            game,
            rng: GameRng::new(seed),
        }
    }

    /// Create a random player drawing from an existing stream, usually a
    /// fork of a match-level RNG.
    pub fn from_rng(game: G, rng: GameRng) -> Self {
        Self { game, rng }
    }
}

impl<G: Game> Agent for RandomPlayer<G> {
    fn play(&mut self, board: &BoardTensor) -> Result<usize> {
        let legal = self.game.legal_actions(board, Player::One);
        match self.rng.choose(&legal) {
            Some(&a) => Ok(a),
            None => Ok(self.game.action_size() - 1),
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Parse `row col` move notation.
///
/// Returns `None` for the pass action, written with a negative row such as
/// `-1 -1`.
pub fn parse_move(input: &str, side: usize) -> Result<Option<(usize, usize)>> {
    let syntax = || Error::MoveSyntax {
        input: input.trim().to_string(),
    };
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(syntax());
    };
    let row: i64 = row.parse().map_err(|_| syntax())?;
    let col: i64 = col.parse().map_err(|_| syntax())?;

    if row < 0 {
        return Ok(None);
    }
    let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < side);
    match (in_range(row), in_range(col)) {
        (Some(r), Some(c)) => Ok(Some((r, c))),
        _ => Err(Error::SquareOutOfRange {
            row: row as usize,
            col: col.max(0) as usize,
            side,
        }),
    }
}

/// Reads moves typed by a person.
///
/// Lists the legal moves as `row-col`, then reads one line per attempt.
/// Unparseable or illegal input prints `Invalid` and asks again.
pub struct HumanPlayer<G: Game, R: BufRead, W: Write> {
    game: G,
    input: R,
    output: W,
}

impl<G: Game, R: BufRead, W: Write> HumanPlayer<G, R, W> {
    /// Create a human player over the given streams.
    pub fn new(game: G, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }
}

impl<G: Game, R: BufRead, W: Write> Agent for HumanPlayer<G, R, W> {
    fn play(&mut self, board: &BoardTensor) -> Result<usize> {
        let (side, _) = self.game.board_size();
        let pass = self.game.action_size() - 1;
        let valid = self.game.valid_moves(board, Player::One);

        let listed: Vec<String> = valid
            .iter()
            .enumerate()
            .filter(|(_, &ok)| ok)
            .map(|(a, _)| {
                if a == pass {
                    "pass(-1 -1)".to_string()
                } else {
                    format!("{}-{}", a / side, a % side)
                }
            })
            .collect();
        writeln!(self.output, "{}", listed.join("  "))?;

        loop {
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            let action = match parse_move(&line, side) {
                Ok(Some((r, c))) => r * side + c,
                Ok(None) => pass,
                Err(_) => {
                    writeln!(self.output, "Invalid")?;
                    continue;
                }
            };
            if valid[action] {
                return Ok(action);
            }
            writeln!(self.output, "Invalid")?;
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Plays the most visited action after a full search.
pub struct MctsPlayer<G: Game, N: PolicyValueNetwork> {
    search: MCTSSearch<G, N>,
}

impl<G: Game, N: PolicyValueNetwork> MctsPlayer<G, N> {
    /// Create a search-driven player.
    pub fn new(game: G, network: N, config: MCTSConfig) -> Self {
        Self {
            search: MCTSSearch::new(game, network, config),
        }
    }

    /// Underlying search.
    pub fn search(&self) -> &MCTSSearch<G, N> {
        &self.search
    }
}

impl<G: Game, N: PolicyValueNetwork> Agent for MctsPlayer<G, N> {
    fn play(&mut self, board: &BoardTensor) -> Result<usize> {
        Ok(self.search.best_action(board))
    }

    fn name(&self) -> &str {
        "mcts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::UltimateTicTacToe;
    use crate::nn::UniformPolicyZeroValue;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("3 4\n", 9).unwrap(), Some((3, 4)));
        assert_eq!(parse_move("  0   8 ", 9).unwrap(), Some((0, 8)));
        assert_eq!(parse_move("-1 -1", 9).unwrap(), None);
        assert!(matches!(parse_move("3", 9), Err(Error::MoveSyntax { .. })));
        assert!(matches!(parse_move("a b", 9), Err(Error::MoveSyntax { .. })));
        assert!(matches!(parse_move("1 2 3", 9), Err(Error::MoveSyntax { .. })));
        assert!(matches!(
            parse_move("9 0", 9),
            Err(Error::SquareOutOfRange { row: 9, col: 0, side: 9 })
        ));
    }

    #[test]
    fn test_random_player_plays_legal() {
        let game = UltimateTicTacToe::new(3);
        let (board, player) = game.next_state(&game.init_board(), Player::One, 40);
        let canonical = game.canonical_form(&board, player);
        let valid = game.valid_moves(&canonical, Player::One);

        let mut agent = RandomPlayer::new(game, 5);
        for _ in 0..20 {
            let a = agent.play(&canonical).unwrap();
            assert!(valid[a]);
        }
        assert_eq!(agent.name(), "random");
    }

    #[test]
    fn test_forked_random_players_are_reproducible() {
        let game = UltimateTicTacToe::new(3);
        let board = game.init_board();
        let picks = |seed: u64| -> (Vec<usize>, Vec<usize>) {
            let mut master = GameRng::new(seed);
            let mut one = RandomPlayer::from_rng(game, master.fork());
            let mut two = RandomPlayer::from_rng(game, master.fork());
            let a = (0..16).map(|_| one.play(&board).unwrap()).collect();
            let b = (0..16).map(|_| two.play(&board).unwrap()).collect();
            (a, b)
        };

        let (one, two) = picks(11);
        assert_eq!(picks(11), (one.clone(), two.clone()));
        assert_ne!(one, two);
    }

    #[test]
    fn test_human_player_reprompts() {
        let game = UltimateTicTacToe::new(3);
        let (board, player) = game.next_state(&game.init_board(), Player::One, 40);
        let canonical = game.canonical_form(&board, player);

        // Garbage, then an illegal cell, then a legal one in sub-board (1,1).
        let input = Cursor::new("hello\n0 0\n3 5\n");
        let mut output = Vec::new();
        let action = {
            let mut human = HumanPlayer::new(game, input, &mut output);
            human.play(&canonical).unwrap()
        };
        assert_eq!(action, 3 * 9 + 5);

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("3-3  3-4  3-5"));
        assert_eq!(text.matches("Invalid").count(), 2);
    }

    #[test]
    fn test_human_player_input_closed() {
        let game = UltimateTicTacToe::new(2);
        let mut human = HumanPlayer::new(game, Cursor::new(""), Vec::new());
        let err = human.play(&game.init_board()).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }

    #[test]
    fn test_mcts_player_plays_legal() {
        let game = UltimateTicTacToe::new(2);
        let mut agent = MctsPlayer::new(
            game,
            UniformPolicyZeroValue::new(game.action_size()),
            MCTSConfig::default().with_simulations(10),
        );
        let board = game.init_board();
        let a = agent.play(&board).unwrap();
        assert!(game.valid_moves(&board, Player::One)[a]);
        assert_eq!(agent.search().stats().simulations, 10);
    }
}
