//! Head-to-head matches between two agents.
//!
//! The arena owns the real (non-canonical) board. Each agent only ever
//! sees the canonical board for its own side.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{BoardTensor, Player, Result};
use crate::players::Agent;
use crate::rules::Game;

/// Tally of a series of games, from the first agent's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaRecord {
    pub one_won: usize,
    pub two_won: usize,
    pub draws: usize,
}

impl ArenaRecord {
    /// Games played.
    #[must_use]
    pub fn total(&self) -> usize {
        self.one_won + self.two_won + self.draws
    }

    fn tally(&mut self, outcome: f32) {
        if outcome == 1.0 {
            self.one_won += 1;
        } else if outcome == -1.0 {
            self.two_won += 1;
        } else {
            self.draws += 1;
        }
    }
}

/// Renders a board for verbose play.
pub type DisplayFn = fn(&BoardTensor) -> String;

/// Pits two agents against each other.
pub struct Arena<'a, G: Game> {
    game: G,
    one: Box<dyn Agent + 'a>,
    two: Box<dyn Agent + 'a>,
    display: Option<DisplayFn>,
}

impl<'a, G: Game> Arena<'a, G> {
    /// Create an arena. `one` moves first in the first half of a series.
    pub fn new(game: G, one: Box<dyn Agent + 'a>, two: Box<dyn Agent + 'a>) -> Self {
        Self {
            game,
            one,
            two,
            display: None,
        }
    }

    /// Print every board with `display` when playing verbosely.
    #[must_use]
    pub fn with_display(mut self, display: DisplayFn) -> Self {
        self.display = Some(display);
        self
    }

    /// Play one game with the first agent as `Player::One`.
    ///
    /// Returns the terminal value for the first agent: `1.0` for a win,
    /// `-1.0` for a loss, anything else is a draw.
    pub fn play_game(&mut self, verbose: bool) -> Result<f32> {
        let game = &self.game;
        let mut board = game.init_board();
        let mut player = Player::One;
        let mut turn = 0usize;

        while game.game_ended(&board, player) == 0.0 {
            turn += 1;
            self.show(&board, Some((turn, player)), verbose);

            let canonical = game.canonical_form(&board, player);
            let agent = match player {
                Player::One => &mut self.one,
                Player::Two => &mut self.two,
            };
            let action = agent.play(&canonical)?;
            debug!(turn, %player, agent = agent.name(), action, "arena move");

            let valid = game.valid_moves(&canonical, Player::One);
            assert!(
                valid.get(action).copied().unwrap_or(false),
                "agent {} chose illegal action {action}",
                agent.name()
            );
            (board, player) = game.next_state(&board, player, action);
        }

        let outcome = player.value() * game.game_ended(&board, player);
        self.show(&board, None, verbose);
        if verbose {
            println!("Game over: turn {turn}, result {outcome}");
        }
        Ok(outcome)
    }

    /// Play `num` games, half with each agent moving first.
    ///
    /// An odd `num` rounds down to the nearest even count.
    pub fn play_games(&mut self, num: usize, verbose: bool) -> Result<ArenaRecord> {
        let half = num / 2;
        let mut record = ArenaRecord::default();

        for _ in 0..half {
            record.tally(self.play_game(verbose)?);
        }

        std::mem::swap(&mut self.one, &mut self.two);
        let second_half = (0..half).try_for_each(|_| {
            self.play_game(verbose).map(|outcome| record.tally(-outcome))
        });
        std::mem::swap(&mut self.one, &mut self.two);
        second_half?;

        info!(
            one_won = record.one_won,
            two_won = record.two_won,
            draws = record.draws,
            "arena series finished"
        );
        Ok(record)
    }

    fn show(&self, board: &BoardTensor, turn: Option<(usize, Player)>, verbose: bool) {
        let Some(display) = self.display.filter(|_| verbose) else {
            return;
        };
        if let Some((turn, player)) = turn {
            println!("Turn {turn} {player}");
        }
        println!("{}", display(board));
    }
}
