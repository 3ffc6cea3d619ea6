//! Player identification for two-sided play.
//!
//! ## Player
//!
//! The two sides of a game. Each side carries a numeric sign (`+1` / `-1`)
//! which doubles as its marker in board tensors and as the multiplier used
//! to flip a board into a side's own perspective.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `One` moves first in a fresh episode and is written `O` on a rendered
/// board; `Two` is written `X`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, sign `+1`.
    One,
    /// Second player, sign `-1`.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Numeric sign of this player (`+1` or `-1`).
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Sign as a float, for tensor arithmetic.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Player::One => 1.0,
            Player::Two => -1.0,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player from a numeric sign.
    ///
    /// Returns `None` for anything other than `1` or `-1`.
    ///
    /// ```
    /// use uttt_zero::core::Player;
    ///
    /// assert_eq!(Player::from_sign(1), Some(Player::One));
    /// assert_eq!(Player::from_sign(-1), Some(Player::Two));
    /// assert_eq!(Player::from_sign(0), None);
    /// ```
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    /// Board symbol used by the text renderer.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::One => 'O',
            Player::Two => 'X',
        }
    }
}

impl std::ops::Neg for Player {
    type Output = Player;

    fn neg(self) -> Self::Output {
        self.opponent()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
