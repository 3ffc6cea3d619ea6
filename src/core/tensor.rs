//! Square board tensors exchanged with search and evaluators.
//!
//! A `BoardTensor` is a `side x side` matrix of `f32` markers stored in
//! row-major order. Player marks are the players' signs, an empty cell is
//! `0.0`, and an empty cell that is currently a legal move holds the
//! free-play sentinel.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::player::Player;

/// Marker for a cell owned by `Player::One`.
pub const PLAYER_ONE: f32 = 1.0;

/// Marker for a cell owned by `Player::Two`.
pub const PLAYER_TWO: f32 = -1.0;

/// Marker for an empty cell that is not currently playable.
pub const EMPTY: f32 = 0.0;

/// Marker for an empty cell that is a legal move right now.
///
/// Structural, not a player value: it is never negated.
pub const FREE_PLAY: f32 = 0.1;

/// Square matrix of cell markers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardTensor {
    side: usize,
    data: Vec<f32>,
}

impl BoardTensor {
    /// Create a tensor from row-major data.
    ///
    /// Fails if `data` does not hold exactly `side * side` entries.
    pub fn from_vec(side: usize, data: Vec<f32>) -> Result<Self> {
        let expected = side * side;
        if data.len() != expected {
            return Err(Error::TensorShape {
                side,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { side, data })
    }

    /// Create a tensor filled with `EMPTY`.
    #[must_use]
    pub fn zeros(side: usize) -> Self {
        Self {
            side,
            data: vec![EMPTY; side * side],
        }
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Shape as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.side, self.side)
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.side + col]
    }

    /// Set entry at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.side + col] = value;
    }

    /// Row-major view of all entries.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume into row-major data.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Flip player marks into `player`'s perspective.
    ///
    /// Every player mark is multiplied by the player's sign. Empty cells and
    /// free-play sentinels are left untouched, so no `-0.0` ever appears and
    /// sentinels survive the flip.
    #[must_use]
    pub fn oriented_for(&self, player: Player) -> Self {
        let sign = player.value();
        let data = self
            .data
            .iter()
            .map(|&v| if v == EMPTY || v == FREE_PLAY { v } else { v * sign })
            .collect();
        Self {
            side: self.side,
            data,
        }
    }

    /// Byte-exact key for transposition tables.
    ///
    /// Little-endian bytes of every entry in row-major order. Equal tensors
    /// give equal keys and distinct tensors give distinct keys.
    #[must_use]
    pub fn canonical_key(&self) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.data.len() * 4);
        for v in &self.data {
            key.extend_from_slice(&v.to_le_bytes());
        }
        key
    }
}
