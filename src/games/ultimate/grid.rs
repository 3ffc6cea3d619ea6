//! Cell values and coordinates.
//!
//! The full grid is `n² x n²` cells. A cell coordinate (`Square`) splits
//! uniquely into the sub-board that holds it and its local position inside
//! that sub-board. The local position doubles as a sub-board coordinate: it
//! names the sub-board the opponent is sent to.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Content of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Played by a player. Never cleared once set.
    Owned(Player),
}

impl Mark {
    /// Check if the cell is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Owner of the cell, if any.
    #[inline]
    #[must_use]
    pub fn owner(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Owned(p) => Some(p),
        }
    }
}

/// Coordinate of one sub-board on the meta-board, each index in `[0, n)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubBoard {
    pub row: usize,
    pub col: usize,
}

impl SubBoard {
    /// Create a sub-board coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Flat index into an `n x n` score grid.
    #[inline]
    #[must_use]
    pub fn index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// All sub-boards of an `n x n` meta-board in row-major order.
    pub fn all(n: usize) -> impl Iterator<Item = SubBoard> {
        (0..n).flat_map(move |row| (0..n).map(move |col| SubBoard { row, col }))
    }

    /// Cells of this sub-board in row-major order.
    pub fn squares(self, n: usize) -> impl Iterator<Item = Square> {
        let row0 = self.row * n;
        let col0 = self.col * n;
        (0..n).flat_map(move |r| (0..n).map(move |c| Square::new(row0 + r, col0 + c)))
    }

    /// Cell at local position `(row, col)` inside this sub-board.
    #[inline]
    #[must_use]
    pub fn square_at(self, n: usize, row: usize, col: usize) -> Square {
        Square::new(self.row * n + row, self.col * n + col)
    }
}

impl std::fmt::Display for SubBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubBoard({}, {})", self.row, self.col)
    }
}

/// Coordinate of one cell on the full grid, each index in `[0, n²)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    /// Create a cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Sub-board holding this cell.
    #[inline]
    #[must_use]
    pub fn sub_board(self, n: usize) -> SubBoard {
        SubBoard::new(self.row / n, self.col / n)
    }

    /// Position of this cell inside its sub-board.
    ///
    /// Read as a meta-board coordinate, this is the sub-board the next
    /// player is sent to.
    #[inline]
    #[must_use]
    pub fn local(self, n: usize) -> SubBoard {
        SubBoard::new(self.row % n, self.col % n)
    }

    /// Flat index into the `n² x n²` grid (row-major).
    #[inline]
    #[must_use]
    pub fn index(self, n: usize) -> usize {
        self.row * n * n + self.col
    }

    /// Action index of this cell. Same as the flat index.
    #[inline]
    #[must_use]
    pub fn to_action(self, n: usize) -> usize {
        self.index(n)
    }

    /// Cell for a board action.
    ///
    /// Panics if `action` is not a cell action (`>= n⁴`).
    #[must_use]
    pub fn from_action(n: usize, action: usize) -> Self {
        let side = n * n;
        assert!(
            action < side * side,
            "action {action} is not a cell of a {side}x{side} board"
        );
        Self::new(action / side, action % side)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}
