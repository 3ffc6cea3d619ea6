//! Dihedral transforms of square boards.
//!
//! The eight transforms are generated as four counter-clockwise quarter
//! turns (1 through 4, the last being the identity), each followed or not by
//! a left-right mirror. The same transform is applied to a board and to the
//! board-shaped prefix of a policy; a trailing pass probability is carried
//! through unchanged.

use serde::{Deserialize, Serialize};

use crate::core::BoardTensor;

/// One element of the dihedral group of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symmetry {
    /// Counter-clockwise quarter turns, `1..=4`.
    pub rotations: u8,
    /// Mirror left-right after rotating.
    pub flip: bool,
}

impl Symmetry {
    /// All eight transforms in generation order.
    #[must_use]
    pub fn all() -> [Symmetry; 8] {
        let mut out = [Symmetry {
            rotations: 1,
            flip: true,
        }; 8];
        let mut i = 0;
        for rotations in 1..=4 {
            for flip in [true, false] {
                out[i] = Symmetry { rotations, flip };
                i += 1;
            }
        }
        out
    }

    /// Source position read into destination `(row, col)` of a `side x side`
    /// grid.
    #[must_use]
    pub fn source(self, side: usize, row: usize, col: usize) -> (usize, usize) {
        let (mut r, mut c) = (row, col);
        if self.flip {
            c = side - 1 - c;
        }
        for _ in 0..self.rotations {
            (r, c) = (c, side - 1 - r);
        }
        (r, c)
    }

    /// Apply to a row-major `side x side` slice.
    #[must_use]
    pub fn apply_slice<T: Copy>(self, side: usize, data: &[T]) -> Vec<T> {
        assert_eq!(data.len(), side * side, "data is not a {side}x{side} grid");
        let mut out = Vec::with_capacity(data.len());
        for row in 0..side {
            for col in 0..side {
                let (r, c) = self.source(side, row, col);
                out.push(data[r * side + c]);
            }
        }
        out
    }

    /// Apply to a board tensor.
    #[must_use]
    pub fn apply_board(self, board: &BoardTensor) -> BoardTensor {
        let side = board.side();
        let data = self.apply_slice(side, board.as_slice());
        match BoardTensor::from_vec(side, data) {
            Ok(t) => t,
            Err(e) => unreachable!("transform preserves shape: {e}"),
        }
    }

    /// Apply to a policy of length `side² + 1`.
    ///
    /// Panics if the policy length does not match the board.
    #[must_use]
    pub fn apply_policy(self, side: usize, policy: &[f32]) -> Vec<f32> {
        assert_eq!(
            policy.len(),
            side * side + 1,
            "policy length must be one per cell plus pass"
        );
        let (cells, pass) = policy.split_at(side * side);
        let mut out = self.apply_slice(side, cells);
        out.extend_from_slice(pass);
        out
    }
}
