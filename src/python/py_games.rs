//! Game adapter bindings for Python.
//!
//! Method names follow the camel-case convention of Python AlphaZero
//! training loops so the class drops into them unchanged. Boards are 2-D
//! float32 numpy arrays and players are `1` / `-1`.

use numpy::{PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::BoardTensor;
use crate::games::ultimate::{render, Board};
use crate::games::UltimateTicTacToe;
use crate::rules::Game;

use super::py_core::{player_from_int, player_to_int, tensor_from_numpy, tensor_to_numpy, value_error};

/// Python wrapper for the Ultimate Tic-Tac-Toe adapter.
#[pyclass(name = "UltimateTicTacToeGame")]
#[derive(Clone, Copy)]
pub struct PyUltimateTicTacToe(pub UltimateTicTacToe);

impl PyUltimateTicTacToe {
    /// Read a board and check it decodes for this game.
    fn board(&self, board: &PyReadonlyArray2<'_, f32>) -> PyResult<BoardTensor> {
        let tensor = tensor_from_numpy(board)?;
        Board::try_from(&tensor).map_err(value_error)?;
        if tensor.side() != self.0.side() {
            return Err(PyValueError::new_err(format!(
                "board side {} does not match game side {}",
                tensor.side(),
                self.0.side()
            )));
        }
        Ok(tensor)
    }
}

#[pymethods]
impl PyUltimateTicTacToe {
    /// Create a game with sub-boards of size `n`.
    #[new]
    #[pyo3(signature = (n = 3))]
    fn new(n: usize) -> PyResult<Self> {
        if n < 2 {
            return Err(PyValueError::new_err(format!(
                "sub-board size must be at least 2, got {n}"
            )));
        }
        Ok(Self(UltimateTicTacToe::new(n)))
    }

    #[getter]
    fn n(&self) -> usize {
        self.0.n()
    }

    #[pyo3(name = "getInitBoard")]
    fn init_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        tensor_to_numpy(py, &self.0.init_board())
    }

    #[pyo3(name = "getBoardSize")]
    fn board_size(&self) -> (usize, usize) {
        self.0.board_size()
    }

    #[pyo3(name = "getActionSize")]
    fn action_size(&self) -> usize {
        self.0.action_size()
    }

    /// Returns `(next_board, next_player)`.
    #[pyo3(name = "getNextState")]
    fn next_state<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, f32>,
        player: i64,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<f32>>, i64)> {
        let tensor = self.board(&board)?;
        let player = player_from_int(player)?;
        if action >= self.0.action_size() {
            return Err(PyValueError::new_err(format!(
                "action {action} out of range"
            )));
        }
        if !self.0.valid_moves(&tensor, player)[action] {
            return Err(PyValueError::new_err(format!(
                "action {action} is not legal"
            )));
        }
        let (next, to_move) = self.0.next_state(&tensor, player, action);
        Ok((tensor_to_numpy(py, &next)?, player_to_int(to_move)))
    }

    /// Legality mask with `1` for legal actions.
    #[pyo3(name = "getValidMoves")]
    fn valid_moves(&self, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<Vec<u8>> {
        let tensor = self.board(&board)?;
        let player = player_from_int(player)?;
        Ok(self
            .0
            .valid_moves(&tensor, player)
            .into_iter()
            .map(u8::from)
            .collect())
    }

    #[pyo3(name = "getGameEnded")]
    fn game_ended(&self, board: PyReadonlyArray2<'_, f32>, player: i64) -> PyResult<f32> {
        let tensor = self.board(&board)?;
        Ok(self.0.game_ended(&tensor, player_from_int(player)?))
    }

    #[pyo3(name = "getCanonicalForm")]
    fn canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, f32>,
        player: i64,
    ) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let tensor = tensor_from_numpy(&board)?;
        let canonical = self.0.canonical_form(&tensor, player_from_int(player)?);
        tensor_to_numpy(py, &canonical)
    }

    /// List of `(board, policy)` images.
    #[pyo3(name = "getSymmetries")]
    fn symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, f32>,
        pi: Vec<f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<f32>>, Vec<f32>)>> {
        let tensor = tensor_from_numpy(&board)?;
        if pi.len() != tensor.len() + 1 {
            return Err(PyValueError::new_err(format!(
                "policy has {} entries, expected {}",
                pi.len(),
                tensor.len() + 1
            )));
        }
        self.0
            .symmetries(&tensor, &pi)
            .into_iter()
            .map(|(b, p)| Ok((tensor_to_numpy(py, &b)?, p)))
            .collect()
    }

    #[pyo3(name = "stringRepresentation")]
    fn string_representation<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray2<'py, f32>,
    ) -> PyResult<Bound<'py, PyBytes>> {
        let tensor = tensor_from_numpy(&board)?;
        Ok(PyBytes::new_bound(py, &self.0.string_representation(&tensor)))
    }

    /// Text rendering of a board.
    #[staticmethod]
    fn display(board: PyReadonlyArray2<'_, f32>) -> PyResult<String> {
        let tensor = tensor_from_numpy(&board)?;
        Board::try_from(&tensor).map_err(value_error)?;
        Ok(render(&tensor))
    }

    fn __repr__(&self) -> String {
        format!("UltimateTicTacToeGame(n={})", self.0.n())
    }
}
