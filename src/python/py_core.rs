//! Conversions between numpy arrays, Python ints and core types.

use numpy::{PyArray1, PyArray2, PyArrayMethods, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoardTensor, Error, Player};

/// Map a crate error onto `ValueError`.
pub(crate) fn value_error(err: Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Player from the `1` / `-1` convention used by Python training loops.
pub(crate) fn player_from_int(player: i64) -> PyResult<Player> {
    i8::try_from(player)
        .ok()
        .and_then(Player::from_sign)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or -1, got {player}")))
}

/// Int form of a player.
pub(crate) fn player_to_int(player: Player) -> i64 {
    i64::from(player.sign())
}

/// Copy a square 2-D float array into a tensor.
pub(crate) fn tensor_from_numpy(board: &PyReadonlyArray2<'_, f32>) -> PyResult<BoardTensor> {
    let shape = board.shape();
    let (rows, cols) = (shape[0], shape[1]);
    if rows != cols {
        return Err(PyValueError::new_err(format!(
            "board must be square, got {rows}x{cols}"
        )));
    }
    let data: Vec<f32> = board.as_array().iter().copied().collect();
    BoardTensor::from_vec(rows, data).map_err(value_error)
}

/// Copy a tensor into a fresh 2-D numpy array.
pub(crate) fn tensor_to_numpy<'py>(
    py: Python<'py>,
    board: &BoardTensor,
) -> PyResult<Bound<'py, PyArray2<f32>>> {
    let side = board.side();
    PyArray1::from_slice_bound(py, board.as_slice()).reshape([side, side])
}
