//! Training data bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::games::UltimateTicTacToe;
use crate::training::{Step, TrainingSample, Trajectory};

use super::py_core::{player_to_int, tensor_to_numpy, value_error};

/// Python wrapper for Step.
#[pyclass(name = "Step")]
#[derive(Clone)]
pub struct PyStep(pub Step);

#[pymethods]
impl PyStep {
    /// Canonical board at this step.
    #[getter]
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        tensor_to_numpy(py, &self.0.board)
    }

    /// MCTS action probabilities.
    #[getter]
    fn policy(&self) -> Vec<f32> {
        self.0.policy.clone()
    }

    #[getter]
    fn action(&self) -> usize {
        self.0.action
    }

    /// `1` or `-1`.
    #[getter]
    fn player(&self) -> i64 {
        player_to_int(self.0.player)
    }

    #[getter]
    fn move_number(&self) -> usize {
        self.0.move_number
    }

    fn __repr__(&self) -> String {
        format!(
            "Step(move={}, player={}, action={})",
            self.0.move_number,
            player_to_int(self.0.player),
            self.0.action
        )
    }
}

/// Python wrapper for Trajectory.
#[pyclass(name = "Trajectory")]
#[derive(Clone)]
pub struct PyTrajectory {
    pub inner: Trajectory,
    pub game: UltimateTicTacToe,
}

#[pymethods]
impl PyTrajectory {
    #[getter]
    fn steps(&self) -> Vec<PyStep> {
        self.inner.steps.iter().cloned().map(PyStep).collect()
    }

    /// Terminal value for the player to move at the end (`0.0` if cut short).
    #[getter]
    fn final_value(&self) -> f32 {
        self.inner.final_value
    }

    #[getter]
    fn finished(&self) -> bool {
        self.inner.is_finished()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.inner.seed
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// Value target for player `1` or `-1`.
    fn player_value(&self, player: i64) -> PyResult<f32> {
        Ok(self.inner.player_value(super::py_core::player_from_int(player)?))
    }

    /// Symmetry-augmented samples, eight per step.
    fn to_training_samples(&self) -> Vec<PyTrainingSample> {
        self.inner
            .to_training_samples(&self.game)
            .into_iter()
            .map(PyTrainingSample)
            .collect()
    }

    /// Coach-style examples: a list of `(board, policy, value)` tuples.
    fn examples<'py>(
        &self,
        py: Python<'py>,
    ) -> PyResult<Vec<(Bound<'py, PyArray2<f32>>, Vec<f32>, f32)>> {
        self.inner
            .to_training_samples(&self.game)
            .into_iter()
            .map(|s| Ok((tensor_to_numpy(py, &s.board)?, s.policy, s.value)))
            .collect()
    }

    /// Binary snapshot.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.inner.to_bytes().map_err(value_error)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Restore from a snapshot taken with `to_bytes`.
    #[staticmethod]
    #[pyo3(signature = (data, n = 3))]
    fn from_bytes(data: &[u8], n: usize) -> PyResult<Self> {
        Ok(Self {
            inner: Trajectory::from_bytes(data).map_err(value_error)?,
            game: UltimateTicTacToe::new(n),
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(steps={}, finished={}, seed={})",
            self.inner.len(),
            self.inner.is_finished(),
            self.inner.seed
        )
    }
}

/// Python wrapper for TrainingSample.
#[pyclass(name = "TrainingSample")]
#[derive(Clone)]
pub struct PyTrainingSample(pub TrainingSample);

#[pymethods]
impl PyTrainingSample {
    #[getter]
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        tensor_to_numpy(py, &self.0.board)
    }

    #[getter]
    fn policy(&self) -> Vec<f32> {
        self.0.policy.clone()
    }

    #[getter]
    fn value(&self) -> f32 {
        self.0.value
    }

    fn __repr__(&self) -> String {
        format!(
            "TrainingSample(side={}, value={})",
            self.0.board.side(),
            self.0.value
        )
    }
}
