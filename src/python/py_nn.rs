//! Neural network bindings for Python.

use pyo3::prelude::*;
use tracing::warn;

use crate::core::BoardTensor;
use crate::nn::PolicyValueNetwork;

use super::py_core::tensor_to_numpy;

/// Python-implemented PolicyValueNetwork wrapper.
///
/// Allows Python callables to be used as neural networks from Rust.
#[pyclass(name = "PolicyValueNetwork")]
pub struct PyPolicyValueNetwork {
    callback: PyObject,
    action_size: usize,
}

#[pymethods]
impl PyPolicyValueNetwork {
    /// Wrap a Python callable.
    ///
    /// The callable receives a canonical board as a 2-D float32 array and
    /// returns `(policy, value)`: a list of `action_size` priors and a float.
    #[new]
    fn new(callback: PyObject, action_size: usize) -> Self {
        Self {
            callback,
            action_size,
        }
    }

    /// Call the network directly.
    #[pyo3(name = "predict")]
    fn py_predict(&self, py: Python<'_>, board: PyObject) -> PyResult<(Vec<f32>, f32)> {
        self.callback.call1(py, (board,))?.extract(py)
    }

    #[getter]
    fn action_size(&self) -> usize {
        self.action_size
    }
}

impl PyPolicyValueNetwork {
    /// Share the callback under the GIL.
    pub(crate) fn clone_ref(&self, py: Python<'_>) -> Self {
        Self {
            callback: self.callback.clone_ref(py),
            action_size: self.action_size,
        }
    }

    fn fallback_prediction(&self) -> (Vec<f32>, f32) {
        (vec![1.0 / self.action_size as f32; self.action_size], 0.0)
    }

    fn call(&self, py: Python<'_>, board: &BoardTensor) -> PyResult<(Vec<f32>, f32)> {
        let array = tensor_to_numpy(py, board)?;
        self.callback.call1(py, (array,))?.extract(py)
    }
}

impl PolicyValueNetwork for PyPolicyValueNetwork {
    fn predict(&self, board: &BoardTensor) -> (Vec<f32>, f32) {
        Python::with_gil(|py| match self.call(py, board) {
            Ok((policy, value)) if policy.len() == self.action_size => (policy, value),
            Ok((policy, _)) => {
                warn!(
                    got = policy.len(),
                    expected = self.action_size,
                    "python network returned a policy of the wrong length"
                );
                self.fallback_prediction()
            }
            Err(e) => {
                warn!(error = %e, "python network call failed");
                self.fallback_prediction()
            }
        })
    }
}
