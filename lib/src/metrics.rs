//! Regression error metrics.

use crate::backend::{Backend, Tensor1D};
use crate::error::{LinearError, Result};

/// Mean Squared Error.
///
/// MSE = sum((y_pred - y_true)^2) / n
///
/// An empty pair of vectors scores `0.0`.
///
/// # Errors
/// [`LinearError::DimensionMismatch`] if the vectors have different lengths.
///
/// # Example
/// ```
/// use linfit::backend::{CpuBackend, Tensor1D};
/// use linfit::metrics::mean_squared_error;
///
/// let y = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]);
/// let p = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0]);
/// assert_eq!(mean_squared_error(&y, &p).unwrap(), 2.5);
/// ```
pub fn mean_squared_error<B: Backend>(y_true: &Tensor1D<B>, y_pred: &Tensor1D<B>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(LinearError::mismatch(
            "mean_squared_error",
            y_true.len(),
            y_pred.len(),
        ));
    }
    if y_true.is_empty() {
        return Ok(0.0);
    }

    let residuals = y_pred.sub(y_true);
    Ok(residuals.dot(&residuals).to_f64() / y_true.len() as f64)
}

/// Root Mean Squared Error, in the units of the target.
pub fn root_mean_squared_error<B: Backend>(
    y_true: &Tensor1D<B>,
    y_pred: &Tensor1D<B>,
) -> Result<f64> {
    mean_squared_error(y_true, y_pred).map(f64::sqrt)
}
