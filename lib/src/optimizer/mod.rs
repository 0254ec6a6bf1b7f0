use crate::backend::scalar::Scalar;
use crate::backend::tensor1d::Tensor1D;
use crate::backend::tensor2d::Tensor2D;
use crate::backend::Backend;
use crate::error::{LinearError, Result};
use crate::metrics;

/// Number of iterations between two `trace!` records of the training loss.
pub const LOSS_LOG_INTERVAL: usize = 100;

/// Full-batch gradient descent on the squared-error loss.
///
/// Every step uses all samples of the design matrix:
/// ```text
/// error = X·θ - y
/// θ ← θ - η / n · Xᵀ·error
/// ```
/// where `η` is the learning rate and `n` the number of rows.
///
/// The optimizer always runs the configured number of iterations. There is no
/// momentum, no adaptive learning rate and no convergence check, so a learning
/// rate that is too large makes the loss grow instead of failing.
///
/// # Example
/// ```rust
/// use linfit::backend::{CpuBackend, Tensor1D, Tensor2D};
/// use linfit::optimizer::BatchGradientDescent;
///
/// // y = 1 + 2x, design matrix already carries the intercept column
/// let x = Tensor2D::<CpuBackend>::from_rows(&[
///     vec![1.0, 0.0],
///     vec![1.0, 1.0],
///     vec![1.0, 2.0],
/// ]).unwrap();
/// let y = Tensor1D::new(vec![1.0, 3.0, 5.0]);
///
/// let gd = BatchGradientDescent::<CpuBackend>::new(0.1, 2000);
/// let theta = gd.minimize(&x, &y, Tensor1D::zeros(2)).unwrap().to_vec();
/// assert!((theta[0] - 1.0).abs() < 1e-6);
/// assert!((theta[1] - 2.0).abs() < 1e-6);
/// ```
#[derive(Clone)]
pub struct BatchGradientDescent<B: Backend> {
    /// Learning rate (η), kept as a backend scalar so it scales tensors directly.
    lr: Scalar<B>,
    iterations: usize,
}

impl<B: Backend> BatchGradientDescent<B> {
    /// Creates an optimizer running `iterations` steps with learning rate `lr`.
    ///
    /// Any real `lr` is accepted. Choosing one that converges is up to the caller.
    pub fn new(lr: f64, iterations: usize) -> Self {
        Self {
            lr: Scalar::<B>::new(lr),
            iterations,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Performs a single update and returns the new parameters.
    ///
    /// `x` is the design matrix (intercept column included) and `theta` has one
    /// entry per column of `x`.
    ///
    /// # Panics
    /// If the shapes of `x`, `y` and `theta` disagree. [`minimize`](Self::minimize)
    /// checks them before iterating.
    pub fn step(&self, x: &Tensor2D<B>, y: &Tensor1D<B>, theta: &Tensor1D<B>) -> Tensor1D<B> {
        let n = Scalar::<B>::new(x.n_rows() as f64);
        let error = x.dot(theta).sub(y);
        let gradient = x.tdot(&error).scale(&(self.lr / n));
        theta.sub(&gradient)
    }

    /// Runs exactly [`iterations`](Self::iterations) steps starting from `theta0`.
    ///
    /// # Errors
    /// [`LinearError::DimensionMismatch`] if `y` does not have one entry per row of
    /// `x`, or `theta0` does not have one entry per column.
    pub fn minimize(
        &self,
        x: &Tensor2D<B>,
        y: &Tensor1D<B>,
        theta0: Tensor1D<B>,
    ) -> Result<Tensor1D<B>> {
        let (rows, cols) = x.shape();
        if y.len() != rows {
            return Err(LinearError::mismatch("gradient descent (targets)", rows, y.len()));
        }
        if theta0.len() != cols {
            return Err(LinearError::mismatch(
                "gradient descent (parameters)",
                cols,
                theta0.len(),
            ));
        }

        let mut theta = theta0;
        for iteration in 1..=self.iterations {
            theta = self.step(x, y, &theta);

            if iteration % LOSS_LOG_INTERVAL == 0 && log::log_enabled!(log::Level::Trace) {
                let loss = metrics::mean_squared_error(y, &x.dot(&theta))?;
                log::trace!("iteration {iteration}/{}: loss = {loss:.6}", self.iterations);
            }
        }
        Ok(theta)
    }
}

impl<B: Backend> std::fmt::Debug for BatchGradientDescent<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchGradientDescent")
            .field("learning_rate", &self.learning_rate())
            .field("iterations", &self.iterations)
            .finish()
    }
}
