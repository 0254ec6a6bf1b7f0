
/// Hyperparameters of a [`LinearRegression::fit_with`](super::LinearRegression::fit_with) call.
///
/// Defaults:
/// - `learning_rate`: 1.0
/// - `iterations`: 1000
/// - `normalize`: true
///
/// # Example
/// ```
/// use linfit::model::FitOptions;
///
/// let opts = FitOptions::new().learning_rate(0.1).iterations(500);
/// assert_eq!(opts.iterations, 500);
/// assert!(opts.normalize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub learning_rate: f64,
    pub iterations: usize,
    /// Standardize features and target before descending, then map the weights back.
    pub normalize: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            learning_rate: 1.0,
            iterations: 1000,
            normalize: true,
        }
    }
}

impl FitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Enables or disables standardization.
    ///
    /// Without it, gradient descent runs on raw features and usually needs a much
    /// smaller learning rate to converge.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}
