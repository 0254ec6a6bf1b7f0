//! Ordinary least-squares linear regression trained by batch gradient descent.
//!
//! The model keeps its weights in original feature space: an intercept and one
//! coefficient per feature. When fitting with normalization, features and target
//! are standardized, descent runs in standardized space and the learned weights
//! are mapped back with [`StandardScaler::inverse_transform_weights`], so
//! prediction never needs the scaling statistics.
//!
//! A model starts untrained and becomes trained through [`LinearRegression::fit`]
//! or [`LinearRegression::set_weights`]. There is no way back to untrained.

use crate::backend::{Backend, CpuBackend, Scalar, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{LinearError, Result};
use crate::metrics;
use crate::model::FitOptions;
use crate::optimizer::BatchGradientDescent;
use crate::preprocessing::StandardScaler;
use crate::serialization::WeightVector;
use std::fmt;
use std::path::Path;

/// Trained parameters of a linear model: coefficients and intercept.
#[derive(Clone)]
pub struct LinearParams<B: Backend> {
    pub coefficients: Tensor1D<B>,
    pub intercept: Scalar<B>,
}

impl<B: Backend> LinearParams<B> {
    /// Splits `[intercept, coef_1, …, coef_n]`.
    ///
    /// # Errors
    /// [`LinearError::InvalidWeights`] if `weights` is empty.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        let (intercept, coefficients) = weights.split_first().ok_or_else(|| {
            LinearError::InvalidWeights(
                "weight vector must contain at least the intercept".to_string(),
            )
        })?;
        Ok(Self {
            coefficients: Tensor1D::new(coefficients.to_vec()),
            intercept: Scalar::new(*intercept),
        })
    }

    /// Flattens back to `[intercept, coef_1, …, coef_n]`.
    pub fn to_weights(&self) -> Vec<f64> {
        let mut weights = Vec::with_capacity(self.coefficients.len() + 1);
        weights.push(self.intercept.to_f64());
        weights.extend(self.coefficients.to_vec());
        weights
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

impl<B: Backend> fmt::Debug for LinearParams<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearParams")
            .field("coefficients", &self.coefficients.to_vec())
            .field("intercept", &self.intercept.to_f64())
            .finish()
    }
}

/// Single-output linear regression `y = intercept + coefficients · x`.
///
/// # Example
/// ```
/// use linfit::LinearRegression;
/// use linfit::backend::{CpuBackend, Tensor1D, Tensor2D};
///
/// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0]]).unwrap();
/// let y = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0, 6.0, 8.0]);
///
/// let mut model = LinearRegression::<CpuBackend>::new();
/// model.fit(&x, &y, 0.1, 1000, true).unwrap();
///
/// let pred = model.predict(&Tensor2D::from_rows(&[vec![5.0]]).unwrap()).unwrap();
/// assert!((pred.to_vec()[0] - 10.0).abs() < 1e-2);
/// ```
#[derive(Clone)]
pub struct LinearRegression<B: Backend = CpuBackend> {
    params: Option<LinearParams<B>>,
}

impl<B: Backend> Default for LinearRegression<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> LinearRegression<B> {
    /// Creates an untrained model.
    pub fn new() -> Self {
        Self { params: None }
    }

    /// Creates a trained model from `[intercept, coef_1, …, coef_n]`.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        let mut model = Self::new();
        model.set_weights(weights)?;
        Ok(model)
    }

    /// Learns intercept and coefficients from `x` (one row per sample) and `y`.
    ///
    /// Starts from zero weights and runs exactly `iterations` full-batch gradient
    /// descent steps. With `normalize`, descent runs on standardized data and the
    /// result is mapped back to original units. Previous weights are replaced.
    ///
    /// A learning rate that diverges is not detected: the weights simply end up
    /// huge or non-finite. A constant feature column with `normalize` produces
    /// non-finite weights as well.
    ///
    /// # Errors
    /// - [`LinearError::EmptyData`] if `x` has no rows or no columns.
    /// - [`LinearError::DimensionMismatch`] if `y.len()` differs from the row count.
    pub fn fit(
        &mut self,
        x: &Tensor2D<B>,
        y: &Tensor1D<B>,
        learning_rate: f64,
        iterations: usize,
        normalize: bool,
    ) -> Result<()> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 || n_features == 0 {
            return Err(LinearError::EmptyData(format!(
                "cannot fit on a {n_samples}x{n_features} feature matrix"
            )));
        }
        if y.len() != n_samples {
            return Err(LinearError::mismatch("fit (targets)", n_samples, y.len()));
        }

        log::debug!(
            "fitting linear regression on {n_samples}x{n_features} \
             (learning_rate={learning_rate}, iterations={iterations}, normalize={normalize})"
        );

        let optimizer = BatchGradientDescent::<B>::new(learning_rate, iterations);
        let theta0 = Tensor1D::<B>::zeros(n_features + 1);

        let weights = if normalize {
            let (x_scaled, x_params) = StandardScaler::<B>::fit_transform(x)?;
            let (y_scaled, y_params) = StandardScaler::<B>::fit_transform_1d(y)?;
            let design = x_scaled.with_intercept_column()?;
            let theta = optimizer.minimize(&design, &y_scaled, theta0)?;
            StandardScaler::<B>::inverse_transform_weights(&theta, &x_params, &y_params)?
        } else {
            let design = x.with_intercept_column()?;
            optimizer.minimize(&design, y, theta0)?
        };

        let params = LinearParams::from_weights(&weights.to_vec())?;
        log::debug!("fit finished: {params:?}");
        self.params = Some(params);
        Ok(())
    }

    /// [`fit`](Self::fit) with hyperparameters bundled in [`FitOptions`].
    pub fn fit_with(
        &mut self,
        x: &Tensor2D<B>,
        y: &Tensor1D<B>,
        options: &FitOptions,
    ) -> Result<()> {
        self.fit(
            x,
            y,
            options.learning_rate,
            options.iterations,
            options.normalize,
        )
    }

    /// Fits on every sample of `dataset`.
    pub fn fit_dataset<D>(&mut self, dataset: &D, options: &FitOptions) -> Result<()>
    where
        D: Dataset,
        LinearError: From<D::Error>,
    {
        let (x, y) = dataset.full_batch::<B>()?;
        self.fit_with(&x, &y, options)
    }

    fn params(&self) -> Result<&LinearParams<B>> {
        self.params.as_ref().ok_or(LinearError::Untrained)
    }

    /// Predicts one value per row of `x`: `x · coefficients + intercept`.
    ///
    /// # Errors
    /// - [`LinearError::Untrained`] before `fit` or `set_weights`.
    /// - [`LinearError::DimensionMismatch`] if `x` does not have one column per coefficient.
    pub fn predict(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        let params = self.params()?;
        if x.n_cols() != params.n_features() {
            return Err(LinearError::mismatch(
                "predict",
                params.n_features(),
                x.n_cols(),
            ));
        }
        Ok(x.dot(&params.coefficients).add_scalar(&params.intercept))
    }

    /// Predicts a single sample.
    pub fn predict_one(&self, sample: &Tensor1D<B>) -> Result<f64> {
        let params = self.params()?;
        if sample.len() != params.n_features() {
            return Err(LinearError::mismatch(
                "predict_one",
                params.n_features(),
                sample.len(),
            ));
        }
        Ok((params.coefficients.dot(sample) + params.intercept).to_f64())
    }

    /// Mean of the squared residuals of [`predict`](Self::predict) against `y`.
    ///
    /// # Errors
    /// Same as `predict`, plus [`LinearError::DimensionMismatch`] if `y` does not
    /// have one entry per row of `x`.
    pub fn mse(&self, x: &Tensor2D<B>, y: &Tensor1D<B>) -> Result<f64> {
        let predictions = self.predict(x)?;
        if y.len() != predictions.len() {
            return Err(LinearError::mismatch("mse (targets)", predictions.len(), y.len()));
        }
        metrics::mean_squared_error(y, &predictions)
    }

    /// Loads `[intercept, coef_1, …, coef_n]` and marks the model as trained.
    ///
    /// The length is not checked against any data: the first later `predict`
    /// with a different column count fails instead.
    ///
    /// # Errors
    /// [`LinearError::InvalidWeights`] if `weights` is empty.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        self.params = Some(LinearParams::from_weights(weights)?);
        Ok(())
    }

    /// `[intercept, coef_1, …, coef_n]`, or `None` while untrained.
    pub fn weights(&self) -> Option<Vec<f64>> {
        self.params.as_ref().map(LinearParams::to_weights)
    }

    /// Alias of [`weights`](Self::weights).
    pub fn get_weights(&self) -> Option<Vec<f64>> {
        self.weights()
    }

    pub fn intercept(&self) -> Option<f64> {
        self.params.as_ref().map(|p| p.intercept.to_f64())
    }

    pub fn coefficients(&self) -> Option<Vec<f64>> {
        self.params.as_ref().map(|p| p.coefficients.to_vec())
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Writes the weights as a JSON array.
    ///
    /// # Errors
    /// [`LinearError::Untrained`] if there is nothing to save,
    /// [`LinearError::InvalidWeights`] if a weight is not finite, otherwise I/O
    /// and serialization failures.
    pub fn save_weights<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let weights = self.weights().ok_or(LinearError::Untrained)?;
        WeightVector::new(weights).save_to_file(path)
    }

    /// Builds a trained model from a JSON weight file.
    pub fn load_weights<P: AsRef<Path>>(path: P) -> Result<Self> {
        let weights = WeightVector::load_from_file(path)?;
        Self::from_weights(weights.as_slice())
    }
}

/// Renders the weights as `[intercept, coef_1, …]`, honoring `{:.N}`.
/// An untrained model renders as `None`.
impl<B: Backend> fmt::Display for LinearRegression<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(weights) = self.weights() else {
            return f.write_str("None");
        };

        f.write_str("[")?;
        for (i, w) in weights.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{w:.precision$}")?,
                None => write!(f, "{w}")?,
            }
        }
        f.write_str("]")
    }
}

impl<B: Backend> fmt::Debug for LinearRegression<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearRegression")
            .field("params", &self.params)
            .finish()
    }
}

/// Convenient alias for CPU-based linear regression.
pub type LinearRegressor = LinearRegression<CpuBackend>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::InMemoryDataset;

    fn x_of(rows: &[&[f64]]) -> Tensor2D<CpuBackend> {
        let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        Tensor2D::from_rows(&rows).unwrap()
    }

    fn y_of(values: &[f64]) -> Tensor1D<CpuBackend> {
        Tensor1D::new(values.to_vec())
    }

    fn doubling() -> (Tensor2D<CpuBackend>, Tensor1D<CpuBackend>) {
        (
            x_of(&[&[1.0], &[2.0], &[3.0], &[4.0]]),
            y_of(&[2.0, 4.0, 6.0, 8.0]),
        )
    }

    // === State Tests ===

    #[test]
    fn test_new_model_is_untrained() {
        let model = LinearRegressor::new();
        assert!(!model.is_fitted());
        assert_eq!(model.weights(), None);
        assert_eq!(model.get_weights(), None);
        assert_eq!(model.intercept(), None);
        assert_eq!(model.coefficients(), None);
    }

    #[test]
    fn test_predict_untrained_fails() {
        let model = LinearRegressor::new();
        let (x, y) = doubling();
        assert!(matches!(model.predict(&x), Err(LinearError::Untrained)));
        assert!(matches!(model.mse(&x, &y), Err(LinearError::Untrained)));
        assert!(matches!(
            model.predict_one(&y_of(&[1.0])),
            Err(LinearError::Untrained)
        ));
    }

    #[test]
    fn test_untrained_error_message() {
        let err = LinearRegressor::new().predict(&doubling().0).unwrap_err();
        assert_eq!(err.to_string(), "Weights are not trained");
    }

    // === Fit Tests ===

    #[test]
    fn test_fit_doubling_normalized() -> Result<()> {
        let (x, y) = doubling();
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 1000, true)?;

        assert!(model.is_fitted());
        let pred = model.predict(&x_of(&[&[5.0]]))?.to_vec();
        assert!((pred[0] - 10.0).abs() < 1e-2);

        let w = model.weights().unwrap();
        assert!(w[0].abs() < 1e-6);
        assert!((w[1] - 2.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_fit_zero_iterations_without_normalization() -> Result<()> {
        let (x, y) = doubling();
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 0, false)?;
        assert_eq!(model.weights(), Some(vec![0.0, 0.0]));
        Ok(())
    }

    #[test]
    fn test_fit_zero_iterations_with_normalization() -> Result<()> {
        let (x, y) = doubling();
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 0, true)?;

        // zero standardized weights map back to intercept = mean(y)
        let w = model.weights().unwrap();
        assert!((w[0] - 5.0).abs() < 1e-12);
        assert_eq!(w[1], 0.0);
        Ok(())
    }

    #[test]
    fn test_fit_without_normalization() -> Result<()> {
        // y = 1 + 2x
        let x = x_of(&[&[0.0], &[1.0], &[2.0]]);
        let y = y_of(&[1.0, 3.0, 5.0]);
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 5000, false)?;

        let w = model.weights().unwrap();
        assert!((w[0] - 1.0).abs() < 1e-6);
        assert!((w[1] - 2.0).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_fit_two_features_different_scales() -> Result<()> {
        // y = 3 + 2 x1 - 0.5 x2
        let rows: [[f64; 2]; 6] = [
            [1.0, 100.0],
            [2.0, 300.0],
            [3.0, 200.0],
            [4.0, 500.0],
            [5.0, 400.0],
            [6.0, 600.0],
        ];
        let x = x_of(&rows.iter().map(|r| &r[..]).collect::<Vec<_>>());
        let y = y_of(
            &rows
                .iter()
                .map(|r| 3.0 + 2.0 * r[0] - 0.5 * r[1])
                .collect::<Vec<_>>(),
        );

        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.5, 2000, true)?;

        let w = model.weights().unwrap();
        assert!((w[0] - 3.0).abs() < 1e-6);
        assert!((w[1] - 2.0).abs() < 1e-6);
        assert!((w[2] + 0.5).abs() < 1e-6);
        assert!(model.mse(&x, &y)? < 1e-10);
        Ok(())
    }

    #[test]
    fn test_more_iterations_do_not_increase_mse() -> Result<()> {
        let x = x_of(&[&[1.0], &[2.0], &[3.0], &[4.0], &[5.0]]);
        let y = y_of(&[1.2, 1.9, 3.2, 3.8, 5.1]);

        let mut short = LinearRegressor::new();
        short.fit(&x, &y, 0.1, 100, true)?;
        let mut long = LinearRegressor::new();
        long.fit(&x, &y, 0.1, 2000, true)?;

        let mse_short = short.mse(&x, &y)?;
        let mse_long = long.mse(&x, &y)?;
        assert!(mse_short >= 0.0);
        assert!(mse_long <= mse_short);
        Ok(())
    }

    #[test]
    fn test_refit_replaces_weights() -> Result<()> {
        let (x, y) = doubling();
        let mut model = LinearRegressor::new();
        model.set_weights(&[9.0, 9.0, 9.0])?;
        model.fit(&x, &y, 0.1, 1000, true)?;
        assert_eq!(model.weights().map(|w| w.len()), Some(2));
        Ok(())
    }

    #[test]
    fn test_fit_constant_column_is_not_finite() -> Result<()> {
        let x = x_of(&[&[1.0], &[1.0], &[1.0]]);
        let y = y_of(&[1.0, 2.0, 3.0]);
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 10, true)?;
        assert!(model.weights().unwrap().iter().any(|w| !w.is_finite()));
        Ok(())
    }

    #[test]
    fn test_save_degenerate_fit_fails() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("weights.json");

        let x = x_of(&[&[1.0], &[1.0], &[1.0]]);
        let y = y_of(&[1.0, 2.0, 3.0]);
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 10, true)?;

        let err = model.save_weights(&path).unwrap_err();
        assert!(matches!(err, LinearError::InvalidWeights(_)));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_fit_rejects_bad_shapes() {
        let mut model = LinearRegressor::new();
        let (x, _) = doubling();

        let err = model.fit(&x, &y_of(&[1.0, 2.0]), 0.1, 10, true).unwrap_err();
        assert!(matches!(
            err,
            LinearError::DimensionMismatch {
                expected: 4,
                got: 2,
                ..
            }
        ));

        let empty = Tensor2D::<CpuBackend>::zeros(0, 1);
        let err = model.fit(&empty, &y_of(&[]), 0.1, 10, true).unwrap_err();
        assert!(matches!(err, LinearError::EmptyData(_)));

        let no_features = Tensor2D::<CpuBackend>::zeros(3, 0);
        let err = model
            .fit(&no_features, &y_of(&[1.0, 2.0, 3.0]), 0.1, 10, false)
            .unwrap_err();
        assert!(matches!(err, LinearError::EmptyData(_)));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_fit_with_options() -> Result<()> {
        let (x, y) = doubling();
        let mut a = LinearRegressor::new();
        a.fit(&x, &y, 0.3, 200, true)?;

        let mut b = LinearRegressor::new();
        b.fit_with(&x, &y, &FitOptions::new().learning_rate(0.3).iterations(200))?;

        assert_eq!(a.weights(), b.weights());
        Ok(())
    }

    #[test]
    fn test_fit_dataset() -> Result<()> {
        let ds = InMemoryDataset::new(
            vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
            vec![2.0, 4.0, 6.0, 8.0],
        )?;
        let mut model = LinearRegressor::new();
        model.fit_dataset(&ds, &FitOptions::new().learning_rate(0.1))?;
        assert!((model.predict_one(&y_of(&[5.0]))? - 10.0).abs() < 1e-2);
        Ok(())
    }

    // === Prediction Tests ===

    #[test]
    fn test_set_weights_then_predict() -> Result<()> {
        let mut model = LinearRegressor::new();
        model.set_weights(&[1.0, 2.0])?;

        assert_eq!(model.predict(&x_of(&[&[3.0]]))?.to_vec(), vec![7.0]);
        assert_eq!(model.predict_one(&y_of(&[3.0]))?, 7.0);
        assert_eq!(model.intercept(), Some(1.0));
        assert_eq!(model.coefficients(), Some(vec![2.0]));
        Ok(())
    }

    #[test]
    fn test_set_weights_empty_is_invalid() {
        let mut model = LinearRegressor::new();
        assert!(matches!(
            model.set_weights(&[]),
            Err(LinearError::InvalidWeights(_))
        ));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_predict_column_mismatch() -> Result<()> {
        let model = LinearRegressor::from_weights(&[0.0, 1.0, 1.0])?;
        let err = model.predict(&x_of(&[&[1.0]])).unwrap_err();
        assert!(matches!(
            err,
            LinearError::DimensionMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));
        assert!(model.predict_one(&y_of(&[1.0, 2.0, 3.0])).is_err());
        Ok(())
    }

    #[test]
    fn test_predict_does_not_mutate_input() -> Result<()> {
        let model = LinearRegressor::from_weights(&[0.5, 1.0, 1.0])?;
        let input = x_of(&[&[1.0, 2.0]]);
        let original = input.to_vec();
        let _ = model.predict(&input)?;
        assert_eq!(input.to_vec(), original);
        Ok(())
    }

    #[test]
    fn test_mse_known_value() -> Result<()> {
        let model = LinearRegressor::from_weights(&[0.0, 1.0])?;
        let x = x_of(&[&[1.0], &[2.0]]);
        // residuals 1 and -2
        let mse = model.mse(&x, &y_of(&[0.0, 4.0]))?;
        assert!((mse - 2.5).abs() < 1e-12);

        let err = model.mse(&x, &y_of(&[1.0])).unwrap_err();
        assert!(matches!(err, LinearError::DimensionMismatch { .. }));
        Ok(())
    }

    // === Display Tests ===

    #[test]
    fn test_display_weights() -> Result<()> {
        let model = LinearRegressor::from_weights(&[1.0, 2.5, -0.126])?;
        assert_eq!(model.to_string(), "[1, 2.5, -0.126]");
        assert_eq!(format!("{model:.2}"), "[1.00, 2.50, -0.13]");
        Ok(())
    }

    #[test]
    fn test_display_untrained() {
        assert_eq!(LinearRegressor::new().to_string(), "None");
        assert_eq!(format!("{:.4}", LinearRegressor::new()), "None");
    }

    // === Serialization Tests ===

    #[test]
    fn test_save_load_weights() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (x, y) = doubling();
        let mut model = LinearRegressor::new();
        model.fit(&x, &y, 0.1, 250, true)?;

        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("weights.json");
        model.save_weights(&path)?;

        let loaded = LinearRegressor::load_weights(&path)?;
        assert_eq!(loaded.weights(), model.weights());
        assert_eq!(loaded.predict(&x)?.to_vec(), model.predict(&x)?.to_vec());
        Ok(())
    }

    #[test]
    fn test_save_untrained_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = LinearRegressor::new().save_weights(tmp.path().join("w.json"));
        assert!(matches!(result, Err(LinearError::Untrained)));
    }

    #[test]
    fn test_load_empty_weight_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("weights.json");
        std::fs::write(&path, "[]")?;
        assert!(matches!(
            LinearRegressor::load_weights(&path),
            Err(LinearError::InvalidWeights(_))
        ));
        Ok(())
    }

    #[test]
    fn test_params_round_trip() -> Result<()> {
        let params = LinearParams::<CpuBackend>::from_weights(&[0.05, 0.1, 0.2])?;
        assert_eq!(params.n_features(), 2);
        assert_eq!(params.to_weights(), vec![0.05, 0.1, 0.2]);
        Ok(())
    }

    #[cfg(feature = "ndarray")]
    #[test]
    fn test_ndarray_backend_matches_cpu() -> Result<()> {
        use crate::backend::NdarrayBackend;

        let rows = vec![vec![1.0, 5.0], vec![2.0, 3.0], vec![3.0, 8.0], vec![4.0, 1.0]];
        let y = vec![3.0, 2.5, 7.0, 1.0];

        let mut cpu = LinearRegression::<CpuBackend>::new();
        cpu.fit(&Tensor2D::from_rows(&rows)?, &Tensor1D::new(y.clone()), 0.1, 300, true)?;

        let mut nd = LinearRegression::<NdarrayBackend>::new();
        nd.fit(&Tensor2D::from_rows(&rows)?, &Tensor1D::new(y), 0.1, 300, true)?;

        for (a, b) in cpu.weights().unwrap().iter().zip(nd.weights().unwrap()) {
            assert!((a - b).abs() < 1e-9);
        }
        Ok(())
    }
}
