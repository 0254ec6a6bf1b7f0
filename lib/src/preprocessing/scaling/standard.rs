//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the column mean of the training samples and `s` is the
//! population standard deviation (`ddof = 0`).
//!
//! Columns with zero variance are **not** patched: the division yields
//! non-finite values, and a model fitted on them ends up with non-finite
//! weights. Callers should treat non-finite weights as a failed fit.
//!
//! # Example
//! ```
//! use linfit::backend::{CpuBackend, Tensor2D};
//! use linfit::preprocessing::StandardScaler;
//!
//! let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![3.0]]).unwrap();
//! let (scaled, params) = StandardScaler::fit_transform(&x).unwrap();
//! assert_eq!(params.mean, vec![2.0]);
//! assert_eq!(params.std, vec![1.0]);
//! assert_eq!(scaled.to_vec(), vec![-1.0, 1.0]);
//! ```

use crate::backend::{Backend, Scalar, Tensor1D, Tensor2D};
use crate::error::{LinearError, Result};
use std::marker::PhantomData;

/// Delta degrees of freedom used for every standard deviation in this module.
pub const STD_DDOF: usize = 0;

/// Per-column statistics learned by [`StandardScaler`].
///
/// For a target vector both fields have a single entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalingParams {
    /// Mean of each column.
    pub mean: Vec<f64>,
    /// Population standard deviation of each column.
    pub std: Vec<f64>,
}

impl ScalingParams {
    /// Number of columns the parameters describe.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

/// StandardScaler transformer (unfitted).
#[derive(Clone, Debug)]
pub struct StandardScaler<B: Backend> {
    _backend: PhantomData<B>,
}

impl<B: Backend> Default for StandardScaler<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> StandardScaler<B> {
    pub fn new() -> Self {
        Self {
            _backend: PhantomData,
        }
    }

    /// Learns per-column mean and standard deviation.
    ///
    /// # Errors
    /// [`LinearError::EmptyData`] if `data` has no rows or no columns.
    pub fn fit(&self, data: &Tensor2D<B>) -> Result<FittedStandardScaler<B>> {
        let (rows, cols) = data.shape();
        if rows == 0 || cols == 0 {
            return Err(LinearError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        Ok(FittedStandardScaler {
            mean: data.col_mean(),
            std: data.col_std(STD_DDOF),
            n_features: cols,
        })
    }

    /// Standardizes `data` and returns it with the learned [`ScalingParams`].
    pub fn fit_transform(data: &Tensor2D<B>) -> Result<(Tensor2D<B>, ScalingParams)> {
        let fitted = Self::new().fit(data)?;
        let scaled = fitted.transform(data)?;
        Ok((scaled, fitted.params()))
    }

    /// Standardizes a vector, treating it as a single-column matrix.
    pub fn fit_transform_1d(data: &Tensor1D<B>) -> Result<(Tensor1D<B>, ScalingParams)> {
        let (scaled, params) = Self::fit_transform(&Tensor2D::from(data.clone()))?;
        Ok((scaled.column(0), params))
    }

    /// Maps weights learned on standardized data back to the original scale.
    ///
    /// `theta` is `[θ₀, θ₁, …, θₖ]` for a model trained on `x` standardized by
    /// `x_params` and `y` standardized by `y_params` (one column). The result
    /// satisfies, for every `j`:
    ///
    /// ```text
    /// coef_j    = σ_y · θ_j / σ_xj
    /// intercept = σ_y · (θ₀ − Σ_j θ_j · μ_xj / σ_xj) + μ_y
    /// ```
    ///
    /// # Errors
    /// [`LinearError::DimensionMismatch`] if `theta.len() != x_params.n_features() + 1`
    /// or `y_params` does not describe exactly one column.
    pub fn inverse_transform_weights(
        theta: &Tensor1D<B>,
        x_params: &ScalingParams,
        y_params: &ScalingParams,
    ) -> Result<Tensor1D<B>> {
        if theta.len() != x_params.n_features() + 1 {
            return Err(LinearError::mismatch(
                "inverse_transform_weights",
                x_params.n_features() + 1,
                theta.len(),
            ));
        }
        if y_params.n_features() != 1 || y_params.std.len() != 1 {
            return Err(LinearError::mismatch(
                "inverse_transform_weights (target)",
                1,
                y_params.n_features(),
            ));
        }

        let theta = theta.to_vec();
        let y_mean = Scalar::<B>::new(y_params.mean[0]);
        let y_std = Scalar::<B>::new(y_params.std[0]);

        let theta_0 = Scalar::<B>::new(theta[0]);
        let theta_j = Tensor1D::<B>::new(theta[1..].to_vec());
        let x_mean = Tensor1D::<B>::new(x_params.mean.clone());
        let x_std = Tensor1D::<B>::new(x_params.std.clone());

        let theta_div_std = theta_j.div(&x_std);
        let intercept = y_std * (theta_0 - theta_div_std.dot(&x_mean)) + y_mean;
        let coefs = theta_div_std.scale(&y_std);

        let mut weights = Vec::with_capacity(theta.len());
        weights.push(intercept.to_f64());
        weights.extend(coefs.to_vec());
        Ok(Tensor1D::new(weights))
    }
}

/// Fitted StandardScaler.
#[derive(Clone)]
pub struct FittedStandardScaler<B: Backend> {
    mean: Tensor1D<B>,
    std: Tensor1D<B>,
    n_features: usize,
}

impl<B: Backend> FittedStandardScaler<B> {
    /// Get the mean values for each feature.
    pub fn mean(&self) -> &Tensor1D<B> {
        &self.mean
    }

    /// Get the standard deviation values for each feature.
    pub fn std(&self) -> &Tensor1D<B> {
        &self.std
    }

    pub fn n_features_in(&self) -> usize {
        self.n_features
    }

    /// Host copy of the learned statistics.
    pub fn params(&self) -> ScalingParams {
        ScalingParams {
            mean: self.mean.to_vec(),
            std: self.std.to_vec(),
        }
    }

    /// Applies `(x - mean) / std` column-wise.
    ///
    /// # Errors
    /// [`LinearError::DimensionMismatch`] if the column count differs from fit time.
    pub fn transform(&self, data: &Tensor2D<B>) -> Result<Tensor2D<B>> {
        let cols = data.n_cols();
        if cols != self.n_features {
            return Err(LinearError::mismatch(
                "StandardScaler::transform",
                self.n_features,
                cols,
            ));
        }
        Ok(data.sub_row(&self.mean).div_row(&self.std))
    }
}
