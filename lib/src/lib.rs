//! # linfit
//!
//! Single-output linear regression fitted by batch gradient descent, with
//! pluggable numeric backends.
//!
//! ## Core Design Principles
//!
//! - **Standardized descent**: features and target are scaled to zero mean and
//!   unit variance before descending, then the weights are mapped back to the
//!   original units, so a single learning rate works across features of very
//!   different magnitudes.
//! - **Weights are the whole model**: a fitted model is its intercept followed by
//!   one coefficient per feature. That flat vector is what gets persisted.
//! - **Backend Agnosticism**: the `Backend` trait lets the same model run over
//!   plain vectors or `ndarray` without changing model code.
//!
//! ## Quick Start
//!
//! ```rust
//! use linfit::backend::{CpuBackend, Tensor1D, Tensor2D};
//! use linfit::LinearRegression;
//!
//! let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap();
//! let y = Tensor1D::<CpuBackend>::new(vec![3.0, 5.0, 7.0]);
//!
//! let mut model = LinearRegression::<CpuBackend>::new();
//! model.fit(&x, &y, 0.1, 1000, true).unwrap();
//!
//! println!("weights {model:.4}");
//! assert!(model.mse(&x, &y).unwrap() < 1e-8);
//! ```
//!
//! ## Module Structure
//!
//! - `backend` — Tensor abstractions and computation primitives (`Tensor1D`, `Tensor2D`)
//! - `preprocessing` — `StandardScaler` and the inverse weight transform
//! - `optimizer` — full-batch gradient descent
//! - `model` — `LinearRegression` and its `FitOptions`
//! - `metrics` — mean squared error and its root
//! - `dataset` — in-memory `(X, y)` storage
//! - `serialization` — JSON weight files

/// Backend abstraction and tensor wrappers.
pub mod backend;

/// Crate-wide error type.
pub mod error;

/// In-memory datasets.
pub mod dataset;

/// Regression error metrics.
pub mod metrics;

/// Linear regression model and fit configuration.
pub mod model;

/// Gradient descent.
pub mod optimizer;

/// Feature and target standardization.
pub mod preprocessing;

/// Weight persistence.
pub mod serialization;

/// Re-export of core backend types for convenient usage.
pub use backend::{Backend, CpuBackend, ScalarOps, Tensor1D, Tensor2D};
pub use dataset::InMemoryDataset;
pub use error::{LinearError, Result};
pub use model::{FitOptions, LinearRegression, LinearRegressor};
pub use serialization::WeightVector;
