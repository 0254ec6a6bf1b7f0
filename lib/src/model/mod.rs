//! Regression models.

pub mod linear;
pub mod options;

pub use linear::{LinearParams, LinearRegression, LinearRegressor};
pub use options::FitOptions;
