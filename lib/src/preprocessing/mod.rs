//! Data preprocessing for the regression core.
//!
//! Only standardization is needed: the model fits in standardized space and
//! maps the learned weights back with
//! [`StandardScaler::inverse_transform_weights`].

pub mod scaling;

pub use scaling::{FittedStandardScaler, ScalingParams, StandardScaler};
