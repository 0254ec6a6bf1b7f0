//! Scaling transformers for feature normalization.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`StandardScaler`] | Z-score normalization (mean=0, std=1), with the weight back-transform used by the regressor |

pub mod standard;

pub use standard::{FittedStandardScaler, ScalingParams, StandardScaler, STD_DDOF};
