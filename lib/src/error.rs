//! Error types shared by the model, the scaler and the weight codec.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinearError>;

/// Error type for fitting, scoring and weight persistence.
#[derive(Debug, Error)]
pub enum LinearError {
    /// `predict`/`mse` called before `fit` or `set_weights`.
    #[error("Weights are not trained")]
    Untrained,

    /// Shape disagreement between the operands of a matrix operation.
    #[error("Dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// Empty data provided where at least one sample and one feature are required.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Rows of a feature matrix with differing lengths.
    #[error("Ragged rows: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A weight sequence that cannot describe a model.
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinearError {
    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize) -> Self {
        LinearError::DimensionMismatch {
            context,
            expected,
            got,
        }
    }
}

impl From<std::convert::Infallible> for LinearError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
