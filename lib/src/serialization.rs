//! Serialization of fitted model parameters.
//!
//! Weights are stored as a single JSON array: the intercept first, then one
//! coefficient per feature in training column order. Nothing else is persisted,
//! so a weight file is only meaningful together with the column order it was
//! trained on.

use crate::error::{LinearError, Result};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain numerical data (e.g., `Vec<f64>`, scalars),
/// not backend-specific tensors or handles.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> std::result::Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    type Error = serde_json::Error;

    fn to_bytes(&self) -> std::result::Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(self)
    }

    fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Flat weight vector `[intercept, coef_1, …, coef_n]`.
///
/// # Example
/// ```
/// use linfit::serialization::WeightVector;
///
/// let w = WeightVector::from_json("[1.5, -2.0]").unwrap();
/// assert_eq!(w.intercept(), Some(1.5));
/// assert_eq!(w.coefficients(), &[-2.0]);
/// assert_eq!(w.to_json().unwrap(), "[1.5,-2.0]");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(pub Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Everything after the intercept. Empty if there is no intercept either.
    pub fn coefficients(&self) -> &[f64] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON array of numbers.
    ///
    /// # Errors
    /// [`LinearError::Serialization`] if `s` is not a JSON array of numbers.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Writes the weights to `path`, replacing any existing file.
    ///
    /// # Errors
    /// [`LinearError::InvalidWeights`] if any weight is NaN or infinite. JSON has
    /// no encoding for those, so nothing is written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(i) = self.0.iter().position(|w| !w.is_finite()) {
            return Err(LinearError::InvalidWeights(format!(
                "weight {i} is {}, refusing to save",
                self.0[i]
            )));
        }
        fs::write(path, self.to_bytes()?).map_err(LinearError::from)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(&bytes)?)
    }
}

impl From<Vec<f64>> for WeightVector {
    fn from(weights: Vec<f64>) -> Self {
        Self(weights)
    }
}
