//! Dataset abstractions for regression workloads.
//!
//! A [`Dataset`] hands out `(X, y)` pairs where `X` is a feature matrix of shape
//! `(n_samples, n_features)` and `y` the target vector of shape `(n_samples,)`.
//! Gradient descent here is full-batch, so models consume [`Dataset::full_batch`].
//!
//! # Example
//!
//! ```rust
//! use linfit::dataset::{Dataset, InMemoryDataset};
//! use linfit::backend::CpuBackend;
//!
//! let x = vec![vec![1.0], vec![2.0]];
//! let y = vec![2.0, 4.0];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let (features, targets) = dataset.full_batch::<CpuBackend>().unwrap();
//! assert_eq!(features.shape(), (2, 1));
//! assert_eq!(targets.to_vec(), vec![2.0, 4.0]);
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};
use std::{fmt::Debug, ops::Range};

pub mod memory;
pub use self::memory::InMemoryDataset;

/// Source of `(X, y)` samples.
pub trait Dataset {
    /// Error type returned when accessing data.
    type Error: Debug + 'static;

    /// Total number of samples.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads the samples in `range` as backend tensors.
    fn get_batch<B: Backend>(
        &self,
        range: Range<usize>,
    ) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error>;

    /// Loads every sample at once.
    fn full_batch<B: Backend>(&self) -> Result<(Tensor2D<B>, Tensor1D<B>), Self::Error> {
        self.get_batch(0..self.len())
    }
}
