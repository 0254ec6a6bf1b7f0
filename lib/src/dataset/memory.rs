use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{LinearError, Result};
use std::ops::Range;

/// Rows of features and their targets held in host memory.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

impl InMemoryDataset {
    /// Validates and wraps `x` (one row per sample) and `y` (one target per row).
    ///
    /// # Errors
    /// - [`LinearError::DimensionMismatch`] if `x` and `y` have different lengths.
    /// - [`LinearError::EmptyData`] if there are no samples or no features.
    /// - [`LinearError::RaggedRows`] if rows differ in length.
    pub fn new(x: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(LinearError::mismatch("dataset (targets)", x.len(), y.len()));
        }
        let n_features = match x.first() {
            Some(row) => row.len(),
            None => return Err(LinearError::EmptyData("dataset has no samples".to_string())),
        };
        if n_features == 0 {
            return Err(LinearError::EmptyData("dataset has no features".to_string()));
        }
        if let Some((row, bad)) = x.iter().enumerate().find(|(_, r)| r.len() != n_features) {
            return Err(LinearError::RaggedRows {
                row,
                expected: n_features,
                got: bad.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    pub fn n_features(&self) -> usize {
        self.x.first().map_or(0, Vec::len)
    }

    /// Feature matrix of shape `(n_samples, n_features)`.
    pub fn features<B: Backend>(&self) -> Tensor2D<B> {
        let data = self.x.iter().flat_map(|row| row.iter()).copied().collect();
        Tensor2D::new(data, self.n_samples(), self.n_features())
    }

    pub fn targets<B: Backend>(&self) -> Tensor1D<B> {
        Tensor1D::new(self.y.clone())
    }

    /// Host copy of feature column `j`, or `None` if out of range.
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        (j < self.n_features()).then(|| self.x.iter().map(|row| row[j]).collect())
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.x
    }

    pub fn target_values(&self) -> &[f64] {
        &self.y
    }
}

impl Dataset for InMemoryDataset {
    type Error = std::convert::Infallible;

    fn len(&self) -> usize {
        self.x.len()
    }

    fn get_batch<B: Backend>(
        &self,
        range: Range<usize>,
    ) -> std::result::Result<(Tensor2D<B>, Tensor1D<B>), Self::Error> {
        let batch_x = &self.x[range.clone()];
        let batch_y = &self.y[range];

        let data = batch_x.iter().flat_map(|row| row.iter()).copied().collect();
        let x_tensor = Tensor2D::<B>::new(data, batch_x.len(), self.n_features());
        let y_tensor = Tensor1D::<B>::new(batch_y.to_vec());

        Ok((x_tensor, y_tensor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    fn sample() -> InMemoryDataset {
        InMemoryDataset::new(
            vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]],
            vec![5.0, 6.0, 7.0],
        )
        .unwrap()
    }

    #[test]
    fn test_dataset_shape() {
        let ds = sample();
        assert_eq!(ds.n_samples(), 3);
        assert_eq!(ds.n_features(), 2);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_dataset_tensors() {
        let ds = sample();
        let x = ds.features::<CpuBackend>();
        assert_eq!(x.shape(), (3, 2));
        assert_eq!(x.to_vec(), vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0]);
        assert_eq!(ds.targets::<CpuBackend>().to_vec(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_dataset_column() {
        let ds = sample();
        assert_eq!(ds.column(1), Some(vec![10.0, 20.0, 30.0]));
        assert_eq!(ds.column(2), None);
    }

    #[test]
    fn test_get_batch_range() {
        let (x, y) = sample().get_batch::<CpuBackend>(1..3).unwrap();
        assert_eq!(x.shape(), (2, 2));
        assert_eq!(y.to_vec(), vec![6.0, 7.0]);
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let err = InMemoryDataset::new(vec![vec![1.0]], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LinearError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_dataset_empty() {
        let err = InMemoryDataset::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, LinearError::EmptyData(_)));

        let err = InMemoryDataset::new(vec![vec![]], vec![1.0]).unwrap_err();
        assert!(matches!(err, LinearError::EmptyData(_)));
    }

    #[test]
    fn test_dataset_ragged_rows() {
        let err = InMemoryDataset::new(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            LinearError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }
}
