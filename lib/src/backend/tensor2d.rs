use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use crate::error::{LinearError, Result};
use std::marker::PhantomData;

/// Backend-typed 2D tensor (row-major semantics: one row per sample).
#[derive(Clone)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Creates a tensor from row-major `data`.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self::from_raw(B::from_vec_2d(data, rows, cols))
    }

    pub(crate) fn from_raw(data: B::Tensor2D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Builds a matrix from a slice of rows.
    ///
    /// Every row must have the length of the first one. An empty slice gives a
    /// `(0, 0)` matrix.
    ///
    /// # Example
    /// ```
    /// use linfit::backend::{CpuBackend, Tensor2D};
    ///
    /// let x = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(x.shape(), (2, 2));
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(LinearError::RaggedRows {
                row,
                expected: n_cols,
                got: bad.len(),
            });
        }
        let data = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Ok(Self::new(data, rows.len(), n_cols))
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_raw(B::zeros_2d(rows, cols))
    }

    /// A `(rows, cols)` matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::new(vec![1.0; rows * cols], rows, cols)
    }

    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    pub fn n_rows(&self) -> usize {
        self.shape().0
    }

    pub fn n_cols(&self) -> usize {
        self.shape().1
    }

    /// Matrix-vector product `self @ other`.
    pub fn dot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec(&self.data, &other.data))
    }

    /// Transposed product `selfᵀ @ other`.
    pub fn tdot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D::from_raw(B::matvec_transposed(&self.data, &other.data))
    }

    /// Per-column arithmetic mean.
    pub fn col_mean(&self) -> Tensor1D<B> {
        Tensor1D::from_raw(B::col_mean_2d(&self.data))
    }

    /// Per-column standard deviation with `ddof` delta degrees of freedom.
    pub fn col_std(&self, ddof: usize) -> Tensor1D<B> {
        Tensor1D::from_raw(B::col_std_2d(&self.data, ddof))
    }

    /// Subtracts `v[j]` from every element of column `j`.
    pub fn sub_row(&self, v: &Tensor1D<B>) -> Self {
        Self::from_raw(B::broadcast_sub_1d_to_2d_rows(&self.data, &v.data))
    }

    /// Divides every element of column `j` by `v[j]`.
    pub fn div_row(&self, v: &Tensor1D<B>) -> Self {
        Self::from_raw(B::broadcast_div_1d_to_2d_rows(&self.data, &v.data))
    }

    /// Copy of column `j`.
    ///
    /// # Panics
    /// If `j` is out of bounds.
    pub fn column(&self, j: usize) -> Tensor1D<B> {
        Tensor1D::from_raw(B::column_2d(&self.data, j))
    }

    /// Returns `[ones | self]`, the design matrix with an intercept column in front.
    pub fn with_intercept_column(&self) -> Result<Self> {
        let ones = Self::ones(self.n_rows(), 1);
        B::hcat_2d(&[ones.data, self.data.clone()]).map(Self::from_raw)
    }

    /// Row-major host copy.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_2d(&self.data)
    }

    /// Host copy as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        let (rows, cols) = self.shape();
        if cols == 0 {
            return vec![Vec::new(); rows];
        }
        self.to_vec().chunks(cols).map(<[f64]>::to_vec).collect()
    }
}

impl<B: Backend> From<Tensor1D<B>> for Tensor2D<B> {
    /// A vector becomes a single-column matrix.
    fn from(t: Tensor1D<B>) -> Self {
        let n = t.len();
        Self::new(t.to_vec(), n, 1)
    }
}

impl<B: Backend> std::fmt::Debug for Tensor2D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor2D")
            .field("shape", &self.shape())
            .field("rows", &self.to_rows())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    #[test]
    fn test_tensor2d_matvec_ops() {
        // A = [[1.0, 2.0],
        //      [3.0, 4.0]]
        let a = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let x = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);

        assert_eq!(a.dot(&x).to_vec(), vec![1.0, 3.0]);
        assert_eq!(a.tdot(&x).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_tensor2d_shape() {
        let t = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0], 3, 1);
        assert_eq!(t.shape(), (3, 1));

        let t2 = Tensor2D::<CpuBackend>::zeros(0, 5);
        assert_eq!(t2.shape(), (0, 5));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = Tensor2D::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(LinearError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_from_rows_round_trip() -> Result<()> {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        let t = Tensor2D::<CpuBackend>::from_rows(&rows)?;
        assert_eq!(t.to_rows(), rows);
        assert_eq!(t.column(0).to_vec(), vec![1.0, 3.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_with_intercept_column() -> Result<()> {
        let t = Tensor2D::<CpuBackend>::from_rows(&[vec![2.0], vec![3.0]])?;
        let design = t.with_intercept_column()?;
        assert_eq!(design.shape(), (2, 2));
        assert_eq!(design.to_vec(), vec![1.0, 2.0, 1.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_vector_becomes_single_column() {
        let y = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
        let m: Tensor2D<CpuBackend> = y.into();
        assert_eq!(m.shape(), (3, 1));
    }
}
