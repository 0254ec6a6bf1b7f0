use super::Backend;
use crate::error::{LinearError, Result};

/// Pure-Rust CPU backend over `Vec<f64>`.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major matrix: `(data, rows, cols)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        Self(data, rows, cols)
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.0[row * self.2 + col]
    }
}

impl Backend for CpuBackend {
    type Scalar = f64;
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    // --- Constructors ---
    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(vec![0.; rows * cols], rows, cols)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data, rows, cols)
    }

    // --- Element-wise ops ---
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a + b).collect()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a * b).collect()
    }

    fn div_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a / b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    // --- Reductions ---
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>()
    }

    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>() / t.len() as f64
    }

    // --- Access ---
    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn to_vec_2d(t: &Self::Tensor2D) -> Vec<f64> {
        t.0.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    fn column_2d(t: &Self::Tensor2D, col: usize) -> Self::Tensor1D {
        assert!(col < t.2, "Column {} out of bounds for {} columns", col, t.2);
        (0..t.1).map(|row| t.at(row, col)).collect()
    }

    // --- Linear algebra ---
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.2, x.len(), "Matrix columns must match vector length");
        if a.2 == 0 {
            return vec![0.; a.1];
        }
        a.0.chunks(a.2)
            .map(|row| row.iter().zip(x.iter()).map(|(a, b)| a * b).sum())
            .collect()
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.1, x.len(), "Matrix rows must match vector length");
        let mut out = vec![0.; a.2];
        for (row, &xi) in x.iter().enumerate() {
            for (col, acc) in out.iter_mut().enumerate() {
                *acc += a.at(row, col) * xi;
            }
        }
        out
    }

    // --- Column-wise ---
    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let (rows, cols) = (t.1, t.2);
        let mut sums = vec![0.; cols];
        for row in 0..rows {
            for (col, acc) in sums.iter_mut().enumerate() {
                *acc += t.at(row, col);
            }
        }
        sums.into_iter().map(|s| s / rows as f64).collect()
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        let (rows, cols) = (t.1, t.2);
        let means = Self::col_mean_2d(t);
        let mut var_sums = vec![0.; cols];
        for row in 0..rows {
            for (col, acc) in var_sums.iter_mut().enumerate() {
                let diff = t.at(row, col) - means[col];
                *acc += diff * diff;
            }
        }
        let divisor = rows.saturating_sub(ddof) as f64;
        var_sums.into_iter().map(|v| (v / divisor).sqrt()).collect()
    }

    // --- Broadcasting ---
    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        assert_eq!(t.2, v.len(), "Vector length must match column count");
        let data = t
            .0
            .iter()
            .enumerate()
            .map(|(i, x)| x - v[i % t.2])
            .collect();
        CpuTensor2D::new(data, t.1, t.2)
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        assert_eq!(t.2, v.len(), "Vector length must match column count");
        let data = t
            .0
            .iter()
            .enumerate()
            .map(|(i, x)| x / v[i % t.2])
            .collect();
        CpuTensor2D::new(data, t.1, t.2)
    }

    fn hcat_2d(tensors: &[Self::Tensor2D]) -> Result<Self::Tensor2D> {
        let first = tensors.first().ok_or_else(|| {
            LinearError::EmptyData("cannot concatenate an empty list of tensors".to_string())
        })?;
        let rows = first.1;
        for t in tensors {
            if t.1 != rows {
                return Err(LinearError::mismatch("hcat_2d", rows, t.1));
            }
        }

        let total_cols: usize = tensors.iter().map(|t| t.2).sum();
        let mut data = Vec::with_capacity(rows * total_cols);
        for row in 0..rows {
            for t in tensors {
                data.extend_from_slice(&t.0[row * t.2..(row + 1) * t.2]);
            }
        }
        Ok(CpuTensor2D::new(data, rows, total_cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(data: &[f64], rows: usize, cols: usize) -> CpuTensor2D {
        CpuTensor2D::new(data.to_vec(), rows, cols)
    }

    #[test]
    #[should_panic(expected = "Inconsistent shape")]
    fn test_new_rejects_inconsistent_shape() {
        CpuTensor2D::new(vec![1.0, 2.0, 3.0], 2, 2);
    }

    #[test]
    fn test_matvec() {
        // [[1, 2], [3, 4]] @ [1, 1] = [3, 7]
        let a = m(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_eq!(CpuBackend::matvec(&a, &vec![1.0, 1.0]), vec![3.0, 7.0]);
    }

    #[test]
    fn test_matvec_transposed() {
        // [[1, 2], [3, 4]]^T @ [1, 0] = [1, 2]
        let a = m(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_eq!(
            CpuBackend::matvec_transposed(&a, &vec![1.0, 0.0]),
            vec![1.0, 2.0]
        );
    }

    #[test]
    #[should_panic(expected = "Matrix columns must match vector length")]
    fn test_matvec_shape_mismatch_panics() {
        let a = m(&[1.0, 2.0], 1, 2);
        CpuBackend::matvec(&a, &vec![1.0]);
    }

    #[test]
    fn test_col_mean_and_std() {
        // [[0, 1], [0, 1], [1, 3]]
        let t = m(&[0.0, 1.0, 0.0, 1.0, 1.0, 3.0], 3, 2);
        let mean = CpuBackend::col_mean_2d(&t);
        assert!((mean[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((mean[1] - 5.0 / 3.0).abs() < 1e-12);

        let pop = CpuBackend::col_std_2d(&t, 0);
        assert!((pop[0] - (2.0f64 / 9.0).sqrt()).abs() < 1e-12);

        let sample = CpuBackend::col_std_2d(&t, 1);
        assert!((sample[0] - (1.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_broadcast_ops() {
        let t = m(&[1.0, 10.0, 3.0, 30.0], 2, 2);
        let centered = CpuBackend::broadcast_sub_1d_to_2d_rows(&t, &vec![1.0, 10.0]);
        assert_eq!(centered.0, vec![0.0, 0.0, 2.0, 20.0]);

        let scaled = CpuBackend::broadcast_div_1d_to_2d_rows(&centered, &vec![2.0, 10.0]);
        assert_eq!(scaled.0, vec![0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_broadcast_div_by_zero_is_non_finite() {
        let t = m(&[1.0, 0.0], 2, 1);
        let out = CpuBackend::broadcast_div_1d_to_2d_rows(&t, &vec![0.0]);
        assert!(out.0[0].is_infinite());
        assert!(out.0[1].is_nan());
    }

    #[test]
    fn test_hcat_2d() -> Result<()> {
        let ones = m(&[1.0, 1.0], 2, 1);
        let x = m(&[2.0, 3.0, 4.0, 5.0], 2, 2);
        let out = CpuBackend::hcat_2d(&[ones, x])?;
        assert_eq!(CpuBackend::shape(&out), (2, 3));
        assert_eq!(out.0, vec![1.0, 2.0, 3.0, 1.0, 4.0, 5.0]);
        Ok(())
    }

    #[test]
    fn test_hcat_2d_row_mismatch() {
        let a = m(&[1.0, 1.0], 2, 1);
        let b = m(&[1.0], 1, 1);
        assert!(matches!(
            CpuBackend::hcat_2d(&[a, b]),
            Err(LinearError::DimensionMismatch {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_hcat_2d_empty() {
        assert!(matches!(
            CpuBackend::hcat_2d(&[]),
            Err(LinearError::EmptyData(_))
        ));
    }

    #[test]
    fn test_column_2d() {
        let t = m(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        assert_eq!(CpuBackend::column_2d(&t, 1), vec![2.0, 4.0, 6.0]);
    }
}
