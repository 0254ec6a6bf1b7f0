use super::Backend;
use crate::error::{LinearError, Result};
use ndarray::{concatenate, Array1, Array2, Axis};

/// Tensor backend implemented on top of the `ndarray` crate.
///
/// # Type mappings
/// - `Scalar`: `f64`
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`] wrapper around `ndarray::Array2<f64>`
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
#[derive(Debug, Clone, PartialEq)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl Backend for NdarrayBackend {
    type Scalar = f64;
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(Array2::zeros((rows, cols)))
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        match Array2::from_shape_vec((rows, cols), data) {
            Ok(array) => NdarrayTensor2D(array),
            Err(err) => panic!("Inconsistent shape {rows}x{cols}: {err}"),
        }
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a * b
    }

    fn div_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a / b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t * *s
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t + *s
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.sum()
    }

    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.sum() / t.len() as f64
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn to_vec_2d(t: &Self::Tensor2D) -> Vec<f64> {
        t.0.iter().copied().collect()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn column_2d(t: &Self::Tensor2D, col: usize) -> Self::Tensor1D {
        t.0.column(col).to_owned()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.0.ncols(), x.len(), "Matrix columns must match vector length");
        a.0.dot(x)
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.0.nrows(), x.len(), "Matrix rows must match vector length");
        a.0.t().dot(x)
    }

    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let n = t.0.nrows() as f64;
        t.0.sum_axis(Axis(0)) / n
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        // `Array::std_axis` panics when ddof >= n, the CPU backend yields NaN instead
        let means = Self::col_mean_2d(t);
        let centered = &t.0 - &means;
        let divisor = t.0.nrows().saturating_sub(ddof) as f64;
        (&centered * &centered)
            .sum_axis(Axis(0))
            .mapv(|v| (v / divisor).sqrt())
    }

    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        assert_eq!(t.0.ncols(), v.len(), "Vector length must match column count");
        NdarrayTensor2D(&t.0 - v)
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        assert_eq!(t.0.ncols(), v.len(), "Vector length must match column count");
        NdarrayTensor2D(&t.0 / v)
    }

    fn hcat_2d(tensors: &[Self::Tensor2D]) -> Result<Self::Tensor2D> {
        let first = tensors.first().ok_or_else(|| {
            LinearError::EmptyData("cannot concatenate an empty list of tensors".to_string())
        })?;
        let rows = first.0.nrows();
        if let Some(bad) = tensors.iter().find(|t| t.0.nrows() != rows) {
            return Err(LinearError::mismatch("hcat_2d", rows, bad.0.nrows()));
        }

        let views: Vec<_> = tensors.iter().map(|t| t.0.view()).collect();
        let joined = concatenate(Axis(1), &views)
            .map_err(|_| LinearError::mismatch("hcat_2d", rows, rows))?;
        Ok(NdarrayTensor2D(joined))
    }
}
