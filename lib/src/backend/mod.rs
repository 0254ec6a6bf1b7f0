//! # Backend Abstraction
//!
//! This module provides a trait-based abstraction over array storage, so the
//! regression core is written once and runs over different tensor libraries.
//!
//! ## Design
//!
//! - **Minimal trait surface**: only the operations the scaler, optimizer and
//!   model need are exposed.
//! - **Zero-cost generics**: the backend is selected at compile time via a type
//!   parameter, no dynamic dispatch.
//! - **Type-safe tensor handling**: [`Tensor1D`], [`Tensor2D`] and [`Scalar`]
//!   carry their backend in a `PhantomData`, so values from different backends
//!   cannot be mixed.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Storage                              |
//! |------------------|-----------|--------------------------------------|
//! | `CpuBackend`     | always    | `Vec<f64>`, row-major `CpuTensor2D`  |
//! | `NdarrayBackend` | `ndarray` | `ndarray::Array1` / `Array2`         |
//!
//! ## Example
//!
//! ```rust
//! use linfit::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0]);
//! let w: Tensor2D<CpuBackend> = Tensor2D::new(vec![0.5, 0.5, 0.5, 0.5], 2, 2);
//! let y = w.dot(&x);
//! assert_eq!(y.to_vec(), vec![1.5, 1.5]);
//! ```

use crate::error::Result;

pub mod cpu;
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate for ecosystem interoperability.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

/// Abstraction over tensor storage and the numeric kernels of the regression core.
///
/// # Safety Guarantees
///
/// - Shape-sensitive kernels (`matvec`, `matvec_transposed`, element-wise ops)
///   panic on mismatch; callers validate shapes first and report
///   [`LinearError::DimensionMismatch`](crate::LinearError::DimensionMismatch).
/// - Tensor types are `Clone + Send + Sync`.
pub trait Backend: Clone + Copy + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Creates a 2D tensor filled with zeros of given dimensions.
    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations (1D) ---

    /// Element-wise addition of two 1D tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two 1D tensors.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two 1D tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise division of two 1D tensors. Division by zero follows IEEE 754.
    fn div_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor.
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    // --- Reductions ---

    /// Computes the sum of all elements in a 1D tensor.
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    /// Computes the arithmetic mean of all elements in a 1D tensor.
    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    // --- Scalars and data access ---

    /// Creates a backend-specific scalar from an f64 value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    /// Converts a 1D tensor to a Vec of f64 values.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Converts a 2D tensor to row-major f64 values.
    fn to_vec_2d(t: &Self::Tensor2D) -> Vec<f64>;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    /// Copies column `col` of a 2D tensor.
    ///
    /// # Panics
    /// If `col` is out of bounds.
    fn column_2d(t: &Self::Tensor2D, col: usize) -> Self::Tensor1D;

    // --- Linear algebra ---

    /// Computes `y = A * x` where `A` is (m × n) and `x` is (n,).
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Computes `y = A^T * x` where `A` is (m × n) and `x` is (m,).
    ///
    /// # Panics
    /// If `A.rows() != x.len()`.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    // --- Column-wise operations (for preprocessing) ---

    /// Computes the mean of each column (axis 0).
    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// Computes the standard deviation of each column.
    ///
    /// `ddof` is the delta degrees of freedom: 0 for population std, 1 for sample std.
    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D;

    // --- Broadcasting operations ---

    /// `Result[i, j] = t[i, j] - v[j]`
    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// `Result[i, j] = t[i, j] / v[j]`
    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    // --- Column manipulation ---

    /// Horizontally concatenate 2D tensors (stack columns side by side).
    ///
    /// All input tensors must have the same number of rows, otherwise
    /// [`LinearError::DimensionMismatch`](crate::LinearError::DimensionMismatch)
    /// is returned. An empty slice yields
    /// [`LinearError::EmptyData`](crate::LinearError::EmptyData).
    fn hcat_2d(tensors: &[Self::Tensor2D]) -> Result<Self::Tensor2D>;
}
