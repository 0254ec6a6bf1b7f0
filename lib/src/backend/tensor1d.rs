use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native 1D tensor representation (`B::Tensor1D`) while carrying phantom
/// type information about its originating backend. This prevents accidental mixing of tensors
/// from different backends at compile time.
///
/// # Example
/// ```
/// use linfit::backend::CpuBackend;
/// use linfit::backend::{Tensor1D, Scalar};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.len(), 3);
///
/// let y = x.scale(&Scalar::<CpuBackend>::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a new 1D tensor from a vector of `f64` values.
    pub fn new(data: Vec<f64>) -> Self {
        Self::from_raw(B::from_vec_1d(data))
    }

    pub(crate) fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Creates a 1D tensor filled with zeros of specified length.
    ///
    /// # Example
    /// ```
    /// use linfit::backend::{CpuBackend, Tensor1D};
    ///
    /// let zeros: Tensor1D<CpuBackend> = Tensor1D::zeros(4);
    /// assert_eq!(zeros.to_vec(), vec![0.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn zeros(len: usize) -> Self {
        Self::from_raw(B::zeros_1d(len))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element-wise `self + other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    pub fn add(&self, other: &Self) -> Self {
        Self::from_raw(B::add_1d(&self.data, &other.data))
    }

    /// Element-wise `self - other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    pub fn sub(&self, other: &Self) -> Self {
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    /// Element-wise `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_raw(B::mul_1d(&self.data, &other.data))
    }

    /// Element-wise `self / other`.
    pub fn div(&self, other: &Self) -> Self {
        Self::from_raw(B::div_1d(&self.data, &other.data))
    }

    /// Multiplies every element by `s`.
    pub fn scale(&self, s: &Scalar<B>) -> Self {
        Self::from_raw(B::mul_scalar_1d(&self.data, &s.data))
    }

    /// Adds `s` to every element.
    pub fn add_scalar(&self, s: &Scalar<B>) -> Self {
        Self::from_raw(B::add_scalar_1d(&self.data, &s.data))
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Arithmetic mean of all elements. NaN for an empty tensor.
    pub fn mean(&self) -> Scalar<B> {
        Scalar {
            data: B::mean_all_1d(&self.data),
            backend: PhantomData,
        }
    }

    /// Dot product `Σᵢ aᵢ * bᵢ`.
    ///
    /// # Example
    /// ```
    /// use linfit::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).to_f64(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Scalar<B> {
        Scalar {
            data: B::sum_all_1d(&B::mul_1d(&self.data, &other.data)),
            backend: PhantomData,
        }
    }

    /// Converts the tensor to a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }
}

impl<B: Backend> From<Vec<f64>> for Tensor1D<B> {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor1D").field(&self.to_vec()).finish()
    }
}
