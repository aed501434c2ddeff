//! Owned n-dimensional array over a flat strided buffer.

use crate::access::{ArrayAccess, ArrayAccessMut};
use crate::error::ArrayError;
use crate::scalar::Scalar;
use crate::slice::parse_slices;
use crate::strides::{cartesian_to_linear, compute_strides};
use crate::view::{ArrayView, ArrayViewMut};
use num_traits::{Float, One, Zero};

/// An n-dimensional array owning a flat buffer.
///
/// Element `[i0, i1, ...]` lives at offset `Σ ik * strides[k]`. Fresh arrays
/// are row-major; [`NdArray::transpose_inplace`] reverses shape and strides
/// without moving data, so the buffer order of a transposed array differs
/// from its logical order.
///
/// Equality is logical: two arrays are equal when their shapes match and
/// every coordinate holds the same value, whatever their strides.
#[derive(Debug, Clone)]
pub struct NdArray<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

fn validate_shape(shape: &[usize]) -> Result<(), ArrayError> {
    if shape.is_empty() || shape.contains(&0) {
        return Err(ArrayError::InvalidShape {
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

impl<T: Scalar> NdArray<T> {
    /// Create an array from row-major data and a shape.
    ///
    /// # Errors
    ///
    /// - `InvalidShape` if `shape` is empty or has a zero dimension
    /// - `ShapeMismatch` if `data.len()` differs from the product of `shape`
    ///
    /// # Examples
    ///
    /// ```
    /// use mdarray::prelude::*;
    ///
    /// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert_eq!(a.get(&[0, 1]).unwrap(), 2.0);
    /// assert_eq!(a.get(&[1, 0]).unwrap(), 4.0);
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, ArrayError> {
        validate_shape(shape)?;
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(ArrayError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_raw_parts(data, shape.to_vec()))
    }

    /// Create a 1-D array holding `data`.
    ///
    /// # Errors
    ///
    /// `InvalidShape` if `data` is empty.
    pub fn from_vec_1d(data: Vec<T>) -> Result<Self, ArrayError> {
        let len = data.len();
        Self::from_vec(data, &[len])
    }

    /// Row-major array from parts whose sizes already agree.
    pub(crate) fn from_raw_parts(data: Vec<T>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        let strides = compute_strides(&shape);
        Self {
            data,
            shape,
            strides,
        }
    }

    /// Create an array with every element set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Result<Self, ArrayError> {
        validate_shape(shape)?;
        let len = shape.iter().product();
        Ok(Self::from_raw_parts(vec![value; len], shape.to_vec()))
    }

    /// Create a zero-initialized array.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdarray::prelude::*;
    ///
    /// let a: NdArray<f64> = NdArray::zeros(&[2, 3, 4]).unwrap();
    /// assert_eq!(a.shape(), &[2, 3, 4]);
    /// assert_eq!(a.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Result<Self, ArrayError> {
        Self::filled(shape, <T as Zero>::zero())
    }

    /// Create an array filled with ones.
    pub fn ones(shape: &[usize]) -> Result<Self, ArrayError> {
        Self::filled(shape, <T as One>::one())
    }

    /// Create a 1-D array of `start, start + step, ...` strictly below `end`.
    ///
    /// Combine with [`NdArray::reshape`] for other shapes.
    ///
    /// # Errors
    ///
    /// - `InvalidRange` if a bound is not finite or `step` is not positive
    /// - `InvalidShape` if the range is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use mdarray::prelude::*;
    ///
    /// let a = NdArray::arange(0.0, 16.0, 1.0).unwrap().reshape(&[4, 4]).unwrap();
    /// assert_eq!(a.get(&[2, 3]).unwrap(), 11.0);
    /// ```
    pub fn arange(start: T, end: T, step: T) -> Result<Self, ArrayError> {
        if ![start, end, step].into_iter().all(Float::is_finite) || step <= <T as Zero>::zero() {
            return Err(ArrayError::InvalidRange);
        }
        let mut data = Vec::new();
        loop {
            let value = start + step * <T as Scalar>::from_usize(data.len());
            if value >= end {
                break;
            }
            data.push(value);
        }
        Self::from_vec_1d(data)
    }

    /// Copy into a new shape holding the same number of elements.
    ///
    /// Elements keep their row-major logical order.
    ///
    /// # Errors
    ///
    /// - `InvalidShape` if `new_shape` is empty or has a zero dimension
    /// - `ShapeMismatch` if the element counts differ
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, ArrayError> {
        Self::from_vec(self.flatten(), new_shape)
    }

    /// Strides used to translate coordinates to buffer offsets.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Underlying buffer in storage order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Underlying buffer in storage order, mutable.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array and return its buffer in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// True when strides are the row-major strides of the shape.
    pub fn is_standard_layout(&self) -> bool {
        self.strides == compute_strides(&self.shape)
    }

    /// Copy into a row-major array with the same logical contents.
    pub fn as_standard_layout(&self) -> Self {
        if self.is_standard_layout() {
            self.clone()
        } else {
            self.to_array()
        }
    }

    /// Transposed copy: shape and strides reversed, data copied as is.
    ///
    /// Agrees with [`NdArray::transpose_inplace`] on every coordinate.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdarray::prelude::*;
    ///
    /// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.get(&[2, 1]).unwrap(), a.get(&[1, 2]).unwrap());
    /// ```
    pub fn transpose(&self) -> Self {
        let mut transposed = self.clone();
        transposed.transpose_inplace();
        transposed
    }

    /// Transpose in place by reversing shape and strides; no data moves.
    pub fn transpose_inplace(&mut self) -> &mut Self {
        self.shape.reverse();
        self.strides.reverse();
        log::debug!(
            "transposed to shape {:?} with strides {:?}",
            self.shape,
            self.strides
        );
        self
    }

    /// Raise every element to `exponent` in place.
    pub fn pow_inplace(&mut self, exponent: T) -> &mut Self {
        self.map_inplace(|x| Float::powf(x, exponent))
    }

    /// Replace every element `x` by `f(x)` in place.
    pub fn map_inplace<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(T) -> T,
    {
        for x in self.data.iter_mut() {
            *x = f(*x);
        }
        self
    }

    /// Borrow the whole array as a view.
    pub fn view(&self) -> ArrayView<'_, T> {
        ArrayView::full(&self.data, &self.shape, &self.strides)
    }

    /// Borrow the whole array as a mutable view.
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T> {
        ArrayViewMut::full(&mut self.data, &self.shape, &self.strides)
    }

    /// Borrow a rectangular region described by one slice token per dimension.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` or `InvalidSliceSpec`, see [`crate::parse_slices`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mdarray::prelude::*;
    ///
    /// let a = NdArray::arange(0.0, 16.0, 1.0).unwrap().reshape(&[4, 4]).unwrap();
    /// let v = a.slice(&[":", "2:"]).unwrap();
    /// assert_eq!(v.shape(), &[4, 2]);
    /// assert_eq!(v.flatten(), vec![2.0, 3.0, 6.0, 7.0, 10.0, 11.0, 14.0, 15.0]);
    /// ```
    pub fn slice<S: AsRef<str>>(&self, specs: &[S]) -> Result<ArrayView<'_, T>, ArrayError> {
        let ranges = parse_slices(&self.shape, specs)?;
        ArrayView::new(&self.data, &self.shape, &self.strides, ranges)
    }

    /// Mutably borrow a rectangular region; writes land in this array.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdarray::prelude::*;
    ///
    /// let mut a: NdArray<f64> = NdArray::zeros(&[3, 3]).unwrap();
    /// a.slice_mut(&["1", ":"]).unwrap().fill(7.0);
    /// assert_eq!(a.get(&[1, 2]).unwrap(), 7.0);
    /// assert_eq!(a.get(&[0, 2]).unwrap(), 0.0);
    /// ```
    pub fn slice_mut<S: AsRef<str>>(
        &mut self,
        specs: &[S],
    ) -> Result<ArrayViewMut<'_, T>, ArrayError> {
        let ranges = parse_slices(&self.shape, specs)?;
        ArrayViewMut::new(&mut self.data, &self.shape, &self.strides, ranges)
    }
}

impl<T: Scalar> ArrayAccess for NdArray<T> {
    type Elem = T;

    #[inline]
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn buffer(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn linear_offset(&self, indices: &[usize]) -> usize {
        cartesian_to_linear(indices, &self.strides)
    }
}

impl<T: Scalar> ArrayAccessMut for NdArray<T> {
    #[inline]
    fn buffer_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Scalar> PartialEq for NdArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.values().eq(other.values())
    }
}
