//! Array operations.
//!
//! Every operation is a free function generic over [`ArrayAccess`], so it
//! accepts owned arrays and views alike. [`ArrayOps`] exposes the same
//! functions as methods on anything implementing [`ArrayAccess`]:
//!
//! ```text
//! ArrayOps::add(&self, other)
//!     → elementwise::add
//!     → apply_op (broadcast via extend_dims when shapes differ)
//!
//! ArrayOps::dot(&self, other)
//!     → dot::dot
//!     → backend::DefaultBackend::matmul_into (rank 2)
//! ```

mod broadcast;
mod copy;
mod dot;
mod elementwise;
mod reduce;
mod slice;

pub use broadcast::{add_ones, extend_dims};
pub use copy::copy_into;
pub use dot::{DotOutput, dot};
pub use elementwise::{add, apply_op, apply_scalar_op, check_divisor, div, div_scalar, mul, sub};
pub use reduce::{max, max_axis, mean, mean_axis, min, min_axis, std_dev, sum, sum_axis};
pub use slice::new_slice;

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::error::ArrayError;

/// Method-call form of the operations in this module.
///
/// Implemented for every [`ArrayAccess`] type; results are owned [`NdArray`]s.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
///
/// let a = NdArray::arange(0.0, 16.0, 1.0).unwrap().reshape(&[4, 4]).unwrap();
/// let right = a.slice(&[":", "2:"]).unwrap();
/// let doubled = right.mul_scalar(2.0);
/// assert_eq!(doubled.sum(), 2.0 * right.sum());
/// ```
pub trait ArrayOps: ArrayAccess {
    /// See [`apply_op`].
    fn apply_op<B, F>(
        &self,
        other: &B,
        op: F,
        axis: Option<usize>,
    ) -> Result<NdArray<Self::Elem>, ArrayError>
    where
        B: ArrayAccess<Elem = Self::Elem> + ?Sized,
        F: Fn(Self::Elem, Self::Elem) -> Self::Elem,
    {
        apply_op(self, other, op, axis)
    }

    /// See [`apply_scalar_op`].
    fn apply_scalar_op<F>(&self, scalar: Self::Elem, op: F) -> NdArray<Self::Elem>
    where
        F: Fn(Self::Elem, Self::Elem) -> Self::Elem,
    {
        apply_scalar_op(self, scalar, op)
    }

    fn add<B>(&self, other: &B) -> Result<NdArray<Self::Elem>, ArrayError>
    where
        B: ArrayAccess<Elem = Self::Elem> + ?Sized,
    {
        add(self, other)
    }

    fn sub<B>(&self, other: &B) -> Result<NdArray<Self::Elem>, ArrayError>
    where
        B: ArrayAccess<Elem = Self::Elem> + ?Sized,
    {
        sub(self, other)
    }

    fn mul<B>(&self, other: &B) -> Result<NdArray<Self::Elem>, ArrayError>
    where
        B: ArrayAccess<Elem = Self::Elem> + ?Sized,
    {
        mul(self, other)
    }

    /// See [`div`].
    fn div<B>(&self, other: &B) -> Result<NdArray<Self::Elem>, ArrayError>
    where
        B: ArrayAccess<Elem = Self::Elem> + ?Sized,
    {
        div(self, other)
    }

    fn add_scalar(&self, scalar: Self::Elem) -> NdArray<Self::Elem> {
        apply_scalar_op(self, scalar, |x, s| x + s)
    }

    fn sub_scalar(&self, scalar: Self::Elem) -> NdArray<Self::Elem> {
        apply_scalar_op(self, scalar, |x, s| x - s)
    }

    fn mul_scalar(&self, scalar: Self::Elem) -> NdArray<Self::Elem> {
        apply_scalar_op(self, scalar, |x, s| x * s)
    }

    /// See [`div_scalar`].
    fn div_scalar(&self, scalar: Self::Elem) -> Result<NdArray<Self::Elem>, ArrayError> {
        div_scalar(self, scalar)
    }

    /// See [`extend_dims`].
    fn extend_dims(&self, target: &[usize]) -> Result<NdArray<Self::Elem>, ArrayError> {
        extend_dims(self, target)
    }

    /// See [`dot`].
    fn dot<B>(&self, other: &B) -> Result<DotOutput<Self::Elem>, ArrayError>
    where
        B: ArrayAccess<Elem = Self::Elem> + ?Sized,
    {
        dot(self, other)
    }

    fn sum(&self) -> Self::Elem {
        sum(self)
    }

    fn min(&self) -> Self::Elem {
        min(self)
    }

    fn max(&self) -> Self::Elem {
        max(self)
    }

    fn mean(&self) -> Self::Elem {
        mean(self)
    }

    fn sum_axis(&self, axis: usize) -> Result<NdArray<Self::Elem>, ArrayError> {
        sum_axis(self, axis)
    }

    fn min_axis(&self, axis: usize) -> Result<NdArray<Self::Elem>, ArrayError> {
        min_axis(self, axis)
    }

    fn max_axis(&self, axis: usize) -> Result<NdArray<Self::Elem>, ArrayError> {
        max_axis(self, axis)
    }

    fn mean_axis(&self, axis: usize) -> Result<NdArray<Self::Elem>, ArrayError> {
        mean_axis(self, axis)
    }

    /// See [`std_dev`].
    fn std(&self, axis: Option<usize>) -> Result<NdArray<Self::Elem>, ArrayError> {
        std_dev(self, axis)
    }

    /// See [`new_slice`].
    fn new_slice<S: AsRef<str>>(&self, specs: &[S]) -> Result<NdArray<Self::Elem>, ArrayError> {
        new_slice(self, specs)
    }

    /// See [`add_ones`].
    fn add_ones(&self) -> Result<NdArray<Self::Elem>, ArrayError> {
        add_ones(self)
    }
}

impl<A: ArrayAccess + ?Sized> ArrayOps for A {}
