//! Reductions over all elements or along one axis.
//!
//! Axis reductions return a 2-D array holding one value per index along the
//! axis: shape `[1, n]` when reducing along axis 1, `[n, 1]` otherwise.

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::error::ArrayError;
use crate::scalar::Scalar;
use num_traits::{Float, Zero};

/// Sum of all elements.
pub fn sum<A: ArrayAccess + ?Sized>(array: &A) -> A::Elem {
    array.values().fold(<A::Elem as Zero>::zero(), |acc, x| acc + x)
}

/// Smallest element; `+∞` for an empty fold.
pub fn min<A: ArrayAccess + ?Sized>(array: &A) -> A::Elem {
    array
        .values()
        .fold(<A::Elem as Float>::infinity(), |acc, x| Float::min(acc, x))
}

/// Largest element; `−∞` for an empty fold.
pub fn max<A: ArrayAccess + ?Sized>(array: &A) -> A::Elem {
    array
        .values()
        .fold(<A::Elem as Float>::neg_infinity(), |acc, x| Float::max(acc, x))
}

/// Arithmetic mean of all elements.
pub fn mean<A: ArrayAccess + ?Sized>(array: &A) -> A::Elem {
    sum(array) / <A::Elem as Scalar>::from_usize(array.len())
}

/// Fold the sub-array at each index along `axis` into one value.
fn fold_axis<A, F>(
    array: &A,
    axis: usize,
    init: A::Elem,
    f: F,
) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    F: Fn(A::Elem, A::Elem) -> A::Elem,
{
    if axis >= array.ndim() {
        return Err(ArrayError::InvalidAxis {
            axis,
            ndim: array.ndim(),
        });
    }
    let n = array.shape()[axis];
    let mut acc = vec![init; n];
    for indices in array.enumerate_indices() {
        let slot = &mut acc[indices[axis]];
        *slot = f(*slot, array.buffer()[array.linear_offset(&indices)]);
    }
    let shape = if axis == 1 { vec![1, n] } else { vec![n, 1] };
    Ok(NdArray::from_raw_parts(acc, shape))
}

/// Sum along `axis`.
///
/// # Errors
///
/// `InvalidAxis` if `axis >= ndim()`.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::sum_axis;
///
/// let a = NdArray::<f64>::ones(&[2, 2]).unwrap();
/// let s = sum_axis(&a, 1).unwrap();
/// assert_eq!(s.shape(), &[1, 2]);
/// assert_eq!(s.flatten(), vec![2.0, 2.0]);
/// ```
pub fn sum_axis<A>(array: &A, axis: usize) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    fold_axis(array, axis, <A::Elem as Zero>::zero(), |acc, x| acc + x)
}

/// Minimum along `axis`.
pub fn min_axis<A>(array: &A, axis: usize) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    fold_axis(array, axis, <A::Elem as Float>::infinity(), |acc, x| {
        Float::min(acc, x)
    })
}

/// Maximum along `axis`.
pub fn max_axis<A>(array: &A, axis: usize) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    fold_axis(array, axis, <A::Elem as Float>::neg_infinity(), |acc, x| {
        Float::max(acc, x)
    })
}

/// Mean along `axis`.
pub fn mean_axis<A>(array: &A, axis: usize) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    let mut sums = sum_axis(array, axis)?;
    let count = <A::Elem as Scalar>::from_usize(array.len() / array.shape()[axis]);
    sums.map_inplace(|x| x / count);
    Ok(sums)
}

/// Population standard deviation along `axis` (default 1).
///
/// Computed as `sqrt(mean(x²) − mean(x)²)` with negative rounding residue
/// clamped to zero.
///
/// # Errors
///
/// `InvalidAxis` if the axis is not a dimension of `array`.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::std_dev;
///
/// let a = NdArray::from_vec(vec![1.0, 3.0, 2.0, 2.0], &[2, 2]).unwrap();
/// let s = std_dev(&a, Some(0)).unwrap();
/// assert_eq!(s.flatten(), vec![1.0, 0.0]);
/// ```
pub fn std_dev<A>(array: &A, axis: Option<usize>) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    let axis = axis.unwrap_or(1);
    let mut squared = array.to_array();
    squared.map_inplace(|x| x * x);
    let mean_of_squares = mean_axis(&squared, axis)?;
    let mut result = mean_axis(array, axis)?;
    for (m, ms) in result.data_mut().iter_mut().zip(mean_of_squares.data()) {
        let variance = Float::max(*ms - *m * *m, <A::Elem as Zero>::zero());
        *m = Float::sqrt(variance);
    }
    Ok(result)
}
