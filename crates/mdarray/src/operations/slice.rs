//! Materialized slicing.

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::error::ArrayError;
use crate::slice::parse_slices;

/// Copy a region of `array` into a new owned array.
///
/// The result has the region's logical shape and row-major layout and does
/// not alias `array`.
///
/// # Errors
///
/// Same as [`parse_slices`].
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::new_slice;
///
/// let a = NdArray::arange(0.0, 6.0, 1.0).unwrap().reshape(&[2, 3]).unwrap();
/// let s = new_slice(&a, &["1", "1:"]).unwrap();
/// assert_eq!(s.shape(), &[1, 2]);
/// assert_eq!(s.flatten(), vec![4.0, 5.0]);
/// ```
pub fn new_slice<A, S>(array: &A, specs: &[S]) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    S: AsRef<str>,
{
    let ranges = parse_slices(array.shape(), specs)?;
    let new_shape: Vec<usize> = ranges.iter().map(|range| range.len()).collect();
    let ndim = new_shape.len();

    let mut data = Vec::with_capacity(new_shape.iter().product());
    let mut src_indices = vec![0usize; ndim];
    for indices in crate::indices::indices(&new_shape) {
        for (d, range) in ranges.iter().enumerate() {
            src_indices[d] = range.start + indices[d];
        }
        data.push(array.buffer()[array.linear_offset(&src_indices)]);
    }

    Ok(NdArray::from_raw_parts(data, new_shape))
}
