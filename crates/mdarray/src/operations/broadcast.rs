//! Shape-extending operations.

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::error::ArrayError;
use num_traits::One;

/// Edge-repeat extend `array` to `target` along its single differing dimension.
///
/// Target coordinates past the current extent read the last index along that
/// dimension, so a `[2, 2]` array extended to `[4, 2]` repeats its second row.
///
/// # Errors
///
/// - `DimensionMismatch` if the ranks differ
/// - `MultipleDimensionMismatch` if more than one dimension differs
/// - `IncompatibleShapes` if the target is smaller than the current extent
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::extend_dims;
///
/// let row = NdArray::from_vec(vec![1.0, 2.0], &[1, 2]).unwrap();
/// let grid = extend_dims(&row, &[3, 2]).unwrap();
/// assert_eq!(grid.flatten(), vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
/// ```
pub fn extend_dims<A>(array: &A, target: &[usize]) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    let shape = array.shape();
    if shape.len() != target.len() {
        return Err(ArrayError::DimensionMismatch {
            expected: shape.len(),
            actual: target.len(),
        });
    }

    let mut differing = (0..shape.len()).filter(|&d| shape[d] != target[d]);
    let Some(dim) = differing.next() else {
        return Ok(array.to_array());
    };
    if differing.next().is_some() {
        return Err(ArrayError::MultipleDimensionMismatch {
            shape: shape.to_vec(),
            target: target.to_vec(),
        });
    }
    if target[dim] < shape[dim] {
        return Err(ArrayError::IncompatibleShapes {
            lhs: shape.to_vec(),
            rhs: target.to_vec(),
        });
    }

    log::debug!("extending {:?} to {:?} along dimension {}", shape, target, dim);
    let last = shape[dim] - 1;
    let mut src = vec![0usize; shape.len()];
    let data = crate::indices::indices(target)
        .map(|indices| {
            src.copy_from_slice(&indices);
            src[dim] = src[dim].min(last);
            array.buffer()[array.linear_offset(&src)]
        })
        .collect();
    Ok(NdArray::from_raw_parts(data, target.to_vec()))
}

/// Prepend a column of ones to a matrix.
///
/// # Errors
///
/// `UnsupportedRank` unless `array` has rank 2.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::add_ones;
///
/// let x = NdArray::from_vec(vec![5.0, 6.0], &[2, 1]).unwrap();
/// let design = add_ones(&x).unwrap();
/// assert_eq!(design.shape(), &[2, 2]);
/// assert_eq!(design.flatten(), vec![1.0, 5.0, 1.0, 6.0]);
/// ```
pub fn add_ones<A>(array: &A) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    let &[rows, cols] = array.shape() else {
        return Err(ArrayError::UnsupportedRank {
            lhs: array.ndim(),
            rhs: 2,
        });
    };
    let mut data = Vec::with_capacity(rows * (cols + 1));
    let mut values = array.values();
    for _ in 0..rows {
        data.push(<A::Elem as One>::one());
        data.extend(values.by_ref().take(cols));
    }
    Ok(NdArray::from_raw_parts(data, vec![rows, cols + 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_repeats_last_row() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let e = extend_dims(&a, &[4, 2]).unwrap();
        assert_eq!(e.shape(), &[4, 2]);
        assert_eq!(e.flatten(), vec![1.0, 2.0, 3.0, 4.0, 3.0, 4.0, 3.0, 4.0]);
    }

    #[test]
    fn test_extend_repeats_last_column() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let e = extend_dims(&a, &[2, 3]).unwrap();
        assert_eq!(e.flatten(), vec![1.0, 2.0, 2.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn test_extend_equal_shape_copies() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let e = extend_dims(&a, &[2, 2]).unwrap();
        assert_eq!(e, a);
    }

    #[test]
    fn test_extend_transposed_source() {
        let a = NdArray::from_vec(vec![1.0, 2.0], &[2, 1])
            .unwrap()
            .transpose();
        let e = extend_dims(&a, &[2, 2]).unwrap();
        assert_eq!(e.flatten(), vec![1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_extend_errors() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert!(matches!(
            extend_dims(&a, &[3, 3]),
            Err(ArrayError::MultipleDimensionMismatch { .. })
        ));
        assert!(matches!(
            extend_dims(&a, &[1, 2]),
            Err(ArrayError::IncompatibleShapes { .. })
        ));
        assert_eq!(
            extend_dims(&a, &[4]),
            Err(ArrayError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_add_ones() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]).unwrap();
        let b = add_ones(&a).unwrap();
        assert_eq!(b.shape(), &[3, 3]);
        assert_eq!(
            b.flatten(),
            vec![1.0, 1.0, 2.0, 1.0, 3.0, 4.0, 1.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_add_ones_rejects_other_ranks() {
        let a = NdArray::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        assert_eq!(
            add_ones(&a),
            Err(ArrayError::UnsupportedRank { lhs: 1, rhs: 2 })
        );
    }
}
