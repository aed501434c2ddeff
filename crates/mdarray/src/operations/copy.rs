//! Array copy operations.

use crate::access::{ArrayAccess, ArrayAccessMut};
use crate::error::ArrayError;

/// Copy every element of `src` into `dest`, coordinate by coordinate.
///
/// Both operands must have the same logical shape; layouts may differ.
///
/// # Errors
///
/// `IncompatibleShapes` if the shapes differ. Nothing is written then.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::copy_into;
///
/// let src = NdArray::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let mut dst = NdArray::<f64>::zeros(&[3]).unwrap();
/// copy_into(&mut dst, &src).unwrap();
/// assert_eq!(dst.flatten(), vec![1.0, 2.0, 3.0]);
/// ```
pub fn copy_into<D, S>(dest: &mut D, src: &S) -> Result<(), ArrayError>
where
    D: ArrayAccessMut + ?Sized,
    S: ArrayAccess<Elem = D::Elem> + ?Sized,
{
    if dest.shape() != src.shape() {
        return Err(ArrayError::IncompatibleShapes {
            lhs: dest.shape().to_vec(),
            rhs: src.shape().to_vec(),
        });
    }
    for (indices, value) in dest.enumerate_indices().zip(src.values()) {
        let offset = dest.linear_offset(&indices);
        dest.buffer_mut()[offset] = value;
    }
    Ok(())
}
