//! Dot products and matrix multiplication.

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::backend::{DEFAULT_BACKEND_NAME, DefaultBackend, MatmulBackend};
use crate::error::ArrayError;
use crate::scalar::Scalar;
use num_traits::Zero;

/// Result of [`dot`]: a scalar for vectors, an array for matrices.
#[derive(Debug, Clone, PartialEq)]
pub enum DotOutput<T: Scalar> {
    /// Inner product of two rank-1 operands.
    Scalar(T),
    /// Matrix product of two rank-2 operands.
    Array(NdArray<T>),
}

impl<T: Scalar> DotOutput<T> {
    /// The scalar result, if any.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// The array result, if any.
    pub fn into_array(self) -> Option<NdArray<T>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(array) => Some(array),
        }
    }
}

/// Inner product of vectors or product of matrices.
///
/// # Errors
///
/// - `DimensionMismatch` if vector lengths or inner matrix extents differ
/// - `UnsupportedRank` for any rank pair other than 1×1 or 2×2
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::dot;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
/// let b = NdArray::from_vec(vec![4.0, 3.0, 2.0, 1.0], &[4]).unwrap();
/// assert_eq!(dot(&a, &b).unwrap(), DotOutput::Scalar(20.0));
/// ```
pub fn dot<A, B>(a: &A, b: &B) -> Result<DotOutput<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    B: ArrayAccess<Elem = A::Elem> + ?Sized,
{
    match (a.shape(), b.shape()) {
        (&[len_a], &[len_b]) => {
            if len_a != len_b {
                return Err(ArrayError::DimensionMismatch {
                    expected: len_a,
                    actual: len_b,
                });
            }
            let value = a
                .values()
                .zip(b.values())
                .fold(<A::Elem as Zero>::zero(), |acc, (x, y)| acc + x * y);
            Ok(DotOutput::Scalar(value))
        }
        (&[m, k], &[k_b, n]) => {
            if k != k_b {
                return Err(ArrayError::DimensionMismatch {
                    expected: k,
                    actual: k_b,
                });
            }
            log::debug!("dot ({m}x{k}) · ({k}x{n}) using {DEFAULT_BACKEND_NAME} backend");
            let lhs = a.flatten();
            let rhs = b.flatten();
            let mut out = vec![<A::Elem as Zero>::zero(); m * n];
            DefaultBackend::matmul_into(&mut out, &lhs, &rhs, m, k, n);
            Ok(DotOutput::Array(NdArray::from_raw_parts(out, vec![m, n])))
        }
        _ => Err(ArrayError::UnsupportedRank {
            lhs: a.ndim(),
            rhs: b.ndim(),
        }),
    }
}
