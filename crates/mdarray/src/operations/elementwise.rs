//! Element-wise array operations.
//!
//! Binary operations follow these shape rules:
//!
//! ```text
//! equal shapes                      → zip 1:1
//! one differing dimension           → edge-repeat the shorter operand, then zip
//! several differing dimensions      → IncompatibleShapes, unless an axis hint
//!                                     is given: both operands are extended to
//!                                     the per-dimension maximum, hinted axis first
//! different ranks                   → IncompatibleShapes
//! ```

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::error::ArrayError;
use crate::operations::broadcast::extend_dims;
use num_traits::Zero;

/// Apply `op(element, scalar)` to every element, returning a new array.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::apply_scalar_op;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let b = apply_scalar_op(&a, 10.0, |x, s| x * s);
/// assert_eq!(b.flatten(), vec![10.0, 20.0, 30.0]);
/// ```
pub fn apply_scalar_op<A, F>(a: &A, scalar: A::Elem, op: F) -> NdArray<A::Elem>
where
    A: ArrayAccess + ?Sized,
    F: Fn(A::Elem, A::Elem) -> A::Elem,
{
    let data = a.values().map(|x| op(x, scalar)).collect();
    NdArray::from_raw_parts(data, a.shape().to_vec())
}

/// Combine two operands element-wise with `op(lhs, rhs)`.
///
/// `axis` permits extension along several dimensions; see the module docs.
///
/// # Errors
///
/// - `IncompatibleShapes` for rank mismatch, a shrinking requirement, or
///   several differing dimensions without `axis`
/// - `InvalidAxis` if `axis` is not a dimension
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::apply_op;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// let row = NdArray::from_vec(vec![10.0, 20.0], &[1, 2]).unwrap();
/// let c = apply_op(&a, &row, |x, y| x + y, None).unwrap();
/// assert_eq!(c.flatten(), vec![11.0, 22.0, 13.0, 24.0]);
/// ```
pub fn apply_op<A, B, F>(
    a: &A,
    b: &B,
    op: F,
    axis: Option<usize>,
) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    B: ArrayAccess<Elem = A::Elem> + ?Sized,
    F: Fn(A::Elem, A::Elem) -> A::Elem,
{
    let incompatible = || ArrayError::IncompatibleShapes {
        lhs: a.shape().to_vec(),
        rhs: b.shape().to_vec(),
    };
    if a.ndim() != b.ndim() {
        return Err(incompatible());
    }
    if let Some(axis) = axis.filter(|&axis| axis >= a.ndim()) {
        return Err(ArrayError::InvalidAxis {
            axis,
            ndim: a.ndim(),
        });
    }

    if a.shape() == b.shape() {
        let data = a.values().zip(b.values()).map(|(x, y)| op(x, y)).collect();
        return Ok(NdArray::from_raw_parts(data, a.shape().to_vec()));
    }

    let mut differing: Vec<usize> = (0..a.ndim())
        .filter(|&d| a.shape()[d] != b.shape()[d])
        .collect();
    match axis {
        None if differing.len() > 1 => return Err(incompatible()),
        Some(axis) => {
            if let Some(pos) = differing.iter().position(|&d| d == axis) {
                differing[..=pos].rotate_right(1);
            }
        }
        None => {}
    }

    let target: Vec<usize> = a
        .shape()
        .iter()
        .zip(b.shape().iter())
        .map(|(&x, &y)| x.max(y))
        .collect();
    log::debug!(
        "broadcasting {:?} and {:?} to {:?} along axes {:?}",
        a.shape(),
        b.shape(),
        target,
        differing
    );
    let lhs = extend_along(a, &target, &differing)?;
    let rhs = extend_along(b, &target, &differing)?;
    let data = lhs
        .into_iter()
        .zip(rhs)
        .map(|(x, y)| op(x, y))
        .collect();
    Ok(NdArray::from_raw_parts(data, target))
}

/// Row-major values of `a` edge-repeat extended to `target`, one axis at a time.
fn extend_along<A>(a: &A, target: &[usize], axes: &[usize]) -> Result<Vec<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    let mut current: Option<NdArray<A::Elem>> = None;
    for &axis in axes {
        let mut step_shape = match &current {
            Some(array) => array.shape().to_vec(),
            None => a.shape().to_vec(),
        };
        if step_shape[axis] == target[axis] {
            continue;
        }
        step_shape[axis] = target[axis];
        let extended = match &current {
            Some(array) => extend_dims(array, &step_shape)?,
            None => extend_dims(a, &step_shape)?,
        };
        current = Some(extended);
    }
    Ok(match current {
        Some(array) => array.into_vec(),
        None => a.flatten(),
    })
}

/// Fail with `DivideByZero` if any element of `divisor` is exactly zero.
pub fn check_divisor<A>(divisor: &A) -> Result<(), ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    if divisor.values().any(|x| x == <A::Elem as Zero>::zero()) {
        return Err(ArrayError::DivideByZero);
    }
    Ok(())
}

/// Element-wise sum.
pub fn add<A, B>(a: &A, b: &B) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    B: ArrayAccess<Elem = A::Elem> + ?Sized,
{
    apply_op(a, b, |x, y| x + y, None)
}

/// Element-wise difference.
pub fn sub<A, B>(a: &A, b: &B) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    B: ArrayAccess<Elem = A::Elem> + ?Sized,
{
    apply_op(a, b, |x, y| x - y, None)
}

/// Element-wise product.
pub fn mul<A, B>(a: &A, b: &B) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    B: ArrayAccess<Elem = A::Elem> + ?Sized,
{
    apply_op(a, b, |x, y| x * y, None)
}

/// Element-wise quotient.
///
/// # Errors
///
/// `DivideByZero` before any work if `b` holds a zero.
///
/// # Example
///
/// ```
/// use mdarray::prelude::*;
/// use mdarray::operations::div;
///
/// let a = NdArray::from_vec(vec![2.0, 4.0], &[2]).unwrap();
/// let b = NdArray::from_vec(vec![2.0, 0.0], &[2]).unwrap();
/// assert_eq!(div(&a, &b), Err(ArrayError::DivideByZero));
/// ```
pub fn div<A, B>(a: &A, b: &B) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
    B: ArrayAccess<Elem = A::Elem> + ?Sized,
{
    check_divisor(b)?;
    apply_op(a, b, |x, y| x / y, None)
}

/// Divide every element by `scalar`.
///
/// # Errors
///
/// `DivideByZero` if `scalar` is zero.
pub fn div_scalar<A>(a: &A, scalar: A::Elem) -> Result<NdArray<A::Elem>, ArrayError>
where
    A: ArrayAccess + ?Sized,
{
    if scalar == <A::Elem as Zero>::zero() {
        return Err(ArrayError::DivideByZero);
    }
    Ok(apply_scalar_op(a, scalar, |x, s| x / s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arr(data: &[f64], shape: &[usize]) -> NdArray<f64> {
        NdArray::from_vec(data.to_vec(), shape).unwrap()
    }

    #[test]
    fn test_add_same_shape() {
        let a: NdArray<f64> = NdArray::ones(&[5, 10]).unwrap();
        let b: NdArray<f64> = NdArray::ones(&[5, 10]).unwrap();
        let c = add(&a, &b).unwrap();
        assert_eq!(c.shape(), &[5, 10]);
        assert!(c.flatten().iter().all(|&x| x == 2.0));
    }

    #[test]
    fn test_sub_same_shape() {
        let a: NdArray<f64> = NdArray::ones(&[5, 10]).unwrap();
        let c = sub(&a, &a).unwrap();
        assert!(c.flatten().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_mul_after_scalar_mul() {
        let a = apply_scalar_op(&NdArray::<f64>::ones(&[5, 10]).unwrap(), 2.0, |x, s| x * s);
        let c = mul(&a, &a).unwrap();
        assert!(c.flatten().iter().all(|&x| x == 4.0));
    }

    #[test]
    fn test_row_broadcast() {
        let a = arr(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]);
        let row = arr(&[10.0, 20.0], &[1, 2]);
        let c = add(&a, &row).unwrap();
        assert_eq!(c.shape(), &[3, 2]);
        assert_eq!(c.flatten(), vec![11.0, 22.0, 13.0, 24.0, 15.0, 26.0]);
    }

    #[test]
    fn test_column_broadcast_on_left_operand() {
        let col = arr(&[1.0, 2.0], &[2, 1]);
        let b = arr(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0], &[2, 3]);
        let c = sub(&col, &b).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.flatten(), vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_broadcast_repeats_last_row() {
        let a = arr(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b: NdArray<f64> = NdArray::zeros(&[4, 2]).unwrap();
        let c = add(&a, &b).unwrap();
        assert_eq!(c.flatten(), vec![1.0, 2.0, 3.0, 4.0, 3.0, 4.0, 3.0, 4.0]);
    }

    #[test]
    fn test_two_axis_mismatch_needs_hint() {
        let a = arr(&[1.0, 2.0], &[1, 2]);
        let b = arr(&[10.0, 20.0, 30.0], &[3, 1]);
        assert!(matches!(
            add(&a, &b),
            Err(ArrayError::IncompatibleShapes { .. })
        ));
        let c = apply_op(&a, &b, |x, y| x + y, Some(0)).unwrap();
        assert_eq!(c.shape(), &[3, 2]);
        assert_eq!(c.flatten(), vec![11.0, 12.0, 21.0, 22.0, 31.0, 32.0]);
        let d = apply_op(&a, &b, |x, y| x + y, Some(1)).unwrap();
        assert_eq!(c, d);
    }

    #[test]
    fn test_invalid_axis_hint() {
        let a = arr(&[1.0, 2.0], &[1, 2]);
        assert_eq!(
            apply_op(&a, &a, |x, y| x + y, Some(2)),
            Err(ArrayError::InvalidAxis { axis: 2, ndim: 2 })
        );
    }

    #[test]
    fn test_rank_mismatch() {
        let a = arr(&[1.0, 2.0], &[2]);
        let b = arr(&[1.0, 2.0], &[1, 2]);
        assert!(matches!(
            add(&a, &b),
            Err(ArrayError::IncompatibleShapes { .. })
        ));
    }

    #[test]
    fn test_div_by_zero_scalar() {
        let a = arr(&[1.0, 2.0], &[2]);
        assert_eq!(div_scalar(&a, 0.0), Err(ArrayError::DivideByZero));
        assert_eq!(div_scalar(&a, 2.0).unwrap().flatten(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_div_checks_before_broadcast() {
        let a = arr(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
        let b = arr(&[0.0, 1.0], &[1, 2]);
        assert_eq!(div(&a, &b), Err(ArrayError::DivideByZero));
    }

    #[test]
    fn test_mul_then_div_roundtrip() {
        let a = arr(&[0.3, -1.7, 2.2, 9.1], &[2, 2]);
        let b = div_scalar(&apply_scalar_op(&a, 3.3, |x, s| x * s), 3.3).unwrap();
        for (x, y) in a.flatten().iter().zip(b.flatten().iter()) {
            assert_relative_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ops_on_views() {
        let a = NdArray::arange(0.0, 16.0, 1.0)
            .unwrap()
            .reshape(&[4, 4])
            .unwrap();
        let left = a.slice(&[":", ":2"]).unwrap();
        let right = a.slice(&[":", "2:"]).unwrap();
        let c = add(&left, &right).unwrap();
        assert_eq!(c.shape(), &[4, 2]);
        assert_eq!(
            c.flatten(),
            vec![2.0, 4.0, 10.0, 12.0, 18.0, 20.0, 26.0, 28.0]
        );
    }
}
