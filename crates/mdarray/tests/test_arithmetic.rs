//! Integration tests for construction and element-wise arithmetic.

use approx::assert_relative_eq;
use mdarray::prelude::*;

fn grid() -> NdArray<f64> {
    NdArray::arange(0.0, 16.0, 1.0)
        .unwrap()
        .reshape(&[4, 4])
        .unwrap()
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        NdArray::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]),
        Err(ArrayError::ShapeMismatch {
            expected: 4,
            actual: 3
        })
    );
    assert!(matches!(
        NdArray::<f64>::zeros(&[]),
        Err(ArrayError::InvalidShape { .. })
    ));
    assert!(matches!(
        NdArray::<f64>::ones(&[3, 0]),
        Err(ArrayError::InvalidShape { .. })
    ));
    assert_eq!(
        NdArray::arange(0.0, 1.0, 0.0),
        Err(ArrayError::InvalidRange)
    );
    assert_eq!(
        NdArray::arange(0.0, f64::INFINITY, 1.0),
        Err(ArrayError::InvalidRange)
    );
}

#[test]
fn test_arange_and_reshape() {
    let a = NdArray::arange(0.0, 2.0, 0.5).unwrap();
    assert_eq!(a.shape(), &[4]);
    assert_eq!(a.flatten(), vec![0.0, 0.5, 1.0, 1.5]);

    let g = grid();
    assert_eq!(g.get(&[3, 1]).unwrap(), 13.0);
    assert!(matches!(
        g.reshape(&[5, 3]),
        Err(ArrayError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_get_set_errors() {
    let mut a = grid();
    assert_eq!(
        a.get(&[1]),
        Err(ArrayError::DimensionMismatch {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        a.set(&[0, 4], 1.0),
        Err(ArrayError::IndexOutOfRange {
            index: 4,
            dim: 1,
            size: 4
        })
    );
    a.set(&[2, 2], -3.0).unwrap();
    assert_eq!(a.get(&[2, 2]).unwrap(), -3.0);
}

#[test]
fn test_add_then_sub_restores() {
    let a = grid();
    let b = NdArray::from_vec((0..16).map(|x| (x as f64).cos()).collect(), &[4, 4]).unwrap();
    let restored = a.add(&b).unwrap().sub(&b).unwrap();
    for (x, y) in a.flatten().iter().zip(restored.flatten().iter()) {
        assert_relative_eq!(x, y, epsilon = 1e-12);
    }
}

#[test]
fn test_mul_then_div_restores() {
    let a = grid();
    let b = NdArray::<f64>::filled(&[4, 4], 1.7).unwrap();
    let restored = a.mul(&b).unwrap().div(&b).unwrap();
    for (x, y) in a.flatten().iter().zip(restored.flatten().iter()) {
        assert_relative_eq!(x, y, epsilon = 1e-12);
    }
}

#[test]
fn test_scalar_ops() {
    let a = NdArray::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    assert_eq!(a.add_scalar(1.0).flatten(), vec![2.0, 3.0]);
    assert_eq!(a.sub_scalar(1.0).flatten(), vec![0.0, 1.0]);
    assert_eq!(a.mul_scalar(3.0).flatten(), vec![3.0, 6.0]);
    assert_eq!(a.div_scalar(2.0).unwrap().flatten(), vec![0.5, 1.0]);
    assert_eq!(a.div_scalar(0.0), Err(ArrayError::DivideByZero));
}

#[test]
fn test_div_by_zero_element() {
    let a = grid();
    // grid holds a zero at [0, 0]
    assert_eq!(a.div(&a), Err(ArrayError::DivideByZero));
}

#[test]
fn test_broadcast_row_and_column() {
    let a = grid();
    let row = NdArray::from_vec(vec![1.0, 1.0, 1.0, 1.0], &[1, 4]).unwrap();
    let shifted = a.add(&row).unwrap();
    assert_eq!(shifted.shape(), &[4, 4]);
    assert_eq!(shifted.get(&[3, 3]).unwrap(), 16.0);

    let col = NdArray::from_vec(vec![2.0, 2.0, 2.0, 2.0], &[4, 1]).unwrap();
    let scaled = a.mul(&col).unwrap();
    assert_eq!(scaled.get(&[1, 2]).unwrap(), 12.0);
}

#[test]
fn test_extend_dims_method() {
    let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let e = a.extend_dims(&[3, 2]).unwrap();
    assert_eq!(e.flatten(), vec![1.0, 2.0, 3.0, 4.0, 3.0, 4.0]);
    assert!(matches!(
        a.extend_dims(&[3, 3]),
        Err(ArrayError::MultipleDimensionMismatch { .. })
    ));
}

#[test]
fn test_apply_op_with_axis_hint() {
    let row = NdArray::from_vec(vec![1.0, 2.0, 3.0], &[1, 3]).unwrap();
    let col = NdArray::from_vec(vec![10.0, 20.0], &[2, 1]).unwrap();
    let outer = row.apply_op(&col, |x, y| x * y, Some(1)).unwrap();
    assert_eq!(outer.shape(), &[2, 3]);
    assert_eq!(outer.flatten(), vec![10.0, 20.0, 30.0, 20.0, 40.0, 60.0]);
}

#[test]
fn test_transpose_forms_agree() {
    let a = NdArray::arange(0.0, 6.0, 1.0)
        .unwrap()
        .reshape(&[2, 3])
        .unwrap();
    let copied = a.transpose();
    let mut in_place = a.clone();
    in_place.transpose_inplace();
    assert_eq!(copied.shape(), &[3, 2]);
    assert_eq!(copied, in_place);
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(copied.get(&[j, i]).unwrap(), a.get(&[i, j]).unwrap());
        }
    }
    assert_eq!(copied.transpose(), a);
}

#[test]
fn test_pow_inplace_and_add_ones() {
    let mut a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    a.pow_inplace(2.0);
    assert_eq!(a.flatten(), vec![1.0, 4.0, 9.0, 16.0]);

    let design = a.add_ones().unwrap();
    assert_eq!(design.shape(), &[2, 3]);
    assert_eq!(design.flatten(), vec![1.0, 1.0, 4.0, 1.0, 9.0, 16.0]);
}

#[test]
fn test_copy_is_deep() {
    let a = grid();
    let mut b = a.clone();
    b.fill(0.0);
    assert_eq!(a.get(&[1, 1]).unwrap(), 5.0);
}
