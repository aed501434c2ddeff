//! Generic (naive loop-based) backend implementation.

use crate::backend::MatmulBackend;
use crate::scalar::Scalar;
use num_traits::Zero;

/// Generic backend using naive loop-based implementations.
///
/// Always available; used when the `faer` feature is off.
pub struct GenericBackend;

impl MatmulBackend for GenericBackend {
    fn matmul_into<T: Scalar>(dest: &mut [T], a: &[T], b: &[T], m: usize, k: usize, n: usize) {
        assert_eq!(a.len(), m * k);
        assert_eq!(b.len(), k * n);
        assert_eq!(dest.len(), m * n);

        for i in 0..m {
            for j in 0..n {
                let mut acc = <T as Zero>::zero();
                for p in 0..k {
                    acc = acc + a[i * k + p] * b[p * n + j];
                }
                dest[i * n + j] = acc;
            }
        }
    }
}
