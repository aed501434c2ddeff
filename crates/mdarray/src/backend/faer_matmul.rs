//! faer-backed matrix multiplication.
//!
//! faer views are column-major. A row-major `m × k` buffer read as
//! column-major is its `k × m` transpose, so the product is computed as
//! `Cᵀ = Bᵀ · Aᵀ` directly on the caller's buffers without copying.

use crate::backend::MatmulBackend;
use crate::scalar::Scalar;
use faer::linalg::matmul::matmul;
use faer::{Accum, MatMut, MatRef, Par};
use num_traits::One;

/// Backend delegating to faer's `matmul`.
pub struct FaerBackend;

impl MatmulBackend for FaerBackend {
    fn matmul_into<T: Scalar>(dest: &mut [T], a: &[T], b: &[T], m: usize, k: usize, n: usize) {
        let a_t = MatRef::from_column_major_slice(a, k, m);
        let b_t = MatRef::from_column_major_slice(b, n, k);
        let mut c_t = MatMut::from_column_major_slice_mut(dest, n, m);

        // Cᵀ = 1 · Bᵀ · Aᵀ
        matmul(c_t.as_mut(), Accum::Replace, b_t, a_t, <T as One>::one(), Par::Seq);
    }
}
