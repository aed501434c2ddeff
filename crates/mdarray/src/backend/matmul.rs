//! Matrix-multiplication backend trait.

use crate::scalar::Scalar;

/// Backend trait for dense row-major matrix products.
///
/// Implementations:
/// - `GenericBackend`: naive triple loop (always available)
/// - `FaerBackend`: faer's `matmul` (cargo feature `faer`)
pub trait MatmulBackend {
    /// Write `a · b` into `dest`.
    ///
    /// # Arguments
    ///
    /// * `dest` - Output, row-major `m × n`
    /// * `a` - Left operand, row-major `m × k`
    /// * `b` - Right operand, row-major `k × n`
    ///
    /// # Panics
    ///
    /// Panics if a slice length does not match its dimensions.
    fn matmul_into<T: Scalar>(dest: &mut [T], a: &[T], b: &[T], m: usize, k: usize, n: usize);
}
