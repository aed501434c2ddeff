//! Scalar trait for array element types.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Extra bound required by the faer matrix-multiplication backend.
#[cfg(feature = "faer")]
pub trait MatmulField: faer_traits::ComplexField {}

#[cfg(feature = "faer")]
impl<T: faer_traits::ComplexField> MatmulField for T {}

/// Extra bound required by the faer matrix-multiplication backend.
#[cfg(not(feature = "faer"))]
pub trait MatmulField {}

#[cfg(not(feature = "faer"))]
impl<T> MatmulField for T {}

/// Trait for element types supported by mdarray.
///
/// Elements are real floating-point numbers: reductions need ordering and
/// infinities, `std` needs a square root and `pow_inplace` needs `powf`.
pub trait Scalar: Float + MatmulField + Debug + Display + Default + 'static {
    /// Convert an element count, used as the divisor of `mean`.
    fn from_usize(n: usize) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }
}
