//! Error types for mdarray.

use thiserror::Error;

/// Errors that can occur in array operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Data length does not match the product of the shape.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Shape is empty or contains a zero-length dimension.
    #[error("invalid shape {shape:?}: dimensions must be non-empty and positive")]
    InvalidShape { shape: Vec<usize> },

    /// Wrong number of coordinates, or ranks/lengths that must agree do not.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Element-wise operation between shapes that cannot be reconciled.
    #[error("incompatible shapes {lhs:?} and {rhs:?}")]
    IncompatibleShapes { lhs: Vec<usize>, rhs: Vec<usize> },

    /// Edge-repeat extension asked to extend along more than one dimension.
    #[error("cannot extend shape {shape:?} to {target:?}: more than one dimension differs")]
    MultipleDimensionMismatch { shape: Vec<usize>, target: Vec<usize> },

    /// Divisor scalar, or an element of a divisor array, is zero.
    #[error("attempt to divide by zero")]
    DivideByZero,

    /// Coordinate outside the addressable extent of a dimension.
    #[error("index {index} out of range for dimension {dim} with size {size}")]
    IndexOutOfRange { index: usize, dim: usize, size: usize },

    /// Malformed or out-of-bounds slice token.
    #[error("invalid slice spec {spec:?}: {reason}")]
    InvalidSliceSpec { spec: String, reason: String },

    /// Operation is not defined for the ranks of its operands.
    #[error("unsupported rank combination: {lhs} and {rhs}")]
    UnsupportedRank { lhs: usize, rhs: usize },

    /// Axis argument is not a dimension of the array.
    #[error("axis {axis} out of range for array with {ndim} dimensions")]
    InvalidAxis { axis: usize, ndim: usize },

    /// Value count does not match the number of addressed positions.
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Range bounds must be finite and the step positive.
    #[error("invalid range: bounds must be finite and step positive")]
    InvalidRange,
}
