//! mdarray - strided n-dimensional arrays of floating-point numbers
//!
//! Owned arrays ([`NdArray`]) and borrowed rectangular windows into them
//! ([`ArrayView`], [`ArrayViewMut`]) share one capability interface, so every
//! operation accepts either.
//!
//! # Architecture
//!
//! ```text
//! Level 1: Method API (ArrayOps, blanket-implemented for ArrayAccess)
//!     → add, div_scalar, dot, sum_axis, std, new_slice, ...
//!
//! Level 2: Free functions (operations module)
//!     → apply_op, extend_dims, dot, reductions, copy_into
//!
//! Level 3: Backend implementation (backend module)
//!     → FaerBackend (cargo feature `faer`, default)
//!     → GenericBackend (naive loops)
//! ```
//!
//! Arrays are row-major. Transposition reverses shape and strides without
//! moving data, and every operation reads elements by logical coordinate.
//!
//! # Example
//!
//! ```
//! use mdarray::prelude::*;
//!
//! let mut a = NdArray::arange(0.0, 16.0, 1.0).unwrap().reshape(&[4, 4]).unwrap();
//!
//! // Views are relative to their slice
//! let right = a.slice(&[":", "2:"]).unwrap();
//! assert_eq!(right.get(&[0, 0]).unwrap(), 2.0);
//! assert_eq!(right.flatten(), vec![2.0, 3.0, 6.0, 7.0, 10.0, 11.0, 14.0, 15.0]);
//!
//! // Writes through a mutable view land in the parent
//! a.slice_mut(&["0", ":"]).unwrap().fill(-1.0);
//! assert_eq!(a.get(&[0, 3]).unwrap(), -1.0);
//!
//! // Reductions along an axis return a 2-D array
//! let ones = NdArray::<f64>::ones(&[2, 2]).unwrap();
//! assert_eq!(ones.sum_axis(1).unwrap().shape(), &[1, 2]);
//! ```

pub mod access;
pub mod array;
pub mod backend;
mod display;
pub mod error;
pub mod indices;
pub mod operations;
pub mod scalar;
pub mod slice;
pub mod strides;
pub mod view;

pub use access::{ArrayAccess, ArrayAccessMut};
pub use array::NdArray;
pub use error::ArrayError;
pub use indices::{Indices, indices};
pub use operations::{ArrayOps, DotOutput};
pub use scalar::Scalar;
pub use slice::{SliceRange, SliceSpec, parse_slices, resolve_slices};
pub use view::{ArrayView, ArrayViewMut};

/// Types and traits needed for everyday use.
pub mod prelude {
    pub use crate::access::{ArrayAccess, ArrayAccessMut};
    pub use crate::array::NdArray;
    pub use crate::error::ArrayError;
    pub use crate::operations::{ArrayOps, DotOutput};
    pub use crate::scalar::Scalar;
    pub use crate::slice::{SliceRange, SliceSpec};
    pub use crate::view::{ArrayView, ArrayViewMut};
}
