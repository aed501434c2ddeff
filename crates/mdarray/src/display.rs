//! `Display` for arrays and views.
//!
//! Output uses nested brackets with one innermost row per line:
//!
//! ```text
//! [[0 1 2]
//!  [3 4 5]]
//! ```
//!
//! Formatter flags such as precision apply to every element.

use crate::access::ArrayAccess;
use crate::array::NdArray;
use crate::scalar::Scalar;
use crate::view::{ArrayView, ArrayViewMut};
use std::fmt;

fn fmt_nested<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    values: &[T],
    shape: &[usize],
    depth: usize,
) -> fmt::Result {
    f.write_str("[")?;
    match shape {
        [] => {}
        [_] => {
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                fmt::Display::fmt(value, f)?;
            }
        }
        [outer, inner @ ..] => {
            let chunk = inner.iter().product::<usize>();
            for i in 0..*outer {
                if i > 0 {
                    f.write_str("\n")?;
                    for _ in 0..=depth {
                        f.write_str(" ")?;
                    }
                }
                fmt_nested(f, &values[i * chunk..(i + 1) * chunk], inner, depth + 1)?;
            }
        }
    }
    f.write_str("]")
}

fn fmt_array<A: ArrayAccess + ?Sized>(array: &A, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt_nested(f, &array.flatten(), array.shape(), 0)
}

impl<T: Scalar> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_array(self, f)
    }
}

impl<T: Scalar> fmt::Display for ArrayView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_array(self, f)
    }
}

impl<T: Scalar> fmt::Display for ArrayViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_array(self, f)
    }
}
