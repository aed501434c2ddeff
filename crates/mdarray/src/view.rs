//! Borrowed rectangular windows onto an array's buffer.
//!
//! A view keeps the parent's shape and strides plus one [`SliceRange`] per
//! dimension. Coordinates passed to a view are relative to the slice start;
//! the buffer offset is `Σ (index[d] + start[d]) * parent_strides[d]`.
//!
//! The borrow checker enforces the aliasing contract: many [`ArrayView`]s or
//! one [`ArrayViewMut`] at a time, none outliving the parent. Writes through
//! an `ArrayViewMut` land directly in the parent's buffer.

use crate::access::{ArrayAccess, ArrayAccessMut};
use crate::error::ArrayError;
use crate::indices::Indices;
use crate::scalar::Scalar;
use crate::slice::{SliceRange, parse_slices};

/// Geometry shared by both view flavours.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewLayout {
    parent_shape: Vec<usize>,
    parent_strides: Vec<usize>,
    ranges: Vec<SliceRange>,
    shape: Vec<usize>,
}

impl ViewLayout {
    fn new(
        parent_shape: &[usize],
        parent_strides: &[usize],
        ranges: Vec<SliceRange>,
    ) -> Result<Self, ArrayError> {
        if ranges.len() != parent_shape.len() {
            return Err(ArrayError::DimensionMismatch {
                expected: parent_shape.len(),
                actual: ranges.len(),
            });
        }
        for (range, &dim) in ranges.iter().zip(parent_shape.iter()) {
            if range.start >= range.end || range.end > dim {
                return Err(ArrayError::InvalidSliceSpec {
                    spec: format!("{}:{}", range.start, range.end),
                    reason: format!("range must satisfy start < end <= {dim}"),
                });
            }
        }
        let shape = ranges.iter().map(SliceRange::len).collect();
        log::trace!("view {ranges:?} over parent shape {parent_shape:?}");
        Ok(Self {
            parent_shape: parent_shape.to_vec(),
            parent_strides: parent_strides.to_vec(),
            ranges,
            shape,
        })
    }

    fn full(parent_shape: &[usize], parent_strides: &[usize]) -> Self {
        Self {
            parent_shape: parent_shape.to_vec(),
            parent_strides: parent_strides.to_vec(),
            ranges: parent_shape.iter().map(|&d| SliceRange::full(d)).collect(),
            shape: parent_shape.to_vec(),
        }
    }

    #[inline]
    fn offset(&self, indices: &[usize]) -> usize {
        indices
            .iter()
            .zip(self.ranges.iter())
            .zip(self.parent_strides.iter())
            .map(|((&idx, range), &stride)| (idx + range.start) * stride)
            .sum()
    }

    /// Narrow this layout by specs relative to its own logical shape.
    fn narrow<S: AsRef<str>>(&self, specs: &[S]) -> Result<Self, ArrayError> {
        let relative = parse_slices(&self.shape, specs)?;
        let ranges = relative
            .iter()
            .zip(self.ranges.iter())
            .map(|(rel, outer)| SliceRange::new(outer.start + rel.start, outer.start + rel.end))
            .collect();
        Self::new(&self.parent_shape, &self.parent_strides, ranges)
    }
}

/// Immutable view of a sub-region of an array.
///
/// # Examples
///
/// ```
/// use mdarray::prelude::*;
///
/// let a = NdArray::arange(0.0, 16.0, 1.0).unwrap().reshape(&[4, 4]).unwrap();
/// let v = a.slice(&["1:3", "1:3"]).unwrap();
/// assert_eq!(v.shape(), &[2, 2]);
/// assert_eq!(v.get(&[0, 0]).unwrap(), 5.0);
/// assert_eq!(v.get(&[1, 1]).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayView<'a, T: Scalar> {
    data: &'a [T],
    layout: ViewLayout,
}

impl<'a, T: Scalar> ArrayView<'a, T> {
    /// Create a view over `data` laid out with `parent_shape`/`parent_strides`.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `ranges.len()` differs from the parent rank
    /// - `InvalidSliceSpec` if a range is empty or exceeds its dimension
    pub fn new(
        data: &'a [T],
        parent_shape: &[usize],
        parent_strides: &[usize],
        ranges: Vec<SliceRange>,
    ) -> Result<Self, ArrayError> {
        Ok(Self {
            data,
            layout: ViewLayout::new(parent_shape, parent_strides, ranges)?,
        })
    }

    pub(crate) fn full(data: &'a [T], parent_shape: &[usize], parent_strides: &[usize]) -> Self {
        Self {
            data,
            layout: ViewLayout::full(parent_shape, parent_strides),
        }
    }

    /// Per-dimension bounds in parent coordinates.
    #[inline]
    pub fn ranges(&self) -> &[SliceRange] {
        &self.layout.ranges
    }

    /// Shape of the array this view borrows from.
    #[inline]
    pub fn parent_shape(&self) -> &[usize] {
        &self.layout.parent_shape
    }

    /// Strides of the array this view borrows from.
    #[inline]
    pub fn parent_strides(&self) -> &[usize] {
        &self.layout.parent_strides
    }

    /// Sub-view; `specs` are relative to this view's shape.
    pub fn slice<S: AsRef<str>>(&self, specs: &[S]) -> Result<ArrayView<'a, T>, ArrayError> {
        Ok(ArrayView {
            data: self.data,
            layout: self.layout.narrow(specs)?,
        })
    }
}

impl<T: Scalar> ArrayAccess for ArrayView<'_, T> {
    type Elem = T;

    #[inline]
    fn shape(&self) -> &[usize] {
        &self.layout.shape
    }

    #[inline]
    fn buffer(&self) -> &[T] {
        self.data
    }

    #[inline]
    fn linear_offset(&self, indices: &[usize]) -> usize {
        self.layout.offset(indices)
    }

    fn enumerate_indices(&self) -> Indices {
        Indices::from_ranges(&self.layout.ranges)
    }
}

/// Mutable view of a sub-region of an array; writes alias the parent.
///
/// # Examples
///
/// ```
/// use mdarray::prelude::*;
///
/// let mut a: NdArray<f64> = NdArray::zeros(&[4, 4]).unwrap();
/// {
///     let mut v = a.slice_mut(&["2:", "2:"]).unwrap();
///     v.set_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// }
/// assert_eq!(a.get(&[2, 2]).unwrap(), 1.0);
/// assert_eq!(a.get(&[3, 3]).unwrap(), 4.0);
/// ```
#[derive(Debug)]
pub struct ArrayViewMut<'a, T: Scalar> {
    data: &'a mut [T],
    layout: ViewLayout,
}

impl<'a, T: Scalar> ArrayViewMut<'a, T> {
    /// Create a mutable view; see [`ArrayView::new`] for the errors.
    pub fn new(
        data: &'a mut [T],
        parent_shape: &[usize],
        parent_strides: &[usize],
        ranges: Vec<SliceRange>,
    ) -> Result<Self, ArrayError> {
        Ok(Self {
            data,
            layout: ViewLayout::new(parent_shape, parent_strides, ranges)?,
        })
    }

    pub(crate) fn full(
        data: &'a mut [T],
        parent_shape: &[usize],
        parent_strides: &[usize],
    ) -> Self {
        Self {
            data,
            layout: ViewLayout::full(parent_shape, parent_strides),
        }
    }

    /// Per-dimension bounds in parent coordinates.
    #[inline]
    pub fn ranges(&self) -> &[SliceRange] {
        &self.layout.ranges
    }

    /// Shape of the array this view borrows from.
    #[inline]
    pub fn parent_shape(&self) -> &[usize] {
        &self.layout.parent_shape
    }

    /// Strides of the array this view borrows from.
    #[inline]
    pub fn parent_strides(&self) -> &[usize] {
        &self.layout.parent_strides
    }

    /// Reborrow as an immutable view.
    pub fn view(&self) -> ArrayView<'_, T> {
        ArrayView {
            data: &*self.data,
            layout: self.layout.clone(),
        }
    }

    /// Mutable sub-view; `specs` are relative to this view's shape.
    pub fn slice_mut<S: AsRef<str>>(
        &mut self,
        specs: &[S],
    ) -> Result<ArrayViewMut<'_, T>, ArrayError> {
        let layout = self.layout.narrow(specs)?;
        Ok(ArrayViewMut {
            data: &mut *self.data,
            layout,
        })
    }
}

impl<T: Scalar> ArrayAccess for ArrayViewMut<'_, T> {
    type Elem = T;

    #[inline]
    fn shape(&self) -> &[usize] {
        &self.layout.shape
    }

    #[inline]
    fn buffer(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    fn linear_offset(&self, indices: &[usize]) -> usize {
        self.layout.offset(indices)
    }

    fn enumerate_indices(&self) -> Indices {
        Indices::from_ranges(&self.layout.ranges)
    }
}

impl<T: Scalar> ArrayAccessMut for ArrayViewMut<'_, T> {
    #[inline]
    fn buffer_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}
