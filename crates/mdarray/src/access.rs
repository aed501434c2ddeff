//! Capability traits shared by owned arrays and views.
//!
//! ```text
//! ArrayAccess      shape, buffer, offsets, get, enumerate, flatten
//! └── ArrayAccessMut   set, set_slice, assign, fill
//!
//! NdArray       contiguous buffer + strides
//! ArrayView     borrowed buffer + parent strides + slice ranges
//! ArrayViewMut  exclusively borrowed buffer + parent strides + slice ranges
//! ```
//!
//! Everything in [`crate::operations`] is written against these traits, so an
//! operation accepts an array and a view interchangeably.

use crate::array::NdArray;
use crate::error::ArrayError;
use crate::indices::Indices;
use crate::scalar::Scalar;

/// Read access to an n-dimensional collection of elements.
pub trait ArrayAccess {
    /// Element type.
    type Elem: Scalar;

    /// Logical shape.
    fn shape(&self) -> &[usize];

    /// Backing buffer that coordinates are translated into.
    ///
    /// For a view this is the parent's whole buffer.
    fn buffer(&self) -> &[Self::Elem];

    /// Buffer offset of a coordinate tuple, without validation.
    ///
    /// Callers must pass `ndim()` coordinates inside `shape()`.
    fn linear_offset(&self, indices: &[usize]) -> usize;

    /// Rank.
    #[inline]
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Number of logical elements.
    #[inline]
    fn len(&self) -> usize {
        self.shape().iter().product()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate a coordinate tuple and translate it to a buffer offset.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if `indices.len() != ndim()`
    /// - `IndexOutOfRange` if any coordinate is outside the logical shape
    fn find_index(&self, indices: &[usize]) -> Result<usize, ArrayError> {
        let shape = self.shape();
        if indices.len() != shape.len() {
            return Err(ArrayError::DimensionMismatch {
                expected: shape.len(),
                actual: indices.len(),
            });
        }
        for (dim, (&index, &size)) in indices.iter().zip(shape.iter()).enumerate() {
            if index >= size {
                return Err(ArrayError::IndexOutOfRange { index, dim, size });
            }
        }
        Ok(self.linear_offset(indices))
    }

    /// Read the element at `indices`.
    fn get(&self, indices: &[usize]) -> Result<Self::Elem, ArrayError> {
        let offset = self.find_index(indices)?;
        Ok(self.buffer()[offset])
    }

    /// Every coordinate tuple of the logical shape, in row-major order.
    fn enumerate_indices(&self) -> Indices {
        Indices::new(self.shape())
    }

    /// Elements in row-major logical order.
    fn values(&self) -> impl Iterator<Item = Self::Elem> + '_ {
        self.enumerate_indices()
            .map(move |indices| self.buffer()[self.linear_offset(&indices)])
    }

    /// Visit every element in row-major logical order.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Elem),
    {
        for value in self.values() {
            f(value);
        }
    }

    /// Copy the elements out in row-major logical order.
    fn flatten(&self) -> Vec<Self::Elem> {
        self.values().collect()
    }

    /// Materialize into a freshly owned row-major array.
    fn to_array(&self) -> NdArray<Self::Elem> {
        NdArray::from_raw_parts(self.flatten(), self.shape().to_vec())
    }
}

/// Write access on top of [`ArrayAccess`].
pub trait ArrayAccessMut: ArrayAccess {
    /// Mutable backing buffer.
    fn buffer_mut(&mut self) -> &mut [Self::Elem];

    /// Write `value` at `indices`.
    ///
    /// # Errors
    ///
    /// Same as [`ArrayAccess::find_index`].
    fn set(&mut self, indices: &[usize], value: Self::Elem) -> Result<(), ArrayError> {
        let offset = self.find_index(indices)?;
        self.buffer_mut()[offset] = value;
        Ok(())
    }

    /// Write `values[k]` to the k-th coordinate of [`ArrayAccess::enumerate_indices`].
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if `values.len() != len()`; nothing is written then.
    fn set_slice(&mut self, values: &[Self::Elem]) -> Result<(), ArrayError> {
        if values.len() != self.len() {
            return Err(ArrayError::LengthMismatch {
                expected: self.len(),
                actual: values.len(),
            });
        }
        for (indices, &value) in self.enumerate_indices().zip(values.iter()) {
            let offset = self.linear_offset(&indices);
            self.buffer_mut()[offset] = value;
        }
        Ok(())
    }

    /// Copy every element of a same-shaped source into `self`.
    ///
    /// # Errors
    ///
    /// `IncompatibleShapes` if the logical shapes differ.
    fn assign<S>(&mut self, source: &S) -> Result<(), ArrayError>
    where
        S: ArrayAccess<Elem = Self::Elem> + ?Sized,
        Self: Sized,
    {
        crate::operations::copy_into(self, source)
    }

    /// Overwrite every logical element with `value`.
    fn fill(&mut self, value: Self::Elem) {
        for indices in self.enumerate_indices() {
            let offset = self.linear_offset(&indices);
            self.buffer_mut()[offset] = value;
        }
    }
}
