//! Row-major coordinate enumeration.

use crate::slice::SliceRange;
use std::iter::FusedIterator;

/// Lazy iterator over every coordinate tuple of a shape, last dimension fastest.
///
/// Cloning an `Indices` restarts the enumeration from wherever the clone was
/// taken, so an untouched value can be iterated any number of times.
///
/// # Examples
///
/// ```
/// use mdarray::Indices;
///
/// let all: Vec<_> = Indices::new(&[2, 2]).collect();
/// assert_eq!(all, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indices {
    extents: Vec<usize>,
    current: Option<Vec<usize>>,
    remaining: usize,
}

impl Indices {
    /// Enumerate coordinates of `shape`.
    ///
    /// An empty shape, or one with a zero-length dimension, yields nothing.
    pub fn new(shape: &[usize]) -> Self {
        let remaining = if shape.is_empty() {
            0
        } else {
            shape.iter().product()
        };
        Self {
            extents: shape.to_vec(),
            current: (remaining > 0).then(|| vec![0; shape.len()]),
            remaining,
        }
    }

    /// Enumerate coordinates inside per-dimension ranges.
    ///
    /// Coordinates are relative to each range's start, so they index a view
    /// over those ranges directly.
    pub fn from_ranges(ranges: &[SliceRange]) -> Self {
        let extents: Vec<usize> = ranges.iter().map(SliceRange::len).collect();
        Self::new(&extents)
    }

    /// Extents being enumerated.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.extents
    }
}

impl Iterator for Indices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let item = self.current.clone()?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.current = None;
        } else if let Some(current) = self.current.as_mut() {
            for d in (0..self.extents.len()).rev() {
                current[d] += 1;
                if current[d] < self.extents[d] {
                    break;
                }
                current[d] = 0;
            }
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}

/// Enumerate every coordinate of `shape` in row-major order.
pub fn indices(shape: &[usize]) -> Indices {
    Indices::new(shape)
}
