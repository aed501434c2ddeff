//! Slice specifications and their resolution against a shape.
//!
//! A slice is described per dimension by a short token:
//!
//! | token  | meaning                 |
//! |--------|-------------------------|
//! | `"i"`  | `[i, min(i + 1, dim))`  |
//! | `":"`  | `[0, dim)`              |
//! | `"a:b"`| `[a, b)`, either side optional (`"a:"`, `":b"`) |
//!
//! Whitespace inside a token is ignored.

use crate::error::ArrayError;
use std::fmt;
use std::str::FromStr;

/// Resolved half-open bounds `[start, end)` along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceRange {
    pub start: usize,
    pub end: usize,
}

impl SliceRange {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The whole of a dimension of size `dim`.
    #[inline]
    pub const fn full(dim: usize) -> Self {
        Self { start: 0, end: dim }
    }

    /// Number of positions covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One parsed slice token, not yet checked against a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceSpec {
    /// A single position.
    Index(usize),
    /// The whole dimension.
    Full,
    /// A bounded range; a missing side defaults to the dimension edge.
    Range {
        start: Option<usize>,
        end: Option<usize>,
    },
}

impl SliceSpec {
    /// Resolve against a dimension of size `dim`.
    ///
    /// # Errors
    ///
    /// `InvalidSliceSpec` if the resolved start is not below the end, or the
    /// end exceeds `dim`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdarray::{SliceRange, SliceSpec};
    ///
    /// let spec: SliceSpec = "2:".parse().unwrap();
    /// assert_eq!(spec.resolve(4).unwrap(), SliceRange::new(2, 4));
    /// assert!(spec.resolve(2).is_err());
    /// ```
    pub fn resolve(&self, dim: usize) -> Result<SliceRange, ArrayError> {
        let (start, end) = match *self {
            SliceSpec::Index(i) => (i, i.saturating_add(1).min(dim)),
            SliceSpec::Full => (0, dim),
            SliceSpec::Range { start, end } => (start.unwrap_or(0), end.unwrap_or(dim)),
        };
        if start >= end {
            return Err(ArrayError::InvalidSliceSpec {
                spec: self.to_string(),
                reason: format!("start {start} must be less than end {end}"),
            });
        }
        if end > dim {
            return Err(ArrayError::InvalidSliceSpec {
                spec: self.to_string(),
                reason: format!("end {end} exceeds dimension size {dim}"),
            });
        }
        Ok(SliceRange::new(start, end))
    }
}

impl FromStr for SliceSpec {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut parts = token.split(':');
        let first = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => Ok(SliceSpec::Index(parse_bound(s, first)?)),
            (Some(second), None) => {
                let start = parse_optional_bound(s, first)?;
                let end = parse_optional_bound(s, second)?;
                match (start, end) {
                    (None, None) => Ok(SliceSpec::Full),
                    _ => Ok(SliceSpec::Range { start, end }),
                }
            }
            (Some(_), Some(_)) => Err(ArrayError::InvalidSliceSpec {
                spec: s.to_string(),
                reason: "expected at most one ':'".to_string(),
            }),
        }
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceSpec::Index(i) => write!(f, "{i}"),
            SliceSpec::Full => write!(f, ":"),
            SliceSpec::Range { start, end } => {
                if let Some(start) = start {
                    write!(f, "{start}")?;
                }
                write!(f, ":")?;
                if let Some(end) = end {
                    write!(f, "{end}")?;
                }
                Ok(())
            }
        }
    }
}

fn parse_bound(spec: &str, text: &str) -> Result<usize, ArrayError> {
    text.parse::<usize>()
        .map_err(|_| ArrayError::InvalidSliceSpec {
            spec: spec.to_string(),
            reason: format!("{text:?} is not a non-negative integer"),
        })
}

fn parse_optional_bound(spec: &str, text: &str) -> Result<Option<usize>, ArrayError> {
    if text.is_empty() {
        Ok(None)
    } else {
        parse_bound(spec, text).map(Some)
    }
}

/// Resolve one spec per dimension of `shape`.
///
/// # Errors
///
/// `DimensionMismatch` if the number of specs differs from the rank, or any
/// error from [`SliceSpec::resolve`].
pub fn resolve_slices(shape: &[usize], specs: &[SliceSpec]) -> Result<Vec<SliceRange>, ArrayError> {
    if specs.len() != shape.len() {
        return Err(ArrayError::DimensionMismatch {
            expected: shape.len(),
            actual: specs.len(),
        });
    }
    specs
        .iter()
        .zip(shape.iter())
        .map(|(spec, &dim)| spec.resolve(dim))
        .collect()
}

/// Parse and resolve one textual token per dimension of `shape`.
///
/// # Example
///
/// ```
/// use mdarray::{SliceRange, parse_slices};
///
/// let ranges = parse_slices(&[4, 4], &[":", "2:"]).unwrap();
/// assert_eq!(ranges, vec![SliceRange::new(0, 4), SliceRange::new(2, 4)]);
/// ```
pub fn parse_slices<S: AsRef<str>>(
    shape: &[usize],
    specs: &[S],
) -> Result<Vec<SliceRange>, ArrayError> {
    let parsed = specs
        .iter()
        .map(|s| s.as_ref().parse::<SliceSpec>())
        .collect::<Result<Vec<_>, _>>()?;
    resolve_slices(shape, &parsed)
}
