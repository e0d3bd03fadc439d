//! Shape type: dimensions of a tensor

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// Largest element count whose `f64` buffer can be allocated
const MAX_NUMEL: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Stack allocation threshold for dimensions
/// Most tensors have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor, outermost first
///
/// A shape handed to a [`Tensor`](crate::tensor::Tensor) is always validated:
/// at least one dimension, every dimension positive, and an element count
/// that fits an allocatable `f64` buffer.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// Create a validated shape from dimensions.
    pub fn new(dims: &[usize]) -> Result<Self> {
        let shape: Self = dims.iter().copied().collect();
        shape.validate()?;
        Ok(shape)
    }

    /// Reject empty shapes, zero-sized dimensions and element counts that
    /// overflow or exceed the largest allocatable buffer.
    pub fn validate(&self) -> Result<()> {
        let count = self
            .0
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim));
        match count {
            Some(n) if !self.0.is_empty() && n > 0 && n <= MAX_NUMEL => Ok(()),
            _ => Err(Error::InvalidShape {
                shape: self.0.to_vec(),
            }),
        }
    }

    /// Push a dimension.
    pub fn push(&mut self, dim: usize) {
        self.0.push(dim);
    }

    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of dimensions in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements.
    ///
    /// Does not check for overflow; call it on validated shapes only.
    #[inline]
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.as_slice())
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
