//! Layout: row-major strides and the coordinate/offset mapping
//!
//! Every tensor in gla is stored contiguously in row-major (C) order. The
//! element at multi-index `[i0, i1, ..., ik]` lives at flat offset
//! `i0 * strides[0] + i1 * strides[1] + ... + ik * strides[k]`, where
//! `strides[d]` is the product of `shape[d + 1..]`.
//!
//! [`flat_offset`] and [`unravel`] are the two primitives every shape
//! transform reduces to.

use super::shape::{Shape, STACK_DIMS};
use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;

/// Strides type: element offsets between consecutive elements along each dimension
/// NOTE: Strides are in ELEMENTS, not bytes
pub type Strides = SmallVec<[usize; STACK_DIMS]>;

/// Multi-index: one coordinate per dimension
pub type MultiIndex = SmallVec<[usize; STACK_DIMS]>;

/// Layout describes the memory layout of a contiguous tensor
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Shape: size along each dimension
    shape: Shape,
    /// Strides: offset (in elements) between consecutive elements along each dimension
    strides: Strides,
}

impl Layout {
    /// Create a contiguous (row-major/C-order) layout from a validated shape
    ///
    /// # Example
    /// ```
    /// use gla::tensor::{Layout, Shape};
    /// let layout = Layout::contiguous(Shape::new(&[2, 3, 4]).unwrap());
    /// assert_eq!(layout.strides(), &[12, 4, 1]);
    /// ```
    pub fn contiguous(shape: Shape) -> Self {
        let strides = compute_contiguous_strides(&shape);
        Self { shape, strides }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.numel()
    }

    /// Compute the flat offset for a multi-index, checking rank and bounds
    pub fn index(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.ndim()
            || indices.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d)
        {
            return Err(Error::index_out_of_bounds(indices, &self.shape));
        }
        Ok(self.offset_of(indices))
    }

    /// Flat offset of an index already known to be in bounds
    #[inline]
    pub(crate) fn offset_of(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(indices.len(), self.strides.len());
        indices
            .iter()
            .zip(self.strides.iter())
            .map(|(&i, &s)| i * s)
            .sum()
    }

    /// Recover the multi-index of a flat offset, most significant dimension first
    pub fn unravel(&self, offset: usize) -> Result<MultiIndex> {
        if offset >= self.elem_count() {
            return Err(Error::index_out_of_bounds(&[offset], &self.shape));
        }
        Ok(self.unravel_unchecked(offset))
    }

    #[inline]
    pub(crate) fn unravel_unchecked(&self, mut offset: usize) -> MultiIndex {
        let mut indices = MultiIndex::with_capacity(self.ndim());
        for &stride in self.strides.iter() {
            indices.push(offset / stride);
            offset %= stride;
        }
        indices
    }
}

/// Compute contiguous strides for a given shape (row-major order)
pub(crate) fn compute_contiguous_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::with_capacity(shape.len());
    let mut stride = 1usize;

    // Last dimension varies fastest
    for &dim in shape.iter().rev() {
        strides.push(stride);
        stride *= dim;
    }

    strides.reverse();
    strides
}

/// Element count of an unvalidated shape, `None` on overflow
fn checked_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Row-major flat offset of `indices` within `shape`
///
/// Fails with [`Error::IndexOutOfBounds`] when the index rank differs from the
/// shape rank, any coordinate is outside its dimension, or the shape's
/// element count overflows `usize`.
///
/// ```
/// assert_eq!(gla::tensor::flat_offset(&[1, 2], &[3, 4]).unwrap(), 6);
/// ```
pub fn flat_offset(indices: &[usize], shape: &[usize]) -> Result<usize> {
    if indices.len() != shape.len()
        || indices.iter().zip(shape).any(|(&i, &d)| i >= d)
        || checked_count(shape).is_none()
    {
        return Err(Error::index_out_of_bounds(indices, shape));
    }
    let strides = compute_contiguous_strides(shape);
    Ok(indices.iter().zip(strides.iter()).map(|(&i, &s)| i * s).sum())
}

/// Inverse of [`flat_offset`]: multi-index of `offset` within `shape`
///
/// ```
/// let idx = gla::tensor::unravel(6, &[3, 4]).unwrap();
/// assert_eq!(idx.as_slice(), &[1, 2]);
/// ```
pub fn unravel(offset: usize, shape: &[usize]) -> Result<MultiIndex> {
    match checked_count(shape) {
        Some(count) if !shape.is_empty() && offset < count => {}
        _ => return Err(Error::index_out_of_bounds(&[offset], shape)),
    }
    let strides = compute_contiguous_strides(shape);
    let mut rest = offset;
    Ok(strides
        .iter()
        .map(|&s| {
            let i = rest / s;
            rest %= s;
            i
        })
        .collect())
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?} }}",
            self.shape.as_slice(),
            self.strides.as_slice()
        )
    }
}
