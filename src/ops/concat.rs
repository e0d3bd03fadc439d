//! Concatenation along an arbitrary axis
//!
//! Tensors are stored contiguously in row-major order, so joining two tensors
//! along axis 0 is plain buffer concatenation: every element of `a` precedes
//! every element of `b`. Along any other axis the blocks of `a` and `b`
//! interleave with a stride.
//!
//! Rather than computing that strided insertion directly, the general case
//! swaps the concatenation axis into position 0, appends the two buffers and
//! swaps back. A swap of two axes is its own inverse, so the same permutation
//! serves for both transposes.

use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor};

/// Identity permutation of `0..ndim` with axes `0` and `axis` exchanged
///
/// The permutation is an involution: transposing by it twice restores the
/// original axis order.
pub fn concat_permutation(ndim: usize, axis: usize) -> Vec<usize> {
    let mut axes: Vec<usize> = (0..ndim).collect();
    axes.swap(0, axis);
    axes
}

fn validate_concat(a: &Tensor, b: &Tensor, axis: usize) -> Result<()> {
    let ndim = a.ndim();
    if b.ndim() != ndim {
        return Err(Error::RankMismatch {
            lhs: ndim,
            rhs: b.ndim(),
        });
    }
    if axis >= ndim {
        return Err(Error::InvalidAxis { axis, ndim });
    }
    let mismatch = a
        .shape()
        .iter()
        .zip(b.shape().iter())
        .enumerate()
        .any(|(d, (x, y))| d != axis && x != y);
    if mismatch {
        return Err(Error::shape_mismatch(a.shape(), b.shape()));
    }
    Ok(())
}

/// Axis-0 concatenation of already validated operands
fn append_outer(a: &Tensor, b: &Tensor) -> Tensor {
    let shape: Shape = std::iter::once(a.shape()[0] + b.shape()[0])
        .chain(a.shape()[1..].iter().copied())
        .collect();

    let mut data = Vec::with_capacity(a.len() + b.len());
    data.extend_from_slice(a.data());
    data.extend_from_slice(b.data());
    Tensor::from_parts(data, shape)
}

impl Tensor {
    /// Join `self` and `other` along `axis`
    ///
    /// Both tensors must have the same rank and agree on every dimension
    /// except `axis`.
    pub fn concat(&self, other: &Tensor, axis: usize) -> Result<Tensor> {
        validate_concat(self, other, axis)?;

        if axis == 0 {
            log::trace!("concat {} ++ {} on axis 0", self.shape(), other.shape());
            return Ok(append_outer(self, other));
        }

        let axes = concat_permutation(self.ndim(), axis);
        log::trace!(
            "concat {} ++ {} on axis {} via permutation {:?}",
            self.shape(),
            other.shape(),
            axis,
            axes
        );
        let joined = append_outer(&self.transpose(&axes)?, &other.transpose(&axes)?);
        joined.transpose(&axes)
    }
}
