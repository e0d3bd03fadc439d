//! Reshape and Transpose

use crate::error::{Error, Result};
use crate::tensor::{Layout, MultiIndex, MultiIndexIter, Shape, Tensor};

/// Check that `axes` is a permutation of `0..ndim`
pub fn validate_permutation(axes: &[usize], ndim: usize) -> Result<()> {
    if axes.len() != ndim {
        return Err(Error::AxisCountMismatch {
            expected: ndim,
            got: axes.len(),
        });
    }
    let mut seen = vec![false; ndim];
    for &axis in axes {
        if axis >= ndim || seen[axis] {
            return Err(Error::InvalidAxis { axis, ndim });
        }
        seen[axis] = true;
    }
    Ok(())
}

impl Tensor {
    /// Copy the buffer into a tensor of a different shape
    ///
    /// Row-major storage makes any shape with the same element count
    /// index-compatible, so the data is copied verbatim.
    pub fn reshape(&self, shape: &[usize]) -> Result<Tensor> {
        let new_shape = Shape::new(shape)?;
        if new_shape.numel() != self.len() {
            return Err(Error::ElementCountMismatch {
                from: self.shape().to_vec(),
                from_count: self.len(),
                to: new_shape.to_vec(),
                to_count: new_shape.numel(),
            });
        }
        log::trace!("reshape {} -> {}", self.shape(), new_shape);
        Ok(Tensor::from_parts(self.data().to_vec(), new_shape))
    }

    /// Reorder axes: output dimension `i` is input dimension `axes[i]`
    ///
    /// Modeled after NumPy's `transpose`: a `[2, 3, 4]` tensor permuted by
    /// `[2, 0, 1]` has shape `[4, 2, 3]`.
    pub fn transpose(&self, axes: &[usize]) -> Result<Tensor> {
        validate_permutation(axes, self.ndim())?;

        let src_shape = self.shape();
        let dst = Layout::contiguous(axes.iter().map(|&a| src_shape[a]).collect());
        log::trace!("transpose {} by {:?} -> {}", src_shape, axes, dst.shape());

        // Walk the source in storage order and scatter into the destination
        let mut out = vec![0.0; self.len()];
        let mut dst_idx = MultiIndex::with_capacity(axes.len());
        for (&value, src_idx) in self.data().iter().zip(MultiIndexIter::new(src_shape)) {
            dst_idx.clear();
            dst_idx.extend(axes.iter().map(|&a| src_idx[a]));
            out[dst.offset_of(&dst_idx)] = value;
        }

        Ok(Tensor::from_parts(out, dst.shape().clone()))
    }
}
