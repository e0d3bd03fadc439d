//! Extend: replicate a tensor along a new trailing axis

use crate::error::{Error, Result};
use crate::parallel::{for_each_chunk, partition, Parallelism};
use crate::tensor::{Layout, Tensor};

impl Tensor {
    /// Add a trailing dimension of size `n` holding `n` copies of `self`
    ///
    /// For every original multi-index `m` and every `e < n`, the result at
    /// `(m, e)` equals `self` at `m`. Uses the default [`Parallelism`].
    pub fn extend(&self, n: usize) -> Result<Tensor> {
        self.extend_with(n, &Parallelism::default())
    }

    /// [`extend`](Self::extend) with an explicit worker configuration
    ///
    /// The source buffer is split into at most `workers` contiguous chunks of
    /// at least `min_chunk_len` elements. Each worker maps its source offsets
    /// to destination offsets independently and writes only its own region.
    pub fn extend_with(&self, n: usize, parallelism: &Parallelism) -> Result<Tensor> {
        if n < 1 {
            return Err(Error::invalid_argument(
                "n",
                "the new dimension must have at least one element",
            ));
        }

        let src = self.layout();
        let mut shape = self.shape().clone();
        shape.push(n);
        shape.validate()?;
        let dst = Layout::contiguous(shape);

        let len = self.len();
        let chunks = parallelism
            .workers()
            .min(len.div_ceil(parallelism.min_chunk_len()))
            .max(1);
        let ranges = partition(len, chunks);
        log::debug!(
            "extend {} -> {} in {} chunk(s)",
            self.shape(),
            dst.shape(),
            chunks
        );

        let data = self.data();
        let mut out = vec![0.0; dst.elem_count()];
        for_each_chunk(&mut out, n, &ranges, |range, chunk| {
            let base = range.start * n;
            for offset in range {
                let mut idx = src.unravel_unchecked(offset);
                idx.push(0);
                // Trailing axis has stride 1: the n copies are adjacent
                let at = dst.offset_of(&idx) - base;
                chunk[at..at + n].fill(data[offset]);
            }
        });

        Ok(Tensor::from_parts(out, dst.shape().clone()))
    }
}
