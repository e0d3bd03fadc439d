//! Matrix multiplication
//!
//! Dense `C[M,N] = A[M,K] @ B[K,N]` using the plain dot-product formula. The
//! rows of `C` are split into a fixed number of contiguous chunks, one worker
//! per chunk; every worker writes only its own rows.

use crate::error::{Error, Result};
use crate::parallel::{for_each_chunk, partition, Parallelism};
use crate::tensor::{Shape, Tensor};
use std::ops::Range;

/// Matrix multiplication parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatmulParams {
    /// Number of rows in A (M)
    pub m: usize,
    /// Number of columns in A / rows in B (K)
    pub k: usize,
    /// Number of columns in B (N)
    pub n: usize,
}

impl MatmulParams {
    /// Validate operand shapes: both rank 2, inner dimensions equal
    pub fn from_shapes(a_shape: &[usize], b_shape: &[usize]) -> Result<Self> {
        for shape in [a_shape, b_shape] {
            if shape.len() != 2 {
                return Err(Error::Rank {
                    op: "matmul",
                    expected: 2,
                    got: shape.len(),
                });
            }
        }
        if a_shape[1] != b_shape[0] {
            return Err(Error::DimensionMismatch {
                op: "matmul",
                expected: a_shape[1],
                got: b_shape[0],
            });
        }
        Ok(Self {
            m: a_shape[0],
            k: a_shape[1],
            n: b_shape[1],
        })
    }

    /// Output shape `[M, N]`
    pub fn output_shape(&self) -> Shape {
        Shape::from([self.m, self.n])
    }
}

/// Rows `rows` of `A @ B`, written into `out` (row-major, `n` columns)
fn matmul_rows(a: &[f64], b: &[f64], p: &MatmulParams, rows: Range<usize>, out: &mut [f64]) {
    let first = rows.start;
    for row in rows {
        for col in 0..p.n {
            let mut sum = 0.0;
            for kk in 0..p.k {
                sum += a[row * p.k + kk] * b[kk * p.n + col];
            }
            out[(row - first) * p.n + col] = sum;
        }
    }
}

impl Tensor {
    /// Matrix product of two rank-2 tensors with the default [`Parallelism`]
    ///
    /// ```
    /// use gla::prelude::*;
    ///
    /// let a = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3])?;
    /// let b = Tensor::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], &[3, 2])?;
    /// assert_eq!(a.matmul(&b)?.data(), &[58.0, 64.0, 139.0, 154.0]);
    /// # Ok::<(), gla::error::Error>(())
    /// ```
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor> {
        self.matmul_with(other, &Parallelism::default())
    }

    /// [`matmul`](Self::matmul) with an explicit worker count
    ///
    /// Exactly `workers` chunks are scheduled whatever the size of the output;
    /// leftover rows go to the last chunk.
    pub fn matmul_with(&self, other: &Tensor, parallelism: &Parallelism) -> Result<Tensor> {
        let params = MatmulParams::from_shapes(self.shape(), other.shape())?;
        let ranges = partition(params.m, parallelism.workers());
        log::debug!(
            "matmul {} @ {} with row chunks {:?}",
            self.shape(),
            other.shape(),
            ranges
        );

        let (a, b) = (self.data(), other.data());
        let mut out = vec![0.0; params.m * params.n];
        for_each_chunk(&mut out, params.n, &ranges, |rows, chunk| {
            matmul_rows(a, b, &params, rows, chunk)
        });

        Ok(Tensor::from_parts(out, params.output_shape()))
    }
}

/// Append the columns of `b` to `a`, e.g. to build `[A | b]` for elimination
///
/// Both operands must be matrices with the same number of rows.
pub fn augment_matrix(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    for t in [a, b] {
        if t.ndim() != 2 {
            return Err(Error::Rank {
                op: "augment_matrix",
                expected: 2,
                got: t.ndim(),
            });
        }
    }
    if a.shape()[0] != b.shape()[0] {
        return Err(Error::DimensionMismatch {
            op: "augment_matrix",
            expected: a.shape()[0],
            got: b.shape()[0],
        });
    }
    a.concat(b, 1)
}
