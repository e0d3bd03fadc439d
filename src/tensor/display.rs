//! Text output for vectors and matrices

use super::core::Tensor;
use std::fmt;
use std::io;

/// Message written in place of tensors that are neither vectors nor matrices
pub const UNSUPPORTED_RANK: &str = "display_matrix: tensor must be 1D or 2D to display as matrix or vector";

/// Write a rank-1 or rank-2 tensor as text
///
/// A vector is written on one line, a matrix one row per line. Every value is
/// followed by a single space. Other ranks are reported, not rejected: the
/// condition is logged and [`UNSUPPORTED_RANK`] is written instead.
pub fn display_matrix<W: io::Write>(tensor: &Tensor, out: &mut W) -> io::Result<()> {
    match tensor.ndim() {
        1 | 2 => write!(out, "{}", MatrixText(tensor)),
        ndim => {
            log::warn!("display_matrix called on rank {ndim} tensor");
            writeln!(out, "{UNSUPPORTED_RANK}")
        }
    }
}

struct MatrixText<'a>(&'a Tensor);

impl fmt::Display for MatrixText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        let cols = *t.shape().last().unwrap_or(&1);
        for row in t.data().chunks(cols) {
            for v in row {
                write!(f, "{v} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ndim() {
            1 | 2 => MatrixText(self).fmt(f),
            _ => write!(f, "Tensor(shape={}, data={:?})", self.shape(), self.data()),
        }
    }
}
