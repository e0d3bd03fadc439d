//! Partial: copy a rectangular section out of a tensor
//!
//! The section is described per dimension by a half-open `start..end` range.
//! [`SliceSpec`] is the structured form; it also parses from the compact text
//! form `"0:2, 2:, :3, :"` (one comma-separated entry per dimension).

use crate::error::{Error, Result};
use crate::tensor::{MultiIndex, MultiIndexIter, Shape, Tensor};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Range along one dimension; a missing bound means the start or end of the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceRange {
    /// First included coordinate, `0` when `None`
    pub start: Option<usize>,
    /// First excluded coordinate, the dimension size when `None`
    pub end: Option<usize>,
}

impl SliceRange {
    /// The whole axis (`:`)
    pub const fn full() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Explicit `start:end`
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// `start:`
    pub const fn start_at(start: usize) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// `:end`
    pub const fn end_at(end: usize) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Resolve defaults against a dimension and check `start < end <= size`
    pub fn resolve(&self, dim: usize, size: usize) -> Result<Range<usize>> {
        let start = self.start.unwrap_or(0);
        let end = self.end.unwrap_or(size);
        if start >= end || end > size {
            return Err(Error::InvalidSlice {
                dim,
                start,
                end,
                size,
            });
        }
        Ok(start..end)
    }
}

impl From<Range<usize>> for SliceRange {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl fmt::Display for SliceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.start {
            write!(f, "{s}")?;
        }
        f.write_str(":")?;
        if let Some(e) = self.end {
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl FromStr for SliceRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| Error::slice_parse(&s, "expected 'start:end'"))?;
        let bound = |text: &str| -> Result<Option<usize>> {
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<usize>()
                .map(Some)
                .map_err(|e| Error::slice_parse(&s, format!("bad bound '{text}': {e}")))
        };
        Ok(Self {
            start: bound(start)?,
            end: bound(end)?,
        })
    }
}

/// One [`SliceRange`] per dimension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliceSpec(pub Vec<SliceRange>);

impl SliceSpec {
    /// Build a spec from ranges, outermost dimension first
    pub fn new(ranges: impl IntoIterator<Item = SliceRange>) -> Self {
        Self(ranges.into_iter().collect())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the spec has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve every entry against `shape`
    pub fn resolve(&self, shape: &[usize]) -> Result<Vec<Range<usize>>> {
        if self.0.len() != shape.len() {
            return Err(Error::DimensionMismatch {
                op: "partial",
                expected: shape.len(),
                got: self.0.len(),
            });
        }
        self.0
            .iter()
            .zip(shape)
            .enumerate()
            .map(|(d, (r, &size))| r.resolve(d, size))
            .collect()
    }
}

impl FromStr for SliceSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',').map(str::parse).collect::<Result<_>>().map(Self)
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

impl Tensor {
    /// Copy the section of `self` selected by `spec`
    ///
    /// The result has shape `end[d] - start[d]` per dimension and its element
    /// at `m` equals `self` at `m[d] + start[d]`.
    ///
    /// ```
    /// use gla::prelude::*;
    ///
    /// let a = Tensor::arange(&[3, 4])?;
    /// let p = a.partial(&SliceSpec::new([SliceRange::new(1, 3), SliceRange::start_at(2)]))?;
    /// assert_eq!(p.data(), &[6.0, 7.0, 10.0, 11.0]);
    /// # Ok::<(), gla::error::Error>(())
    /// ```
    pub fn partial(&self, spec: &SliceSpec) -> Result<Tensor> {
        let ranges = spec.resolve(self.shape())?;
        let out_shape: Shape = ranges.iter().map(|r| r.len()).collect();
        log::trace!("partial {} [{}] -> {}", self.shape(), spec, out_shape);

        let src = self.layout();
        let data = self.data();
        let mut out = Vec::with_capacity(out_shape.numel());
        let mut src_idx = MultiIndex::with_capacity(ranges.len());

        // Output is filled in row-major order, so pushing keeps offsets aligned
        for idx in MultiIndexIter::new(&out_shape) {
            src_idx.clear();
            src_idx.extend(idx.iter().zip(&ranges).map(|(&i, r)| i + r.start));
            out.push(data[src.offset_of(&src_idx)]);
        }

        Ok(Tensor::from_parts(out, out_shape))
    }

    /// [`partial`](Self::partial) with the text form, e.g. `"1:3, 2:"`
    pub fn partial_str(&self, spec: &str) -> Result<Tensor> {
        self.partial(&spec.parse()?)
    }
}
