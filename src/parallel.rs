//! Parallelism configuration and static work partitioning
//!
//! Matmul and Extend split their output into a fixed number of contiguous,
//! non-overlapping chunks. Each chunk is written by exactly one worker, so no
//! locking is needed on the output buffer; the caller blocks until every
//! worker has joined.
//!
//! With the `rayon` feature (default) chunks run on the rayon thread pool.
//! Without it the same chunks are computed sequentially, in order.

use crate::error::{Error, Result};
use std::ops::Range;

/// Default number of workers, independent of problem size
pub const DEFAULT_WORKERS: usize = 4;

/// Default minimum number of source elements per Extend chunk
pub const DEFAULT_MIN_CHUNK_LEN: usize = 1024;

/// Worker configuration for the parallel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parallelism {
    workers: usize,
    min_chunk_len: usize,
}

impl Default for Parallelism {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
        }
    }
}

impl Parallelism {
    /// Configuration with `workers` chunks and the default minimum chunk length
    pub fn new(workers: usize) -> Result<Self> {
        Self::default().with_workers(workers)
    }

    /// Set the worker count
    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::invalid_argument(
                "workers",
                "at least one worker is required",
            ));
        }
        self.workers = workers;
        Ok(self)
    }

    /// Set the minimum chunk length used by Extend
    ///
    /// Zero is treated as one.
    pub fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len.max(1);
        self
    }

    /// Number of workers
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Minimum source elements per Extend chunk
    #[inline]
    pub fn min_chunk_len(&self) -> usize {
        self.min_chunk_len
    }
}

/// Split `0..total` into exactly `workers` contiguous ranges
///
/// Every range but the last has `total / workers` items; the last one also
/// takes the remainder. When `total < workers` the leading ranges are empty.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = total / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { total } else { start + chunk };
            start..end
        })
        .collect()
}

/// Run `f` once per range, handing it the matching disjoint slice of `out`
///
/// `unit` is the number of output elements per item of a range (a row width
/// for Matmul, the replication count for Extend). Ranges must be contiguous,
/// ascending and cover exactly `out.len() / unit` items.
pub(crate) fn for_each_chunk<F>(out: &mut [f64], unit: usize, ranges: &[Range<usize>], f: F)
where
    F: Fn(Range<usize>, &mut [f64]) + Sync,
{
    let mut parts = Vec::with_capacity(ranges.len());
    let mut rest = out;
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * unit);
        parts.push((range.clone(), head));
        rest = tail;
    }
    debug_assert!(rest.is_empty());

    #[cfg(feature = "rayon")]
    {
        let f = &f;
        rayon::scope(|s| {
            for (range, chunk) in parts {
                s.spawn(move |_| f(range, chunk));
            }
        });
    }

    #[cfg(not(feature = "rayon"))]
    for (range, chunk) in parts {
        f(range, chunk);
    }
}
