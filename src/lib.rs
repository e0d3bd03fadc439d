//! # gla
//!
//! **A minimal N-dimensional `f64` tensor engine.**
//!
//! A [`Tensor`](tensor::Tensor) is a contiguous row-major buffer interpreted
//! through a shape. On top of the strided index mapping ([`tensor::flat_offset`]
//! and [`tensor::unravel`]) gla provides slicing, reshape, transpose,
//! concatenation, dimension extension and 2D matrix multiplication.
//!
//! ## Design
//!
//! - **Copy semantics**: every operation returns a new tensor with its own
//!   buffer; nothing aliases or mutates its inputs
//! - **Explicit errors**: invalid arguments produce an [`error::Error`], never a panic
//! - **Bounded parallelism**: `matmul` and `extend` split their output into a
//!   fixed number of disjoint chunks (see [`parallel::Parallelism`])
//!
//! ## Quick Start
//!
//! ```
//! use gla::prelude::*;
//!
//! let a = Tensor::arange(&[3, 4])?;
//! let p = a.partial_str("1:3, 2:")?;
//! assert_eq!(p.data(), &[6.0, 7.0, 10.0, 11.0]);
//!
//! let m = a.matmul(&a.transpose(&[1, 0])?)?;
//! assert_eq!(m.shape().as_slice(), &[3, 3]);
//! # Ok::<(), gla::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): run `matmul`/`extend` chunks on the rayon thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ops;
pub mod parallel;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::ops::{augment_matrix, SliceRange, SliceSpec};
    pub use crate::parallel::Parallelism;
    pub use crate::tensor::{display_matrix, flat_offset, unravel, Shape, Tensor};
}
