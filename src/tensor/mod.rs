//! Tensor types and the strided index mapping
//!
//! This module provides the core `Tensor` type, a contiguous row-major `f64`
//! buffer interpreted through a [`Shape`], together with the two primitives
//! that translate between multi-indices and flat offsets.

mod core;
mod display;
mod index;
mod layout;
mod shape;

pub use self::core::Tensor;
pub use display::{display_matrix, UNSUPPORTED_RANK};
pub use index::MultiIndexIter;
pub use layout::{flat_offset, unravel, Layout, MultiIndex, Strides};
pub use shape::Shape;
