//! Tensor operations
//!
//! Each operation is an inherent method on [`Tensor`](crate::tensor::Tensor)
//! that validates its arguments, allocates a fresh output buffer and returns
//! it. Inputs are never modified.
//!
//! - [`slice`]: `partial` (section copy) and the slice specification types
//! - [`shape`]: `reshape`, `transpose`
//! - [`concat`]: `concat` along any axis
//! - [`extend`]: `extend` along a new trailing axis (parallel)
//! - [`matmul`]: `matmul` (parallel) and [`augment_matrix`]

pub mod concat;
pub mod extend;
pub mod matmul;
pub mod shape;
pub mod slice;

pub use concat::concat_permutation;
pub use matmul::{augment_matrix, MatmulParams};
pub use shape::validate_permutation;
pub use slice::{SliceRange, SliceSpec};
