//! Error types for gla

use thiserror::Error;

/// Result type alias using gla's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gla operations
///
/// Every variant is raised before any output buffer becomes visible to the
/// caller, so an `Err` never comes with a partially written tensor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Entry count of an argument disagrees with the tensor rank, or the
    /// inner dimensions of a matrix product disagree
    #[error("Dimension mismatch in {op}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// The operation that failed
        op: &'static str,
        /// Expected count or size
        expected: usize,
        /// Actual count or size
        got: usize,
    },

    /// Target shape holds a different number of elements than the source
    #[error("Cannot reshape {from:?} ({from_count} elements) into {to:?} ({to_count} elements)")]
    ElementCountMismatch {
        /// Source shape
        from: Vec<usize>,
        /// Source element count
        from_count: usize,
        /// Requested shape
        to: Vec<usize>,
        /// Requested element count
        to_count: usize,
    },

    /// Two operands have different ranks
    #[error("Rank mismatch: {lhs} vs {rhs}")]
    RankMismatch {
        /// Rank of the left operand
        lhs: usize,
        /// Rank of the right operand
        rhs: usize,
    },

    /// Operand has the wrong rank for the operation
    #[error("{op} requires rank {expected}, got rank {got}")]
    Rank {
        /// The operation that failed
        op: &'static str,
        /// Required rank
        expected: usize,
        /// Actual rank
        got: usize,
    },

    /// Axis permutation has the wrong number of entries
    #[error("Axis permutation has {got} entries for a tensor of rank {expected}")]
    AxisCountMismatch {
        /// Tensor rank
        expected: usize,
        /// Permutation length
        got: usize,
    },

    /// Axis is out of range or repeated
    #[error("Invalid axis {axis} for tensor with {ndim} dimensions")]
    InvalidAxis {
        /// The offending axis
        axis: usize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Non-concatenation dimensions disagree
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Resolved slice range is empty, inverted or out of bounds
    #[error("Invalid slice {start}:{end} for dimension {dim} of size {size}")]
    InvalidSlice {
        /// Dimension the range applies to
        dim: usize,
        /// Resolved start
        start: usize,
        /// Resolved end
        end: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Text slice specification could not be parsed
    #[error("Cannot parse slice '{spec}': {reason}")]
    SliceParse {
        /// The text that failed to parse
        spec: String,
        /// Reason for failure
        reason: String,
    },

    /// Shape is empty, has a zero-sized dimension, or holds more elements
    /// than can be allocated
    #[error("Invalid shape {shape:?}: dimensions must be positive and their product addressable")]
    InvalidShape {
        /// The rejected shape
        shape: Vec<usize>,
    },

    /// Multi-index component out of range, or index rank differs from shape rank
    #[error("Index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        /// The offending multi-index (or flat offset as a single entry)
        index: Vec<usize>,
        /// Shape it was checked against
        shape: Vec<usize>,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: &[usize], shape: &[usize]) -> Self {
        Self::IndexOutOfBounds {
            index: index.to_vec(),
            shape: shape.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    pub(crate) fn slice_parse(spec: &str, reason: impl Into<String>) -> Self {
        Self::SliceParse {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::shape_mismatch(&[2, 3], &[2, 4]);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected [2, 3], got [2, 4]"
        );

        let err = Error::InvalidSlice {
            dim: 1,
            start: 3,
            end: 2,
            size: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid slice 3:2 for dimension 1 of size 4"
        );
    }
}
