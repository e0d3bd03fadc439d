//! Core Tensor type

use super::layout::Layout;
use super::shape::Shape;
use crate::error::{Error, Result};

/// N-dimensional array of `f64` values
///
/// `Tensor` consists of:
/// - **Layout**: shape and row-major strides
/// - **Data**: a flat buffer of exactly `shape.numel()` elements
///
/// # Copy Semantics
///
/// Tensors never share storage. Every operation (`partial`, `reshape`,
/// `transpose`, ...) allocates a fresh buffer and leaves its inputs untouched,
/// so a tensor can be read from any number of threads at once.
///
/// # Example
///
/// ```
/// use gla::prelude::*;
///
/// let a = Tensor::arange(&[2, 3])?;
/// let t = a.transpose(&[1, 0])?;
/// assert_eq!(t.shape().as_slice(), &[3, 2]);
/// assert_eq!(t.data(), &[0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
/// # Ok::<(), gla::error::Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor {
    layout: Layout,
    data: Vec<f64>,
}

impl Tensor {
    /// Build a tensor from a buffer whose length already matches `shape`
    pub(crate) fn from_parts(data: Vec<f64>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.numel());
        Self {
            layout: Layout::contiguous(shape),
            data,
        }
    }

    /// Create a tensor from a flat row-major buffer
    ///
    /// Returns an error if the shape is invalid or `data.len()` does not equal
    /// the product of the `shape` dimensions.
    pub fn from_vec(data: Vec<f64>, shape: &[usize]) -> Result<Self> {
        let shape = Shape::new(shape)?;
        if data.len() != shape.numel() {
            return Err(Error::ElementCountMismatch {
                from: vec![data.len()],
                from_count: data.len(),
                to: shape.to_vec(),
                to_count: shape.numel(),
            });
        }
        Ok(Self::from_parts(data, shape))
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        Self::full(shape, 0.0)
    }

    /// Create a tensor filled with a single value
    pub fn full(shape: &[usize], value: f64) -> Result<Self> {
        let shape = Shape::new(shape)?;
        Ok(Self::from_parts(vec![value; shape.numel()], shape))
    }

    /// Create a tensor holding `0.0, 1.0, 2.0, ...` in row-major order
    pub fn arange(shape: &[usize]) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let data = (0..shape.numel()).map(|i| i as f64).collect();
        Ok(Self::from_parts(data, shape))
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &Shape {
        self.layout.shape()
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a valid shape holds at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consume the tensor and return its buffer
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Element at a multi-index
    pub fn get(&self, indices: &[usize]) -> Result<f64> {
        Ok(self.data[self.layout.index(indices)?])
    }
}

impl std::fmt::Debug for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape().as_slice())
            .field("data", &self.data)
            .finish()
    }
}
