//! TensorData trait - read access to backend tensor storage.

use crate::shape::{Shape, Strides};

/// Core trait for tensor data storage.
/// Tensors are immutable once built; operations return fresh storage.
pub trait TensorData: Clone + Send + Sync + 'static {
    /// Get the shape of this tensor.
    fn shape(&self) -> &Shape;

    /// Get the strides of this tensor.
    fn strides(&self) -> &Strides;

    /// Get the total number of elements.
    fn numel(&self) -> usize {
        self.shape().numel()
    }

    /// Check if this is a scalar (0-dim tensor).
    fn is_scalar(&self) -> bool {
        self.shape().is_scalar()
    }

    /// Check if data is contiguous in memory.
    fn is_contiguous(&self) -> bool {
        self.strides() == &self.shape().contiguous_strides()
    }

    /// Get data as a contiguous f32 slice in row-major order.
    fn as_slice(&self) -> &[f32];
}
