//! Backend trait - abstraction over where slice extraction runs.

use crate::normalize::ResolvedRange;
use crate::shape::Shape;
use crate::tensor::TensorData;

/// Backend trait for tensor storage and slice extraction.
///
/// Methods receive inputs that [`crate::slice`] has already validated, so
/// they panic on contract violations instead of returning errors.
pub trait Backend: Clone + Send + Sync + 'static {
    /// The tensor type for this backend.
    type Tensor: TensorData;

    // === Creation ===

    /// Create a tensor of zeros with the given shape.
    fn zeros(shape: &Shape) -> Self::Tensor;

    /// Create a tensor from a flat row-major data vector and shape.
    fn from_vec(data: Vec<f32>, shape: Shape) -> Self::Tensor;

    // === Shape operations ===

    /// Copy out the elements selected by `ranges`, one range per input axis.
    /// The output shape is the per-axis `count`, in row-major order.
    fn strided_slice(x: &Self::Tensor, ranges: &[ResolvedRange]) -> Self::Tensor;

    /// Reshape to new shape (must have same numel).
    fn reshape(x: &Self::Tensor, shape: &Shape) -> Self::Tensor;
}
