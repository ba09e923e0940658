//! Errors raised while validating a slice request.

use thiserror::Error;

/// Reasons a slice request is rejected. Every check runs before any output
/// storage is allocated, so an error never leaves a partial tensor behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// An axis in the request (sliced or decreased) is outside `[0, rank)`.
    #[error("axis {axis} is out of range for a tensor of rank {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// A stride of zero was given.
    #[error("stride for axis {axis} must be non-zero")]
    InvalidStride { axis: usize },

    /// A decrease axis did not resolve to exactly one element.
    #[error("cannot decrease axis {axis}: sliced extent is {extent}, expected 1")]
    ShapeMismatch { axis: usize, extent: usize },

    /// The request itself is malformed (mismatched array lengths, repeated axes).
    #[error("invalid slice request: {0}")]
    InvalidRequest(String),
}

/// Result type for slice operations.
pub type SliceResult<T> = Result<T, SliceError>;
