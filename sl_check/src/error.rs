//! Check failures.

use sl_tensor::SliceError;
use thiserror::Error;

/// Why a candidate/reference check failed.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request was rejected (by the candidate, or by both sides alike).
    #[error(transparent)]
    Slice(#[from] SliceError),

    /// One side accepted the request and the other rejected it, or they
    /// rejected it for different reasons.
    #[error("candidate returned {candidate}, reference returned {reference}")]
    Disagreement { candidate: String, reference: String },

    #[error("output shapes differ: candidate {candidate:?}, reference {reference:?}")]
    ShapeMismatch {
        candidate: Vec<usize>,
        reference: Vec<usize>,
    },

    #[error("value mismatch at flat index {index}: candidate={candidate}, reference={reference}")]
    ValueMismatch {
        index: usize,
        candidate: f32,
        reference: f32,
    },

    /// The case declared an expected shape that neither side produced.
    #[error("{0}")]
    Expectation(String),

    #[error("failed to parse cases: {0}")]
    Cases(#[from] serde_json::Error),

    #[error("failed to read cases: {0}")]
    Io(#[from] std::io::Error),
}
