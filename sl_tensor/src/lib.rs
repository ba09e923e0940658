//! # sl_tensor - Strided Slicing with Pluggable Backends
//!
//! This crate defines N-dimensional strided slicing over dense row-major
//! tensors: per-axis `(start, end, stride)` with negative indices, negative
//! strides, silent clamping of out-of-range bounds, and optional removal of
//! extent-1 axes ("decrease axis").
//!
//! ## Overview
//!
//! The core abstractions are:
//! - [`Shape`] and [`Strides`] - Tensor shape and memory layout
//! - [`TensorData`] - Trait for tensor storage
//! - [`Backend`] - Trait for backends that extract the selected elements
//! - [`SliceRequest`] - What to slice, per axis, and which axes to drop
//! - [`ResolvedRange`] - A per-axis range after clamping
//!
//! ## Example
//!
//! ```ignore
//! use sl_tensor::prelude::*;
//! use sl_backend_cpu::CpuBackend;
//!
//! let x = CpuBackend::from_vec((0..120).map(|v| v as f32).collect(), Shape::new(vec![10, 12]));
//!
//! // Rows 2..5, every second column from 2 to the end.
//! let req = SliceRequest::new().axis(0, 2, 5, 1).axis(1, 2, 1000, 2);
//! let y = slice::<CpuBackend>(&x, &req)?;
//! assert_eq!(y.shape().dims(), &[3, 5]);
//! ```

pub mod backend;
pub mod error;
pub mod normalize;
pub mod reduce;
pub mod request;
pub mod shape;
pub mod slice;
pub mod tensor;

pub use backend::Backend;
pub use error::{SliceError, SliceResult};
pub use normalize::{resolve, resolve_all, ResolvedRange};
pub use reduce::plan_decrease;
pub use request::{AxisSliceSpec, SliceRequest};
pub use shape::{Shape, Strides};
pub use slice::{output_shape, slice, SlicePlan};
pub use tensor::TensorData;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::Backend;
    pub use crate::error::{SliceError, SliceResult};
    pub use crate::normalize::ResolvedRange;
    pub use crate::request::{AxisSliceSpec, SliceRequest};
    pub use crate::shape::{Shape, Strides};
    pub use crate::slice::{output_shape, slice, SlicePlan};
    pub use crate::tensor::TensorData;
}
