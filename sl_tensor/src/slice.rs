//! The strided slice operation.

use log::debug;

use crate::backend::Backend;
use crate::error::SliceResult;
use crate::normalize::{resolve_all, ResolvedRange};
use crate::reduce::plan_decrease;
use crate::request::SliceRequest;
use crate::shape::Shape;
use crate::tensor::TensorData;

/// A validated slice: resolved ranges plus the shapes before and after
/// axis reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlicePlan {
    pub ranges: Vec<ResolvedRange>,
    pub sliced_shape: Shape,
    pub output_shape: Shape,
}

impl SlicePlan {
    /// Validate `request` against `shape` and work out the output shape.
    pub fn new(shape: &Shape, request: &SliceRequest) -> SliceResult<Self> {
        let ranges = resolve_all(shape, request)?;
        let sliced_shape = Shape::new(ranges.iter().map(|r| r.count).collect());
        let output_shape = plan_decrease(&sliced_shape, request.decrease_axes())?;
        Ok(SlicePlan {
            ranges,
            sliced_shape,
            output_shape,
        })
    }
}

/// Final output shape of slicing a tensor of `shape` with `request`.
pub fn output_shape(shape: &Shape, request: &SliceRequest) -> SliceResult<Shape> {
    SlicePlan::new(shape, request).map(|plan| plan.output_shape)
}

/// Slice `x` according to `request` on backend `B`.
///
/// The input is never modified; the result owns fresh storage. All checks
/// run before the backend is called.
pub fn slice<B: Backend>(x: &B::Tensor, request: &SliceRequest) -> SliceResult<B::Tensor> {
    if request.is_identity() {
        return Ok(x.clone());
    }

    let plan = SlicePlan::new(x.shape(), request)?;
    debug!(
        "slice {} -> {} (decreased to {})",
        x.shape(),
        plan.sliced_shape,
        plan.output_shape
    );

    let out = B::strided_slice(x, &plan.ranges);
    if plan.output_shape == plan.sliced_shape {
        Ok(out)
    } else {
        Ok(B::reshape(&out, &plan.output_shape))
    }
}
