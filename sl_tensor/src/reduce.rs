//! Axis reduction ("decrease axis") after slicing.

use std::collections::BTreeSet;

use crate::error::{SliceError, SliceResult};
use crate::shape::Shape;

/// Compute the shape left after removing `decrease` axes from `sliced`.
///
/// Each decrease axis must have extent 1. Removing every axis leaves `[1]`
/// rather than a scalar. With no decrease axes the shape is returned as is.
pub fn plan_decrease(sliced: &Shape, decrease: &BTreeSet<usize>) -> SliceResult<Shape> {
    if decrease.is_empty() {
        return Ok(sliced.clone());
    }

    let rank = sliced.ndim();
    let mut dims = Vec::with_capacity(rank);
    for (axis, &extent) in sliced.dims().iter().enumerate() {
        if decrease.contains(&axis) {
            if extent != 1 {
                return Err(SliceError::ShapeMismatch { axis, extent });
            }
        } else {
            dims.push(extent);
        }
    }
    if let Some(&axis) = decrease.iter().find(|&&a| a >= rank) {
        return Err(SliceError::InvalidAxis { axis, rank });
    }

    if dims.is_empty() {
        dims.push(1);
    }
    Ok(Shape::new(dims))
}
