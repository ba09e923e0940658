//! Index normalization: raw `(start, end, stride)` to a clamped range.
//!
//! Each axis is resolved on its own. For a positive stride the bounds live in
//! `[0, dim]`; for a negative stride they live in `[-1, dim - 1]`, so a
//! descending walk can stop just past index 0. Negative values are first
//! shifted by `dim`, then clamped into those bounds.

use log::trace;

use crate::error::{SliceError, SliceResult};
use crate::request::{AxisSliceSpec, SliceRequest};
use crate::shape::Shape;

/// A normalized per-axis range: `count` indices starting at `begin`,
/// stepping by `stride`. `end` is the exclusive bound after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedRange {
    pub begin: i64,
    pub end: i64,
    pub stride: i64,
    pub count: usize,
}

impl ResolvedRange {
    /// Pass-through range covering a whole axis.
    pub fn full(dim: usize) -> Self {
        ResolvedRange {
            begin: 0,
            end: dim as i64,
            stride: 1,
            count: dim,
        }
    }

    /// Source index of the `i`-th selected element.
    pub fn index(&self, i: usize) -> usize {
        debug_assert!(i < self.count);
        (self.begin + i as i64 * self.stride) as usize
    }

    /// All selected source indices, in output order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).map(move |i| self.index(i))
    }
}

/// Resolve one axis of size `dim`.
///
/// Fails only for a zero stride; every other out-of-range value is clamped.
pub fn resolve(axis: usize, dim: usize, spec: &AxisSliceSpec) -> SliceResult<ResolvedRange> {
    let AxisSliceSpec { start, end, stride } = *spec;
    if stride == 0 {
        return Err(SliceError::InvalidStride { axis });
    }

    let dim = dim as i64;
    let (lower, upper) = if stride > 0 { (0, dim) } else { (-1, dim - 1) };
    let clamp = |raw: i64| {
        let shifted = if raw < 0 { raw.saturating_add(dim) } else { raw };
        shifted.clamp(lower, upper)
    };

    let begin = clamp(start);
    let end = clamp(end);
    let span = if stride > 0 { end - begin } else { begin - end };
    let count = ceil_div(span, stride.unsigned_abs());

    let range = ResolvedRange {
        begin,
        end,
        stride,
        count,
    };
    trace!("axis {axis}: dim={dim} {spec:?} -> {range:?}");
    Ok(range)
}

/// Resolve every axis of `shape` against `request`.
///
/// The result has one entry per input axis; axes the request does not
/// mention get [`ResolvedRange::full`]. Sliced and decreased axes are both
/// checked against the rank here.
pub fn resolve_all(shape: &Shape, request: &SliceRequest) -> SliceResult<Vec<ResolvedRange>> {
    let rank = shape.ndim();
    for (axis, _) in request.sliced_axes() {
        if axis >= rank {
            return Err(SliceError::InvalidAxis { axis, rank });
        }
    }
    if let Some(&axis) = request.decrease_axes().iter().find(|&&a| a >= rank) {
        return Err(SliceError::InvalidAxis { axis, rank });
    }

    (0..rank)
        .map(|axis| match request.spec(axis) {
            Some(spec) => resolve(axis, shape.dim(axis), spec),
            None => Ok(ResolvedRange::full(shape.dim(axis))),
        })
        .collect()
}

/// `max(0, ceil(num / den))` for a nonzero `den`.
fn ceil_div(num: i64, den: u64) -> usize {
    if num <= 0 {
        0
    } else {
        (num as u64).div_ceil(den) as usize
    }
}
