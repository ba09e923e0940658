//! # sl_reference - Reference evaluator for strided slicing
//!
//! An independent implementation of the framework strided-slice convention,
//! used to cross-check `sl_tensor::slice`. It does not use the
//! `sl_tensor` normalizer: each axis is turned into a half-open window
//! `[left, right)` and walked from the near edge in steps of `|stride|`.
//! Only the request and error types are shared.

use log::trace;
use sl_tensor::{SliceError, SliceRequest, SliceResult};

/// Result of a reference slice: flat row-major data and its dims.
#[derive(Debug, Clone, PartialEq)]
pub struct RefOutput {
    pub data: Vec<f32>,
    pub dims: Vec<usize>,
}

/// Source indices selected on one axis of size `dim`.
pub fn axis_indices(dim: usize, start: i64, end: i64, stride: i64) -> Vec<usize> {
    let dim = dim as i64;
    let mut s = if start < 0 { start.saturating_add(dim) } else { start };
    let mut e = if end < 0 { end.saturating_add(dim) } else { end };

    // Descending slices cover (e, s]; shift to the half-open [e + 1, s + 1).
    if stride < 0 {
        s = s.saturating_add(1);
        e = e.saturating_add(1);
    }
    if (stride > 0 && s > e) || (stride < 0 && s < e) {
        return vec![];
    }

    let left = s.min(e).max(0);
    let right = s.max(e).min(dim);
    if right <= left {
        return vec![];
    }

    let count = ((right - left) as u64).div_ceil(stride.unsigned_abs());
    let first = if stride > 0 { left } else { right - 1 };
    (0..count as i64).map(|k| (first + k * stride) as usize).collect()
}

/// Slice `data` (row-major, shaped `dims`) per `request`.
pub fn reference_slice(data: &[f32], dims: &[usize], request: &SliceRequest) -> SliceResult<RefOutput> {
    let rank = dims.len();
    assert_eq!(
        data.len(),
        dims.iter().product::<usize>(),
        "data length does not match dims {dims:?}"
    );

    if let Some((axis, _)) = request.sliced_axes().find(|&(a, _)| a >= rank) {
        return Err(SliceError::InvalidAxis { axis, rank });
    }
    if let Some(&axis) = request.decrease_axes().iter().find(|&&a| a >= rank) {
        return Err(SliceError::InvalidAxis { axis, rank });
    }

    let mut per_axis: Vec<Vec<usize>> = Vec::with_capacity(rank);
    for (axis, &dim) in dims.iter().enumerate() {
        let indices = match request.spec(axis) {
            Some(spec) if spec.stride == 0 => return Err(SliceError::InvalidStride { axis }),
            Some(spec) => axis_indices(dim, spec.start, spec.end, spec.stride),
            None => (0..dim).collect(),
        };
        per_axis.push(indices);
    }

    let sliced: Vec<usize> = per_axis.iter().map(Vec::len).collect();
    let mut out_dims = Vec::new();
    for (axis, &extent) in sliced.iter().enumerate() {
        if request.decrease_axes().contains(&axis) {
            if extent != 1 {
                return Err(SliceError::ShapeMismatch { axis, extent });
            }
        } else {
            out_dims.push(extent);
        }
    }
    if out_dims.is_empty() && !request.decrease_axes().is_empty() {
        out_dims.push(1);
    }

    let mut src_strides = vec![1usize; rank];
    for a in (0..rank.saturating_sub(1)).rev() {
        src_strides[a] = src_strides[a + 1] * dims[a + 1];
    }

    let mut out = Vec::with_capacity(sliced.iter().product());
    gather(data, &per_axis, &src_strides, 0, 0, &mut out);
    trace!("reference slice {dims:?} -> {sliced:?} -> {out_dims:?}");

    Ok(RefOutput { data: out, dims: out_dims })
}

/// Depth-first walk over the Cartesian product of per-axis indices.
fn gather(
    data: &[f32],
    per_axis: &[Vec<usize>],
    src_strides: &[usize],
    axis: usize,
    offset: usize,
    out: &mut Vec<f32>,
) {
    if axis == per_axis.len() {
        out.push(data[offset]);
        return;
    }
    for &i in &per_axis[axis] {
        gather(data, per_axis, src_strides, axis + 1, offset + i * src_strides[axis], out);
    }
}
