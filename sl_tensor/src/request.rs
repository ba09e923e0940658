//! Slice request types.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{SliceError, SliceResult};

/// Raw `(start, end, stride)` for one axis, before normalization.
///
/// Negative `start`/`end` count from the end of the axis. Out-of-range
/// values are clamped when resolved, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisSliceSpec {
    pub start: i64,
    pub end: i64,
    pub stride: i64,
}

impl AxisSliceSpec {
    pub fn new(start: i64, end: i64, stride: i64) -> Self {
        AxisSliceSpec { start, end, stride }
    }
}

/// A strided-slice request: per-axis specs plus the axes to decrease.
///
/// Axes not mentioned are passed through unchanged. Decrease axes use the
/// input tensor's axis numbering and need not be sliced themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceRequest {
    axes: BTreeMap<usize, AxisSliceSpec>,
    decrease: BTreeSet<usize>,
}

impl SliceRequest {
    /// An empty request (identity slice).
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice `axis` with the given bounds. A later call for the same axis
    /// replaces the earlier one.
    pub fn axis(mut self, axis: usize, start: i64, end: i64, stride: i64) -> Self {
        self.axes.insert(axis, AxisSliceSpec::new(start, end, stride));
        self
    }

    /// Mark axes for removal after slicing.
    pub fn decrease<I>(mut self, axes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.decrease.extend(axes);
        self
    }

    /// Build from parallel arrays, the way framework slice ops take them.
    pub fn from_arrays(
        axes: &[usize],
        starts: &[i64],
        ends: &[i64],
        strides: &[i64],
    ) -> SliceResult<Self> {
        if starts.len() != axes.len() || ends.len() != axes.len() || strides.len() != axes.len() {
            return Err(SliceError::InvalidRequest(format!(
                "axes, starts, ends and strides must have equal length (got {}, {}, {}, {})",
                axes.len(),
                starts.len(),
                ends.len(),
                strides.len()
            )));
        }

        let mut axis_specs = BTreeMap::new();
        for (i, &axis) in axes.iter().enumerate() {
            let spec = AxisSliceSpec::new(starts[i], ends[i], strides[i]);
            if axis_specs.insert(axis, spec).is_some() {
                return Err(SliceError::InvalidRequest(format!("axis {axis} appears more than once")));
            }
        }

        Ok(SliceRequest {
            axes: axis_specs,
            decrease: BTreeSet::new(),
        })
    }

    /// Spec for `axis`, if that axis is sliced.
    pub fn spec(&self, axis: usize) -> Option<&AxisSliceSpec> {
        self.axes.get(&axis)
    }

    /// Sliced axes in ascending order.
    pub fn sliced_axes(&self) -> impl Iterator<Item = (usize, &AxisSliceSpec)> + '_ {
        self.axes.iter().map(|(&axis, spec)| (axis, spec))
    }

    /// Axes marked for decrease, ascending.
    pub fn decrease_axes(&self) -> &BTreeSet<usize> {
        &self.decrease
    }

    /// True if the request neither slices nor decreases anything.
    pub fn is_identity(&self) -> bool {
        self.axes.is_empty() && self.decrease.is_empty()
    }
}
