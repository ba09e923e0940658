//! CPU Backend for sl_tensor.

use log::trace;
use sl_tensor::prelude::*;

/// CPU tensor storage.
#[derive(Clone, Debug, PartialEq)]
pub struct CpuTensor {
    data: Vec<f32>,
    shape: Shape,
    strides: Strides,
}

impl CpuTensor {
    /// Create a new CPU tensor from data and shape.
    pub fn new(data: Vec<f32>, shape: Shape) -> Self {
        let strides = shape.contiguous_strides();
        assert_eq!(
            data.len(),
            shape.numel(),
            "Data length {} doesn't match shape {:?} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        CpuTensor { data, shape, strides }
    }

    /// Get flat index from multi-dimensional indices.
    pub fn flat_index(&self, indices: &[usize]) -> usize {
        self.strides.index(indices)
    }

    /// Element at a multi-dimensional index.
    pub fn get(&self, indices: &[usize]) -> f32 {
        self.data[self.flat_index(indices)]
    }

    /// Iterate over all indices in the tensor.
    pub fn indices(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        TensorIndices::new(&self.shape)
    }
}

impl TensorData for CpuTensor {
    fn shape(&self) -> &Shape {
        &self.shape
    }

    fn strides(&self) -> &Strides {
        &self.strides
    }

    fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Iterator over all multi-dimensional indices of a shape, row-major.
struct TensorIndices<'a> {
    shape: &'a Shape,
    current: Vec<usize>,
    done: bool,
}

impl<'a> TensorIndices<'a> {
    fn new(shape: &'a Shape) -> Self {
        TensorIndices {
            shape,
            current: vec![0; shape.ndim()],
            done: shape.numel() == 0,
        }
    }
}

impl Iterator for TensorIndices<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.shape.ndim() == 0 {
            self.done = true;
            return Some(vec![]);
        }

        let result = self.current.clone();

        // Increment indices (rightmost first, like odometer)
        let mut i = self.shape.ndim() - 1;
        loop {
            self.current[i] += 1;
            if self.current[i] < self.shape.dim(i) {
                break;
            }
            self.current[i] = 0;
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }
}

/// CPU backend marker type.
#[derive(Clone, Copy, Debug)]
pub struct CpuBackend;

impl Backend for CpuBackend {
    type Tensor = CpuTensor;

    // === Creation ===

    fn zeros(shape: &Shape) -> CpuTensor {
        CpuTensor::new(vec![0.0; shape.numel()], shape.clone())
    }

    fn from_vec(data: Vec<f32>, shape: Shape) -> CpuTensor {
        CpuTensor::new(data, shape)
    }

    // === Shape operations ===

    fn strided_slice(x: &CpuTensor, ranges: &[ResolvedRange]) -> CpuTensor {
        strided_slice_impl(x, ranges)
    }

    fn reshape(x: &CpuTensor, shape: &Shape) -> CpuTensor {
        assert_eq!(
            x.shape.numel(),
            shape.numel(),
            "Cannot reshape from {:?} to {:?}",
            x.shape,
            shape
        );
        CpuTensor::new(x.data.clone(), shape.clone())
    }
}

/// Gather the elements selected by `ranges` into a new contiguous tensor.
///
/// Walks the outer axes with an odometer and copies one inner row at a time;
/// a unit inner stride copies the row as a single slice.
fn strided_slice_impl(x: &CpuTensor, ranges: &[ResolvedRange]) -> CpuTensor {
    let ndim = x.shape.ndim();
    assert_eq!(
        ranges.len(),
        ndim,
        "Expected one range per axis for shape {:?}",
        x.shape
    );

    let out_shape = Shape::new(ranges.iter().map(|r| r.count).collect());
    let numel = out_shape.numel();
    if ndim == 0 {
        return x.clone();
    }

    let mut data = Vec::with_capacity(numel);
    if numel == 0 {
        return CpuTensor::new(data, out_shape);
    }

    let inner = &ranges[ndim - 1];
    let outer_shape = Shape::from(&out_shape.dims()[..ndim - 1]);
    let src_strides = x.strides.as_slice();

    for outer in TensorIndices::new(&outer_shape) {
        let base: usize = outer
            .iter()
            .enumerate()
            .map(|(axis, &i)| ranges[axis].index(i) * src_strides[axis])
            .sum();

        if inner.stride == 1 {
            let start = base + inner.begin as usize;
            data.extend_from_slice(&x.data[start..start + inner.count]);
        } else {
            data.extend(inner.indices().map(|j| x.data[base + j]));
        }
    }

    trace!("strided_slice {:?} -> {:?}", x.shape, out_shape);
    CpuTensor::new(data, out_shape)
}
