//! End-to-end slicing through the CPU backend.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sl_backend_cpu::{CpuBackend, CpuTensor};
use sl_tensor::prelude::*;

fn arange(dims: &[usize]) -> CpuTensor {
    let shape = Shape::from(dims);
    let data = (0..shape.numel()).map(|v| v as f32).collect();
    CpuBackend::from_vec(data, shape)
}

fn sliced(x: &CpuTensor, req: &SliceRequest) -> CpuTensor {
    slice::<CpuBackend>(x, req).expect("slice should succeed")
}

// ============================================================================
// Scenario table on a [10, 12] input
// ============================================================================

#[test]
fn test_window() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[2, 2], &[5, 5], &[1, 1]).unwrap();
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[3, 3]);
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(y.get(&[r, c]), x.get(&[r + 2, c + 2]));
        }
    }
}

#[test]
fn test_overlong_end() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[1, 2], &[6, 1000], &[1, 2]).unwrap();
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[5, 5]);
    assert_eq!(y.get(&[0, 0]), x.get(&[1, 2]));
    assert_eq!(y.get(&[4, 4]), x.get(&[5, 10]));
}

#[test]
fn test_negative_end() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[2, 1], &[-1, 7], &[3, 2]).unwrap();
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[3, 3]);
    assert_eq!(y.get(&[2, 2]), x.get(&[8, 5]));
}

#[test]
fn test_mixed_stride_signs() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[2, 1000], &[8, 1], &[1, -2]).unwrap();
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[6, 5]);
    let first_row: Vec<f32> = (0..5).map(|c| y.get(&[0, c])).collect();
    let expected: Vec<f32> = [11, 9, 7, 5, 3].iter().map(|&c| x.get(&[2, c])).collect();
    assert_eq!(first_row, expected);
}

#[test]
fn test_all_negative() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[-1, -2], &[-5, -8], &[-1, -2]).unwrap();
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[4, 3]);
    assert_eq!(y.get(&[0, 0]), x.get(&[9, 10]));
    assert_eq!(y.get(&[3, 2]), x.get(&[6, 6]));
}

#[test]
fn test_decrease_one_axis() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[2, 2], &[5, 3], &[1, 1])
        .unwrap()
        .decrease([1]);
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[3]);
    assert_eq!(y.as_slice(), &[x.get(&[2, 2]), x.get(&[3, 2]), x.get(&[4, 2])]);
}

#[test]
fn test_decrease_all_axes() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::from_arrays(&[0, 1], &[2, 2], &[3, 3], &[1, 1])
        .unwrap()
        .decrease([0, 1]);
    let y = sliced(&x, &req);
    assert_eq!(y.shape().dims(), &[1]);
    assert_eq!(y.as_slice(), &[x.get(&[2, 2])]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decrease_wrong_extent_fails() {
    let x = arange(&[10, 12]);
    let req = SliceRequest::new().axis(0, 2, 5, 1).decrease([0]);
    assert_eq!(
        slice::<CpuBackend>(&x, &req),
        Err(SliceError::ShapeMismatch { axis: 0, extent: 3 })
    );
}

#[test]
fn test_invalid_axis_and_stride() {
    let x = arange(&[10, 12]);
    assert_eq!(
        slice::<CpuBackend>(&x, &SliceRequest::new().axis(2, 0, 1, 1)),
        Err(SliceError::InvalidAxis { axis: 2, rank: 2 })
    );
    assert_eq!(
        slice::<CpuBackend>(&x, &SliceRequest::new().axis(1, 0, 1, 0)),
        Err(SliceError::InvalidStride { axis: 1 })
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_identity_slice() {
    let x = arange(&[3, 4, 5]);
    assert_eq!(sliced(&x, &SliceRequest::new()), x);

    let full = SliceRequest::new().axis(0, 0, 3, 1).axis(1, -4, 100, 1).axis(2, 0, 5, 1);
    assert_eq!(sliced(&x, &full), x);
}

#[test]
fn test_empty_result() {
    let x = arange(&[4, 5]);
    let y = sliced(&x, &SliceRequest::new().axis(1, 4, 1, 1));
    assert_eq!(y.shape().dims(), &[4, 0]);
    assert!(y.as_slice().is_empty());
}

#[test]
fn test_reverse_twice_is_identity() {
    let x = arange(&[3, 4, 5]);
    let rev = SliceRequest::new()
        .axis(0, -1, -100, -1)
        .axis(1, -1, -100, -1)
        .axis(2, -1, -100, -1);
    let once = sliced(&x, &rev);
    assert_eq!(once.get(&[0, 0, 0]), x.get(&[2, 3, 4]));
    assert_eq!(sliced(&once, &rev), x);
}

#[test]
fn test_reslice_reverses_subsequence() {
    let x = arange(&[20]);
    let forward = sliced(&x, &SliceRequest::new().axis(0, 3, 17, 3));
    assert_eq!(forward.as_slice(), &[3.0, 6.0, 9.0, 12.0, 15.0]);

    let backward = sliced(&x, &SliceRequest::new().axis(0, 15, 2, -3));
    let mut reversed = forward.as_slice().to_vec();
    reversed.reverse();
    assert_eq!(backward.as_slice(), reversed.as_slice());
}

#[test]
fn test_input_untouched() {
    let x = arange(&[4, 4]);
    let before = x.clone();
    let _ = sliced(&x, &SliceRequest::new().axis(0, -1, -5, -2));
    assert_eq!(x, before);
}

#[test]
fn test_random_requests_match_direct_indexing() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let rank = rng.gen_range(1..=3);
        let dims: Vec<usize> = (0..rank).map(|_| rng.gen_range(0..6)).collect();
        let x = arange(&dims);

        let mut req = SliceRequest::new();
        for (axis, &dim) in dims.iter().enumerate() {
            if rng.gen_bool(0.7) {
                let span = 2 * dim as i64 + 2;
                let stride = loop {
                    let s = rng.gen_range(-3..=3);
                    if s != 0 {
                        break s;
                    }
                };
                req = req.axis(axis, rng.gen_range(-span..=span), rng.gen_range(-span..=span), stride);
            }
        }

        let plan = SlicePlan::new(x.shape(), &req).unwrap();
        let y = sliced(&x, &req);
        assert_eq!(y.shape(), &plan.output_shape);
        for idx in y.indices() {
            let src: Vec<usize> = idx
                .iter()
                .enumerate()
                .map(|(a, &i)| plan.ranges[a].index(i))
                .collect();
            assert!(src.iter().zip(&dims).all(|(&i, &d)| i < d), "{req:?} read {src:?}");
            assert_eq!(y.get(&idx), x.get(&src));
        }
    }
}

#[test]
fn test_extreme_strides_select_one_element() {
    let x = arange(&[10]);
    let y = sliced(&x, &SliceRequest::new().axis(0, 0, 10, i64::MAX));
    assert_eq!(y.as_slice(), &[0.0]);

    let y = sliced(&x, &SliceRequest::new().axis(0, 9, -100, i64::MIN));
    assert_eq!(y.as_slice(), &[9.0]);
}
