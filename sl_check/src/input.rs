//! Random input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sl_tensor::{Backend, Shape};

/// Uniform values in `[0, 1)`, one per element of `shape`.
pub fn random_data(shape: &Shape, rng: &mut impl Rng) -> Vec<f32> {
    (0..shape.numel()).map(|_| rng.gen::<f32>()).collect()
}

/// A random tensor on backend `B`.
pub fn random_input<B: Backend>(shape: &Shape, rng: &mut impl Rng) -> B::Tensor {
    B::from_vec(random_data(shape, rng), shape.clone())
}

/// Deterministic generator for the `index`-th case of a run.
pub fn case_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
