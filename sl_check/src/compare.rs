//! Output comparison.

use crate::error::CheckError;

/// Compare two outputs element by element.
///
/// With `all_equal` the bit patterns must match; otherwise values may differ
/// by less than `tolerance`.
pub fn compare_outputs(
    candidate_dims: &[usize],
    candidate: &[f32],
    reference_dims: &[usize],
    reference: &[f32],
    all_equal: bool,
    tolerance: f32,
) -> Result<(), CheckError> {
    if candidate_dims != reference_dims || candidate.len() != reference.len() {
        return Err(CheckError::ShapeMismatch {
            candidate: candidate_dims.to_vec(),
            reference: reference_dims.to_vec(),
        });
    }

    for (index, (&c, &r)) in candidate.iter().zip(reference).enumerate() {
        let matches = if all_equal {
            c.to_bits() == r.to_bits()
        } else {
            (c - r).abs() < tolerance
        };
        if !matches {
            return Err(CheckError::ValueMismatch {
                index,
                candidate: c,
                reference: r,
            });
        }
    }
    Ok(())
}
