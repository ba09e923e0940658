//! # sl_check - Candidate vs reference checks for strided slicing
//!
//! Runs `sl_tensor::slice` on a backend (the candidate) and
//! `sl_reference::reference_slice` (the reference) on the same random input
//! and asserts that they agree, either bit for bit or within a tolerance.
//!
//! ```ignore
//! use sl_check::{builtin_cases, run_cases, CheckConfig};
//!
//! for (name, result) in run_cases(&builtin_cases(), &CheckConfig::default()) {
//!     assert!(result.is_ok(), "{name} failed");
//! }
//! ```

pub mod case;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod profiler;

use log::{info, warn};
use sl_backend_cpu::CpuBackend;
use sl_reference::reference_slice;
use sl_tensor::prelude::*;

pub use case::{builtin_cases, load_cases, parse_cases, SliceCase};
pub use compare::compare_outputs;
pub use config::CheckConfig;
pub use error::CheckError;
pub use input::{case_rng, random_data, random_input};
pub use profiler::{HostEvent, HostEventRecorder, ProfilerState, RecordEvent};

/// How the two evaluators responded to one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Both produced the same output, of these dims.
    Agreed { dims: Vec<usize> },
    /// Both rejected the request with the same error.
    Rejected(SliceError),
}

/// Summary of a passing case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub name: String,
    pub dims: Vec<usize>,
}

/// Run candidate backend `B` and the reference on `data` and compare.
pub fn compare_backends<B: Backend>(
    data: &[f32],
    shape: &Shape,
    request: &SliceRequest,
    config: &CheckConfig,
) -> Result<Outcome, CheckError> {
    let x = B::from_vec(data.to_vec(), shape.clone());

    let candidate = {
        let _event = RecordEvent::new("candidate");
        slice::<B>(&x, request)
    };
    let reference = {
        let _event = RecordEvent::new("reference");
        reference_slice(data, shape.dims(), request)
    };

    match (candidate, reference) {
        (Ok(c), Ok(r)) => {
            compare_outputs(
                c.shape().dims(),
                c.as_slice(),
                &r.dims,
                &r.data,
                config.all_equal,
                config.tolerance,
            )?;
            Ok(Outcome::Agreed { dims: r.dims })
        }
        (Err(c), Err(r)) if c == r => Ok(Outcome::Rejected(c)),
        (c, r) => Err(CheckError::Disagreement {
            candidate: match c {
                Ok(t) => format!("shape {}", t.shape()),
                Err(e) => format!("error '{e}'"),
            },
            reference: match r {
                Ok(out) => format!("shape {}", Shape::new(out.dims)),
                Err(e) => format!("error '{e}'"),
            },
        }),
    }
}

/// Check the `index`-th case of a run on backend `B`.
///
/// The input is drawn from [`case_rng`], so a case sees the same data for a
/// given seed regardless of which other cases run.
pub fn check_case_with<B: Backend>(
    case: &SliceCase,
    index: usize,
    config: &CheckConfig,
) -> Result<CaseReport, CheckError> {
    let request = case.request()?;
    let shape = Shape::new(case.shape.clone());
    let data = random_data(&shape, &mut case_rng(config.seed, index));

    let _event = RecordEvent::new(format!("case/{}", case.name));
    let dims = match compare_backends::<B>(&data, &shape, &request, config)? {
        Outcome::Agreed { dims } => dims,
        Outcome::Rejected(err) => return Err(err.into()),
    };

    if let Some(expected) = &case.expected_shape {
        if expected != &dims {
            return Err(CheckError::Expectation(format!(
                "expected shape {}, both evaluators produced {}",
                Shape::new(expected.clone()),
                Shape::new(dims)
            )));
        }
    }

    Ok(CaseReport {
        name: case.name.clone(),
        dims,
    })
}

/// Check one case on the CPU backend.
pub fn check_case(case: &SliceCase, index: usize, config: &CheckConfig) -> Result<CaseReport, CheckError> {
    check_case_with::<CpuBackend>(case, index, config)
}

/// Check every case on the CPU backend, in order.
pub fn run_cases(cases: &[SliceCase], config: &CheckConfig) -> Vec<(String, Result<CaseReport, CheckError>)> {
    profiler::set_state(if config.profile {
        ProfilerState::Cpu
    } else {
        ProfilerState::Disabled
    });

    cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let result = check_case(case, index, config);
            match &result {
                Ok(report) => info!("{}: ok, shape {}", case.name, Shape::new(report.dims.clone())),
                Err(err) => warn!("{}: {err}", case.name),
            }
            (case.name.clone(), result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(dims: &[usize]) -> (Vec<f32>, Shape) {
        let shape = Shape::from(dims);
        ((0..shape.numel()).map(|v| v as f32).collect(), shape)
    }

    #[test]
    fn test_compare_backends_agrees() {
        let (data, shape) = grid(&[10, 12]);
        let req = SliceRequest::new().axis(0, 2, 1000, 3).axis(1, -1, -100, -4);
        let outcome = compare_backends::<CpuBackend>(&data, &shape, &req, &CheckConfig::default()).unwrap();
        assert_eq!(outcome, Outcome::Agreed { dims: vec![3, 3] });
    }

    #[test]
    fn test_compare_backends_both_reject() {
        let (data, shape) = grid(&[4]);
        let req = SliceRequest::new().axis(0, 0, 4, 0);
        let outcome = compare_backends::<CpuBackend>(&data, &shape, &req, &CheckConfig::default()).unwrap();
        assert_eq!(outcome, Outcome::Rejected(SliceError::InvalidStride { axis: 0 }));
    }

    #[test]
    fn test_compare_backends_extreme_strides() {
        let (data, shape) = grid(&[10, 12]);
        let req = SliceRequest::new().axis(0, 0, 10, i64::MAX).axis(1, 9, -100, i64::MIN);
        let outcome = compare_backends::<CpuBackend>(&data, &shape, &req, &CheckConfig::default()).unwrap();
        assert_eq!(outcome, Outcome::Agreed { dims: vec![1, 1] });
    }

    #[test]
    fn test_check_case_expectation() {
        let mut case = builtin_cases().remove(0);
        case.expected_shape = Some(vec![4, 4]);
        let err = check_case(&case, 0, &CheckConfig::default()).unwrap_err();
        assert!(matches!(err, CheckError::Expectation(_)));
    }

    #[test]
    fn test_check_case_invalid_request() {
        let mut case = builtin_cases().remove(0);
        case.starts.pop();
        let err = check_case(&case, 0, &CheckConfig::default()).unwrap_err();
        assert!(matches!(err, CheckError::Slice(SliceError::InvalidRequest(_))));
    }
}
