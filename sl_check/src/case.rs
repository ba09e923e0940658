//! Scenario records.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sl_tensor::{SliceRequest, SliceResult};

use crate::error::CheckError;

/// One slice scenario: input shape, parallel slice arrays, optional
/// decrease axes, and optionally the shape the result must have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceCase {
    pub name: String,
    pub shape: Vec<usize>,
    pub axes: Vec<usize>,
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
    pub strides: Vec<i64>,
    #[serde(default)]
    pub decrease_axis: Vec<usize>,
    #[serde(default)]
    pub expected_shape: Option<Vec<usize>>,
}

impl SliceCase {
    /// Build the request this case describes.
    pub fn request(&self) -> SliceResult<SliceRequest> {
        Ok(SliceRequest::from_arrays(&self.axes, &self.starts, &self.ends, &self.strides)?
            .decrease(self.decrease_axis.iter().copied()))
    }
}

fn case(
    name: &str,
    starts: [i64; 2],
    ends: [i64; 2],
    strides: [i64; 2],
    decrease_axis: &[usize],
    expected_shape: &[usize],
) -> SliceCase {
    SliceCase {
        name: name.to_string(),
        shape: vec![10, 12],
        axes: vec![0, 1],
        starts: starts.to_vec(),
        ends: ends.to_vec(),
        strides: strides.to_vec(),
        decrease_axis: decrease_axis.to_vec(),
        expected_shape: Some(expected_shape.to_vec()),
    }
}

/// The built-in scenario table, all on a `[10, 12]` input.
pub fn builtin_cases() -> Vec<SliceCase> {
    vec![
        case("window", [2, 2], [5, 5], [1, 1], &[], &[3, 3]),
        case("overlong_end", [1, 2], [6, 1000], [1, 2], &[], &[5, 5]),
        case("negative_end", [2, 1], [-1, 7], [3, 2], &[], &[3, 3]),
        case("mixed_stride", [2, 1000], [8, 1], [1, -2], &[], &[6, 5]),
        case("all_negative", [-1, -2], [-5, -8], [-1, -2], &[], &[4, 3]),
        case("decrease_axis", [2, 2], [5, 3], [1, 1], &[1], &[3]),
        case("decrease_all", [2, 2], [3, 3], [1, 1], &[0, 1], &[1]),
    ]
}

/// Parse a JSON array of cases.
pub fn parse_cases(json: &str) -> Result<Vec<SliceCase>, CheckError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of cases from `path`.
pub fn load_cases(path: &Path) -> Result<Vec<SliceCase>, CheckError> {
    let text = std::fs::read_to_string(path)?;
    parse_cases(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_cases_build_requests() {
        let cases = builtin_cases();
        assert_eq!(cases.len(), 7);
        for case in &cases {
            assert!(case.request().is_ok(), "{}", case.name);
        }
    }

    #[test]
    fn test_parse_cases_defaults() {
        let json = r#"[
            {"name": "rows", "shape": [4, 5], "axes": [0],
             "starts": [1], "ends": [3], "strides": [1]}
        ]"#;
        let cases = parse_cases(json).unwrap();
        assert_eq!(cases[0].name, "rows");
        assert!(cases[0].decrease_axis.is_empty());
        assert_eq!(cases[0].expected_shape, None);
    }

    #[test]
    fn test_parse_cases_rejects_garbage() {
        assert!(matches!(parse_cases("{not json"), Err(CheckError::Cases(_))));
    }
}
