//! Harness configuration.

/// Settings shared by every case in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Seed for random inputs. Each case mixes in its position in the table.
    pub seed: u64,
    /// Require bit-identical outputs. When false, `tolerance` applies.
    pub all_equal: bool,
    pub tolerance: f32,
    /// Record timing events for candidate and reference evaluation.
    pub profile: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            seed: 0,
            all_equal: true,
            tolerance: 1e-5,
            profile: false,
        }
    }
}
