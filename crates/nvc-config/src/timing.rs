//! Timing harness configuration.

use serde::{Deserialize, Serialize};

const fn default_repeat() -> u32 {
    7
}

const fn default_number() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Number of timed runs.
    #[serde(default = "default_repeat")]
    pub repeat: u32,

    /// Executions per timed run.
    #[serde(default = "default_number")]
    pub number: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repeat: default_repeat(),
            number: default_number(),
        }
    }
}
