//! Timing harness used for timed artifact runs.

use std::time::{Duration, Instant};

use nvc_config::TimingConfig;
use nvc_core::timing::TimingReport;

use crate::error::ToolchainError;

/// Measures repeated executions of the build artifact.
///
/// `run` executes the artifact once and returns its captured output.
pub trait TimingHarness {
    fn time(
        &self,
        run: &mut dyn FnMut() -> Result<String, ToolchainError>,
    ) -> Result<TimingReport, ToolchainError>;
}

/// `repeat` runs of `number` back-to-back executions each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatHarness {
    repeat: u32,
    number: u32,
}

impl RepeatHarness {
    /// Zero counts are raised to one.
    #[must_use]
    pub fn new(repeat: u32, number: u32) -> Self {
        Self {
            repeat: repeat.max(1),
            number: number.max(1),
        }
    }

    #[must_use]
    pub const fn repeat(&self) -> u32 {
        self.repeat
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }
}

impl Default for RepeatHarness {
    fn default() -> Self {
        Self::from(&TimingConfig::default())
    }
}

impl From<&TimingConfig> for RepeatHarness {
    fn from(config: &TimingConfig) -> Self {
        Self::new(config.repeat, config.number)
    }
}

impl TimingHarness for RepeatHarness {
    fn time(
        &self,
        run: &mut dyn FnMut() -> Result<String, ToolchainError>,
    ) -> Result<TimingReport, ToolchainError> {
        let mut samples = Vec::with_capacity(self.repeat as usize);
        let mut last_output = String::new();

        for _ in 0..self.repeat {
            let started = Instant::now();
            for _ in 0..self.number {
                last_output = run()?;
            }
            let per_loop: Duration = started.elapsed() / self.number;
            samples.push(per_loop);
        }

        let report = TimingReport::from_samples(&samples, self.number, last_output);
        tracing::debug!(
            repeat = self.repeat,
            number = self.number,
            mean_secs = report.mean_secs,
            "timed artifact"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{RepeatHarness, TimingHarness};
    use crate::error::ToolchainError;

    #[test]
    fn runs_repeat_times_number() {
        let harness = RepeatHarness::new(3, 4);
        let mut calls = 0u32;
        let report = harness
            .time(&mut || {
                calls += 1;
                Ok(format!("call {calls}"))
            })
            .expect("timing should succeed");

        assert_eq!(calls, 12);
        assert_eq!(report.repeat, 3);
        assert_eq!(report.number, 4);
        assert_eq!(report.samples_secs.len(), 3);
        assert_eq!(report.output, "call 12");
    }

    #[test]
    fn failing_run_aborts_timing() {
        let harness = RepeatHarness::new(5, 1);
        let mut calls = 0u32;
        let err = harness
            .time(&mut || {
                calls += 1;
                if calls == 2 {
                    Err(ToolchainError::Execution {
                        status: "exit status: 1".to_string(),
                        output: "boom".to_string(),
                    })
                } else {
                    Ok(String::new())
                }
            })
            .expect_err("timing should fail");

        assert_eq!(calls, 2);
        assert_eq!(err.diagnostic(), "boom");
    }

    #[test]
    fn zero_counts_are_clamped() {
        let harness = RepeatHarness::new(0, 0);
        assert_eq!(harness.repeat(), 1);
        assert_eq!(harness.number(), 1);
    }
}
