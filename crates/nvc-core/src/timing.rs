//! Timing statistics produced by a timed run.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of timing the build artifact.
///
/// `samples_secs` holds one per-loop time per run, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub repeat: u32,
    pub number: u32,
    pub samples_secs: Vec<f64>,
    pub best_secs: f64,
    pub mean_secs: f64,
    pub stdev_secs: f64,
    /// Captured output of the last execution.
    pub output: String,
}

impl TimingReport {
    /// Build a report from per-loop samples.
    #[must_use]
    pub fn from_samples(samples: &[Duration], number: u32, output: String) -> Self {
        let samples_secs = samples.iter().map(Duration::as_secs_f64).collect::<Vec<_>>();
        let count = samples_secs.len().max(1) as f64;

        let best_secs = samples_secs.iter().copied().fold(f64::INFINITY, f64::min);
        let mean_secs = samples_secs.iter().sum::<f64>() / count;
        let variance = samples_secs
            .iter()
            .map(|sample| (sample - mean_secs).powi(2))
            .sum::<f64>()
            / count;

        Self {
            repeat: u32::try_from(samples_secs.len()).unwrap_or(u32::MAX),
            number,
            best_secs: if best_secs.is_finite() { best_secs } else { 0.0 },
            mean_secs,
            stdev_secs: variance.sqrt(),
            samples_secs,
            output,
        }
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ± {} per loop (mean ± std. dev. of {} run{}, {} loop{} each)",
            format_seconds(self.mean_secs),
            format_seconds(self.stdev_secs),
            self.repeat,
            plural(self.repeat),
            self.number,
            plural(self.number),
        )
    }
}

const fn plural(count: u32) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Format a timespan with three significant digits and an adaptive unit.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_seconds(seconds: f64) -> String {
    const UNITS: [(&str, f64); 4] = [("s", 1.0), ("ms", 1e3), ("µs", 1e6), ("ns", 1e9)];

    let order = if seconds > 0.0 {
        let mut exponent = seconds.log10().floor() as i32;
        // 999.6 rounds to 1000 at three digits and belongs to the next unit up.
        if (seconds / 10_f64.powi(exponent - 2)).round() >= 1000.0 {
            exponent += 1;
        }
        (-exponent.div_euclid(3)).clamp(0, 3)
    } else {
        3
    };
    let (unit, scale) = UNITS[order as usize];
    format!("{} {unit}", three_significant(seconds * scale))
}

fn three_significant(value: f64) -> String {
    let decimals = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{TimingReport, format_seconds};

    #[rstest]
    #[case(0.0015, "1.5 ms")]
    #[case(2.5, "2.5 s")]
    #[case(20.0, "20 s")]
    #[case(0.000_000_25, "250 ns")]
    #[case(0.000_012_34, "12.3 µs")]
    #[case(0.0, "0 ns")]
    #[case(0.9996, "1 s")]
    #[case(0.000_999_6, "1 ms")]
    #[case(0.000_000_999_6, "1 µs")]
    fn formats_with_adaptive_units(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_seconds(seconds), expected);
    }

    #[test]
    fn statistics_cover_all_samples() {
        let samples = [
            Duration::from_millis(2),
            Duration::from_millis(4),
            Duration::from_millis(6),
        ];
        let report = TimingReport::from_samples(&samples, 1, "ok\n".to_string());

        assert_eq!(report.repeat, 3);
        assert!((report.best_secs - 0.002).abs() < 1e-9);
        assert!((report.mean_secs - 0.004).abs() < 1e-9);
        assert!((report.stdev_secs - 0.001_632_993).abs() < 1e-6);
        assert_eq!(report.output, "ok\n");
    }

    #[test]
    fn display_matches_summary_line() {
        let samples = [Duration::from_millis(3), Duration::from_millis(3)];
        let report = TimingReport::from_samples(&samples, 1, String::new());

        assert_eq!(
            report.to_string(),
            "3 ms ± 0 ns per loop (mean ± std. dev. of 2 runs, 1 loop each)"
        );
    }
}
