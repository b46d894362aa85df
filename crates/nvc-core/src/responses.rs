//! Result types handed back across the session boundary.

use serde::{Deserialize, Serialize};

use crate::enums::PipelineStage;
use crate::timing::TimingReport;

/// Captured output of one artifact invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Combined stdout/stderr, or the timing summary for a timed run.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingReport>,
}

impl RunResult {
    #[must_use]
    pub const fn plain(text: String) -> Self {
        Self { text, timing: None }
    }

    #[must_use]
    pub fn timed(report: TimingReport) -> Self {
        Self {
            text: report.to_string(),
            timing: Some(report),
        }
    }
}

/// Successful end of a pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellOutput {
    /// Text shown to the user: a write confirmation or the run output.
    pub text: String,
    /// Source files written or compiled by this invocation.
    pub sources: Vec<String>,
    /// Compiler output of a successful compile (warnings, usually empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingReport>,
}

/// Displayable value of a cell evaluation. Never an error.
///
/// On failure `output` is `None` and `diagnostic` carries the text to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellOutcome {
    pub stage: PipelineStage,
    /// Last stage completed before the pipeline finished or failed.
    pub reached: PipelineStage,
    pub output: Option<String>,
    pub diagnostic: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingReport>,
}

impl CellOutcome {
    #[must_use]
    pub fn succeeded(output: CellOutput, reached: PipelineStage) -> Self {
        Self {
            stage: PipelineStage::Done,
            reached,
            output: Some(output.text),
            diagnostic: None,
            sources: output.sources,
            compiler_output: output.compiler_output,
            timing: output.timing,
        }
    }

    #[must_use]
    pub const fn failed(diagnostic: String, reached: PipelineStage) -> Self {
        Self {
            stage: PipelineStage::Errored,
            reached,
            output: None,
            diagnostic: Some(diagnostic),
            sources: Vec::new(),
            compiler_output: None,
            timing: None,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.output.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CellOutcome, CellOutput};
    use crate::enums::PipelineStage;

    #[test]
    fn failed_outcome_has_no_output() {
        let outcome = CellOutcome::failed("error: X".to_string(), PipelineStage::SourceWritten);
        assert!(!outcome.is_success());
        assert_eq!(outcome.stage, PipelineStage::Errored);
        assert_eq!(outcome.diagnostic.as_deref(), Some("error: X"));
        assert_eq!(outcome.reached, PipelineStage::SourceWritten);
    }

    #[test]
    fn failed_outcome_serializes_null_output() {
        let outcome = CellOutcome::failed("boom".to_string(), PipelineStage::Compiled);
        let value = serde_json::to_value(&outcome).expect("serialize");
        assert!(value["output"].is_null());
        assert_eq!(value["stage"], "errored");
        assert_eq!(value["reached"], "compiled");
        assert!(value.get("timing").is_none());
    }

    #[test]
    fn succeeded_outcome_carries_output() {
        let output = CellOutput {
            text: "hello\n".to_string(),
            sources: vec!["/ws/kernel.cu".to_string()],
            compiler_output: Some(String::new()),
            timing: None,
        };
        let outcome = CellOutcome::succeeded(output, PipelineStage::Executed);
        assert!(outcome.is_success());
        assert_eq!(outcome.stage, PipelineStage::Done);
        assert_eq!(outcome.output.as_deref(), Some("hello\n"));
    }
}
