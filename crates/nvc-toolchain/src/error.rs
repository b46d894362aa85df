use std::path::PathBuf;
use std::time::Duration;

use nvc_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("workspace directory '{path}' is unusable: {reason}")]
    Directory { path: PathBuf, reason: String },
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("no .cu sources found in {0}")]
    NoSources(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("compilation failed ({status})")]
    Compile { status: String, output: String },
    #[error("execution failed ({status})")]
    Execution { status: String, output: String },
    #[error("'{program}' timed out after {}s", .after.as_secs_f64())]
    Timeout {
        program: String,
        after: Duration,
        output: String,
    },
}

impl ToolchainError {
    /// Text shown to the user when a cell fails.
    ///
    /// Compiler and artifact failures surface the captured text unmodified.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Compile { output, .. } | Self::Execution { output, .. } if !output.is_empty() => {
                output.clone()
            }
            Self::Timeout { output, .. } if !output.is_empty() => format!("{self}\n{output}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ToolchainError;

    #[test]
    fn compile_diagnostic_is_verbatim() {
        let err = ToolchainError::Compile {
            status: "exit status: 1".to_string(),
            output: "kernel.cu(3): error: X\n".to_string(),
        };
        assert_eq!(err.diagnostic(), "kernel.cu(3): error: X\n");
    }

    #[test]
    fn empty_output_falls_back_to_message() {
        let err = ToolchainError::Execution {
            status: "exit status: 2".to_string(),
            output: String::new(),
        };
        assert_eq!(err.diagnostic(), "execution failed (exit status: 2)");
    }
}
