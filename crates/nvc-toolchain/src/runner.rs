use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nvc_config::ToolchainConfig;
use nvc_core::responses::RunResult;
use serde::Serialize;

use crate::error::ToolchainError;
use crate::process::run_captured;
use crate::timing::TimingHarness;

/// Output of a successful compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileResult {
    pub artifact: PathBuf,
    /// Compiler output, usually warnings or nothing at all.
    pub output: String,
}

/// Invokes the external compiler and the artifact it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    compiler: PathBuf,
    timeout: Option<Duration>,
}

impl Toolchain {
    #[must_use]
    pub fn new(compiler: impl Into<PathBuf>) -> Self {
        Self {
            compiler: compiler.into(),
            timeout: None,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn compiler(&self) -> &Path {
        &self.compiler
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Argument vector for `<compiler> -I<workspace> <sources...> -o <artifact>`.
    #[must_use]
    pub fn compile_args(workspace: &Path, sources: &[PathBuf], artifact: &Path) -> Vec<OsString> {
        let mut include = OsString::from("-I");
        include.push(workspace.as_os_str());

        let mut args = Vec::with_capacity(sources.len() + 3);
        args.push(include);
        args.extend(sources.iter().map(|source| source.as_os_str().to_os_string()));
        args.push(OsString::from("-o"));
        args.push(artifact.as_os_str().to_os_string());
        args
    }

    /// Compile `sources` into `artifact` with `workspace` on the include path.
    ///
    /// A non-zero compiler exit yields [`ToolchainError::Compile`] carrying
    /// the compiler's own output.
    pub fn compile(
        &self,
        workspace: &Path,
        sources: &[PathBuf],
        artifact: &Path,
    ) -> Result<CompileResult, ToolchainError> {
        if sources.is_empty() {
            return Err(ToolchainError::NoSources(workspace.to_path_buf()));
        }

        let args = Self::compile_args(workspace, sources, artifact);
        tracing::info!(
            compiler = %self.compiler.display(),
            sources = sources.len(),
            artifact = %artifact.display(),
            "compiling"
        );
        tracing::debug!(?args, "compiler arguments");

        let captured = run_captured(self.compiler.as_os_str(), &args, self.timeout)?;
        if !captured.status.success() {
            return Err(ToolchainError::Compile {
                status: captured.status.to_string(),
                output: captured.output,
            });
        }

        Ok(CompileResult {
            artifact: artifact.to_path_buf(),
            output: captured.output,
        })
    }

    /// Run the artifact with no arguments, optionally under `harness`.
    pub fn execute(
        &self,
        artifact: &Path,
        timed: bool,
        harness: &dyn TimingHarness,
    ) -> Result<RunResult, ToolchainError> {
        let artifact = std::path::absolute(artifact)?;
        tracing::info!(artifact = %artifact.display(), timed, "executing");

        if timed {
            let report = harness.time(&mut || self.run_artifact(&artifact))?;
            return Ok(RunResult::timed(report));
        }

        self.run_artifact(&artifact).map(RunResult::plain)
    }

    fn run_artifact(&self, artifact: &Path) -> Result<String, ToolchainError> {
        let captured = run_captured(
            artifact.as_os_str(),
            std::iter::empty::<OsString>(),
            self.timeout,
        )?;
        if !captured.status.success() {
            return Err(ToolchainError::Execution {
                status: captured.status.to_string(),
                output: captured.output,
            });
        }
        Ok(captured.output)
    }
}

impl From<&ToolchainConfig> for Toolchain {
    fn from(config: &ToolchainConfig) -> Self {
        Self::new(&config.compiler).with_timeout(config.timeout())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};

    use nvc_config::ToolchainConfig;
    use pretty_assertions::assert_eq;

    use super::Toolchain;
    use crate::error::ToolchainError;

    #[test]
    fn compile_args_follow_fixed_shape() {
        let args = Toolchain::compile_args(
            Path::new("/ws"),
            &[PathBuf::from("/ws/a.cu"), PathBuf::from("/ws/b.cu")],
            Path::new("result.out"),
        );

        let expected = ["-I/ws", "/ws/a.cu", "/ws/b.cu", "-o", "result.out"]
            .into_iter()
            .map(OsString::from)
            .collect::<Vec<_>>();
        assert_eq!(args, expected);
    }

    #[test]
    fn empty_source_list_never_spawns() {
        let toolchain = Toolchain::new("/definitely/not/a/compiler");
        let err = toolchain
            .compile(Path::new("/ws"), &[], Path::new("out"))
            .expect_err("compile should fail");
        assert!(matches!(err, ToolchainError::NoSources(_)));
    }

    #[test]
    fn config_maps_to_toolchain() {
        let config = ToolchainConfig {
            compiler: "nvcc".to_string(),
            out: "a.out".to_string(),
            timeout_secs: 9,
        };
        let toolchain = Toolchain::from(&config);
        assert_eq!(toolchain.compiler(), Path::new("nvcc"));
        assert_eq!(toolchain.timeout().map(|t| t.as_secs()), Some(9));
    }
}
