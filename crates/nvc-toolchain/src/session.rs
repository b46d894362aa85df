//! Session boundary: resolves the pipeline context once and turns every
//! pipeline failure into a displayable [`CellOutcome`].

use std::path::{Path, PathBuf};

use nvc_config::NvcConfig;
use nvc_core::cell::CellFlags;
use nvc_core::enums::PipelineStage;
use nvc_core::responses::CellOutcome;

use crate::error::ToolchainError;
use crate::pipeline::{Pipeline, PipelineContext};
use crate::runner::Toolchain;
use crate::source::list_sources;
use crate::timing::{RepeatHarness, TimingHarness};
use crate::workspace::{EnsureOutcome, ensure_workspace};

/// Immutable per-session state shared by every cell evaluation.
pub struct CellSession {
    context: PipelineContext,
    harness: Box<dyn TimingHarness>,
}

impl CellSession {
    /// Resolve the workspace and artifact paths against `cwd`.
    ///
    /// A fixed workspace directory (`workspace.static_dir`) is created here;
    /// otherwise `cwd` itself is the workspace.
    pub fn open(config: &NvcConfig, cwd: &Path) -> Result<Self, ToolchainError> {
        let workspace = if config.workspace.static_dir {
            Some(cwd.join(&config.workspace.relative_dir))
        } else {
            None
        };
        Self::open_with_workspace(config, cwd, workspace)
    }

    /// Like [`Self::open`], with an explicit workspace directory taking
    /// precedence over the configured one.
    pub fn open_with_workspace(
        config: &NvcConfig,
        cwd: &Path,
        workspace: Option<PathBuf>,
    ) -> Result<Self, ToolchainError> {
        let workspace = match workspace {
            Some(dir) => {
                let dir = std::path::absolute(cwd.join(dir))?;
                if ensure_workspace(&dir)? == EnsureOutcome::Created {
                    tracing::info!(workspace = %dir.display(), "created output directory");
                }
                tracing::info!(workspace = %dir.display(), "set up workspace");
                dir
            }
            None => std::path::absolute(cwd)?,
        };
        let artifact = std::path::absolute(cwd.join(&config.toolchain.out))?;
        tracing::debug!(artifact = %artifact.display(), "default artifact");

        Ok(Self {
            context: PipelineContext {
                workspace,
                artifact,
                toolchain: Toolchain::from(&config.toolchain),
            },
            harness: Box::new(RepeatHarness::from(&config.timing)),
        })
    }

    /// Build a session from an already-resolved context.
    #[must_use]
    pub fn from_context(context: PipelineContext, harness: Box<dyn TimingHarness>) -> Self {
        Self { context, harness }
    }

    #[must_use]
    pub const fn context(&self) -> &PipelineContext {
        &self.context
    }

    /// Evaluate one cell: write its contents and optionally compile and run.
    #[must_use]
    pub fn evaluate(&self, flags: &CellFlags, contents: &str) -> CellOutcome {
        let request = match flags.validate() {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(%error, "rejected cell flags");
                return CellOutcome::failed(error.to_string(), PipelineStage::Idle);
            }
        };

        let mut pipeline = Pipeline::new(&self.context, self.harness.as_ref());
        let result = pipeline.run_cell(&request, contents);
        Self::outcome(&pipeline, result)
    }

    /// Compile every source in the workspace and run the artifact.
    #[must_use]
    pub fn evaluate_workspace(&self, timed: bool) -> CellOutcome {
        let mut pipeline = Pipeline::new(&self.context, self.harness.as_ref());
        let result = pipeline.run_workspace(timed);
        Self::outcome(&pipeline, result)
    }

    /// Compileable sources currently in the workspace.
    pub fn sources(&self) -> Result<Vec<PathBuf>, ToolchainError> {
        list_sources(&self.context.workspace)
    }

    fn outcome(
        pipeline: &Pipeline<'_>,
        result: Result<nvc_core::responses::CellOutput, ToolchainError>,
    ) -> CellOutcome {
        match result {
            Ok(output) => CellOutcome::succeeded(output, pipeline.reached()),
            Err(error) => CellOutcome::failed(error.diagnostic(), pipeline.reached()),
        }
    }
}
