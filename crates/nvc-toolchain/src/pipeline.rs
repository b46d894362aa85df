//! Single compile-and-run invocation with stage tracking.

use std::path::PathBuf;

use nvc_core::cell::CellRequest;
use nvc_core::enums::PipelineStage;
use nvc_core::errors::CoreError;
use nvc_core::responses::CellOutput;

use crate::error::ToolchainError;
use crate::runner::Toolchain;
use crate::source::{list_sources, write_named_source};
use crate::timing::TimingHarness;
use crate::workspace::ensure_workspace;

/// Everything a pipeline needs, resolved once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineContext {
    pub workspace: PathBuf,
    pub artifact: PathBuf,
    pub toolchain: Toolchain,
}

/// One pass through `idle → … → done`. Not reusable once it has left `idle`.
pub struct Pipeline<'a> {
    ctx: &'a PipelineContext,
    harness: &'a dyn TimingHarness,
    stage: PipelineStage,
    reached: PipelineStage,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(ctx: &'a PipelineContext, harness: &'a dyn TimingHarness) -> Self {
        Self {
            ctx,
            harness,
            stage: PipelineStage::Idle,
            reached: PipelineStage::Idle,
        }
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> PipelineStage {
        self.stage
    }

    /// Last stage completed before `done` or `errored`.
    #[must_use]
    pub const fn reached(&self) -> PipelineStage {
        self.reached
    }

    /// Write one cell's contents, then compile and run it if requested.
    pub fn run_cell(
        &mut self,
        request: &CellRequest,
        contents: &str,
    ) -> Result<CellOutput, ToolchainError> {
        let result = self.cell_stages(request, contents);
        self.settle(result)
    }

    /// Compile every source already in the workspace and run the artifact.
    pub fn run_workspace(&mut self, timed: bool) -> Result<CellOutput, ToolchainError> {
        let result = self.workspace_stages(timed);
        self.settle(result)
    }

    fn cell_stages(
        &mut self,
        request: &CellRequest,
        contents: &str,
    ) -> Result<CellOutput, ToolchainError> {
        self.ensure()?;

        let path = write_named_source(&self.ctx.workspace, &request.source, contents)?;
        self.advance(PipelineStage::SourceWritten)?;

        if !request.produce_compile {
            self.advance(PipelineStage::Done)?;
            return Ok(CellOutput {
                text: format!("File written in {}", path.display()),
                sources: vec![path.display().to_string()],
                compiler_output: None,
                timing: None,
            });
        }

        self.compile_and_execute(vec![path], request.time_it)
    }

    fn workspace_stages(&mut self, timed: bool) -> Result<CellOutput, ToolchainError> {
        self.ensure()?;

        let sources = list_sources(&self.ctx.workspace)?;
        tracing::info!(
            sources = ?sources.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "found sources"
        );
        if sources.is_empty() {
            return Err(ToolchainError::NoSources(self.ctx.workspace.clone()));
        }
        self.advance(PipelineStage::SourceWritten)?;

        self.compile_and_execute(sources, timed)
    }

    fn ensure(&mut self) -> Result<(), ToolchainError> {
        self.check(PipelineStage::DirectoryEnsured)?;
        ensure_workspace(&self.ctx.workspace)?;
        self.advance(PipelineStage::DirectoryEnsured)
    }

    fn compile_and_execute(
        &mut self,
        sources: Vec<PathBuf>,
        timed: bool,
    ) -> Result<CellOutput, ToolchainError> {
        let ctx = self.ctx;
        let compiled = ctx
            .toolchain
            .compile(&ctx.workspace, &sources, &ctx.artifact)?;
        self.advance(PipelineStage::Compiled)?;

        let run = ctx
            .toolchain
            .execute(&compiled.artifact, timed, self.harness)?;
        self.advance(PipelineStage::Executed)?;
        self.advance(PipelineStage::Done)?;

        Ok(CellOutput {
            text: run.text,
            sources: sources.iter().map(|p| p.display().to_string()).collect(),
            compiler_output: Some(compiled.output),
            timing: run.timing,
        })
    }

    fn check(&self, next: PipelineStage) -> Result<(), CoreError> {
        if self.stage.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.stage,
                to: next,
            })
        }
    }

    fn advance(&mut self, next: PipelineStage) -> Result<(), ToolchainError> {
        self.check(next)?;
        tracing::debug!(from = %self.stage, to = %next, "pipeline stage");
        if !next.is_terminal() {
            self.reached = next;
        }
        self.stage = next;
        Ok(())
    }

    fn settle<T>(&mut self, result: Result<T, ToolchainError>) -> Result<T, ToolchainError> {
        if let Err(error) = &result {
            if self.stage.can_transition_to(PipelineStage::Errored) {
                self.stage = PipelineStage::Errored;
            }
            tracing::warn!(reached = %self.reached, %error, "pipeline failed");
        }
        result
    }
}
