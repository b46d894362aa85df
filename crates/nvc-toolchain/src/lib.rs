//! # nvc-toolchain
//!
//! The compile-and-run pipeline behind nvcell.
//!
//! - [`workspace`]: makes sure the workspace directory exists
//! - [`source`]: writes cell contents into the workspace and lists sources
//! - [`runner`]: invokes the external compiler and the produced artifact
//! - [`timing`]: the harness used for timed runs
//! - [`pipeline`]: one staged pass through the above
//! - [`session`]: the boundary that never lets a failure escape
//!
//! Everything here is synchronous. Processes are spawned one at a time and
//! the caller blocks until each finishes or its timeout expires.

mod error;
mod process;

pub mod pipeline;
pub mod runner;
pub mod session;
pub mod source;
pub mod timing;
pub mod workspace;

pub use error::ToolchainError;
pub use pipeline::{Pipeline, PipelineContext};
pub use runner::{CompileResult, Toolchain};
pub use session::CellSession;
pub use source::{list_sources, write_source};
pub use timing::{RepeatHarness, TimingHarness};
pub use workspace::{EnsureOutcome, ensure_workspace};
