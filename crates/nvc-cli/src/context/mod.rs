use std::path::{Path, PathBuf};

use nvc_config::NvcConfig;
use nvc_toolchain::{CellSession, ToolchainError};

use crate::cli::GlobalFlags;

mod config_warnings;

pub use config_warnings::warn_unconfigured;

/// Open the cell session, honoring a `--workspace` override.
pub fn open_session(
    config: &NvcConfig,
    cwd: &Path,
    flags: &GlobalFlags,
) -> Result<CellSession, ToolchainError> {
    match &flags.workspace {
        Some(dir) => CellSession::open_with_workspace(config, cwd, Some(PathBuf::from(dir))),
        None => CellSession::open(config, cwd),
    }
}
