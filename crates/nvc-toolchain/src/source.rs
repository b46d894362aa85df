use std::fs;
use std::path::{Path, PathBuf};

use nvc_core::enums::SourceKind;
use nvc_core::source::SourceName;

use crate::error::ToolchainError;

/// Validate `name` and write `contents` to it inside `workspace`.
///
/// Validation happens before any I/O. An existing file is overwritten.
pub fn write_source(
    workspace: &Path,
    name: &str,
    contents: &str,
) -> Result<PathBuf, ToolchainError> {
    let name = SourceName::parse(name)?;
    write_named_source(workspace, &name, contents)
}

/// Write `contents` verbatim and return the absolute path written.
///
/// A failure mid-write can leave a truncated file behind.
pub fn write_named_source(
    workspace: &Path,
    name: &SourceName,
    contents: &str,
) -> Result<PathBuf, ToolchainError> {
    let path = std::path::absolute(workspace.join(name))?;
    fs::write(&path, contents)?;
    tracing::debug!(path = %path.display(), kind = %name.kind(), bytes = contents.len(), "wrote source");
    Ok(path)
}

/// Compileable sources directly inside `workspace`, in directory order.
pub fn list_sources(workspace: &Path) -> Result<Vec<PathBuf>, ToolchainError> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(workspace)? {
        let path = entry?.path();
        if path.is_file() && is_compileable(&path) {
            sources.push(path);
        }
    }
    Ok(sources)
}

fn is_compileable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(SourceKind::from_extension)
        .is_some_and(SourceKind::is_compileable)
}
