use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::error::ToolchainError;

/// What [`ensure_workspace`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsureOutcome {
    Created,
    Existing,
}

/// Make sure `path` exists as a directory, creating missing parents.
///
/// Calling this repeatedly is a no-op once the directory exists. There is no
/// locking: concurrent sessions on the same path race.
pub fn ensure_workspace(path: &Path) -> Result<EnsureOutcome, ToolchainError> {
    let unusable = |reason: String| ToolchainError::Directory {
        path: path.to_path_buf(),
        reason,
    };

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(EnsureOutcome::Existing),
        Ok(_) => return Err(unusable("path exists and is not a directory".to_string())),
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => return Err(unusable(error.to_string())),
    }

    fs::create_dir_all(path).map_err(|error| unusable(error.to_string()))?;
    tracing::info!(path = %path.display(), "created workspace directory");
    Ok(EnsureOutcome::Created)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::{EnsureOutcome, ensure_workspace};
    use crate::error::ToolchainError;

    #[test]
    fn creates_missing_directory_tree() {
        let temp = TempDir::new().expect("tempdir should create");
        let target = temp.path().join("a/b/cuda");

        let outcome = ensure_workspace(&target).expect("workspace should be created");
        assert_eq!(outcome, EnsureOutcome::Created);
        assert!(target.is_dir());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let temp = TempDir::new().expect("tempdir should create");
        let target = temp.path().join("cuda");
        std::fs::create_dir(&target).expect("dir should create");
        std::fs::write(target.join("kernel.cu"), "// keep").expect("file should write");

        assert_eq!(
            ensure_workspace(&target).expect("first call"),
            EnsureOutcome::Existing
        );
        assert_eq!(
            ensure_workspace(&target).expect("second call"),
            EnsureOutcome::Existing
        );
        let kept = std::fs::read_to_string(target.join("kernel.cu")).expect("file should read");
        assert_eq!(kept, "// keep");
    }

    #[test]
    fn rejects_existing_file() {
        let temp = TempDir::new().expect("tempdir should create");
        let target = temp.path().join("not-a-dir");
        std::fs::write(&target, "x").expect("file should write");

        let err = ensure_workspace(&target).expect_err("file path should fail");
        assert!(matches!(err, ToolchainError::Directory { .. }));
    }

    #[test]
    fn rejects_path_below_a_file() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::write(temp.path().join("blocker"), "x").expect("file should write");

        let err = ensure_workspace(&temp.path().join("blocker/cuda"))
            .expect_err("path under a file should fail");
        assert!(matches!(err, ToolchainError::Directory { .. }));
    }
}
