//! Workspace directory configuration.

use serde::{Deserialize, Serialize};

fn default_relative_dir() -> String {
    String::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Use a fixed workspace directory under the current directory.
    ///
    /// When false the current directory itself is the workspace.
    #[serde(default)]
    pub static_dir: bool,

    /// Workspace location relative to the current directory.
    #[serde(default = "default_relative_dir")]
    pub relative_dir: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            static_dir: false,
            relative_dir: default_relative_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_current_directory() {
        let config = WorkspaceConfig::default();
        assert!(!config.static_dir);
        assert_eq!(config.relative_dir, ".");
    }
}
