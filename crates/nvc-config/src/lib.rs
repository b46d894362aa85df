//! # nvc-config
//!
//! Layered configuration loading for nvcell using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NVCELL_*` prefix, `__` as separator)
//! 2. Project-level `.nvcell/config.toml`
//! 3. User-level `~/.config/nvcell/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NVCELL_TOOLCHAIN__COMPILER` -> `toolchain.compiler`,
//! `NVCELL_WORKSPACE__STATIC_DIR` -> `workspace.static_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use nvc_config::NvcConfig;
//!
//! let config = NvcConfig::load_from(Path::new(".")).expect("config");
//! println!("compiler: {}", config.toolchain.compiler);
//! ```

mod error;
mod timing;
mod toolchain;
mod workspace;

pub use error::ConfigError;
pub use timing::TimingConfig;
pub use toolchain::ToolchainConfig;
pub use workspace::WorkspaceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the project directory.
pub const PROJECT_CONFIG_PATH: &str = ".nvcell/config.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "NVCELL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NvcConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub toolchain: ToolchainConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl NvcConfig {
    /// Load configuration using `project_dir` to locate the project-level file.
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    pub fn load_from(project_dir: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_dir).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for `project_dir`.
    pub fn figment_for(project_dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_dir.join(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toolchain.compiler.trim().is_empty() {
            return Err(invalid("toolchain.compiler", "must not be empty"));
        }
        if self.toolchain.out.trim().is_empty() {
            return Err(invalid("toolchain.out", "must not be empty"));
        }
        if self.workspace.relative_dir.trim().is_empty() {
            return Err(invalid("workspace.relative_dir", "must not be empty"));
        }
        if self.timing.repeat == 0 {
            return Err(invalid("timing.repeat", "must be at least 1"));
        }
        if self.timing.number == 0 {
            return Err(invalid("timing.number", "must be at least 1"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nvcell").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = NvcConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.workspace.static_dir);
        assert_eq!(config.timing.repeat, 7);
        assert_eq!(config.timing.number, 1);
    }

    #[test]
    fn figment_builds_without_files() {
        let temp = tempfile::TempDir::new().expect("tempdir should create");
        let config: NvcConfig = NvcConfig::figment_for(temp.path())
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.toolchain.out, "result.out");
    }

    #[test]
    fn zero_repeat_is_rejected() {
        let mut config = NvcConfig::default();
        config.timing.repeat = 0;
        let err = config.validate().expect_err("repeat 0 should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "timing.repeat"));
    }

    #[test]
    fn empty_compiler_is_rejected() {
        let mut config = NvcConfig::default();
        config.toolchain.compiler = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
