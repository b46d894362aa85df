//! Compiler and build artifact configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_compiler() -> String {
    String::from("/usr/local/cuda/bin/nvcc")
}

fn default_out() -> String {
    String::from("result.out")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolchainConfig {
    /// Compiler binary, as a path or a name resolved through `PATH`.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// File name of the build artifact.
    #[serde(default = "default_out")]
    pub out: String,

    /// Kill spawned processes after this many seconds. `0` disables the limit.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl ToolchainConfig {
    /// Process timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            compiler: default_compiler(),
            out: default_out(),
            timeout_secs: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ToolchainConfig::default();
        assert_eq!(config.compiler, "/usr/local/cuda/bin/nvcc");
        assert_eq!(config.out, "result.out");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn nonzero_timeout_is_enabled() {
        let config = ToolchainConfig {
            timeout_secs: 30,
            ..ToolchainConfig::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }
}
