//! Cross-cutting error types for nvcell.
//!
//! Process and filesystem errors live in `nvc-toolchain`; configuration errors
//! live in `nvc-config`. The CLI converges all of them through `anyhow`.

use thiserror::Error;

use crate::enums::PipelineStage;

/// Errors that can be raised by any nvcell crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The source name does not end with an allowed extension.
    #[error("invalid source name '{name}': name must end with .cu or .h")]
    InvalidExtension { name: String },

    /// The source name is not a bare file name.
    #[error("invalid source name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A pipeline stage transition was attempted that is not allowed.
    #[error("invalid pipeline transition from {from} to {to}")]
    InvalidTransition {
        from: PipelineStage,
        to: PipelineStage,
    },
}
