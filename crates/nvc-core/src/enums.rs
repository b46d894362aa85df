//! Source kinds and pipeline stages.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`PipelineStage`] provides `allowed_next_states()` to enforce valid
//! transitions inside the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

/// Kind of a source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A compileable unit (`.cu`), passed to the compiler.
    Unit,
    /// A header unit (`.h`), reachable through the include path only.
    Header,
}

impl SourceKind {
    /// Every accepted kind.
    pub const ALL: [Self; 2] = [Self::Unit, Self::Header];

    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Unit => "cu",
            Self::Header => "h",
        }
    }

    /// Look up the kind for an extension. Matching is case-sensitive.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == extension)
    }

    #[must_use]
    pub const fn is_compileable(self) -> bool {
        matches!(self, Self::Unit)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PipelineStage
// ---------------------------------------------------------------------------

/// Stage of a single pipeline invocation.
///
/// ```text
/// idle → directory_ensured → source_written → compiled → executed → done
///   ↘            ↘                  ↘              ↘
///                         errored
/// ```
///
/// `source_written` may move straight to `done` when no compile was
/// requested. `errored` and `done` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Idle,
    DirectoryEnsured,
    SourceWritten,
    Compiled,
    Executed,
    Done,
    Errored,
}

impl PipelineStage {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::DirectoryEnsured, Self::Errored],
            Self::DirectoryEnsured => &[Self::SourceWritten, Self::Errored],
            Self::SourceWritten => &[Self::Compiled, Self::Done, Self::Errored],
            Self::Compiled => &[Self::Executed, Self::Errored],
            Self::Executed => &[Self::Done],
            Self::Done | Self::Errored => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Errored)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::DirectoryEnsured => "directory_ensured",
            Self::SourceWritten => "source_written",
            Self::Compiled => "compiled",
            Self::Executed => "executed",
            Self::Done => "done",
            Self::Errored => "errored",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
