//! Validated source file names.

use std::fmt;
use std::path::{Component, Path};

use serde::Serialize;

use crate::enums::SourceKind;
use crate::errors::CoreError;

/// A bare file name with an extension from the allow-set.
///
/// Construction is the only validation point: once a `SourceName` exists it
/// is safe to join onto a workspace directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceName {
    name: String,
    kind: SourceKind,
}

impl SourceName {
    /// Validate `name` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidName`] when `name` is empty or carries path
    /// components, and [`CoreError::InvalidExtension`] when its extension is
    /// not `cu` or `h`.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(first)), None) if first == name => {}
            _ => return Err(invalid("name must be a bare file name")),
        }

        let kind = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceKind::from_extension)
            .ok_or_else(|| CoreError::InvalidExtension {
                name: name.to_string(),
            })?;

        Ok(Self {
            name: name.to_string(),
            kind,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        self.kind
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<Path> for SourceName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.name)
    }
}
