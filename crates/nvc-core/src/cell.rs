//! Cell flags delivered by the host session.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::source::SourceName;

/// Recognized options of a single cell invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellFlags {
    /// Compile the workspace after writing and run the artifact.
    pub produce_compile: bool,
    /// Run the artifact under the timing harness.
    pub time_it: bool,
    /// File name the cell contents are written to.
    pub source_name: String,
}

/// Cell flags that passed validation at the session boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRequest {
    pub source: SourceName,
    pub produce_compile: bool,
    pub time_it: bool,
}

impl CellFlags {
    /// Validate the flags before anything enters the pipeline.
    ///
    /// # Errors
    ///
    /// Returns a [`CoreError`] when `source_name` is not an acceptable file name.
    pub fn validate(&self) -> Result<CellRequest, CoreError> {
        Ok(CellRequest {
            source: SourceName::parse(&self.source_name)?,
            produce_compile: self.produce_compile,
            time_it: self.time_it,
        })
    }
}
