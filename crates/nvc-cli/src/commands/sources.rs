use serde::Serialize;

use nvc_toolchain::CellSession;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct SourcesResponse {
    workspace: String,
    sources: Vec<String>,
}

/// Handle `nvcell sources`.
pub fn handle(session: &CellSession, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = SourcesResponse {
        workspace: session.context().workspace.display().to_string(),
        sources: session
            .sources()?
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
    };

    if flags.format == OutputFormat::Text {
        for source in &response.sources {
            println!("{source}");
        }
        return Ok(());
    }
    output(&response, flags.format)
}
