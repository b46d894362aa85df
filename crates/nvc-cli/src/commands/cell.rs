use std::io::{IsTerminal, Read};

use anyhow::Context;
use nvc_toolchain::CellSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CellArgs;
use crate::output;
use crate::progress::Progress;

/// Handle `nvcell cell`.
pub fn handle(args: &CellArgs, session: &CellSession, flags: &GlobalFlags) -> anyhow::Result<()> {
    let contents = read_contents(args)?;
    let cell = args.to_flags();

    let spinner = args
        .compile
        .then(|| Progress::spinner(&format!("compiling {}", args.name)));
    let outcome = session.evaluate(&cell, &contents);
    if let Some(spinner) = spinner {
        spinner.finish_clear();
    }

    output::outcome(&outcome, flags.format)
}

fn read_contents(args: &CellArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.source {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cell contents from {path}"));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("cell contents must be piped on stdin or passed with --source");
    }
    let mut contents = String::new();
    stdin
        .read_to_string(&mut contents)
        .context("failed to read cell contents from stdin")?;
    Ok(contents)
}
