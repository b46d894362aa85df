use clap::{Args, Subcommand};
use nvc_core::cell::CellFlags;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Write a cell into the workspace, optionally compiling and running it.
    Cell(CellArgs),
    /// Compile every .cu source in the workspace and run the result.
    Run(RunArgs),
    /// List compileable sources in the workspace.
    Sources,
    /// Show the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct CellArgs {
    /// File name for the cell contents (must end with .cu or .h)
    #[arg(short, long)]
    pub name: String,

    /// Compile the written source and run the artifact
    #[arg(short, long)]
    pub compile: bool,

    /// Time the artifact instead of printing its output
    #[arg(short, long)]
    pub timeit: bool,

    /// Read cell contents from this file instead of stdin
    #[arg(short, long)]
    pub source: Option<String>,
}

impl CellArgs {
    /// Flags handed to the session; validation happens there.
    #[must_use]
    pub fn to_flags(&self) -> CellFlags {
        CellFlags {
            produce_compile: self.compile,
            time_it: self.timeit,
            source_name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Time the artifact instead of printing its output
    #[arg(short, long)]
    pub timeit: bool,
}
