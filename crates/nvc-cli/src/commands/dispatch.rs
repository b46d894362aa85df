use nvc_toolchain::CellSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    session: &CellSession,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Cell(args) => commands::cell::handle(&args, session, flags),
        Commands::Run(args) => commands::run::handle(&args, session, flags),
        Commands::Sources => commands::sources::handle(session, flags),
        Commands::Config => unreachable!("config is pre-dispatched in main"),
    }
}
