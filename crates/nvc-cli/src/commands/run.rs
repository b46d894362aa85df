use nvc_toolchain::CellSession;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::output;
use crate::progress::Progress;

/// Handle `nvcell run`.
pub fn handle(args: &RunArgs, session: &CellSession, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("compiling workspace");
    let outcome = session.evaluate_workspace(args.timeit);
    spinner.finish_clear();

    output::outcome(&outcome, flags.format)
}
