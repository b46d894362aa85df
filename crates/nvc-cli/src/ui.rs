use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs {
        progress: progress_enabled(flags, std::io::stderr().is_terminal()),
    });
}

/// Spinners draw on stderr, so they only make sense for an interactive text session.
const fn progress_enabled(flags: &GlobalFlags, stderr_is_tty: bool) -> bool {
    stderr_is_tty && !flags.quiet && matches!(flags.format, OutputFormat::Text)
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
