use std::path::Path;

use nvc_config::{ENV_PREFIX, NvcConfig};

const LOG_VAR: &str = "NVCELL_LOG";

/// Emit warnings for likely mistyped env var keys and an unreachable compiler.
pub fn warn_unconfigured(config: &NvcConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &NvcConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX) && key != LOG_VAR && !key.contains("__"))
        .map(|key| {
            format!(
                "{key} is ignored. Use double underscores between section and field (example: NVCELL_TOOLCHAIN__COMPILER)."
            )
        })
        .collect::<Vec<_>>();
    warnings.sort();

    let compiler = Path::new(&config.toolchain.compiler);
    if compiler.is_absolute() && !compiler.exists() {
        warnings.push(format!(
            "compiler {} does not exist; set toolchain.compiler or NVCELL_TOOLCHAIN__COMPILER.",
            compiler.display()
        ));
    }

    warnings
}
