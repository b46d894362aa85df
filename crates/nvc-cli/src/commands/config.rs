use anyhow::Context;
use nvc_config::NvcConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `nvcell config`: print the effective, merged configuration.
pub fn handle(config: &NvcConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Text {
        print!("{}", render_toml(config)?);
        return Ok(());
    }
    output(config, flags.format)
}

fn render_toml(config: &NvcConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("failed to render configuration as TOML")
}
