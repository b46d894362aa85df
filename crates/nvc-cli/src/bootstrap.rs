use std::path::Path;

use anyhow::Context;
use nvc_config::NvcConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config(cwd: &Path) -> anyhow::Result<NvcConfig> {
    load_dotenv(cwd)?;
    NvcConfig::load_from(cwd).context("failed to load nvcell configuration")
}

fn load_dotenv(cwd: &Path) -> anyhow::Result<()> {
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
