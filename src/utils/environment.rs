use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that points at an explicit config file
pub const CONFIG_PATH_ENV: &str = "LOGSEQ_SIDEKICK_CONFIG";

const APP_DIR: &str = "logseq-sidekick";
const CONFIG_FILENAME: &str = "config.json";

/// Resolve the settings file location.
///
/// `$LOGSEQ_SIDEKICK_CONFIG` wins when set and non-empty, otherwise
/// `<platform config dir>/logseq-sidekick/config.json`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let config_base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(config_base.join(APP_DIR).join(CONFIG_FILENAME))
}
