//! Where the config file lives, and seeding it with the template.

use std::path::{Path, PathBuf};

use tabstrip_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "tabstrip";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/tabstrip/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }

    let io_error = |action: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create parent of", e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
