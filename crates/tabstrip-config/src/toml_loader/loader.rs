//! Reading `config.toml` into a [`TabStripConfig`].
//!
//! Parsing only. Validation happens once, in [`crate::load_config`] and
//! [`crate::load_config_from`].

use std::io::ErrorKind;
use std::path::Path;

use tabstrip_common::ConfigError;
use tracing::{debug, info};

use crate::schema::TabStripConfig;

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text. Missing sections and fields take their defaults.
pub fn load_from_str(content: &str) -> Result<TabStripConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("invalid TOML: {e}")))
}

/// Parse the file at `path`. A missing file is `FileNotFound`.
pub fn load_from_path(path: &Path) -> Result<TabStripConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config = load_from_str(&content).map_err(|e| match e {
        ConfigError::ParseError(msg) => ConfigError::ParseError(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    debug!(
        path = %path.display(),
        orientation = %config.strip.orientation,
        variant = %config.strip.variant,
        "config parsed"
    );
    Ok(config)
}

/// Parse the platform default file, writing the commented template first
/// when there is none.
///
/// Linux: `~/.config/tabstrip/config.toml`.
/// macOS: `~/Library/Application Support/tabstrip/config.toml`.
pub fn load_default() -> Result<TabStripConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            info!(path = %path.display(), "no config yet, using defaults");
            Ok(TabStripConfig::default())
        }
        loaded => loaded,
    }
}
