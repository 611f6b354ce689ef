//! Tab strip configuration.
//!
//! TOML-based configuration with defaults for every field, so partial
//! configs work out of the box, plus full validation.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabstrip_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LoggingConfig, StripConfig, TabStripConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use tabstrip_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default file if none exists.
pub fn load_config() -> Result<TabStripConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<TabStripConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TabStripConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
