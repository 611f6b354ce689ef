//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod logging;
mod strip;


use crate::schema::TabStripConfig;
use tabstrip_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TabStripConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    strip::validate_strip(&mut errors, config);
    logging::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
