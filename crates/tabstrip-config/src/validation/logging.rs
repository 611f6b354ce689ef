//! Logging section validation.

use crate::schema::TabStripConfig;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &TabStripConfig) {
    let level = config.logging.level.to_lowercase();
    if !VALID_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            VALID_LEVELS.join(", ")
        ));
    }
}
