use serde::{Deserialize, Serialize};

/// Log filter level used when no `--log-level` or `RUST_LOG` is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive scoped to the tabstrip crates.
    pub fn directive(&self) -> String {
        format!("tabstrip={}", self.level.to_lowercase())
    }
}
