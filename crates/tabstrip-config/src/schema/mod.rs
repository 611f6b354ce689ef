//! Configuration schema types for the tab strip.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod strip;

pub use logging::*;
pub use strip::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabStripConfig {
    pub strip: StripConfig,
    pub logging: LoggingConfig,
}
