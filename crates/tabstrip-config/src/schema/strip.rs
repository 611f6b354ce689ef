//! Header strip presentation options.

use serde::{Deserialize, Serialize};
use tabstrip_common::{Orientation, Size, Variant};

/// Default class-name prefix for every generated class.
pub const DEFAULT_PREFIX_CLS: &str = "zw-tabs";

/// Default space reserved at each end of the header for the arrows.
pub const DEFAULT_ARROW_PADDING: f64 = 20.0;

/// Per-widget configuration (the non-callback props).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Header layout axis; also the scroll axis.
    pub orientation: Orientation,
    /// `card`, `line` or `borderless-card`.
    pub variant: Variant,
    /// Visual sizing only.
    pub size: Size,
    /// Render a close icon on every header.
    pub closable: bool,
    /// Prefix for generated class names.
    pub prefix_cls: String,
    /// Extra class appended to the root element.
    pub class_name: Option<String>,
    /// Header padding in pixels while arrows are shown (valid range: 0-200).
    pub arrow_padding: f64,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            variant: Variant::Card,
            size: Size::Md,
            closable: false,
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            class_name: None,
            arrow_padding: DEFAULT_ARROW_PADDING,
        }
    }
}
