use serde::{Deserialize, Serialize};

/// What a clickable element in the projection does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "index", rename_all = "snake_case")]
pub enum TabStripCommand {
    Select(usize),
    Close(usize),
    ScrollBackward,
    ScrollForward,
}
