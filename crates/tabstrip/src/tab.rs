//! Caller-owned tab descriptors.

use serde::{Deserialize, Serialize};

/// One child tab: its header title, flags and panel content.
///
/// The widget never mutates descriptors; the caller owns the list and
/// removes entries itself when a tab is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabDescriptor<C> {
    pub title: String,
    pub disabled: bool,
    /// Initial-selection hint.
    pub selected: bool,
    pub content: C,
}

impl<C> TabDescriptor<C> {
    pub fn new(title: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            disabled: false,
            selected: false,
            content,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}
