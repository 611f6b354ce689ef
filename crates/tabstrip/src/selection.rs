//! Selection model: which tab is active, and how external props feed it.

use crate::tab::TabDescriptor;

/// Index of the first child flagged `selected`, if any.
pub fn declared_selected<C>(children: &[TabDescriptor<C>]) -> Option<usize> {
    children.iter().position(|tab| tab.selected)
}

/// Resolve the starting selection.
///
/// Precedence: controlled `value`, then `default_value`, then the first
/// child flagged `selected`, then 0.
pub fn initial_selection<C>(
    value: Option<usize>,
    default_value: Option<usize>,
    children: &[TabDescriptor<C>],
) -> usize {
    value
        .or(default_value)
        .or_else(|| declared_selected(children))
        .unwrap_or(0)
}

/// Owns the selected index and the last declared-selected child it synced from.
///
/// The index is not bounded against the child count; a caller that
/// shrinks the list is responsible for passing a valid `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel {
    selected: usize,
    last_declared: Option<usize>,
}

impl SelectionModel {
    pub fn new<C>(
        value: Option<usize>,
        default_value: Option<usize>,
        children: &[TabDescriptor<C>],
    ) -> Self {
        Self {
            selected: initial_selection(value, default_value, children),
            last_declared: declared_selected(children),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Whether the selection points at an existing child.
    pub fn in_range(&self, len: usize) -> bool {
        self.selected < len
    }

    /// Apply a header click. Disabled headers are inert.
    ///
    /// Returns `true` when the selection was written, including a re-click
    /// on the tab that is already active.
    pub fn click(&mut self, index: usize, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.selected = index;
        true
    }

    /// Sync from the next external inputs.
    ///
    /// A controlled `value` always wins, so a click made in controlled mode
    /// is undone by the next sync unless the caller adopted it. Without a
    /// controlled value, a change of the declared-selected child to a new
    /// index re-syncs; losing the declaration keeps the current selection.
    /// Returns the new index only when the selection moved.
    pub fn sync<C>(&mut self, value: Option<usize>, children: &[TabDescriptor<C>]) -> Option<usize> {
        let declared = declared_selected(children);

        let target = match value {
            Some(v) => Some(v),
            None if declared != self.last_declared => declared,
            None => None,
        };

        self.last_declared = declared;

        match target {
            Some(index) if index != self.selected => {
                self.selected = index;
                Some(index)
            }
            _ => None,
        }
    }
}
