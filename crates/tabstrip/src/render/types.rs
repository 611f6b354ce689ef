//! Output of the render projector.

use serde::Serialize;
use tabstrip_common::ScrollDirection;

use crate::commands::TabStripCommand;

/// Everything a host needs to draw one frame of the widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection<'a, C> {
    /// Root element classes.
    pub class_name: String,
    pub header: HeaderView<'a>,
    /// Body container classes.
    pub body_class: String,
    pub panels: Vec<PanelView<'a, C>>,
    /// Which handles the next measurement pass reads.
    pub bindings: RefBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView<'a> {
    pub class_name: String,
    /// CSS padding reserving room for the arrows; `None` when hidden.
    pub padding: Option<String>,
    pub list_class: &'static str,
    pub items: Vec<HeaderItem<'a>>,
    /// Present only in the `line` variant.
    pub indicator: Option<Indicator>,
    /// Backward then forward; empty unless the strip overflows.
    pub arrows: Vec<ArrowControl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderItem<'a> {
    pub index: usize,
    pub title: &'a str,
    pub class_name: String,
    pub active: bool,
    pub disabled: bool,
    pub closable: bool,
    pub on_click: TabStripCommand,
    pub close_icon: Option<IconView>,
}

/// A glyph from the icon primitive plus the command its click sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconView {
    pub icon: String,
    pub class_name: Option<String>,
    pub on_click: TabStripCommand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicator {
    pub class_name: String,
    pub width: f64,
    pub offset: f64,
    pub transform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowControl {
    pub direction: ScrollDirection,
    pub icon: IconView,
}

/// One body panel. Unselected panels stay mounted but hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView<'a, C> {
    pub index: usize,
    pub class_name: String,
    pub selected: bool,
    pub title: &'a str,
    pub disabled: bool,
    pub content: &'a C,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefBindings {
    pub strip: bool,
    /// The header bound as "active"; `None` if no header matches the selection.
    pub active_header: Option<usize>,
}
