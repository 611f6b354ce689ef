//! Core types and constructors for TabStrip.

use tabstrip_common::{EventBus, StripId};
use tabstrip_config::StripConfig;

use crate::geometry::GeometryState;
use crate::selection::SelectionModel;
use crate::tab::TabDescriptor;

/// Receives a tab index.
pub type IndexCallback = Box<dyn FnMut(usize)>;

/// Receives the scroll offset the strip settled on.
pub type ScrollCallback = Box<dyn FnMut(f64)>;

/// Caller-supplied props, immutable for the duration of one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabStripProps {
    /// Controlled selected index.
    pub value: Option<usize>,
    /// Initial selection when uncontrolled.
    pub default_value: Option<usize>,
    pub config: StripConfig,
}

impl TabStripProps {
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: usize) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_value(mut self, value: usize) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// A tabbed header strip with panels.
///
/// Hosts drive it in two phases: [`TabStrip::render`] produces the
/// projection, and after the host has attached elements,
/// [`TabStrip::commit`] measures them. Click handlers re-measure before
/// firing callbacks, so observers always see settled geometry.
pub struct TabStrip {
    pub(super) id: StripId,
    pub(super) props: TabStripProps,
    pub(super) selection: SelectionModel,
    pub(super) geometry: GeometryState,
    pub(super) on_selection_change: Option<IndexCallback>,
    pub(super) on_tab_close: Option<IndexCallback>,
    pub(super) on_prev_click: Option<ScrollCallback>,
    pub(super) on_next_click: Option<ScrollCallback>,
    pub(super) bus: Option<EventBus>,
}

impl TabStrip {
    /// Create a widget. Geometry starts zeroed until the first commit.
    pub fn new<C>(props: TabStripProps, children: &[TabDescriptor<C>]) -> Self {
        let selection = SelectionModel::new(props.value, props.default_value, children);
        let id = StripId::new();
        tracing::debug!(
            strip = %id,
            selected = selection.selected(),
            tabs = children.len(),
            "tab strip created"
        );

        Self {
            id,
            props,
            selection,
            geometry: GeometryState::default(),
            on_selection_change: None,
            on_tab_close: None,
            on_prev_click: None,
            on_next_click: None,
            bus: None,
        }
    }

    pub fn with_selection_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    pub fn with_tab_close(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_tab_close = Some(Box::new(callback));
        self
    }

    pub fn with_prev_click(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_prev_click = Some(Box::new(callback));
        self
    }

    pub fn with_next_click(mut self, callback: impl FnMut(f64) + 'static) -> Self {
        self.on_next_click = Some(Box::new(callback));
        self
    }

    /// Publish selection, close and scroll events to `bus` as well.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    // -- Accessors --

    pub fn id(&self) -> &StripId {
        &self.id
    }

    pub fn props(&self) -> &TabStripProps {
        &self.props
    }

    pub fn config(&self) -> &StripConfig {
        &self.props.config
    }

    pub fn selected(&self) -> usize {
        self.selection.selected()
    }

    /// False after the caller shrank the children below the selection.
    pub fn selected_in_range(&self, len: usize) -> bool {
        self.selection.in_range(len)
    }

    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }
}

impl std::fmt::Debug for TabStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabStrip")
            .field("id", &self.id)
            .field("props", &self.props)
            .field("selection", &self.selection)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}
