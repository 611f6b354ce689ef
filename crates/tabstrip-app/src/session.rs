//! Scripted session: a widget, a virtual host and the caller-side state
//! (descriptors, props) a real embedder would own.

use std::str::FromStr;

use serde::Serialize;
use tabstrip::{
    GeometryState, Projection, ScrollContainer, TabDescriptor, TabStrip, TabStripCommand,
    TabStripProps, VirtualStrip,
};
use tabstrip_common::{Event, EventBus, Orientation, Rect, TabStripError};
use tabstrip_config::StripConfig;
use tokio::sync::broadcast;

/// Cross-axis size of the virtual strip frame.
const CROSS_EXTENT_HORIZONTAL: f64 = 32.0;
const CROSS_EXTENT_VERTICAL: f64 = 120.0;

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Select(usize),
    Close(usize),
    /// Set the controlled value.
    Value(usize),
    Forward,
    Backward,
    /// Resize the visible strip extent.
    Resize(f64),
}

impl FromStr for Action {
    type Err = TabStripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || TabStripError::InvalidAction(s.to_string());

        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };
        let index = || -> Result<usize, TabStripError> {
            arg.ok_or_else(invalid)?.parse().map_err(|_| invalid())
        };

        match (name.to_lowercase().as_str(), arg) {
            ("select", Some(_)) => Ok(Action::Select(index()?)),
            ("close", Some(_)) => Ok(Action::Close(index()?)),
            ("value", Some(_)) => Ok(Action::Value(index()?)),
            ("forward" | "next", None) => Ok(Action::Forward),
            ("backward" | "prev", None) => Ok(Action::Backward),
            ("resize", Some(px)) => match px.parse::<f64>() {
                Ok(px) if px.is_finite() && px >= 0.0 => Ok(Action::Resize(px)),
                _ => Err(invalid()),
            },
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Select(i) => write!(f, "select:{i}"),
            Action::Close(i) => write!(f, "close:{i}"),
            Action::Value(i) => write!(f, "value:{i}"),
            Action::Forward => f.write_str("forward"),
            Action::Backward => f.write_str("backward"),
            Action::Resize(px) => write!(f, "resize:{px}"),
        }
    }
}

/// Parse a comma-separated action list. Empty entries are skipped.
pub fn parse_actions(list: &str) -> Result<Vec<Action>, TabStripError> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Inputs that shape the session before any step runs.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub titles: Vec<String>,
    pub header_extent: f64,
    pub visible_extent: f64,
    pub value: Option<usize>,
    pub default_value: Option<usize>,
    pub disabled: Vec<usize>,
}

/// State after one step, as printed by the driver.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub step: usize,
    pub action: String,
    /// Whether the widget acted on the step.
    pub applied: bool,
    pub selected: usize,
    pub scroll_offset: f64,
    pub geometry: GeometryState,
    pub events: Vec<Event>,
    pub projection: Projection<'a, String>,
}

pub struct Session {
    strip: TabStrip,
    host: VirtualStrip,
    children: Vec<TabDescriptor<String>>,
    props: TabStripProps,
    events: broadcast::Receiver<Event>,
    step: usize,
}

impl Session {
    /// Build the widget and run its first render/commit cycle.
    pub fn new(config: StripConfig, options: SessionOptions) -> Self {
        let children: Vec<TabDescriptor<String>> = options
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                TabDescriptor::new(title.clone(), format!("{title} panel"))
                    .with_disabled(options.disabled.contains(&i))
            })
            .collect();

        let orientation = config.orientation;
        let frame = match orientation {
            Orientation::Horizontal => {
                Rect::new(0.0, 0.0, options.visible_extent, CROSS_EXTENT_HORIZONTAL)
            }
            Orientation::Vertical => {
                Rect::new(0.0, 0.0, CROSS_EXTENT_VERTICAL, options.visible_extent)
            }
        };
        let host = VirtualStrip::uniform(orientation, frame, children.len(), options.header_extent);

        let props = TabStripProps {
            value: options.value,
            default_value: options.default_value,
            config,
        };

        let bus = EventBus::new(64);
        let events = bus.subscribe();
        let strip = TabStrip::new(props.clone(), &children)
            .with_event_bus(bus)
            .with_selection_change(|index| tracing::info!(index, "selection changed"))
            .with_tab_close(|index| tracing::info!(index, "close requested"))
            .with_prev_click(|offset| tracing::info!(offset, "scrolled backward"))
            .with_next_click(|offset| tracing::info!(offset, "scrolled forward"));

        let mut session = Self {
            strip,
            host,
            children,
            props,
            events,
            step: 0,
        };
        session.strip.commit(&session.host);
        session
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn children(&self) -> &[TabDescriptor<String>] {
        &self.children
    }

    pub fn scroll_offset(&self) -> f64 {
        self.host.scroll_offset(self.props.config.orientation)
    }

    /// Snapshot of the state right after mount.
    pub fn initial(&mut self) -> Snapshot<'_> {
        self.snapshot("mount".to_string(), true)
    }

    /// Run one step and snapshot the result.
    pub fn apply(&mut self, action: Action) -> Snapshot<'_> {
        self.step += 1;
        tracing::debug!(step = self.step, %action, "applying action");

        let applied = match action {
            Action::Select(index) => {
                self.strip
                    .execute(TabStripCommand::Select(index), &self.children, &mut self.host)
            }
            Action::Close(index) => self.close(index),
            Action::Value(index) => {
                self.props.value = Some(index);
                self.strip
                    .update_props(self.props.clone(), &self.children, &self.host)
            }
            Action::Forward => {
                self.strip
                    .execute(TabStripCommand::ScrollForward, &self.children, &mut self.host)
            }
            Action::Backward => {
                self.strip
                    .execute(TabStripCommand::ScrollBackward, &self.children, &mut self.host)
            }
            Action::Resize(px) => {
                self.host.set_visible_extent(px);
                self.strip.resize(&self.host)
            }
        };

        if !applied {
            tracing::debug!(step = self.step, %action, "action had no effect");
        }
        self.snapshot(action.to_string(), applied)
    }

    /// Closing only notifies; removing the tab is the embedder's job.
    fn close(&mut self, index: usize) -> bool {
        if !self
            .strip
            .execute(TabStripCommand::Close(index), &self.children, &mut self.host)
        {
            return false;
        }

        self.children.remove(index);
        self.host.remove_header(index);
        self.strip
            .update_props(self.props.clone(), &self.children, &self.host);
        true
    }

    fn snapshot(&mut self, action: String, applied: bool) -> Snapshot<'_> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }

        Snapshot {
            step: self.step,
            action,
            applied,
            selected: self.strip.selected(),
            scroll_offset: self.scroll_offset(),
            geometry: *self.strip.geometry(),
            events,
            projection: self.strip.render(&self.children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabstrip_common::Variant;

    fn options(count: usize) -> SessionOptions {
        SessionOptions {
            titles: (0..count).map(|i| format!("Tab {i}")).collect(),
            header_extent: 100.0,
            visible_extent: 300.0,
            value: None,
            default_value: None,
            disabled: Vec::new(),
        }
    }

    fn line() -> StripConfig {
        StripConfig {
            variant: Variant::Line,
            ..Default::default()
        }
    }

    #[test]
    fn parses_action_list() {
        let actions = parse_actions("select:2, forward,close:1,value:0,backward,resize:500,").unwrap();
        assert_eq!(
            actions,
            vec![
                Action::Select(2),
                Action::Forward,
                Action::Close(1),
                Action::Value(0),
                Action::Backward,
                Action::Resize(500.0),
            ]
        );
        assert!(parse_actions("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_actions() {
        for bad in ["select", "select:x", "forward:1", "jump", "resize:-5", "close:"] {
            let err = bad.parse::<Action>().unwrap_err();
            assert!(matches!(err, TabStripError::InvalidAction(_)), "{bad}");
        }
    }

    #[test]
    fn action_display_matches_syntax() {
        for text in ["select:3", "close:0", "value:1", "forward", "backward", "resize:250"] {
            assert_eq!(text.parse::<Action>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn mount_measures_geometry() {
        let mut session = Session::new(line(), options(5));
        let snap = session.initial();
        assert_eq!(snap.step, 0);
        assert!(snap.geometry.show_arrows);
        assert_eq!(snap.geometry.indicator_width, 100.0);
        assert_eq!(snap.projection.header.arrows.len(), 2);
        assert!(matches!(snap.events.as_slice(), [Event::GeometryChanged { .. }]));
    }

    #[test]
    fn select_then_scroll() {
        let mut session = Session::new(line(), options(5));
        session.initial();

        let snap = session.apply(Action::Select(3));
        assert!(snap.applied);
        assert_eq!(snap.selected, 3);
        assert_eq!(snap.geometry.indicator_offset, 300.0);

        let snap = session.apply(Action::Forward);
        assert_eq!(snap.scroll_offset, 200.0);
        assert_eq!(snap.geometry.indicator_offset, 300.0);
        assert!(matches!(snap.events.as_slice(), [Event::Scrolled { .. }]));
    }

    #[test]
    fn disabled_select_is_not_applied() {
        let mut opts = options(3);
        opts.disabled = vec![1];
        let mut session = Session::new(StripConfig::default(), opts);
        session.initial();

        let snap = session.apply(Action::Select(1));
        assert!(!snap.applied);
        assert_eq!(snap.selected, 0);
        assert!(snap.events.is_empty());
    }

    #[test]
    fn close_removes_tab_and_keeps_selection() {
        let mut opts = options(4);
        opts.default_value = Some(1);
        let mut session = Session::new(line(), opts);

        let snap = session.apply(Action::Close(3));
        assert!(snap.applied);
        assert_eq!(snap.selected, 1);
        assert_eq!(snap.projection.header.items.len(), 3);
        assert!(!snap.geometry.show_arrows);
        assert_eq!(session.children().len(), 3);
    }

    #[test]
    fn close_past_selection_leaves_it_out_of_range() {
        let mut opts = options(3);
        opts.default_value = Some(2);
        let mut session = Session::new(line(), opts);

        session.apply(Action::Close(0));
        assert_eq!(session.strip().selected(), 2);
        assert!(!session.strip().selected_in_range(session.children().len()));
    }

    #[test]
    fn value_and_resize_steps() {
        let mut session = Session::new(line(), options(5));

        let snap = session.apply(Action::Value(4));
        assert!(snap.applied);
        assert_eq!(snap.selected, 4);

        let snap = session.apply(Action::Value(4));
        assert!(!snap.applied);

        let snap = session.apply(Action::Resize(500.0));
        assert!(snap.applied);
        assert!(!snap.geometry.show_arrows);
        assert_eq!(snap.geometry.strip_width, 500.0);
    }

    #[test]
    fn snapshot_serializes() {
        let mut session = Session::new(StripConfig::default(), options(2));
        session.initial();
        let snap = session.apply(Action::Select(1));
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["action"], "select:1");
        assert_eq!(json["selected"], 1);
        assert_eq!(json["projection"]["panels"][1]["content"], "Tab 1 panel");
        assert_eq!(json["events"][0]["type"], "GeometryChanged");
        assert_eq!(json["events"][1]["type"], "SelectionChanged");
        assert_eq!(json["events"][1]["data"]["index"], 1);
    }
}
