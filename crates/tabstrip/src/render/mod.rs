//! Render projector: a pure mapping from configuration, selection and
//! geometry to the element tree the host draws.

mod class_names;
mod types;

pub use class_names::class_names;
pub use types::*;

use tabstrip_common::ScrollDirection;
use tabstrip_config::StripConfig;

use crate::commands::TabStripCommand;
use crate::geometry::GeometryState;
use crate::tab::TabDescriptor;

/// Icon type of the per-header close control.
pub const CLOSE_ICON: &str = "wrong";

/// Project one frame.
pub fn project<'a, C>(
    config: &StripConfig,
    selected: usize,
    geometry: &GeometryState,
    children: &'a [TabDescriptor<C>],
) -> Projection<'a, C> {
    let prefix = config.prefix_cls.as_str();

    let class_name = class_names([
        (prefix.to_string(), true),
        (format!("tabs-{}", config.variant), true),
        (format!("tabs-{}", config.orientation), true),
        (config.class_name.clone().unwrap_or_default(), config.class_name.is_some()),
    ]);

    let items = children
        .iter()
        .enumerate()
        .map(|(index, tab)| header_item(config, selected, index, tab))
        .collect();

    let indicator = config.variant.draws_indicator().then(|| Indicator {
        class_name: format!("{prefix}-line"),
        width: geometry.indicator_width,
        offset: geometry.indicator_offset,
        transform: format!("translate3d({}px,0,0)", geometry.indicator_offset),
    });

    let arrows = if geometry.show_arrows {
        [ScrollDirection::Backward, ScrollDirection::Forward]
            .into_iter()
            .map(|direction| arrow(config, direction))
            .collect()
    } else {
        Vec::new()
    };

    let panels = children
        .iter()
        .enumerate()
        .map(|(index, tab)| PanelView {
            index,
            class_name: if index == selected {
                format!("{prefix}-body-item--active")
            } else {
                format!("{prefix}-body-item")
            },
            selected: index == selected,
            title: tab.title.as_str(),
            disabled: tab.disabled,
            content: &tab.content,
        })
        .collect();

    Projection {
        class_name,
        header: HeaderView {
            class_name: class_names([
                (format!("{prefix}-header"), true),
                (format!("size-{}", config.size), true),
            ]),
            padding: geometry
                .show_arrows
                .then(|| config.orientation.arrow_padding(config.arrow_padding)),
            list_class: "scroll-content",
            items,
            indicator,
            arrows,
        },
        body_class: format!("{prefix}-body"),
        panels,
        bindings: RefBindings {
            strip: true,
            active_header: (selected < children.len()).then_some(selected),
        },
    }
}

fn header_item<'a, C>(
    config: &StripConfig,
    selected: usize,
    index: usize,
    tab: &'a TabDescriptor<C>,
) -> HeaderItem<'a> {
    let prefix = config.prefix_cls.as_str();
    let active = index == selected;

    HeaderItem {
        index,
        title: tab.title.as_str(),
        class_name: class_names([
            (format!("{prefix}-header-item"), true),
            (format!("{prefix}-header-item--disabled"), tab.disabled),
            (format!("{prefix}-header-item--closable"), config.closable),
            (format!("{prefix}-header-item--active"), active),
        ]),
        active,
        disabled: tab.disabled,
        closable: config.closable,
        on_click: TabStripCommand::Select(index),
        close_icon: config.closable.then(|| IconView {
            icon: CLOSE_ICON.to_string(),
            class_name: None,
            on_click: TabStripCommand::Close(index),
        }),
    }
}

fn arrow(config: &StripConfig, direction: ScrollDirection) -> ArrowControl {
    let name = direction.arrow_name(config.orientation);
    ArrowControl {
        direction,
        icon: IconView {
            icon: format!("arrow-{name}"),
            class_name: Some(format!("tabs-arrow tabs-arrow-{name}")),
            on_click: match direction {
                ScrollDirection::Backward => TabStripCommand::ScrollBackward,
                ScrollDirection::Forward => TabStripCommand::ScrollForward,
            },
        },
    }
}
