//! Render, post-render measurement and prop updates for TabStrip.

use tabstrip_common::Event;

use crate::geometry;
use crate::host::StripHost;
use crate::render::{self, Projection};
use crate::tab::TabDescriptor;

use super::{TabStrip, TabStripProps};

impl TabStrip {
    /// Project the current state. Pure; the host draws the result and
    /// then calls [`TabStrip::commit`].
    pub fn render<'a, C>(&self, children: &'a [TabDescriptor<C>]) -> Projection<'a, C> {
        render::project(
            &self.props.config,
            self.selection.selected(),
            &self.geometry,
            children,
        )
    }

    /// Post-render measurement pass. Returns `true` when the geometry
    /// changed and the host should render again.
    pub fn commit(&mut self, host: &dyn StripHost) -> bool {
        let next = geometry::measure_host(
            host,
            self.selection.selected(),
            self.props.config.orientation,
        );

        if next == self.geometry {
            tracing::trace!(strip = %self.id, "geometry unchanged");
            return false;
        }

        tracing::debug!(
            strip = %self.id,
            indicator_width = next.indicator_width,
            indicator_offset = next.indicator_offset,
            show_arrows = next.show_arrows,
            "geometry changed"
        );
        self.geometry = next;
        self.publish(Event::GeometryChanged {
            strip: self.id.clone(),
        });
        true
    }

    /// Re-measure after the host resized the strip.
    pub fn resize(&mut self, host: &dyn StripHost) -> bool {
        self.commit(host)
    }

    /// Accept the next props and children.
    ///
    /// A controlled `value` is re-applied on every call; the declared-selected
    /// child re-syncs only when it changes. Geometry is always re-measured,
    /// since a new child list can move headers even when the selection
    /// stays put. Returns `true` if the selection moved, the configuration
    /// changed or the geometry changed.
    pub fn update_props<C>(
        &mut self,
        next: TabStripProps,
        children: &[TabDescriptor<C>],
        host: &dyn StripHost,
    ) -> bool {
        let moved = self.selection.sync(next.value, children);
        let reconfigured = next.config != self.props.config;
        self.props = next;

        if let Some(index) = moved {
            tracing::debug!(strip = %self.id, index, "selection synced from props");
        }

        let remeasured = self.commit(host);
        moved.is_some() || reconfigured || remeasured
    }

    pub(super) fn publish(&self, event: Event) {
        if let Some(bus) = &self.bus {
            bus.publish(event);
        }
    }
}
