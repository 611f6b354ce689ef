//! User-interaction handlers and command dispatch for TabStrip.

use tabstrip_common::{Event, ScrollDirection};

use crate::commands::TabStripCommand;
use crate::host::StripHost;
use crate::scroll;
use crate::tab::TabDescriptor;

use super::TabStrip;

impl TabStrip {
    /// Header click. Selects, re-measures, then notifies.
    ///
    /// Disabled headers are inert. Returns `true` when the selection was written.
    pub fn select_tab(&mut self, index: usize, disabled: bool, host: &dyn StripHost) -> bool {
        if !self.selection.click(index, disabled) {
            tracing::trace!(strip = %self.id, index, "click on disabled tab ignored");
            return false;
        }

        tracing::debug!(strip = %self.id, index, "tab selected");
        self.commit(host);

        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(index);
        }
        self.publish(Event::SelectionChanged {
            strip: self.id.clone(),
            index,
        });
        true
    }

    /// Close-icon click. Never touches the selection; the caller removes
    /// the tab and passes the new children on the next render.
    pub fn close_tab(&mut self, index: usize, disabled: bool) -> bool {
        if disabled {
            tracing::trace!(strip = %self.id, index, "close on disabled tab ignored");
            return false;
        }

        tracing::debug!(strip = %self.id, index, "tab close requested");
        if let Some(callback) = self.on_tab_close.as_mut() {
            callback(index);
        }
        self.publish(Event::TabClosed {
            strip: self.id.clone(),
            index,
        });
        true
    }

    /// Backward arrow. Returns the settled offset, or `None` if the strip is detached.
    pub fn scroll_backward(&mut self, host: &mut dyn StripHost) -> Option<f64> {
        self.scroll(host, ScrollDirection::Backward)
    }

    /// Forward arrow. Returns the settled offset, or `None` if the strip is detached.
    pub fn scroll_forward(&mut self, host: &mut dyn StripHost) -> Option<f64> {
        self.scroll(host, ScrollDirection::Forward)
    }

    fn scroll(&mut self, host: &mut dyn StripHost, direction: ScrollDirection) -> Option<f64> {
        let orientation = self.props.config.orientation;
        let Some(strip) = host.strip_mut() else {
            tracing::trace!(strip = %self.id, ?direction, "scroll with detached strip ignored");
            return None;
        };

        let offset = scroll::scroll_page(strip, orientation, &self.geometry, direction);
        tracing::debug!(strip = %self.id, ?direction, offset, "strip scrolled");

        let callback = match direction {
            ScrollDirection::Backward => self.on_prev_click.as_mut(),
            ScrollDirection::Forward => self.on_next_click.as_mut(),
        };
        if let Some(callback) = callback {
            callback(offset);
        }
        self.publish(Event::Scrolled {
            strip: self.id.clone(),
            direction,
            offset,
        });
        Some(offset)
    }

    /// Execute a command bound in the projection. Returns `true` if it had an effect.
    ///
    /// Indices past the end of `children` are ignored.
    pub fn execute<C>(
        &mut self,
        command: TabStripCommand,
        children: &[TabDescriptor<C>],
        host: &mut dyn StripHost,
    ) -> bool {
        match command {
            TabStripCommand::Select(index) => match children.get(index) {
                Some(tab) => self.select_tab(index, tab.disabled, &*host),
                None => {
                    tracing::trace!(strip = %self.id, index, "select past end ignored");
                    false
                }
            },
            TabStripCommand::Close(index) => match children.get(index) {
                Some(tab) => self.close_tab(index, tab.disabled),
                None => {
                    tracing::trace!(strip = %self.id, index, "close past end ignored");
                    false
                }
            },
            TabStripCommand::ScrollBackward => self.scroll_backward(host).is_some(),
            TabStripCommand::ScrollForward => self.scroll_forward(host).is_some(),
        }
    }
}
