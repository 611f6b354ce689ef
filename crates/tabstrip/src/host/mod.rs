//! Measurement seam between the widget and whatever draws it.
//!
//! Handles are render-scoped: the widget asks the host for them on every
//! measurement pass and never stores them.

use tabstrip_common::{Orientation, Rect};

mod virtual_strip;

pub use virtual_strip::VirtualStrip;

/// Anything with a bounding box in viewport coordinates.
pub trait ElementHandle {
    fn bounding_rect(&self) -> Rect;
}

impl ElementHandle for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// A scrollable container. Setters clamp to the valid range the way a
/// native scroll container does; callers do not bound offsets themselves.
pub trait ScrollContainer: ElementHandle {
    fn scroll_width(&self) -> f64;
    fn scroll_height(&self) -> f64;
    fn scroll_left(&self) -> f64;
    fn scroll_top(&self) -> f64;
    fn set_scroll_left(&mut self, value: f64);
    fn set_scroll_top(&mut self, value: f64);

    /// Current offset along the orientation axis.
    fn scroll_offset(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.scroll_left(),
            Orientation::Vertical => self.scroll_top(),
        }
    }

    fn set_scroll_offset(&mut self, orientation: Orientation, value: f64) {
        match orientation {
            Orientation::Horizontal => self.set_scroll_left(value),
            Orientation::Vertical => self.set_scroll_top(value),
        }
    }
}

/// Gives the widget access to the strip container and the header elements.
pub trait StripHost {
    fn strip(&self) -> Option<&dyn ScrollContainer>;
    fn strip_mut(&mut self) -> Option<&mut dyn ScrollContainer>;
    fn header(&self, index: usize) -> Option<&dyn ElementHandle>;
}

/// A host with nothing attached, as on the first render before mount.
pub struct DetachedHost;

impl StripHost for DetachedHost {
    fn strip(&self) -> Option<&dyn ScrollContainer> {
        None
    }

    fn strip_mut(&mut self) -> Option<&mut dyn ScrollContainer> {
        None
    }

    fn header(&self, _index: usize) -> Option<&dyn ElementHandle> {
        None
    }
}
