//! Derived strip geometry: indicator placement and overflow detection.
//!
//! Pure reads of the host's boxes. Every missing handle reads as zero, so a
//! measurement before mount yields zero geometry instead of failing.

use serde::{Deserialize, Serialize};
use tabstrip_common::{Orientation, Rect};

use crate::host::{ElementHandle, ScrollContainer, StripHost};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryState {
    pub indicator_width: f64,
    /// Indicator position in the strip's own (scroll-independent) space.
    pub indicator_offset: f64,
    pub strip_width: f64,
    pub strip_height: f64,
    pub show_arrows: bool,
}

impl GeometryState {
    /// Visible strip extent along the scroll axis; one arrow click scrolls this far.
    pub fn strip_extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.strip_width,
            Orientation::Vertical => self.strip_height,
        }
    }
}

/// True when content along the active axis exceeds the visible extent.
pub fn overflows(orientation: Orientation, scroll_width: f64, scroll_height: f64, visible: Rect) -> bool {
    match orientation {
        Orientation::Horizontal => scroll_width > visible.width,
        Orientation::Vertical => scroll_height > visible.height,
    }
}

/// Measure the strip and its active header.
pub fn measure(
    strip: Option<&dyn ScrollContainer>,
    active_header: Option<&dyn ElementHandle>,
    orientation: Orientation,
) -> GeometryState {
    let header = active_header
        .map(|h| h.bounding_rect())
        .unwrap_or_default();

    let (scroll_width, scroll_height, scroll_left, frame) = match strip {
        Some(s) => (s.scroll_width(), s.scroll_height(), s.scroll_left(), s.bounding_rect()),
        None => (0.0, 0.0, 0.0, Rect::default()),
    };

    GeometryState {
        indicator_width: header.width,
        indicator_offset: header.left() + scroll_left - frame.left(),
        strip_width: frame.width,
        strip_height: frame.height,
        show_arrows: overflows(orientation, scroll_width, scroll_height, frame),
    }
}

/// Measure through a host, binding the strip and the header at `active`.
pub fn measure_host(host: &dyn StripHost, active: usize, orientation: Orientation) -> GeometryState {
    measure(host.strip(), host.header(active), orientation)
}
