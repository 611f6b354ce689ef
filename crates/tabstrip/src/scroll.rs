//! Arrow-driven paging of the header strip.

use tabstrip_common::{Orientation, ScrollDirection};

use crate::geometry::GeometryState;
use crate::host::ScrollContainer;

/// Shift the scroll offset by one visible strip extent.
///
/// The increment comes from the last measurement. No bounding is applied
/// here; the container clamps. Returns the offset it settled on.
pub fn scroll_page(
    strip: &mut dyn ScrollContainer,
    orientation: Orientation,
    geometry: &GeometryState,
    direction: ScrollDirection,
) -> f64 {
    let step = geometry.strip_extent(orientation) * direction.sign();
    let target = strip.scroll_offset(orientation) + step;
    strip.set_scroll_offset(orientation, target);
    strip.scroll_offset(orientation)
}

pub fn scroll_backward(
    strip: &mut dyn ScrollContainer,
    orientation: Orientation,
    geometry: &GeometryState,
) -> f64 {
    scroll_page(strip, orientation, geometry, ScrollDirection::Backward)
}

pub fn scroll_forward(
    strip: &mut dyn ScrollContainer,
    orientation: Orientation,
    geometry: &GeometryState,
) -> f64 {
    scroll_page(strip, orientation, geometry, ScrollDirection::Forward)
}
