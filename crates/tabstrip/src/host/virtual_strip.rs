//! In-memory strip host.
//!
//! Lays headers out end to end along the orientation axis inside a fixed
//! frame and behaves like a browser scroll container: content extents never
//! report less than the frame, and offsets clamp to `[0, content - visible]`.

use tabstrip_common::{Orientation, Rect};

use super::{ElementHandle, ScrollContainer, StripHost};

#[derive(Debug, Clone)]
pub struct VirtualStrip {
    orientation: Orientation,
    /// Visible box of the strip in viewport coordinates.
    frame: Rect,
    /// Header sizes along the orientation axis.
    extents: Vec<f64>,
    scroll_left: f64,
    scroll_top: f64,
    /// Header boxes at the current scroll position.
    headers: Vec<Rect>,
    mounted: bool,
}

impl VirtualStrip {
    pub fn new(orientation: Orientation, frame: Rect, extents: Vec<f64>) -> Self {
        let mut strip = Self {
            orientation,
            frame,
            extents,
            scroll_left: 0.0,
            scroll_top: 0.0,
            headers: Vec::new(),
            mounted: true,
        };
        strip.relayout();
        strip
    }

    /// `count` headers of identical size.
    pub fn uniform(orientation: Orientation, frame: Rect, count: usize, extent: f64) -> Self {
        Self::new(orientation, frame, vec![extent; count])
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.extents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Summed header extent along the axis.
    pub fn content_extent(&self) -> f64 {
        self.extents.iter().sum()
    }

    pub fn visible_extent(&self) -> f64 {
        self.frame.extent(self.orientation)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Detach the element; handles disappear until `mount`.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Resize the frame along the orientation axis.
    pub fn set_visible_extent(&mut self, extent: f64) {
        match self.orientation {
            Orientation::Horizontal => self.frame.width = extent,
            Orientation::Vertical => self.frame.height = extent,
        }
        self.reclamp();
    }

    pub fn push_header(&mut self, extent: f64) {
        self.extents.push(extent);
        self.relayout();
    }

    /// Drop a header, as when the caller removes a closed tab.
    pub fn remove_header(&mut self, index: usize) -> Option<f64> {
        if index >= self.extents.len() {
            return None;
        }
        let removed = self.extents.remove(index);
        self.reclamp();
        Some(removed)
    }

    fn max_scroll_left(&self) -> f64 {
        (self.scroll_width() - self.frame.width).max(0.0)
    }

    fn max_scroll_top(&self) -> f64 {
        (self.scroll_height() - self.frame.height).max(0.0)
    }

    fn reclamp(&mut self) {
        self.scroll_left = self.scroll_left.clamp(0.0, self.max_scroll_left());
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll_top());
        self.relayout();
    }

    fn relayout(&mut self) {
        let mut cursor = 0.0;
        self.headers = self
            .extents
            .iter()
            .map(|&extent| {
                let rect = match self.orientation {
                    Orientation::Horizontal => Rect::new(
                        self.frame.x + cursor - self.scroll_left,
                        self.frame.y,
                        extent,
                        self.frame.height,
                    ),
                    Orientation::Vertical => Rect::new(
                        self.frame.x,
                        self.frame.y + cursor - self.scroll_top,
                        self.frame.width,
                        extent,
                    ),
                };
                cursor += extent;
                rect
            })
            .collect();
    }
}

impl ElementHandle for VirtualStrip {
    fn bounding_rect(&self) -> Rect {
        self.frame
    }
}

impl ScrollContainer for VirtualStrip {
    fn scroll_width(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.content_extent().max(self.frame.width),
            Orientation::Vertical => self.frame.width,
        }
    }

    fn scroll_height(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.frame.height,
            Orientation::Vertical => self.content_extent().max(self.frame.height),
        }
    }

    fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_left(&mut self, value: f64) {
        self.scroll_left = value.clamp(0.0, self.max_scroll_left());
        self.relayout();
    }

    fn set_scroll_top(&mut self, value: f64) {
        self.scroll_top = value.clamp(0.0, self.max_scroll_top());
        self.relayout();
    }
}

impl StripHost for VirtualStrip {
    fn strip(&self) -> Option<&dyn ScrollContainer> {
        self.mounted.then_some(self as &dyn ScrollContainer)
    }

    fn strip_mut(&mut self) -> Option<&mut dyn ScrollContainer> {
        if self.mounted {
            Some(self)
        } else {
            None
        }
    }

    fn header(&self, index: usize) -> Option<&dyn ElementHandle> {
        if !self.mounted {
            return None;
        }
        self.headers.get(index).map(|r| r as &dyn ElementHandle)
    }
}
