//! Tabbed header strip with an active indicator and overflow arrows.
//!
//! The widget is headless. A host renders the [`render::Projection`],
//! attaches elements, and then calls [`TabStrip::commit`] so the geometry
//! pass can read the strip and the active header back through
//! [`host::StripHost`].

pub mod commands;
pub mod geometry;
pub mod host;
pub mod render;
pub mod scroll;
pub mod selection;
pub mod tab;
pub mod widget;

pub use commands::TabStripCommand;
pub use geometry::GeometryState;
pub use host::{DetachedHost, ElementHandle, ScrollContainer, StripHost, VirtualStrip};
pub use render::Projection;
pub use selection::SelectionModel;
pub use tab::TabDescriptor;
pub use widget::{TabStrip, TabStripProps};
