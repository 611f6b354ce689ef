//! The `TabStrip` widget: ties selection, geometry, scrolling and the
//! projector together behind a render-then-commit cycle.

mod lifecycle;
mod operations;
mod types;


pub use types::*;
