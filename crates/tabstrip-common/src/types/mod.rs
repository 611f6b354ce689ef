mod geometry;
mod layout;

pub use geometry::*;
pub use layout::*;
