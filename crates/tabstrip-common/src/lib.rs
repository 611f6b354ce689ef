pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, TabStripError};
pub use events::{Event, EventBus};
pub use id::{new_id, StripId};
pub use types::{Orientation, Rect, ScrollDirection, Size, Variant};

pub type Result<T> = std::result::Result<T, TabStripError>;
