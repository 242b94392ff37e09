pub mod collection;
mod container;
mod error;
pub mod pattern;

pub use collection::Collection;
pub use container::Container;
pub use error::{Error, Result};
pub use pattern::{KeyPattern, Pattern};
