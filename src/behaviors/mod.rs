// src/behaviors/mod.rs
pub mod sluggable;
pub mod sortable;

pub use sluggable::{Sluggable, SluggableOptions};
pub use sortable::{Sortable, SortableOptions};
