//! Lifecycle behaviors for ORM models.
//!
//! Two composable behaviors hook into a model manager's notification
//! contract: [`Sluggable`] derives a URL-safe slug from source attributes on
//! pre-save events, [`Sortable`] assigns the next ordering position (MAX()+1)
//! on pre-create events. The host framework is reached only through the
//! [`Model`] and [`MetaData`] collaborator traits; dispatch and persistence
//! stay with the framework.

pub mod behavior;
pub mod behaviors;
pub mod errors;
pub mod events;
pub mod model;
pub mod text;

pub use behavior::Behavior;
pub use behaviors::{Sluggable, SluggableOptions, Sortable, SortableOptions};
pub use errors::{BehaviorError, BehaviorResult};
pub use events::ModelEvent;
pub use model::{FieldValue, MetaData, Model};
