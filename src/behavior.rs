// src/behavior.rs
use crate::errors::BehaviorResult;
use crate::events::ModelEvent;
use crate::model::Model;

/// A composable hook attached to a model, reacting to lifecycle events.
///
/// The host framework's model manager calls `notify` synchronously for every
/// event it emits; implementations must return `Ok(())` for events they do
/// not act on.
pub trait Behavior: Send + Sync {
    /// # Errors
    /// Returns an error when the behavior cannot complete, which aborts the
    /// surrounding save.
    fn notify(&self, event: ModelEvent, model: &mut dyn Model) -> BehaviorResult<()>;
}
