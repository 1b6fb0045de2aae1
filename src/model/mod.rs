// src/model/mod.rs
pub mod metadata;
pub mod value;

pub use metadata::MetaData;
pub use value::FieldValue;

use crate::errors::BehaviorResult;

/// The record a behavior is notified about, as exposed by the host framework.
///
/// This is the only surface behaviors touch: attribute access, metadata and
/// the `maximum` aggregate. Persistence and dispatch stay with the framework.
pub trait Model: Send + Sync {
    /// Name of the model class, used in error and log messages.
    fn model_name(&self) -> &str;

    fn metadata(&self) -> &dyn MetaData;

    /// Current value of an attribute, `None` when it was never assigned.
    fn read_attribute(&self, name: &str) -> Option<FieldValue>;

    /// # Errors
    /// Returns an error when the framework rejects the write.
    fn write_attribute(&mut self, name: &str, value: FieldValue) -> BehaviorResult<()>;

    /// MAX aggregate over the model's table, restricted to rows whose `scope`
    /// attributes are equal to the given values. `None` when no row matches.
    ///
    /// # Errors
    /// Returns an error when the underlying query fails.
    fn maximum(
        &self,
        attribute: &str,
        scope: &[(String, FieldValue)],
    ) -> BehaviorResult<Option<i64>>;
}
