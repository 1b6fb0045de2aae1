// src/behaviors/sortable.rs
use serde::Deserialize;

use crate::behavior::Behavior;
use crate::errors::{BehaviorError, BehaviorResult};
use crate::events::ModelEvent;
use crate::model::{FieldValue, Model};

const BEHAVIOR_NAME: &str = "sortable";

/// Configuration for [`Sortable`].
#[derive(Debug, Clone, Deserialize)]
pub struct SortableOptions {
    /// Attribute holding the ordering position.
    pub field: String,
    /// Attributes restricting the MAX query to rows with equal values, so
    /// each scope combination keeps its own position sequence.
    #[serde(default)]
    pub scope: Vec<String>,
    /// When false, a position that was assigned explicitly is kept.
    #[serde(default)]
    pub overwrite: bool,
}

impl SortableOptions {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            scope: Vec::new(),
            overwrite: false,
        }
    }

    pub fn with_scope(mut self, scope: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Assigns the next ordering position (MAX()+1) on every pre-create event.
pub struct Sortable {
    options: SortableOptions,
}

impl Sortable {
    /// # Errors
    /// Rejects options with an empty field or scope attribute name.
    pub fn new(options: SortableOptions) -> BehaviorResult<Self> {
        if options.field.trim().is_empty() {
            return Err(BehaviorError::missing_option(BEHAVIOR_NAME, "field"));
        }
        if options.scope.iter().any(|name| name.trim().is_empty()) {
            return Err(BehaviorError::missing_option(BEHAVIOR_NAME, "scope"));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &SortableOptions {
        &self.options
    }

    fn check_attributes(&self, model: &dyn Model) -> BehaviorResult<()> {
        let metadata = model.metadata();
        for name in [&self.options.field].into_iter().chain(&self.options.scope) {
            if !metadata.has_attribute(name) {
                return Err(BehaviorError::unknown_attribute(model.model_name(), name));
            }
        }
        Ok(())
    }

    /// Current values of the scope attributes, paired for the MAX query.
    /// An unset scope attribute participates as `Null`.
    fn scope_pairs(&self, model: &dyn Model) -> Vec<(String, FieldValue)> {
        self.options
            .scope
            .iter()
            .map(|name| {
                let value = model.read_attribute(name).unwrap_or(FieldValue::Null);
                (name.clone(), value)
            })
            .collect()
    }
}

impl Behavior for Sortable {
    fn notify(&self, event: ModelEvent, model: &mut dyn Model) -> BehaviorResult<()> {
        if !event.is_before_create() {
            return Ok(());
        }
        self.check_attributes(model)?;

        let field = &self.options.field;
        let current = model.read_attribute(field);
        if !self.options.overwrite && current.as_ref().is_some_and(|value| !value.is_null()) {
            tracing::debug!(
                model = model.model_name(),
                field = %field,
                "position already set, skipping"
            );
            return Ok(());
        }

        let scope = self.scope_pairs(model);
        let max = model.maximum(field, &scope)?;
        let position = max.unwrap_or(0).saturating_add(1);
        tracing::debug!(
            model = model.model_name(),
            field = %field,
            position,
            "assigned position"
        );
        model.write_attribute(field, FieldValue::Integer(position))
    }
}
