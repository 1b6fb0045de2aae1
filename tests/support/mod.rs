// tests/support/mod.rs
// Shared in-memory Model mock used by multiple integration test binaries.
// Some symbols are unused in individual test crates; allow those warnings at
// the module level to keep CI output clean.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Once;

use model_behaviors::errors::BehaviorResult;
use model_behaviors::model::{FieldValue, MetaData, Model};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A record plus the already-persisted rows of its table, standing in for the
/// framework's model and its `maximum` aggregate.
pub struct InMemoryModel {
    name: String,
    metadata: Vec<String>,
    attributes: HashMap<String, FieldValue>,
    rows: Vec<HashMap<String, FieldValue>>,
}

impl InMemoryModel {
    pub fn new(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            name: name.into(),
            metadata: attributes.into_iter().map(str::to_owned).collect(),
            attributes: HashMap::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.attributes.insert(name.to_owned(), value.into());
        self
    }

    pub fn with_row(mut self, pairs: &[(&str, FieldValue)]) -> Self {
        self.rows.push(
            pairs
                .iter()
                .map(|(name, value)| ((*name).to_owned(), value.clone()))
                .collect(),
        );
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&FieldValue> {
        self.attributes.get(name)
    }
}

impl Model for InMemoryModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &dyn MetaData {
        &self.metadata
    }

    fn read_attribute(&self, name: &str) -> Option<FieldValue> {
        self.attributes.get(name).cloned()
    }

    fn write_attribute(&mut self, name: &str, value: FieldValue) -> BehaviorResult<()> {
        self.attributes.insert(name.to_owned(), value);
        Ok(())
    }

    fn maximum(
        &self,
        attribute: &str,
        scope: &[(String, FieldValue)],
    ) -> BehaviorResult<Option<i64>> {
        let max = self
            .rows
            .iter()
            .filter(|row| {
                scope
                    .iter()
                    .all(|(name, value)| row.get(name).unwrap_or(&FieldValue::Null) == value)
            })
            .filter_map(|row| row.get(attribute).and_then(FieldValue::as_i64))
            .max();
        Ok(max)
    }
}
