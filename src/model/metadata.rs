// src/model/metadata.rs

/// Framework-held schema information for a model class.
///
/// Behaviors only need the attribute list; anything richer (types, column
/// maps) stays with the host framework.
pub trait MetaData: Send + Sync {
    fn attributes(&self) -> &[String];

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes().iter().any(|attr| attr == name)
    }
}

impl MetaData for Vec<String> {
    fn attributes(&self) -> &[String] {
        self
    }
}
