// src/behaviors/sluggable.rs
use serde::Deserialize;

use crate::behavior::Behavior;
use crate::errors::{BehaviorError, BehaviorResult};
use crate::events::ModelEvent;
use crate::model::{FieldValue, Model};
use crate::text::{is_safe_separator, slugify};

const BEHAVIOR_NAME: &str = "sluggable";

fn default_target() -> String {
    "slug".into()
}

fn default_separator() -> char {
    '-'
}

/// Configuration for [`Sluggable`]. Deserializes from host configuration;
/// every field except `source` has a sensible default.
#[derive(Debug, Clone, Deserialize)]
pub struct SluggableOptions {
    /// Attributes the slug is derived from. Multiple sources are joined with
    /// the separator before derivation.
    pub source: Vec<String>,
    /// Attribute the slug is written to.
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_separator")]
    pub separator: char,
    /// When false, an already-populated target attribute is left untouched.
    #[serde(default)]
    pub overwrite: bool,
}

impl SluggableOptions {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: vec![source.into()],
            target: default_target(),
            separator: default_separator(),
            overwrite: false,
        }
    }

    pub fn from_sources(source: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            source: source.into_iter().map(Into::into).collect(),
            target: default_target(),
            separator: default_separator(),
            overwrite: false,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Derives a URL-safe slug from source attributes on every pre-save event.
pub struct Sluggable {
    options: SluggableOptions,
}

impl Sluggable {
    /// # Errors
    /// Rejects options with no source attributes, an empty source or target
    /// name, or a separator that is not URL-safe.
    pub fn new(options: SluggableOptions) -> BehaviorResult<Self> {
        if options.source.is_empty() {
            return Err(BehaviorError::missing_option(BEHAVIOR_NAME, "source"));
        }
        if options.source.iter().any(|name| name.trim().is_empty()) {
            return Err(BehaviorError::missing_option(BEHAVIOR_NAME, "source"));
        }
        if options.target.trim().is_empty() {
            return Err(BehaviorError::missing_option(BEHAVIOR_NAME, "target"));
        }
        if !is_safe_separator(options.separator) {
            return Err(BehaviorError::missing_option(BEHAVIOR_NAME, "separator"));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &SluggableOptions {
        &self.options
    }

    /// The slug a given model would currently receive, without writing it.
    ///
    /// # Errors
    /// Fails when a configured attribute is missing from the model metadata
    /// or when the derived slug is empty.
    pub fn get_slug(&self, model: &dyn Model) -> BehaviorResult<String> {
        self.check_attributes(model)?;

        let separator = self.options.separator;
        let mut parts: Vec<String> = Vec::with_capacity(self.options.source.len());
        for name in &self.options.source {
            if let Some(value) = model.read_attribute(name) {
                if !value.is_empty() {
                    parts.push(value.to_string());
                }
            }
        }
        let joined = parts.join(&separator.to_string());
        let slug = slugify(&joined, separator);
        if slug.is_empty() {
            return Err(BehaviorError::EmptySlug {
                model: model.model_name().to_owned(),
                attribute: self.options.target.clone(),
            });
        }
        Ok(slug)
    }

    fn check_attributes(&self, model: &dyn Model) -> BehaviorResult<()> {
        let metadata = model.metadata();
        for name in self.options.source.iter().chain([&self.options.target]) {
            if !metadata.has_attribute(name) {
                return Err(BehaviorError::unknown_attribute(model.model_name(), name));
            }
        }
        Ok(())
    }

    fn target_is_populated(&self, model: &dyn Model) -> bool {
        model
            .read_attribute(&self.options.target)
            .is_some_and(|value| !value.is_empty())
    }
}

impl Behavior for Sluggable {
    fn notify(&self, event: ModelEvent, model: &mut dyn Model) -> BehaviorResult<()> {
        if !event.is_before_save() {
            return Ok(());
        }
        self.check_attributes(model)?;
        if !self.options.overwrite && self.target_is_populated(model) {
            tracing::debug!(
                model = model.model_name(),
                target = %self.options.target,
                "slug already set, skipping"
            );
            return Ok(());
        }

        let slug = self.get_slug(model)?;
        tracing::debug!(
            model = model.model_name(),
            target = %self.options.target,
            slug = %slug,
            "derived slug"
        );
        model.write_attribute(&self.options.target, FieldValue::Text(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_source_list() {
        let options = SluggableOptions::from_sources(Vec::<String>::new());
        assert!(matches!(
            Sluggable::new(options),
            Err(BehaviorError::MissingOption { option, .. }) if option == "source"
        ));
    }

    #[test]
    fn rejects_blank_target() {
        let options = SluggableOptions::new("title").with_target("  ");
        assert!(Sluggable::new(options).is_err());
    }

    #[test]
    fn rejects_unsafe_separator() {
        let options = SluggableOptions::new("title").with_separator('/');
        assert!(matches!(
            Sluggable::new(options),
            Err(BehaviorError::MissingOption { option, .. }) if option == "separator"
        ));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: SluggableOptions =
            serde_json::from_str(r#"{ "source": ["title"] }"#).unwrap();
        assert_eq!(options.target, "slug");
        assert_eq!(options.separator, '-');
        assert!(!options.overwrite);
    }
}
