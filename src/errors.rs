// src/errors.rs
use thiserror::Error;

pub type BehaviorResult<T> = Result<T, BehaviorError>;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("{behavior}: missing or invalid option `{option}`")]
    MissingOption {
        behavior: &'static str,
        option: String,
    },
    #[error("model `{model}` has no attribute `{attribute}`")]
    UnknownAttribute { model: String, attribute: String },
    #[error("model `{model}`: derived slug for `{attribute}` is empty")]
    EmptySlug { model: String, attribute: String },
    #[error("unknown model event `{0}`")]
    UnknownEvent(String),
    #[error("model error: {0}")]
    Model(String),
}

impl BehaviorError {
    pub fn missing_option(behavior: &'static str, option: impl Into<String>) -> Self {
        Self::MissingOption {
            behavior,
            option: option.into(),
        }
    }

    pub fn unknown_attribute(model: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            model: model.into(),
            attribute: attribute.into(),
        }
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }
}
