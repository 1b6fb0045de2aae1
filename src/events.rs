// src/events.rs
use std::fmt;
use std::str::FromStr;

use crate::errors::BehaviorError;

/// Lifecycle notification emitted by the host framework's model manager.
///
/// The names follow the framework's event vocabulary; `FromStr` accepts the
/// camel-case form the manager dispatches by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelEvent {
    BeforeValidation,
    BeforeValidationOnCreate,
    BeforeValidationOnUpdate,
    BeforeCreate,
    BeforeUpdate,
    BeforeSave,
    AfterCreate,
    AfterUpdate,
    AfterSave,
    BeforeDelete,
    AfterDelete,
}

impl ModelEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeValidation => "beforeValidation",
            Self::BeforeValidationOnCreate => "beforeValidationOnCreate",
            Self::BeforeValidationOnUpdate => "beforeValidationOnUpdate",
            Self::BeforeCreate => "beforeCreate",
            Self::BeforeUpdate => "beforeUpdate",
            Self::BeforeSave => "beforeSave",
            Self::AfterCreate => "afterCreate",
            Self::AfterUpdate => "afterUpdate",
            Self::AfterSave => "afterSave",
            Self::BeforeDelete => "beforeDelete",
            Self::AfterDelete => "afterDelete",
        }
    }

    /// True for the pre-save family: anything dispatched before a create or
    /// an update reaches storage.
    pub fn is_before_save(self) -> bool {
        matches!(
            self,
            Self::BeforeValidation
                | Self::BeforeValidationOnCreate
                | Self::BeforeValidationOnUpdate
                | Self::BeforeCreate
                | Self::BeforeUpdate
                | Self::BeforeSave
        )
    }

    /// True for the pre-create family only.
    pub fn is_before_create(self) -> bool {
        matches!(self, Self::BeforeValidationOnCreate | Self::BeforeCreate)
    }
}

impl fmt::Display for ModelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelEvent {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beforeValidation" => Ok(Self::BeforeValidation),
            "beforeValidationOnCreate" => Ok(Self::BeforeValidationOnCreate),
            "beforeValidationOnUpdate" => Ok(Self::BeforeValidationOnUpdate),
            "beforeCreate" => Ok(Self::BeforeCreate),
            "beforeUpdate" => Ok(Self::BeforeUpdate),
            "beforeSave" => Ok(Self::BeforeSave),
            "afterCreate" => Ok(Self::AfterCreate),
            "afterUpdate" => Ok(Self::AfterUpdate),
            "afterSave" => Ok(Self::AfterSave),
            "beforeDelete" => Ok(Self::BeforeDelete),
            "afterDelete" => Ok(Self::AfterDelete),
            other => Err(BehaviorError::UnknownEvent(other.to_owned())),
        }
    }
}
