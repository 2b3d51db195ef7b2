use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an element cannot be turned into a wire-ready mapping.
///
/// Every variant is produced by `to_json`, never by a constructor, so a caller can
/// build elements freely and learn about problems only when it asks for JSON.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormationError {
    #[error("Action must have a name")]
    MissingName,
    #[error("style attribute must be one of the following values: {allowed}")]
    InvalidStyle { value: String, allowed: String },
    #[error("source attribute must be one of the following values: {allowed}")]
    InvalidSource { value: String, allowed: String },
    #[error("Invalid number of options")]
    InvalidOptionCount { count: usize },
    #[error("label attribute cannot exceed {max} characters")]
    LabelTooLong { max: usize },
    #[error("value attribute cannot exceed {max} characters")]
    ValueTooLong { max: usize },
    #[error("options attribute cannot exceed {max} elements")]
    TooManyGroupOptions { max: usize },
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl FormationError {
    pub fn invalid_style(value: impl Into<String>, allowed: impl Into<String>) -> Self {
        FormationError::InvalidStyle {
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    pub fn invalid_source(value: impl Into<String>, allowed: impl Into<String>) -> Self {
        FormationError::InvalidSource {
            value: value.into(),
            allowed: allowed.into(),
        }
    }
}

impl From<serde_json::Error> for FormationError {
    fn from(value: serde_json::Error) -> Self {
        FormationError::Serialize(value.to_string())
    }
}
