use thiserror::Error;

use crate::models::Role;

pub type Result<T> = std::result::Result<T, AppError>;

/// Message shown whenever a form is submitted with required fields missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{id} is full ({max} places)")]
    CapacityExceeded { id: String, max: u32 },

    #[error("already registered for {0}")]
    AlreadyRegistered(String),

    #[error("not registered for {0}")]
    NotRegistered(String),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{title}: {message}")]
    ConfirmationRequired {
        title: &'static str,
        message: &'static str,
    },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("requires {required:?} session")]
    Forbidden { required: Role },

    #[error("feature disabled: {0}")]
    FeatureDisabled(&'static str),

    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        AppError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort_unstable();
        AppError::Validation(format!("{} ({})", REQUIRED_FIELDS_MESSAGE, fields.join(", ")))
    }
}
