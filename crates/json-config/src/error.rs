use stylevar_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ConfigLoadError {
    pub(crate) fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigLoadError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}
