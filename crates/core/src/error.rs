use thiserror::Error;

/// Errors raised while building a generator, before any call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required variant \"{0}\" is not defined in variants")]
    UndefinedRequired(String),

    #[error("Required variant \"{0}\" cannot have a default value")]
    RequiredWithDefault(String),
}

/// Errors raised by a single call. A failed call leaves the generator and its
/// cache untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Missing required variant: \"{0}\"")]
    MissingRequired(String),

    #[error("Invalid value \"{value}\" for variant \"{variant}\"")]
    InvalidValue { variant: String, value: String },

    #[error("Invalid preset \"{0}\"")]
    InvalidPreset(String),
}
