// src/error.rs
use stylevar_core::{ConfigError, ResolveError};
use thiserror::Error;

/// Any failure surfaced by the facade: building a generator, calling it, or
/// loading its configuration.
///
/// Engine errors are passed through unchanged so their messages stay exact.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Load(#[from] stylevar_json::ConfigLoadError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
