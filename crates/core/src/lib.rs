//! # stylevar-core
//!
//! The variant resolution engine.
//!
//! This crate turns a declarative description of a component's styles into
//! class strings:
//! - **config**: the `VariantConfig` builder and the authored variant forms
//! - **variant**: normalization of every variant form into a tagged label table
//! - **matching**: compound rule conditions and loose equality
//! - **generator**: construction-time validation and per-call resolution
//! - **cache**: the bounded FIFO memo held by each generator
//! - **error**: construction-time and call-time errors
//!
//! ## Example
//!
//! ```
//! use stylevar_core::{Generator, Props, VariantConfig, VariantDef};
//!
//! let config = VariantConfig::new()
//!     .variant("size", VariantDef::map([("sm", "text-sm"), ("lg", "text-lg")]))
//!     .default_variant("size", "sm");
//! let button = Generator::new("rounded-lg", config).unwrap();
//!
//! assert_eq!(button.resolve_default().unwrap().as_str(), "rounded-lg text-sm");
//! let large = button.resolve(&Props::new().with("size", "lg")).unwrap();
//! assert_eq!(large.as_str(), "rounded-lg text-lg");
//! ```

// Re-export foundation crates
pub use stylevar_cn as flatten;
pub use stylevar_traits as traits;
pub use stylevar_types as types;

pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod matching;
pub mod props;
pub mod variant;

pub use cache::FifoCache;
pub use config::{
    CompoundSlot, CompoundVariant, DEFAULT_CACHE_SIZE, DefaultVariant, VariantConfig, VariantDef,
};
pub use error::{ConfigError, ResolveError};
pub use generator::{Generator, Resolved};
pub use matching::Condition;
pub use props::Props;
pub use variant::{Variant, VariantKind};

// Re-export commonly used types from foundation crates
pub use stylevar_traits::{DefaultResolver, Identity, PostProcess};
pub use stylevar_types::{BASE_SLOT, ClassPayload, ClassValue, PropMap, SlotClasses, VariantValue};
