//! Declarative variant configurations in JSON.
//!
//! The accepted document mirrors the programmatic builder, using camelCase
//! option names plus a top-level `base`:
//!
//! ```
//! use serde_json::json;
//! use stylevar_core::Props;
//!
//! let button = stylevar_json::generator_from_value(json!({
//!     "base": "rounded-lg",
//!     "variants": { "size": { "sm": "text-sm", "lg": "text-lg" } },
//!     "defaultVariants": { "size": "sm" }
//! }))
//! .unwrap();
//!
//! let large = button.resolve(&Props::new().with("size", "lg")).unwrap();
//! assert_eq!(large.as_str(), "rounded-lg text-lg");
//! ```
//!
//! Object key order is significant and preserved. Function defaults and
//! post-process hooks have no JSON form; attach them to
//! [`LoadedConfig::config`] before building.

pub mod error;
pub mod loader;

pub use error::ConfigLoadError;
pub use loader::{LoadedConfig, from_str, from_value, generator_from_str, generator_from_value};
