//! # stylevar
//!
//! Class name generation from declarative style variants.
//!
//! A component describes its base classes, independent variant axes (size,
//! tone, ...), compound rules for co-occurring values, optional slots for
//! multi-part components and named presets. Calling the resulting
//! [`Generator`] with concrete values yields the class string, or one string
//! per slot.
//!
//! - [`cn`] flattens arbitrarily nested class values into one string
//! - [`sv`] flattens a base value when there is nothing to configure
//! - [`sv_with`] builds a configured [`Generator`]
//!
//! ```
//! use stylevar::{Props, VariantConfig, VariantDef, sv_with};
//!
//! let button = sv_with(
//!     "rounded-lg",
//!     VariantConfig::new()
//!         .variant("size", VariantDef::map([("sm", "text-sm"), ("lg", "text-lg")]))
//!         .variant("disabled", "opacity-50")
//!         .default_variant("size", "sm"),
//! )?;
//!
//! assert_eq!(button.resolve_default()?.as_str(), "rounded-lg text-sm");
//! let props = Props::new().with("size", "lg").with("disabled", true);
//! assert_eq!(button.resolve(&props)?.as_str(), "rounded-lg text-lg opacity-50");
//! # Ok::<(), stylevar::Error>(())
//! ```

pub mod error;

pub use error::{Error, Result};

// Re-export member crates
pub use stylevar_core as core;
pub use stylevar_traits as traits;
pub use stylevar_types as types;
#[cfg(feature = "json")]
pub use stylevar_json as json;

pub use stylevar_cn::{cn, cn_iter};
pub use stylevar_core::{
    BASE_SLOT, ClassPayload, ClassValue, CompoundSlot, CompoundVariant, Condition, ConfigError,
    DEFAULT_CACHE_SIZE, DefaultResolver, DefaultVariant, Generator, Identity, PostProcess, PropMap,
    Props, ResolveError, Resolved, SlotClasses, Variant, VariantConfig, VariantDef, VariantKind,
    VariantValue,
};

/// Flattens `base` on its own. With nothing to configure there is no
/// generator, only the class string.
pub fn sv(base: impl Into<ClassValue>) -> String {
    cn(&[base.into()])
}

/// Builds a generator for `base` and `config`.
///
/// Fails when a required variant is not declared, or also has a default.
pub fn sv_with(
    base: impl Into<ClassValue>,
    config: VariantConfig,
) -> std::result::Result<Generator, ConfigError> {
    Generator::new(base, config)
}
