//! Declarative generator configuration.
//!
//! `VariantConfig` is a consuming builder. Nothing is validated here; all
//! construction-time checks run in [`Generator::new`](crate::Generator::new).

use crate::matching::Condition;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use stylevar_traits::{DefaultResolver, PostProcess};
use stylevar_types::{ClassPayload, ClassValue, PropMap, SlotClasses, VariantValue};

/// Capacity used when `cache_size` is not configured.
pub const DEFAULT_CACHE_SIZE: usize = 256;

/// A variant as written by the component author, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantDef {
    /// Boolean shorthand: `true` applies the classes, `false` applies nothing.
    Flag(ClassValue),
    /// A table of value labels to payloads. Depending on its keys this is a
    /// regular variant, an explicit `true`/`false` variant, or a slot-object
    /// shorthand.
    Map(IndexMap<String, ClassPayload>),
}

impl VariantDef {
    pub fn flag(classes: impl Into<ClassValue>) -> Self {
        VariantDef::Flag(classes.into())
    }

    /// Builds a table from `(label, payload)` pairs. Labels may be strings,
    /// integers or booleans; they are stored in their string form.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<VariantValue>,
        V: Into<ClassPayload>,
    {
        VariantDef::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into().label(), v.into()))
                .collect(),
        )
    }

    /// An explicit boolean variant with classes for both states.
    pub fn boolean(on: impl Into<ClassPayload>, off: impl Into<ClassPayload>) -> Self {
        VariantDef::map([(true, on.into()), (false, off.into())])
    }
}

impl From<ClassValue> for VariantDef {
    fn from(classes: ClassValue) -> Self {
        VariantDef::Flag(classes)
    }
}

impl From<&str> for VariantDef {
    fn from(classes: &str) -> Self {
        VariantDef::Flag(classes.into())
    }
}

/// Adds classes when every condition matches the resolved props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundVariant {
    pub conditions: IndexMap<String, Condition>,
    pub class: ClassPayload,
}

impl CompoundVariant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when(mut self, name: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.conditions.insert(name.into(), condition.into());
        self
    }

    /// Classes to add on match: a plain value targets `base`, a slot object
    /// is distributed across slots.
    pub fn class(mut self, class: impl Into<ClassPayload>) -> Self {
        self.class = class.into();
        self
    }
}

/// Adds the same classes to an explicit list of slots when every condition
/// matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSlot {
    pub slots: Vec<String>,
    pub conditions: IndexMap<String, Condition>,
    pub class: ClassValue,
}

impl CompoundSlot {
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn when(mut self, name: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.conditions.insert(name.into(), condition.into());
        self
    }

    pub fn class(mut self, class: impl Into<ClassValue>) -> Self {
        self.class = class.into();
        self
    }
}

/// A variant's fallback when neither an explicit prop nor a preset sets it.
#[derive(Clone)]
pub enum DefaultVariant {
    Value(VariantValue),
    Resolver(Arc<dyn DefaultResolver>),
}

impl DefaultVariant {
    /// The static value, if this default is not computed.
    pub fn value(&self) -> Option<&VariantValue> {
        match self {
            DefaultVariant::Value(v) => Some(v),
            DefaultVariant::Resolver(_) => None,
        }
    }

    pub(crate) fn resolve(&self, props: &PropMap) -> Option<VariantValue> {
        match self {
            DefaultVariant::Value(v) => Some(v.clone()),
            DefaultVariant::Resolver(resolver) => resolver.resolve(props),
        }
    }
}

impl fmt::Debug for DefaultVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultVariant::Value(v) => f.debug_tuple("Value").field(v).finish(),
            DefaultVariant::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Everything a generator is built from, apart from its base classes.
#[derive(Clone)]
pub struct VariantConfig {
    pub(crate) variants: IndexMap<String, VariantDef>,
    pub(crate) slots: SlotClasses,
    pub(crate) compound_variants: Vec<CompoundVariant>,
    pub(crate) compound_slots: Vec<CompoundSlot>,
    pub(crate) default_variants: IndexMap<String, DefaultVariant>,
    pub(crate) required_variants: Vec<String>,
    pub(crate) presets: IndexMap<String, PropMap>,
    pub(crate) cache_size: usize,
    pub(crate) post_process: Option<Arc<dyn PostProcess>>,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            variants: IndexMap::new(),
            slots: SlotClasses::new(),
            compound_variants: Vec::new(),
            compound_slots: Vec::new(),
            default_variants: IndexMap::new(),
            required_variants: Vec::new(),
            presets: IndexMap::new(),
            cache_size: DEFAULT_CACHE_SIZE,
            post_process: None,
        }
    }
}

impl VariantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, name: impl Into<String>, def: impl Into<VariantDef>) -> Self {
        self.variants.insert(name.into(), def.into());
        self
    }

    /// Declares a slot. A slot named `base` adds to the base classes instead.
    pub fn slot(mut self, name: impl Into<String>, classes: impl Into<ClassValue>) -> Self {
        self.slots.insert(name.into(), classes.into());
        self
    }

    pub fn compound_variant(mut self, compound: CompoundVariant) -> Self {
        self.compound_variants.push(compound);
        self
    }

    pub fn compound_slot(mut self, compound: CompoundSlot) -> Self {
        self.compound_slots.push(compound);
        self
    }

    pub fn default_variant(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.default_variants
            .insert(name.into(), DefaultVariant::Value(value.into()));
        self
    }

    /// Registers a default computed from the pre-default props.
    pub fn default_with<R>(mut self, name: impl Into<String>, resolver: R) -> Self
    where
        R: DefaultResolver + 'static,
    {
        self.default_variants
            .insert(name.into(), DefaultVariant::Resolver(Arc::new(resolver)));
        self
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required_variants.push(name.into());
        self
    }

    /// Declares a named bundle of variant values.
    pub fn preset<I, K, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<VariantValue>,
    {
        self.presets.insert(name.into(), values.into_iter().collect());
        self
    }

    /// Maximum number of memoized results. `0` disables memoization.
    pub fn cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    pub fn post_process<P>(mut self, hook: P) -> Self
    where
        P: PostProcess + 'static,
    {
        self.post_process = Some(Arc::new(hook));
        self
    }

    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

impl fmt::Debug for VariantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantConfig")
            .field("variants", &self.variants)
            .field("slots", &self.slots)
            .field("compound_variants", &self.compound_variants)
            .field("compound_slots", &self.compound_slots)
            .field("default_variants", &self.default_variants)
            .field("required_variants", &self.required_variants)
            .field("presets", &self.presets)
            .field("cache_size", &self.cache_size)
            .field("post_process", &self.post_process.is_some())
            .finish()
    }
}
