//! The variant engine.
//!
//! A [`Generator`] is built once from a base class value and a
//! [`VariantConfig`]. Every authored form is normalized and validated at
//! construction; [`Generator::resolve`] then layers the call's props over
//! presets and defaults, collects per-slot fragments in a fixed order and
//! flattens them.
//!
//! Fragments are applied in this order, each stage in declaration order:
//!
//! 1. base classes (`base` plus `slots.base`) and each slot's own classes
//! 2. the payload of every selected variant value
//! 3. matching compound variants
//! 4. matching compound slots
//! 5. the caller's `class` prop

use crate::cache::FifoCache;
use crate::config::{CompoundSlot, CompoundVariant, DefaultVariant, VariantConfig};
use crate::error::{ConfigError, ResolveError};
use crate::matching::{condition_names, matches_all};
use crate::props::Props;
use crate::variant::Variant;
use indexmap::{IndexMap, IndexSet};
use std::cell::RefCell;
use std::sync::Arc;
use stylevar_cn::{cn, cn_iter};
use stylevar_traits::PostProcess;
use stylevar_types::{BASE_SLOT, ClassPayload, ClassValue, PropMap, SlotClasses};

/// Marks an unset variant inside a cache key.
const UNSET_KEY_MARKER: &str = "-;";

/// The outcome of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The generator has no named slots.
    Single(String),
    /// Slot name to class string, `base` first, then slots in declaration order.
    Slots(IndexMap<String, String>),
}

impl Resolved {
    /// The single class string, or the `base` slot of a slot mapping.
    pub fn as_str(&self) -> &str {
        match self {
            Resolved::Single(s) => s.as_str(),
            Resolved::Slots(slots) => slots.get(BASE_SLOT).map_or("", String::as_str),
        }
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        match self {
            Resolved::Single(s) if name == BASE_SLOT => Some(s.as_str()),
            Resolved::Single(_) => None,
            Resolved::Slots(slots) => slots.get(name).map(String::as_str),
        }
    }

    pub fn slots(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Resolved::Single(_) => None,
            Resolved::Slots(slots) => Some(slots),
        }
    }
}

impl PartialEq<str> for Resolved {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Resolved::Single(s) if s == other)
    }
}

impl PartialEq<&str> for Resolved {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Per-slot fragment lists, borrowed from the generator and the call.
type SlotFragments<'a> = IndexMap<&'a str, Vec<&'a ClassValue>>;

/// A configured class-name generator.
///
/// The memo cache lives behind a `RefCell`: a generator can move between
/// threads but must not be shared by them.
#[derive(Debug)]
pub struct Generator {
    base_class: ClassValue,
    variants: IndexMap<String, Variant>,
    slots: SlotClasses,
    slot_names: IndexSet<String>,
    key_names: IndexSet<String>,
    compound_variants: Vec<CompoundVariant>,
    compound_slots: Vec<CompoundSlot>,
    default_variants: IndexMap<String, DefaultVariant>,
    required_variants: Vec<String>,
    presets: IndexMap<String, PropMap>,
    post_process: Option<Arc<dyn PostProcess>>,
    cache: RefCell<FifoCache<Arc<Resolved>>>,
}

impl Generator {
    /// Normalizes and validates `config`.
    ///
    /// Fails when a required variant is not declared, or also has a default.
    pub fn new(base: impl Into<ClassValue>, config: VariantConfig) -> Result<Self, ConfigError> {
        let VariantConfig {
            variants,
            slots,
            compound_variants,
            compound_slots,
            default_variants,
            required_variants,
            presets,
            cache_size,
            post_process,
        } = config;

        for name in &required_variants {
            if !variants.contains_key(name) {
                return Err(ConfigError::UndefinedRequired(name.clone()));
            }
            if default_variants.contains_key(name) {
                return Err(ConfigError::RequiredWithDefault(name.clone()));
            }
        }

        let slot_names: IndexSet<String> = slots
            .keys()
            .filter(|name| name.as_str() != BASE_SLOT)
            .cloned()
            .collect();
        let is_slot = |name: &str| slot_names.contains(name);

        let base = base.into();
        let base_class = match slots.get(BASE_SLOT) {
            Some(slot_base) => ClassValue::Str(cn(&[base, slot_base.clone()])),
            None => ClassValue::Str(cn(&[base])),
        };

        let variants: IndexMap<String, Variant> = variants
            .into_iter()
            .map(|(name, def)| (name, Variant::normalize(def, &slot_names)))
            .collect();

        let compound_variants: Vec<CompoundVariant> = compound_variants
            .into_iter()
            .map(|compound| CompoundVariant {
                class: compound.class.normalize(is_slot),
                ..compound
            })
            .collect();

        // Compound rules may read props that are not declared variants; those
        // change the output too, so they take part in the cache key.
        let key_names: IndexSet<String> = variants
            .keys()
            .map(String::as_str)
            .chain(
                compound_variants
                    .iter()
                    .flat_map(|compound| condition_names(&compound.conditions)),
            )
            .chain(
                compound_slots
                    .iter()
                    .flat_map(|compound| condition_names(&compound.conditions)),
            )
            .map(str::to_string)
            .collect();

        for compound in &compound_slots {
            for target in &compound.slots {
                if target != BASE_SLOT && !is_slot(target) {
                    log::warn!(
                        "Compound slot targets unknown slot '{}'; it will be ignored",
                        target
                    );
                }
            }
        }

        log::debug!(
            "Built generator: {} variants, {} slots, {} compound variants, {} compound slots, {} presets, cache capacity {}",
            variants.len(),
            slot_names.len(),
            compound_variants.len(),
            compound_slots.len(),
            presets.len(),
            cache_size
        );

        Ok(Self {
            base_class,
            variants,
            slots,
            slot_names,
            key_names,
            compound_variants,
            compound_slots,
            default_variants,
            required_variants,
            presets,
            post_process,
            cache: RefCell::new(FifoCache::new(cache_size)),
        })
    }

    /// Resolves the classes for one set of props.
    ///
    /// Cacheable results are memoized, so repeating a call returns the same
    /// `Arc`. A failed call leaves the cache untouched.
    pub fn resolve(&self, props: &Props) -> Result<Arc<Resolved>, ResolveError> {
        let merged = self.merge_props(props)?;

        let class_prop = props
            .class_prop()
            .filter(|class| class.is_truthy())
            .cloned()
            .map(|class| class.normalize(|name| self.slot_names.contains(name)));

        let cache_key = match class_prop {
            Some(_) => None,
            None => Some(self.cache_key(&merged)),
        };

        if let Some(key) = &cache_key
            && let Some(hit) = self.cache.borrow().get(key)
        {
            log::trace!("Cache hit for '{}'", key);
            return Ok(Arc::clone(hit));
        }

        for name in &self.required_variants {
            if !merged.contains(name) {
                return Err(ResolveError::MissingRequired(name.clone()));
            }
        }

        let mut fragments: SlotFragments<'_> = IndexMap::with_capacity(self.slot_names.len() + 1);
        fragments.insert(BASE_SLOT, vec![&self.base_class]);
        for (name, classes) in &self.slots {
            if name != BASE_SLOT {
                fragments.insert(name.as_str(), vec![classes]);
            }
        }

        for (name, variant) in &self.variants {
            let Some(value) = merged.get(name) else {
                continue;
            };
            let label = value.label();
            let payload = variant
                .get(&label)
                .ok_or_else(|| ResolveError::InvalidValue {
                    variant: name.clone(),
                    value: label.clone(),
                })?;
            if !payload.is_blank() {
                push_payload(&mut fragments, payload);
            }
        }

        for compound in &self.compound_variants {
            if matches_all(&compound.conditions, &merged) {
                push_payload(&mut fragments, &compound.class);
            }
        }

        for compound in &self.compound_slots {
            if matches_all(&compound.conditions, &merged) {
                for target in &compound.slots {
                    if let Some(list) = fragments.get_mut(target.as_str()) {
                        list.push(&compound.class);
                    }
                }
            }
        }

        if let Some(class) = &class_prop {
            push_payload(&mut fragments, class);
        }

        let mut flattened: IndexMap<String, String> = fragments
            .into_iter()
            .map(|(slot, values)| (slot.to_string(), self.finish(cn_iter(values))))
            .collect();

        let resolved = if self.slot_names.is_empty() {
            Resolved::Single(flattened.shift_remove(BASE_SLOT).unwrap_or_default())
        } else {
            Resolved::Slots(flattened)
        };
        let resolved = Arc::new(resolved);

        if let Some(key) = cache_key {
            log::trace!("Cache miss; storing '{}'", key);
            self.cache.borrow_mut().insert(key, Arc::clone(&resolved));
        }

        Ok(resolved)
    }

    /// Resolves with no props at all.
    pub fn resolve_default(&self) -> Result<Arc<Resolved>, ResolveError> {
        self.resolve(&Props::default())
    }

    /// Layers explicit props over the selected preset over defaults.
    fn merge_props(&self, props: &Props) -> Result<PropMap, ResolveError> {
        let explicit = props.explicit();

        let layered = match props.preset_name() {
            Some(name) => {
                let preset = self
                    .presets
                    .get(name)
                    .ok_or_else(|| ResolveError::InvalidPreset(name.to_string()))?;
                let mut layered = preset.clone();
                layered.extend_from(&explicit);
                layered
            }
            None => explicit,
        };

        let mut merged = PropMap::new();
        for (name, default) in &self.default_variants {
            if layered.contains(name) {
                continue;
            }
            if let Some(value) = default.resolve(&layered) {
                merged.insert(name.as_str(), value);
            }
        }
        merged.extend_from(&layered);

        Ok(merged)
    }

    /// Length-prefixed labels of every prop that can affect the output:
    /// declared variants first, then props read only by compound rules.
    fn cache_key(&self, merged: &PropMap) -> String {
        let mut key = String::new();
        for name in &self.key_names {
            match merged.get(name) {
                Some(value) => {
                    let label = value.label();
                    key.push_str(&format!("{}:{};", label.len(), label));
                }
                None => key.push_str(UNSET_KEY_MARKER),
            }
        }
        key
    }

    fn finish(&self, class_name: String) -> String {
        match &self.post_process {
            Some(hook) => hook.process(&class_name),
            None => class_name,
        }
    }

    /// Normalized variants in declaration order.
    pub fn variants(&self) -> &IndexMap<String, Variant> {
        &self.variants
    }

    pub fn variant_keys(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// The slot configuration as given, including any `base` entry.
    pub fn slots(&self) -> &SlotClasses {
        &self.slots
    }

    /// `base` followed by the named slots in declaration order.
    pub fn slot_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(BASE_SLOT).chain(self.slot_names.iter().map(String::as_str))
    }

    pub fn default_variants(&self) -> &IndexMap<String, DefaultVariant> {
        &self.default_variants
    }

    pub fn required_variants(&self) -> &[String] {
        &self.required_variants
    }

    pub fn presets(&self) -> &IndexMap<String, PropMap> {
        &self.presets
    }

    pub fn compound_variants(&self) -> &[CompoundVariant] {
        &self.compound_variants
    }

    pub fn compound_slots(&self) -> &[CompoundSlot] {
        &self.compound_slots
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Number of memoized results.
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.borrow().capacity()
    }
}

fn push_payload<'a>(fragments: &mut SlotFragments<'a>, payload: &'a ClassPayload) {
    match payload {
        ClassPayload::Class(classes) => {
            if let Some(list) = fragments.get_mut(BASE_SLOT) {
                list.push(classes);
            }
        }
        ClassPayload::Slots(slots) => {
            for (slot, classes) in slots {
                if let Some(list) = fragments.get_mut(slot.as_str()) {
                    list.push(classes);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantDef;
    use crate::matching::Condition;
    use stylevar_types::VariantValue;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn button() -> Generator {
        init_logger();
        let config = VariantConfig::new()
            .variant(
                "size",
                VariantDef::map([("sm", "text-sm"), ("lg", "text-lg")]),
            )
            .variant("disabled", "opacity-50")
            .default_variant("size", "sm");
        Generator::new("rounded-lg", config).unwrap()
    }

    #[test]
    fn test_defaults_apply() {
        let generator = button();
        let resolved = generator.resolve_default().unwrap();
        assert_eq!(*resolved, "rounded-lg text-sm");
    }

    #[test]
    fn test_explicit_value_wins() {
        let generator = button();
        let props = Props::new().with("size", "lg").with("disabled", true);
        let resolved = generator.resolve(&props).unwrap();
        assert_eq!(resolved.as_str(), "rounded-lg text-lg opacity-50");
    }

    #[test]
    fn test_invalid_value() {
        let generator = button();
        let err = generator.resolve(&Props::new().with("size", "xl")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value \"xl\" for variant \"size\"");
        assert_eq!(generator.cache_size(), 0);
    }

    #[test]
    fn test_cache_key_distinguishes_unset_from_labels() {
        let generator = button();
        let unset = generator.cache_key(&PropMap::new());
        let set: PropMap = [("size", "-")].into_iter().collect();
        assert_ne!(unset, generator.cache_key(&set));
        assert_eq!(unset, "-;-;");
    }

    #[test]
    fn test_cache_key_covers_compound_only_props() {
        init_logger();
        let config = VariantConfig::new()
            .variant("size", VariantDef::map([("sm", "text-sm")]))
            .compound_variant(CompoundVariant::new().when("tone", "dark").class("bg-black"));
        let generator = Generator::new("btn", config).unwrap();

        let plain: PropMap = [("size", "sm")].into_iter().collect();
        let dark: PropMap = [("size", "sm"), ("tone", "dark")].into_iter().collect();
        assert_ne!(generator.cache_key(&plain), generator.cache_key(&dark));
        assert_eq!(
            generator.key_names.iter().map(String::as_str).collect::<Vec<_>>(),
            ["size", "tone"]
        );
    }

    #[test]
    fn test_resolver_sees_pre_default_props() {
        let config = VariantConfig::new()
            .variant("size", VariantDef::map([("sm", "p-2"), ("lg", "p-6")]))
            .variant("compact", "gap-1")
            .default_variant("size", "lg")
            .default_with("compact", |props: &PropMap| {
                // `size` has not been defaulted yet.
                (!props.contains("size")).then(|| VariantValue::from(true))
            });
        let generator = Generator::new("grid", config).unwrap();

        assert_eq!(generator.resolve_default().unwrap().as_str(), "grid p-6 gap-1");
        let explicit = generator.resolve(&Props::new().with("size", "sm")).unwrap();
        assert_eq!(explicit.as_str(), "grid p-2");
    }

    #[test]
    fn test_slot_base_merges_into_base() {
        let config = VariantConfig::new()
            .slot("base", "relative")
            .slot("icon", "h-4 w-4");
        let generator = Generator::new("inline-flex", config).unwrap();
        let resolved = generator.resolve_default().unwrap();

        assert_eq!(resolved.slot("base"), Some("inline-flex relative"));
        assert_eq!(resolved.slot("icon"), Some("h-4 w-4"));
        assert_eq!(generator.slot_keys().collect::<Vec<_>>(), ["base", "icon"]);
    }

    #[test]
    fn test_base_only_slot_config_returns_single() {
        let config = VariantConfig::new().slot("base", "relative");
        let generator = Generator::new("block", config).unwrap();
        let resolved = generator.resolve_default().unwrap();
        assert_eq!(*resolved, Resolved::Single("block relative".to_string()));
        assert!(resolved.slots().is_none());
    }

    #[test]
    fn test_unset_condition_matches_missing_prop() {
        init_logger();
        let config = VariantConfig::new()
            .variant("tone", VariantDef::map([("muted", "text-gray-500")]))
            .compound_variant(
                CompoundVariant::new()
                    .when("tone", Condition::Unset)
                    .class("text-black"),
            );
        let generator = Generator::new("", config).unwrap();

        assert_eq!(generator.resolve_default().unwrap().as_str(), "text-black");
        let muted = generator.resolve(&Props::new().with("tone", "muted")).unwrap();
        assert_eq!(muted.as_str(), "text-gray-500");
    }
}
