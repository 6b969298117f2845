//! JSON to [`VariantConfig`] conversion.
//!
//! The top-level object is read with serde; the shape-sensitive parts
//! (payloads that may be slot objects, compound rules mixing conditions with
//! `class`) are walked by hand, since their meaning depends on the declared
//! slot names.

use crate::error::ConfigLoadError;
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use serde_json::{Map, Value};
use stylevar_core::{
    CompoundSlot, CompoundVariant, Condition, ConfigError, Generator, VariantConfig, VariantDef,
};
use stylevar_types::{BASE_SLOT, ClassPayload, ClassValue, SlotClasses, VariantValue};

/// Keys of a compound rule that are not conditions.
const COMPOUND_RESERVED_KEYS: [&str; 3] = ["class", "className", "slots"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    base: ClassValue,
    variants: IndexMap<String, Value>,
    slots: SlotClasses,
    compound_variants: Vec<Map<String, Value>>,
    compound_slots: Vec<Map<String, Value>>,
    default_variants: IndexMap<String, Option<VariantValue>>,
    required_variants: Vec<String>,
    presets: IndexMap<String, IndexMap<String, Option<VariantValue>>>,
    cache_size: Option<usize>,
}

/// A base class value and its configuration, ready to build a generator.
///
/// Function defaults and a post-process hook can still be attached to
/// `config` before building.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub base: ClassValue,
    pub config: VariantConfig,
}

impl LoadedConfig {
    pub fn into_generator(self) -> Result<Generator, ConfigError> {
        Generator::new(self.base, self.config)
    }
}

/// Parses a configuration from JSON text.
pub fn from_str(json: &str) -> Result<LoadedConfig, ConfigLoadError> {
    let raw: RawConfig = serde_json::from_str(json)?;
    raw.into_loaded()
}

/// Parses a configuration from an already parsed JSON value.
pub fn from_value(value: Value) -> Result<LoadedConfig, ConfigLoadError> {
    let raw: RawConfig = serde_json::from_value(value)?;
    raw.into_loaded()
}

/// Parses and builds a generator in one step.
pub fn generator_from_str(json: &str) -> Result<Generator, ConfigLoadError> {
    Ok(from_str(json)?.into_generator()?)
}

pub fn generator_from_value(value: Value) -> Result<Generator, ConfigLoadError> {
    Ok(from_value(value)?.into_generator()?)
}

impl RawConfig {
    fn into_loaded(self) -> Result<LoadedConfig, ConfigLoadError> {
        let slot_names: IndexSet<&str> = self
            .slots
            .keys()
            .map(String::as_str)
            .filter(|name| *name != BASE_SLOT)
            .collect();

        let mut config = VariantConfig::new();

        for (name, value) in &self.variants {
            config = config.variant(name.as_str(), parse_variant(name, value, &slot_names)?);
        }

        for (index, entry) in self.compound_variants.iter().enumerate() {
            config = config.compound_variant(parse_compound_variant(index, entry, &slot_names)?);
        }

        for (index, entry) in self.compound_slots.iter().enumerate() {
            config = config.compound_slot(parse_compound_slot(index, entry)?);
        }

        // A `null` default sets nothing, but its key still counts as a default.
        for (name, value) in self.default_variants {
            match value {
                Some(value) => config = config.default_variant(name, value),
                None if self.required_variants.contains(&name) => {
                    return Err(ConfigError::RequiredWithDefault(name).into());
                }
                None => {}
            }
        }

        for name in self.required_variants {
            config = config.required(name);
        }

        for (name, values) in self.presets {
            let values = values
                .into_iter()
                .filter_map(|(variant, value)| value.map(|v| (variant, v)));
            config = config.preset(name, values);
        }

        if let Some(size) = self.cache_size {
            config = config.cache_size(size);
        }

        log::debug!(
            "Loaded JSON config: {} variants, {} slots, {} compound variants, {} compound slots",
            self.variants.len(),
            slot_names.len(),
            self.compound_variants.len(),
            self.compound_slots.len()
        );

        for (name, classes) in self.slots {
            config = config.slot(name, classes);
        }

        Ok(LoadedConfig {
            base: self.base,
            config,
        })
    }
}

fn parse_class(field: &str, value: &Value) -> Result<ClassValue, ConfigLoadError> {
    ClassValue::deserialize(value).map_err(|e| ConfigLoadError::field(field, e.to_string()))
}

/// An object whose keys are all `base` or declared slots is a slot object;
/// any other value is a class value applied to `base`.
fn parse_payload(
    field: &str,
    value: &Value,
    slot_names: &IndexSet<&str>,
) -> Result<ClassPayload, ConfigLoadError> {
    match value {
        Value::Object(map)
            if !map.is_empty()
                && map
                    .keys()
                    .all(|k| k == BASE_SLOT || slot_names.contains(k.as_str())) =>
        {
            let mut slots = SlotClasses::new();
            for (slot, classes) in map {
                slots.insert(slot.clone(), parse_class(&format!("{}.{}", field, slot), classes)?);
            }
            Ok(ClassPayload::Slots(slots))
        }
        other => Ok(ClassPayload::Class(parse_class(field, other)?)),
    }
}

fn parse_variant(
    name: &str,
    value: &Value,
    slot_names: &IndexSet<&str>,
) -> Result<VariantDef, ConfigLoadError> {
    let field = format!("variants.{}", name);
    match value {
        Value::Object(labels) => {
            let mut entries = IndexMap::with_capacity(labels.len());
            for (label, payload) in labels {
                let payload = parse_payload(&format!("{}.{}", field, label), payload, slot_names)?;
                entries.insert(label.clone(), payload);
            }
            Ok(VariantDef::Map(entries))
        }
        other => Ok(VariantDef::Flag(parse_class(&field, other)?)),
    }
}

fn parse_variant_value(field: &str, value: &Value) -> Result<VariantValue, ConfigLoadError> {
    VariantValue::deserialize(value).map_err(|_| {
        ConfigLoadError::field(field, format!("expected a string, integer or boolean, got {}", value))
    })
}

fn parse_condition(field: &str, value: &Value) -> Result<Condition, ConfigLoadError> {
    match value {
        Value::Null => Ok(Condition::Unset),
        Value::Array(options) => options
            .iter()
            .map(|option| parse_variant_value(field, option))
            .collect::<Result<Vec<_>, _>>()
            .map(Condition::AnyOf),
        other => parse_variant_value(field, other).map(Condition::Is),
    }
}

fn parse_conditions(
    field: &str,
    entry: &Map<String, Value>,
) -> Result<IndexMap<String, Condition>, ConfigLoadError> {
    entry
        .iter()
        .filter(|(key, _)| !COMPOUND_RESERVED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| {
            let condition = parse_condition(&format!("{}.{}", field, key), value)?;
            Ok((key.clone(), condition))
        })
        .collect()
}

/// `class` takes precedence over `className`; a `null` falls through.
fn class_entry(entry: &Map<String, Value>) -> Option<(&'static str, &Value)> {
    ["class", "className"]
        .into_iter()
        .find_map(|key| entry.get(key).filter(|v| !v.is_null()).map(|v| (key, v)))
}

fn parse_compound_variant(
    index: usize,
    entry: &Map<String, Value>,
    slot_names: &IndexSet<&str>,
) -> Result<CompoundVariant, ConfigLoadError> {
    let field = format!("compoundVariants[{}]", index);
    let class = match class_entry(entry) {
        Some((key, value)) => parse_payload(&format!("{}.{}", field, key), value, slot_names)?,
        None => ClassPayload::default(),
    };

    Ok(CompoundVariant {
        conditions: parse_conditions(&field, entry)?,
        class,
    })
}

fn parse_compound_slot(
    index: usize,
    entry: &Map<String, Value>,
) -> Result<CompoundSlot, ConfigLoadError> {
    let field = format!("compoundSlots[{}]", index);
    let slots_field = format!("{}.slots", field);

    let targets = match entry.get("slots") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ConfigLoadError::field(&slots_field, "expected an array of slot names"))
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(ConfigLoadError::field(&slots_field, "expected an array of slot names")),
    };

    let class = match class_entry(entry) {
        Some((key, value)) => parse_class(&format!("{}.{}", field, key), value)?,
        None => ClassValue::Empty,
    };

    Ok(CompoundSlot {
        slots: targets,
        conditions: parse_conditions(&field, entry)?,
        class,
    })
}
