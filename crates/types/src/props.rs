//! Ordered variant selections.

use crate::variant_value::VariantValue;
use indexmap::IndexMap;

/// Variant name to selected value, in insertion order.
///
/// This is the view handed to function-valued defaults and used internally
/// while layering defaults, presets and explicit props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropMap(IndexMap<String, VariantValue>);

impl PropMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&VariantValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns `true` when `name` is set to a value loosely equal to `value`.
    pub fn is(&self, name: &str, value: impl Into<VariantValue>) -> bool {
        let value = value.into();
        self.get(name).is_some_and(|v| v.loose_eq(&value))
    }

    /// Sets `name`, replacing any earlier value while keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, value: VariantValue) {
        self.0.insert(name.into(), value);
    }

    /// Layers `other` on top of `self`; values in `other` win.
    pub fn extend_from(&mut self, other: &PropMap) {
        for (name, value) in other.iter() {
            self.0.insert(name.to_string(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropMap
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        PropMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
