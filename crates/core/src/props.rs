//! Call-time inputs for a generator.

use indexmap::IndexMap;
use stylevar_types::{ClassPayload, PropMap, VariantValue};

/// The props a generator is called with: variant selections, extra caller
/// classes and an optional preset.
///
/// A variant set to `None` counts as not provided, so a default can still
/// apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    values: IndexMap<String, Option<VariantValue>>,
    class: Option<ClassPayload>,
    preset: Option<String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.values.insert(name.into(), Some(value.into()));
        self
    }

    /// Sets `name` from an optional value; `None` marks it explicitly absent.
    pub fn with_option<V>(mut self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<VariantValue>,
    {
        self.values.insert(name.into(), value.map(Into::into));
        self
    }

    /// Extra caller classes, appended after everything else. A slot object
    /// targets individual slots.
    pub fn class(mut self, class: impl Into<ClassPayload>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Alias of [`Props::class`]. Both write the same prop; the last call wins.
    pub fn class_name(self, class: impl Into<ClassPayload>) -> Self {
        self.class(class)
    }

    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.preset = Some(name.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&VariantValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    pub fn class_prop(&self) -> Option<&ClassPayload> {
        self.class.as_ref()
    }

    pub fn preset_name(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    /// The explicitly provided variant values, absent ones dropped.
    pub fn explicit(&self) -> PropMap {
        self.values
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v.clone())))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Props::new(), |props, (name, value)| props.with(name, value))
    }
}
