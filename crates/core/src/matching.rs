//! Compound rule conditions.

use indexmap::IndexMap;
use stylevar_types::{PropMap, VariantValue};

/// Condition keys that never take part in matching.
const IGNORED_CONDITION_KEYS: [&str; 3] = ["class", "className", "slots"];

/// A condition on one resolved prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The prop loosely equals the value.
    Is(VariantValue),
    /// The prop loosely equals at least one of the values.
    AnyOf(Vec<VariantValue>),
    /// The prop resolved to nothing.
    Unset,
}

impl Condition {
    pub fn any_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantValue>,
    {
        Condition::AnyOf(values.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, prop: Option<&VariantValue>) -> bool {
        match (self, prop) {
            (Condition::Unset, prop) => prop.is_none(),
            (Condition::Is(expected), Some(actual)) => expected.loose_eq(actual),
            (Condition::AnyOf(options), Some(actual)) => {
                options.iter().any(|option| option.loose_eq(actual))
            }
            (_, None) => false,
        }
    }
}

impl From<VariantValue> for Condition {
    fn from(value: VariantValue) -> Self {
        Condition::Is(value)
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::Is(value.into())
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::Is(value.into())
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Is(value.into())
    }
}

impl From<i32> for Condition {
    fn from(value: i32) -> Self {
        Condition::Is(value.into())
    }
}

impl From<i64> for Condition {
    fn from(value: i64) -> Self {
        Condition::Is(value.into())
    }
}

/// Names of the props a condition set actually reads.
pub(crate) fn condition_names(
    conditions: &IndexMap<String, Condition>,
) -> impl Iterator<Item = &str> {
    conditions
        .keys()
        .map(String::as_str)
        .filter(|name| !IGNORED_CONDITION_KEYS.contains(name))
}

/// Returns `true` when every non-ignored condition matches `props`. An empty
/// condition set always matches.
pub(crate) fn matches_all(conditions: &IndexMap<String, Condition>, props: &PropMap) -> bool {
    conditions
        .iter()
        .filter(|(name, _)| !IGNORED_CONDITION_KEYS.contains(&name.as_str()))
        .all(|(name, condition)| condition.matches(props.get(name)))
}
