//! Class payloads that may target a single element or several named slots.

use crate::class_value::ClassValue;
use indexmap::IndexMap;

/// The implicit slot every generator owns.
pub const BASE_SLOT: &str = "base";

/// Per-slot class values, keyed by slot name in declaration order.
pub type SlotClasses = IndexMap<String, ClassValue>;

/// What a variant value, compound rule or `class` prop contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPayload {
    /// Applied to the `base` slot.
    Class(ClassValue),
    /// Distributed across the named slots.
    Slots(SlotClasses),
}

impl Default for ClassPayload {
    fn default() -> Self {
        ClassPayload::Class(ClassValue::Empty)
    }
}

impl ClassPayload {
    /// Builds a slot-object payload from `(slot, classes)` pairs.
    pub fn slots<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ClassValue>,
    {
        ClassPayload::Slots(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, ClassPayload::Class(c) if c.is_blank())
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            ClassPayload::Class(c) => c.is_truthy(),
            ClassPayload::Slots(_) => true,
        }
    }

    /// Collapses the payload into a single class value. Slot objects become
    /// records that keep each slot name whose classes are truthy.
    pub fn into_class_value(self) -> ClassValue {
        match self {
            ClassPayload::Class(c) => c,
            ClassPayload::Slots(map) => ClassValue::Record(
                map.into_iter()
                    .map(|(slot, classes)| {
                        let enabled = classes.is_truthy();
                        (slot, enabled)
                    })
                    .collect(),
            ),
        }
    }

    /// Keeps a slot object only when every key is `base` or satisfies
    /// `is_slot`; anything else collapses to a base class value.
    pub fn normalize<F>(self, is_slot: F) -> ClassPayload
    where
        F: Fn(&str) -> bool,
    {
        match self {
            ClassPayload::Slots(map)
                if !map.keys().all(|k| k == BASE_SLOT || is_slot(k)) =>
            {
                ClassPayload::Class(ClassPayload::Slots(map).into_class_value())
            }
            other => other,
        }
    }
}

impl From<ClassValue> for ClassPayload {
    fn from(value: ClassValue) -> Self {
        ClassPayload::Class(value)
    }
}

impl From<&str> for ClassPayload {
    fn from(s: &str) -> Self {
        ClassPayload::Class(s.into())
    }
}

impl From<String> for ClassPayload {
    fn from(s: String) -> Self {
        ClassPayload::Class(s.into())
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassPayload {
    fn from(values: Vec<T>) -> Self {
        ClassPayload::Class(values.into())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassPayload {
    fn from(values: [T; N]) -> Self {
        ClassPayload::Class(values.into())
    }
}

impl From<SlotClasses> for ClassPayload {
    fn from(map: SlotClasses) -> Self {
        ClassPayload::Slots(map)
    }
}
