//! The recursive class value accepted by the flattener and the variant engine.
//!
//! A `ClassValue` mirrors the loose inputs a component author writes by hand:
//! plain strings, nested lists, records of `class -> condition`, and scalars
//! that never contribute anything (booleans, numbers, null).

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassValue {
    /// Any scalar input: booleans, numbers, big integers, null. Contributes nothing.
    #[default]
    Empty,
    /// One or more space separated class names, emitted verbatim.
    Str(String),
    /// A nested sequence of values.
    List(Vec<ClassValue>),
    /// Class names keyed to the truthiness of their condition, in insertion order.
    Record(IndexMap<String, bool>),
}

impl ClassValue {
    /// Builds a record from `(class, enabled)` pairs, keeping first-seen key order.
    pub fn record<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        ClassValue::Record(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Truthiness as seen by the engine: non-empty strings and every list or
    /// record are truthy, scalars are not.
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Empty => false,
            ClassValue::Str(s) => !s.is_empty(),
            ClassValue::List(_) | ClassValue::Record(_) => true,
        }
    }

    /// Returns `true` for values that are skipped outright when applied as a
    /// variant payload.
    pub fn is_blank(&self) -> bool {
        match self {
            ClassValue::Empty => true,
            ClassValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for ClassValue {
    fn from(s: &str) -> Self {
        ClassValue::Str(s.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        ClassValue::Str(s)
    }
}

impl From<&String> for ClassValue {
    fn from(s: &String) -> Self {
        ClassValue::Str(s.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, bool>> for ClassValue {
    fn from(record: IndexMap<String, bool>) -> Self {
        ClassValue::Record(record)
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ClassValueVisitor)
    }
}

struct ClassValueVisitor;

impl<'de> Visitor<'de> for ClassValueVisitor {
    type Value = ClassValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a class string, a list of class values, or a record of class conditions")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ClassValue, E> {
        Ok(ClassValue::Str(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<ClassValue, E> {
        Ok(ClassValue::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ClassValue, D::Error> {
        ClassValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ClassValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<ClassValue>()? {
            items.push(item);
        }
        Ok(ClassValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ClassValue, A::Error> {
        let mut record = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, Truthy(enabled))) = map.next_entry::<String, Truthy>()? {
            record.insert(key, enabled);
        }
        Ok(ClassValue::Record(record))
    }
}

/// Reads any value and keeps only its JavaScript-style truthiness.
struct Truthy(bool);

impl<'de> Deserialize<'de> for Truthy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TruthyVisitor).map(Truthy)
    }
}

struct TruthyVisitor;

impl<'de> Visitor<'de> for TruthyVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        Ok(v != 0)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<bool, E> {
        Ok(v != 0.0 && !v.is_nan())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        Ok(!v.is_empty())
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(TruthyVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<bool, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(true)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<bool, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(true)
    }
}
