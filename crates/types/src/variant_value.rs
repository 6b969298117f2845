//! Values a caller selects for a variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete variant selection: a boolean flag, a numeric label or a string label.
///
/// Variant tables are keyed by the string form of a value, so `Int(1)` and
/// `Str("1")` select the same entry, as do `Bool(true)` and `Str("true")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl VariantValue {
    /// The label this value selects in a variant table.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Exact equality, falling back to label equality so numeric and string
    /// labels can be mixed.
    pub fn loose_eq(&self, other: &VariantValue) -> bool {
        self == other || self.label() == other.label()
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantValue::Bool(b) => write!(f, "{}", b),
            VariantValue::Int(n) => write!(f, "{}", n),
            VariantValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for VariantValue {
    fn from(b: bool) -> Self {
        VariantValue::Bool(b)
    }
}

impl From<i64> for VariantValue {
    fn from(n: i64) -> Self {
        VariantValue::Int(n)
    }
}

impl From<i32> for VariantValue {
    fn from(n: i32) -> Self {
        VariantValue::Int(n.into())
    }
}

impl From<u32> for VariantValue {
    fn from(n: u32) -> Self {
        VariantValue::Int(n.into())
    }
}

impl From<&str> for VariantValue {
    fn from(s: &str) -> Self {
        VariantValue::Str(s.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(s: String) -> Self {
        VariantValue::Str(s)
    }
}

impl From<&String> for VariantValue {
    fn from(s: &String) -> Self {
        VariantValue::Str(s.clone())
    }
}
