//! Variant normalization.
//!
//! Every authored form is canonicalized once, at construction, into a table
//! of labels to payloads tagged with the form it came from. Resolution then
//! only ever performs a label lookup.

use crate::config::VariantDef;
use indexmap::{IndexMap, IndexSet};
use stylevar_types::{ClassPayload, SlotClasses, BASE_SLOT};

const TRUE_LABEL: &str = "true";
const FALSE_LABEL: &str = "false";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// `true`/`false` labels, from a shorthand value or an explicit boolean table.
    Boolean,
    /// Boolean shorthand whose `true` payload is a slot object.
    SlotBoolean,
    /// Arbitrary labels.
    Regular,
}

/// A normalized variant: its form and its label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    kind: VariantKind,
    values: IndexMap<String, ClassPayload>,
}

impl Variant {
    /// Canonicalizes `def` against the declared (non-base) slot names.
    ///
    /// Precedence: a bare value is boolean shorthand; a table whose keys are
    /// all `base` or declared slots is slot-object shorthand; a table keyed
    /// only by `true`/`false` is an explicit boolean (missing states get an
    /// empty payload); anything else is a regular table.
    pub(crate) fn normalize(def: VariantDef, slot_names: &IndexSet<String>) -> Self {
        let is_slot = |key: &str| slot_names.contains(key);

        match def {
            VariantDef::Flag(classes) => Variant {
                kind: VariantKind::Boolean,
                values: IndexMap::from([
                    (FALSE_LABEL.to_string(), ClassPayload::from("")),
                    (TRUE_LABEL.to_string(), ClassPayload::Class(classes)),
                ]),
            },
            VariantDef::Map(entries)
                if !slot_names.is_empty()
                    && !entries.is_empty()
                    && entries.keys().all(|k| k == BASE_SLOT || is_slot(k)) =>
            {
                let slots: SlotClasses = entries
                    .into_iter()
                    .map(|(slot, payload)| (slot, payload.into_class_value()))
                    .collect();
                Variant {
                    kind: VariantKind::SlotBoolean,
                    values: IndexMap::from([
                        (FALSE_LABEL.to_string(), ClassPayload::from("")),
                        (TRUE_LABEL.to_string(), ClassPayload::Slots(slots)),
                    ]),
                }
            }
            VariantDef::Map(entries)
                if entries.keys().all(|k| k == TRUE_LABEL || k == FALSE_LABEL) =>
            {
                let mut values = IndexMap::from([
                    (TRUE_LABEL.to_string(), ClassPayload::from("")),
                    (FALSE_LABEL.to_string(), ClassPayload::from("")),
                ]);
                for (label, payload) in entries {
                    values.insert(label, payload.normalize(is_slot));
                }
                Variant {
                    kind: VariantKind::Boolean,
                    values,
                }
            }
            VariantDef::Map(entries) => Variant {
                kind: VariantKind::Regular,
                values: entries
                    .into_iter()
                    .map(|(label, payload)| (label, payload.normalize(is_slot)))
                    .collect(),
            },
        }
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    pub fn values(&self) -> &IndexMap<String, ClassPayload> {
        &self.values
    }

    pub fn get(&self, label: &str) -> Option<&ClassPayload> {
        self.values.get(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
