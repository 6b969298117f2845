use stylevar::{VariantConfig, VariantDef};

pub fn size_variant() -> VariantDef {
    VariantDef::map([("sm", "text-sm"), ("lg", "text-lg")])
}

pub fn intent_variant() -> VariantDef {
    VariantDef::map([("primary", "bg-blue-500"), ("danger", "bg-red-500")])
}

/// `size` (sm, lg) and `intent` (primary, danger), no defaults.
pub fn button_config() -> VariantConfig {
    VariantConfig::new()
        .variant("size", size_variant())
        .variant("intent", intent_variant())
}

/// `header` and `body` slots.
pub fn card_config() -> VariantConfig {
    VariantConfig::new()
        .slot("header", "font-bold")
        .slot("body", "py-4")
}

/// A `size` variant whose values target the `base` and `header` slots.
pub fn sized_card_config() -> VariantConfig {
    card_config().variant(
        "size",
        VariantDef::map([
            ("sm", stylevar::ClassPayload::slots([("base", "p-2"), ("header", "text-sm")])),
            ("lg", stylevar::ClassPayload::slots([("base", "p-6"), ("header", "text-xl")])),
        ]),
    )
}
