mod common;

use common::fixtures::*;
use common::{TestResult, init_logger};
use stylevar::{
    ClassPayload, ClassValue, CompoundSlot, CompoundVariant, Condition, PropMap, VariantConfig,
    VariantDef, VariantKind, VariantValue, sv_with,
};

#[test]
fn test_variant_keys() -> TestResult {
    init_logger();
    let button = sv_with(
        "rounded-lg",
        button_config().variant("disabled", "opacity-50"),
    )?;
    assert_eq!(
        button.variant_keys().collect::<Vec<_>>(),
        ["size", "intent", "disabled"]
    );

    let bare = sv_with("rounded-lg", VariantConfig::new())?;
    assert_eq!(bare.variant_keys().count(), 0);
    Ok(())
}

#[test]
fn test_variants_are_normalized() -> TestResult {
    let button = sv_with(
        "rounded-lg",
        button_config()
            .variant("disabled", "opacity-50")
            .variant("active", VariantDef::map([(true, "ring-2")])),
    )?;

    let variants = button.variants();
    assert_eq!(variants["size"].kind(), VariantKind::Regular);
    assert_eq!(variants["size"].labels().collect::<Vec<_>>(), ["sm", "lg"]);

    let disabled = &variants["disabled"];
    assert_eq!(disabled.kind(), VariantKind::Boolean);
    assert_eq!(disabled.get("true"), Some(&ClassPayload::from("opacity-50")));
    assert_eq!(disabled.get("false"), Some(&ClassPayload::from("")));

    let active = &variants["active"];
    assert_eq!(active.labels().collect::<Vec<_>>(), ["true", "false"]);
    Ok(())
}

#[test]
fn test_slot_keys_start_with_base() -> TestResult {
    let card = sv_with("border", card_config().slot("footer", "border-t"))?;
    assert_eq!(
        card.slot_keys().collect::<Vec<_>>(),
        ["base", "header", "body", "footer"]
    );
    assert_eq!(card.slots()["header"], ClassValue::from("font-bold"));
    assert_eq!(card.slots().len(), 3);

    let button = sv_with("rounded-lg", button_config())?;
    assert_eq!(button.slot_keys().collect::<Vec<_>>(), ["base"]);
    assert!(button.slots().is_empty());
    Ok(())
}

#[test]
fn test_slot_keys_do_not_repeat_base() -> TestResult {
    let card = sv_with("border", card_config().slot("base", "rounded"))?;
    assert_eq!(card.slot_keys().collect::<Vec<_>>(), ["base", "header", "body"]);
    Ok(())
}

#[test]
fn test_default_variants() -> TestResult {
    let button = sv_with(
        "rounded-lg",
        button_config()
            .default_variant("size", "sm")
            .default_with("intent", |_: &PropMap| Some(VariantValue::from("primary"))),
    )?;

    let defaults = button.default_variants();
    assert_eq!(defaults.len(), 2);
    assert_eq!(defaults["size"].value(), Some(&VariantValue::from("sm")));
    assert_eq!(defaults["intent"].value(), None);

    let bare = sv_with("rounded-lg", button_config())?;
    assert!(bare.default_variants().is_empty());
    Ok(())
}

#[test]
fn test_required_variants() -> TestResult {
    let button = sv_with("rounded-lg", button_config().required("size").required("intent"))?;
    assert_eq!(button.required_variants(), ["size", "intent"]);

    let bare = sv_with("rounded-lg", button_config())?;
    assert!(bare.required_variants().is_empty());
    Ok(())
}

#[test]
fn test_compound_rules_are_exposed() -> TestResult {
    let card = sv_with(
        "border",
        sized_card_config()
            .compound_variant(
                CompoundVariant::new()
                    .when("size", "lg")
                    .class(ClassPayload::slots([("body", "text-lg")])),
            )
            .compound_slot(CompoundSlot::new(["header", "body"]).class("px-4")),
    )?;

    let compound = &card.compound_variants()[0];
    assert_eq!(compound.conditions["size"], Condition::from("lg"));
    assert!(matches!(compound.class, ClassPayload::Slots(_)));

    let compound_slot = &card.compound_slots()[0];
    assert_eq!(compound_slot.slots, ["header", "body"]);
    Ok(())
}

#[test]
fn test_everything_combined() -> TestResult {
    let card = sv_with(
        "border",
        sized_card_config()
            .variant("disabled", "opacity-50")
            .default_variant("disabled", false)
            .required("size")
            .preset("hero", [("size", "lg")])
            .cache_size(16),
    )?;

    assert_eq!(card.variant_keys().collect::<Vec<_>>(), ["size", "disabled"]);
    assert_eq!(card.slot_keys().collect::<Vec<_>>(), ["base", "header", "body"]);
    assert_eq!(card.default_variants().keys().collect::<Vec<_>>(), ["disabled"]);
    assert_eq!(card.required_variants(), ["size"]);
    assert_eq!(card.presets().keys().collect::<Vec<_>>(), ["hero"]);
    assert_eq!(card.cache_capacity(), 16);
    assert_eq!(card.cache_size(), 0);
    Ok(())
}
