mod common;

use common::fixtures::*;
use common::{TestResult, init_logger};
use stylevar::{CompoundVariant, PropMap, Props, VariantConfig, VariantDef, VariantValue, sv_with};

fn defaulted_button() -> VariantConfig {
    button_config()
        .default_variant("size", "sm")
        .default_variant("intent", "primary")
}

#[test]
fn test_defaults_apply_without_props() -> TestResult {
    init_logger();
    let button = sv_with("rounded-lg", defaulted_button())?;
    assert_eq!(*button.resolve_default()?, "rounded-lg text-sm bg-blue-500");
    Ok(())
}

#[test]
fn test_explicit_props_override_defaults() -> TestResult {
    let button = sv_with("rounded-lg", defaulted_button())?;
    assert_eq!(
        *button.resolve(&Props::new().with("size", "lg"))?,
        "rounded-lg text-lg bg-blue-500"
    );
    assert_eq!(
        *button.resolve(&Props::new().with("size", "lg").with("intent", "danger"))?,
        "rounded-lg text-lg bg-red-500"
    );
    Ok(())
}

#[test]
fn test_absent_prop_falls_back_to_default() -> TestResult {
    let button = sv_with("rounded-lg", defaulted_button())?;

    let props = Props::new().with_option("size", None::<&str>);
    assert_eq!(*button.resolve(&props)?, "rounded-lg text-sm bg-blue-500");

    let props = Props::new()
        .with_option("size", None::<&str>)
        .with("intent", "danger");
    assert_eq!(*button.resolve(&props)?, "rounded-lg text-sm bg-red-500");

    let props = Props::new()
        .with("size", "lg")
        .with_option("intent", None::<&str>);
    assert_eq!(*button.resolve(&props)?, "rounded-lg text-lg bg-blue-500");
    Ok(())
}

#[test]
fn test_partial_defaults_leave_other_variants_unset() -> TestResult {
    let button = sv_with("rounded-lg", button_config().default_variant("size", "lg"))?;
    assert_eq!(*button.resolve_default()?, "rounded-lg text-lg");
    Ok(())
}

#[test]
fn test_function_default_reads_other_props() -> TestResult {
    let button = sv_with(
        "rounded-lg",
        VariantConfig::new()
            .variant("intent", intent_variant())
            .variant("outline", VariantDef::boolean("border-2", ""))
            .default_with("outline", |props: &PropMap| {
                Some(VariantValue::from(props.is("intent", "danger")))
            }),
    )?;

    assert_eq!(
        *button.resolve(&Props::new().with("intent", "danger"))?,
        "rounded-lg bg-red-500 border-2"
    );
    assert_eq!(
        *button.resolve(&Props::new().with("intent", "primary"))?,
        "rounded-lg bg-blue-500"
    );
    Ok(())
}

#[test]
fn test_function_default_can_skip() -> TestResult {
    let button = sv_with(
        "rounded-lg",
        button_config().default_with("intent", |props: &PropMap| {
            props.is("size", "sm").then(|| VariantValue::from("primary"))
        }),
    )?;

    assert_eq!(
        *button.resolve(&Props::new().with("size", "sm"))?,
        "rounded-lg text-sm bg-blue-500"
    );
    assert_eq!(*button.resolve(&Props::new().with("size", "lg"))?, "rounded-lg text-lg");
    Ok(())
}

#[test]
fn test_explicit_prop_skips_function_default() -> TestResult {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let button = sv_with(
        "rounded-lg",
        button_config().default_with("intent", move |_: &PropMap| {
            counter.fetch_add(1, Ordering::SeqCst);
            Some(VariantValue::from("primary"))
        }),
    )?;

    assert_eq!(
        *button.resolve(&Props::new().with("intent", "danger"))?,
        "rounded-lg bg-red-500"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(*button.resolve_default()?, "rounded-lg bg-blue-500");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_mixed_static_and_function_defaults() -> TestResult {
    let button = sv_with(
        "rounded-lg",
        button_config()
            .default_variant("size", "lg")
            .default_with("intent", |props: &PropMap| {
                // Static defaults are not visible here; only call-time props are.
                Some(VariantValue::from(if props.contains("size") { "danger" } else { "primary" }))
            }),
    )?;

    assert_eq!(*button.resolve_default()?, "rounded-lg text-lg bg-blue-500");
    assert_eq!(
        *button.resolve(&Props::new().with("size", "sm"))?,
        "rounded-lg text-sm bg-red-500"
    );
    Ok(())
}

#[test]
fn test_function_default_triggers_compound_variant() -> TestResult {
    let button = sv_with(
        "rounded-lg",
        button_config()
            .default_with("intent", |props: &PropMap| {
                props.is("size", "sm").then(|| VariantValue::from("primary"))
            })
            .compound_variant(
                CompoundVariant::new()
                    .when("size", "sm")
                    .when("intent", "primary")
                    .class("uppercase"),
            ),
    )?;

    assert_eq!(
        *button.resolve(&Props::new().with("size", "sm"))?,
        "rounded-lg text-sm bg-blue-500 uppercase"
    );
    assert_eq!(*button.resolve(&Props::new().with("size", "lg"))?, "rounded-lg text-lg");
    assert_eq!(
        *button.resolve(&Props::new().with("size", "sm").with("intent", "danger"))?,
        "rounded-lg text-sm bg-red-500"
    );
    Ok(())
}
