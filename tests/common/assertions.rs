use stylevar::Resolved;

/// The slot mapping of `resolved` as borrowed pairs, in output order.
/// A single-string result is reported as its `base` slot alone.
pub fn slot_pairs(resolved: &Resolved) -> Vec<(&str, &str)> {
    match resolved.slots() {
        Some(slots) => slots
            .iter()
            .map(|(slot, classes)| (slot.as_str(), classes.as_str()))
            .collect(),
        None => vec![("base", resolved.as_str())],
    }
}

/// Asserts the class string of each listed slot.
#[macro_export]
macro_rules! assert_slots {
    ($resolved:expr, { $($slot:expr => $classes:expr),* $(,)? }) => {{
        let resolved = &$resolved;
        $(
            assert_eq!(
                resolved.slot($slot),
                Some($classes),
                "slot '{}' of {:?}",
                $slot,
                resolved
            );
        )*
    }};
}
