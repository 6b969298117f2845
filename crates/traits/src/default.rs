//! DefaultResolver trait for defaults computed from other props.

use std::fmt::Debug;
use stylevar_types::{PropMap, VariantValue};

/// Computes a variant's default from the props resolved before defaults are
/// applied (explicit props layered over the selected preset).
///
/// Returning `None` leaves the variant unset. A resolver is never invoked when
/// an explicit prop or the preset already supplies the variant.
///
/// ```
/// use stylevar_traits::DefaultResolver;
/// use stylevar_types::{PropMap, VariantValue};
///
/// let outline = |props: &PropMap| Some(VariantValue::from(props.is("intent", "danger")));
/// let props: PropMap = [("intent", "danger")].into_iter().collect();
/// assert_eq!(outline.resolve(&props), Some(VariantValue::Bool(true)));
/// ```
pub trait DefaultResolver: Send + Sync {
    fn resolve(&self, props: &PropMap) -> Option<VariantValue>;
}

impl<F> DefaultResolver for F
where
    F: Fn(&PropMap) -> Option<VariantValue> + Send + Sync,
{
    fn resolve(&self, props: &PropMap) -> Option<VariantValue> {
        self(props)
    }
}

impl Debug for dyn DefaultResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DefaultResolver")
    }
}
