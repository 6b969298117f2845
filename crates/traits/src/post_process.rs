//! PostProcess trait for transforming resolved class strings.
//!
//! The engine never interprets class names. Anything that needs to understand
//! them (deduplication, conflict resolution against a utility framework, case
//! changes) is supplied by the caller through this trait and applied to every
//! slot string after flattening.

use std::fmt::Debug;

/// A pure `string -> string` transform applied to each flattened slot.
///
/// Any `Fn(&str) -> String` closure is a `PostProcess`:
///
/// ```
/// use stylevar_traits::PostProcess;
///
/// let upper = |classes: &str| classes.to_uppercase();
/// assert_eq!(upper.process("p-4 text-sm"), "P-4 TEXT-SM");
/// ```
pub trait PostProcess: Send + Sync {
    /// Transform one flattened class string.
    fn process(&self, class_name: &str) -> String;
}

impl<F> PostProcess for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn process(&self, class_name: &str) -> String {
        self(class_name)
    }
}

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl PostProcess for Identity {
    fn process(&self, class_name: &str) -> String {
        class_name.to_string()
    }
}

impl Debug for dyn PostProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PostProcess")
    }
}
