//! Class string flattening.
//!
//! `cn` walks any mix of strings, nested lists and class records and joins
//! the truthy class names with single spaces. Inputs are processed as a work
//! queue rather than recursively, so arbitrarily deep nesting cannot overflow
//! the stack. Nested list members are queued behind the values already
//! waiting, which means their classes follow the sibling values:
//!
//! ```
//! use stylevar_cn::{cn, ClassValue};
//!
//! let classes = cn(&[
//!     ClassValue::from("flex"),
//!     ClassValue::from(["items-center", "gap-2"]),
//!     ClassValue::from("text-sm"),
//! ]);
//! assert_eq!(classes, "flex text-sm items-center gap-2");
//! ```

use std::collections::VecDeque;

pub use stylevar_types::ClassValue;

/// Flattens `values` into one space separated class string.
pub fn cn(values: &[ClassValue]) -> String {
    cn_iter(values)
}

/// Flattens any sequence of borrowed class values.
pub fn cn_iter<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a ClassValue>,
{
    let mut queue: VecDeque<&ClassValue> = values.into_iter().collect();
    let mut out = ClassString::default();

    while let Some(item) = queue.pop_front() {
        match item {
            ClassValue::Empty => {}
            ClassValue::Str(s) => {
                if !s.is_empty() {
                    out.push(s);
                }
            }
            ClassValue::List(items) => queue.extend(items.iter()),
            ClassValue::Record(record) => {
                for (class, enabled) in record {
                    if *enabled {
                        out.push(class);
                    }
                }
            }
        }
    }

    out.0
}

/// Accumulates fragments with a single separating space. Fragments are
/// appended verbatim, surrounding whitespace included.
#[derive(Default)]
struct ClassString(String, bool);

impl ClassString {
    fn push(&mut self, fragment: &str) {
        if self.1 {
            self.0.push(' ');
        }
        self.0.push_str(fragment);
        self.1 = true;
    }
}

/// Flattens any number of values convertible into [`ClassValue`].
///
/// ```
/// use stylevar_cn::cn;
///
/// assert_eq!(cn!("flex", None::<&str>, vec!["p-4"]), "flex p-4");
/// assert_eq!(cn!(), "");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::cn(&[$($crate::ClassValue::from($value)),+])
    };
}
