pub mod class_value;
pub mod payload;
pub mod props;
pub mod variant_value;

pub use class_value::ClassValue;
pub use payload::{ClassPayload, SlotClasses, BASE_SLOT};
pub use props::PropMap;
pub use variant_value::VariantValue;
