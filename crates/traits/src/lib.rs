pub mod default;
pub mod post_process;

pub use default::DefaultResolver;
pub use post_process::{Identity, PostProcess};
