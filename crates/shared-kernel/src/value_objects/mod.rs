// crates/shared-kernel/src/value_objects/mod.rs
pub mod placeholder;
pub mod stamp_value;
pub mod target_path;

pub use placeholder::{PlaceholderPattern, SENTINEL_TOKEN, VERSION_PLACEHOLDER};
pub use stamp_value::StampValue;
pub use target_path::TargetPath;
