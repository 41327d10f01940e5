// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ArgumentError, ErrorContext, FileAccessError, FileOperation, Result, StampError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{PlaceholderPattern, SENTINEL_TOKEN, StampValue, TargetPath, VERSION_PLACEHOLDER};
