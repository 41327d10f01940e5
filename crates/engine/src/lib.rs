// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod persistence;
pub mod progress;
pub mod replace;
pub mod stamper;

pub use crate::config::{StampConfig, StampConfigBuilder};
pub use crate::error::{Result, StampError};
pub use crate::progress::{NoopObserver, StampObserver};
pub use crate::stamper::{StampOutcome, stamp, stamp_file};
