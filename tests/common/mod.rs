// tests/common/mod.rs
//! Shared helpers for the end-to-end tests.

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempWorkspace;

use assert_cmd::Command;

pub const SENTINEL: &str = "version = \"unset\"";

/// A fresh invocation of the built binary.
pub fn set_version() -> Command {
    Command::new(env!("CARGO_BIN_EXE_set_version"))
}
