// crates/shared-kernel/src/value_objects/placeholder.rs
use std::fmt;

/// Slot text marking a file that has not been stamped yet.
pub const SENTINEL_TOKEN: &str = "unset";

/// `version = "{slot}"`
pub const VERSION_PLACEHOLDER: PlaceholderPattern = PlaceholderPattern::new("version = \"", "\"");

/// Template with a single substitution slot between a fixed prefix and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaceholderPattern {
    prefix: &'static str,
    suffix: &'static str,
}

impl PlaceholderPattern {
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    pub fn instantiate(&self, slot: &str) -> String {
        let mut rendered = String::with_capacity(self.prefix.len() + slot.len() + self.suffix.len());
        rendered.push_str(self.prefix);
        rendered.push_str(slot);
        rendered.push_str(self.suffix);
        rendered
    }

    pub fn sentinel(&self) -> String {
        self.instantiate(SENTINEL_TOKEN)
    }
}

impl Default for PlaceholderPattern {
    fn default() -> Self {
        VERSION_PLACEHOLDER
    }
}

impl fmt::Display for PlaceholderPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{slot}}{}", self.prefix, self.suffix)
    }
}
