// crates/cli/src/config.rs
use crate::args::Args;
pub use set_version_engine::config::{StampConfig, StampConfigBuilder};
use set_version_engine::StampError;
use set_version_shared_kernel::{StampValue, TargetPath};

impl TryFrom<&Args> for StampConfig {
    type Error = StampError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        // Missing and empty are the same failure.
        let value = StampValue::new(args.value.clone().unwrap_or_default())?;
        let path = TargetPath::new(args.path.clone().unwrap_or_default())?;

        Ok(StampConfigBuilder::default().value(value).path(path).build()?)
    }
}
