use derive_builder::Builder;
use set_version_shared_kernel::{StampValue, TargetPath};

/// Inputs for a single stamping run.
///
/// Both fields are validated value objects, so a built config never carries
/// an empty value or path.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct StampConfig {
    pub value: StampValue,
    pub path: TargetPath,
}
