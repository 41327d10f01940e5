pub use set_version_shared_kernel::{ArgumentError, FileAccessError, FileOperation, Result, StampError};

use crate::config::StampConfigBuilderError;

impl From<StampConfigBuilderError> for StampError {
    fn from(err: StampConfigBuilderError) -> Self {
        let argument = match err {
            StampConfigBuilderError::UninitializedField(field) => field.to_string(),
            StampConfigBuilderError::ValidationError(reason) => reason,
        };
        ArgumentError::Missing { argument }.into()
    }
}
