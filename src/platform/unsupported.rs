//! Stub host for targets without a native dialog backend.

use std::path::PathBuf;

use crate::error::DialogError;
use crate::host::{Choice, DialogHost, FileDialogSpec, MessageSpec};

/// Every call fails with [`DialogError::UnsupportedPlatform`].
#[derive(Debug, Default)]
pub struct UnsupportedHost;

impl DialogHost for UnsupportedHost {
    fn pick(&self, _spec: &FileDialogSpec) -> Result<Vec<PathBuf>, DialogError> {
        Err(DialogError::UnsupportedPlatform)
    }

    fn message(&self, _spec: &MessageSpec) -> Result<Choice, DialogError> {
        Err(DialogError::UnsupportedPlatform)
    }
}
