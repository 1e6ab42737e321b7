//! Win32 backend: common item dialog for pickers, TaskDialog for message
//! boxes.

mod com;
mod file_dialog;
mod message_box;
mod wide;

use std::path::PathBuf;

use crate::error::DialogError;
use crate::host::{Choice, DialogHost, FileDialogSpec, MessageSpec};

/// The real host. Each call enters its own COM apartment and releases
/// every native resource before returning, on success and failure alike.
#[derive(Debug, Default)]
pub struct Win32Host;

impl DialogHost for Win32Host {
    fn pick(&self, spec: &FileDialogSpec) -> Result<Vec<PathBuf>, DialogError> {
        file_dialog::show(spec)
    }

    fn message(&self, spec: &MessageSpec) -> Result<Choice, DialogError> {
        message_box::show(spec)
    }
}
