//! Error type shared by all dialog calls.

use std::error::Error;
use std::fmt;

/// Failure reported while running a native dialog.
///
/// User cancellation is never an error: a cancelled dialog yields the
/// empty result of whichever function was called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// A native call failed with a code other than the cancellation code.
    Native {
        /// The routine that failed, e.g. `"IFileDialog::Show"`.
        method: &'static str,
        /// The HRESULT, carried as a plain integer so the type is
        /// representable on every target.
        code: i32,
        /// System-reported message, when one was available.
        message: String,
    },
    /// A dialog was invoked on a target without a native backend.
    UnsupportedPlatform,
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::Native {
                method,
                code,
                message,
            } => {
                write!(f, "{method} failed with HRESULT {code:#010x}: {message}")
            }
            DialogError::UnsupportedPlatform => {
                write!(f, "native dialogs are only available on Windows")
            }
        }
    }
}

impl Error for DialogError {}

#[cfg(target_os = "windows")]
impl DialogError {
    pub(crate) fn native(method: &'static str, err: windows::core::Error) -> Self {
        DialogError::Native {
            method,
            code: err.code().0,
            message: err.message(),
        }
    }
}
