//! The boundary between the portable layer and the native dialog APIs.
//!
//! Public functions lower their options into a fully explicit spec and
//! hand it to a [`DialogHost`]. The only real host lives in
//! [`platform::windows`](crate::platform); tests substitute a host of
//! their own to observe exactly which request reached the native layer.

use std::path::PathBuf;

use crate::error::DialogError;

/// What kind of item a file dialog asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    OpenFile,
    SaveFile,
    PickFolder,
}

/// A lowered file-dialog request, ready for the native layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDialogSpec {
    pub mode: PickMode,
    /// Allow selecting more than one item (open dialogs only).
    pub multi: bool,
    /// Validated starting directory; `None` lets the shell decide.
    pub initial_dir: Option<PathBuf>,
    /// Pre-filled file name.
    pub initial_file: Option<String>,
    /// Window caption.
    pub title: Option<String>,
    /// Ordered `(label, pattern)` filter pairs, forwarded verbatim.
    pub filters: Vec<(String, String)>,
    /// Default extension without its leading dot. `Some("")` explicitly
    /// clears the dialog's default extension.
    pub default_extension: Option<String>,
    /// Raw owner-window handle.
    pub parent: Option<isize>,
}

/// Icon category of a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageIcon {
    Information,
    Warning,
    Error,
    Question,
}

/// Fixed button set of a message dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSet {
    Ok,
    OkCancel,
    YesNo,
    YesNoCancel,
    RetryCancel,
}

/// A lowered message-dialog request.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSpec {
    /// Window caption.
    pub title: Option<String>,
    /// Main instruction text.
    pub message: Option<String>,
    /// Secondary text below the main instruction.
    pub detail: Option<String>,
    pub buttons: ButtonSet,
    pub icon: MessageIcon,
    /// Raw owner-window handle.
    pub parent: Option<isize>,
}

/// The button the user pressed. Closing the window with the title-bar
/// close button reports [`Choice::Cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Ok,
    Cancel,
    Yes,
    No,
    Retry,
}

/// One modal round-trip to the operating system per method call. Hosts
/// hold no state between calls.
pub trait DialogHost {
    /// Run a modal file/directory dialog. An empty vector means the user
    /// cancelled; errors are reserved for native-call failures.
    fn pick(&self, spec: &FileDialogSpec) -> Result<Vec<PathBuf>, DialogError>;

    /// Run a modal message dialog and report the button pressed.
    fn message(&self, spec: &MessageSpec) -> Result<Choice, DialogError>;
}
