//! Option bags for the dialog functions.
//!
//! Field names follow tkinter's option keys verbatim (see the crate docs
//! for the mapping table). Everything defaults to absent, so call sites
//! read like keyword arguments:
//!
//! ```no_run
//! use wdlg::{askopenfilename, FileDialogOptions};
//!
//! # fn run() -> Result<(), wdlg::DialogError> {
//! let picked = askopenfilename(FileDialogOptions {
//!     title: Some("Pick a log file".into()),
//!     filetypes: vec![("Log files".into(), "*.log".into())],
//!     ..Default::default()
//! })?;
//! println!("{picked:?}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

/// Options for [`askdirectory`](crate::filedialog::askdirectory).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryOptions {
    /// Starting location. Falls back to the process current directory when
    /// absent or not an existing directory.
    pub initialdir: Option<PathBuf>,
    /// Window caption.
    pub title: Option<String>,
    /// Raw handle of the owner window, if the dialog should be owned.
    pub parent: Option<isize>,
}

/// Options for the file open/save functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileDialogOptions {
    /// Starting location, same fallback as [`DirectoryOptions::initialdir`].
    pub initialdir: Option<PathBuf>,
    /// Pre-filled file name in the name edit control.
    pub initialfile: Option<String>,
    /// Window caption.
    pub title: Option<String>,
    /// Ordered `(label, pattern)` pairs for the filter dropdown, e.g.
    /// `("Text files", "*.txt;*.md")`. The dialog restricts its filter to
    /// exactly these patterns, in this order.
    pub filetypes: Vec<(String, String)>,
    /// Extension appended when the user types a bare name. Accepted with
    /// or without the leading dot.
    pub defaultextension: Option<String>,
    /// Raw handle of the owner window, if the dialog should be owned.
    pub parent: Option<isize>,
}

/// Options for the message-box functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptions {
    /// Window caption.
    pub title: Option<String>,
    /// Main instruction text.
    pub message: Option<String>,
    /// Secondary text shown below the main instruction.
    pub detail: Option<String>,
    /// Raw handle of the owner window, if the dialog should be owned.
    pub parent: Option<isize>,
}
