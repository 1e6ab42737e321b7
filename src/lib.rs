//! Native Windows file/directory dialogs and message boxes with
//! tkinter-style naming.
//!
//! The public functions keep the names and option keys of
//! `tkinter.filedialog` and `tkinter.messagebox` so code can be ported
//! between the two with near-zero changes:
//!
//! | tkinter | here |
//! |---|---|
//! | `filedialog.askdirectory(initialdir=, title=, parent=)` | [`askdirectory`] with [`DirectoryOptions`] |
//! | `filedialog.askopenfilename(initialdir=, initialfile=, title=, filetypes=, defaultextension=, parent=)` | [`askopenfilename`] with [`FileDialogOptions`] |
//! | `filedialog.askopenfilenames(...)` | [`askopenfilenames`] |
//! | `filedialog.asksaveasfilename(...)` | [`asksaveasfilename`] |
//! | `messagebox.showinfo(title=, message=, detail=, parent=)` | [`showinfo`] with [`MessageOptions`] |
//! | `messagebox.showwarning(...)` / `showerror(...)` | [`showwarning`] / [`showerror`] |
//! | `messagebox.askyesno(title=, message=, detail=, parent=)` / `askquestion(...)` | [`askyesno`] / [`askquestion`] |
//! | `messagebox.askokcancel(...)` / `askretrycancel(...)` | [`askokcancel`] / [`askretrycancel`] |
//! | `messagebox.askyesnocancel(...)` | [`askyesnocancel`] |
//!
//! Every call is synchronous: it shows one modal native dialog, blocks
//! until the user dismisses it, and returns a plain value. Cancelling a
//! dialog is a value (`None` or an empty list), never an error;
//! [`DialogError`] is reserved for failures reported by the native
//! subsystem itself.
//!
//! The native backend (Windows Vista+ common item dialog and comctl32
//! `TaskDialog`) only exists on Windows. On other targets the same API
//! compiles, but every dialog call fails with
//! [`DialogError::UnsupportedPlatform`]. The [`DialogHost`] trait is the
//! seam between the portable layer and the OS; tests substitute their own
//! host through the `*_with` function variants.
//!
//! ```no_run
//! use wdlg::{askyesno, MessageOptions};
//!
//! # fn run() -> Result<(), wdlg::DialogError> {
//! let proceed = askyesno(MessageOptions {
//!     title: Some("Report".into()),
//!     message: Some("Overwrite the existing report?".into()),
//!     ..Default::default()
//! })?;
//! if proceed {
//!     // write the report
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filedialog;
pub mod host;
pub mod messagebox;
pub mod options;
pub mod platform;

pub use error::DialogError;
pub use filedialog::{askdirectory, askopenfilename, askopenfilenames, asksaveasfilename};
pub use host::{ButtonSet, Choice, DialogHost, FileDialogSpec, MessageIcon, MessageSpec, PickMode};
pub use messagebox::{
    askokcancel, askquestion, askretrycancel, askyesno, askyesnocancel, showerror, showinfo,
    showwarning,
};
pub use options::{DirectoryOptions, FileDialogOptions, MessageOptions};
