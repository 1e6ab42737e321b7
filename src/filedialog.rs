//! File and directory selection dialogs.
//!
//! Function names and option keys mirror `tkinter.filedialog`. Each call
//! shows one modal native picker and blocks until it closes; `None` (or an
//! empty list for [`askopenfilenames`]) stands for cancellation.

use std::env;
use std::path::PathBuf;

use log::{debug, warn};

use crate::error::DialogError;
use crate::host::{DialogHost, FileDialogSpec, PickMode};
use crate::options::{DirectoryOptions, FileDialogOptions};
use crate::platform;

/// Prompt for a directory. Returns the selected path, or `None` if the
/// user cancelled.
pub fn askdirectory(options: DirectoryOptions) -> Result<Option<PathBuf>, DialogError> {
    askdirectory_with(&platform::native(), options)
}

/// [`askdirectory`] against an explicit host.
pub fn askdirectory_with(
    host: &dyn DialogHost,
    options: DirectoryOptions,
) -> Result<Option<PathBuf>, DialogError> {
    let spec = FileDialogSpec {
        mode: PickMode::PickFolder,
        multi: false,
        initial_dir: resolve_initialdir(options.initialdir),
        initial_file: None,
        title: options.title,
        filters: Vec::new(),
        default_extension: None,
        parent: options.parent,
    };
    debug!("askdirectory: {spec:?}");
    Ok(host.pick(&spec)?.into_iter().next())
}

/// Prompt for an existing file to open. Returns the selected path, or
/// `None` if the user cancelled.
pub fn askopenfilename(options: FileDialogOptions) -> Result<Option<PathBuf>, DialogError> {
    askopenfilename_with(&platform::native(), options)
}

/// [`askopenfilename`] against an explicit host.
pub fn askopenfilename_with(
    host: &dyn DialogHost,
    options: FileDialogOptions,
) -> Result<Option<PathBuf>, DialogError> {
    let spec = file_spec(PickMode::OpenFile, false, options);
    debug!("askopenfilename: {spec:?}");
    Ok(host.pick(&spec)?.into_iter().next())
}

/// Prompt for one or more existing files. Returns the selected paths in
/// the order the shell reports them; an empty vector means the user
/// cancelled.
pub fn askopenfilenames(options: FileDialogOptions) -> Result<Vec<PathBuf>, DialogError> {
    askopenfilenames_with(&platform::native(), options)
}

/// [`askopenfilenames`] against an explicit host.
pub fn askopenfilenames_with(
    host: &dyn DialogHost,
    options: FileDialogOptions,
) -> Result<Vec<PathBuf>, DialogError> {
    let spec = file_spec(PickMode::OpenFile, true, options);
    debug!("askopenfilenames: {spec:?}");
    host.pick(&spec)
}

/// Prompt for a file name to save to. Returns the chosen path, or `None`
/// if the user cancelled. The overwrite confirmation shown when the chosen
/// file already exists is owned by the operating system, not this layer.
pub fn asksaveasfilename(options: FileDialogOptions) -> Result<Option<PathBuf>, DialogError> {
    asksaveasfilename_with(&platform::native(), options)
}

/// [`asksaveasfilename`] against an explicit host.
pub fn asksaveasfilename_with(
    host: &dyn DialogHost,
    options: FileDialogOptions,
) -> Result<Option<PathBuf>, DialogError> {
    let spec = file_spec(PickMode::SaveFile, false, options);
    debug!("asksaveasfilename: {spec:?}");
    Ok(host.pick(&spec)?.into_iter().next())
}

fn file_spec(mode: PickMode, multi: bool, options: FileDialogOptions) -> FileDialogSpec {
    // An explicit defaultextension wins. Otherwise, filters come with the
    // extension cleared so the dialog does not append one on its own.
    let default_extension = match options.defaultextension {
        Some(ext) => Some(ext.trim_start_matches('.').to_string()),
        None if !options.filetypes.is_empty() => Some(String::new()),
        None => None,
    };
    FileDialogSpec {
        mode,
        multi,
        initial_dir: resolve_initialdir(options.initialdir),
        initial_file: options.initialfile,
        title: options.title,
        filters: options.filetypes,
        default_extension,
        parent: options.parent,
    }
}

/// Keep an `initialdir` only if it names an existing directory; otherwise
/// fall back to the current directory, or to no preference at all when
/// even that cannot be determined.
fn resolve_initialdir(dir: Option<PathBuf>) -> Option<PathBuf> {
    match dir {
        Some(d) if d.is_dir() => Some(d),
        Some(d) => {
            warn!("initialdir {d:?} is not an existing directory, using the current directory");
            env::current_dir().ok()
        }
        None => env::current_dir().ok(),
    }
}
