//! Tests for the file/directory dialog functions.
//!
//! The native boundary is replaced by a scripted host that records every
//! spec it receives, so these tests assert on exactly what would have
//! reached the operating system.

use std::cell::RefCell;
use std::env;
use std::path::PathBuf;

use wdlg::filedialog::{
    askdirectory_with, askopenfilename_with, askopenfilenames_with, asksaveasfilename_with,
};
use wdlg::{
    Choice, DialogError, DialogHost, DirectoryOptions, FileDialogOptions, FileDialogSpec,
    MessageSpec, PickMode,
};

/// Records every pick request and replays a scripted outcome.
struct ScriptedHost {
    picks: RefCell<Vec<FileDialogSpec>>,
    outcome: Vec<PathBuf>,
}

impl ScriptedHost {
    fn cancelling() -> Self {
        Self {
            picks: RefCell::new(Vec::new()),
            outcome: Vec::new(),
        }
    }

    fn choosing(paths: &[&str]) -> Self {
        Self {
            picks: RefCell::new(Vec::new()),
            outcome: paths.iter().map(PathBuf::from).collect(),
        }
    }

    fn last_spec(&self) -> FileDialogSpec {
        self.picks.borrow().last().cloned().expect("no pick recorded")
    }
}

impl DialogHost for ScriptedHost {
    fn pick(&self, spec: &FileDialogSpec) -> Result<Vec<PathBuf>, DialogError> {
        self.picks.borrow_mut().push(spec.clone());
        Ok(self.outcome.clone())
    }

    fn message(&self, _spec: &MessageSpec) -> Result<Choice, DialogError> {
        unreachable!("file dialog tests never open a message box")
    }
}

/// Fails every pick with a fixed native error.
struct FailingHost;

fn native_error() -> DialogError {
    DialogError::Native {
        method: "IFileDialog::Show",
        code: 0x8007000Eu32 as i32, // E_OUTOFMEMORY
        message: "Not enough memory resources".into(),
    }
}

impl DialogHost for FailingHost {
    fn pick(&self, _spec: &FileDialogSpec) -> Result<Vec<PathBuf>, DialogError> {
        Err(native_error())
    }

    fn message(&self, _spec: &MessageSpec) -> Result<Choice, DialogError> {
        unreachable!("file dialog tests never open a message box")
    }
}

// === Cancellation ===

#[test]
fn cancelled_open_returns_none_without_error() {
    let host = ScriptedHost::cancelling();
    let result = askopenfilename_with(&host, FileDialogOptions::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn cancelled_save_returns_none_without_error() {
    let host = ScriptedHost::cancelling();
    let result = asksaveasfilename_with(&host, FileDialogOptions::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn cancelled_directory_returns_none_without_error() {
    let host = ScriptedHost::cancelling();
    let result = askdirectory_with(&host, DirectoryOptions::default());
    assert_eq!(result, Ok(None));
}

#[test]
fn cancelled_multi_open_returns_empty_vec() {
    let host = ScriptedHost::cancelling();
    let result = askopenfilenames_with(&host, FileDialogOptions::default());
    assert_eq!(result, Ok(Vec::new()));
}

// === Results ===

#[test]
fn chosen_path_is_returned() {
    let host = ScriptedHost::choosing(&["/tmp/report.txt"]);
    let result = askopenfilename_with(&host, FileDialogOptions::default()).unwrap();
    assert_eq!(result, Some(PathBuf::from("/tmp/report.txt")));
}

#[test]
fn multi_open_returns_all_paths_in_order() {
    let host = ScriptedHost::choosing(&["/a.log", "/b.log", "/c.log"]);
    let result = askopenfilenames_with(&host, FileDialogOptions::default()).unwrap();
    assert_eq!(
        result,
        vec![
            PathBuf::from("/a.log"),
            PathBuf::from("/b.log"),
            PathBuf::from("/c.log"),
        ]
    );
}

// === Mode selection ===

#[test]
fn askdirectory_requests_folder_mode() {
    let host = ScriptedHost::cancelling();
    askdirectory_with(&host, DirectoryOptions::default()).unwrap();
    let spec = host.last_spec();
    assert_eq!(spec.mode, PickMode::PickFolder);
    assert!(!spec.multi);
    assert!(spec.filters.is_empty());
    assert_eq!(spec.default_extension, None);
}

#[test]
fn askopenfilename_requests_single_open() {
    let host = ScriptedHost::cancelling();
    askopenfilename_with(&host, FileDialogOptions::default()).unwrap();
    let spec = host.last_spec();
    assert_eq!(spec.mode, PickMode::OpenFile);
    assert!(!spec.multi);
}

#[test]
fn askopenfilenames_requests_multi_open() {
    let host = ScriptedHost::cancelling();
    askopenfilenames_with(&host, FileDialogOptions::default()).unwrap();
    let spec = host.last_spec();
    assert_eq!(spec.mode, PickMode::OpenFile);
    assert!(spec.multi);
}

#[test]
fn asksaveasfilename_requests_save_mode() {
    let host = ScriptedHost::cancelling();
    asksaveasfilename_with(&host, FileDialogOptions::default()).unwrap();
    let spec = host.last_spec();
    assert_eq!(spec.mode, PickMode::SaveFile);
    assert!(!spec.multi);
}

// === Filters and extensions ===

#[test]
fn filetypes_reach_host_exactly_in_order() {
    let filetypes = vec![
        ("Text files".to_string(), "*.txt;*.md".to_string()),
        ("Log files".to_string(), "*.log".to_string()),
        ("All files".to_string(), "*.*".to_string()),
    ];
    let host = ScriptedHost::cancelling();
    askopenfilename_with(
        &host,
        FileDialogOptions {
            filetypes: filetypes.clone(),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().filters, filetypes);
}

#[test]
fn filetypes_without_defaultextension_clear_the_extension() {
    let host = ScriptedHost::cancelling();
    asksaveasfilename_with(
        &host,
        FileDialogOptions {
            filetypes: vec![("Text files".into(), "*.txt".into())],
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().default_extension, Some(String::new()));
}

#[test]
fn defaultextension_strips_leading_dot() {
    let host = ScriptedHost::cancelling();
    asksaveasfilename_with(
        &host,
        FileDialogOptions {
            defaultextension: Some(".txt".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().default_extension, Some("txt".into()));
}

#[test]
fn defaultextension_without_dot_is_forwarded_unchanged() {
    let host = ScriptedHost::cancelling();
    asksaveasfilename_with(
        &host,
        FileDialogOptions {
            defaultextension: Some("txt".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().default_extension, Some("txt".into()));
}

#[test]
fn no_filters_and_no_defaultextension_leave_extension_unset() {
    let host = ScriptedHost::cancelling();
    askopenfilename_with(&host, FileDialogOptions::default()).unwrap();
    assert_eq!(host.last_spec().default_extension, None);
}

// === initialdir resolution ===

#[test]
fn existing_initialdir_is_forwarded_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let host = ScriptedHost::cancelling();
    askdirectory_with(
        &host,
        DirectoryOptions {
            initialdir: Some(dir.path().to_path_buf()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().initial_dir, Some(dir.path().to_path_buf()));
}

#[test]
fn nonexistent_initialdir_falls_back_to_current_dir() {
    // The fallback logs a warning; make it visible under --nocapture.
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let host = ScriptedHost::cancelling();
    askopenfilename_with(
        &host,
        FileDialogOptions {
            initialdir: Some(missing),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().initial_dir, env::current_dir().ok());
}

#[test]
fn initialdir_pointing_at_a_file_falls_back_to_current_dir() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let host = ScriptedHost::cancelling();
    askopenfilename_with(
        &host,
        FileDialogOptions {
            initialdir: Some(file.path().to_path_buf()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().initial_dir, env::current_dir().ok());
}

#[test]
fn absent_initialdir_defaults_to_current_dir() {
    let host = ScriptedHost::cancelling();
    askdirectory_with(&host, DirectoryOptions::default()).unwrap();
    assert_eq!(host.last_spec().initial_dir, env::current_dir().ok());
}

// === Remaining options ===

#[test]
fn title_and_initialfile_are_forwarded() {
    let host = ScriptedHost::cancelling();
    asksaveasfilename_with(
        &host,
        FileDialogOptions {
            title: Some("Save report".into()),
            initialfile: Some("report.txt".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let spec = host.last_spec();
    assert_eq!(spec.title, Some("Save report".into()));
    assert_eq!(spec.initial_file, Some("report.txt".into()));
}

#[test]
fn parent_handle_is_forwarded() {
    let host = ScriptedHost::cancelling();
    askopenfilename_with(
        &host,
        FileDialogOptions {
            parent: Some(0x1234),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(host.last_spec().parent, Some(0x1234));
}

// === Native failures ===

#[test]
fn native_failure_propagates_from_every_function() {
    // A failing host must surface its exact error, never the empty
    // cancellation result.
    assert_eq!(
        askdirectory_with(&FailingHost, DirectoryOptions::default()),
        Err(native_error())
    );
    assert_eq!(
        askopenfilename_with(&FailingHost, FileDialogOptions::default()),
        Err(native_error())
    );
    assert_eq!(
        askopenfilenames_with(&FailingHost, FileDialogOptions::default()),
        Err(native_error())
    );
    assert_eq!(
        asksaveasfilename_with(&FailingHost, FileDialogOptions::default()),
        Err(native_error())
    );
}

#[test]
fn native_failure_carries_method_and_code() {
    let err = askopenfilename_with(&FailingHost, FileDialogOptions::default()).unwrap_err();
    match err {
        DialogError::Native { method, code, .. } => {
            assert_eq!(method, "IFileDialog::Show");
            assert_eq!(code, 0x8007000Eu32 as i32);
        }
        other => panic!("expected a native failure, got {other:?}"),
    }
}

// On targets without a native backend the unsuffixed functions reach the
// stub host and must report that, not pretend the user cancelled.
#[cfg(not(target_os = "windows"))]
#[test]
fn native_host_reports_unsupported_platform() {
    assert_eq!(
        wdlg::askdirectory(DirectoryOptions::default()),
        Err(DialogError::UnsupportedPlatform)
    );
    assert_eq!(
        wdlg::askopenfilename(FileDialogOptions::default()),
        Err(DialogError::UnsupportedPlatform)
    );
    assert_eq!(
        wdlg::askopenfilenames(FileDialogOptions::default()),
        Err(DialogError::UnsupportedPlatform)
    );
    assert_eq!(
        wdlg::asksaveasfilename(FileDialogOptions::default()),
        Err(DialogError::UnsupportedPlatform)
    );
}

// === Idempotence ===

#[test]
fn identical_calls_produce_identical_specs_and_results() {
    let options = FileDialogOptions {
        title: Some("Pick".into()),
        filetypes: vec![("All files".into(), "*.*".into())],
        ..Default::default()
    };
    let host = ScriptedHost::choosing(&["/picked.txt"]);
    let first = askopenfilename_with(&host, options.clone()).unwrap();
    let second = askopenfilename_with(&host, options).unwrap();
    assert_eq!(first, second);
    let picks = host.picks.borrow();
    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0], picks[1]);
}
