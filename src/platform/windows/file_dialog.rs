//! Common item dialog (Vista+) backend for the file/directory functions.

use std::ffi::{c_void, OsString};
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;

use log::debug;
use windows::core::Interface;
use windows::Win32::Foundation::{ERROR_CANCELLED, HWND};
use windows::Win32::System::Com::{CoCreateInstance, CoTaskMemFree, CLSCTX_INPROC_SERVER};
use windows::Win32::UI::Shell::Common::COMDLG_FILTERSPEC;
use windows::Win32::UI::Shell::{
    FileOpenDialog, FileSaveDialog, IFileDialog, IFileOpenDialog, IShellItem,
    SHCreateItemFromParsingName, FOS_ALLOWMULTISELECT, FOS_FORCEFILESYSTEM, FOS_PICKFOLDERS,
    SIGDN_FILESYSPATH,
};

use super::com::ComApartment;
use super::wide::WideString;
use crate::error::DialogError;
use crate::host::{FileDialogSpec, PickMode};

pub fn show(spec: &FileDialogSpec) -> Result<Vec<PathBuf>, DialogError> {
    let _com = ComApartment::enter()?;

    let dialog: IFileDialog = match spec.mode {
        PickMode::SaveFile => {
            unsafe { CoCreateInstance(&FileSaveDialog, None, CLSCTX_INPROC_SERVER) }
                .map_err(native("CoCreateInstance"))?
        }
        _ => unsafe { CoCreateInstance(&FileOpenDialog, None, CLSCTX_INPROC_SERVER) }
            .map_err(native("CoCreateInstance"))?,
    };

    // FOS_FORCEFILESYSTEM on top of the dialog's defaults (which already
    // carry FILEMUSTEXIST/PATHMUSTEXIST for open, OVERWRITEPROMPT for
    // save) so a returned item always names a real filesystem path.
    let mut options =
        unsafe { dialog.GetOptions() }.map_err(native("IFileDialog::GetOptions"))?;
    options |= FOS_FORCEFILESYSTEM;
    if spec.mode == PickMode::PickFolder {
        options |= FOS_PICKFOLDERS;
    }
    if spec.multi {
        options |= FOS_ALLOWMULTISELECT;
    }
    unsafe { dialog.SetOptions(options) }.map_err(native("IFileDialog::SetOptions"))?;

    if let Some(dir) = &spec.initial_dir {
        // The directory was validated during lowering; if the shell still
        // rejects it (removed in the meantime, unparsable), the dialog
        // simply opens at its own default.
        let wide = WideString::new(&dir.to_string_lossy());
        let folder: Result<IShellItem, _> =
            unsafe { SHCreateItemFromParsingName(wide.pcwstr(), None) };
        match folder {
            Ok(folder) => {
                unsafe { dialog.SetFolder(&folder) }.map_err(native("IFileDialog::SetFolder"))?
            }
            Err(e) => debug!("initial_dir {dir:?} not resolvable: {e}"),
        }
    }

    let initial_file = spec.initial_file.as_deref().map(WideString::new);
    if let Some(name) = &initial_file {
        unsafe { dialog.SetFileName(name.pcwstr()) }
            .map_err(native("IFileDialog::SetFileName"))?;
    }

    let title = spec.title.as_deref().map(WideString::new);
    if let Some(title) = &title {
        unsafe { dialog.SetTitle(title.pcwstr()) }.map_err(native("IFileDialog::SetTitle"))?;
    }

    // The wide buffers must stay alive until Show returns.
    let filter_strings: Vec<(WideString, WideString)> = spec
        .filters
        .iter()
        .map(|(label, pattern)| (WideString::new(label), WideString::new(pattern)))
        .collect();
    if !filter_strings.is_empty() {
        let filter_specs: Vec<COMDLG_FILTERSPEC> = filter_strings
            .iter()
            .map(|(label, pattern)| COMDLG_FILTERSPEC {
                pszName: label.pcwstr(),
                pszSpec: pattern.pcwstr(),
            })
            .collect();
        unsafe { dialog.SetFileTypes(&filter_specs) }
            .map_err(native("IFileDialog::SetFileTypes"))?;
    }

    let extension = spec.default_extension.as_deref().map(WideString::new);
    if let Some(ext) = &extension {
        unsafe { dialog.SetDefaultExtension(ext.pcwstr()) }
            .map_err(native("IFileDialog::SetDefaultExtension"))?;
    }

    let owner = spec.parent.map(|h| HWND(h as *mut c_void));
    if let Err(e) = unsafe { dialog.Show(owner) } {
        if e.code() == ERROR_CANCELLED.to_hresult() {
            return Ok(Vec::new());
        }
        return Err(DialogError::native("IFileDialog::Show", e));
    }

    if spec.multi {
        let open: IFileOpenDialog = dialog
            .cast()
            .map_err(native("IFileDialog::QueryInterface"))?;
        let items = unsafe { open.GetResults() }.map_err(native("IFileOpenDialog::GetResults"))?;
        let count = unsafe { items.GetCount() }.map_err(native("IShellItemArray::GetCount"))?;
        let mut paths = Vec::with_capacity(count as usize);
        for i in 0..count {
            let item =
                unsafe { items.GetItemAt(i) }.map_err(native("IShellItemArray::GetItemAt"))?;
            paths.push(item_path(&item)?);
        }
        Ok(paths)
    } else {
        let item = unsafe { dialog.GetResult() }.map_err(native("IFileDialog::GetResult"))?;
        Ok(vec![item_path(&item)?])
    }
}

fn item_path(item: &IShellItem) -> Result<PathBuf, DialogError> {
    let name = unsafe { item.GetDisplayName(SIGDN_FILESYSPATH) }
        .map_err(native("IShellItem::GetDisplayName"))?;
    let path = OsString::from_wide(unsafe { name.as_wide() });
    unsafe { CoTaskMemFree(Some(name.0 as *const c_void)) };
    Ok(PathBuf::from(path))
}

fn native(method: &'static str) -> impl Fn(windows::core::Error) -> DialogError {
    move |e| DialogError::native(method, e)
}
