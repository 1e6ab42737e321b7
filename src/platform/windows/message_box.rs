//! TaskDialog backend for the message-box functions.

use std::ffi::c_void;

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Controls::{
    TaskDialog, TASKDIALOG_COMMON_BUTTON_FLAGS, TDCBF_CANCEL_BUTTON, TDCBF_NO_BUTTON,
    TDCBF_OK_BUTTON, TDCBF_RETRY_BUTTON, TDCBF_YES_BUTTON, TD_ERROR_ICON, TD_INFORMATION_ICON,
    TD_WARNING_ICON,
};
use windows::Win32::UI::WindowsAndMessaging::{IDNO, IDOK, IDRETRY, IDYES};

use super::wide::{opt_pcwstr, WideString};
use crate::error::DialogError;
use crate::host::{ButtonSet, Choice, MessageIcon, MessageSpec};

// TaskDialog has no question icon of its own; it accepts the classic
// IDI_QUESTION resource id (32514) in place of a TD_* constant.
const IDI_QUESTION: PCWSTR = PCWSTR(32514 as *const u16);

pub fn show(spec: &MessageSpec) -> Result<Choice, DialogError> {
    let title = spec.title.as_deref().map(WideString::new);
    let message = spec.message.as_deref().map(WideString::new);
    let detail = spec.detail.as_deref().map(WideString::new);

    let mut pressed = 0i32;
    unsafe {
        TaskDialog(
            spec.parent.map(|h| HWND(h as *mut c_void)),
            None,
            opt_pcwstr(&title),
            opt_pcwstr(&message),
            opt_pcwstr(&detail),
            buttons(spec.buttons),
            icon(spec.icon),
            Some(&mut pressed as *mut i32),
        )
    }
    .map_err(|e| DialogError::native("TaskDialog", e))?;

    // Window close reports IDCANCEL, folded into Cancel with everything
    // unrecognized.
    Ok(match pressed {
        x if x == IDOK.0 => Choice::Ok,
        x if x == IDYES.0 => Choice::Yes,
        x if x == IDNO.0 => Choice::No,
        x if x == IDRETRY.0 => Choice::Retry,
        _ => Choice::Cancel,
    })
}

fn buttons(set: ButtonSet) -> TASKDIALOG_COMMON_BUTTON_FLAGS {
    match set {
        ButtonSet::Ok => TDCBF_OK_BUTTON,
        ButtonSet::OkCancel => TDCBF_OK_BUTTON | TDCBF_CANCEL_BUTTON,
        ButtonSet::YesNo => TDCBF_YES_BUTTON | TDCBF_NO_BUTTON,
        ButtonSet::YesNoCancel => TDCBF_YES_BUTTON | TDCBF_NO_BUTTON | TDCBF_CANCEL_BUTTON,
        ButtonSet::RetryCancel => TDCBF_RETRY_BUTTON | TDCBF_CANCEL_BUTTON,
    }
}

fn icon(icon: MessageIcon) -> PCWSTR {
    match icon {
        MessageIcon::Information => TD_INFORMATION_ICON,
        MessageIcon::Warning => TD_WARNING_ICON,
        MessageIcon::Error => TD_ERROR_ICON,
        MessageIcon::Question => IDI_QUESTION,
    }
}
