//! Message boxes.
//!
//! Function names and option keys mirror `tkinter.messagebox`. Each call
//! shows one modal dialog with a fixed button set and category icon:
//!
//! | function          | buttons           | icon        | returns              |
//! |-------------------|-------------------|-------------|----------------------|
//! | [`showinfo`]      | OK                | information | `()`                 |
//! | [`showwarning`]   | OK                | warning     | `()`                 |
//! | [`showerror`]     | OK                | error       | `()`                 |
//! | [`askokcancel`]   | OK, Cancel        | question    | `true` iff OK        |
//! | [`askquestion`]   | Yes, No           | question    | `true` iff Yes       |
//! | [`askyesno`]      | Yes, No           | question    | `true` iff Yes       |
//! | [`askretrycancel`]| Retry, Cancel     | warning     | `true` iff Retry     |
//! | [`askyesnocancel`]| Yes, No, Cancel   | warning     | `Some(bool)`/`None`  |
//!
//! There is no cancellation outcome distinct from the button choices:
//! closing the window counts as the dismissive answer of each function.

use log::debug;

use crate::error::DialogError;
use crate::host::{ButtonSet, Choice, DialogHost, MessageIcon, MessageSpec};
use crate::options::MessageOptions;
use crate::platform;

/// Show an informational message and wait for it to be acknowledged.
pub fn showinfo(options: MessageOptions) -> Result<(), DialogError> {
    showinfo_with(&platform::native(), options)
}

/// [`showinfo`] against an explicit host.
pub fn showinfo_with(host: &dyn DialogHost, options: MessageOptions) -> Result<(), DialogError> {
    show(host, "showinfo", MessageIcon::Information, options)
}

/// Show a warning message and wait for it to be acknowledged.
pub fn showwarning(options: MessageOptions) -> Result<(), DialogError> {
    showwarning_with(&platform::native(), options)
}

/// [`showwarning`] against an explicit host.
pub fn showwarning_with(host: &dyn DialogHost, options: MessageOptions) -> Result<(), DialogError> {
    show(host, "showwarning", MessageIcon::Warning, options)
}

/// Show an error message and wait for it to be acknowledged.
pub fn showerror(options: MessageOptions) -> Result<(), DialogError> {
    showerror_with(&platform::native(), options)
}

/// [`showerror`] against an explicit host.
pub fn showerror_with(host: &dyn DialogHost, options: MessageOptions) -> Result<(), DialogError> {
    show(host, "showerror", MessageIcon::Error, options)
}

/// Ask whether an operation should proceed. Returns `true` iff OK was
/// pressed.
pub fn askokcancel(options: MessageOptions) -> Result<bool, DialogError> {
    askokcancel_with(&platform::native(), options)
}

/// [`askokcancel`] against an explicit host.
pub fn askokcancel_with(host: &dyn DialogHost, options: MessageOptions) -> Result<bool, DialogError> {
    ask(
        host,
        "askokcancel",
        ButtonSet::OkCancel,
        MessageIcon::Question,
        Choice::Ok,
        options,
    )
}

/// Ask a yes/no question. Returns `true` iff Yes was pressed.
pub fn askquestion(options: MessageOptions) -> Result<bool, DialogError> {
    askquestion_with(&platform::native(), options)
}

/// [`askquestion`] against an explicit host.
pub fn askquestion_with(host: &dyn DialogHost, options: MessageOptions) -> Result<bool, DialogError> {
    ask(
        host,
        "askquestion",
        ButtonSet::YesNo,
        MessageIcon::Question,
        Choice::Yes,
        options,
    )
}

/// Alias of [`askquestion`].
pub fn askyesno(options: MessageOptions) -> Result<bool, DialogError> {
    askquestion(options)
}

/// [`askyesno`] against an explicit host.
pub fn askyesno_with(host: &dyn DialogHost, options: MessageOptions) -> Result<bool, DialogError> {
    askquestion_with(host, options)
}

/// Ask whether a failed operation should be retried. Returns `true` iff
/// Retry was pressed.
pub fn askretrycancel(options: MessageOptions) -> Result<bool, DialogError> {
    askretrycancel_with(&platform::native(), options)
}

/// [`askretrycancel`] against an explicit host.
pub fn askretrycancel_with(
    host: &dyn DialogHost,
    options: MessageOptions,
) -> Result<bool, DialogError> {
    ask(
        host,
        "askretrycancel",
        ButtonSet::RetryCancel,
        MessageIcon::Warning,
        Choice::Retry,
        options,
    )
}

/// Three-way question: `Some(true)` for Yes, `Some(false)` for No, `None`
/// when the dialog was cancelled.
pub fn askyesnocancel(options: MessageOptions) -> Result<Option<bool>, DialogError> {
    askyesnocancel_with(&platform::native(), options)
}

/// [`askyesnocancel`] against an explicit host.
pub fn askyesnocancel_with(
    host: &dyn DialogHost,
    options: MessageOptions,
) -> Result<Option<bool>, DialogError> {
    let spec = message_spec(options, ButtonSet::YesNoCancel, MessageIcon::Warning);
    debug!("askyesnocancel: {spec:?}");
    Ok(match host.message(&spec)? {
        Choice::Yes => Some(true),
        Choice::No => Some(false),
        _ => None,
    })
}

fn show(
    host: &dyn DialogHost,
    what: &str,
    icon: MessageIcon,
    options: MessageOptions,
) -> Result<(), DialogError> {
    let spec = message_spec(options, ButtonSet::Ok, icon);
    debug!("{what}: {spec:?}");
    host.message(&spec).map(|_| ())
}

fn ask(
    host: &dyn DialogHost,
    what: &str,
    buttons: ButtonSet,
    icon: MessageIcon,
    affirmative: Choice,
    options: MessageOptions,
) -> Result<bool, DialogError> {
    let spec = message_spec(options, buttons, icon);
    debug!("{what}: {spec:?}");
    Ok(host.message(&spec)? == affirmative)
}

fn message_spec(options: MessageOptions, buttons: ButtonSet, icon: MessageIcon) -> MessageSpec {
    MessageSpec {
        title: options.title,
        message: options.message,
        detail: options.detail,
        buttons,
        icon,
        parent: options.parent,
    }
}
