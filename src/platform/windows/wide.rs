//! UTF-16 buffers for Win32 wide-string parameters.

use windows::core::PCWSTR;

/// NUL-terminated UTF-16 buffer. Must outlive every `PCWSTR` handed out.
pub struct WideString(Vec<u16>);

impl WideString {
    pub fn new(s: &str) -> Self {
        Self(s.encode_utf16().chain(std::iter::once(0)).collect())
    }

    pub fn pcwstr(&self) -> PCWSTR {
        PCWSTR(self.0.as_ptr())
    }
}

/// `PCWSTR` for an optional string: null when absent, which the dialog
/// APIs treat as "no value".
pub fn opt_pcwstr(s: &Option<WideString>) -> PCWSTR {
    s.as_ref().map(WideString::pcwstr).unwrap_or_else(PCWSTR::null)
}
