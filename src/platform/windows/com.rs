//! Scoped COM apartment initialization.

use windows::Win32::System::Com::{
    CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE,
};

use crate::error::DialogError;

/// Apartment-threaded COM init with a matching `CoUninitialize` on drop.
///
/// `CoInitializeEx` returning `S_FALSE` (apartment already entered on this
/// thread) still requires the matching uninit, so the guard is constructed
/// for every successful HRESULT.
pub struct ComApartment(());

impl ComApartment {
    pub fn enter() -> Result<Self, DialogError> {
        let hr =
            unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED | COINIT_DISABLE_OLE1DDE) };
        if hr.is_err() {
            return Err(DialogError::native(
                "CoInitializeEx",
                windows::core::Error::from_hresult(hr),
            ));
        }
        Ok(Self(()))
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}
