//! Host selection per target OS.
//!
//! Windows gets the real backend; every other target gets a stub host so
//! the portable layer still compiles and its tests still run.

#[cfg(not(target_os = "windows"))]
pub mod unsupported;
#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedHost as NativeHost;
#[cfg(target_os = "windows")]
pub use self::windows::Win32Host as NativeHost;

/// The host used by the unsuffixed public functions.
pub fn native() -> NativeHost {
    NativeHost::default()
}
