//! C FFI bindings for the fixarr containers.
//!
//! Each container family lives in a global handle table and is addressed
//! from C by an opaque `u64` handle. Every entry point catches panics and
//! reports failures as [`FixarrStatus`](status::FixarrStatus) codes.
//!
//! | Family | Prefix | Element |
//! |--------|--------|---------|
//! | int plain | `fixarr_int_plain_` | `int32_t` |
//! | int strict | `fixarr_int_strict_` | `int32_t` |
//! | plain | `fixarr_plain_` | `type_size` bytes |
//! | strict | `fixarr_strict_` | `type_size` bytes |
//!
//! This is the only crate in the workspace that contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::cell::{Cell, RefCell};
use std::ffi::c_char;

thread_local! {
    /// Message of the last panic caught by `ffi_guard!` on this thread.
    static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };

    /// Diagnostic of the last failed constructor or clone on this thread.
    static LAST_ERROR: Cell<Option<&'static str>> = const { Cell::new(None) };
}

fn record_panic(payload: &(dyn std::any::Any + Send)) {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = msg);
}

pub(crate) fn record_error(message: Option<&'static str>) {
    LAST_ERROR.with(|cell| cell.set(message));
}

/// Run an FFI body, converting a panic into `fallback`.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $fallback
            }
        }
    };
}

/// Run an FFI body returning a status code; a panic becomes `Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::FixarrStatus::Panicked as i32, $body)
    };
}

/// Lock a table mutex inside a guarded body, returning early on poison.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        ffi_lock!($mutex, $crate::status::FixarrStatus::InternalError as i32)
    };
    ($mutex:expr, $poisoned:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $poisoned,
        }
    };
}

pub mod handle;
pub mod int;
pub mod raw;
pub mod status;

/// Copy `msg` into a caller buffer as a NUL-terminated string.
///
/// Returns the full message length in bytes. A null `buf` or zero `cap`
/// only queries the length. Longer messages are truncated to `cap - 1`.
#[allow(unsafe_code)]
fn copy_message(msg: &str, buf: *mut c_char, cap: usize) -> i32 {
    let bytes = msg.as_bytes();
    if !buf.is_null() && cap > 0 {
        let n = bytes.len().min(cap - 1);
        // SAFETY: buf points to at least cap writable bytes per caller
        // contract, and n + 1 <= cap.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), n);
            *buf.add(n) = 0;
        }
    }
    i32::try_from(bytes.len()).unwrap_or(i32::MAX)
}

/// Retrieve the message of the last panic caught on this thread.
///
/// Returns the message length, or 0 if no panic has been recorded.
/// Pass a null `buf` to query the length first.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| copy_message(&cell.borrow(), buf, cap))
}

/// Retrieve the diagnostic of the last failed constructor or clone on this
/// thread.
///
/// Returns the message length, or 0 if the last construction succeeded.
/// Pass a null `buf` to query the length first.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_last_error_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_ERROR.with(|cell| copy_message(cell.get().unwrap_or(""), buf, cap))
}
