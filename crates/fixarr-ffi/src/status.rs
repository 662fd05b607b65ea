//! C-compatible status codes.
//!
//! [`FixarrStatus`] carries the container status codes unchanged (`0..=6`)
//! and adds negative codes for conditions that only exist at the C
//! boundary: bad out-pointers, poisoned tables and caught panics.

use std::ffi::{c_char, CStr};

use fixarr_core::{ArrayError, Status};

/// C-compatible status code returned by FFI functions.
///
/// `Ok` = 0. Container errors are positive, boundary errors negative.
/// Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixarrStatus {
    /// Success.
    Ok = 0,
    /// Handle is null, or a required input pointer is null.
    NullReference = 1,
    /// Strict container is full.
    CapacityExhausted = 2,
    /// Count exceeds capacity, element size is zero, or a value has the
    /// wrong byte length.
    InvalidSize = 3,
    /// Storage allocation failed.
    HeapFailure = 4,
    /// Handle was destroyed or never issued.
    InvalidInstance = 5,
    /// Index outside the readable range.
    InvalidIndex = 6,
    /// An out-pointer is null.
    InvalidArgument = -1,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl FixarrStatus {
    /// Static NUL-terminated description of this status.
    ///
    /// Container codes carry the same text as
    /// [`Status::message`](fixarr_core::Status::message).
    pub fn message(self) -> &'static CStr {
        match self {
            FixarrStatus::Ok => c"Ok",
            FixarrStatus::NullReference => c"ValueError: cannot access a null pointer\n",
            FixarrStatus::CapacityExhausted => c"CapacityError: no space left in the container\n",
            FixarrStatus::InvalidSize => {
                c"SizeError: size is negative or capacity is less than size\n"
            }
            FixarrStatus::HeapFailure => c"AllocationError: Not enough memory in the heap",
            FixarrStatus::InvalidInstance => {
                c"InstanceError: handle does not refer to a live container\n"
            }
            FixarrStatus::InvalidIndex => c"IndexError: index is out of range\n",
            FixarrStatus::InvalidArgument => c"ArgumentError: output pointer is null\n",
            FixarrStatus::InternalError => c"InternalError: container table is poisoned\n",
            FixarrStatus::Panicked => c"PanicError: panic caught at the FFI boundary\n",
        }
    }

    /// Decode a raw status code.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => FixarrStatus::Ok,
            1 => FixarrStatus::NullReference,
            2 => FixarrStatus::CapacityExhausted,
            3 => FixarrStatus::InvalidSize,
            4 => FixarrStatus::HeapFailure,
            5 => FixarrStatus::InvalidInstance,
            6 => FixarrStatus::InvalidIndex,
            -1 => FixarrStatus::InvalidArgument,
            -2 => FixarrStatus::InternalError,
            -128 => FixarrStatus::Panicked,
            _ => return None,
        })
    }
}

impl From<Status> for FixarrStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::Ok => FixarrStatus::Ok,
            Status::NullReference => FixarrStatus::NullReference,
            Status::CapacityExhausted => FixarrStatus::CapacityExhausted,
            Status::InvalidSize => FixarrStatus::InvalidSize,
            Status::HeapFailure => FixarrStatus::HeapFailure,
            Status::InvalidInstance => FixarrStatus::InvalidInstance,
            Status::InvalidIndex => FixarrStatus::InvalidIndex,
        }
    }
}

impl From<&ArrayError> for FixarrStatus {
    fn from(e: &ArrayError) -> Self {
        FixarrStatus::from(e.status())
    }
}

/// Static description for a status code.
///
/// Returns a pointer to a NUL-terminated string with static lifetime, or
/// null for an unknown code. The caller must not free it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_status_message(status: i32) -> *const c_char {
    ffi_guard_or!(std::ptr::null(), {
        match FixarrStatus::from_code(status) {
            Some(s) => s.message().as_ptr(),
            None => std::ptr::null(),
        }
    })
}
