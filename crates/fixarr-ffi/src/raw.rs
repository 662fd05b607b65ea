//! Byte-level containers: `fixarr_plain_*` and `fixarr_strict_*`.
//!
//! Elements are opaque runs of `type_size` bytes. Reads copy the element
//! into a caller buffer; no pointer into container storage ever crosses
//! the boundary.

use std::sync::Mutex;

use fixarr_array::{RawPlainArray, RawStrictArray};

use crate::handle::{
    clone_into, destroy_in, register, status_of, with_mut, with_ref, write_out, HandleTable,
};
use crate::status::FixarrStatus;

static PLAIN: Mutex<HandleTable<RawPlainArray>> = Mutex::new(HandleTable::new());
static STRICT: Mutex<HandleTable<RawStrictArray>> = Mutex::new(HandleTable::new());

/// View `count` packed elements of `type_size` bytes, or `None` for a null
/// pointer.
///
/// A `count` above `capacity` yields an empty view without reading `data`,
/// so the constructor's capacity check reports `InvalidSize`. A byte length
/// that overflows or exceeds `isize::MAX` also yields an empty view; the
/// container then fails its own size computation.
#[allow(unsafe_code)]
fn initial<'a>(
    data: *const u8,
    count: usize,
    capacity: usize,
    type_size: usize,
) -> Option<&'a [u8]> {
    if data.is_null() {
        return None;
    }
    if count > capacity {
        return Some(&[]);
    }
    let len = match count.checked_mul(type_size) {
        Some(len) if len <= isize::MAX as usize => len,
        _ => return Some(&[]),
    };
    // SAFETY: data points to count * type_size readable bytes per caller
    // contract, and that length fits in isize.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

/// Copy `element` into `out[..out_len]`.
///
/// Returns 1 if the element exists and fits (or `out` is null), else 0.
#[allow(unsafe_code)]
fn copy_element(element: Option<&[u8]>, out: *mut u8, out_len: usize) -> u8 {
    let Some(bytes) = element else {
        return 0;
    };
    if out.is_null() {
        return 1;
    }
    if out_len < bytes.len() {
        return 0;
    }
    // SAFETY: out points to out_len >= bytes.len() writable bytes per
    // caller contract, and cannot alias container storage.
    unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), out, bytes.len()) };
    1
}

// ── plain ───────────────────────────────────────────────────────

/// Create a byte-level plain array of `capacity` elements of `type_size`
/// bytes.
///
/// The first `count` elements are copied from `data`; a null `data` leaves
/// every slot zeroed and ignores `count`. Writes the handle (or 0 on
/// failure) to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_plain_new(
    data: *const u8,
    count: usize,
    capacity: usize,
    type_size: usize,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        let view = initial(data, count, capacity, type_size);
        let result = RawPlainArray::new(view, count, capacity, type_size);
        register(&PLAIN, result, out)
    })
}

/// Deep-copy every slot of `source` into a new handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_plain_clone(source: u64, out: *mut u64) -> i32 {
    ffi_guard!({ clone_into(&PLAIN, source, out) })
}

/// Destroy `*handle` and set it to 0. Safe on null or stale handles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_plain_destroy(handle: *mut u64) {
    ffi_guard_or!((), { destroy_in(&PLAIN, handle) })
}

/// Copy slot `index` into `out`, which holds `out_len` bytes.
///
/// Returns 1 on success. Returns 0 for an out-of-range index, an invalid
/// handle, or `out_len` smaller than the element size. A null `out` only
/// tests presence.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_plain_get(
    handle: u64,
    index: usize,
    out: *mut u8,
    out_len: usize,
) -> u8 {
    ffi_guard_or!(0, {
        let read = |a: &RawPlainArray| copy_element(a.get(index), out, out_len);
        with_ref(&PLAIN, handle, read).unwrap_or(0)
    })
}

/// Write the capacity to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_plain_capacity(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&PLAIN, handle, |a| a.capacity())) })
}

/// Write the element size in bytes to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_plain_type_size(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&PLAIN, handle, |a| a.type_size())) })
}

// ── strict ──────────────────────────────────────────────────────

/// Create a byte-level strict array holding the first `count` packed
/// elements of `data`.
///
/// A null `data` creates an empty array and ignores `count`. Writes the
/// handle (or 0 on failure) to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_new(
    data: *const u8,
    count: usize,
    capacity: usize,
    type_size: usize,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        let view = initial(data, count, capacity, type_size);
        let result = RawStrictArray::new(view, count, capacity, type_size);
        register(&STRICT, result, out)
    })
}

/// Deep-copy the live elements of `source` into a new handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_clone(source: u64, out: *mut u64) -> i32 {
    ffi_guard!({ clone_into(&STRICT, source, out) })
}

/// Destroy `*handle` and set it to 0. Safe on null or stale handles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_destroy(handle: *mut u64) {
    ffi_guard_or!((), { destroy_in(&STRICT, handle) })
}

/// Copy live element `index` into `out`, which holds `out_len` bytes.
///
/// Same return convention as [`fixarr_plain_get`], bounded by size.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_get(
    handle: u64,
    index: usize,
    out: *mut u8,
    out_len: usize,
) -> u8 {
    ffi_guard_or!(0, {
        let read = |a: &RawStrictArray| copy_element(a.get(index), out, out_len);
        with_ref(&STRICT, handle, read).unwrap_or(0)
    })
}

/// Append the `value_len` bytes at `value` as one element.
///
/// Returns `InvalidSize` unless `value_len` equals the element size, and
/// `CapacityExhausted` when full. A null `value` is `NullReference`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_append(handle: u64, value: *const u8, value_len: usize) -> i32 {
    ffi_guard!({
        if value.is_null() {
            return FixarrStatus::NullReference as i32;
        }
        // SAFETY: value points to value_len readable bytes per caller
        // contract.
        let bytes = unsafe { std::slice::from_raw_parts(value, value_len) };
        match with_mut(&STRICT, handle, |a| a.append(bytes)) {
            Ok(status) => FixarrStatus::from(status) as i32,
            Err(s) => s as i32,
        }
    })
}

/// Drop the last live element. No effect on an empty array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_remove_last(handle: u64) -> i32 {
    ffi_guard!({ status_of(with_mut(&STRICT, handle, |a| a.remove_last())) })
}

/// Drop every live element. Capacity is unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_clear(handle: u64) -> i32 {
    ffi_guard!({ status_of(with_mut(&STRICT, handle, |a| a.clear())) })
}

/// Write the number of live elements to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_size(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&STRICT, handle, |a| a.len())) })
}

/// Write the capacity to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_capacity(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&STRICT, handle, |a| a.capacity())) })
}

/// Write the element size in bytes to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_strict_type_size(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&STRICT, handle, |a| a.type_size())) })
}
