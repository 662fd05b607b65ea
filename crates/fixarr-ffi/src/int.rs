//! `int32_t` containers: `fixarr_int_plain_*` and `fixarr_int_strict_*`.

use std::sync::Mutex;

use fixarr_array::{IntPlainArray, IntStrictArray};

use crate::handle::{
    clone_into, destroy_in, register, status_of, with_mut, with_ref, write_out, HandleTable,
};
use crate::status::FixarrStatus;

static INT_PLAIN: Mutex<HandleTable<IntPlainArray>> = Mutex::new(HandleTable::new());
static INT_STRICT: Mutex<HandleTable<IntStrictArray>> = Mutex::new(HandleTable::new());

/// View the caller's initial elements, or `None` for a null pointer.
///
/// A `count` above `capacity`, or one no allocation could hold, yields an
/// empty view without reading `data`; the constructor then rejects the
/// count with `InvalidSize`.
#[allow(unsafe_code)]
fn initial<'a>(data: *const i32, count: usize, capacity: usize) -> Option<&'a [i32]> {
    if data.is_null() {
        return None;
    }
    if count > capacity || count > isize::MAX as usize / std::mem::size_of::<i32>() {
        return Some(&[]);
    }
    // SAFETY: data points to count valid i32 values per caller contract,
    // and count * 4 fits in isize.
    Some(unsafe { std::slice::from_raw_parts(data, count) })
}

/// Copy an element to `out` (if non-null). Returns 1 if present.
#[allow(unsafe_code)]
fn found(value: Option<i32>, out: *mut i32) -> u8 {
    match value {
        Some(v) => {
            if !out.is_null() {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = v };
            }
            1
        }
        None => 0,
    }
}

// ── plain ───────────────────────────────────────────────────────

/// Create an int plain array with `capacity` slots.
///
/// The first `count` slots are copied from `data`; a null `data` leaves
/// every slot zeroed and ignores `count`. Writes the handle (or 0 on
/// failure) to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_plain_new(
    data: *const i32,
    count: usize,
    capacity: usize,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        let result = IntPlainArray::new(initial(data, count, capacity), count, capacity);
        register(&INT_PLAIN, result, out)
    })
}

/// Deep-copy every slot of `source` into a new handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_plain_clone(source: u64, out: *mut u64) -> i32 {
    ffi_guard!({ clone_into(&INT_PLAIN, source, out) })
}

/// Destroy `*handle` and set it to 0. Safe on null or stale handles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_plain_destroy(handle: *mut u64) {
    ffi_guard_or!((), { destroy_in(&INT_PLAIN, handle) })
}

/// Read slot `index` into `out`.
///
/// Returns 1 if the slot exists, 0 for an out-of-range index or an
/// invalid handle. A null `out` only tests presence.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_plain_get(handle: u64, index: usize, out: *mut i32) -> u8 {
    ffi_guard_or!(0, {
        let value = with_ref(&INT_PLAIN, handle, |a| a.get(index).copied())
            .ok()
            .flatten();
        found(value, out)
    })
}

/// Write the capacity to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_plain_capacity(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&INT_PLAIN, handle, |a| a.capacity())) })
}

// ── strict ──────────────────────────────────────────────────────

/// Create an int strict array holding the first `count` values of `data`.
///
/// A null `data` creates an empty array and ignores `count`. Writes the
/// handle (or 0 on failure) to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_new(
    data: *const i32,
    count: usize,
    capacity: usize,
    out: *mut u64,
) -> i32 {
    ffi_guard!({
        let result = IntStrictArray::new(initial(data, count, capacity), count, capacity);
        register(&INT_STRICT, result, out)
    })
}

/// Deep-copy the live elements of `source` into a new handle.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_clone(source: u64, out: *mut u64) -> i32 {
    ffi_guard!({ clone_into(&INT_STRICT, source, out) })
}

/// Destroy `*handle` and set it to 0. Safe on null or stale handles.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_destroy(handle: *mut u64) {
    ffi_guard_or!((), { destroy_in(&INT_STRICT, handle) })
}

/// Read live element `index` into `out`.
///
/// Returns 1 if `index < size`, otherwise 0. A null `out` only tests
/// presence.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_get(handle: u64, index: usize, out: *mut i32) -> u8 {
    ffi_guard_or!(0, {
        let value = with_ref(&INT_STRICT, handle, |a| a.get(index).copied())
            .ok()
            .flatten();
        found(value, out)
    })
}

/// Append `value`. Returns `CapacityExhausted` when full.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_append(handle: u64, value: i32) -> i32 {
    ffi_guard!({
        match with_mut(&INT_STRICT, handle, |a| a.append(value)) {
            Ok(status) => FixarrStatus::from(status) as i32,
            Err(s) => s as i32,
        }
    })
}

/// Drop the last live element. No effect on an empty array.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_remove_last(handle: u64) -> i32 {
    ffi_guard!({ status_of(with_mut(&INT_STRICT, handle, |a| a.remove_last())) })
}

/// Drop every live element. Capacity is unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_clear(handle: u64) -> i32 {
    ffi_guard!({ status_of(with_mut(&INT_STRICT, handle, |a| a.clear())) })
}

/// Write the number of live elements to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_size(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&INT_STRICT, handle, |a| a.len())) })
}

/// Write the capacity to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_int_strict_capacity(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({ write_out(out, with_ref(&INT_STRICT, handle, |a| a.capacity())) })
}
