//! Slot+generation handle table for C-side container ownership.
//!
//! Handles are opaque `u64` values. `0` is the null handle and never
//! refers to a container. Destroyed handles keep a stale generation and
//! resolve to nothing, so use-after-destroy and double-destroy from C are
//! safe no-ops instead of UB.
//!
//! The `pub(crate)` helpers at the bottom implement the shared shape of
//! every family's entry points: lock, resolve, act, write the out-pointer.

use std::sync::{Mutex, PoisonError};

use fixarr_array::handle::{clone_of, FixedArray};
use fixarr_core::{ArrayResult, Status};

use crate::status::FixarrStatus;

/// The null handle.
pub const NULL_HANDLE: u64 = 0;

/// Handle encoding: upper 32 bits = slot index, lower 32 bits = generation.
///
/// Generations start at 1, so a live handle is never `NULL_HANDLE`.
fn encode(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | (generation as u64)
}

fn decode(handle: u64) -> (u32, u32) {
    let slot = (handle >> 32) as u32;
    let generation = handle as u32;
    (slot, generation)
}

/// How a handle failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// The handle was `NULL_HANDLE`.
    Null,
    /// The handle was destroyed or never issued.
    Stale,
}

impl From<Lookup> for FixarrStatus {
    fn from(l: Lookup) -> Self {
        match l {
            Lookup::Null => FixarrStatus::NullReference,
            Lookup::Stale => FixarrStatus::InvalidInstance,
        }
    }
}

struct Slot<T> {
    generation: u32,
    data: Option<T>,
}

/// A slot+generation table mapping `u64` handles to owned containers.
///
/// Reuses slots via a free list. Generation counters increment on removal,
/// making stale handles detectable.
pub(crate) struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
}

impl<T> HandleTable<T> {
    /// Create an empty handle table.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Take ownership of `value` and return its handle.
    pub fn insert(&mut self, value: T) -> u64 {
        if let Some(slot_idx) = self.free_list.pop() {
            let slot = &mut self.slots[slot_idx as usize];
            slot.data = Some(value);
            encode(slot_idx, slot.generation)
        } else {
            let slot_idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                data: Some(value),
            });
            encode(slot_idx, 1)
        }
    }

    /// Shared access to the container behind `handle`.
    pub fn get(&self, handle: u64) -> Result<&T, Lookup> {
        if handle == NULL_HANDLE {
            return Err(Lookup::Null);
        }
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get(slot_idx as usize).ok_or(Lookup::Stale)?;
        if slot.generation != generation {
            return Err(Lookup::Stale);
        }
        slot.data.as_ref().ok_or(Lookup::Stale)
    }

    /// Exclusive access to the container behind `handle`.
    pub fn get_mut(&mut self, handle: u64) -> Result<&mut T, Lookup> {
        if handle == NULL_HANDLE {
            return Err(Lookup::Null);
        }
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize).ok_or(Lookup::Stale)?;
        if slot.generation != generation {
            return Err(Lookup::Stale);
        }
        slot.data.as_mut().ok_or(Lookup::Stale)
    }

    /// Remove and return the container behind `handle`.
    ///
    /// Increments the slot's generation. A slot whose generation wraps
    /// back to 0 is retired rather than recycled, so it can never mint a
    /// handle that collides with `NULL_HANDLE` or an old stale handle.
    /// Returns `None` for null or stale handles.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        if handle == NULL_HANDLE {
            return None;
        }
        let (slot_idx, generation) = decode(handle);
        let slot = self.slots.get_mut(slot_idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != 0 {
            self.free_list.push(slot_idx);
        }
        Some(value)
    }

    /// Number of live containers.
    #[cfg(test)]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.data.is_some()).count()
    }
}

/// Publish a construction result into `table`.
///
/// On success writes the new handle to `out`; on failure writes
/// `NULL_HANDLE` and records the diagnostic for
/// [`fixarr_last_error_message`](crate::fixarr_last_error_message).
#[allow(unsafe_code)]
pub(crate) fn publish<C>(
    table: &mut HandleTable<C>,
    result: ArrayResult<C>,
    out: *mut u64,
) -> i32 {
    if out.is_null() {
        return FixarrStatus::InvalidArgument as i32;
    }
    match result {
        Ok(container) => {
            crate::record_error(None);
            let handle = table.insert(container);
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = handle };
            FixarrStatus::Ok as i32
        }
        Err(e) => {
            crate::record_error(Some(e.message()));
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = NULL_HANDLE };
            FixarrStatus::from(&e) as i32
        }
    }
}

/// Lock `table` and publish `result` into it.
pub(crate) fn register<C>(
    table: &Mutex<HandleTable<C>>,
    result: ArrayResult<C>,
    out: *mut u64,
) -> i32 {
    if out.is_null() {
        return FixarrStatus::InvalidArgument as i32;
    }
    let mut guard = ffi_lock!(table);
    publish(&mut guard, result, out)
}

/// Deep-copy the container behind `source` into a new handle.
///
/// A null source fails like any other construction. A stale source
/// returns `InvalidInstance`, writes `NULL_HANDLE` and records the
/// diagnostic.
#[allow(unsafe_code)]
pub(crate) fn clone_into<C: FixedArray>(
    table: &Mutex<HandleTable<C>>,
    source: u64,
    out: *mut u64,
) -> i32 {
    if out.is_null() {
        return FixarrStatus::InvalidArgument as i32;
    }
    let mut guard = ffi_lock!(table);
    let result = match guard.get(source) {
        Ok(container) => clone_of(Some(container)),
        Err(Lookup::Null) => clone_of(None),
        Err(Lookup::Stale) => {
            crate::record_error(Some(Status::InvalidInstance.message()));
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = NULL_HANDLE };
            return FixarrStatus::InvalidInstance as i32;
        }
    };
    publish(&mut guard, result, out)
}

/// Destroy the container behind `*handle` and reset `*handle` to null.
///
/// Null pointers, null handles and stale handles are no-ops apart from
/// the reset. A poisoned table is still consulted: removal only unlinks a
/// slot, so the container is released rather than leaked.
#[allow(unsafe_code)]
pub(crate) fn destroy_in<C>(table: &Mutex<HandleTable<C>>, handle: *mut u64) {
    if handle.is_null() {
        return;
    }
    // SAFETY: handle is non-null and valid per caller contract.
    let h = unsafe { *handle };
    let mut guard = table.lock().unwrap_or_else(PoisonError::into_inner);
    let removed = guard.remove(h);
    drop(guard);
    // Drop outside the lock.
    drop(removed);
    // SAFETY: as above.
    unsafe { *handle = NULL_HANDLE };
}

/// Run `f` on the container behind `handle`.
pub(crate) fn with_ref<C, R>(
    table: &Mutex<HandleTable<C>>,
    handle: u64,
    f: impl FnOnce(&C) -> R,
) -> Result<R, FixarrStatus> {
    let guard = table.lock().map_err(|_| FixarrStatus::InternalError)?;
    let container = guard.get(handle).map_err(FixarrStatus::from)?;
    Ok(f(container))
}

/// Run `f` on the container behind `handle` with exclusive access.
pub(crate) fn with_mut<C, R>(
    table: &Mutex<HandleTable<C>>,
    handle: u64,
    f: impl FnOnce(&mut C) -> R,
) -> Result<R, FixarrStatus> {
    let mut guard = table.lock().map_err(|_| FixarrStatus::InternalError)?;
    let container = guard.get_mut(handle).map_err(FixarrStatus::from)?;
    Ok(f(container))
}

/// Write a query result to `out`, returning the status code.
#[allow(unsafe_code)]
pub(crate) fn write_out<T>(out: *mut T, result: Result<T, FixarrStatus>) -> i32 {
    if out.is_null() {
        return FixarrStatus::InvalidArgument as i32;
    }
    match result {
        Ok(value) => {
            // SAFETY: out is non-null and valid per caller contract.
            unsafe { *out = value };
            FixarrStatus::Ok as i32
        }
        Err(s) => s as i32,
    }
}

/// Collapse a unit result into a status code.
pub(crate) fn status_of(result: Result<(), FixarrStatus>) -> i32 {
    match result {
        Ok(()) => FixarrStatus::Ok as i32,
        Err(s) => s as i32,
    }
}
