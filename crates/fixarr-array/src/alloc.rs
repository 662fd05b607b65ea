//! Fallible payload allocation shared by every container variant.
//!
//! Each container owns exactly one boxed payload sized from an
//! [`ElementLayout`]. Allocation goes through `Vec::try_reserve_exact` so
//! an allocator refusal surfaces as [`ArrayError::AllocationFailed`]
//! instead of aborting the process.

use fixarr_core::{ArrayError, ElementLayout};

/// Allocate `layout.capacity()` elements, each set to `fill`.
///
/// Slots past the caller's initial data keep `fill`; for the typed
/// containers this is `T::default()`, so reads of never-written slots
/// are well-defined.
pub(crate) fn filled<T: Copy>(layout: &ElementLayout, fill: T) -> Result<Box<[T]>, ArrayError> {
    let bytes = layout.payload_bytes()?;
    try_filled(layout.capacity(), fill, bytes)
}

/// Allocate the zeroed byte payload for a type-erased container.
pub(crate) fn zeroed_bytes(layout: &ElementLayout) -> Result<Box<[u8]>, ArrayError> {
    let bytes = layout.payload_bytes()?;
    try_filled(bytes, 0u8, bytes)
}

fn try_filled<T: Copy>(len: usize, fill: T, bytes: usize) -> Result<Box<[T]>, ArrayError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| ArrayError::AllocationFailed {
            requested_bytes: Some(bytes),
        })?;
    data.resize(len, fill);
    Ok(data.into_boxed_slice())
}

/// The number of initial elements a constructor will actually copy.
///
/// Absent initial data forces the count to zero regardless of what the
/// caller asked for.
pub(crate) fn initial_count(has_initial: bool, requested: usize) -> usize {
    if has_initial {
        return requested;
    }
    #[cfg(debug_assertions)]
    if requested > 0 {
        eprintln!(
            "fixarr: warning: initial count {requested} ignored, no initial elements supplied"
        );
    }
    0
}

/// Validate the initial count against the capacity.
pub(crate) fn check_capacity(count: usize, capacity: usize) -> Result<(), ArrayError> {
    if capacity < count {
        return Err(ArrayError::CapacityBelowCount { count, capacity });
    }
    Ok(())
}
