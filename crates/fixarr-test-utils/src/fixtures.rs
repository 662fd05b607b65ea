//! Reusable container test fixtures.
//!
//! - [`ascending`]: `0, 1, 2, ...` as `i32`.
//! - [`packed_u32`] / [`unpack_u32`]: little-endian packing for the
//!   type-erased containers.
//! - [`full_strict`] / [`full_raw_strict`]: strict arrays already at
//!   capacity.

use fixarr_array::{IntStrictArray, RawStrictArray};

/// `n` ascending integers starting at zero.
pub fn ascending(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// Pack `values` as consecutive little-endian 4-byte elements.
pub fn packed_u32(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Decode a 4-byte little-endian element.
///
/// Returns `None` if `bytes` is not exactly four bytes long.
pub fn unpack_u32(bytes: &[u8]) -> Option<u32> {
    let arr: [u8; 4] = bytes.try_into().ok()?;
    Some(u32::from_le_bytes(arr))
}

/// An int strict array of `capacity` ascending values, with no free slot.
pub fn full_strict(capacity: usize) -> IntStrictArray {
    IntStrictArray::from_slice(&ascending(capacity), capacity)
        .expect("fixture capacity must be allocatable")
}

/// A 4-byte raw strict array of `capacity` ascending values, with no free slot.
pub fn full_raw_strict(capacity: usize) -> RawStrictArray {
    let values: Vec<u32> = (0..capacity as u32).collect();
    RawStrictArray::new(Some(&packed_u32(&values)[..]), capacity, capacity, 4)
        .expect("fixture capacity must be allocatable")
}
