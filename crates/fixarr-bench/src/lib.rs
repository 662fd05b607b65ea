//! Benchmark profiles for the fixarr containers.
//!
//! - [`CAPACITIES`]: the container sizes every benchmark group sweeps
//! - [`RAW_PROFILES`]: element sizes for the type-erased containers
//! - [`packed_elements`]: deterministic packed input for a raw container

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixarr_core::ElementLayout;

/// Capacities swept by every benchmark group.
pub const CAPACITIES: [usize; 3] = [16, 1_024, 65_536];

/// Element sizes in bytes for the type-erased benchmarks.
///
/// 4 matches `i32`, 16 a small struct, 64 a cache line.
pub const RAW_PROFILES: [usize; 3] = [4, 16, 64];

/// `count` elements of `type_size` bytes, element `i` filled with `i as u8`.
///
/// Returns `None` if the layout is invalid or the byte length overflows.
pub fn packed_elements(count: usize, type_size: usize) -> Option<Vec<u8>> {
    let layout = ElementLayout::new(type_size, count).ok()?;
    let mut bytes = Vec::with_capacity(layout.payload_bytes().ok()?);
    for i in 0..count {
        bytes.extend(std::iter::repeat_n(i as u8, type_size));
    }
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_elements_layout() {
        let bytes = packed_elements(3, 2).unwrap();
        assert_eq!(bytes, vec![0, 0, 1, 1, 2, 2]);
        assert!(packed_elements(3, 0).is_none());
        assert_eq!(packed_elements(0, 8).unwrap().len(), 0);
    }
}
