//! Type-erased strict arrays with a runtime element size.

use std::fmt;

use fixarr_core::{ArrayResult, ElementLayout, Status};

use crate::alloc;
use crate::handle::{FixedArray, StrictOps};
use crate::raw_plain::{element_range, initial_bytes};

/// A byte buffer of `capacity` elements of `type_size` bytes, of which
/// the first `size` are logically present.
///
/// The byte-level counterpart of [`StrictArray`](crate::StrictArray).
/// Reads are bounds-checked against the logical size.
pub struct RawStrictArray {
    layout: ElementLayout,
    data: Box<[u8]>,
    size: usize,
}

impl RawStrictArray {
    /// Construct a strict array of `capacity` elements of `type_size` bytes.
    ///
    /// Validation matches [`RawPlainArray::new`](crate::RawPlainArray::new);
    /// the logical size starts at the effective initial count.
    pub fn new(
        initial: Option<&[u8]>,
        initial_count: usize,
        capacity: usize,
        type_size: usize,
    ) -> ArrayResult<Self> {
        let count = alloc::initial_count(initial.is_some(), initial_count);
        alloc::check_capacity(count, capacity)?;
        let layout = ElementLayout::new(type_size, capacity)?;
        let src = initial_bytes(&layout, initial, count)?;

        let mut data = alloc::zeroed_bytes(&layout)?;
        data[..src.len()].copy_from_slice(src);
        Ok(Self {
            layout,
            data,
            size: count,
        })
    }

    /// Construct an empty strict array.
    pub fn with_capacity(capacity: usize, type_size: usize) -> ArrayResult<Self> {
        Self::new(None, 0, capacity, type_size)
    }

    /// Allocate a copy with the same capacity, element size, and size.
    ///
    /// Only the live prefix (`size * type_size` bytes) is copied.
    pub fn try_clone(&self) -> ArrayResult<Self> {
        let live = self.layout.offset_of(self.size);
        Self::new(
            Some(&self.data[..live]),
            self.size,
            self.layout.capacity(),
            self.layout.type_size(),
        )
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.layout.capacity()
    }

    /// Element size in bytes.
    pub fn type_size(&self) -> usize {
        self.layout.type_size()
    }

    /// Number of logically valid elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether no elements are present.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether the next append would fail.
    pub fn is_full(&self) -> bool {
        self.size == self.layout.capacity()
    }

    /// Bytes of the element at `index`, or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let range = element_range(&self.layout, index, self.size)?;
        Some(&self.data[range])
    }

    /// Mutable bytes of the element at `index`, or `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let range = element_range(&self.layout, index, self.size)?;
        Some(&mut self.data[range])
    }

    /// Copy `value` into position `len()` and grow the size by one.
    ///
    /// Returns [`Status::InvalidSize`] if `value` is not exactly
    /// `type_size` bytes, or [`Status::CapacityExhausted`] if the array is
    /// full. Either way the array is left unchanged.
    pub fn append(&mut self, value: &[u8]) -> Status {
        if value.len() != self.layout.type_size() {
            return Status::InvalidSize;
        }
        if self.is_full() {
            return Status::CapacityExhausted;
        }
        let start = self.layout.offset_of(self.size);
        self.data[start..start + value.len()].copy_from_slice(value);
        self.size += 1;
        Status::Ok
    }

    /// Shrink the size by one. No-op on an empty array.
    pub fn remove_last(&mut self) {
        self.size = self.size.saturating_sub(1);
    }

    /// Reset the size to zero without releasing or zeroing storage.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Memory usage of the payload in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }
}

impl FixedArray for RawStrictArray {
    type Item = [u8];

    fn capacity(&self) -> usize {
        RawStrictArray::capacity(self)
    }

    fn get(&self, index: usize) -> Option<&[u8]> {
        RawStrictArray::get(self, index)
    }

    fn try_clone(&self) -> ArrayResult<Self> {
        RawStrictArray::try_clone(self)
    }
}

impl<'a> StrictOps<&'a [u8]> for RawStrictArray {
    fn len(&self) -> usize {
        self.size
    }

    fn append(&mut self, value: &'a [u8]) -> Status {
        RawStrictArray::append(self, value)
    }

    fn remove_last(&mut self) {
        RawStrictArray::remove_last(self);
    }

    fn clear(&mut self) {
        RawStrictArray::clear(self);
    }
}

impl fmt::Debug for RawStrictArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStrictArray")
            .field("size", &self.size)
            .field("capacity", &self.layout.capacity())
            .field("type_size", &self.layout.type_size())
            .finish_non_exhaustive()
    }
}
