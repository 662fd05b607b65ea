//! Type-erased plain arrays with a runtime element size.

use std::fmt;
use std::ops::Range;

use fixarr_core::{ArrayError, ArrayResult, ElementLayout};

use crate::alloc;
use crate::handle::FixedArray;

/// A byte buffer of `capacity` elements, each `type_size` bytes wide.
///
/// The byte-level counterpart of [`PlainArray`](crate::PlainArray) for
/// element types only known at runtime. Element `i` occupies bytes
/// `i * type_size .. (i + 1) * type_size` of the payload.
pub struct RawPlainArray {
    layout: ElementLayout,
    data: Box<[u8]>,
}

impl RawPlainArray {
    /// Construct a plain array of `capacity` elements of `type_size` bytes.
    ///
    /// `initial` holds packed elements; the first `initial_count` of them
    /// (`initial_count * type_size` bytes) are copied. If `initial` is
    /// `None` the count is treated as zero. Remaining slots are zeroed.
    ///
    /// # Errors
    ///
    /// Checked in this order: capacity below count, element size below one
    /// byte, too few bytes supplied, allocation failure.
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
        Ok(Self { layout, data })
    }

    /// Construct an array with no initial data.
    pub fn with_capacity(capacity: usize, type_size: usize) -> ArrayResult<Self> {
        Self::new(None, 0, capacity, type_size)
    }

    /// Allocate a full-capacity copy of this array.
    pub fn try_clone(&self) -> ArrayResult<Self> {
        Self::new(
            Some(&self.data[..]),
            self.layout.capacity(),
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

    /// Bytes of the element at `index`, or `None` if `index >= capacity`.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let range = element_range(&self.layout, index, self.layout.capacity())?;
        Some(&self.data[range])
    }

    /// Mutable bytes of the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let range = element_range(&self.layout, index, self.layout.capacity())?;
        Some(&mut self.data[range])
    }

    /// Memory usage of the payload in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }
}

/// The leading `count` packed elements of `initial`.
pub(crate) fn initial_bytes<'a>(
    layout: &ElementLayout,
    initial: Option<&'a [u8]>,
    count: usize,
) -> Result<&'a [u8], ArrayError> {
    let Some(values) = initial else {
        return Ok(&[]);
    };
    let len = layout.bytes_for(count)?;
    values.get(..len).ok_or(ArrayError::CountExceedsElements {
        count,
        supplied: values.len() / layout.type_size(),
    })
}

/// Byte range of element `index`, if it lies below `limit`.
pub(crate) fn element_range(
    layout: &ElementLayout,
    index: usize,
    limit: usize,
) -> Option<Range<usize>> {
    if index >= limit {
        return None;
    }
    let start = layout.offset_of(index);
    Some(start..start + layout.type_size())
}

impl FixedArray for RawPlainArray {
    type Item = [u8];

    fn capacity(&self) -> usize {
        RawPlainArray::capacity(self)
    }

    fn get(&self, index: usize) -> Option<&[u8]> {
        RawPlainArray::get(self, index)
    }

    fn try_clone(&self) -> ArrayResult<Self> {
        RawPlainArray::try_clone(self)
    }
}

impl fmt::Debug for RawPlainArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawPlainArray")
            .field("capacity", &self.layout.capacity())
            .field("type_size", &self.layout.type_size())
            .finish_non_exhaustive()
    }
}
