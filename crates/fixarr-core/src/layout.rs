//! Element layout descriptors.

use crate::error::ArrayError;

/// Size description of a container's payload.
///
/// Pairs an element size in bytes with an element capacity. Validated at
/// construction; all values are immutable after creation. Every container
/// constructor builds one of these to size its single payload allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementLayout {
    type_size: usize,
    capacity: usize,
}

impl ElementLayout {
    /// Element size of the int-specialized containers.
    pub const INT_SIZE: usize = std::mem::size_of::<i32>();

    /// Smallest accepted element size in bytes.
    pub const MIN_TYPE_SIZE: usize = 1;

    /// Create a layout for `capacity` elements of `type_size` bytes.
    ///
    /// Returns [`ArrayError::ElementSizeTooSmall`] if `type_size` is zero.
    pub fn new(type_size: usize, capacity: usize) -> Result<Self, ArrayError> {
        if type_size < Self::MIN_TYPE_SIZE {
            return Err(ArrayError::ElementSizeTooSmall { type_size });
        }
        Ok(Self {
            type_size,
            capacity,
        })
    }

    /// Layout for `capacity` elements of type `T`.
    ///
    /// Zero-sized types are rejected like any other element size below
    /// one byte.
    pub fn of<T>(capacity: usize) -> Result<Self, ArrayError> {
        Self::new(std::mem::size_of::<T>(), capacity)
    }

    /// Element size in bytes.
    pub fn type_size(&self) -> usize {
        self.type_size
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total payload size in bytes.
    ///
    /// Returns [`ArrayError::AllocationFailed`] if `capacity * type_size`
    /// overflows `usize`.
    pub fn payload_bytes(&self) -> Result<usize, ArrayError> {
        self.bytes_for(self.capacity)
    }

    /// Size in bytes of the first `count` elements.
    pub fn bytes_for(&self, count: usize) -> Result<usize, ArrayError> {
        count
            .checked_mul(self.type_size)
            .ok_or(ArrayError::AllocationFailed {
                requested_bytes: None,
            })
    }

    /// Byte offset of the element at `index`.
    ///
    /// Only meaningful for `index < capacity`, where it cannot overflow
    /// once [`payload_bytes`](Self::payload_bytes) has succeeded.
    pub fn offset_of(&self, index: usize) -> usize {
        index * self.type_size
    }
}
