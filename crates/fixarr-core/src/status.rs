//! Outcome codes shared by every container operation.

use std::fmt;

/// Outcome of a container operation.
///
/// `Ok` = 0, every failure kind is positive. Values are ABI-stable and
/// match the codes returned across the C boundary.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum Status {
    /// Success.
    Ok = 0,
    /// An absent handle or argument was dereferenced.
    NullReference = 1,
    /// Append attempted on a container whose size equals its capacity.
    CapacityExhausted = 2,
    /// Capacity below the initial count, or an element size below one byte.
    InvalidSize = 3,
    /// The allocator could not satisfy the request.
    HeapFailure = 4,
    /// A handle that does not refer to a live container.
    InvalidInstance = 5,
    /// An index outside the addressable range.
    InvalidIndex = 6,
}

impl Status {
    /// Every status, in code order.
    pub const ALL: [Status; 7] = [
        Status::Ok,
        Status::NullReference,
        Status::CapacityExhausted,
        Status::InvalidSize,
        Status::HeapFailure,
        Status::InvalidInstance,
        Status::InvalidIndex,
    ];

    /// Whether this status denotes success.
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Whether this status denotes a failure.
    pub fn is_err(self) -> bool {
        !self.is_ok()
    }

    /// The numeric code of this status.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a status by its numeric code.
    ///
    /// Returns `None` for codes outside the taxonomy.
    pub fn from_code(code: i32) -> Option<Status> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// Static diagnostic describing this status.
    ///
    /// Failures produced by constructors carry a more specific message
    /// through [`ArrayError::message`](crate::ArrayError::message); this
    /// is the fallback for codes returned by post-construction operations.
    pub fn message(self) -> &'static str {
        match self {
            Status::Ok => "Ok",
            Status::NullReference => "ValueError: cannot access a null pointer\n",
            Status::CapacityExhausted => "CapacityError: no space left in the container\n",
            Status::InvalidSize => "SizeError: size is negative or capacity is less than size\n",
            Status::HeapFailure => "AllocationError: Not enough memory in the heap",
            Status::InvalidInstance => "InstanceError: handle does not refer to a live container\n",
            Status::InvalidIndex => "IndexError: index is out of range\n",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::NullReference => "null reference",
            Status::CapacityExhausted => "capacity exhausted",
            Status::InvalidSize => "invalid size",
            Status::HeapFailure => "heap failure",
            Status::InvalidInstance => "invalid instance",
            Status::InvalidIndex => "invalid index",
        };
        f.write_str(name)
    }
}
