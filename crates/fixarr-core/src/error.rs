//! Error type for fallible container construction.
//!
//! Every constructor and clone returns [`ArrayError`] on failure. Each
//! variant maps onto a [`Status`] code and a static diagnostic message,
//! so callers that only want a code-plus-message pair can
//! get it without matching on variants.

use std::error::Error;
use std::fmt;

use crate::status::Status;

const SIZE_MSG: &str = "SizeError: size is negative or capacity is less than size\n";
const TYPE_SIZE_MSG: &str = "SizeError: Type cannot have less than 1 byte\n";
const HEAP_MSG: &str = "AllocationError: Not enough memory in the heap";
const NULL_MSG: &str = "ValueError: cannot access a null pointer\n";

/// Errors that can occur while constructing or cloning a container.
///
/// A failed construction never leaves a partially built container
/// behind: either a complete container is returned or one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The source handle of a clone was absent.
    NullReference,
    /// Requested capacity is smaller than the initial element count.
    CapacityBelowCount {
        /// Number of initial elements requested.
        count: usize,
        /// Capacity requested.
        capacity: usize,
    },
    /// The initial count exceeds the number of elements actually supplied.
    CountExceedsElements {
        /// Number of initial elements requested.
        count: usize,
        /// Number of elements in the supplied slice.
        supplied: usize,
    },
    /// Element size below one byte.
    ElementSizeTooSmall {
        /// The rejected element size in bytes.
        type_size: usize,
    },
    /// The allocator refused the request, or its byte size overflowed.
    AllocationFailed {
        /// Bytes requested, or `None` if computing the size overflowed.
        requested_bytes: Option<usize>,
    },
}

impl ArrayError {
    /// The status code for this error.
    pub fn status(&self) -> Status {
        Status::from(self)
    }

    /// Static diagnostic message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NullReference => NULL_MSG,
            Self::CapacityBelowCount { .. } | Self::CountExceedsElements { .. } => SIZE_MSG,
            Self::ElementSizeTooSmall { .. } => TYPE_SIZE_MSG,
            Self::AllocationFailed { .. } => HEAP_MSG,
        }
    }
}

impl From<&ArrayError> for Status {
    fn from(e: &ArrayError) -> Self {
        match e {
            ArrayError::NullReference => Status::NullReference,
            ArrayError::CapacityBelowCount { .. }
            | ArrayError::CountExceedsElements { .. }
            | ArrayError::ElementSizeTooSmall { .. } => Status::InvalidSize,
            ArrayError::AllocationFailed { .. } => Status::HeapFailure,
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullReference => write!(f, "cannot clone from an absent handle"),
            Self::CapacityBelowCount { count, capacity } => {
                write!(
                    f,
                    "capacity {capacity} is less than initial count {count}"
                )
            }
            Self::CountExceedsElements { count, supplied } => {
                write!(
                    f,
                    "initial count {count} exceeds the {supplied} elements supplied"
                )
            }
            Self::ElementSizeTooSmall { type_size } => {
                write!(f, "element size {type_size} is less than 1 byte")
            }
            Self::AllocationFailed {
                requested_bytes: Some(bytes),
            } => write!(f, "allocation of {bytes} bytes failed"),
            Self::AllocationFailed {
                requested_bytes: None,
            } => write!(f, "allocation size overflowed usize"),
        }
    }
}

impl Error for ArrayError {}
