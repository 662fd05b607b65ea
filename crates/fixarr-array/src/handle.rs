//! Operations on optional container handles.
//!
//! A handle is an `Option<C>` owned by the caller (or an `Option<&C>` /
//! `Option<&mut C>` borrowed from one). `None` is the absent handle: a
//! container that was never constructed or has already been destroyed.
//! The functions here give every container the same absent-handle
//! behaviour:
//!
//! | Operation       | Absent handle                  |
//! |-----------------|--------------------------------|
//! | [`clone_of`]    | `Err(ArrayError::NullReference)` |
//! | [`destroy`]     | no-op                          |
//! | [`get`]         | `None`                         |
//! | [`append`]      | `Status::NullReference`        |
//! | [`remove_last`] | no-op                          |
//! | [`clear`]       | no-op                          |

use fixarr_core::{ArrayError, ArrayResult, Status};

/// Behaviour shared by every fixed-capacity container.
pub trait FixedArray: Sized {
    /// The element reference type returned by [`get`](Self::get).
    type Item: ?Sized;

    /// Maximum number of elements. Immutable after construction.
    fn capacity(&self) -> usize;

    /// Element at `index`, or `None` outside the readable range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Allocate an independent copy of this container.
    fn try_clone(&self) -> ArrayResult<Self>;
}

/// Size-tracking operations of the strict containers.
///
/// `V` is the value accepted by [`append`](Self::append): the element
/// itself for typed containers, a byte slice for type-erased ones.
pub trait StrictOps<V>: FixedArray {
    /// Number of logically valid elements.
    fn len(&self) -> usize;

    /// Whether the container holds no valid elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write `value` at the end and grow the logical size by one.
    fn append(&mut self, value: V) -> Status;

    /// Drop the last valid element, if any.
    fn remove_last(&mut self);

    /// Reset the logical size to zero, keeping the storage.
    fn clear(&mut self);
}

/// Clone the container behind `source`.
pub fn clone_of<C: FixedArray>(source: Option<&C>) -> ArrayResult<C> {
    match source {
        Some(c) => c.try_clone(),
        None => Err(ArrayError::NullReference),
    }
}

/// Release the container behind `handle` and leave the handle absent.
pub fn destroy<C>(handle: &mut Option<C>) {
    drop(handle.take());
}

/// Element at `index` of the container behind `handle`.
///
/// An absent handle and an out-of-range index are indistinguishable.
pub fn get<C: FixedArray>(handle: Option<&C>, index: usize) -> Option<&C::Item> {
    handle?.get(index)
}

/// Append `value` to the container behind `handle`.
pub fn append<C: StrictOps<V>, V>(handle: Option<&mut C>, value: V) -> Status {
    match handle {
        Some(c) => c.append(value),
        None => Status::NullReference,
    }
}

/// Remove the last element of the container behind `handle`.
pub fn remove_last<C: StrictOps<V>, V>(handle: Option<&mut C>) {
    if let Some(c) = handle {
        c.remove_last();
    }
}

/// Clear the container behind `handle`.
pub fn clear<C: StrictOps<V>, V>(handle: Option<&mut C>) {
    if let Some(c) = handle {
        c.clear();
    }
}
