//! Capacity-bounded arrays with an explicit logical size.
//!
//! A [`StrictArray`] allocates its capacity once and tracks how many
//! elements are logically present. Elements can only be added or removed
//! at the end; reads are bounds-checked against the logical size, not the
//! capacity. The container never reallocates: an append on a full array
//! fails with [`Status::CapacityExhausted`].
//!
//! # State machine
//!
//! ```text
//! append:      size k -> k + 1   (blocked at k == capacity)
//! remove_last: size k -> max(k - 1, 0)
//! clear:       size k -> 0
//! ```

use std::fmt;

use fixarr_core::{ArrayError, ArrayResult, ElementLayout, Status};

use crate::alloc;
use crate::handle::{FixedArray, StrictOps};

/// A heap buffer of fixed capacity holding `size <= capacity` elements.
pub struct StrictArray<T> {
    /// Backing storage. Its length is the capacity.
    data: Box<[T]>,
    /// Number of logically valid elements at the front of `data`.
    size: usize,
}

/// Int-specialized strict array.
pub type IntStrictArray = StrictArray<i32>;

impl<T: Copy + Default> StrictArray<T> {
    /// Construct a strict array of `capacity` elements whose first
    /// `initial_count` are copied from `initial`.
    ///
    /// Validation is identical to [`PlainArray::new`](crate::PlainArray::new);
    /// on success the logical size equals the effective initial count.
    pub fn new(initial: Option<&[T]>, initial_count: usize, capacity: usize) -> ArrayResult<Self> {
        let count = alloc::initial_count(initial.is_some(), initial_count);
        alloc::check_capacity(count, capacity)?;
        let layout = ElementLayout::of::<T>(capacity)?;
        let src = match initial {
            Some(values) => values
                .get(..count)
                .ok_or(ArrayError::CountExceedsElements {
                    count,
                    supplied: values.len(),
                })?,
            None => &[],
        };

        let mut data = alloc::filled(&layout, T::default())?;
        data[..count].copy_from_slice(src);
        Ok(Self { data, size: count })
    }

    /// Construct a strict array holding a copy of `values`.
    pub fn from_slice(values: &[T], capacity: usize) -> ArrayResult<Self> {
        Self::new(Some(values), values.len(), capacity)
    }

    /// Construct an empty strict array.
    pub fn with_capacity(capacity: usize) -> ArrayResult<Self> {
        Self::new(None, 0, capacity)
    }

    /// Allocate a copy with the same capacity and size.
    ///
    /// Only the `size` live elements are copied; the tail of the clone is
    /// default-filled.
    pub fn try_clone(&self) -> ArrayResult<Self> {
        Self::new(Some(&self.data[..self.size]), self.size, self.data.len())
    }
}

impl<T> StrictArray<T> {
    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
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
        self.size == self.data.len()
    }

    /// Element at `index`, or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data[..self.size].get(index)
    }

    /// Mutable element at `index`, or `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data[..self.size].get_mut(index)
    }

    /// Write `value` at position `len()` and grow the size by one.
    ///
    /// Returns [`Status::CapacityExhausted`] without touching the array
    /// if it is full.
    pub fn append(&mut self, value: T) -> Status {
        if self.is_full() {
            return Status::CapacityExhausted;
        }
        self.data[self.size] = value;
        self.size += 1;
        Status::Ok
    }

    /// Shrink the size by one. No-op on an empty array.
    ///
    /// The removed slot keeps its value until the next append overwrites it.
    pub fn remove_last(&mut self) {
        self.size = self.size.saturating_sub(1);
    }

    /// Reset the size to zero without releasing or zeroing storage.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Memory usage of the payload in bytes.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.data)
    }
}

impl<T: Copy + Default> FixedArray for StrictArray<T> {
    type Item = T;

    fn capacity(&self) -> usize {
        StrictArray::capacity(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        StrictArray::get(self, index)
    }

    fn try_clone(&self) -> ArrayResult<Self> {
        StrictArray::try_clone(self)
    }
}

impl<T: Copy + Default> StrictOps<T> for StrictArray<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn append(&mut self, value: T) -> Status {
        StrictArray::append(self, value)
    }

    fn remove_last(&mut self) {
        StrictArray::remove_last(self);
    }

    fn clear(&mut self) {
        StrictArray::clear(self);
    }
}

impl<T> fmt::Debug for StrictArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrictArray")
            .field("size", &self.size)
            .field("capacity", &self.data.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_array_rejects_append() {
        let mut arr = IntStrictArray::new(Some(&[1, 2, 3][..]), 3, 3).unwrap();
        assert_eq!(arr.append(4), Status::CapacityExhausted);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(2), Some(&3));
        assert_eq!(arr.get(3), None);
    }

    #[test]
    fn get_is_bounded_by_size_not_capacity() {
        let arr = IntStrictArray::new(Some(&[7][..]), 1, 10).unwrap();
        assert_eq!(arr.get(0), Some(&7));
        assert_eq!(arr.get(1), None);
        assert_eq!(arr.get(9), None);
    }

    #[test]
    fn absent_initial_data_starts_empty() {
        let arr = IntStrictArray::new(None, 4, 8).unwrap();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.get(0), None);
    }

    #[test]
    fn append_until_full() {
        let mut arr = IntStrictArray::with_capacity(4).unwrap();
        for v in 0..4 {
            assert_eq!(arr.append(v * 10), Status::Ok);
        }
        assert!(arr.is_full());
        assert_eq!(arr.len(), 4);
        assert_eq!(arr.append(40), Status::CapacityExhausted);
        assert_eq!(arr.len(), 4);
        assert_eq!(arr.get(3), Some(&30));
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut arr = IntStrictArray::with_capacity(0).unwrap();
        assert!(arr.is_empty());
        assert!(arr.is_full());
        assert_eq!(arr.append(1), Status::CapacityExhausted);
    }

    #[test]
    fn remove_last_on_empty_is_noop() {
        let mut arr = IntStrictArray::with_capacity(2).unwrap();
        arr.remove_last();
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn removed_slot_is_overwritten_by_append() {
        let mut arr = IntStrictArray::from_slice(&[1, 2, 3], 3).unwrap();
        arr.remove_last();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(2), None);
        assert_eq!(arr.append(9), Status::Ok);
        assert_eq!(arr.get(2), Some(&9));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut arr = IntStrictArray::from_slice(&[1, 2, 3], 5).unwrap();
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 5);
        assert_eq!(arr.get(0), None);
        for v in 0..5 {
            assert_eq!(arr.append(v), Status::Ok);
        }
    }

    #[test]
    fn get_mut_writes_in_place() {
        let mut arr = IntStrictArray::from_slice(&[1, 2], 4).unwrap();
        *arr.get_mut(1).unwrap() = 20;
        assert_eq!(arr.get(1), Some(&20));
        assert!(arr.get_mut(2).is_none());
    }

    #[test]
    fn clone_preserves_size_and_capacity() {
        let mut arr = IntStrictArray::from_slice(&[5, 6, 7], 6).unwrap();
        arr.remove_last();

        let copy = arr.try_clone().unwrap();
        assert_eq!(copy.len(), 2);
        assert_eq!(copy.capacity(), 6);
        assert_eq!(copy.get(0), Some(&5));
        assert_eq!(copy.get(1), Some(&6));
        assert_eq!(copy.get(2), None);
    }

    #[test]
    fn clone_of_full_array_is_full() {
        let arr = IntStrictArray::from_slice(&[1, 2], 2).unwrap();
        let mut copy = arr.try_clone().unwrap();
        assert_eq!(copy.append(3), Status::CapacityExhausted);
    }

    #[test]
    fn capacity_below_count_is_invalid_size() {
        let err = IntStrictArray::new(Some(&[1, 2, 3][..]), 3, 1).unwrap_err();
        assert_eq!(err.status(), Status::InvalidSize);
    }

    #[test]
    fn debug_shows_size_and_capacity() {
        let arr = IntStrictArray::from_slice(&[1], 3).unwrap();
        let s = format!("{arr:?}");
        assert!(s.contains("size: 1"), "{s}");
        assert!(s.contains("capacity: 3"), "{s}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Append(i32),
            RemoveLast,
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => any::<i32>().prop_map(Op::Append),
                2 => Just(Op::RemoveLast),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn size_never_exceeds_capacity(
                capacity in 0usize..16,
                ops in proptest::collection::vec(op(), 0..64),
            ) {
                let mut arr = IntStrictArray::with_capacity(capacity).unwrap();
                let mut model: Vec<i32> = Vec::new();
                for op in ops {
                    match op {
                        Op::Append(v) => {
                            let status = arr.append(v);
                            if model.len() < capacity {
                                prop_assert_eq!(status, Status::Ok);
                                model.push(v);
                            } else {
                                prop_assert_eq!(status, Status::CapacityExhausted);
                            }
                        }
                        Op::RemoveLast => {
                            arr.remove_last();
                            model.pop();
                        }
                        Op::Clear => {
                            arr.clear();
                            model.clear();
                        }
                    }
                    prop_assert!(arr.len() <= arr.capacity());
                    prop_assert_eq!(arr.len(), model.len());
                }
                for (i, v) in model.iter().enumerate() {
                    prop_assert_eq!(arr.get(i), Some(v));
                }
                prop_assert_eq!(arr.get(model.len()), None);
            }

            #[test]
            fn clone_round_trips_live_prefix(
                values in proptest::collection::vec(any::<i32>(), 0..32),
                extra in 0usize..8,
            ) {
                let arr = IntStrictArray::from_slice(&values, values.len() + extra).unwrap();
                let copy = arr.try_clone().unwrap();
                prop_assert_eq!(copy.len(), arr.len());
                prop_assert_eq!(copy.capacity(), arr.capacity());
                for i in 0..arr.len() {
                    prop_assert_eq!(copy.get(i), arr.get(i));
                }
            }
        }
    }
}
