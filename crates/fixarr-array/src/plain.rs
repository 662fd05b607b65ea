//! Fixed-capacity arrays with no logical length.
//!
//! A [`PlainArray`] allocates its whole capacity up front and treats every
//! slot below capacity as addressable. Slots not covered by the initial
//! data hold `T::default()`. There is no append or remove: the container
//! is a bounds-checked replacement for a raw heap buffer.

use std::fmt;

use fixarr_core::{ArrayError, ArrayResult, ElementLayout};

use crate::alloc;
use crate::handle::FixedArray;

/// A heap buffer of exactly `capacity` elements.
pub struct PlainArray<T> {
    /// Backing storage. Its length is the capacity.
    data: Box<[T]>,
}

/// Int-specialized plain array.
pub type IntPlainArray = PlainArray<i32>;

impl<T: Copy + Default> PlainArray<T> {
    /// Construct a plain array of `capacity` elements.
    ///
    /// The first `initial_count` elements are copied from `initial`. If
    /// `initial` is `None` the count is treated as zero whatever its value.
    ///
    /// # Errors
    ///
    /// - [`CapacityBelowCount`](fixarr_core::ArrayError::CapacityBelowCount)
    ///   if `capacity < initial_count`.
    /// - [`ElementSizeTooSmall`](fixarr_core::ArrayError::ElementSizeTooSmall)
    ///   if `T` is zero-sized.
    /// - [`CountExceedsElements`](fixarr_core::ArrayError::CountExceedsElements)
    ///   if `initial` holds fewer than `initial_count` elements.
    /// - [`AllocationFailed`](fixarr_core::ArrayError::AllocationFailed)
    ///   if the payload cannot be allocated.
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
        Ok(Self { data })
    }

    /// Construct a plain array holding a copy of `values`.
    pub fn from_slice(values: &[T], capacity: usize) -> ArrayResult<Self> {
        Self::new(Some(values), values.len(), capacity)
    }

    /// Construct a plain array with no initial data.
    pub fn with_capacity(capacity: usize) -> ArrayResult<Self> {
        Self::new(None, 0, capacity)
    }

    /// Allocate a full-capacity copy of this array.
    ///
    /// Every slot is copied, including those never explicitly written.
    pub fn try_clone(&self) -> ArrayResult<Self> {
        Self::new(Some(&self.data[..]), self.data.len(), self.data.len())
    }
}

impl<T> PlainArray<T> {
    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Element at `index`, or `None` if `index >= capacity`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, or `None` if `index >= capacity`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Memory usage of the payload in bytes.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.data)
    }
}

impl<T: Copy + Default> FixedArray for PlainArray<T> {
    type Item = T;

    fn capacity(&self) -> usize {
        PlainArray::capacity(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        PlainArray::get(self, index)
    }

    fn try_clone(&self) -> ArrayResult<Self> {
        PlainArray::try_clone(self)
    }
}

impl<T> fmt::Debug for PlainArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainArray")
            .field("capacity", &self.data.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixarr_core::Status;

    #[test]
    fn absent_initial_data_ignores_count() {
        let arr = IntPlainArray::new(None, 5, 10).unwrap();
        assert_eq!(arr.capacity(), 10);
        assert!(arr.get(9).is_some());
        assert!(arr.get(10).is_none());
    }

    #[test]
    fn initial_elements_copied_to_front() {
        let arr = IntPlainArray::new(Some(&[4, 5, 6][..]), 3, 8).unwrap();
        assert_eq!(arr.get(0), Some(&4));
        assert_eq!(arr.get(1), Some(&5));
        assert_eq!(arr.get(2), Some(&6));
    }

    #[test]
    fn partial_count_copies_prefix_only() {
        let arr = IntPlainArray::new(Some(&[4, 5, 6][..]), 2, 3).unwrap();
        assert_eq!(arr.get(1), Some(&5));
        assert_eq!(arr.get(2), Some(&0));
    }

    #[test]
    fn capacity_below_count_is_invalid_size() {
        let err = IntPlainArray::new(Some(&[1, 2, 3][..]), 3, 2).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CapacityBelowCount {
                count: 3,
                capacity: 2
            }
        );
        assert_eq!(err.status(), Status::InvalidSize);
    }

    #[test]
    fn count_beyond_supplied_elements_rejected() {
        let err = IntPlainArray::new(Some(&[1, 2][..]), 3, 4).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CountExceedsElements {
                count: 3,
                supplied: 2
            }
        );
    }

    #[test]
    fn zero_sized_element_rejected() {
        let err = PlainArray::<()>::with_capacity(4).unwrap_err();
        assert_eq!(err, ArrayError::ElementSizeTooSmall { type_size: 0 });
    }

    #[test]
    fn zero_capacity_has_no_gettable_slot() {
        let arr = IntPlainArray::with_capacity(0).unwrap();
        assert_eq!(arr.capacity(), 0);
        assert!(arr.get(0).is_none());
    }

    #[test]
    fn huge_capacity_is_heap_failure() {
        let err = IntPlainArray::with_capacity(usize::MAX / 4).unwrap_err();
        assert_eq!(err.status(), Status::HeapFailure);
    }

    #[test]
    fn clone_copies_full_capacity() {
        let mut arr = IntPlainArray::new(Some(&[1, 2][..]), 2, 5).unwrap();
        *arr.get_mut(4).unwrap() = 99;

        let copy = arr.try_clone().unwrap();
        assert_eq!(copy.capacity(), 5);
        for i in 0..5 {
            assert_eq!(copy.get(i), arr.get(i));
        }
        assert_eq!(copy.get(4), Some(&99));
    }

    #[test]
    fn clone_is_independent() {
        let arr = IntPlainArray::from_slice(&[1, 2, 3], 3).unwrap();
        let mut copy = arr.try_clone().unwrap();
        *copy.get_mut(0).unwrap() = 100;
        assert_eq!(arr.get(0), Some(&1));
        assert_eq!(copy.get(0), Some(&100));
    }

    #[test]
    fn get_mut_out_of_range_is_none() {
        let mut arr = IntPlainArray::with_capacity(2).unwrap();
        assert!(arr.get_mut(2).is_none());
    }

    #[test]
    fn generic_element_type() {
        let arr = PlainArray::<(u8, f64)>::from_slice(&[(1, 0.5)], 2).unwrap();
        assert_eq!(arr.get(0), Some(&(1, 0.5)));
        assert_eq!(arr.get(1), Some(&(0, 0.0)));
        assert_eq!(arr.memory_bytes(), 2 * std::mem::size_of::<(u8, f64)>());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_index_below_capacity_is_gettable(
                values in proptest::collection::vec(any::<i32>(), 0..32),
                extra in 0usize..32,
            ) {
                let capacity = values.len() + extra;
                let arr = IntPlainArray::from_slice(&values, capacity).unwrap();
                for i in 0..capacity {
                    prop_assert!(arr.get(i).is_some());
                }
                prop_assert!(arr.get(capacity).is_none());
                for (i, v) in values.iter().enumerate() {
                    prop_assert_eq!(arr.get(i), Some(v));
                }
            }

            #[test]
            fn capacity_below_count_always_fails(
                values in proptest::collection::vec(any::<i32>(), 1..32),
                shortfall in 1usize..32,
            ) {
                let capacity = values.len().saturating_sub(shortfall);
                let result = IntPlainArray::from_slice(&values, capacity);
                prop_assert_eq!(result.unwrap_err().status(), Status::InvalidSize);
            }
        }
    }
}
