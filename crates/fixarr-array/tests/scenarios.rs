use fixarr_array::handle::{self, FixedArray, StrictOps};
use fixarr_array::{IntPlainArray, IntStrictArray, RawPlainArray, RawStrictArray};
use fixarr_core::{unwrap_into, ArrayError, Status};
use fixarr_test_utils::fixtures::{ascending, full_raw_strict, full_strict, packed_u32, unpack_u32};
use fixarr_test_utils::{StrictModel, StrictOp};
use proptest::prelude::*;

#[test]
fn plain_absent_data_with_count_five_capacity_ten() {
    let mut handle = None;
    let msg = unwrap_into(IntPlainArray::new(None, 5, 10), &mut handle);
    assert_eq!(msg, None);

    let arr = handle.as_ref().unwrap();
    assert_eq!(arr.capacity(), 10);
    assert!(handle::get(handle.as_ref(), 9).is_some());
    assert!(handle::get(handle.as_ref(), 10).is_none());
}

#[test]
fn strict_full_at_construction_rejects_append() {
    let mut handle = Some(IntStrictArray::new(Some(&[1, 2, 3][..]), 3, 3).unwrap());
    assert_eq!(
        handle::append(handle.as_mut(), 4),
        Status::CapacityExhausted
    );
    assert_eq!(handle::get(handle.as_ref(), 2), Some(&3));
    assert_eq!(handle::get(handle.as_ref(), 3), None);
}

#[test]
fn destroy_twice_keeps_handle_absent() {
    let mut handle = Some(full_strict(4));
    handle::destroy(&mut handle);
    assert!(handle.is_none());
    handle::destroy(&mut handle);
    assert!(handle.is_none());
    assert_eq!(handle::get(handle.as_ref(), 0), None);
    assert_eq!(handle::append(handle.as_mut(), 1), Status::NullReference);
}

#[test]
fn failed_construction_yields_message_and_empty_slot() {
    let mut slot = Some(IntPlainArray::with_capacity(1).unwrap());
    let msg = unwrap_into(IntPlainArray::new(Some(&[1, 2][..]), 2, 1), &mut slot);
    assert_eq!(
        msg,
        Some("SizeError: size is negative or capacity is less than size\n")
    );
    assert!(slot.is_none());
}

#[test]
fn unwrap_is_uniform_across_container_kinds() {
    let mut plain = None;
    let mut strict = None;
    let mut raw_plain = None;
    let mut raw_strict = None;
    assert_eq!(
        unwrap_into(IntPlainArray::with_capacity(2), &mut plain),
        None
    );
    assert_eq!(
        unwrap_into(IntStrictArray::with_capacity(2), &mut strict),
        None
    );
    assert_eq!(
        unwrap_into(RawPlainArray::with_capacity(2, 3), &mut raw_plain),
        None
    );
    assert_eq!(
        unwrap_into(RawStrictArray::with_capacity(2, 0), &mut raw_strict),
        Some("SizeError: Type cannot have less than 1 byte\n")
    );
    assert!(plain.is_some() && strict.is_some() && raw_plain.is_some());
    assert!(raw_strict.is_none());
}

#[test]
fn clone_of_absent_handle_is_null_reference_for_every_kind() {
    let expected = Some(ArrayError::NullReference);
    assert_eq!(handle::clone_of::<IntPlainArray>(None).err(), expected);
    assert_eq!(handle::clone_of::<IntStrictArray>(None).err(), expected);
    assert_eq!(handle::clone_of::<RawPlainArray>(None).err(), expected);
    assert_eq!(handle::clone_of::<RawStrictArray>(None).err(), expected);
    let err = handle::clone_of::<RawStrictArray>(None).unwrap_err();
    assert_eq!(err.status(), Status::NullReference);
}

#[test]
fn raw_strict_full_fixture_matches_int_semantics() {
    let mut arr = full_raw_strict(3);
    assert_eq!(arr.append(&packed_u32(&[3])), Status::CapacityExhausted);
    assert_eq!(arr.get(2).and_then(unpack_u32), Some(2));
    assert_eq!(arr.get(3), None);
}

#[test]
fn plain_clone_round_trips_full_buffer() {
    let mut arr = IntPlainArray::from_slice(&ascending(3), 6).unwrap();
    *arr.get_mut(5).unwrap() = -1;
    let copy = handle::clone_of(Some(&arr)).unwrap();
    assert_eq!(copy.capacity(), arr.capacity());
    for i in 0..arr.capacity() {
        assert_eq!(copy.get(i), arr.get(i));
    }
}

#[test]
fn strict_state_machine_walk() {
    let mut arr = IntStrictArray::with_capacity(2).unwrap();
    assert_eq!(arr.append(1), Status::Ok);
    assert_eq!(arr.append(2), Status::Ok);
    assert_eq!(arr.append(3), Status::CapacityExhausted);
    arr.remove_last();
    arr.remove_last();
    arr.remove_last();
    assert!(arr.is_empty());
    assert_eq!(arr.append(5), Status::Ok);
    arr.clear();
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 2);
}

fn strict_op() -> impl Strategy<Value = StrictOp<u32>> {
    prop_oneof![
        4 => any::<u32>().prop_map(StrictOp::Append),
        2 => Just(StrictOp::RemoveLast),
        1 => Just(StrictOp::Clear),
    ]
}

/// Drive any strict container alongside the reference model.
fn check_against_model<C, V>(
    arr: &mut C,
    model: &mut StrictModel<u32>,
    ops: &[StrictOp<u32>],
    to_value: impl Fn(u32) -> V,
    read: impl Fn(&C, usize) -> Option<u32>,
) -> Result<(), TestCaseError>
where
    C: StrictOps<V>,
{
    for op in ops {
        let expected = model.apply(op);
        match op {
            StrictOp::Append(v) => prop_assert_eq!(arr.append(to_value(*v)), expected),
            StrictOp::RemoveLast => arr.remove_last(),
            StrictOp::Clear => arr.clear(),
        }
        prop_assert_eq!(arr.len(), model.len());
        prop_assert!(arr.len() <= arr.capacity());
    }
    for i in 0..=model.len() {
        prop_assert_eq!(read(arr, i), model.get(i).copied());
    }
    Ok(())
}

proptest! {
    #[test]
    fn int_strict_matches_model(
        initial in proptest::collection::vec(any::<u32>(), 0..8),
        extra in 0usize..8,
        ops in proptest::collection::vec(strict_op(), 0..48),
    ) {
        let capacity = initial.len() + extra;
        let as_i32: Vec<i32> = initial.iter().map(|&v| v as i32).collect();
        let mut arr = IntStrictArray::from_slice(&as_i32, capacity).unwrap();
        let mut model = StrictModel::new(&initial, capacity);
        check_against_model(
            &mut arr,
            &mut model,
            &ops,
            |v| v as i32,
            |a, i| FixedArray::get(a, i).map(|&v| v as u32),
        )?;
    }

    #[test]
    fn raw_strict_matches_model(
        initial in proptest::collection::vec(any::<u32>(), 0..8),
        extra in 0usize..8,
        ops in proptest::collection::vec(strict_op(), 0..48),
    ) {
        let capacity = initial.len() + extra;
        let bytes = packed_u32(&initial);
        let mut arr = RawStrictArray::new(Some(&bytes[..]), initial.len(), capacity, 4).unwrap();
        let mut model = StrictModel::new(&initial, capacity);
        let encoded: Vec<Vec<u8>> = ops
            .iter()
            .map(|op| match op {
                StrictOp::Append(v) => v.to_le_bytes().to_vec(),
                _ => Vec::new(),
            })
            .collect();
        for (op, value) in ops.iter().zip(&encoded) {
            let expected = model.apply(op);
            match op {
                StrictOp::Append(_) => prop_assert_eq!(arr.append(value), expected),
                StrictOp::RemoveLast => arr.remove_last(),
                StrictOp::Clear => arr.clear(),
            }
            prop_assert_eq!(arr.len(), model.len());
        }
        for i in 0..=model.len() {
            prop_assert_eq!(arr.get(i).and_then(unpack_u32), model.get(i).copied());
        }
    }

    #[test]
    fn strict_clone_preserves_live_prefix(
        values in proptest::collection::vec(any::<u32>(), 0..16),
        extra in 0usize..8,
        removals in 0usize..4,
    ) {
        let capacity = values.len() + extra;
        let bytes = packed_u32(&values);
        let mut arr = RawStrictArray::new(Some(&bytes[..]), values.len(), capacity, 4).unwrap();
        for _ in 0..removals {
            arr.remove_last();
        }
        let copy = handle::clone_of(Some(&arr)).unwrap();
        prop_assert_eq!(copy.len(), arr.len());
        prop_assert_eq!(copy.capacity(), arr.capacity());
        prop_assert_eq!(copy.type_size(), arr.type_size());
        for i in 0..arr.len() {
            prop_assert_eq!(copy.get(i), arr.get(i));
        }
    }

    #[test]
    fn capacity_below_count_fails_for_every_kind(
        count in 1usize..16,
        shortfall in 1usize..16,
    ) {
        let capacity = count.saturating_sub(shortfall);
        let ints = ascending(count);
        let bytes = vec![0u8; count * 2];
        prop_assert_eq!(
            IntPlainArray::new(Some(&ints[..]), count, capacity).unwrap_err().status(),
            Status::InvalidSize
        );
        prop_assert_eq!(
            IntStrictArray::new(Some(&ints[..]), count, capacity).unwrap_err().status(),
            Status::InvalidSize
        );
        prop_assert_eq!(
            RawPlainArray::new(Some(&bytes[..]), count, capacity, 2).unwrap_err().status(),
            Status::InvalidSize
        );
        prop_assert_eq!(
            RawStrictArray::new(Some(&bytes[..]), count, capacity, 2).unwrap_err().status(),
            Status::InvalidSize
        );
    }
}
