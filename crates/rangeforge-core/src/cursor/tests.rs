//! Tests for cursors and sequences.

use super::*;

#[test]
fn test_slice_cursor_walks_to_end() {
    let values = vec![1, 2, 3];
    let (mut cursor, end) = (&values).into_bounds();

    let mut seen = Vec::new();
    while !end.is_end(&cursor) {
        seen.push(*cursor.read());
        cursor.advance();
    }

    assert_eq!(seen, vec![1, 2, 3]);
    assert_eq!(cursor.index(), 3);
}

#[test]
fn test_slice_cursor_equality_requires_same_slice() {
    let a = [1, 2];
    let b = [1, 2];
    let (first_a, _) = (&a).into_bounds();
    let (first_b, _) = (&b).into_bounds();

    assert_eq!(first_a, first_a.clone());
    assert_ne!(first_a, first_b);
}

#[test]
fn test_slice_cursor_rest() {
    let values = [5, 6, 7];
    let (mut cursor, _) = (&values).into_bounds();
    cursor.advance();
    assert_eq!(cursor.rest(), &[6, 7]);
}

#[test]
fn test_empty_slice_starts_at_end() {
    let values: Vec<u8> = Vec::new();
    let (first, last) = (&values).into_bounds();
    assert!(last.is_end(&first));

    let mut owned: Vec<u8> = Vec::new();
    let (first, last) = (&mut owned).into_bounds();
    assert!(last.is_end(&first));
}

#[test]
fn test_slice_cursor_mut_swap_and_write() {
    let mut values = vec![1, 2, 3];
    {
        let (first, _) = (&mut values).into_bounds();
        let third = advanced_by(unsafe { first.fork() }, 2);
        unsafe {
            first.swap_with(&third);
            third.write(10_i32);
        }
    }
    assert_eq!(values, vec![3, 2, 10]);
}

#[test]
fn test_slice_cursor_mut_writes_converted_values() {
    let mut values: Vec<i64> = vec![0, 0];
    {
        let (first, _) = (&mut values).into_bounds();
        unsafe { first.write(7i32) };
    }
    assert_eq!(values, vec![7, 0]);
}

#[test]
#[should_panic(expected = "outside a sequence of length 2")]
fn test_slice_cursor_mut_read_past_end_panics() {
    let mut values = [1, 2];
    let (_, last) = (&mut values).into_bounds();
    let _ = last.read();
}

#[test]
fn test_measure_and_next() {
    let values = [1, 2, 3, 4];
    let (first, last) = (&values).into_bounds();
    let (len, end) = measure(first, &last);

    assert_eq!(len, 4);
    assert_eq!(end, last);
    assert_eq!(*next(&first).read(), 2);
}

#[test]
fn test_iota_is_unbounded() {
    let (mut cursor, end) = Iota::new(3i32).into_bounds();
    for _ in 0..1000 {
        assert!(!end.is_end(&cursor));
        cursor.advance();
    }
    assert_eq!(cursor.value(), 1003);
}

#[test]
#[should_panic(expected = "past the maximum value")]
fn test_iota_panics_instead_of_wrapping() {
    let mut cursor = Iota::new(u8::MAX - 1);
    cursor.advance();
    assert_eq!(cursor.value(), u8::MAX);
    cursor.advance();
}

#[test]
fn test_iota_range_reaches_type_maximum() {
    let (first, last) = Iota::range(250u8, u8::MAX);
    let (len, end) = measure(first, &last);
    assert_eq!(len, 5);
    assert_eq!(end.value(), u8::MAX);
}

#[test]
fn test_iota_range_is_bounded_by_itself() {
    let (first, last) = Iota::range(0u8, 5);
    let (len, _) = measure(first, &last);
    assert_eq!(len, 5);
}

#[test]
fn test_input_sequence_is_single_pass() {
    let (mut cursor, end) = InputSequence::new(vec![1, 2].into_iter()).into_bounds();
    assert_eq!(*cursor.read(), 1);
    cursor.advance();
    assert_eq!(*cursor.read(), 2);
    cursor.advance();
    assert!(end.is_end(&cursor));
    assert_eq!(cursor.current(), None);
}

#[test]
fn test_input_cursor_into_remaining() {
    let (mut cursor, _) = InputSequence::new(1..=4).into_bounds();
    cursor.advance();
    assert_eq!(cursor.into_remaining().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_unreachable_never_ends() {
    let values = [1];
    let (first, last) = (&values).into_bounds();
    assert!(!Unreachable.is_end(&last));
    assert!(!Unreachable.is_end(&first));
}

#[test]
fn test_vec_truncate() {
    let mut values = vec![1, 2, 3];
    Truncate::truncate(&mut values, 1);
    assert_eq!(values, vec![1]);
}

#[test]
fn test_fork_next_on_mutable_cursor() {
    let mut values = [1, 2, 3];
    let (first, last) = SliceCursorMut::bounds(&mut values[..]);
    let second = unsafe { fork_next(&first) };
    assert_eq!(*second.read(), 2);
    assert_eq!(second.index(), 1);
    assert_eq!(measure(second, &last).0, 2);
}

#[test]
fn test_owned_containers_are_sequences_through_mut_borrow() {
    let mut vec = vec![1, 2, 3];
    let mut array = [4, 5];
    let slice: &mut [i32] = &mut [6];

    assert_eq!(measure_container(&mut vec), 3);
    assert_eq!(measure_container(&mut array), 2);
    assert_eq!(measure_container(slice), 1);
}

fn measure_container<S: Container + ?Sized>(seq: &mut S) -> usize {
    let (first, last) = seq.into_bounds();
    measure(first, &last).0
}

#[test]
fn test_permutable_bounds_exchange_elements() {
    let mut values = vec![1, 2, 3];
    {
        let (first, last) = values.permutable_bounds();
        let (_, end) = measure(unsafe { first.fork() }, &last);
        assert!(last.is_end(&end));
        let second = unsafe { fork_next(&first) };
        unsafe { first.swap_with(&second) };
    }
    assert_eq!(values, vec![2, 1, 3]);
}

#[test]
fn test_writable_bounds_write_elements() {
    let mut values = [0u8; 3];
    {
        let (mut cursor, last) = values.writable_bounds();
        let mut n = 1u8;
        while !last.is_end(&cursor) {
            unsafe { cursor.write(n) };
            n += 1;
            cursor.advance();
        }
    }
    assert_eq!(values, [1, 2, 3]);
}
