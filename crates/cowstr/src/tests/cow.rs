//! Sharing, reuse, and isolation semantics of the value type.

use alloc::{collections::BTreeMap, string::ToString, vec::Vec};

use crate::CowStr;

#[test]
fn empty_state_allocates_nothing() {
    let empty = CowStr::new();
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.capacity(), 0);
    assert_eq!(empty.ref_count(), 0);
    assert_eq!(empty, "");
}

#[test]
fn construction_roundtrips_and_sizes_exactly() {
    let value = CowStr::try_from("abc").unwrap();
    assert_eq!(value.as_bytes(), b"abc");
    assert_eq!(value.len(), 3);
    assert_eq!(value.capacity(), 4);
    assert_eq!(value.ref_count(), 1);
}

#[test]
fn construction_clips_at_the_first_nul() {
    let value = CowStr::from_bytes(b"ab\0cd").unwrap();
    assert_eq!(value, "ab");
    assert!(CowStr::from_bytes(b"\0x").unwrap().is_empty());
}

#[test]
fn clone_shares_the_buffer() {
    let a = CowStr::try_from("abc").unwrap();
    let b = a.clone();
    assert_eq!(a.ref_count(), 2);
    assert_eq!(b.ref_count(), 2);
    assert_eq!(a.as_ptr(), b.as_ptr());
}

#[test]
fn drop_releases_one_reference() {
    let a = CowStr::try_from("abc").unwrap();
    let b = a.clone();
    drop(b);
    assert_eq!(a.ref_count(), 1);
}

#[test]
fn copy_then_mutate_isolation() {
    let a = CowStr::try_from("abc").unwrap();
    let mut b = a.clone();
    b.push("d").unwrap();
    assert_eq!(a, "abc");
    assert_eq!(b, "abcd");
    assert_eq!(a.ref_count(), 1);
    assert_eq!(b.ref_count(), 1);
}

#[test]
#[allow(clippy::assigning_clones)]
fn self_assignment_keeps_content_and_buffer() {
    let mut a = CowStr::try_from("abc").unwrap();
    a = a.clone();
    assert_eq!(a, "abc");
    assert_eq!(a.ref_count(), 1);
}

#[test]
fn assign_reuses_a_sole_owned_buffer() {
    let mut value = CowStr::try_from("abcdef").unwrap();
    let home = value.as_ptr();
    value.assign("ab").unwrap();
    assert_eq!(value, "ab");
    assert_eq!(value.as_ptr(), home);
    assert_eq!(value.capacity(), 7);
}

#[test]
fn assign_does_not_disturb_other_owners() {
    let mut value = CowStr::try_from("abcdef").unwrap();
    let other = value.clone();
    value.assign("xy").unwrap();
    assert_eq!(value, "xy");
    assert_eq!(other, "abcdef");
    assert_ne!(value.as_ptr(), other.as_ptr());
    assert_eq!(other.ref_count(), 1);
}

#[test]
fn assign_empty_clears_to_the_empty_state() {
    let mut value = CowStr::try_from("abc").unwrap();
    value.assign("").unwrap();
    assert!(value.is_empty());
    assert_eq!(value.capacity(), 0);
}

#[test]
fn append_reuses_spare_capacity_in_place() {
    let mut value = CowStr::try_from("abcdef").unwrap();
    value.assign("ab").unwrap();
    let home = value.as_ptr();
    value.push("c").unwrap();
    value.push("d").unwrap();
    assert_eq!(value, "abcd");
    assert_eq!(value.as_ptr(), home);

    value.push("efg").unwrap();
    assert_eq!(value, "abcdefg");
    assert_ne!(value.as_ptr(), home);
    assert_eq!(value.capacity(), 8);
}

#[test]
fn append_to_a_shared_buffer_copies() {
    let mut a = CowStr::try_from("abcdef").unwrap();
    a.assign("ab").unwrap();
    let b = a.clone();
    let home = b.as_ptr();
    a.push("c").unwrap();
    assert_eq!(a, "abc");
    assert_eq!(b, "ab");
    assert_ne!(a.as_ptr(), home);
    assert_eq!(b.as_ptr(), home);
    assert_eq!(a.capacity(), 4);
}

#[test]
fn push_empty_is_a_no_op_even_when_shared() {
    let mut a = CowStr::try_from("ab").unwrap();
    let b = a.clone();
    let home = a.as_ptr();
    a.push("").unwrap();
    assert_eq!(a.as_ptr(), home);
    assert_eq!(a.ref_count(), 2);
    assert_eq!(b, "ab");
}

#[test]
fn append_to_empty_allocates_exactly() {
    let mut value = CowStr::new();
    value.push("abc").unwrap();
    assert_eq!(value, "abc");
    assert_eq!(value.capacity(), 4);
}

#[test]
fn concat_mutates_neither_operand() {
    let a = CowStr::try_from("ab").unwrap();
    let b = CowStr::try_from("cd").unwrap();
    let joined = a.concat(&b).unwrap();
    assert_eq!(joined, "abcd");
    assert_eq!(a, "ab");
    assert_eq!(b, "cd");
}

#[test]
fn clear_releases_the_reference() {
    let mut a = CowStr::try_from("ab").unwrap();
    let b = a.clone();
    a.clear();
    assert!(a.is_empty());
    assert_eq!(b.ref_count(), 1);
}

#[test]
fn empty_and_zero_length_compare_equal() {
    let empty = CowStr::new();
    assert_eq!(empty, "");
    assert_eq!(empty, CowStr::try_from("").unwrap());
    assert_ne!(empty, "x");
}

#[test]
fn c_string_view_keeps_the_terminator() {
    let value = CowStr::try_from("ab").unwrap();
    assert_eq!(value.as_c_str(), c"ab");
    assert_eq!(CowStr::new().as_c_str(), c"");
}

#[test]
fn ordering_follows_content_for_map_keys() {
    let mut map = BTreeMap::new();
    map.insert(CowStr::try_from("b").unwrap(), 2);
    map.insert(CowStr::try_from("a").unwrap(), 1);
    map.insert(CowStr::new(), 0);
    let keys: Vec<_> = map.keys().map(ToString::to_string).collect();
    assert_eq!(keys, ["", "a", "b"]);
}
