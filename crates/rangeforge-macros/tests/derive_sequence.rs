//! Integration tests for `#[derive(Sequence)]`.
//!
//! These tests verify that derived wrappers work with every algorithm and
//! action that accepts the wrapped container.

use rangeforge::cursor::measure;
use rangeforge::prelude::*;
use rangeforge_test::container::FrozenVec;

/// A newtype over a vector.
#[derive(Debug, Default, PartialEq, Sequence)]
pub struct Scores(Vec<u32>);

/// A generic newtype.
#[derive(Debug, PartialEq, Sequence)]
pub struct Bag<T>(Vec<T>);

/// A record with several fields, one of which holds the elements.
#[derive(Debug, Sequence)]
pub struct Roster {
    pub team: String,
    #[sequence]
    pub members: Vec<String>,
}

/// A fixed-size wrapper, which cannot be truncated.
#[derive(Debug, Sequence)]
pub struct Triple([i32; 3]);

/// A read-only wrapper that lists the capabilities of its field.
#[derive(Debug, Sequence)]
pub struct Snapshot(#[sequence(forward)] FrozenVec<u32>);

fn sorted<S>(seq: S) -> S
where
    S: PermutableContainer,
    S::Element: PartialOrd,
{
    action::SORT.call(seq)
}

#[test]
fn test_sort_action_on_newtype() {
    let scores = action::SORT.call(Scores(vec![30, 10, 20]));
    assert_eq!(scores, Scores(vec![10, 20, 30]));
}

#[test]
fn test_algorithms_through_borrows() {
    let mut scores = Scores(vec![5, 8, 2, 9]);
    let end = REMOVE_IF.sequence(&mut scores, |x: &u32| *x > 7).index();
    assert_eq!(end, 2);

    let found = FIND_IF.sequence(&scores, |x: &u32| *x == 2);
    assert_eq!(found.index(), 1);
}

#[test]
fn test_remove_if_action_truncates_newtype() {
    let scores = action::REMOVE_IF.call(Scores(vec![1, 2, 3, 4]), |x: &u32| x % 2 == 0);
    assert_eq!(scores.0, vec![1, 3]);
}

#[test]
fn test_generic_newtype() {
    let bag = action::TRANSFORM.call(Bag(vec![1_i64, 2, 3]), |x: &i64| x * x);
    assert_eq!(bag, Bag(vec![1, 4, 9]));
}

#[test]
fn test_marked_field() {
    let roster = Roster {
        team: "infra".to_string(),
        members: vec!["mo".to_string(), "al".to_string(), "jo".to_string()],
    };
    let roster = action::SORT.call(roster);
    assert_eq!(roster.team, "infra");
    assert_eq!(roster.members, vec!["al", "jo", "mo"]);
}

#[test]
fn test_mismatch_between_wrappers() {
    let a = Scores(vec![1, 2, 3]);
    let b = Scores(vec![1, 2, 4]);
    let result = MISMATCH.sequences(&a, &b);
    assert_eq!(result.in1.index(), 2);
}

#[test]
fn test_array_wrapper_sorts_but_is_not_truncatable() {
    let triple = action::SORT.call(Triple([3, 1, 2]));
    assert_eq!(triple.0, [1, 2, 3]);

    let report = diagnose_remove_if!(Triple([1, 2, 3]), |x: &i32| *x > 1);
    assert_eq!(report.unmet(), &[Requirement::Truncatable]);
}

#[test]
fn test_act_assign_on_newtype() {
    let mut scores = Scores(vec![4, 1, 3]);
    scores.act_assign(action::SORT.bind(Greater));
    assert_eq!(scores, Scores(vec![4, 3, 1]));
}

#[test]
fn test_derived_wrapper_meets_generic_container_bounds() {
    assert_eq!(sorted(Scores(vec![3, 1, 2])), Scores(vec![1, 2, 3]));
    assert_eq!(sorted(Bag(vec!['c', 'a', 'b'])), Bag(vec!['a', 'b', 'c']));
    assert_eq!(sorted(Triple([2, 3, 1])).0, [1, 2, 3]);
}

#[test]
fn test_diagnostics_agree_with_derived_capabilities() {
    assert!(diagnose_sort!(Scores(vec![2, 1])).is_satisfied());
    assert!(diagnose_transform!(Bag(vec![1_u8]), |x: &u8| x + 1).is_satisfied());

    let report = diagnose_sort!(Snapshot(FrozenVec::new(vec![2, 1])));
    assert_eq!(report.unmet(), &[Requirement::Permutable]);
}

#[test]
fn test_listed_capability_wrapper_is_traversable() {
    let mut snapshot = Snapshot(FrozenVec::new(vec![4, 5, 6]));
    let (first, last) = (&mut snapshot).into_bounds();
    assert_eq!(measure(first, &last).0, 3);
    assert_eq!(snapshot.0.as_slice(), &[4, 5, 6]);
}
