//! Tests for the invocation layer.

use std::cell::Cell;

use super::*;

#[derive(Debug)]
struct Employee {
    name: String,
    age: u32,
}

fn alice() -> Employee {
    Employee {
        name: "Alice".into(),
        age: 30,
    }
}

#[test]
fn test_identity_lends_element() {
    let value = 7;
    assert_eq!(Identity.project(&value, |v| *v * 2), 14);

    let text: &str = "abc";
    assert_eq!(Identity.project(text, str::len), 3);
}

#[test]
fn test_closure_projection_owns_result() {
    let double = |x: &i32| x * 2;
    assert_eq!(double.project(&4, |v| *v), 8);
}

#[test]
fn test_member_projection_borrows_field() {
    let by_name = member(|e: &Employee| &e.name);
    let employee = alice();
    let ptr = by_name.project(&employee, |name: &String| name.as_ptr());
    assert_eq!(ptr, employee.name.as_ptr());
}

#[test]
fn test_comparison_objects() {
    assert!(Less.holds(&1_i32, &2_i32));
    assert!(!Less.holds(&2_i32, &2_i32));
    assert!(Greater.holds(&3_u8, &2_u8));
    assert!(EqualTo.holds(&"x", &"x"));
    assert!(EqualTo.holds(&String::from("x"), &"x"));
}

#[test]
fn test_invoke_predicate_applies_projection_first() {
    let employee = alice();
    let mut is_adult = |age: &u32| *age >= 18;
    assert!(invoke_predicate(&mut is_adult, &|e: &Employee| e.age, &employee));
}

#[test]
fn test_invoke_relation_projects_each_side_independently() {
    let employee = alice();
    let by_name = member(|e: &Employee| &e.name);
    let name = String::from("Alice");

    assert!(invoke_relation(&mut EqualTo, &by_name, &Identity, &employee, &name));
    assert!(!invoke_relation(&mut EqualTo, &Identity, &by_name, &name, &Employee {
        name: "Bob".into(),
        age: 40,
    }));
}

#[test]
fn test_invoke_unary_returns_function_output() {
    let employee = alice();
    let mut greet = |name: &String| format!("hello {name}");
    let by_name = member(|e: &Employee| &e.name);
    assert_eq!(invoke_unary(&mut greet, &by_name, &employee), "hello Alice");
}

#[test]
fn test_stateful_predicate_through_by_mut() {
    let mut calls = 0;
    let mut count_calls = |_: &i32| {
        calls += 1;
        true
    };

    {
        let mut lent = by_mut(&mut count_calls);
        assert!(invoke_predicate(&mut lent, &Identity, &1));
        assert!(invoke_predicate(&mut lent, &Identity, &2));
    }
    assert!(count_calls(&3));
    assert_eq!(calls, 3);
}

#[test]
fn test_by_ref_projection_shares_state() {
    let hits = Cell::new(0);
    let counting = |x: &i32| {
        hits.set(hits.get() + 1);
        *x
    };

    let lent = by_ref(&counting);
    let copy = lent;
    assert_eq!(lent.project(&5, |v| *v), 5);
    assert_eq!(copy.project(&6, |v| *v), 6);
    assert_eq!(hits.get(), 2);
}

#[test]
fn test_by_mut_forwards_relation_and_function() {
    let mut comparisons = 0;
    let mut less = |a: &i32, b: &i32| {
        comparisons += 1;
        a < b
    };
    assert!(by_mut(&mut less).holds(&1, &2));
    assert!(!by_mut(&mut less).holds(&2, &1));
    assert_eq!(comparisons, 2);

    let mut negate = |x: &i32| -x;
    assert_eq!(by_mut(&mut negate).call(&4), -4);
}
