//! Tests for the public facade: prelude, configuration and logging.

use rangeforge::prelude::*;
use rangeforge::{AlgorithmConfig, PivotStrategy, RangeForgeError};
use rangeforge_test::employee::{employees, Employee};
use rangeforge_test::projection::RecordingProjection;

#[test]
fn test_prelude_covers_common_workflow() {
    rangeforge::logging::init();

    let roster = employees()
        .act(action::REMOVE_IF.bind_by_key(|age: &u32| *age < 30, member(|e: &Employee| &e.age)))
        .act(action::SORT.bind_by_key(Greater, member(|e: &Employee| &e.age)));

    let ids: Vec<u32> = roster.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 4, 3]);
}

#[test]
fn test_configured_sort() {
    let config = AlgorithmConfig::from_toml_str(
        r#"
        [sort]
        small_sort_threshold = 2
        pivot = "random"
        seed = 1234
    "#,
    )
    .unwrap();
    config.validate().unwrap();

    let values: Vec<i32> = (0..64).map(|i| (i * 37) % 64).collect();
    let sorted = action::SORT.call_tuned(values, Less, Identity, &config.sort);
    assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    assert_eq!(config.sort.pivot, PivotStrategy::Random);
}

#[test]
fn test_invalid_config_surfaces_as_core_error() {
    let config = AlgorithmConfig::new().with_small_sort_threshold(0);
    let err: RangeForgeError = config.validate().unwrap_err().into();
    assert!(matches!(err, RangeForgeError::InvalidConfig(_)));
}

#[test]
fn test_projection_invoked_once_per_element() {
    let proj = RecordingProjection::new(|e: &Employee| e.age);
    let staff = employees();
    let found = FIND_IF.sequence_by_key(&staff, |age: &u32| *age > 100, by_ref(&proj));
    assert_eq!(found.index(), staff.len());
    assert_eq!(proj.calls(), 5);
}

#[test]
fn test_unmet_requirements_as_error() {
    let report = diagnose_transform!(vec![1_u8], |x: &u8| format!("{x}"));
    let err = report.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "`transform` requirements not met: function result must be writable back into the sequence"
    );
}
