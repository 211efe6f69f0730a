//! Decision coverage of the sensor list classifier
//!
//! One scenario per routing outcome, starting with the reference
//! two-sensor case: an active in-bounds sensor and an inactive one.

use crate::test_utils::{make_sensor, run_control};
use slist_sensors::{classify, ControlConfig, Sensor, SensorList, Verdict};

#[test]
fn test_active_in_bounds_and_inactive() {
    let s1 = make_sensor(1, 1, 1, true);
    let s2 = make_sensor(1, 1, 2, false);

    let run = run_control(vec![s1, s2], true);

    assert_eq!(run.input.len(), 0);
    assert_eq!(run.lens(), (1, 0, 1));
    assert_eq!(run.skipped.front().map(|s| s.value), Some(2));
    assert_eq!(run.ok.front().map(|s| s.value), Some(1));
}

#[test]
fn test_inactive_sensor_is_skipped_even_out_of_bounds() {
    let run = run_control(vec![make_sensor(0, 10, 1_000, false)], true);
    assert_eq!(run.lens(), (1, 0, 0));
}

#[test]
fn test_low_bound_fault() {
    let run = run_control(vec![make_sensor(5, 10, 4, true)], true);
    assert_eq!(run.lens(), (0, 1, 0));
}

#[test]
fn test_high_bound_fault() {
    let run = run_control(vec![make_sensor(5, 10, 11, true)], true);
    assert_eq!(run.lens(), (0, 1, 0));
}

#[test]
fn test_bounds_are_inclusive() {
    let run = run_control(
        vec![make_sensor(5, 10, 5, true), make_sensor(5, 10, 10, true)],
        true,
    );
    assert_eq!(run.lens(), (0, 0, 2));
}

#[test]
fn test_fault_check_disabled_routes_active_to_ok() {
    let run = run_control(
        vec![
            make_sensor(5, 10, 4, true),
            make_sensor(5, 10, 11, true),
            make_sensor(5, 10, 7, false),
        ],
        false,
    );
    assert_eq!(run.lens(), (1, 0, 2));
}

#[test]
fn test_empty_input() {
    let run = run_control(Vec::new(), true);
    assert_eq!(run.lens(), (0, 0, 0));
    assert!(run.input.is_empty());
}

#[test]
fn test_outputs_keep_list_order() {
    // Prepending reverses the bank, so the list reads 4, 3, 2, 1, 0
    let sensors = (0..5).map(|v| make_sensor(0, 2, v, true)).collect();
    let run = run_control(sensors, true);

    let fault: Vec<i32> = run.fault.iter().map(|s| s.value).collect();
    let ok: Vec<i32> = run.ok.iter().map(|s| s.value).collect();
    assert_eq!(fault, vec![4, 3]);
    assert_eq!(ok, vec![2, 1, 0]);
}

#[test]
fn test_large_bank_partition_invariants() {
    let config = ControlConfig::default();
    let list: SensorList = (0..10_000)
        .map(|i| make_sensor(-50, 50, (i % 301) - 150, i % 7 != 0))
        .collect();
    let expected: Vec<Verdict> = list.iter().map(|s| s.assess(&config)).collect();

    let partition = classify(list, &config);

    let count = |wanted: fn(&Verdict) -> bool| expected.iter().filter(|v| wanted(v)).count();
    assert_eq!(partition.total(), 10_000);
    assert_eq!(partition.skipped.len(), count(|v| *v == Verdict::Skipped));
    assert_eq!(partition.fault.len(), count(|v| matches!(v, Verdict::Fault(_))));
    assert_eq!(partition.ok.len(), count(|v| *v == Verdict::Ok));
    assert!(partition.skipped.iter().all(|s| !s.is_active()));
    assert!(partition.ok.iter().all(Sensor::in_bounds));
}

#[test]
fn test_reclassify_after_reactivation() {
    let config = ControlConfig::default();
    let list: SensorList = vec![make_sensor(0, 1, 0, false), make_sensor(0, 1, 9, false)]
        .into_iter()
        .collect();

    let mut first = classify(list, &config);
    assert_eq!(first.skipped.len(), 2);

    first.skipped.for_all_in(slist_sensors::SensorOp::Activate, false);
    let second = classify(std::mem::take(&mut first.skipped), &config);
    assert_eq!((second.skipped.len(), second.fault.len(), second.ok.len()), (0, 1, 1));
}
