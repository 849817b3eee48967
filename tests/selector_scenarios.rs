//! End-to-end gesture scenarios against the public selector API.

use std::cell::RefCell;
use std::rc::Rc;

use floem_range::{ConfigurationError, Handle, RangeConfig, RangeSelector, RangeValues};

type Log = Rc<RefCell<Vec<RangeValues>>>;

// ── Helpers ──────────────────────────────────────────────────────────

/// Track width chosen so that one pixel is exactly 100 in value space:
/// (50_000 - 400) / 100 = 496px of travel plus a 24px thumb.
const BUDGET_TRACK: f64 = 496.0 + 24.0;

fn budget_selector() -> (RangeSelector, Log, Log) {
    let changes: Log = Rc::default();
    let commits: Log = Rc::default();
    let (c, m) = (changes.clone(), commits.clone());
    let config = RangeConfig::new(400.0, 50_000.0, 100.0, 1_000.0)
        .with_initial(400.0, 25_000.0)
        .with_thumb_size(24.0);
    let mut selector = RangeSelector::new(&config)
        .unwrap()
        .on_change(move |v| c.borrow_mut().push(v))
        .on_commit(move |v| m.borrow_mut().push(v));
    selector.report_track_width(BUDGET_TRACK);
    (selector, changes, commits)
}

fn px_for_value(delta: f64) -> f64 {
    delta / 100.0
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn low_drag_saturates_below_high() {
    let (mut s, _, commits) = budget_selector();
    s.on_pointer_down(Handle::Low, 12.0);
    s.on_pointer_move(Handle::Low, px_for_value(30_000.0));
    assert_eq!(s.values(), RangeValues::new(24_000.0, 25_000.0));
    s.on_pointer_move(Handle::Low, px_for_value(45_000.0));
    assert_eq!(s.values(), RangeValues::new(24_000.0, 25_000.0));
    s.on_pointer_up(Handle::Low);
    assert_eq!(*commits.borrow(), vec![RangeValues::new(24_000.0, 25_000.0)]);
}

#[test]
fn high_drag_below_min_stops_at_low_plus_gap() {
    let (mut s, _, _) = budget_selector();
    s.on_pointer_down(Handle::High, 258.0);
    // target value 300: 24_700 below the handle's 25_000
    s.on_pointer_move(Handle::High, px_for_value(300.0 - 25_000.0));
    assert_eq!(s.values(), RangeValues::new(400.0, 1_400.0));
    s.on_pointer_up(Handle::High);
}

#[test]
fn unsatisfiable_gap_is_a_configuration_error() {
    let err = RangeSelector::new(&RangeConfig::new(0.0, 100.0, 5.0, 200.0)).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::GapExceedsSpan {
            min_gap: 200.0,
            span: 100.0
        }
    );
}

#[test]
fn zero_movement_drag_commits_once_with_unchanged_values() {
    let (mut s, changes, commits) = budget_selector();
    s.on_pointer_down(Handle::High, 258.0);
    s.on_pointer_up(Handle::High);
    assert!(changes.borrow().is_empty());
    assert_eq!(*commits.borrow(), vec![RangeValues::new(400.0, 25_000.0)]);
}

#[test]
fn cancelled_drag_before_movement_still_commits() {
    let (mut s, _, commits) = budget_selector();
    s.on_pointer_down(Handle::Low, 12.0);
    s.on_pointer_cancel(Handle::Low);
    assert_eq!(*commits.borrow(), vec![RangeValues::new(400.0, 25_000.0)]);
}

#[test]
fn out_of_range_initial_values_are_clamped() {
    let s = RangeSelector::new(
        &RangeConfig::new(400.0, 50_000.0, 100.0, 1_000.0).with_initial(-5_000.0, 90_000.0),
    )
    .unwrap();
    assert_eq!(s.values(), RangeValues::new(400.0, 50_000.0));

    let crossed = RangeSelector::new(
        &RangeConfig::new(400.0, 50_000.0, 100.0, 1_000.0).with_initial(30_000.0, 10_000.0),
    )
    .unwrap();
    assert_eq!(crossed.values(), RangeValues::new(9_000.0, 10_000.0));
}

#[test]
fn thumb_narrower_than_track_is_required_for_movement() {
    let (mut s, changes, commits) = budget_selector();
    s.report_track_width(10.0);
    s.on_pointer_down(Handle::Low, 0.0);
    s.on_pointer_move(Handle::Low, 300.0);
    s.on_pointer_up(Handle::Low);
    assert!(changes.borrow().is_empty());
    assert_eq!(commits.borrow().len(), 1);
    assert_eq!(s.values(), RangeValues::new(400.0, 25_000.0));
}

#[test]
fn config_from_json_drives_a_selector() {
    let config: RangeConfig = serde_json::from_str(
        r#"{ "min": 0, "max": 1000, "step": 10, "minGap": 50, "initialLow": 105, "initialHigh": 500 }"#,
    )
    .unwrap();
    let s = RangeSelector::new(&config).unwrap();
    assert_eq!(s.values(), RangeValues::new(110.0, 500.0));
}
