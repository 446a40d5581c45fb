use pageflow_core::{nearest_panel, GestureOutcome, PanelNavigator, SETTLE_TOLERANCE_PX};

const TOPS: [f64; 3] = [0.0, 500.0, 1000.0];

#[test]
fn nearest_panel_picks_minimal_distance() {
    assert_eq!(nearest_panel(&TOPS, 480.0), 1);
    assert_eq!(nearest_panel(&TOPS, 10.0), 0);
    assert_eq!(nearest_panel(&TOPS, 990.0), 2);
}

#[test]
fn nearest_panel_ties_resolve_to_lowest_index() {
    assert_eq!(nearest_panel(&TOPS, 250.0), 0);
    assert_eq!(nearest_panel(&TOPS, 750.0), 1);
}

#[test]
fn nearest_panel_of_empty_layout_is_zero() {
    assert_eq!(nearest_panel(&[], 300.0), 0);
}

#[test]
fn downward_gesture_advances_one_panel() {
    let mut navigator = PanelNavigator::new();
    let outcome = navigator.on_wheel(0.0, 100.0, &TOPS, 0.0);
    assert_eq!(outcome, GestureOutcome::Advance { target: 1 });
    assert!(navigator.animating());
    assert_eq!(navigator.pending_target(), Some(1));
}

#[test]
fn upward_gesture_advances_one_panel_back() {
    let mut navigator = PanelNavigator::new();
    let outcome = navigator.on_wheel(0.0, -100.0, &TOPS, 1000.0);
    assert_eq!(outcome, GestureOutcome::Advance { target: 1 });
}

#[test]
fn downward_gesture_from_last_panel_passes_through() {
    let mut navigator = PanelNavigator::new();
    let outcome = navigator.on_wheel(0.0, 100.0, &TOPS, 1000.0);
    assert_eq!(outcome, GestureOutcome::PassThrough);
    assert!(!navigator.animating());
}

#[test]
fn upward_gesture_from_first_panel_passes_through() {
    let mut navigator = PanelNavigator::new();
    let outcome = navigator.on_wheel(0.0, -100.0, &TOPS, 0.0);
    assert_eq!(outcome, GestureOutcome::PassThrough);
}

#[test]
fn gestures_while_animating_are_suppressed_without_retarget() {
    let mut navigator = PanelNavigator::new();
    navigator.on_wheel(0.0, 100.0, &TOPS, 0.0);
    let pending = navigator.pending_target();
    let outcome = navigator.on_wheel(0.0, 100.0, &TOPS, 300.0);
    assert_eq!(outcome, GestureOutcome::Suppress);
    assert_eq!(navigator.pending_target(), pending);
}

#[test]
fn zero_vertical_delta_passes_through() {
    let mut navigator = PanelNavigator::new();
    assert_eq!(
        navigator.on_wheel(40.0, 0.0, &TOPS, 0.0),
        GestureOutcome::PassThrough
    );
}

#[test]
fn horizontal_dominant_gesture_passes_through() {
    let mut navigator = PanelNavigator::new();
    assert_eq!(
        navigator.on_wheel(120.0, 80.0, &TOPS, 0.0),
        GestureOutcome::PassThrough
    );
    assert_eq!(
        navigator.on_wheel(80.0, 80.0, &TOPS, 0.0),
        GestureOutcome::PassThrough
    );
}

#[test]
fn scroll_within_tolerance_settles() {
    let mut navigator = PanelNavigator::new();
    navigator.on_wheel(0.0, 100.0, &TOPS, 0.0);
    assert!(!navigator.on_scroll(&TOPS, 490.0));
    assert!(navigator.animating());
    assert!(navigator.on_scroll(&TOPS, 500.0 - SETTLE_TOLERANCE_PX));
    assert!(!navigator.animating());
}

#[test]
fn scroll_without_pending_target_reports_nothing() {
    let mut navigator = PanelNavigator::new();
    assert!(!navigator.on_scroll(&TOPS, 500.0));
}

#[test]
fn vanished_target_panel_releases() {
    let mut navigator = PanelNavigator::new();
    navigator.on_wheel(0.0, 100.0, &TOPS, 600.0);
    assert_eq!(navigator.pending_target(), Some(2));
    assert!(navigator.on_scroll(&TOPS[..1], 0.0));
    assert!(!navigator.animating());
}

#[test]
fn release_returns_to_idle() {
    let mut navigator = PanelNavigator::new();
    navigator.on_wheel(0.0, 100.0, &TOPS, 0.0);
    navigator.release();
    assert!(!navigator.animating());
    assert_eq!(
        navigator.on_wheel(0.0, 100.0, &TOPS, 0.0),
        GestureOutcome::Advance { target: 1 }
    );
}
