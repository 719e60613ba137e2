use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn tracker_starts_idle() {
    let t = GestureTracker::new();
    assert_eq!(t.state(), PressState::Idle);
}

#[test]
fn move_without_press_does_nothing() {
    let mut t = GestureTracker::new();
    assert!(t.pointer_move(p(10.0, 10.0)).is_empty());
    assert_eq!(t.state(), PressState::Idle);
}

#[test]
fn press_and_release_in_place_is_click() {
    let mut t = GestureTracker::new();
    assert!(t.pointer_down(p(10.0, 10.0)).is_empty());
    assert_eq!(t.pointer_up(p(11.0, 10.0)), vec![Gesture::Click(p(11.0, 10.0))]);
    assert_eq!(t.state(), PressState::Idle);
}

#[test]
fn small_jitter_stays_a_press() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(10.0, 10.0));
    assert!(t.pointer_move(p(12.0, 11.0)).is_empty());
    assert!(matches!(t.state(), PressState::Pressed { .. }));
    assert!(matches!(t.pointer_up(p(12.0, 11.0)).as_slice(), [Gesture::Click(_)]));
}

#[test]
fn crossing_threshold_starts_drag_with_full_delta() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(10.0, 10.0));
    let out = t.pointer_move(p(16.0, 10.0));
    assert_eq!(out, vec![Gesture::DragStart, Gesture::DragMove { dx: 6.0, dy: 0.0 }]);
    assert_eq!(t.state(), PressState::Dragging { last: p(16.0, 10.0) });
}

#[test]
fn drag_moves_report_incremental_deltas() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(0.0, 0.0));
    t.pointer_move(p(10.0, 0.0));
    assert_eq!(t.pointer_move(p(13.0, -2.0)), vec![Gesture::DragMove { dx: 3.0, dy: -2.0 }]);
}

#[test]
fn release_after_drag_ends_drag_without_click() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(0.0, 0.0));
    t.pointer_move(p(10.0, 0.0));
    assert_eq!(t.pointer_up(p(10.0, 0.0)), vec![Gesture::DragEnd]);
    assert_eq!(t.state(), PressState::Idle);
}

#[test]
fn leaving_canvas_ends_drag() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(0.0, 0.0));
    t.pointer_move(p(10.0, 0.0));
    assert_eq!(t.pointer_leave(), vec![Gesture::DragEnd]);
    assert_eq!(t.state(), PressState::Idle);
}

#[test]
fn leaving_canvas_drops_pending_click() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(0.0, 0.0));
    assert!(t.pointer_leave().is_empty());
    assert!(t.pointer_up(p(0.0, 0.0)).is_empty());
}

#[test]
fn second_press_during_drag_closes_drag() {
    let mut t = GestureTracker::new();
    t.pointer_down(p(0.0, 0.0));
    t.pointer_move(p(10.0, 0.0));
    assert_eq!(t.pointer_down(p(20.0, 0.0)), vec![Gesture::DragEnd]);
    assert_eq!(t.state(), PressState::Pressed { origin: p(20.0, 0.0) });
}
