#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Controller with land loaded at t=0 and rotation started at t=2000.
fn rotating() -> Controller {
    let mut c = Controller::default();
    c.land_loaded_at(0.0);
    c.advance(2_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
    c
}

// =============================================================
// Startup
// =============================================================

#[test]
fn starts_loading_without_timers() {
    let c = Controller::default();
    assert_eq!(c.phase(), Phase::Loading);
    assert!(!c.land_loaded());
    assert!(!c.has_pending_timers());
    assert_eq!(c.selected(), None);
}

#[test]
fn no_rotation_before_land_loads() {
    let mut c = Controller::default();
    assert!(!c.advance(60_000.0));
    assert_eq!(c.phase(), Phase::Loading);
    assert_eq!(c.point_of_view().lng, 0.0);
}

#[test]
fn rotation_begins_two_seconds_after_land_loads() {
    let mut c = Controller::default();
    c.land_loaded_at(1_000.0);
    c.advance(2_999.0);
    assert_eq!(c.phase(), Phase::Loading);
    c.advance(3_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
}

#[test]
fn land_load_snaps_to_initial_point_of_view() {
    let mut c = Controller::new(ViewportPreset::Mobile);
    c.land_loaded_at(0.0);
    let pov = c.point_of_view();
    assert_eq!(pov.lat, 20.0);
    assert_eq!(pov.lng, 0.0);
    assert_eq!(pov.altitude, ViewportPreset::Mobile.altitude());
}

#[test]
fn second_land_load_is_ignored() {
    let mut c = rotating();
    c.advance(3_000.0);
    let lng = c.point_of_view().lng;
    c.land_loaded_at(3_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
    assert_eq!(c.point_of_view().lng, lng);
}

// =============================================================
// Rotation
// =============================================================

#[test]
fn rotation_advances_longitude_per_tick_only() {
    let mut c = rotating();
    let pov = c.point_of_view();
    assert!(!c.advance(2_049.0));
    assert!(c.advance(2_050.0));
    assert!(approx_eq(c.point_of_view().lng, 0.25));
    assert_eq!(c.point_of_view().lat, pov.lat);
    assert_eq!(c.point_of_view().altitude, pov.altitude);
}

#[test]
fn late_frame_replays_every_missed_tick() {
    let mut c = rotating();
    c.advance(3_000.0);
    // 20 ticks of 0.25 degrees.
    assert!(approx_eq(c.point_of_view().lng, 5.0));
}

#[test]
fn longitude_wraps_modulo_360() {
    let mut c = rotating();
    // 1440 ticks = 360 degrees, plus 4 ticks = 1 degree, one frame per tick.
    for tick in 1..=1_444 {
        c.advance(2_000.0 + f64::from(tick) * 50.0);
    }
    let lng = c.point_of_view().lng;
    assert!((0.0..360.0).contains(&lng));
    assert!((lng - 1.0).abs() < 1e-6, "lng = {lng}");
}

#[test]
fn long_stall_replays_only_one_second_of_rotation() {
    let mut c = rotating();
    // An hour with no frames.
    assert!(c.advance(2_000.0 + 3_600_000.0));
    assert!(approx_eq(c.point_of_view().lng, 5.0));
    assert_eq!(c.phase(), Phase::IdleRotating);

    // The tick restarts from the late frame, one step per period.
    assert!(!c.advance(2_000.0 + 3_600_049.0));
    assert!(c.advance(2_000.0 + 3_600_050.0));
    assert!(approx_eq(c.point_of_view().lng, 5.25));
}

// =============================================================
// Drag
// =============================================================

#[test]
fn drag_start_stops_rotation_immediately() {
    let mut c = rotating();
    c.advance(2_100.0);
    c.drag_start();
    assert_eq!(c.phase(), Phase::UserInteracting);
    assert!(!c.has_pending_timers());
    let lng = c.point_of_view().lng;
    assert!(!c.advance(100_000.0));
    assert_eq!(c.point_of_view().lng, lng);
}

#[test]
fn never_auto_rotates_during_drag() {
    let mut c = rotating();
    c.drag_start();
    for step in 0..200 {
        c.drag_move(0.0, 0.0);
        assert!(!c.advance(2_000.0 + f64::from(step) * 50.0));
    }
    assert_eq!(c.point_of_view().lng, 0.0);
}

#[test]
fn drag_move_rotates_camera() {
    let mut c = rotating();
    c.drag_start();
    c.drag_move(-8.0, 4.0);
    let pov = c.point_of_view();
    assert!(approx_eq(pov.lng, 2.0));
    assert!(approx_eq(pov.lat, 21.0));
}

#[test]
fn drag_move_without_drag_is_ignored() {
    let mut c = rotating();
    c.drag_move(100.0, 100.0);
    assert_eq!(c.point_of_view().lng, 0.0);
    assert_eq!(c.point_of_view().lat, 20.0);
}

#[test]
fn resumes_exactly_two_seconds_after_drag_end() {
    let mut c = rotating();
    c.drag_start();
    c.drag_end(10_000.0);
    assert_eq!(c.phase(), Phase::PausedPendingResume);
    c.advance(11_999.0);
    assert_eq!(c.phase(), Phase::PausedPendingResume);
    c.advance(12_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
    let lng = c.point_of_view().lng;
    assert!(!c.advance(12_049.0));
    assert!(c.advance(12_050.0));
    assert!(approx_eq(c.point_of_view().lng, lng + 0.25));
}

#[test]
fn new_drag_cancels_pending_resume() {
    let mut c = rotating();
    c.drag_start();
    c.drag_end(10_000.0);
    c.drag_start();
    c.advance(20_000.0);
    assert_eq!(c.phase(), Phase::UserInteracting);
    c.drag_end(20_000.0);
    c.advance(21_999.0);
    assert_eq!(c.phase(), Phase::PausedPendingResume);
    c.advance(22_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
}

#[test]
fn drag_end_without_drag_is_noop() {
    let mut c = rotating();
    c.drag_end(5_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
}

#[test]
fn drag_before_land_loaded_waits_for_land() {
    let mut c = Controller::default();
    c.drag_start();
    c.drag_end(1_000.0);
    assert_eq!(c.phase(), Phase::Loading);
    c.advance(10_000.0);
    assert_eq!(c.phase(), Phase::Loading);
    c.land_loaded_at(10_000.0);
    c.advance(12_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
}

#[test]
fn land_arriving_mid_drag_resumes_through_drag_end() {
    let mut c = Controller::default();
    c.drag_start();
    c.land_loaded_at(500.0);
    assert_eq!(c.phase(), Phase::UserInteracting);
    assert!(!c.has_pending_timers());
    c.drag_end(1_000.0);
    c.advance(3_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
}

#[test]
fn drag_during_start_delay_cancels_start() {
    let mut c = Controller::default();
    c.land_loaded_at(0.0);
    c.drag_start();
    c.advance(5_000.0);
    assert_eq!(c.phase(), Phase::UserInteracting);
}

// =============================================================
// Marker click
// =============================================================

#[test]
fn marker_click_selects_and_pauses() {
    let mut c = rotating();
    c.marker_click(LocationId(2), 3_000.0);
    assert_eq!(c.selected(), Some(LocationId(2)));
    assert_eq!(c.phase(), Phase::UserInteracting);
    let lng = c.point_of_view().lng;
    assert!(!c.advance(4_999.0));
    assert_eq!(c.point_of_view().lng, lng);
}

#[test]
fn marker_click_settles_then_resumes() {
    let mut c = rotating();
    c.marker_click(LocationId(0), 3_000.0);
    c.advance(5_000.0);
    assert_eq!(c.phase(), Phase::PausedPendingResume);
    c.advance(6_999.0);
    assert_eq!(c.phase(), Phase::PausedPendingResume);
    c.advance(7_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
}

#[test]
fn late_frame_after_click_resumes_on_schedule() {
    let mut c = rotating();
    c.marker_click(LocationId(0), 3_000.0);
    // One frame long after: settle at 5000, resume at 7000, 20 ticks by 8000.
    c.advance(8_000.0);
    assert_eq!(c.phase(), Phase::IdleRotating);
    assert!(approx_eq(c.point_of_view().lng, 5.0));
}

#[test]
fn second_click_replaces_selection_and_restarts_settle() {
    let mut c = rotating();
    c.marker_click(LocationId(0), 3_000.0);
    c.marker_click(LocationId(4), 4_000.0);
    assert_eq!(c.selected(), Some(LocationId(4)));
    c.advance(5_500.0);
    assert_eq!(c.phase(), Phase::UserInteracting);
    c.advance(6_000.0);
    assert_eq!(c.phase(), Phase::PausedPendingResume);
}

#[test]
fn clear_selection_keeps_phase() {
    let mut c = rotating();
    c.marker_click(LocationId(1), 3_000.0);
    c.clear_selection();
    assert_eq!(c.selected(), None);
    assert_eq!(c.phase(), Phase::UserInteracting);
}

#[test]
fn drag_after_click_cancels_settle() {
    let mut c = rotating();
    c.marker_click(LocationId(1), 3_000.0);
    c.drag_start();
    c.advance(10_000.0);
    assert_eq!(c.phase(), Phase::UserInteracting);
    assert_eq!(c.selected(), Some(LocationId(1)));
}

// =============================================================
// Preset / teardown
// =============================================================

#[test]
fn preset_change_only_touches_altitude() {
    let mut c = rotating();
    c.advance(2_500.0);
    let before = c.point_of_view();
    c.set_preset(ViewportPreset::Mobile);
    let after = c.point_of_view();
    assert_eq!(after.lat, before.lat);
    assert_eq!(after.lng, before.lng);
    assert_eq!(after.altitude, ViewportPreset::Mobile.altitude());
    assert_eq!(c.phase(), Phase::IdleRotating);
    assert_eq!(c.preset(), ViewportPreset::Mobile);
}

#[test]
fn shutdown_cancels_all_timers() {
    let mut c = rotating();
    c.shutdown();
    assert!(!c.has_pending_timers());
    let lng = c.point_of_view().lng;
    assert!(!c.advance(1_000_000.0));
    assert_eq!(c.point_of_view().lng, lng);
    c.shutdown();
}
