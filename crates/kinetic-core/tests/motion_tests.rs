// Host-side tests for pointer normalization and the frame-driven motion helpers.

use glam::Vec2;
use kinetic_core::motion::{
    arrow_step, follower_speed, format_percent, format_ratio, normalize_pointer, Calibration,
    CalibrationStep, CoordSpace, DragState, IdleMotion, MotionState, Rect, Trail,
};

fn stage() -> Rect {
    Rect::new(100.0, 50.0, 400.0, 200.0)
}

#[test]
fn corners_map_to_range_ends() {
    let r = stage();
    let tl = Vec2::new(r.left, r.top);
    let br = Vec2::new(r.left + r.width, r.top + r.height);

    assert_eq!(normalize_pointer(&r, tl, CoordSpace::Percent), Vec2::ZERO);
    assert_eq!(normalize_pointer(&r, br, CoordSpace::Percent), Vec2::splat(100.0));
    assert_eq!(normalize_pointer(&r, tl, CoordSpace::Centered), Vec2::splat(-1.0));
    assert_eq!(normalize_pointer(&r, br, CoordSpace::Centered), Vec2::ONE);
    assert_eq!(normalize_pointer(&r, r.center(), CoordSpace::Centered), Vec2::ZERO);
}

#[test]
fn out_of_bounds_points_are_clamped() {
    let r = stage();
    for p in [
        Vec2::new(-1000.0, -1000.0),
        Vec2::new(5000.0, 60.0),
        Vec2::new(300.0, 9999.0),
        Vec2::new(-3.0, 400.0),
    ] {
        let pct = normalize_pointer(&r, p, CoordSpace::Percent);
        assert!((0.0..=100.0).contains(&pct.x) && (0.0..=100.0).contains(&pct.y), "{pct:?}");
        let ratio = normalize_pointer(&r, p, CoordSpace::Centered);
        assert!((-1.0..=1.0).contains(&ratio.x) && (-1.0..=1.0).contains(&ratio.y), "{ratio:?}");
    }
}

#[test]
fn degenerate_container_maps_to_center() {
    let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(normalize_pointer(&empty, Vec2::new(10.0, 10.0), CoordSpace::Percent), Vec2::splat(50.0));
    assert_eq!(normalize_pointer(&empty, Vec2::ZERO, CoordSpace::Centered), Vec2::ZERO);
}

#[test]
fn css_value_formatting() {
    assert_eq!(format_percent(12.34567), "12.346%");
    assert_eq!(format_ratio(-0.25, 3), "-0.250");
    assert_eq!(format_ratio(33.333, 2), "33.33");
}

#[test]
fn arrow_keys_step_two_percent() {
    assert_eq!(arrow_step("ArrowLeft"), Some(Vec2::new(-2.0, 0.0)));
    assert_eq!(arrow_step("ArrowDown"), Some(Vec2::new(0.0, 2.0)));
    assert_eq!(arrow_step("Enter"), None);
}

#[test]
fn drag_without_grab_offset_tracks_pointer() {
    let r = stage();
    let mut drag = DragState::default();
    assert!(!drag.is_dragging());
    drag.press(1, Vec2::new(150.0, 100.0), None);
    assert!(drag.is_dragging());
    let pos = drag.drag_to(Vec2::new(500.0, 250.0), &r, CoordSpace::Centered).unwrap();
    assert_eq!(pos, Vec2::ONE);
}

#[test]
fn calibration_gives_up_after_six_attempts() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    // layout never catches up: every measurement still reads 10px low
    let el = Rect::new(40.0, 50.0, 20.0, 20.0);
    let mut cal = Calibration::default();
    let mut offset = 0.0;
    let mut nudges = 0;
    while let CalibrationStep::Nudge(next) = cal.step(Vec2::splat(50.0), &r, &el, offset) {
        offset = next;
        nudges += 1;
        assert!(nudges <= 6);
    }
    assert_eq!(nudges, 6);
    assert!((offset - 60.0).abs() < 1e-4);
}

#[test]
fn orbit_follower_chases_idle_target() {
    let mut idle = IdleMotion::default();
    let mut dot = MotionState::new(Vec2::splat(50.0), 0.2);
    for _ in 0..30 {
        if let Some(t) = idle.step(1.0 / 60.0) {
            dot.set_target(t);
        }
        dot.step(1.0 / 60.0);
    }
    assert!(dot.current != Vec2::splat(50.0));
    idle.disable();
    dot.set_target(Vec2::new(10.0, 90.0));
    for _ in 0..300 {
        assert!(idle.step(1.0 / 60.0).is_none());
        dot.step(1.0 / 60.0);
    }
    assert_eq!(dot.current, Vec2::new(10.0, 90.0));
}

#[test]
fn trail_comes_to_rest_after_pointer_input() {
    let mut trail = Trail::new([follower_speed(0, None), follower_speed(1, None)]);
    let mut writes = 0;
    for _ in 0..10 {
        trail.step(1.0 / 60.0, |_, _| writes += 1);
    }
    assert!(writes > 0);
    assert!(!trail.is_at_rest(), "autoplay keeps the loop alive");

    trail.point_at(Vec2::new(20.0, 80.0));
    assert!(!trail.is_idle());
    let mut frames = 0;
    while !trail.is_at_rest() {
        trail.step(1.0 / 60.0, |_, _| {});
        frames += 1;
        assert!(frames < 1000, "trail never settled");
    }

    // settled dots are not rewritten
    let mut moved = false;
    trail.step(1.0 / 60.0, |_, _| moved = true);
    assert!(!moved);

    // new input wakes it up again
    trail.point_at(Vec2::new(50.0, 50.0));
    assert!(!trail.is_at_rest());
}

#[test]
fn press_stops_autoplay_without_retargeting() {
    let mut trail = Trail::new([0.3]);
    trail.hold();
    assert!(!trail.is_idle());
    // followers start centered on their target, so nothing is left to animate
    assert!(trail.is_at_rest());
}
