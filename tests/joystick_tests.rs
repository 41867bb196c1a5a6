// Host-side tests for joystick geometry and axis mapping.

use glam::DVec2;
use panel_core::{round_half_up, JoystickBase, MappedPosition};

fn base() -> JoystickBase {
    // 200x200 element at (100, 50): center (200, 150), radius 100
    JoystickBase::from_rect(100.0, 50.0, 200.0, 200.0)
}

fn at(dx: f64, dy: f64) -> DVec2 {
    base().center + DVec2::new(dx, dy)
}

#[test]
fn from_rect_uses_center_and_half_width() {
    let b = base();
    assert_eq!(b.center, DVec2::new(200.0, 150.0));
    assert_eq!(b.radius, 100.0);
}

#[test]
fn center_maps_to_zero() {
    let s = base().track(base().center);
    assert_eq!(s.position, MappedPosition::CENTER);
    assert_eq!(s.offset, DVec2::ZERO);
}

#[test]
fn right_edge_is_full_positive_x() {
    assert_eq!(base().track(at(100.0, 0.0)).position, MappedPosition::new(100, 0));
}

#[test]
fn vertical_axis_is_inverted() {
    // Screen y grows downward; up on screen is positive output
    assert_eq!(base().track(at(0.0, -100.0)).position, MappedPosition::new(0, 100));
    assert_eq!(base().track(at(0.0, 100.0)).position, MappedPosition::new(0, -100));
}

#[test]
fn inside_disk_maps_linearly() {
    let b = JoystickBase::new(DVec2::new(0.0, 0.0), 75.0);
    let mut dx = -53.0;
    while dx <= 53.0 {
        let mut dy = -53.0;
        while dy <= 53.0 {
            let s = b.track(DVec2::new(dx, dy));
            assert_eq!(s.offset, DVec2::new(dx, dy), "offset moved inside disk");
            let want_x = round_half_up(dx / 75.0 * 100.0) as i32;
            let want_y = round_half_up(-dy / 75.0 * 100.0) as i32;
            assert_eq!(s.position, MappedPosition::new(want_x, want_y), "at ({dx}, {dy})");
            dy += 7.5;
        }
        dx += 7.5;
    }
}

#[test]
fn outside_disk_is_rescaled_onto_rim() {
    let b = base();
    for (dx, dy) in [(300.0, 0.0), (150.0, 150.0), (-80.0, 400.0), (-1000.0, -1.0)] {
        let s = b.track(at(dx, dy));
        assert!((s.offset.length() - b.radius).abs() < 1e-9);
        // Direction is preserved
        let dir = DVec2::new(dx, dy).normalize();
        assert!((s.offset.normalize() - dir).length() < 1e-9);
        assert!(s.position.x.abs() <= 100 && s.position.y.abs() <= 100);
    }
}

#[test]
fn diagonal_beyond_rim_maps_to_71() {
    let s = base().track(at(500.0, -500.0));
    assert_eq!(s.position, MappedPosition::new(71, 71));
}

#[test]
fn halves_round_toward_positive_infinity() {
    assert_eq!(round_half_up(0.5), 1.0);
    assert_eq!(round_half_up(-0.5) as i32, 0);
    assert_eq!(round_half_up(-1.5), -1.0);
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.49), -2.0);
}

#[test]
fn degenerate_base_always_maps_to_center() {
    for b in [
        JoystickBase::new(DVec2::ZERO, 0.0),
        JoystickBase::new(DVec2::ZERO, -5.0),
        JoystickBase::new(DVec2::ZERO, f64::NAN),
    ] {
        assert!(b.is_degenerate());
        let s = b.track(DVec2::new(40.0, -40.0));
        assert_eq!(s.position, MappedPosition::CENTER);
        assert_eq!(s.offset, DVec2::ZERO);
    }
}

#[test]
fn handle_px_is_offset_from_base_corner() {
    let b = base();
    assert_eq!(b.handle_px(DVec2::ZERO), DVec2::new(100.0, 100.0));
    assert_eq!(b.handle_px(DVec2::new(-100.0, 30.0)), DVec2::new(0.0, 130.0));
}
