// Host-side tests for the orbit controller.

use glam::{Quat, Vec3};
use globe_core::*;
use std::f32::consts::{FRAC_PI_2, TAU};

fn identity_controller() -> OrbitController {
    OrbitController::new(OrbitConfig {
        default_rotation: Quat::IDENTITY,
        ..OrbitConfig::default()
    })
}

#[test]
fn scroll_moves_target_by_a_tenth_of_delta() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    assert_eq!(orbit.state().target_camera_distance, 100.0);
    orbit.on_scroll(50.0);
    assert!((orbit.state().target_camera_distance - 105.0).abs() < 1e-6);
    orbit.on_scroll(-20.0);
    assert!((orbit.state().target_camera_distance - 103.0).abs() < 1e-5);
}

#[test]
fn scroll_never_leaves_distance_bounds() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    for _ in 0..100 {
        orbit.on_scroll(1000.0);
        assert!(orbit.state().target_camera_distance <= MAX_CAMERA_DISTANCE);
    }
    assert_eq!(orbit.state().target_camera_distance, MAX_CAMERA_DISTANCE);
    for _ in 0..100 {
        orbit.on_scroll(-1000.0);
        assert!(orbit.state().target_camera_distance >= MIN_CAMERA_DISTANCE);
    }
    assert_eq!(orbit.state().target_camera_distance, MIN_CAMERA_DISTANCE);
}

#[test]
fn scroll_does_not_move_current_distance() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    let before = orbit.state().current_camera_distance;
    orbit.on_scroll(300.0);
    assert_eq!(orbit.state().current_camera_distance, before);
}

#[test]
fn default_distance_outside_bounds_is_clamped() {
    let orbit = OrbitController::new(OrbitConfig {
        default_camera_distance: 1000.0,
        ..OrbitConfig::default()
    });
    assert_eq!(orbit.state().target_camera_distance, MAX_CAMERA_DISTANCE);
}

#[test]
fn misordered_distance_bounds_are_swapped() {
    let mut orbit = OrbitController::new(OrbitConfig {
        min_distance: MAX_CAMERA_DISTANCE,
        max_distance: MIN_CAMERA_DISTANCE,
        ..OrbitConfig::default()
    });
    assert_eq!(orbit.config().min_distance, MIN_CAMERA_DISTANCE);
    assert_eq!(orbit.config().max_distance, MAX_CAMERA_DISTANCE);
    assert_eq!(orbit.state().target_camera_distance, DEFAULT_CAMERA_DISTANCE);
    orbit.on_scroll(10_000.0);
    assert_eq!(orbit.state().target_camera_distance, MAX_CAMERA_DISTANCE);
    orbit.on_scroll(-10_000.0);
    assert_eq!(orbit.state().target_camera_distance, MIN_CAMERA_DISTANCE);
}

#[test]
fn nan_distance_bound_falls_back_to_default() {
    let mut orbit = OrbitController::new(OrbitConfig {
        min_distance: f32::NAN,
        max_distance: f32::NAN,
        ..OrbitConfig::default()
    });
    assert_eq!(orbit.config().min_distance, MIN_CAMERA_DISTANCE);
    assert_eq!(orbit.config().max_distance, MAX_CAMERA_DISTANCE);
    orbit.on_scroll(-10_000.0);
    assert_eq!(orbit.state().target_camera_distance, MIN_CAMERA_DISTANCE);
}

#[test]
fn drag_requires_exactly_the_primary_button() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    let before = orbit.target_rotation();
    for buttons in [
        PointerButtons::NONE,
        PointerButtons::SECONDARY,
        PointerButtons::AUXILIARY,
        PointerButtons::PRIMARY | PointerButtons::SECONDARY,
    ] {
        assert!(orbit.on_drag(500.0, 500.0, buttons).is_none());
        assert_eq!(orbit.target_rotation(), before);
    }
    assert!(orbit.on_drag(500.0, 500.0, PointerButtons::PRIMARY).is_some());
    assert_ne!(orbit.target_rotation(), before);
}

#[test]
fn drag_decreases_yaw_by_movement_over_a_thousand() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    let yaw_before = euler_xyz_from_quat(orbit.target_rotation())[1];
    let applied = orbit
        .on_drag(1000.0, 0.0, PointerButtons::PRIMARY)
        .expect("primary drag applies");
    assert!(
        (applied.yaw - wrap_once(yaw_before - 1.0)).abs() < 1e-5,
        "before={yaw_before} after={}",
        applied.yaw
    );
}

#[test]
fn drag_wraps_yaw_into_one_turn() {
    let mut orbit = identity_controller();
    let applied = orbit
        .on_drag(1000.0, 0.0, PointerButtons::PRIMARY)
        .expect("primary drag applies");
    assert!((applied.yaw - (TAU - 1.0)).abs() < 1e-5);
    assert!((0.0..TAU).contains(&applied.yaw));
    assert!((0.0..TAU).contains(&applied.pitch));
    // same physical rotation as yawing by -1 rad
    let expected = Quat::from_rotation_y(-1.0);
    assert!(orbit.target_rotation().dot(expected).abs() > 1.0 - 1e-5);
}

#[test]
fn vertical_drag_adds_pitch() {
    let mut orbit = identity_controller();
    let applied = orbit
        .on_drag(0.0, 500.0, PointerButtons::PRIMARY)
        .expect("primary drag applies");
    assert_eq!(applied.yaw, 0.0);
    assert!((applied.pitch - 0.5).abs() < 1e-6);
    let expected = Quat::from_rotation_x(0.5);
    assert!(orbit.target_rotation().dot(expected).abs() > 1.0 - 1e-5);
}

#[test]
fn wrap_is_a_single_step() {
    assert_eq!(wrap_once(1.0), 1.0);
    assert!((wrap_once(-1.0) - (TAU - 1.0)).abs() < 1e-6);
    assert!((wrap_once(TAU + 0.5) - 0.5).abs() < 1e-6);
    assert_eq!(wrap_once(TAU), 0.0);
    // more than a turn out of range is only partially normalized
    assert!((wrap_once(-3.0 * TAU) - (-2.0 * TAU)).abs() < 1e-5);
}

#[test]
fn euler_extraction_inverts_composition() {
    let q = quat_from_euler_xyz(0.3, -0.7, 1.1);
    let [x, y, z] = euler_xyz_from_quat(q);
    assert!((x - 0.3).abs() < 1e-4, "x={x}");
    assert!((y + 0.7).abs() < 1e-4, "y={y}");
    assert!((z - 1.1).abs() < 1e-4, "z={z}");
}

#[test]
fn euler_extraction_at_gimbal_lock_rebuilds_same_rotation() {
    let q = quat_from_euler_xyz(0.4, FRAC_PI_2, 0.2);
    let [x, y, z] = euler_xyz_from_quat(q);
    assert!((y - FRAC_PI_2).abs() < 1e-2, "y={y}");
    let rebuilt = quat_from_euler_xyz(x, y, z);
    assert!(rebuilt.dot(q).abs() > 1.0 - 1e-4);
}

#[test]
fn tick_approaches_target_distance_monotonically() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    let target = orbit.state().target_camera_distance;
    let mut prev = orbit.state().current_camera_distance;
    assert!(prev > target);
    for _ in 0..1000 {
        orbit.tick(1.0 / 60.0);
        let d = orbit.state().current_camera_distance;
        assert!(d <= prev, "distance moved away: {prev} -> {d}");
        assert!(d >= target, "overshoot: {d} < {target}");
        prev = d;
    }
    assert!((prev - target).abs() < 1e-3);
}

#[test]
fn tick_converges_rotation() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    let target = orbit.target_rotation();
    for _ in 0..1000 {
        orbit.tick(1.0 / 60.0);
    }
    assert!(orbit.state().current_rotation.angle_between(target) < 2e-3);
}

#[test]
fn tick_zero_is_idempotent() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    orbit.tick(0.1);
    let before = *orbit.state();
    orbit.tick(0.0);
    orbit.tick(0.0);
    assert_eq!(*orbit.state(), before);
}

#[test]
fn tick_snaps_once_blend_factor_reaches_one() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    orbit.on_scroll(50.0);
    orbit.on_drag(120.0, -40.0, PointerButtons::PRIMARY);
    let frame = orbit.tick(0.5);
    let s = *orbit.state();
    assert_eq!(s.current_camera_distance, s.target_camera_distance);
    assert_eq!(s.current_rotation, s.target_rotation);
    assert_eq!(frame.rotation, s.target_rotation);

    // long frames do not overshoot either
    orbit.on_scroll(-400.0);
    orbit.tick(30.0);
    let s = *orbit.state();
    assert_eq!(s.current_camera_distance, s.target_camera_distance);
}

#[test]
fn camera_moves_along_initial_axis() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    assert_eq!(orbit.frame().camera_position, Vec3::new(0.0, 0.0, 200.0));
    let frame = orbit.tick(1.0);
    assert_eq!(frame.camera_position, Vec3::new(0.0, 0.0, 100.0));

    let mut tilted = OrbitController::new(OrbitConfig {
        initial_camera_position: Vec3::new(0.0, 200.0, 0.0),
        ..OrbitConfig::default()
    });
    let frame = tilted.tick(1.0);
    assert!((frame.camera_position - Vec3::new(0.0, 100.0, 0.0)).length() < 1e-4);
}

#[test]
fn rotations_stay_unit_length() {
    let mut orbit = OrbitController::new(OrbitConfig::default());
    for i in 0..500 {
        let dx = ((i * 37) % 91) as f32 - 45.0;
        let dy = ((i * 53) % 71) as f32 - 35.0;
        orbit.on_drag(dx, dy, PointerButtons::PRIMARY);
        orbit.tick(1.0 / 60.0);
        let s = orbit.state();
        assert!((s.target_rotation.length() - 1.0).abs() < 1e-4);
        assert!((s.current_rotation.length() - 1.0).abs() < 1e-4);
    }
}
