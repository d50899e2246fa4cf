//! Orbit controller: pointer input moves targets, frames chase them.
//!
//! Scroll and drag only touch the *target* camera distance and globe
//! rotation. Each frame `tick` blends the *current* values toward those
//! targets with a factor proportional to elapsed time, clamped to 1 so a long
//! frame lands exactly on the target instead of overshooting.

use crate::constants::*;
use crate::input::PointerButtons;
use glam::{Mat3, Quat, Vec3};
use std::f32::consts::TAU;

/// Tuning for [`OrbitController`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Closest the camera may be asked to get to the globe center.
    pub min_distance: f32,
    /// Farthest the camera may be asked to get from the globe center.
    pub max_distance: f32,
    /// Camera position on the first frame. Its direction is the axis the
    /// camera dollies along for the whole session.
    pub initial_camera_position: Vec3,
    /// Distance the camera settles at before any scrolling.
    pub default_camera_distance: f32,
    /// Globe orientation on the first frame.
    pub initial_rotation: Quat,
    /// Globe orientation the first frames ease into.
    pub default_rotation: Quat,
    /// Wheel delta units per unit of camera distance.
    pub zoom_divisor: f32,
    /// Radians of yaw/pitch per pixel of pointer movement.
    pub drag_sensitivity: f32,
    /// Blend factor per second of elapsed frame time.
    pub approach_rate: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        let [ex, ey, ez] = DEFAULT_EARTH_EULER_XYZ;
        Self {
            min_distance: MIN_CAMERA_DISTANCE,
            max_distance: MAX_CAMERA_DISTANCE,
            initial_camera_position: Vec3::from(INITIAL_CAMERA_POSITION),
            default_camera_distance: DEFAULT_CAMERA_DISTANCE,
            initial_rotation: Quat::IDENTITY,
            default_rotation: quat_from_euler_xyz(ex, ey, ez),
            zoom_divisor: SCROLL_ZOOM_DIVISOR,
            drag_sensitivity: DRAG_RADIANS_PER_PIXEL,
            approach_rate: APPROACH_RATE_PER_SEC,
        }
    }
}

/// Current and target values tracked by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitState {
    pub current_camera_distance: f32,
    pub target_camera_distance: f32,
    pub current_rotation: Quat,
    pub target_rotation: Quat,
}

/// What the renderer applies after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitFrame {
    pub camera_position: Vec3,
    pub rotation: Quat,
}

/// Yaw (Y) and pitch (X) written back into the target rotation by a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAngles {
    pub yaw: f32,
    pub pitch: f32,
}

pub struct OrbitController {
    config: OrbitConfig,
    camera_axis: Vec3,
    state: OrbitState,
}

impl OrbitController {
    pub fn new(mut config: OrbitConfig) -> Self {
        sanitize_distance_bounds(&mut config);
        let camera_axis = config
            .initial_camera_position
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let target_camera_distance = config
            .default_camera_distance
            .clamp(config.min_distance, config.max_distance);
        if target_camera_distance != config.default_camera_distance {
            log::warn!(
                "[orbit] default distance {} outside [{}, {}]; clamped to {}",
                config.default_camera_distance,
                config.min_distance,
                config.max_distance,
                target_camera_distance
            );
        }
        let state = OrbitState {
            current_camera_distance: config.initial_camera_position.length(),
            target_camera_distance,
            current_rotation: config.initial_rotation.normalize(),
            target_rotation: config.default_rotation.normalize(),
        };
        Self {
            config,
            camera_axis,
            state,
        }
    }

    #[inline]
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    #[inline]
    pub fn target_rotation(&self) -> Quat {
        self.state.target_rotation
    }

    /// Wheel input in pixel units; positive moves the camera away.
    pub fn on_scroll(&mut self, delta_y: f32) {
        let next = self.state.target_camera_distance + delta_y / self.config.zoom_divisor;
        self.state.target_camera_distance =
            next.clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Pointer movement in pixels. Ignored unless exactly the primary button
    /// is held. Returns the angles written into the target rotation.
    pub fn on_drag(
        &mut self,
        movement_x: f32,
        movement_y: f32,
        buttons: PointerButtons,
    ) -> Option<DragAngles> {
        if buttons != PointerButtons::PRIMARY {
            return None;
        }
        let [x, y, z] = euler_xyz_from_quat(self.state.target_rotation);
        let yaw = wrap_once(y - movement_x * self.config.drag_sensitivity);
        let pitch = wrap_once(x + movement_y * self.config.drag_sensitivity);
        self.state.target_rotation = quat_from_euler_xyz(pitch, yaw, z).normalize();
        Some(DragAngles { yaw, pitch })
    }

    /// Advance current state toward the targets by `elapsed_seconds` of
    /// frame time.
    pub fn tick(&mut self, elapsed_seconds: f32) -> OrbitFrame {
        let t = (self.config.approach_rate * elapsed_seconds).clamp(0.0, 1.0);
        let s = &mut self.state;
        if t >= 1.0 {
            s.current_camera_distance = s.target_camera_distance;
            s.current_rotation = s.target_rotation;
        } else if t > 0.0 {
            s.current_camera_distance +=
                (s.target_camera_distance - s.current_camera_distance) * t;
            s.current_rotation = s.current_rotation.slerp(s.target_rotation, t).normalize();
        }
        self.frame()
    }

    /// Current camera position and globe rotation without advancing time.
    pub fn frame(&self) -> OrbitFrame {
        OrbitFrame {
            camera_position: self.camera_axis * self.state.current_camera_distance,
            rotation: self.state.current_rotation,
        }
    }
}

/// Makes `[min_distance, max_distance]` usable as a clamp range. A NaN bound
/// falls back to its default and a misordered pair is swapped.
fn sanitize_distance_bounds(config: &mut OrbitConfig) {
    if config.min_distance.is_nan() {
        log::warn!("[orbit] min distance is NaN; using {}", MIN_CAMERA_DISTANCE);
        config.min_distance = MIN_CAMERA_DISTANCE;
    }
    if config.max_distance.is_nan() {
        log::warn!("[orbit] max distance is NaN; using {}", MAX_CAMERA_DISTANCE);
        config.max_distance = MAX_CAMERA_DISTANCE;
    }
    if config.min_distance > config.max_distance {
        log::warn!(
            "[orbit] distance bounds [{}, {}] are misordered; swapping",
            config.min_distance,
            config.max_distance
        );
        std::mem::swap(&mut config.min_distance, &mut config.max_distance);
    }
}

/// Adds or subtracts one full turn when `angle` leaves `[0, 2π)`. A single
/// step only: angles more than a turn out of range stay out of range.
#[inline]
pub fn wrap_once(angle: f32) -> f32 {
    if angle >= TAU {
        angle - TAU
    } else if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Intrinsic X, then Y, then Z rotation (matrix `Rx * Ry * Rz`).
#[inline]
pub fn quat_from_euler_xyz(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_rotation_x(x) * Quat::from_rotation_y(y) * Quat::from_rotation_z(z)
}

/// Inverse of [`quat_from_euler_xyz`]. Y is in `[-π/2, π/2]`; at gimbal lock
/// the Z angle is folded into X.
pub fn euler_xyz_from_quat(q: Quat) -> [f32; 3] {
    let m = Mat3::from_quat(q);
    let m11 = m.x_axis.x;
    let m12 = m.y_axis.x;
    let m13 = m.z_axis.x;
    let m22 = m.y_axis.y;
    let m23 = m.z_axis.y;
    let m32 = m.y_axis.z;
    let m33 = m.z_axis.z;

    let y = m13.clamp(-1.0, 1.0).asin();
    if m13.abs() < 0.999_999_9 {
        [(-m23).atan2(m33), y, (-m12).atan2(m11)]
    } else {
        [m32.atan2(m22), y, 0.0]
    }
}
