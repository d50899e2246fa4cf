//! The viewer's scene tree.
//!
//! ```text
//! earth_group (rotation driven by the orbit controller)
//! ├── earth     (unit sphere scaled to the globe radius)
//! └── airplane  (placed on the sphere surface every frame)
//! ```

use crate::assets::ModelKind;
use crate::constants::{AIRPLANE_SCALE, EARTH_MODEL_YAW};
use crate::orbit::OrbitFrame;
use glam::{Mat4, Quat, Vec3};

/// Write access to a node's placement. Anything that stores a position and a
/// rotation can be driven by [`crate::geo::SurfacePlacement`].
pub trait TransformNode {
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Self::default()
        }
    }

    /// Local-to-parent matrix: scale, then rotate, then translate.
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

impl TransformNode for Transform {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

#[derive(Clone, Debug)]
pub struct GlobeScene {
    pub earth_group: Transform,
    pub earth: Transform,
    pub airplane: Transform,
}

impl GlobeScene {
    pub fn new(earth_radius: f32) -> Self {
        let mut earth = Transform::from_scale(earth_radius);
        earth.rotation = Quat::from_rotation_y(EARTH_MODEL_YAW);
        Self {
            earth_group: Transform::default(),
            earth,
            airplane: Transform::from_scale(AIRPLANE_SCALE),
        }
    }

    pub fn apply_orbit(&mut self, frame: &OrbitFrame) {
        self.earth_group.rotation = frame.rotation;
    }

    /// World matrices for every drawable model.
    pub fn draw_list(&self) -> [(ModelKind, Mat4); 2] {
        let group = self.earth_group.matrix();
        [
            (ModelKind::Earth, group * self.earth.matrix()),
            (ModelKind::Airplane, group * self.airplane.matrix()),
        ]
    }
}
