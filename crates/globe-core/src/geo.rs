//! Placement of objects on the surface of a sphere from latitude/longitude.
//!
//! The mapping is Y-up: the north pole sits on +Y and the point at latitude 0,
//! longitude 0 faces the viewer on +Z. Longitude grows eastward toward +X.

use crate::scene::TransformNode;
use glam::{Quat, Vec3};

/// A geographic coordinate in degrees. Positive latitude is north, positive
/// longitude is east. Values are not validated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoCoord {
    pub latitude_deg: f32,
    pub longitude_deg: f32,
}

impl GeoCoord {
    pub const fn new(latitude_deg: f32, longitude_deg: f32) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Polar angle measured from the north pole, in radians.
    #[inline]
    pub fn polar_rad(&self) -> f32 {
        std::f32::consts::FRAC_PI_2 - self.latitude_deg.to_radians()
    }

    /// Azimuth around the Y axis, in radians.
    #[inline]
    pub fn azimuth_rad(&self) -> f32 {
        self.longitude_deg.to_radians()
    }
}

/// How a placed object is rotated to sit belly-down on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationMode {
    /// Shortest rotation taking local +Y onto the outward surface normal.
    #[default]
    SurfaceNormal,
    /// Per-axis Euler assignment driven by longitude only. Latitude has no
    /// effect on the resulting roll.
    LegacyEuler,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(radius: f32) -> Self {
        Self {
            center: Vec3::ZERO,
            radius,
        }
    }

    /// Position and orientation for an object resting at `coord`.
    pub fn place(&self, coord: GeoCoord, mode: OrientationMode) -> (Vec3, Quat) {
        let local = surface_position(coord, self.radius);
        let rotation = match mode {
            OrientationMode::SurfaceNormal => surface_orientation(local),
            OrientationMode::LegacyEuler => legacy_orientation(coord),
        };
        (self.center + local, rotation)
    }
}

/// Cartesian point on a sphere of `radius` centered at the origin.
#[inline]
pub fn surface_position(coord: GeoCoord, radius: f32) -> Vec3 {
    let phi = coord.polar_rad();
    let theta = coord.azimuth_rad();
    Vec3::new(
        phi.sin() * theta.sin() * radius,
        phi.cos() * radius,
        phi.sin() * theta.cos() * radius,
    )
}

/// Rotation that points local +Y along `position` (relative to the sphere
/// center), leaving the object's underside facing the center.
///
/// A zero-length position has no defined normal and yields identity.
pub fn surface_orientation(position: Vec3) -> Quat {
    match position.try_normalize() {
        Some(normal) => Quat::from_rotation_arc(Vec3::Y, normal),
        None => {
            log::debug!("[geo] degenerate surface position; using identity orientation");
            Quat::IDENTITY
        }
    }
}

/// Euler orientation as assigned by the first version of the viewer: pitch
/// from `sin(lon)`, roll from `cos(lon)`.
pub fn legacy_orientation(coord: GeoCoord) -> Quat {
    let theta = coord.azimuth_rad();
    crate::orbit::quat_from_euler_xyz(theta.sin(), 0.0, theta.cos())
}

/// Writes a surface placement into a transform node owned elsewhere.
pub struct SurfacePlacement<'n, N: TransformNode + ?Sized> {
    node: &'n mut N,
    sphere: Sphere,
    mode: OrientationMode,
}

impl<'n, N: TransformNode + ?Sized> SurfacePlacement<'n, N> {
    pub fn new(node: &'n mut N, sphere: Sphere, mode: OrientationMode) -> Self {
        Self { node, sphere, mode }
    }

    pub fn set_position(&mut self, coord: GeoCoord) {
        let (position, rotation) = self.sphere.place(coord, self.mode);
        self.node.set_position(position);
        self.node.set_rotation(rotation);
    }
}
