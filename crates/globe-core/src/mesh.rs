use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Indexed triangle list in model space.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks the mesh can be drawn as an indexed triangle list.
    pub fn validate(&self) -> Result<(), String> {
        if self.vertices.is_empty() || self.indices.is_empty() {
            return Err("mesh has no geometry".into());
        }
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            ));
        }
        let n = self.vertices.len() as u32;
        if let Some(bad) = self.indices.iter().find(|&&i| i >= n) {
            return Err(format!("index {bad} out of range for {n} vertices"));
        }
        Ok(())
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for c in corners {
            self.vertices.push(Vertex {
                position: c.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned box with flat-shaded faces wound counter-clockwise.
    pub fn push_box(&mut self, center: Vec3, half: Vec3, color: [f32; 3]) {
        let faces = [
            (Vec3::X, Vec3::Y, Vec3::Z),
            (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (Vec3::NEG_Y, Vec3::NEG_Z, Vec3::X),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];
        for (n, u, v) in faces {
            // u x v == n, so (-u,-v) -> (u,-v) -> (u,v) -> (-u,v) is CCW seen from outside
            let c = center + n * half;
            let du = u * half;
            let dv = v * half;
            self.push_quad([c - du - dv, c + du - dv, c + du + dv, c - du + dv], n, color);
        }
    }
}

/// Unit sphere tessellated into `segments` longitude slices and `rings`
/// latitude stacks, colored by latitude (ice caps, land bands, ocean).
pub fn uv_sphere(segments: u32, rings: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let p = Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos());
            mesh.vertices.push(Vertex {
                position: p.to_array(),
                normal: p.to_array(),
                color: surface_color(phi, theta),
            });
        }
    }
    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}

fn surface_color(phi: f32, theta: f32) -> [f32; 3] {
    let lat = PI / 2.0 - phi;
    if lat.abs() > 1.22 {
        return [0.92, 0.94, 0.97];
    }
    // Low-frequency bands stand in for continents.
    let land = (theta * 3.0).sin() * (lat * 4.0).cos() + (theta * 5.0 + lat * 2.0).sin() * 0.5;
    if land > 0.55 {
        [0.22, 0.52, 0.24]
    } else {
        [0.08, 0.24, 0.55]
    }
}

/// Low-poly airplane, nose toward +Z, about 20 units long. The origin sits
/// under the fuselage so the belly rests at y = 0.
pub fn airplane() -> MeshData {
    const BODY: [f32; 3] = [0.85, 0.86, 0.9];
    const TRIM: [f32; 3] = [0.75, 0.15, 0.12];
    const FUSELAGE_HALF_HEIGHT: f32 = 1.2;
    let up = Vec3::Y * FUSELAGE_HALF_HEIGHT;
    let mut mesh = MeshData::default();
    mesh.push_box(up, Vec3::new(1.2, FUSELAGE_HALF_HEIGHT, 10.0), BODY);
    mesh.push_box(up + Vec3::new(0.0, 0.0, 11.0), Vec3::new(0.8, 0.8, 1.0), BODY);
    mesh.push_box(up + Vec3::new(0.0, -0.2, 1.0), Vec3::new(9.0, 0.25, 2.0), BODY);
    mesh.push_box(up + Vec3::new(0.0, 0.0, -8.5), Vec3::new(3.5, 0.2, 1.2), BODY);
    mesh.push_box(up + Vec3::new(0.0, 2.6, -8.5), Vec3::new(0.2, 1.5, 1.2), TRIM);
    mesh
}
