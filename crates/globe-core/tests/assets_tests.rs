// Host-side tests for model loading.
// Loading is async; pollster drives the futures to completion.

use glam::Vec3;
use globe_core::*;
use std::future::Future;

#[test]
fn procedural_models_load() {
    let models = pollster::block_on(load_models(&ProceduralAssets::default()))
        .expect("procedural models load");
    for kind in ModelKind::ALL {
        let mesh = models.get(kind);
        assert!(mesh.validate().is_ok(), "{kind} failed validation");
        assert!(mesh.triangle_count() > 0);
    }
}

#[test]
fn earth_is_a_unit_sphere() {
    let mesh = uv_sphere(EARTH_SEGMENTS, EARTH_RINGS);
    assert_eq!(
        mesh.vertices.len() as u32,
        (EARTH_SEGMENTS + 1) * (EARTH_RINGS + 1)
    );
    assert_eq!(mesh.triangle_count() as u32, EARTH_SEGMENTS * EARTH_RINGS * 2);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert_eq!(v.position, v.normal);
    }
}

#[test]
fn airplane_rests_on_its_belly() {
    let mesh = airplane();
    let lowest = mesh
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::INFINITY, f32::min);
    // nothing below the surface it is placed on
    assert!(lowest.abs() < 1e-6, "lowest={lowest}");
    assert!(mesh.vertices.iter().any(|v| v.normal == [0.0, -1.0, 0.0]));
    // nose points along +Z
    let front = mesh
        .vertices
        .iter()
        .map(|v| v.position[2])
        .fold(f32::NEG_INFINITY, f32::max);
    let back = mesh
        .vertices
        .iter()
        .map(|v| v.position[2])
        .fold(f32::INFINITY, f32::min);
    assert!(front > -back);
}

#[test]
fn coarse_tessellation_is_rejected() {
    let provider = ProceduralAssets {
        earth_segments: 2,
        earth_rings: 1,
    };
    let err = pollster::block_on(load_models(&provider)).unwrap_err();
    assert!(matches!(err, LoadError::Invalid { ref id, .. } if id == "earth"), "{err}");
}

#[test]
fn invalid_mesh_is_reported() {
    let mut mesh = MeshData::default();
    assert!(mesh.validate().is_err());
    mesh.push_box(Vec3::ZERO, Vec3::ONE, [1.0, 1.0, 1.0]);
    assert!(mesh.validate().is_ok());
    mesh.indices.push(999);
    assert!(mesh.validate().is_err());
}

#[test]
fn model_ids_round_trip() {
    assert_eq!(ModelKind::from_id("airplane"), Ok(ModelKind::Airplane));
    assert_eq!(ModelKind::from_id("earth"), Ok(ModelKind::Earth));
    assert_eq!(
        ModelKind::from_id("zeppelin"),
        Err(LoadError::NotFound("zeppelin".into()))
    );
}

struct MissingAssets;

impl AssetProvider for MissingAssets {
    type Handle = ();

    fn load(&self, kind: ModelKind) -> impl Future<Output = Result<(), LoadError>> {
        std::future::ready(Err(LoadError::NotFound(kind.id().to_string())))
    }
}

#[test]
fn first_load_failure_propagates() {
    let err = pollster::block_on(load_models(&MissingAssets)).unwrap_err();
    assert_eq!(err, LoadError::NotFound("airplane".into()));
    assert_eq!(err.to_string(), "model `airplane` not found");
}
