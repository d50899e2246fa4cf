//! Model loading seam.
//!
//! Hosts await [`load_models`] once before entering the frame loop. The
//! provider decides what a handle is; the core never looks inside it.

use crate::constants::{EARTH_RINGS, EARTH_SEGMENTS};
use crate::mesh::{self, MeshData};
use std::fmt;
use std::future::Future;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Airplane,
    Earth,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Airplane, ModelKind::Earth];

    pub fn id(self) -> &'static str {
        match self {
            ModelKind::Airplane => "airplane",
            ModelKind::Earth => "earth",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, LoadError> {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == id)
            .ok_or_else(|| LoadError::NotFound(id.to_string()))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LoadError {
    #[error("model `{0}` not found")]
    NotFound(String),
    #[error("model `{id}` is invalid: {reason}")]
    Invalid { id: String, reason: String },
}

/// Source of renderable models.
pub trait AssetProvider {
    type Handle;

    fn load(&self, kind: ModelKind) -> impl Future<Output = Result<Self::Handle, LoadError>>;
}

#[derive(Clone, Debug)]
pub struct Models<H> {
    pub airplane: H,
    pub earth: H,
}

impl<H> Models<H> {
    pub fn get(&self, kind: ModelKind) -> &H {
        match kind {
            ModelKind::Airplane => &self.airplane,
            ModelKind::Earth => &self.earth,
        }
    }
}

/// Loads every model the viewer draws. The first failure is returned as is.
pub async fn load_models<P: AssetProvider>(provider: &P) -> Result<Models<P::Handle>, LoadError> {
    let airplane = provider.load(ModelKind::Airplane).await?;
    let earth = provider.load(ModelKind::Earth).await?;
    log::info!("[assets] loaded {} and {}", ModelKind::Airplane, ModelKind::Earth);
    Ok(Models { airplane, earth })
}

/// Builds meshes in code instead of fetching files.
#[derive(Clone, Copy, Debug)]
pub struct ProceduralAssets {
    pub earth_segments: u32,
    pub earth_rings: u32,
}

impl Default for ProceduralAssets {
    fn default() -> Self {
        Self {
            earth_segments: EARTH_SEGMENTS,
            earth_rings: EARTH_RINGS,
        }
    }
}

impl ProceduralAssets {
    fn build(&self, kind: ModelKind) -> Result<MeshData, LoadError> {
        let mesh = match kind {
            ModelKind::Airplane => mesh::airplane(),
            ModelKind::Earth => {
                if self.earth_segments < 3 || self.earth_rings < 2 {
                    return Err(LoadError::Invalid {
                        id: kind.id().to_string(),
                        reason: format!(
                            "tessellation {}x{} is too coarse",
                            self.earth_segments, self.earth_rings
                        ),
                    });
                }
                mesh::uv_sphere(self.earth_segments, self.earth_rings)
            }
        };
        mesh.validate().map_err(|reason| LoadError::Invalid {
            id: kind.id().to_string(),
            reason,
        })?;
        log::debug!("[assets] {} -> {} triangles", kind, mesh.triangle_count());
        Ok(mesh)
    }
}

impl AssetProvider for ProceduralAssets {
    type Handle = MeshData;

    fn load(&self, kind: ModelKind) -> impl Future<Output = Result<MeshData, LoadError>> {
        std::future::ready(self.build(kind))
    }
}
