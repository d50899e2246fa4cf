pub mod assets;
pub mod clock;
pub mod constants;
pub mod geo;
pub mod input;
pub mod mesh;
pub mod orbit;
pub mod scene;
pub mod session;
pub mod state;

pub use assets::*;
pub use clock::*;
pub use constants::*;
pub use geo::*;
pub use input::*;
pub use mesh::*;
pub use orbit::*;
pub use scene::*;
pub use session::*;
pub use state::*;
