use crate::assets::ModelKind;
use crate::clock::FrameClock;
use crate::constants::{EARTH_RADIUS, FLIGHT_LATITUDE_DEG, FLIGHT_LONGITUDE_DEG};
use crate::geo::{GeoCoord, OrientationMode, Sphere, SurfacePlacement};
use crate::input::PointerButtons;
use crate::orbit::{OrbitConfig, OrbitController, OrbitFrame};
use crate::scene::GlobeScene;
use crate::state::Camera;
use glam::Mat4;

/// Everything a host needs to start a viewer.
#[derive(Clone, Debug)]
pub struct GlobeConfig {
    pub sphere_radius: f32,
    pub flight: GeoCoord,
    pub orientation: OrientationMode,
    pub orbit: OrbitConfig,
    pub camera: Camera,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            sphere_radius: EARTH_RADIUS,
            flight: GeoCoord::new(FLIGHT_LATITUDE_DEG, FLIGHT_LONGITUDE_DEG),
            orientation: OrientationMode::default(),
            orbit: OrbitConfig::default(),
            camera: Camera::default(),
        }
    }
}

/// Per-frame result handed to the renderer.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub elapsed_seconds: f32,
    pub orbit: OrbitFrame,
    pub view_proj: Mat4,
    pub draws: [(ModelKind, Mat4); 2],
}

/// One running viewer: controller, scene and camera. Input handlers and
/// `frame` must be called from the same thread and never concurrently.
pub struct GlobeSession {
    orbit: OrbitController,
    scene: GlobeScene,
    camera: Camera,
    sphere: Sphere,
    flight: GeoCoord,
    orientation: OrientationMode,
}

impl GlobeSession {
    pub fn new(config: GlobeConfig) -> Self {
        let sphere = Sphere::new(config.sphere_radius);
        let orbit = OrbitController::new(config.orbit);
        let mut camera = config.camera;
        camera.eye = orbit.frame().camera_position;
        let mut session = Self {
            orbit,
            scene: GlobeScene::new(sphere.radius),
            camera,
            sphere,
            flight: config.flight,
            orientation: config.orientation,
        };
        session.place_airplane();
        session
    }

    #[inline]
    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    #[inline]
    pub fn scene(&self) -> &GlobeScene {
        &self.scene
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn flight(&self) -> GeoCoord {
        self.flight
    }

    pub fn set_flight(&mut self, coord: GeoCoord) {
        self.flight = coord;
        self.place_airplane();
    }

    pub fn on_scroll(&mut self, delta_y: f32) {
        self.orbit.on_scroll(delta_y);
    }

    pub fn on_drag(&mut self, movement_x: f32, movement_y: f32, buttons: PointerButtons) {
        self.orbit.on_drag(movement_x, movement_y, buttons);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    /// Advances one frame using `clock` for elapsed time.
    pub fn frame(&mut self, clock: &mut impl FrameClock) -> FrameOutput {
        let elapsed_seconds = clock.elapsed_seconds();
        let orbit = self.orbit.tick(elapsed_seconds);
        self.camera.eye = orbit.camera_position;
        self.scene.apply_orbit(&orbit);
        self.place_airplane();
        FrameOutput {
            elapsed_seconds,
            orbit,
            view_proj: self.camera.view_proj(),
            draws: self.scene.draw_list(),
        }
    }

    fn place_airplane(&mut self) {
        SurfacePlacement::new(&mut self.scene.airplane, self.sphere, self.orientation)
            .set_position(self.flight);
    }
}
