use std::f32::consts::PI;

// Shared scene/camera tuning constants used by both web and native frontends.

// Globe layout
pub const EARTH_RADIUS: f32 = 52.0; // world-space radius the airplane is placed on
pub const EARTH_MODEL_YAW: f32 = PI; // aligns the earth model's prime meridian with +Z
pub const AIRPLANE_SCALE: f32 = 0.1; // model units -> world units

// Flight position shown by the viewer (Phoenix, AZ)
pub const FLIGHT_LATITUDE_DEG: f32 = 33.626_671;
pub const FLIGHT_LONGITUDE_DEG: f32 = -112.102_47;

// Camera
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 200.0]; // where the intro zoom starts
pub const DEFAULT_CAMERA_DISTANCE: f32 = 100.0;
pub const MIN_CAMERA_DISTANCE: f32 = 60.0;
pub const MAX_CAMERA_DISTANCE: f32 = 300.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 300.0;

// Default globe orientation as XYZ Euler angles (radians)
pub const DEFAULT_EARTH_EULER_XYZ: [f32; 3] = [PI / 4.0, PI / 1.8, 0.0];

// Interaction
pub const SCROLL_ZOOM_DIVISOR: f32 = 10.0; // wheel pixels per unit of camera distance
pub const DRAG_RADIANS_PER_PIXEL: f32 = 1.0 / 1000.0;
pub const APPROACH_RATE_PER_SEC: f32 = 2.0; // blend factor per second of frame time

// Wheel delta normalization (DOM deltaMode line/page -> pixels)
pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;
pub const WHEEL_PAGE_HEIGHT_PX: f32 = 800.0;

// Lighting
pub const POINT_LIGHT_POSITION: [f32; 3] = [100.0, 100.0, 200.0];
pub const POINT_LIGHT_RANGE: f32 = 299.0;
pub const POINT_LIGHT_INTENSITY: f32 = 2.5;
pub const AMBIENT_INTENSITY: f32 = 0.35;
pub const CLEAR_COLOR: [f64; 3] = [0.01, 0.01, 0.03];

// Procedural model tessellation
pub const EARTH_SEGMENTS: u32 = 64; // longitude slices
pub const EARTH_RINGS: u32 = 32; // latitude stacks
