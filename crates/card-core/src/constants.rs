// Shared mask/card tuning constants used by both web and native frontends.

// Circle field
pub const MAX_CIRCLES: usize = 128; // must match MAX_CIRCLES in shaders/mask.wgsl
pub const TIME_SCALE: f32 = 1000.0; // tick seconds -> orbit phase milliseconds

// Fragment evaluation
pub const ALPHA_DISCARD_EPSILON: f32 = 0.001;
pub const ASPECT_EPSILON: f32 = 0.0001;

// Card body and image planes
pub const CARD_WIDTH: f32 = 2.5;
pub const CARD_HEIGHT: f32 = 3.5;
pub const CARD_DEPTH: f32 = 0.005;
pub const IMAGE_MARGIN: f32 = 0.08; // left/right, top/bottom follows the image aspect
pub const IMAGE_Z_OFFSET: f32 = 0.0015; // keeps image planes off the body surface

// Scene placement (radians, XYZ order)
pub const CARD_ROTATION: [f32; 3] = [-0.18, 0.35, 0.06];

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Background (#111222 in linear space)
pub const CLEAR_COLOR: [f64; 3] = [0.0056, 0.0060, 0.0152];

// Procedural stand-in for the card artwork
pub const DEMO_IMAGE_WIDTH: u32 = 1024;
pub const DEMO_IMAGE_HEIGHT: u32 = 1365;
