use std::f32::consts::PI;

pub const BALL_RADIUS: f32 = 0.5;
pub const BALL_MASS: f32 = 1.0;
pub const BALL_SPAWN_HEIGHT: f32 = 5.0;

/// Paddle collider half-extents (x, y, z).
pub const PADDLE_HALF_EXTENTS: [f32; 3] = [1.7, 0.25, 1.7];

/// Pointer-to-world travel range: pointer [-1, 1] maps to +-10 horizontally
/// and +-5 vertically.
pub const PADDLE_TRAVEL_X: f32 = 10.0;
pub const PADDLE_TRAVEL_Y: f32 = 5.0;

/// Maximum paddle yaw at full pointer deflection.
pub const PADDLE_YAW_RANGE: f32 = PI / 5.0;

/// Per-frame exponential smoothing factor for the paddle rotation.
pub const POINTER_SMOOTHING: f32 = 0.2;

/// Impacts faster than this score a point.
pub const SCORE_VELOCITY_THRESHOLD: f32 = 4.0;

/// Impact velocity divided by this gives the cue volume, clamped to [0, 1].
pub const CUE_VOLUME_DIVISOR: f32 = 20.0;

pub const GROUND_HEIGHT: f32 = -10.0;
pub const GROUND_HALF_EXTENT: f32 = 100.0;
pub const GROUND_HALF_THICKNESS: f32 = 0.1;

pub const BACKDROP_DEPTH: f32 = -20.0;
pub const BACKDROP_HALF_SIZE: f32 = 500.0;

pub const CAMERA_POSITION: [f32; 3] = [0.0, 5.0, 12.0];
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x171720;
    pub const BALL: u32 = 0xfff176;
    pub const SCORE: u32 = 0xffffff;
    pub const OVERLAY: u32 = 0xc9c9d4;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
