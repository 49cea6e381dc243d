// Shared simulation and scene tuning constants used by the web frontend and tests.

// Ripple store
pub const MAX_RIPPLES: usize = 5;
pub const RIPPLE_INITIAL_STRENGTH: f32 = 1.0;

// Simulation clock (advance per rendered frame, not per second)
pub const CLOCK_STEP: f32 = 0.1;

// Input gating (normalized device units)
pub const MOVEMENT_THRESHOLD: f32 = 0.02;

// Below this the pointer ray counts as parallel to the surface plane
pub const PARALLEL_EPSILON: f32 = 1e-6;

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Surface mesh (world units / grid segments)
pub const SURFACE_SIZE: f32 = 3.0;
pub const SURFACE_SEGMENTS: u32 = 32;
pub const SURFACE_PLANE_Z: f32 = 0.0;

// Shading
pub const BASE_COLOR_HEX: u32 = 0xfafafc;
pub const COLOR_VARIATION_SCALE: f32 = 10.0;
pub const COLOR_CHANNEL_WEIGHTS: [f32; 3] = [0.5, 0.3, 1.0];

// Default wave parameters
pub const DEFAULT_WAVE_AMPLITUDE: f32 = 0.4;
pub const DEFAULT_WAVE_FREQUENCY: f32 = 10.0;
pub const DEFAULT_RIPPLE_SPEED: f32 = 1.0;
pub const DEFAULT_RIPPLE_DECAY: f32 = 10.0;
pub const DEFAULT_AUDIO_GAIN: f32 = 0.1;

// Decorative boat
pub const BOAT_START: [f32; 3] = [-3.0, 0.0, 0.5];
pub const BOAT_SWING_AMPLITUDE: f32 = 3.0; // x travels from BOAT_START[0] to this
pub const BOAT_SWING_SECS: f32 = 3.0; // one way; the loop yo-yos
pub const BOAT_ARC_HEIGHT: f32 = 0.8;
pub const BOAT_SCALE: f32 = 0.1;
pub const BOAT_SATURATION: f32 = 0.7;
pub const BOAT_LIGHTNESS: f32 = 0.5;

#[inline]
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[inline]
pub fn base_color() -> [f32; 3] {
    hex_to_rgb(BASE_COLOR_HEX)
}
