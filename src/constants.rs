// Web frontend wiring and presentation constants.
//
// Simulation tuning lives in `ripple_core::constants`; this file only holds
// what the browser host needs.

// DOM
pub const CANVAS_ID: &str = "ripple-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "overlay-ok";
pub const PARAMS_OVERLAY_ID: &str = "params-overlay";

// Assets
pub const SURFACE_TEXTURE_URL: &str = "./assets/textures/mixjue.jpg";
pub const BACKGROUND_AUDIO_URL: &str = "./sound/BGM_Algea.mp3";

// Scene background (white)
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

// Boat lighting: direction towards a light at (5, 5, 5), plus ambient
pub const LIGHT_DIRECTION: [f32; 3] = [5.0, 5.0, 5.0];
pub const AMBIENT_INTENSITY: f32 = 0.5;

// Skip gain writes smaller than this to avoid redundant AudioParam updates
pub const AUDIO_GAIN_EPSILON: f32 = 1e-4;
