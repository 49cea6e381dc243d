//! Host-side wave field evaluation.
//!
//! This mirrors the vertex stage of `shaders/surface.wgsl` one-to-one so the
//! displacement math can be tested without a GPU. Every function here is pure
//! and allocation-free.

use crate::constants::{
    COLOR_CHANNEL_WEIGHTS, COLOR_VARIATION_SCALE, DEFAULT_AUDIO_GAIN, DEFAULT_RIPPLE_DECAY,
    DEFAULT_RIPPLE_SPEED, DEFAULT_WAVE_AMPLITUDE, DEFAULT_WAVE_FREQUENCY, MAX_RIPPLES,
};
use crate::ripples::RippleSnapshot;
use glam::{Vec2, Vec3};

/// User-tunable wave and audio settings, read by the evaluator every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParameters {
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub ripple_speed: f32,
    pub ripple_decay: f32,
    pub audio_gain: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            wave_amplitude: DEFAULT_WAVE_AMPLITUDE,
            wave_frequency: DEFAULT_WAVE_FREQUENCY,
            ripple_speed: DEFAULT_RIPPLE_SPEED,
            ripple_decay: DEFAULT_RIPPLE_DECAY,
            audio_gain: DEFAULT_AUDIO_GAIN,
        }
    }
}

impl WaveParameters {
    /// `vec4(amplitude, frequency, ripple_speed, ripple_decay)` as the shader reads it.
    #[inline]
    pub fn packed(&self) -> [f32; 4] {
        [
            self.wave_amplitude,
            self.wave_frequency,
            self.ripple_speed,
            self.ripple_decay,
        ]
    }
}

/// Vertical offset at a vertex plus the shading offset derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub z_offset: f32,
    pub color_shift: Vec3,
}

/// Unscaled circular wave of one ripple at `distance` after `elapsed` clock units.
#[inline]
pub fn ripple_wave(distance: f32, elapsed: f32, strength: f32, params: &WaveParameters) -> f32 {
    let progress = elapsed * params.ripple_speed;
    (distance * params.wave_frequency - progress).sin()
        * (-distance * params.ripple_decay).exp()
        * strength
}

/// Contribution of slot `i` to the vertical offset. Zero-strength slots contribute exactly zero.
#[inline]
pub fn slot_contribution(
    vertex: Vec2,
    snapshot: &RippleSnapshot,
    i: usize,
    clock_time: f64,
    params: &WaveParameters,
) -> f32 {
    let strength = snapshot.strength(i);
    if strength <= 0.0 {
        return 0.0;
    }
    let distance = vertex.distance(snapshot.position(i));
    let elapsed = (clock_time - f64::from(snapshot.start_time(i))) as f32;
    ripple_wave(distance, elapsed, strength, params) * params.wave_amplitude
}

/// Shading offset for a given vertical offset.
///
/// Linear in `z_offset`, so its magnitude grows monotonically with `|z_offset|`.
#[inline]
pub fn color_shift(z_offset: f32) -> Vec3 {
    Vec3::from_array(COLOR_CHANNEL_WEIGHTS) * (z_offset * COLOR_VARIATION_SCALE)
}

/// Final vertex colour: base colour plus the ripple shading offset.
#[inline]
pub fn shade(base: Vec3, displacement: &Displacement) -> Vec3 {
    base + displacement.color_shift
}

/// Superpose every active slot at `vertex`.
pub fn displacement(
    vertex: Vec2,
    snapshot: &RippleSnapshot,
    clock_time: f64,
    params: &WaveParameters,
) -> Displacement {
    let mut z_offset = 0.0;
    for i in 0..MAX_RIPPLES {
        z_offset += slot_contribution(vertex, snapshot, i, clock_time, params);
    }
    Displacement {
        z_offset,
        color_shift: color_shift(z_offset),
    }
}
