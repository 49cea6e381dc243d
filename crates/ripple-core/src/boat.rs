//! Looping decorative boat animation.
//!
//! The boat swings across the surface on a sine-eased yo-yo and hops along an
//! arc while its colour cycles through the hue wheel once per second.

use crate::constants::{
    BOAT_ARC_HEIGHT, BOAT_LIGHTNESS, BOAT_SATURATION, BOAT_SCALE, BOAT_START,
    BOAT_SWING_AMPLITUDE, BOAT_SWING_SECS,
};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoatPose {
    pub position: Vec3,
    pub scale: f32,
    pub color: Vec3,
}

impl BoatPose {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), Quat::IDENTITY, self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoatAnimation {
    pub start: Vec3,
    pub amplitude: f32,
    pub swing_secs: f32,
    pub arc_height: f32,
    pub scale: f32,
}

impl Default for BoatAnimation {
    fn default() -> Self {
        Self {
            start: Vec3::from_array(BOAT_START),
            amplitude: BOAT_SWING_AMPLITUDE,
            swing_secs: BOAT_SWING_SECS,
            arc_height: BOAT_ARC_HEIGHT,
            scale: BOAT_SCALE,
        }
    }
}

impl BoatAnimation {
    /// Eased progress in \[0, 1\] along the current leg of the yo-yo.
    pub fn progress(&self, elapsed_secs: f32) -> f32 {
        if self.swing_secs <= 0.0 || !elapsed_secs.is_finite() {
            return 0.0;
        }
        let cycle = (elapsed_secs.max(0.0) / self.swing_secs) % 2.0;
        let linear = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        sine_in_out(linear)
    }

    /// Pose after `elapsed_secs` of animation; `wall_secs` drives the colour cycle.
    pub fn pose(&self, elapsed_secs: f32, wall_secs: f64) -> BoatPose {
        let t = self.progress(elapsed_secs);
        let x = self.start.x + (self.amplitude - self.start.x) * t;
        let y = if self.amplitude != 0.0 {
            (x / self.amplitude * PI).sin() * self.arc_height
        } else {
            0.0
        };
        let hue = wall_secs.rem_euclid(1.0) as f32;
        BoatPose {
            position: Vec3::new(x, y, self.start.z),
            scale: self.scale,
            color: hsl_to_rgb(hue, BOAT_SATURATION, BOAT_LIGHTNESS),
        }
    }
}

#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    -((PI * t).cos() - 1.0) / 2.0
}

/// HSL (all components in \[0, 1\]) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    if s <= 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
