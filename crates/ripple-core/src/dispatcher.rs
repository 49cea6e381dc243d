//! Pointer/touch movement to ripple insertion.
//!
//! Each move event is normalized to device coordinates, gated by a movement
//! threshold against the last sample that produced a ripple, mapped onto the
//! surface plane and mirrored before insertion.

use crate::camera::Camera;
use crate::constants::{MOVEMENT_THRESHOLD, SURFACE_PLANE_Z};
use crate::error::MapError;
use crate::mapper::project_to_surface;
use crate::ripples::RippleStore;
use glam::Vec2;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Client pixels to device-normalized coordinates, +Y up.
    ///
    /// Returns `None` for a degenerate viewport.
    #[inline]
    pub fn normalize(&self, client: Vec2) -> Option<Vec2> {
        if !self.is_valid() {
            return None;
        }
        Some(Vec2::new(
            (client.x / self.width) * 2.0 - 1.0,
            -(client.y / self.height) * 2.0 + 1.0,
        ))
    }
}

/// Latest normalized pointer sample and the sample that last passed the gate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub previous: Vec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchState {
    #[default]
    Idle,
    Tracking,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DispatchOutcome {
    /// No usable sample (empty touch list or degenerate viewport).
    Ignored,
    /// Moved less than the threshold since the last accepted sample.
    Debounced,
    /// Passed the gate but could not be mapped onto the surface.
    Unmappable(MapError),
    /// A ripple was inserted at this surface-local position.
    Inserted(Vec2),
}

#[derive(Clone, Debug)]
pub struct InputDispatcher {
    state: DispatchState,
    pointer: PointerState,
    threshold: f32,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::with_threshold(MOVEMENT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            state: DispatchState::Idle,
            pointer: PointerState::default(),
            threshold,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Handle a pointer-move at `client` pixels.
    pub fn pointer_moved(
        &mut self,
        client: Vec2,
        viewport: Viewport,
        camera: &Camera,
        store: &mut RippleStore,
        now: f32,
    ) -> DispatchOutcome {
        let Some(ndc) = viewport.normalize(client) else {
            return DispatchOutcome::Ignored;
        };
        self.state = DispatchState::Tracking;
        self.pointer.current = ndc;

        if self.pointer.previous.distance(ndc) <= self.threshold {
            return DispatchOutcome::Debounced;
        }
        self.pointer.previous = ndc;

        match project_to_surface(ndc, camera, SURFACE_PLANE_Z) {
            Ok(p) => {
                let center = -p;
                store.insert(center, now);
                DispatchOutcome::Inserted(center)
            }
            Err(e) => {
                log::debug!("[input] skipping ripple at ndc ({:.3}, {:.3}): {}", ndc.x, ndc.y, e);
                DispatchOutcome::Unmappable(e)
            }
        }
    }

    /// Handle a touch-move. Only the first touch point is consulted.
    pub fn touch_moved(
        &mut self,
        touches: &[Vec2],
        viewport: Viewport,
        camera: &Camera,
        store: &mut RippleStore,
        now: f32,
    ) -> DispatchOutcome {
        match touches.first() {
            Some(&first) => self.pointer_moved(first, viewport, camera, store, now),
            None => DispatchOutcome::Ignored,
        }
    }
}
