//! Per-session simulation state owned by the render loop.
//!
//! Bundles the camera, clock, ripple store, wave parameters and input
//! dispatcher so event callbacks and the frame loop share one value instead of
//! ambient globals. Everything is single-threaded; the web frontend holds it
//! in an `Rc<RefCell<_>>`.

use crate::camera::Camera;
use crate::clock::SimulationClock;
use crate::dispatcher::{DispatchOutcome, InputDispatcher, Viewport};
use crate::panel::{PanelAction, ParameterPanel};
use crate::ripples::{RippleSnapshot, RippleStore};
use crate::wave::{displacement, Displacement, WaveParameters};
use glam::Vec2;

/// Everything the surface shader needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub time: f32,
    pub snapshot: RippleSnapshot,
    pub params: WaveParameters,
}

#[derive(Clone, Debug, Default)]
pub struct SimulationContext {
    pub camera: Camera,
    clock: SimulationClock,
    ripples: RippleStore,
    params: WaveParameters,
    panel: ParameterPanel,
    dispatcher: InputDispatcher,
}

impl SimulationContext {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    pub fn with_clock(mut self, clock: SimulationClock) -> Self {
        self.clock = clock;
        self
    }

    /// Tick the clock once and publish this frame's shader inputs.
    pub fn advance_frame(&mut self) -> FrameInputs {
        let time = self.clock.tick();
        FrameInputs {
            time,
            snapshot: self.ripples.snapshot(),
            params: self.params,
        }
    }

    pub fn pointer_moved(&mut self, client: Vec2, viewport: Viewport) -> DispatchOutcome {
        let now = self.clock.now();
        self.dispatcher
            .pointer_moved(client, viewport, &self.camera, &mut self.ripples, now)
    }

    pub fn touch_moved(&mut self, touches: &[Vec2], viewport: Viewport) -> DispatchOutcome {
        let now = self.clock.now();
        self.dispatcher
            .touch_moved(touches, viewport, &self.camera, &mut self.ripples, now)
    }

    /// Insert a ripple directly at a surface-local position.
    pub fn add_ripple(&mut self, position: Vec2) {
        self.ripples.insert(position, self.clock.now());
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    /// Apply a panel action. Returns `true` when a parameter changed.
    pub fn apply_panel(&mut self, action: PanelAction) -> bool {
        self.panel.apply(&mut self.params, action)
    }

    /// Displacement at `vertex` for the current clock and ripples.
    pub fn evaluate(&self, vertex: Vec2) -> Displacement {
        displacement(vertex, &self.ripples.snapshot(), self.clock.now_f64(), &self.params)
    }

    pub fn params(&self) -> &WaveParameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut WaveParameters {
        &mut self.params
    }

    pub fn panel(&self) -> &ParameterPanel {
        &self.panel
    }

    pub fn ripples(&self) -> &RippleStore {
        &self.ripples
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn dispatcher(&self) -> &InputDispatcher {
        &self.dispatcher
    }
}
