use crate::constants::CLOCK_STEP;

/// Frame-counted simulation time.
///
/// Advances by a fixed step per rendered frame, so wave speed follows the
/// display refresh rate rather than wall-clock time. Never reset.
///
/// Accumulates in `f64`; `now()` and `tick()` narrow to `f32` for the shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationClock {
    time: f64,
    step: f64,
    frames: u64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::with_step(CLOCK_STEP)
    }

    /// Negative or non-finite steps would break monotonicity and are treated as zero.
    pub fn with_step(step: f32) -> Self {
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
        Self {
            time: 0.0,
            step: f64::from(step),
            frames: 0,
        }
    }

    /// Advance one frame and return the new time.
    pub fn tick(&mut self) -> f32 {
        self.time += self.step;
        self.frames += 1;
        self.now()
    }

    #[inline]
    pub fn now(&self) -> f32 {
        self.time as f32
    }

    /// Full-precision time, for host-side evaluation.
    #[inline]
    pub fn now_f64(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step as f32
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
