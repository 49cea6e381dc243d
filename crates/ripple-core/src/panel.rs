//! Tunable-parameter panel model.
//!
//! The panel is the only writer of [`WaveParameters`]. It owns each field's
//! declared range and clamps every change, so the evaluator can trust
//! whatever it reads. Keyboard bindings used by the web frontend live here as
//! a pure mapping so they can be tested on the host.

use crate::wave::WaveParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    WaveAmplitude,
    WaveFrequency,
    RippleSpeed,
    RippleDecay,
    AudioGain,
}

impl ParamId {
    pub const ALL: [ParamId; 5] = [
        ParamId::WaveAmplitude,
        ParamId::WaveFrequency,
        ParamId::RippleSpeed,
        ParamId::RippleDecay,
        ParamId::AudioGain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamId::WaveAmplitude => "Wave Amplitude",
            ParamId::WaveFrequency => "Wave Frequency",
            ParamId::RippleSpeed => "Ripple Speed",
            ParamId::RippleDecay => "Ripple Decay",
            ParamId::AudioGain => "Sound",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn get(self, params: &WaveParameters) -> f32 {
        match self {
            ParamId::WaveAmplitude => params.wave_amplitude,
            ParamId::WaveFrequency => params.wave_frequency,
            ParamId::RippleSpeed => params.ripple_speed,
            ParamId::RippleDecay => params.ripple_decay,
            ParamId::AudioGain => params.audio_gain,
        }
    }

    fn field_mut(self, params: &mut WaveParameters) -> &mut f32 {
        match self {
            ParamId::WaveAmplitude => &mut params.wave_amplitude,
            ParamId::WaveFrequency => &mut params.wave_frequency,
            ParamId::RippleSpeed => &mut params.ripple_speed,
            ParamId::RippleDecay => &mut params.ripple_decay,
            ParamId::AudioGain => &mut params.audio_gain,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// NaN clamps to `min`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Round onto the step grid anchored at `min`, then clamp.
    #[inline]
    pub fn snap(&self, value: f32) -> f32 {
        if self.step <= 0.0 {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

/// Keyboard-driven panel actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    Nudge(ParamId, i32),
    Reset,
    ToggleHelp,
}

/// Multiplier applied to nudges while Shift is held.
pub const COARSE_NUDGE: i32 = 10;

/// Map a `KeyboardEvent.key` value onto a panel action.
pub fn action_for_key(key: &str, shift: bool) -> Option<PanelAction> {
    let scale = if shift { COARSE_NUDGE } else { 1 };
    let nudge = |id, dir: i32| Some(PanelAction::Nudge(id, dir * scale));
    match key {
        "q" | "Q" => nudge(ParamId::WaveAmplitude, 1),
        "a" | "A" => nudge(ParamId::WaveAmplitude, -1),
        "w" | "W" => nudge(ParamId::WaveFrequency, 1),
        "s" | "S" => nudge(ParamId::WaveFrequency, -1),
        "e" | "E" => nudge(ParamId::RippleSpeed, 1),
        "d" | "D" => nudge(ParamId::RippleSpeed, -1),
        "r" | "R" => nudge(ParamId::RippleDecay, 1),
        "f" | "F" => nudge(ParamId::RippleDecay, -1),
        "ArrowUp" => nudge(ParamId::AudioGain, 1),
        "ArrowDown" => nudge(ParamId::AudioGain, -1),
        "0" => Some(PanelAction::Reset),
        "h" | "H" => Some(PanelAction::ToggleHelp),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterPanel {
    ranges: [ParamRange; 5],
    defaults: WaveParameters,
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self {
            ranges: [
                ParamRange::new(0.0, 2.0, 0.01),
                ParamRange::new(0.0, 20.0, 0.01),
                ParamRange::new(0.0, 5.0, 0.01),
                ParamRange::new(5.0, 10.0, 0.01),
                ParamRange::new(0.0, 1.0, 0.1),
            ],
            defaults: WaveParameters::default(),
        }
    }
}

impl ParameterPanel {
    pub fn range(&self, id: ParamId) -> ParamRange {
        self.ranges[id.index()]
    }

    pub fn get(&self, params: &WaveParameters, id: ParamId) -> f32 {
        id.get(params)
    }

    /// Store `value` clamped to the field's range and return what was stored.
    pub fn set(&self, params: &mut WaveParameters, id: ParamId, value: f32) -> f32 {
        let v = self.range(id).clamp(value);
        *id.field_mut(params) = v;
        v
    }

    /// Move a field by whole steps, snapped to the step grid and clamped.
    pub fn nudge(&self, params: &mut WaveParameters, id: ParamId, steps: i32) -> f32 {
        let range = self.range(id);
        let v = range.snap(id.get(params) + steps as f32 * range.step);
        *id.field_mut(params) = v;
        v
    }

    pub fn reset(&self, params: &mut WaveParameters) {
        *params = self.defaults;
    }

    /// Apply a keyboard action. Returns `true` when a parameter changed.
    pub fn apply(&self, params: &mut WaveParameters, action: PanelAction) -> bool {
        let before = *params;
        match action {
            PanelAction::Nudge(id, steps) => {
                self.nudge(params, id, steps);
            }
            PanelAction::Reset => self.reset(params),
            PanelAction::ToggleHelp => {}
        }
        before != *params
    }
}
