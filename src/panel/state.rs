#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    params::{InputId, ParamId, NUM_INPUTS, NUM_PARAMS, PARAMS},
    ControlSource,
};

/// Plain-value panel: knob and switch positions plus whatever is patched
/// into the CV jacks.
///
/// Setting a control clamps it to its range the way a host would.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    params: [f32; NUM_PARAMS],
    cv: [Option<f32>; NUM_INPUTS],
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    /// Every control at its default, nothing patched.
    pub fn new() -> Self {
        Self {
            params: PARAMS.map(|spec| spec.default),
            cv: [None; NUM_INPUTS],
        }
    }

    pub fn get(&self, id: ParamId) -> f32 {
        self.params[id.index()]
    }

    /// Set a control, clamped to its range. Returns the stored value.
    pub fn set_param(&mut self, id: ParamId, value: f32) -> f32 {
        let spec = id.spec();
        let stored = if value.is_nan() {
            spec.default
        } else {
            spec.clamp(value)
        };
        self.params[id.index()] = stored;
        stored
    }

    /// Move a control by `delta`, clamped to its range.
    pub fn nudge(&mut self, id: ParamId, delta: f32) -> f32 {
        self.set_param(id, self.get(id) + delta)
    }

    /// Step a switch by `step` positions, wrapping around.
    pub fn step_switch(&mut self, id: ParamId, step: i32) -> f32 {
        let spec = id.spec();
        let positions = spec.labels.len().max(1) as i32;
        let next = (self.get(id) as i32 + step).rem_euclid(positions);
        self.set_param(id, next as f32)
    }

    pub fn cv(&self, input: InputId) -> Option<f32> {
        self.cv[input.index()]
    }

    pub fn patch_cv(&mut self, input: InputId, volts: f32) {
        self.cv[input.index()] = Some(volts);
    }

    pub fn unpatch(&mut self, input: InputId) {
        self.cv[input.index()] = None;
    }

    /// Back to defaults. Cables stay patched.
    pub fn reset(&mut self) {
        self.params = PARAMS.map(|spec| spec.default);
    }
}

impl ControlSource for PanelState {
    fn param(&self, id: ParamId) -> f32 {
        self.get(id)
    }

    fn normal_voltage(&self, input: InputId, normal: f32) -> f32 {
        self.cv(input).unwrap_or(normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_defaults() {
        let panel = PanelState::new();
        assert_eq!(panel.get(ParamId::Attenuverter), 1.0);
        assert_eq!(panel.get(ParamId::Offset), 0.0);
        assert_eq!(panel.get(ParamId::OffsetCvTrim), 1.0);
        assert_eq!(panel.get(ParamId::Order), 0.0);
        assert_eq!(panel.cv(InputId::OffsetCv), None);
    }

    #[test]
    fn set_param_clamps() {
        let mut panel = PanelState::new();
        assert_eq!(panel.set_param(ParamId::Offset, 12.0), 10.0);
        assert_eq!(panel.set_param(ParamId::Attenuverter, -3.0), -2.0);
        assert_eq!(panel.set_param(ParamId::Clip, 1.0), 1.0);
        assert_eq!(panel.set_param(ParamId::Clip, f32::NAN), 0.0);
    }

    #[test]
    fn step_switch_wraps() {
        let mut panel = PanelState::new();
        assert_eq!(panel.step_switch(ParamId::Order, -1), 11.0);
        assert_eq!(panel.step_switch(ParamId::Order, 1), 0.0);
        assert_eq!(panel.step_switch(ParamId::RectifyDirection, 3), 1.0);
    }

    #[test]
    fn unpatched_jacks_read_the_normal() {
        let mut panel = PanelState::new();
        assert_eq!(panel.normal_voltage(InputId::AttenuverterCv, 0.0), 0.0);

        panel.patch_cv(InputId::AttenuverterCv, 2.5);
        assert_eq!(panel.normal_voltage(InputId::AttenuverterCv, 0.0), 2.5);

        panel.unpatch(InputId::AttenuverterCv);
        assert_eq!(panel.normal_voltage(InputId::AttenuverterCv, 0.0), 0.0);
    }

    #[test]
    fn reset_keeps_cables() {
        let mut panel = PanelState::new();
        panel.set_param(ParamId::Offset, 4.0);
        panel.patch_cv(InputId::OffsetCv, 1.0);
        panel.reset();
        assert_eq!(panel.get(ParamId::Offset), 0.0);
        assert_eq!(panel.cv(InputId::OffsetCv), Some(1.0));
    }
}
