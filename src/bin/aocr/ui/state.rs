//! UI-side state
//!
//! The UI keeps its own copy of the panel. Every edit is applied here first
//! and the stored value is sent to the audio thread, so both copies agree
//! without the audio thread ever reporting back.

use aocr_dsp::{
    chain::Options,
    panel::{self, ControlMessage, InputId, PanelState, ParamId},
    poly::DisplayFrame,
};

use crate::source::Waveform;

/// Constant voltage patched into a CV jack by the toggle keys.
pub const CV_VOLTS: f32 = 2.5;

/// Static facts about the running demo (sent once, never changes)
#[derive(Clone, Copy, Debug)]
pub struct UiInit {
    pub sample_rate: f32,
    pub channels: usize,
    pub frequency: f32,
    pub waveform: Waveform,
}

/// Everything the widgets draw from
pub struct UiState {
    pub init: UiInit,
    pub panel: PanelState,
    /// Latest snapshot from the audio thread
    pub frame: DisplayFrame,
    /// Row highlighted in the controls list
    pub selected: usize,
    pub bypassed: bool,
}

impl UiState {
    pub fn new(init: UiInit, panel: PanelState) -> Self {
        Self {
            init,
            panel,
            frame: DisplayFrame::default(),
            selected: 0,
            bypassed: false,
        }
    }

    pub fn selected_param(&self) -> ParamId {
        ParamId::ALL[self.selected]
    }

    /// Options the audio thread is using, as far as the UI knows.
    pub fn options(&self) -> Options {
        panel::derive_options(&self.panel)
    }

    pub fn select(&mut self, step: isize) {
        let n = ParamId::ALL.len() as isize;
        self.selected = (self.selected as isize + step).rem_euclid(n) as usize;
    }

    /// Turn the selected control one notch. Knobs move by a fortieth of
    /// their range, switches by one position.
    pub fn adjust(&mut self, step: i32) -> ControlMessage {
        let id = self.selected_param();
        let spec = id.spec();
        let value = if spec.is_switch() {
            self.panel.step_switch(id, step)
        } else {
            self.panel.nudge(id, step as f32 * (spec.max - spec.min) / 40.0)
        };
        log::trace!("{} -> {value}", spec.name);
        ControlMessage::SetParam { id, value }
    }

    /// Put the selected control back to its default.
    pub fn default_selected(&mut self) -> ControlMessage {
        let id = self.selected_param();
        let value = self.panel.set_param(id, id.spec().default);
        ControlMessage::SetParam { id, value }
    }

    pub fn toggle_cv(&mut self, input: InputId) -> ControlMessage {
        if self.panel.cv(input).is_some() {
            self.panel.unpatch(input);
            ControlMessage::Unpatch { input }
        } else {
            self.panel.patch_cv(input, CV_VOLTS);
            ControlMessage::SetCv { input, volts: CV_VOLTS }
        }
    }

    pub fn toggle_bypass(&mut self) -> ControlMessage {
        self.bypassed = !self.bypassed;
        ControlMessage::SetBypass(self.bypassed)
    }

    pub fn reset(&mut self) -> ControlMessage {
        self.panel.reset();
        ControlMessage::Reset
    }
}
