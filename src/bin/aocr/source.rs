//! Test signal for the demo: one oscillator per channel, slightly detuned.

use aocr_dsp::{poly::PolyBus, MAX_CHANNELS};
use std::f32::consts::TAU;

/// Peak voltage of the test signal. Wide enough that ±5 V clipping bites.
pub const AMPLITUDE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Saw,
}

impl Waveform {
    /// Value at `phase` in [0, 1), in [-1, 1].
    fn at(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Saw => 2.0 * phase - 1.0,
        }
    }
}

/// Free-running oscillators writing one sample per channel per tick.
pub struct OscillatorBank {
    waveform: Waveform,
    channels: usize,
    phases: [f32; MAX_CHANNELS],
    increments: [f32; MAX_CHANNELS],
}

impl OscillatorBank {
    /// Channel `n` runs at `frequency * (1 + n * spread / 100)`, so a spread
    /// of 1.0 detunes each channel by one percent.
    pub fn new(
        waveform: Waveform,
        channels: usize,
        frequency: f32,
        spread: f32,
        sample_rate: f32,
    ) -> Self {
        let mut increments = [0.0; MAX_CHANNELS];
        for (n, inc) in increments.iter_mut().enumerate() {
            let freq = frequency * (1.0 + n as f32 * spread / 100.0);
            *inc = freq / sample_rate;
        }
        Self {
            waveform,
            channels: channels.min(MAX_CHANNELS),
            phases: [0.0; MAX_CHANNELS],
            increments,
        }
    }

    /// Advance one sample and write it to `bus`.
    pub fn tick(&mut self, bus: &mut PolyBus) {
        bus.set_channels(self.channels);
        for c in 0..self.channels {
            bus.set_voltage(c, self.waveform.at(self.phases[c]) * AMPLITUDE);
            self.phases[c] = (self.phases[c] + self.increments[c]).fract();
        }
    }
}
