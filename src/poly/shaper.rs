use super::{
    bus::PolyBus,
    display::{DisplayFrame, GroupLights},
};
use crate::{
    chain::{self, Options},
    dsp::lanes::LANES,
    panel::{self, ControlSource},
};

/// Runs the chain over a polyphonic bus, four channels at a time.
///
/// Holds nothing the signal depends on: the only state is the bypass switch
/// and the per-group lights kept for display.
#[derive(Debug, Default, Clone)]
pub struct Shaper {
    lights: GroupLights,
    bypassed: bool,
    ticks: u64,
}

impl Shaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape every live group of `input` into `output`.
    ///
    /// All groups share `options`. The output carries the same channel count
    /// as the input.
    pub fn process(&mut self, input: &PolyBus, output: &mut PolyBus, options: &Options) {
        let channels = input.channels();
        self.lights.channels = channels as u8;

        for (group, first) in (0..channels).step_by(LANES).enumerate() {
            let signals = input.read_group(first);
            let shaped = if self.bypassed {
                signals
            } else {
                chain::process(signals, options)
            };
            self.lights.record(group, signals, shaped);
            output.write_group(first, shaped);
        }

        output.set_channels(channels);
        self.ticks += 1;
    }

    /// Read the controls once, then process. Returns the options used.
    pub fn tick<C: ControlSource + ?Sized>(
        &mut self,
        controls: &C,
        input: &PolyBus,
        output: &mut PolyBus,
    ) -> Options {
        let options = panel::derive_options(controls);
        self.process(input, output, &options);
        options
    }

    /// Pass input straight to output while `bypassed`.
    pub fn set_bypassed(&mut self, bypassed: bool) {
        self.bypassed = bypassed;
    }

    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    pub fn lights(&self) -> &GroupLights {
        &self.lights
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> DisplayFrame {
        DisplayFrame {
            tick: self.ticks,
            bypassed: self.bypassed,
            lights: self.lights,
        }
    }

    /// Zero the lights. Bypass and the tick counter are left alone.
    pub fn reset(&mut self) {
        self.lights.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chain::Order,
        dsp::{ClipLevel, Float4, RectifyDirection, RectifyLevel},
        panel::{ParamId, PanelState},
    };

    fn ramp(channels: usize) -> PolyBus {
        let volts: Vec<f32> = (0..channels).map(|c| c as f32 - 8.0).collect();
        PolyBus::from_voltages(&volts)
    }

    #[test]
    fn processes_every_live_group() {
        let mut shaper = Shaper::new();
        let input = ramp(16);
        let mut output = PolyBus::new();
        let opts = Options::default().with_attenuversion(2.0);

        shaper.process(&input, &mut output, &opts);

        assert_eq!(output.channels(), 16);
        for c in 0..16 {
            assert_eq!(output.voltage(c), input.voltage(c) * 2.0, "channel {c}");
        }
    }

    #[test]
    fn partial_group_pads_with_silence() {
        let mut shaper = Shaper::new();
        let input = ramp(5);
        let mut output = PolyBus::new();
        let opts = Options::default().with_offset(1.0);

        shaper.process(&input, &mut output, &opts);

        assert_eq!(output.channels(), 5);
        assert_eq!(shaper.lights().input[1].to_array(), [-4.0, 0.0, 0.0, 0.0]);
        assert_eq!(shaper.lights().output[1].to_array(), [-3.0, 1.0, 1.0, 1.0]);
        assert_eq!(output.voltages(), &[-7.0, -6.0, -5.0, -4.0, -3.0]);
    }

    #[test]
    fn zero_channels_is_silent() {
        let mut shaper = Shaper::new();
        let mut output = PolyBus::with_channels(8);
        shaper.process(&PolyBus::new(), &mut output, &Options::default().with_offset(5.0));

        assert_eq!(output.channels(), 0);
        assert!(output.voltages().is_empty());
        assert_eq!(shaper.lights().output, [Float4::ZERO; 4]);
    }

    #[test]
    fn groups_match_single_group_processing() {
        let mut shaper = Shaper::new();
        let input = ramp(12);
        let mut output = PolyBus::new();
        let opts = Options::new(
            Order::Caro,
            -1.5,
            2.0,
            ClipLevel::Five,
            RectifyLevel::Full,
            RectifyDirection::Negative,
        );

        shaper.process(&input, &mut output, &opts);

        for first in [0, 4, 8] {
            let expected = chain::process(input.read_group(first), &opts);
            assert_eq!(output.read_group(first), expected);
        }
    }

    #[test]
    fn bypass_copies_input() {
        let mut shaper = Shaper::new();
        shaper.set_bypassed(true);
        let input = ramp(7);
        let mut output = PolyBus::new();

        shaper.process(&input, &mut output, &Options::default().with_attenuversion(0.0));

        assert_eq!(output.voltages(), input.voltages());
        assert!(shaper.snapshot().bypassed);
    }

    #[test]
    fn tick_reads_controls() {
        let mut panel = PanelState::new();
        panel.set_param(ParamId::Offset, 5.0);
        panel.set_param(ParamId::Clip, 2.0);

        let mut shaper = Shaper::new();
        let mut output = PolyBus::new();
        let opts = shaper.tick(&panel, &PolyBus::from_voltages(&[0.0, 3.0]), &mut output);

        assert_eq!(opts.clip, ClipLevel::Five);
        assert_eq!(output.voltages(), &[5.0, 5.0]);
        assert_eq!(shaper.ticks(), 1);
    }

    #[test]
    fn reset_clears_lights() {
        let mut shaper = Shaper::new();
        let mut output = PolyBus::new();
        shaper.process(&ramp(4), &mut output, &Options::default());
        assert_ne!(shaper.lights().input[0], Float4::ZERO);

        shaper.reset();
        assert_eq!(*shaper.lights(), GroupLights::default());
    }
}
