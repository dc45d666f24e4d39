//! Aocr - demo builder and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use super::source::{OscillatorBank, Waveform};
use super::ui::{UiApp, UiInit};

use aocr_dsp::{
    panel::{ControlMessage, PanelState},
    poly::{DisplayFrame, PolyBus, PolyShaper},
    MAX_CHANNELS,
};

/// Control messages that can queue up between two UI frames.
const CONTROL_RING: usize = 256;
/// Display frames buffered for the UI.
const DISPLAY_RING: usize = 64;
/// Scope samples buffered for the UI.
const SCOPE_RING: usize = 16_384;
/// Display snapshots per second.
const DISPLAY_RATE: f32 = 60.0;
/// Output voltage that maps to full scale on the sound card.
const FULL_SCALE_VOLTS: f32 = 10.0;

/// Demo builder
pub struct Aocr {
    channels: usize,
    frequency: f32,
    spread: f32,
    waveform: Waveform,
}

impl Aocr {
    pub fn new() -> Self {
        Self {
            channels: 4,
            frequency: 110.0,
            spread: 0.0,
            waveform: Waveform::Sine,
        }
    }

    /// Number of polyphony channels to generate (clamped to 1..=16).
    pub fn channels(mut self, channels: usize) -> Self {
        self.channels = channels.clamp(1, MAX_CHANNELS);
        self
    }

    /// Base frequency of channel 1 in Hz.
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Per-channel detune in percent.
    pub fn spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Run the demo (plays audio and takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let device_channels = config.channels() as usize;
        log::info!(
            "output at {sample_rate} Hz, {device_channels} device channels, {} poly channels",
            self.channels
        );

        let (ctl_tx, ctl_rx) = RingBuffer::<ControlMessage>::new(CONTROL_RING);
        let (frame_tx, frame_rx) = RingBuffer::<DisplayFrame>::new(DISPLAY_RING);
        let (mut scope_tx, scope_rx) = RingBuffer::<f32>::new(SCOPE_RING);

        let display_interval = (sample_rate / DISPLAY_RATE).max(1.0) as u32;
        let panel = PanelState::new();
        let mut module = PolyShaper::new(panel, ctl_rx, frame_tx, display_interval);
        let mut source = OscillatorBank::new(
            self.waveform,
            self.channels,
            self.frequency,
            self.spread,
            sample_rate,
        );
        let mut input = PolyBus::new();
        let mut output = PolyBus::new();

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                for frame in data.chunks_mut(device_channels) {
                    source.tick(&mut input);
                    module.tick(&input, &mut output);

                    let sample = (output.voltage(0) / FULL_SCALE_VOLTS).clamp(-1.0, 1.0);
                    frame.fill(sample);
                    // The UI drains this; when it falls behind samples are dropped.
                    let _ = scope_tx.push(sample);
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;
        stream.play()?;

        let init = UiInit {
            sample_rate,
            channels: self.channels,
            frequency: self.frequency,
            waveform: self.waveform,
        };
        let mut ui = UiApp::new(ctl_tx, frame_rx, scope_rx, panel, init);

        let mut terminal = ratatui::init();
        let result = ui.run(&mut terminal);
        ratatui::restore();

        drop(stream);
        result
    }
}

impl Default for Aocr {
    fn default() -> Self {
        Self::new()
    }
}
