//! Spectrum analyzer widget
//!
//! Shows the harmonics the shaper adds: clipping and rectifying a sine
//! produce overtones that a plain attenuvert/offset never does.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of log-spaced points drawn
const SPECTRUM_BINS: usize = 64;
/// Floor of the magnitude axis
const FLOOR_DB: f64 = -100.0;

/// Windowed FFT over the scope buffer
pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f32>>,
    /// Hann window coefficients
    window: Vec<f32>,
    /// FFT bin read for each display point
    bin_indices: Vec<usize>,
    scratch: Vec<Complex<f32>>,
    /// (log10 frequency, magnitude dB) per display point
    spectrum: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    /// `buffer_len` must match the length of the buffers passed to `update`.
    pub fn new(buffer_len: usize, sample_rate: f32) -> Self {
        let buffer_len = buffer_len.max(2);
        let fft = FftPlanner::new().plan_fft_forward(buffer_len);

        let denom = (buffer_len - 1) as f32;
        let window = (0..buffer_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        // 20 Hz to Nyquist (capped at 20 kHz), log spaced
        let nyquist = (sample_rate as f64 / 2.0).clamp(40.0, 20_000.0);
        let ratio = nyquist / 20.0;
        let last_bin = buffer_len / 2 - 1;

        let mut bin_indices = Vec::with_capacity(SPECTRUM_BINS);
        let mut spectrum = Vec::with_capacity(SPECTRUM_BINS);
        for i in 0..SPECTRUM_BINS {
            let t = i as f64 / (SPECTRUM_BINS - 1) as f64;
            let freq = 20.0 * ratio.powf(t);
            let index = (freq * buffer_len as f64 / sample_rate as f64).round() as usize;
            bin_indices.push(index.min(last_bin));
            spectrum.push((freq.log10(), FLOOR_DB));
        }

        Self {
            fft,
            window,
            bin_indices,
            scratch: vec![Complex::new(0.0, 0.0); buffer_len],
            spectrum,
        }
    }

    /// Recompute from `buffer`. Buffers of the wrong length are ignored.
    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let norm = (self.window.len() as f32 / 2.0).powi(2);
        for (point, &index) in self.spectrum.iter_mut().zip(&self.bin_indices) {
            let power = (self.scratch[index].norm_sqr() / norm).max(1e-12);
            point.1 = (10.0 * (power as f64).log10()).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.spectrum
    }
}

/// Axis label for a point at `log_freq` (log10 Hz)
fn freq_label(log_freq: f64) -> String {
    let hz = 10f64.powf(log_freq);
    if hz >= 1000.0 {
        format!("{:.0}kHz", hz / 1000.0)
    } else {
        format!("{:.0}Hz", hz)
    }
}

/// Render the spectrum on a log frequency axis
pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default()
        .title(" Spectrum ")
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let (lo, hi) = spectrum
        .first()
        .zip(spectrum.last())
        .map_or((1.0, 4.0), |(a, b)| (a.0, b.0));

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([lo, hi])
                // Labels sit evenly across the axis, so each names the
                // frequency at its own log position.
                .labels([lo, (lo + hi) / 2.0, hi].map(freq_label))
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, 0.0])
                .labels(["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
