//! Status bar - order, bypass, audio stats

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::UiState;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    /// Compute audio stats from a buffer
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, state: &UiState, stats: &AudioStats) {
    let block = Block::default()
        .title(" aocr ")
        .borders(Borders::ALL);

    let options = state.options();
    let (bypass_text, bypass_color) = if state.frame.bypassed {
        ("BYPASS", Color::Yellow)
    } else {
        ("ACTIVE", Color::Green)
    };

    let line = Line::from(vec![
        Span::styled(format!(" {}  ", options.order), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{bypass_text}  "), Style::default().fg(bypass_color)),
        Span::styled(
            format!(
                "{:?} {:.0}Hz x{}  ",
                state.init.waveform, state.init.frequency, state.init.channels
            ),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:.1}kHz  tick {}  ", state.init.sample_rate / 1000.0, state.frame.tick),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            // Buffer is normalised to ±10 V
            format!("Peak: {:.2}V  RMS: {:.2}V", stats.peak * 10.0, stats.rms * 10.0),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
