//! Channel lights - input and shaped output voltage per channel

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use aocr_dsp::{
    panel::{params::OUTPUT_NAME, InputId},
    poly::GroupLights,
};

/// Characters of bar for a full ±10 V swing on one side
const BAR_WIDTH: usize = 10;

fn bar(volts: f32) -> Span<'static> {
    let len = ((volts.abs() / 10.0).min(1.0) * BAR_WIDTH as f32).round() as usize;
    let color = if volts >= 0.0 { Color::Green } else { Color::Red };
    Span::styled(
        format!("{:<width$}", "█".repeat(len), width = BAR_WIDTH),
        Style::default().fg(color),
    )
}

/// Render one row per live channel
pub fn render_lights(frame: &mut Frame, area: Rect, lights: &GroupLights) {
    let block = Block::default()
        .title(format!(
            " {} → {} ({} ch) ",
            InputId::Signal.name(),
            OUTPUT_NAME,
            lights.channels
        ))
        .borders(Borders::ALL);

    let lines: Vec<Line> = (0..lights.channels as usize)
        .map(|c| {
            let (input, output) = (lights.input_voltage(c), lights.output_voltage(c));
            Line::from(vec![
                Span::styled(format!("{:>2} ", c + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{input:+6.2} ")),
                bar(input),
                Span::raw(format!(" → {output:+6.2} ")),
                bar(output),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
