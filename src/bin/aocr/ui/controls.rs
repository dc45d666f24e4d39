//! Controls panel - one row per knob or switch, plus the CV jacks

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use aocr_dsp::panel::{InputId, ParamId};

use super::UiState;

fn value_text(id: ParamId, value: f32) -> String {
    let spec = id.spec();
    match spec.label(value) {
        Some(label) if spec.is_switch() => label.to_string(),
        _ => format!("{value:+.2}{}", spec.unit),
    }
}

/// Render the controls list with the selected row highlighted
pub fn render_controls(frame: &mut Frame, area: Rect, state: &UiState) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL);

    let mut lines: Vec<Line> = ParamId::ALL
        .iter()
        .enumerate()
        .map(|(row, &id)| {
            let selected = row == state.selected;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<30}", id.spec().name), style),
                Span::styled(value_text(id, state.panel.get(id)), style.fg(Color::Cyan)),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    for input in [InputId::AttenuverterCv, InputId::OffsetCv] {
        let patched = match state.panel.cv(input) {
            Some(volts) => format!("{volts:+.2}V"),
            None => "unpatched".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<30}", input.name()), Style::default().fg(Color::DarkGray)),
            Span::styled(patched, Style::default().fg(Color::Magenta)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
