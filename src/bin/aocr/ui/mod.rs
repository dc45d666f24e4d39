//! TUI module for aocr
//!
//! Keys edit a local copy of the panel and forward each change to the audio
//! thread. Display frames and scope samples come back over ring buffers.

mod controls;
mod lights;
pub mod state;
mod spectrum;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use aocr_dsp::{
    panel::{ControlMessage, InputId, PanelState},
    poly::DisplayFrame,
};

pub use state::{UiInit, UiState};

use controls::render_controls;
use lights::render_lights;
use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Scope buffer size, also the FFT size
const VIS_BUFFER_SIZE: usize = 1024;

/// UI application state
pub struct UiApp {
    /// Control changes for the audio thread
    ctl_tx: Producer<ControlMessage>,
    /// Display snapshots from the audio thread
    frame_rx: Consumer<DisplayFrame>,
    /// Output channel 1, normalised to ±1
    scope_rx: Consumer<f32>,
    state: UiState,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        ctl_tx: Producer<ControlMessage>,
        frame_rx: Consumer<DisplayFrame>,
        scope_rx: Consumer<f32>,
        panel: PanelState,
        init: UiInit,
    ) -> Self {
        Self {
            ctl_tx,
            frame_rx,
            scope_rx,
            state: UiState::new(init, panel),
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, init.sample_rate),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_frames();

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep the last VIS_BUFFER_SIZE scope samples
    fn poll_audio(&mut self) {
        let before = self.audio_buffer.len();
        while let Ok(sample) = self.scope_rx.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() == before {
            return;
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(..excess);
        }
        self.spectrum.update(&self.audio_buffer);
    }

    /// Keep only the latest frame
    fn poll_frames(&mut self) {
        while let Ok(frame) = self.frame_rx.pop() {
            self.state.frame = frame;
        }
    }

    /// Forward a control change. Logging happens here, never on the audio side.
    fn send(&mut self, msg: ControlMessage) {
        log::debug!("control {msg:?}");
        if self.ctl_tx.push(msg).is_err() {
            log::warn!("control ring full, dropped {msg:?}");
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let msg = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select(-1);
                return;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.select(1);
                return;
            }
            KeyCode::Left | KeyCode::Char('h') => self.state.adjust(-1),
            KeyCode::Right | KeyCode::Char('l') => self.state.adjust(1),
            KeyCode::Char('0') => self.state.default_selected(),
            KeyCode::Char('a') => self.state.toggle_cv(InputId::AttenuverterCv),
            KeyCode::Char('o') => self.state.toggle_cv(InputId::OffsetCv),
            KeyCode::Char('b') | KeyCode::Char(' ') => self.state.toggle_bypass(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.state.reset(),
            _ => return,
        };
        self.send(msg);
    }

    fn render(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Status bar
                Constraint::Length(13), // Controls | channels
                Constraint::Min(8),     // Scope | spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(frame.area());

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(frame, rows[0], &self.state, &stats);
        render_controls(frame, top[0], &self.state);
        render_lights(frame, top[1], &self.state.frame.lights);
        render_waveform(frame, bottom[0], &self.audio_buffer);
        render_spectrum(frame, bottom[1], self.spectrum.data());

        let help = Paragraph::new(
            " [Q] Quit  [↑↓] Select  [←→] Adjust  [0] Default  [A/O] CV jacks  [B] Bypass  [R] Reset",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, rows[3]);
    }
}
