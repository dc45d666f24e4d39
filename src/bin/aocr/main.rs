//! aocr - terminal demo of the polyphonic shaper
//!
//! A bank of test oscillators feeds the module; channel 1 of the shaped
//! output goes to the speakers. Knobs and switches are on the keyboard.
//!
//! Run with: cargo run --bin aocr
//! Logs go to stderr: RUST_LOG=debug cargo run --bin aocr 2> aocr.log

mod app;
mod source;
mod ui;

use app::Aocr;
use source::Waveform;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    Aocr::new()
        .channels(8)
        .frequency(110.0)
        .spread(0.5)
        .waveform(Waveform::Triangle)
        .run()
}
