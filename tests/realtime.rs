//! The audio-thread entry points must stay silent: a logger behind them can
//! take a lock or write to stderr inside the audio callback.
//!
//! Kept in its own test binary because the logger is process-global.

use std::sync::atomic::{AtomicUsize, Ordering};

use aocr_dsp::{
    panel::{ControlMessage, InputId, NoMessages, PanelState, ParamId},
    poly::{NullDisplay, PolyBus, PolyShaper},
};
use log::{LevelFilter, Log, Metadata, Record};

struct CountingLogger {
    calls: AtomicUsize,
}

impl Log for CountingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger {
    calls: AtomicUsize::new(0),
};

#[test]
fn control_messages_and_ticks_do_not_log() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut module = PolyShaper::new(PanelState::new(), NoMessages, NullDisplay, 1);
    let mut output = PolyBus::new();

    for msg in [
        ControlMessage::SetCv {
            input: InputId::OffsetCv,
            volts: 2.5,
        },
        // Out of range, so the panel clamps it
        ControlMessage::SetParam {
            id: ParamId::Offset,
            value: 12.0,
        },
        ControlMessage::Unpatch {
            input: InputId::OffsetCv,
        },
        ControlMessage::SetBypass(true),
        ControlMessage::SetBypass(false),
        ControlMessage::Reset,
    ] {
        module.handle(msg);
    }
    for _ in 0..4 {
        module.tick(&PolyBus::from_voltages(&[1.0, -1.0, 3.0]), &mut output);
    }

    assert_eq!(module.panel().get(ParamId::Offset), 0.0);
    assert_eq!(LOGGER.calls.load(Ordering::SeqCst), 0);
}
