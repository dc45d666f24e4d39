#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use super::params::{InputId, ParamId};

/// Control changes sent from a UI thread to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    SetParam { id: ParamId, value: f32 },
    /// Patch a constant voltage into a CV jack.
    SetCv { input: InputId, volts: f32 },
    Unpatch { input: InputId },
    SetBypass(bool),
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}

/// Receiver with nothing to say. Useful for offline rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMessages;

impl MessageReceiver for NoMessages {
    fn pop(&mut self) -> Option<ControlMessage> {
        None
    }
}
