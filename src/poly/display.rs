//! Per-channel feedback for whatever draws the lights.
//!
//! The driver records each group's raw input and shaped output. None of it
//! feeds back into the signal path. A render thread gets copies through a
//! [`DisplaySink`]; with the `rtrb` feature a ring-buffer producer is one.

#[cfg(feature = "rtrb")]
use rtrb::Producer;

use super::bus::{group_of, lane_of, GROUPS};
use crate::dsp::lanes::Float4;

/// Last input and output voltages of every group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupLights {
    /// Live channel count when the values were recorded.
    pub channels: u8,
    pub input: [Float4; GROUPS],
    pub output: [Float4; GROUPS],
}

impl GroupLights {
    #[inline]
    pub fn record(&mut self, group: usize, input: Float4, output: Float4) {
        self.input[group] = input;
        self.output[group] = output;
    }

    pub fn input_voltage(&self, channel: usize) -> f32 {
        self.input[group_of(channel)][lane_of(channel)]
    }

    pub fn output_voltage(&self, channel: usize) -> f32 {
        self.output[group_of(channel)][lane_of(channel)]
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Snapshot handed to a render thread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayFrame {
    /// Ticks processed by the driver so far.
    pub tick: u64,
    pub bypassed: bool,
    pub lights: GroupLights,
}

/// Receiver of display snapshots. Must never block.
pub trait DisplaySink {
    fn publish(&mut self, frame: DisplayFrame);
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn publish(&mut self, _frame: DisplayFrame) {}
}

#[cfg(feature = "rtrb")]
impl DisplaySink for Producer<DisplayFrame> {
    fn publish(&mut self, frame: DisplayFrame) {
        // A full ring means the UI is behind; it will catch up on the next frame.
        let _ = self.push(frame);
    }
}

/// Forwards one frame out of every `interval` offered.
///
/// The driver runs once per sample; a screen refreshes at most a few hundred
/// times a second. Decimating here keeps the ring from filling up.
pub struct DisplayPublisher<S> {
    sink: S,
    interval: u32,
    countdown: u32,
}

impl<S: DisplaySink> DisplayPublisher<S> {
    pub fn new(sink: S, interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            sink,
            interval,
            countdown: 0,
        }
    }

    /// Offer a frame. `make` only runs when the frame will actually be sent.
    #[inline]
    pub fn offer(&mut self, make: impl FnOnce() -> DisplayFrame) {
        if self.countdown == 0 {
            self.sink.publish(make());
            self.countdown = self.interval;
        }
        self.countdown -= 1;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
