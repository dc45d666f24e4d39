use crate::{
    dsp::lanes::{Float4, LANES},
    MAX_CHANNELS,
};

/// Number of four-lane groups needed to cover every channel.
pub const GROUPS: usize = MAX_CHANNELS / LANES;

/// Group holding `channel`.
#[inline]
pub const fn group_of(channel: usize) -> usize {
    channel / LANES
}

/// Lane of `channel` inside its group.
#[inline]
pub const fn lane_of(channel: usize) -> usize {
    channel % LANES
}

/// One polyphonic cable: up to 16 voltages plus the live channel count.
///
/// Slots at or beyond the channel count keep whatever was last written but
/// read back as silence through [`read_group`](Self::read_group).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyBus {
    voltages: [f32; MAX_CHANNELS],
    channels: usize,
}

impl Default for PolyBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyBus {
    /// An unpatched cable (zero channels).
    pub const fn new() -> Self {
        Self {
            voltages: [0.0; MAX_CHANNELS],
            channels: 0,
        }
    }

    pub fn with_channels(channels: usize) -> Self {
        let mut bus = Self::new();
        bus.set_channels(channels);
        bus
    }

    /// Bus carrying `voltages`, one channel each. Extra values past 16 are ignored.
    pub fn from_voltages(voltages: &[f32]) -> Self {
        let mut bus = Self::with_channels(voltages.len());
        let n = bus.channels;
        bus.voltages[..n].copy_from_slice(&voltages[..n]);
        bus
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Set the live channel count, clamped to 0..=16.
    #[inline]
    pub fn set_channels(&mut self, channels: usize) {
        self.channels = channels.min(MAX_CHANNELS);
    }

    /// Number of groups touched by the live channels.
    #[inline]
    pub fn groups(&self) -> usize {
        self.channels.div_ceil(LANES)
    }

    pub fn voltage(&self, channel: usize) -> f32 {
        if channel < self.channels {
            self.voltages[channel]
        } else {
            0.0
        }
    }

    /// Write one slot. Channels past 16 are ignored.
    pub fn set_voltage(&mut self, channel: usize, volts: f32) {
        if let Some(slot) = self.voltages.get_mut(channel) {
            *slot = volts;
        }
    }

    /// The live voltages.
    pub fn voltages(&self) -> &[f32] {
        &self.voltages[..self.channels]
    }

    /// Four channels starting at `first`. Channels past the live count read 0.0.
    #[inline]
    pub fn read_group(&self, first: usize) -> Float4 {
        let mut lanes = [0.0; LANES];
        for (lane, value) in lanes.iter_mut().enumerate() {
            *value = self.voltage(first + lane);
        }
        Float4(lanes)
    }

    /// Store four channels starting at `first`.
    #[inline]
    pub fn write_group(&mut self, first: usize, signals: Float4) {
        for (lane, &value) in signals.iter().enumerate() {
            self.set_voltage(first + lane, value);
        }
    }

    /// Zero every slot and drop to zero channels.
    pub fn clear(&mut self) {
        self.voltages = [0.0; MAX_CHANNELS];
        self.channels = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_count_is_clamped() {
        let mut bus = PolyBus::new();
        bus.set_channels(40);
        assert_eq!(bus.channels(), MAX_CHANNELS);
        assert_eq!(bus.groups(), GROUPS);
    }

    #[test]
    fn partial_group_reads_silence_past_count() {
        let mut bus = PolyBus::from_voltages(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        bus.set_voltage(7, 9.0);

        assert_eq!(bus.groups(), 2);
        assert_eq!(bus.read_group(0).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(bus.read_group(4).to_array(), [5.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn write_group_ignores_slots_past_sixteen() {
        let mut bus = PolyBus::with_channels(16);
        bus.write_group(12, Float4::splat(3.0));
        bus.write_group(14, Float4::splat(7.0));
        assert_eq!(&bus.voltages()[12..], &[3.0, 3.0, 7.0, 7.0]);
    }

    #[test]
    fn group_and_lane_indexing() {
        assert_eq!((group_of(0), lane_of(0)), (0, 0));
        assert_eq!((group_of(5), lane_of(5)), (1, 1));
        assert_eq!((group_of(15), lane_of(15)), (3, 3));
    }
}
