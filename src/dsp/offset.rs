//! DC offset primitive.

/*
Offset
======

Offset adds a constant voltage to every sample. It is the additive
counterpart to attenuversion: scaling changes how far a signal swings,
offset changes where the swing is centred.

    input:         [-5.0, -2.5,  0.0,  2.5,  5.0]
    offset = +5:   [ 0.0,  2.5,  5.0,  7.5, 10.0]   bipolar → unipolar
    offset = -5:   [-10.0, -7.5, -5.0, -2.5,  0.0]

A classic use is turning a ±5 V LFO into a 0-10 V envelope-style control, or
transposing a pitch CV by whole octaves (1 V per octave).

The offset itself is unbounded. Pushing a signal past ±10 V is allowed; the
clip stage can bring it back into range.
*/

use super::lanes::Float4;

/// Bias a single sample.
#[inline]
pub fn offset_sample(sample: f32, offset: f32) -> f32 {
    sample + offset
}

/// Add the same offset to every lane.
#[inline]
pub fn offset(signals: Float4, offset: f32) -> Float4 {
    signals + offset
}

/// Bias a buffer in place.
#[inline]
pub fn offset_buffer(buffer: &mut [f32], offset: f32) {
    for sample in buffer.iter_mut() {
        *sample = offset_sample(*sample, offset);
    }
}
