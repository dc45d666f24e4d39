//! Signal scaling primitive.

/*
Attenuversion
=============

An attenuverter is a multiplier with a bipolar knob. It is the control-voltage
cousin of a gain stage: the same multiplication, but the factor is allowed to
go negative.

Vocabulary
----------

  attenuate     Multiply by a factor with magnitude below 1.0. The signal
                gets smaller but keeps its shape.

  amplify       Multiply by a factor with magnitude above 1.0.

  invert        Multiply by a negative factor. Peaks become troughs.

  attenuvert    All of the above on a single control:
                  a =  2.0  →  twice as large
                  a =  1.0  →  unchanged
                  a =  0.5  →  half size
                  a =  0.0  →  silence
                  a = -1.0  →  upside down
                  a = -2.0  →  upside down and twice as large


The Math
--------

For each lane i:

    output[i] = input[i] × a

Nothing else. There is no clamping here: a ±10 V signal attenuverted by 2.0
produces ±20 V, and the clip stage is there to deal with that if the patch
asks for it.


Where It Sits In The Chain
--------------------------

Because scaling does not commute with offset, the two placements sound
different:

    scale then bias:   (v × a) + o
    bias then scale:   (v + o) × a

With a = -1 and o = 5, an input of 2 V gives 3 V in the first case and -7 V
in the second. The chain module exposes every placement as a selectable
order.
*/

use super::lanes::Float4;

/// Scale a single sample.
#[inline]
pub fn attenuvert_sample(sample: f32, amount: f32) -> f32 {
    sample * amount
}

/// Scale every lane by the same factor.
///
/// # Arguments
/// * `signals` - Four channel voltages
/// * `amount` - Scaling factor (negative inverts, zero mutes)
#[inline]
pub fn attenuvert(signals: Float4, amount: f32) -> Float4 {
    signals * amount
}

/// Scale a buffer in place.
#[inline]
pub fn attenuvert_buffer(buffer: &mut [f32], amount: f32) {
    for sample in buffer.iter_mut() {
        *sample = attenuvert_sample(*sample, amount);
    }
}
