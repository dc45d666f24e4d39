//! Rectification / sign folding.

/*
Rectification
=============

A rectifier decides what happens to the half of the signal on the "wrong"
side of zero.

Vocabulary
----------

  half-wave     The wrong half is thrown away (set to zero).
  full-wave     The wrong half is mirrored onto the right side.
  direction     Which side is "right". Positive keeps the signal above zero,
                negative keeps it below.


Transfer Functions
------------------

                 Positive            Negative
    Half         max(0, x)           min(0, x)
    Full         |x|                 -|x|

With an input of [2.5, -2.5]:

    Half, Positive  →  [ 2.5,  0.0]
    Half, Negative  →  [ 0.0, -2.5]
    Full, Positive  →  [ 2.5,  2.5]
    Full, Negative  →  [-2.5, -2.5]

Full-wave rectifying a sine doubles its fundamental frequency. Half-wave
rectifying an LFO turns it into a string of bumps, handy for gating.


Why Rectify And Clip Commute
----------------------------

Clipping clamps to a window [-b, b] that is symmetric around zero. Every
rectifier above is built from max/min against zero and a sign flip:

  - max(0, clamp(x)) and clamp(max(0, x)) both give 0 for x < 0, x inside the
    window and b above it.
  - |clamp(x)| and clamp(|x|) both give min(|x|, b), because the window is
    symmetric.
  - The negative direction is the positive case reflected through zero, and
    the window is unchanged by that reflection.

So C(R(x)) == R(C(x)) for every level pair, which is what lets the chain
offer 12 orders instead of 24.


NaN
---

The comparisons below are written so that a NaN lane fails them and falls
through unchanged. `f32::max(0.0, NaN)` would return 0.0 and silently turn a
broken signal into silence, so it is not used here.
*/

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::lanes::Float4;
use crate::error::ParseError;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RectifyLevel {
    #[default]
    None,
    Half,
    Full,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RectifyDirection {
    #[default]
    Positive,
    Negative,
}

impl RectifyLevel {
    pub const ALL: [RectifyLevel; 3] = [RectifyLevel::None, RectifyLevel::Half, RectifyLevel::Full];

    /// Switch position to level. Anything outside 0..=2 is `None`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::None,
            1 => Self::Half,
            2 => Self::Full,
            _ => Self::None,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Half => 1,
            Self::Full => 2,
        }
    }
}

impl RectifyDirection {
    pub const ALL: [RectifyDirection; 2] = [RectifyDirection::Positive, RectifyDirection::Negative];

    /// Switch position to direction. Anything other than 1 is `Positive`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::Positive,
            1 => Self::Negative,
            _ => Self::Positive,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
        }
    }
}

impl fmt::Display for RectifyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Half => write!(f, "Half"),
            Self::Full => write!(f, "Full"),
        }
    }
}

impl fmt::Display for RectifyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

impl FromStr for RectifyLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "half" => Ok(Self::Half),
            "full" => Ok(Self::Full),
            _ => Err(ParseError::RectifyLevel(s.to_string())),
        }
    }
}

impl FromStr for RectifyDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" | "+" => Ok(Self::Positive),
            "negative" | "neg" | "-" => Ok(Self::Negative),
            _ => Err(ParseError::RectifyDirection(s.to_string())),
        }
    }
}

/// Rectify a single sample.
#[inline]
pub fn rectify_sample(sample: f32, level: RectifyLevel, direction: RectifyDirection) -> f32 {
    match (level, direction) {
        (RectifyLevel::None, _) => sample,
        (RectifyLevel::Half, RectifyDirection::Positive) => {
            if sample < 0.0 {
                0.0
            } else {
                sample
            }
        }
        (RectifyLevel::Half, RectifyDirection::Negative) => {
            if sample > 0.0 {
                0.0
            } else {
                sample
            }
        }
        (RectifyLevel::Full, RectifyDirection::Positive) => sample.abs(),
        (RectifyLevel::Full, RectifyDirection::Negative) => -sample.abs(),
    }
}

/// Rectify every lane.
#[inline]
pub fn rectify(signals: Float4, level: RectifyLevel, direction: RectifyDirection) -> Float4 {
    match level {
        RectifyLevel::None => signals,
        _ => signals.map(|x| rectify_sample(x, level, direction)),
    }
}

/// Rectify a buffer in place.
pub fn rectify_buffer(buffer: &mut [f32], level: RectifyLevel, direction: RectifyDirection) {
    for sample in buffer.iter_mut() {
        *sample = rectify_sample(*sample, level, direction);
    }
}
