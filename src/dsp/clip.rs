//! Clipping / range limiting
//!
//! Eurorack-style gear expects signals inside a known window. Clipping
//! clamps each lane into a symmetric range and leaves everything already
//! inside untouched.
//!
//! # Levels
//!
//!   None   passes the signal through
//!   ±10 V  the full modular voltage range
//!   ±5 V   the usual range for audio and bipolar LFOs
//!
//! # Edge behaviour
//!
//! The bounds are inclusive: a lane sitting exactly on 10.0 comes out as 10.0,
//! and 10.0001 comes out as 10.0. NaN is not a number the clamp can compare,
//! so it passes through as NaN.
//!
//! Because the window is symmetric around zero, clipping commutes with
//! rectification. See `rectify` for the argument.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::lanes::Float4;
use crate::error::ParseError;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClipLevel {
    #[default]
    None,
    Ten,
    Five,
}

impl ClipLevel {
    pub const ALL: [ClipLevel; 3] = [ClipLevel::None, ClipLevel::Ten, ClipLevel::Five];

    /// Switch position to level. Anything outside 0..=2 is `None`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::None,
            1 => Self::Ten,
            2 => Self::Five,
            _ => Self::None,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Self::None => 0,
            Self::Ten => 1,
            Self::Five => 2,
        }
    }

    /// Magnitude of the clamp window, if any.
    pub fn bound(self) -> Option<f32> {
        match self {
            Self::None => None,
            Self::Ten => Some(10.0),
            Self::Five => Some(5.0),
        }
    }
}

impl fmt::Display for ClipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Ten => write!(f, "±10 volts"),
            Self::Five => write!(f, "±5 volts"),
        }
    }
}

impl FromStr for ClipLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" | "0" => Ok(Self::None),
            "10" | "ten" | "±10" => Ok(Self::Ten),
            "5" | "five" | "±5" => Ok(Self::Five),
            _ => Err(ParseError::ClipLevel(s.to_string())),
        }
    }
}

/// Clamp a single sample to the level's window.
#[inline]
pub fn clip_sample(sample: f32, level: ClipLevel) -> f32 {
    match level.bound() {
        Some(bound) => sample.clamp(-bound, bound),
        None => sample,
    }
}

/// Clamp every lane to the level's window.
#[inline]
pub fn clip(signals: Float4, level: ClipLevel) -> Float4 {
    match level.bound() {
        Some(bound) => signals.clamp(-bound, bound),
        None => signals,
    }
}

/// Clamp a buffer in place.
pub fn clip_buffer(buffer: &mut [f32], level: ClipLevel) {
    for sample in buffer.iter_mut() {
        *sample = clip_sample(*sample, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_clip() {
        let v = Float4::new(5.5, 11.5, -6.5, -12.5);
        assert_eq!(clip(v, ClipLevel::None), v);
    }

    #[test]
    fn test_ten_clip() {
        let v = Float4::new(5.5, 11.5, -6.5, -12.5);
        assert_eq!(clip(v, ClipLevel::Ten).to_array(), [5.5, 10.0, -6.5, -10.0]);
    }

    #[test]
    fn test_five_clip() {
        let v = Float4::new(5.5, 11.5, -6.5, -12.5);
        assert_eq!(clip(v, ClipLevel::Five).to_array(), [5.0, 5.0, -5.0, -5.0]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let v = Float4::new(10.0, -10.0, 10.0001, -10.0001);
        assert_eq!(clip(v, ClipLevel::Ten).to_array(), [10.0, -10.0, 10.0, -10.0]);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(clip_sample(f32::NAN, ClipLevel::Five).is_nan());
        assert_eq!(clip_sample(f32::INFINITY, ClipLevel::Ten), 10.0);
        assert_eq!(clip_sample(f32::NEG_INFINITY, ClipLevel::Five), -5.0);
    }

    #[test]
    fn test_out_of_range_index_falls_back() {
        assert_eq!(ClipLevel::from_index(3), ClipLevel::None);
        assert_eq!(ClipLevel::from_index(-1), ClipLevel::None);
        for level in ClipLevel::ALL {
            assert_eq!(ClipLevel::from_index(level.index()), level);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("10".parse::<ClipLevel>(), Ok(ClipLevel::Ten));
        assert_eq!(" Five ".parse::<ClipLevel>(), Ok(ClipLevel::Five));
        assert!("7".parse::<ClipLevel>().is_err());
    }
}
