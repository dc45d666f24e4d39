//! Fixed-order chain.
//!
//! The first version of the module only let the attenuverter and the offset
//! swap places. Rectify and clip always come last, rectify first, and
//! rectification is always towards positive.
//!
//! Every setting here has an exact counterpart in the full chain, see
//! `From<SimpleOptions> for Options`.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{options::Options, order::Order};
use crate::{
    dsp::{
        clip::{self, ClipLevel},
        lanes::Float4,
        rectify::{self, RectifyDirection, RectifyLevel},
    },
    error::ParseError,
};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimpleOrder {
    /// `v * a + o`
    #[default]
    AttenuvertThenOffset,
    /// `(v + o) * a`
    OffsetThenAttenuvert,
}

impl SimpleOrder {
    /// Switch position to order. Anything other than 1 is `AttenuvertThenOffset`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::AttenuvertThenOffset,
            1 => Self::OffsetThenAttenuvert,
            _ => Self::AttenuvertThenOffset,
        }
    }
}

impl fmt::Display for SimpleOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttenuvertThenOffset => write!(f, "Post offset"),
            Self::OffsetThenAttenuvert => write!(f, "Pre offset"),
        }
    }
}

impl FromStr for SimpleOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ao" | "post" => Ok(Self::AttenuvertThenOffset),
            "oa" | "pre" => Ok(Self::OffsetThenAttenuvert),
            _ => Err(ParseError::SimpleOrder(s.to_string())),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleOptions {
    pub attenuversion: f32,
    pub offset: f32,
    pub clip: ClipLevel,
    pub order: SimpleOrder,
    pub rectify: RectifyLevel,
}

impl Default for SimpleOptions {
    fn default() -> Self {
        Self {
            attenuversion: 1.0,
            offset: 0.0,
            clip: ClipLevel::None,
            order: SimpleOrder::AttenuvertThenOffset,
            rectify: RectifyLevel::None,
        }
    }
}

impl From<SimpleOptions> for Options {
    fn from(simple: SimpleOptions) -> Self {
        // Rectify-then-clip equals clip-then-rectify, so the fixed tail maps
        // onto the canonical C..R orders.
        let order = match simple.order {
            SimpleOrder::AttenuvertThenOffset => Order::Aocr,
            SimpleOrder::OffsetThenAttenuvert => Order::Oacr,
        };
        Options::new(
            order,
            simple.attenuversion,
            simple.offset,
            simple.clip,
            simple.rectify,
            RectifyDirection::Positive,
        )
    }
}

/// Shape one channel group with the fixed-order chain.
#[inline]
pub fn process(signals: Float4, opts: &SimpleOptions) -> Float4 {
    let mut out = match opts.order {
        SimpleOrder::AttenuvertThenOffset => signals * opts.attenuversion + opts.offset,
        SimpleOrder::OffsetThenAttenuvert => (signals + opts.offset) * opts.attenuversion,
    };
    out = rectify::rectify(out, opts.rectify, RectifyDirection::Positive);
    clip::clip(out, opts.clip)
}
