#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::order::Order;
use crate::dsp::{
    clip::ClipLevel,
    rectify::{RectifyDirection, RectifyLevel},
};

/// Everything one call to [`process`](super::process) needs to know.
///
/// Built fresh every tick from the panel, shared read-only by every channel
/// group in that tick, then dropped. The default is the identity chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub order: Order,
    pub attenuversion: f32,
    pub offset: f32,
    pub clip: ClipLevel,
    pub rectify: RectifyLevel,
    /// Only read when `rectify` is not `None`.
    pub direction: RectifyDirection,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            order: Order::Aocr,
            attenuversion: 1.0,
            offset: 0.0,
            clip: ClipLevel::None,
            rectify: RectifyLevel::None,
            direction: RectifyDirection::Positive,
        }
    }
}

impl Options {
    pub fn new(
        order: Order,
        attenuversion: f32,
        offset: f32,
        clip: ClipLevel,
        rectify: RectifyLevel,
        direction: RectifyDirection,
    ) -> Self {
        Self {
            order,
            attenuversion,
            offset,
            clip,
            rectify,
            direction,
        }
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn with_attenuversion(mut self, attenuversion: f32) -> Self {
        self.attenuversion = attenuversion;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_clip(mut self, clip: ClipLevel) -> Self {
        self.clip = clip;
        self
    }

    pub fn with_rectify(mut self, rectify: RectifyLevel, direction: RectifyDirection) -> Self {
        self.rectify = rectify;
        self.direction = direction;
        self
    }
}
