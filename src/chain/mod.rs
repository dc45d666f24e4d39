//! The attenuvert / offset / clip / rectify chain.
//!
//! [`process`] is the whole algorithm: look up the order's four operations,
//! apply them one after another, return the result. The per-operation math
//! lives in [`crate::dsp`]; this module only decides the sequence.
//!
//! ```
//! use aocr_dsp::chain::{process, Options, Order};
//! use aocr_dsp::dsp::{ClipLevel, Float4, RectifyDirection, RectifyLevel};
//!
//! let opts = Options::new(
//!     Order::Aocr,
//!     -0.5,
//!     5.0,
//!     ClipLevel::Five,
//!     RectifyLevel::Half,
//!     RectifyDirection::Positive,
//! );
//! let out = process(Float4::new(-12.0, -2.0, 2.0, 12.0), &opts);
//! assert_eq!(out.to_array(), [5.0, 5.0, 4.0, 0.0]);
//! ```

/// Selectable operation sequences.
pub mod order;
/// Per-tick parameter bundle.
pub mod options;
/// Fixed-order predecessor of the chain.
pub mod simple;

pub use options::Options;
pub use order::{Op, Order};

use crate::dsp::{attenuvert, clip, lanes::Float4, offset, rectify};

/// Apply one operation with the settings in `opts`.
#[inline]
pub fn apply_op(signals: Float4, op: Op, opts: &Options) -> Float4 {
    match op {
        Op::Attenuvert => attenuvert::attenuvert(signals, opts.attenuversion),
        Op::Offset => offset::offset(signals, opts.offset),
        Op::Clip => clip::clip(signals, opts.clip),
        Op::Rectify => rectify::rectify(signals, opts.rectify, opts.direction),
    }
}

/// Apply a sequence of operations left to right.
#[inline]
pub fn apply_sequence(signals: Float4, sequence: &[Op], opts: &Options) -> Float4 {
    sequence
        .iter()
        .fold(signals, |acc, &op| apply_op(acc, op, opts))
}

/// Shape one channel group.
///
/// Every operation runs exactly once, in the order named by `opts.order`.
/// No allocation, no failure path.
#[inline]
pub fn process(signals: Float4, opts: &Options) -> Float4 {
    apply_sequence(signals, &opts.order.sequence(), opts)
}
