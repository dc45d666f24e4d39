//! Low-level shaping primitives used by the chain.
//!
//! Each primitive is a pure function over a [`Float4`] lane vector, with a
//! scalar form and an in-place buffer form alongside. None of them allocate
//! or keep state, so they are safe to call from the audio thread.

/// Signed scaling (attenuate, amplify, invert).
pub mod attenuvert;
/// Symmetric range limiting at ±10 V or ±5 V.
pub mod clip;
/// Four-lane vector type.
pub mod lanes;
/// Constant DC bias.
pub mod offset;
/// Half- and full-wave rectification in either direction.
pub mod rectify;

pub use clip::ClipLevel;
pub use lanes::{Float4, LANES};
pub use rectify::{RectifyDirection, RectifyLevel};
