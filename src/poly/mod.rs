//! Polyphonic plumbing around the chain.
//!
//! A cable carries up to 16 channels. [`Shaper`] walks them in groups of
//! four, runs [`crate::chain::process`] on each group with one shared
//! [`Options`](crate::chain::Options) value, and writes the results to the
//! output cable. [`PolyShaper`] wraps it with a panel, a control-message
//! receiver and a display publisher, which is everything an audio callback
//! needs.
//!
//! Groups never read each other's data, so the order they are processed in
//! does not matter.

pub mod bus;
pub mod display;
mod module;
mod shaper;

pub use bus::{PolyBus, GROUPS};
pub use display::{DisplayFrame, DisplayPublisher, DisplaySink, GroupLights, NullDisplay};
pub use module::PolyShaper;
pub use shaper::Shaper;
