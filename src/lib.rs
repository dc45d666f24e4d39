pub mod chain; // Operation orders and the processing entry point
pub mod dsp;
pub mod error;
pub mod panel; // Controls, CV and option derivation
pub mod poly; // Channel groups, bypass and display feedback

pub use chain::{process, Options, Order};
pub use error::ParseError;

/// Channels on one polyphonic cable.
pub const MAX_CHANNELS: usize = 16;
