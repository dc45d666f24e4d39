//! Errors for the text-facing side of the crate.
//!
//! Nothing on the signal path returns these. They only come out of `FromStr`
//! implementations used by front ends and configuration loaders.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown operation order `{0}`: expected four letters using each of A, O, C, R once")]
    Order(String),
    #[error("Unknown clip level `{0}`: expected none, 10 or 5")]
    ClipLevel(String),
    #[error("Unknown rectify level `{0}`: expected none, half or full")]
    RectifyLevel(String),
    #[error("Unknown rectify direction `{0}`: expected positive or negative")]
    RectifyDirection(String),
    #[error("Unknown attenuvert/offset order `{0}`: expected ao or oa")]
    SimpleOrder(String),
}
