//! Whole-module benchmarks.
//!
//! These model the audio callback: one tick per sample, with controls read
//! from a panel and display snapshots offered every tick.

mod poly;

pub use poly::bench_poly;
