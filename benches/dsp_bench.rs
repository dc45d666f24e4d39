//! Benchmarks for the shaping operators and the polyphonic driver.
//!
//! Run with: cargo bench
//!
//! The driver runs once per sample, so a tick must fit comfortably inside one
//! sample period.
//!
//! Reference timing at 48kHz sample rate:
//!   - 1 sample    = 20.8us deadline
//!   - 64 samples  = 1.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Single operators over mono buffers, and the full chain per order
//!   - scenarios/*  Whole-module ticks at different channel counts

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    // Operators
    dsp::bench_operators,
    dsp::bench_orders,
    // Module ticks
    scenarios::bench_poly,
);
criterion_main!(benches);
