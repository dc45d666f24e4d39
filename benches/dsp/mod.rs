//! Benchmarks for the shaping operators.

mod operators;
mod orders;

pub use operators::bench_operators;
pub use orders::bench_orders;
