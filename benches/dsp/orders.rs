//! Benchmarks for the full chain in every order.
//!
//! All twelve orders go through the same dispatch loop, so they should cost
//! about the same. A slow outlier points at the lookup.

use std::hint::black_box;

use aocr_dsp::{
    chain::{self, simple, Options, Order},
    dsp::{ClipLevel, Float4, RectifyDirection, RectifyLevel},
};
use criterion::{BenchmarkId, Criterion};

pub fn bench_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/orders");
    let signals = Float4::new(-12.0, -2.0, 2.0, 12.0);

    for order in Order::ALL {
        let opts = Options::new(
            order,
            -0.5,
            5.0,
            ClipLevel::Five,
            RectifyLevel::Half,
            RectifyDirection::Positive,
        );

        group.bench_with_input(BenchmarkId::new("process", order), &opts, |b, opts| {
            b.iter(|| chain::process(black_box(signals), black_box(opts)))
        });
    }

    // Baseline: the fixed two-order pipeline with no table lookup
    let opts = simple::SimpleOptions {
        attenuversion: -0.5,
        offset: 5.0,
        clip: ClipLevel::Five,
        rectify: RectifyLevel::Half,
        ..Default::default()
    };
    group.bench_function("simple", |b| {
        b.iter(|| simple::process(black_box(signals), black_box(&opts)))
    });

    group.finish();
}
