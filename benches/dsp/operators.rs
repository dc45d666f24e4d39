//! Benchmarks for the four operators applied to mono buffers.

use std::hint::black_box;

use aocr_dsp::dsp::{
    attenuvert, clip, offset, rectify, ClipLevel, RectifyDirection, RectifyLevel,
};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

pub fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/operators");

    for &size in BLOCK_SIZES {
        // Ramp from -12V to +12V so clip and rectify both have work to do
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 24.0 - 12.0)
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("attenuvert", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                attenuvert::attenuvert_buffer(black_box(&mut buffer), black_box(-0.5));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("offset", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                offset::offset_buffer(black_box(&mut buffer), black_box(5.0));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("clip_5v", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                clip::clip_buffer(black_box(&mut buffer), black_box(ClipLevel::Five));
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("rectify_half", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                rectify::rectify_buffer(
                    black_box(&mut buffer),
                    black_box(RectifyLevel::Half),
                    black_box(RectifyDirection::Positive),
                );
            })
        });

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("rectify_full_neg", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                rectify::rectify_buffer(
                    black_box(&mut buffer),
                    black_box(RectifyLevel::Full),
                    black_box(RectifyDirection::Negative),
                );
            })
        });
    }

    group.finish();
}
