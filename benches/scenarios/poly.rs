//! Benchmarks for the polyphonic driver.

use std::hint::black_box;

use aocr_dsp::{
    chain::Options,
    panel::{NoMessages, PanelState, ParamId},
    poly::{NullDisplay, PolyBus, PolyShaper, Shaper},
    MAX_CHANNELS,
};
use criterion::{BenchmarkId, Criterion};

use crate::BLOCK_SIZES;

fn busy_panel() -> PanelState {
    let mut panel = PanelState::new();
    panel.set_param(ParamId::Order, 5.0);
    panel.set_param(ParamId::Attenuverter, -0.5);
    panel.set_param(ParamId::Offset, 5.0);
    panel.set_param(ParamId::Clip, 2.0);
    panel.set_param(ParamId::Rectify, 1.0);
    panel
}

pub fn bench_poly(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/poly");

    // === SINGLE TICK ===
    // One sample at 1, 4, 5 and 16 channels
    for channels in [1, 4, 5, MAX_CHANNELS] {
        let volts: Vec<f32> = (0..channels).map(|c| c as f32 - 8.0).collect();
        let input = PolyBus::from_voltages(&volts);
        let mut output = PolyBus::new();
        let mut shaper = Shaper::new();
        let opts = Options::default().with_attenuversion(-0.5).with_offset(5.0);

        group.bench_with_input(BenchmarkId::new("shaper_tick", channels), &channels, |b, _| {
            b.iter(|| shaper.process(black_box(&input), black_box(&mut output), black_box(&opts)))
        });
    }

    // === MODULE BLOCK ===
    // A block of 16-channel ticks through the full module, controls included
    for &size in BLOCK_SIZES {
        let frames: Vec<PolyBus> = (0..size)
            .map(|i| {
                let phase = i as f32 / size as f32;
                let volts: Vec<f32> = (0..MAX_CHANNELS)
                    .map(|c| ((phase + c as f32 / 16.0) * std::f32::consts::TAU).sin() * 10.0)
                    .collect();
                PolyBus::from_voltages(&volts)
            })
            .collect();
        let mut output = PolyBus::new();
        let mut module = PolyShaper::new(busy_panel(), NoMessages, NullDisplay, 256);

        group.bench_with_input(BenchmarkId::new("module_block", size), &size, |b, _| {
            b.iter(|| {
                for frame in &frames {
                    module.tick(black_box(frame), black_box(&mut output));
                }
            })
        });
    }

    group.finish();
}
