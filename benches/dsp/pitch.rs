//! Benchmarks for the pitch trajectory, arpeggio and vibrato.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use plush::{ArpeggioParams, FrequencyParams, VibratoParams};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_pitch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/pitch");

    let freq = FrequencyParams::constant(880.0)
        .with_slide(-2000.0)
        .with_delta_slide(500.0)
        .with_floor(100.0);
    let arp = ArpeggioParams::new(0.05, 0.5);
    let vib = VibratoParams::new(0.3, 40.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("freq", size), &size, |b, _| {
            b.iter(|| {
                for (n, out) in buffer.iter_mut().enumerate() {
                    *out = black_box(&freq).freq_at(n as f32 / SAMPLE_RATE);
                }
            })
        });

        // Vibrato is the only evaluator that calls sin()
        group.bench_with_input(BenchmarkId::new("divisor", size), &size, |b, _| {
            b.iter(|| {
                for (n, out) in buffer.iter_mut().enumerate() {
                    let t = n as f32 / SAMPLE_RATE;
                    *out = black_box(&arp).arp_at(t) * black_box(&vib).vib_at(t);
                }
            })
        });
    }

    group.finish();
}
