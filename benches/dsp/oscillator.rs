//! Benchmarks for waveform shapes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use plush::Waveform;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for waveform in Waveform::ALL {
            let name = format!("{waveform:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (n, out) in buffer.iter_mut().enumerate() {
                        let phase = 440.0 * n as f32 / SAMPLE_RATE;
                        *out = black_box(waveform).sample(black_box(phase), 0.25);
                    }
                })
            });
        }
    }

    group.finish();
}
