//! Benchmarks for the ADSR evaluator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use plush::dsp::envelope::{vol_at, EnvelopeParams};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let env = EnvelopeParams::new(0.1, 0.1, 0.2, 0.7, 0.3);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Each phase exits the if-chain at a different depth
        for (name, start) in [("attack", 0.0f32), ("sustain", 0.25), ("release", 0.5)] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (n, out) in buffer.iter_mut().enumerate() {
                        let t = start + n as f32 / SAMPLE_RATE;
                        *out = vol_at(black_box(t), black_box(&env));
                    }
                })
            });
        }
    }

    group.finish();
}
