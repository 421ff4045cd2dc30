//! Benchmarks for Engine::fill_buffer, the realtime entry point.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use plush::{Engine, EngineConfig, EnvelopeParams, FrequencyParams, Voice, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    let voice = Voice::builder(Waveform::Square)
        .envelope(EnvelopeParams::flat())
        .frequency(FrequencyParams::constant(440.0).with_slide(10.0))
        .build()
        .unwrap();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Oversampling multiplies the per-sample cost
        for oversampling in [1, 8] {
            let (mut engine, mut handle) = Engine::new(
                EngineConfig::default()
                    .with_oversampling(oversampling)
                    .with_seed(0),
            )
            .unwrap();
            handle.play(voice).unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("{oversampling}x"), size),
                &size,
                |b, _| b.iter(|| engine.fill_buffer(black_box(&mut buffer))),
            );
        }

        // A swap pending at every block
        let (mut engine, mut handle) = Engine::new(EngineConfig::default().with_seed(0)).unwrap();
        group.bench_with_input(BenchmarkId::new("swap_each_block", size), &size, |b, _| {
            b.iter(|| {
                let _ = handle.replace(voice);
                engine.fill_buffer(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
