//! Benchmarks for complete voices evaluated sample by sample.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use plush::{presets::Preset, Voice};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let mut rng = SmallRng::seed_from_u64(0);

    let voices: Vec<(&str, Voice)> = Preset::ALL
        .iter()
        .filter_map(|&preset| {
            let voice = preset.generate(&mut rng).to_voice().ok()?;
            Some((preset.name(), voice))
        })
        .collect();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, voice) in &voices {
            group.bench_with_input(BenchmarkId::new(*name, size), &size, |b, _| {
                b.iter(|| {
                    for (n, out) in buffer.iter_mut().enumerate() {
                        *out = black_box(voice).sample_at(n as f64 / SAMPLE_RATE as f64, 0.5);
                    }
                })
            });
        }
    }

    group.finish();
}
