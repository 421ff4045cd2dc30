//! Render sounds without an audio device and print what came out.
//!
//! Run with: cargo run --example offline_render

use plush::{
    presets::Preset, Engine, EngineConfig, EnvelopeParams, FrequencyParams, Voice, Waveform,
    MAX_BLOCK_SIZE,
};
use rand::{rngs::SmallRng, SeedableRng};

fn render(engine: &mut Engine, seconds: f32) -> Vec<f32> {
    let total = (seconds * engine.sample_rate()).ceil() as usize;
    let mut out = vec![0.0f32; total];
    for block in out.chunks_mut(MAX_BLOCK_SIZE) {
        engine.fill_buffer(block);
    }
    out
}

fn report(label: &str, samples: &[f32]) {
    let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    let rms = (samples.iter().map(|s| s * s).sum::<f32>() / samples.len().max(1) as f32).sqrt();
    println!("{label:<12} {:>6} samples  peak {peak:.4}  rms {rms:.4}", samples.len());
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (mut engine, mut handle) = Engine::new(EngineConfig::default().with_seed(1))?;

    let tone = Voice::builder(Waveform::Square)
        .envelope(EnvelopeParams::new(0.0, 0.1, 0.0, 1.0, 0.1))
        .frequency(FrequencyParams::constant(440.0))
        .gain(1.0)
        .build()?;
    handle.play(tone)?;
    report("square 440", &render(&mut engine, tone.duration()));

    let mut rng = SmallRng::seed_from_u64(1);
    for preset in Preset::ALL {
        let voice = preset.generate(&mut rng).to_voice()?;
        handle.play(voice)?;
        report(preset.name(), &render(&mut engine, voice.duration()));
    }

    println!("Rendered {} samples total", engine.elapsed_samples());
    Ok(())
}
