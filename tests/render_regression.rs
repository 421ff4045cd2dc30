use std::thread;

use plush::{
    presets::Preset, Engine, EngineConfig, EnvelopeParams, FrequencyParams, HandoffError, Voice,
    Waveform,
};
use rand::{rngs::SmallRng, SeedableRng};

fn render(engine: &mut Engine, len: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; len];
    engine.fill_buffer(&mut out);
    out
}

#[test]
fn square_decays_to_silence() {
    let (mut engine, mut handle) =
        Engine::new(EngineConfig::default().with_oversampling(1).with_seed(0)).unwrap();

    let voice = Voice::builder(Waveform::Square)
        .envelope(EnvelopeParams::new(0.0, 0.1, 0.0, 1.0, 0.1))
        .frequency(FrequencyParams::constant(440.0))
        .gain(1.0)
        .build()
        .unwrap();
    handle.play(voice).unwrap();

    // 0.2 s at 44.1 kHz
    let samples = render(&mut engine, 8820);
    assert_eq!(samples.len(), 8820);

    let magnitude: Vec<f32> = samples.iter().map(|s| s.abs()).collect();
    assert!((magnitude[0] - 1.0).abs() < 1e-6);

    for (n, pair) in magnitude.windows(2).enumerate() {
        assert!(pair[1] <= pair[0], "magnitude rose at sample {}", n + 1);
        if n >= 4411 {
            assert!(pair[1] < pair[0], "release must strictly decrease at sample {}", n + 1);
        }
    }
    assert!(magnitude[8819] < 1e-3, "ends at {}", magnitude[8819]);
}

#[test]
fn sine_hits_quarter_cycle_landmarks() {
    let voice = Voice::builder(Waveform::Sine)
        .envelope(EnvelopeParams::new(0.0, 0.0, 1e9, 1.0, 0.0))
        .frequency(FrequencyParams::constant(1000.0))
        .gain(1.0)
        .build()
        .unwrap();

    assert!(voice.sample_at(0.0, 0.0).abs() < 1e-5);
    assert!((voice.sample_at(0.00025, 0.0) - 1.0).abs() < 1e-5);
    assert!(voice.sample_at(0.0005, 0.0).abs() < 1e-5);

    // same landmarks through the engine: one sample per quarter cycle
    let (mut engine, mut handle) = Engine::new(
        EngineConfig::default()
            .with_sample_rate(4000.0)
            .with_oversampling(1),
    )
    .unwrap();
    handle.play(voice).unwrap();
    let samples = render(&mut engine, 3);
    assert!(samples[0].abs() < 1e-5);
    assert!((samples[1] - 1.0).abs() < 1e-5);
    assert!(samples[2].abs() < 1e-5);
}

#[test]
fn block_size_does_not_change_the_output() {
    let voice = Voice::builder(Waveform::Noise)
        .envelope(EnvelopeParams::new(0.01, 0.05, 0.1, 0.5, 0.2))
        .frequency(FrequencyParams::constant(300.0).with_slide(-400.0))
        .build()
        .unwrap();

    let config = EngineConfig::default().with_seed(7);

    let (mut whole, mut handle) = Engine::new(config).unwrap();
    handle.play(voice).unwrap();
    let expected = render(&mut whole, 4000);

    let (mut chunked, mut handle) = Engine::new(config).unwrap();
    handle.play(voice).unwrap();
    let mut actual = vec![0.0f32; 4000];
    let mut offset = 0;
    for size in [1, 63, 0, 512, 2048, 7].iter().cycle() {
        if offset == actual.len() {
            break;
        }
        let end = (offset + size).min(actual.len());
        chunked.fill_buffer(&mut actual[offset..end]);
        offset = end;
    }

    assert_eq!(expected, actual);
    assert_eq!(whole.elapsed_samples(), chunked.elapsed_samples());
}

#[test]
fn every_preset_renders_bounded_audio() {
    let (mut engine, mut handle) = Engine::new(EngineConfig::default().with_seed(3)).unwrap();
    let mut rng = SmallRng::seed_from_u64(11);

    for preset in Preset::ALL {
        for _ in 0..4 {
            let voice = preset.generate(&mut rng).to_voice().unwrap();
            handle.play(voice).unwrap();

            let len = (voice.duration() * 44_100.0) as usize + 64;
            let samples = render(&mut engine, len);
            assert!(
                samples.iter().all(|s| s.is_finite() && s.abs() <= 1.0),
                "{} out of range",
                preset.name()
            );
            assert!(samples.iter().any(|&s| s != 0.0), "{} is silent", preset.name());
        }
    }
}

/// A voice whose every sample is exactly `-(level²)`: a square wave far below
/// its first edge, with sustain level and gain both set to `level`.
fn marker(level: u32) -> Voice {
    let level = level as f32;
    Voice::builder(Waveform::Square)
        .envelope(EnvelopeParams::new(0.0, 0.0, 1e6, level, 0.0))
        .frequency(FrequencyParams::constant(1e-6))
        .gain(level)
        .build()
        .unwrap()
}

/// Every block must come from exactly one marker voice, in send order.
fn check(block: &[f32], last_level: &mut u32) {
    let first = block[0];
    if first == 0.0 {
        assert!(block.iter().all(|&s| s == 0.0), "partially silent block");
        return;
    }
    assert!(block.iter().all(|&s| s == first), "block mixes two voices");

    let level = (-first).sqrt().round() as u32;
    assert_eq!(-(level as f32 * level as f32), first, "torn voice: {first}");
    assert!(level >= *last_level, "voices arrived out of order");
    *last_level = level;
}

#[test]
fn hot_swaps_never_tear() {
    const VOICES: u32 = 1000;

    let (mut engine, mut handle) = Engine::new(
        EngineConfig::default()
            .with_handoff_capacity(4)
            .with_seed(0),
    )
    .unwrap();

    let producer = thread::spawn(move || {
        for level in 1..=VOICES {
            let voice = marker(level);
            loop {
                let sent = if level % 3 == 0 {
                    handle.play(voice)
                } else {
                    handle.replace(voice)
                };
                match sent {
                    Ok(()) => break,
                    Err(HandoffError::Full(_)) => thread::yield_now(),
                    Err(e) => panic!("handoff failed: {e}"),
                }
            }
        }
        handle
    });

    let mut block = [0.0f32; 64];
    let mut last_level = 0u32;

    while !producer.is_finished() {
        engine.fill_buffer(&mut block);
        check(&block, &mut last_level);
    }
    let _handle = producer.join().unwrap();

    // drain whatever is still queued
    engine.fill_buffer(&mut block);
    check(&block, &mut last_level);
    assert_eq!(last_level, VOICES);
}
