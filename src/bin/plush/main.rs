//! plush - sound-effect demo
//!
//! Run with: cargo run -- [seed]
//!
//! Plays a square, noise and sine tone for a second each, then one roll of
//! every sfxr category. Pass a seed to hear the same rolls again.

mod app;

use std::{thread, time::Duration};

use app::Player;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use plush::{presets::Preset, EnvelopeParams, FrequencyParams, Voice, Waveform};
use rand::{rngs::SmallRng, SeedableRng};

const TONE_LENGTH: Duration = Duration::from_secs(1);
const PRESET_GAP: Duration = Duration::from_millis(300);

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().wrap_err_with(|| format!("invalid seed {arg:?}"))?,
        None => rand::random(),
    };

    let mut player = Player::open()?;

    for waveform in [Waveform::Square, Waveform::Noise, Waveform::Sine] {
        let tone = Voice::builder(waveform)
            .envelope(EnvelopeParams::new(0.0, 0.2, 0.0, 1.0, 0.3))
            .frequency(FrequencyParams::constant(440.0))
            .gain(0.5)
            .build()?;

        player.play(&format!("{waveform:?}"), tone)?;
        thread::sleep(TONE_LENGTH);
    }

    log::info!("preset seed {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    for preset in Preset::ALL {
        let voice = preset.generate(&mut rng).to_voice()?;
        player.play(preset.name(), voice)?;
        thread::sleep(Duration::from_secs_f32(voice.duration()) + PRESET_GAP);
    }

    player.stop()
}
