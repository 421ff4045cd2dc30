//! Laser/shoot.
//!
//! A falling zap. Two flavors: a high pitch that drops to a floor and cuts
//! out, or (one roll in three) a longer sweep that dives nearly to nothing.

use rand::Rng;

use super::{one_in, spread};
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn laser_shoot(rng: &mut impl Rng) -> SfxrParams {
    let mut waveform = match rng.random_range(0..3) {
        0 => Waveform::Square,
        1 => Waveform::Sawtooth,
        _ => Waveform::Sine,
    };
    // sine lasers are thin; reroll half of them
    if waveform == Waveform::Sine && rng.random_bool(0.5) {
        waveform = if rng.random_bool(0.5) {
            Waveform::Sawtooth
        } else {
            Waveform::Square
        };
    }

    let mut base_freq = 0.5 + spread(rng, 0.5);
    let mut freq_limit = (base_freq - 0.2 - spread(rng, 0.6)).max(0.2);
    let mut freq_ramp = -0.15 - spread(rng, 0.2);

    if one_in(rng, 3) {
        base_freq = 0.3 + spread(rng, 0.6);
        freq_limit = spread(rng, 0.1);
        freq_ramp = -0.35 - spread(rng, 0.3);
    }

    let env_sustain = 0.1 + spread(rng, 0.2);
    let env_decay = spread(rng, 0.4);
    let env_punch = if rng.random_bool(0.5) {
        spread(rng, 0.3)
    } else {
        0.0
    };

    SfxrParams {
        waveform,
        base_freq,
        freq_limit,
        freq_ramp,
        env_attack: 0.0,
        env_sustain,
        env_decay,
        env_punch,
        ..SfxrParams::default()
    }
}
