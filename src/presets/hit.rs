//! Hit/hurt.
//!
//! Short and falling: a quick downward smack in square, saw or noise.

use rand::Rng;

use super::spread;
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn hit_hurt(rng: &mut impl Rng) -> SfxrParams {
    let waveform = match rng.random_range(0..3) {
        0 => Waveform::Square,
        1 => Waveform::Sawtooth,
        _ => Waveform::Noise,
    };

    SfxrParams {
        waveform,
        base_freq: 0.2 + spread(rng, 0.6),
        freq_ramp: -0.3 - spread(rng, 0.4),
        env_attack: 0.0,
        env_sustain: spread(rng, 0.1),
        env_decay: 0.1 + spread(rng, 0.2),
        ..SfxrParams::default()
    }
}
