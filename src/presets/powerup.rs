//! Powerup.
//!
//! A rising sweep, either sawtooth or square. The gentler variant may add
//! vibrato for a shimmering climb.

use rand::Rng;

use super::spread;
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn powerup(rng: &mut impl Rng) -> SfxrParams {
    let waveform = if rng.random_bool(0.5) {
        Waveform::Sawtooth
    } else {
        Waveform::Square
    };

    let mut p = SfxrParams {
        waveform,
        base_freq: 0.2 + spread(rng, 0.3),
        ..SfxrParams::default()
    };

    if rng.random_bool(0.5) {
        p.freq_ramp = 0.1 + spread(rng, 0.4);
    } else {
        p.freq_ramp = 0.05 + spread(rng, 0.2);
        if rng.random_bool(0.5) {
            p.vib_strength = spread(rng, 0.7);
            p.vib_speed = spread(rng, 0.6);
        }
    }

    p.env_attack = 0.0;
    p.env_sustain = spread(rng, 0.4);
    p.env_decay = 0.1 + spread(rng, 0.4);
    p
}
