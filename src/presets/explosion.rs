//! Explosion.
//!
//! Low noise with a heavy punch. The base slider is squared, pushing it
//! toward the bottom of the range where noise sounds like a rumble rather
//! than a hiss. Some rolls add wobble (vibrato) or a late pitch jump.

use rand::Rng;

use super::{one_in, spread};
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn explosion(rng: &mut impl Rng) -> SfxrParams {
    let (base_freq, mut freq_ramp) = if rng.random_bool(0.5) {
        (0.1 + spread(rng, 0.4), -0.1 + spread(rng, 0.4))
    } else {
        (0.2 + spread(rng, 0.7), -0.2 - spread(rng, 0.2))
    };
    if one_in(rng, 5) {
        freq_ramp = 0.0;
    }

    let mut p = SfxrParams {
        waveform: Waveform::Noise,
        base_freq: base_freq * base_freq,
        freq_ramp,
        env_attack: 0.0,
        env_sustain: 0.1 + spread(rng, 0.3),
        env_decay: spread(rng, 0.5),
        env_punch: 0.2 + spread(rng, 0.6),
        ..SfxrParams::default()
    };

    if rng.random_bool(0.5) {
        p.vib_strength = spread(rng, 0.7);
        p.vib_speed = spread(rng, 0.6);
    }
    if one_in(rng, 3) {
        p.arp_speed = 0.6 + spread(rng, 0.3);
        p.arp_mod = 0.8 - spread(rng, 1.6);
    }

    p
}
