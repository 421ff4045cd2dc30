//! Pickup/coin.
//!
//! A short, bright square blip with a punchy attack. Half the time the pitch
//! jumps up partway through: the two-tone "ding-ding" of a collected coin.

use rand::Rng;

use super::spread;
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn pickup_coin(rng: &mut impl Rng) -> SfxrParams {
    let mut p = SfxrParams {
        waveform: Waveform::Square,
        base_freq: 0.4 + spread(rng, 0.5),
        env_attack: 0.0,
        env_sustain: spread(rng, 0.1),
        env_decay: 0.1 + spread(rng, 0.4),
        env_punch: 0.3 + spread(rng, 0.3),
        ..SfxrParams::default()
    };

    if rng.random_bool(0.5) {
        p.arp_speed = 0.5 + spread(rng, 0.2);
        p.arp_mod = 0.2 + spread(rng, 0.4);
    }

    p
}
