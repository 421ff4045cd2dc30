//! Blip/select: a plain short tone for menus.

use rand::Rng;

use super::spread;
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn blip_select(rng: &mut impl Rng) -> SfxrParams {
    let waveform = if rng.random_bool(0.5) {
        Waveform::Sawtooth
    } else {
        Waveform::Square
    };

    SfxrParams {
        waveform,
        base_freq: 0.2 + spread(rng, 0.4),
        env_attack: 0.0,
        env_sustain: 0.1 + spread(rng, 0.1),
        env_decay: spread(rng, 0.2),
        ..SfxrParams::default()
    }
}
