//! Jump: a square wave sliding upward.

use rand::Rng;

use super::spread;
use crate::{dsp::Waveform, sfxr::SfxrParams};

pub fn jump(rng: &mut impl Rng) -> SfxrParams {
    SfxrParams {
        waveform: Waveform::Square,
        base_freq: 0.3 + spread(rng, 0.3),
        freq_ramp: 0.1 + spread(rng, 0.2),
        env_attack: 0.0,
        env_sustain: 0.1 + spread(rng, 0.3),
        env_decay: 0.1 + spread(rng, 0.2),
        ..SfxrParams::default()
    }
}
