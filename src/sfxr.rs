//! sfxr slider values → engine units.
//!
//! sfxr describes a sound with sliders in `[0, 1]` (or `[-1, 1]` for signed
//! ones) and interprets them per sample at 44.1 kHz with 8x supersampling.
//! These conversions reproduce those curves in seconds and Hz so any sfxr
//! patch can be built into a [`Voice`].

use crate::{
    dsp::{ArpeggioParams, EnvelopeParams, FloorPolicy, FrequencyParams, VibratoParams, Waveform},
    error::ConfigError,
    synth::voice::Voice,
};

/// The rate sfxr's slider curves were designed against.
pub const AUDIO_RATE: f32 = 44_100.0;
/// sfxr measures wave periods in supersamples.
pub const SUBSAMPLE_RATE: f32 = 8.0 * AUDIO_RATE;
/// sfxr's fixed master volume.
pub const MASTER_VOLUME: f32 = 0.05;

pub fn slider_to_seconds(n: f32) -> f32 {
    n * n * 100_000.0 / AUDIO_RATE
}

pub fn punch_to_level(n: f32) -> f32 {
    1.0 + 2.0 * n
}

/// sfxr's wave period is `100 / (n² + 0.001)` supersamples.
pub fn slider_to_freq(n: f32) -> f32 {
    SUBSAMPLE_RATE * (n * n + 0.001) / 100.0
}

/// The longest period sfxr allows, as a frequency. A non-zero limit slider
/// stops the sound there, a zero slider only holds the pitch.
pub fn slider_to_floor(n: f32) -> f32 {
    SUBSAMPLE_RATE * (n * n + 0.001) / 100.0
}

/// sfxr multiplies the period by `1 - 0.01·n³` every sample. Linearized
/// around the start frequency that is a slide in Hz/s.
pub fn ramp_to_slide(n: f32, start_freq: f32) -> f32 {
    let period_step = 1.0 - n * n * n * 0.01;
    start_freq * AUDIO_RATE * (1.0 / period_step - 1.0)
}

/// sfxr shrinks the period multiplier by `n³·1e-6` every sample, which
/// accelerates the pitch by roughly `f0·rate²·n³·1e-6` Hz/s².
pub fn dramp_to_delta_slide(n: f32, start_freq: f32) -> f32 {
    start_freq * AUDIO_RATE * AUDIO_RATE * (n * n * n) * 1e-6
}

pub fn arp_mod(n: f32) -> f32 {
    if n >= 0.0 {
        1.0 - n * n * 0.9
    } else {
        1.0 + n * n * 10.0
    }
}

/// Seconds before the arpeggio step. A full slider never steps.
pub fn arp_limit(n: f32) -> f32 {
    if n == 1.0 {
        return f32::INFINITY;
    }

    let ip = 1.0 - n;
    let limit_frames = (ip * ip * 20_000.0 + 32.0) as i32;
    limit_frames as f32 / AUDIO_RATE
}

/// Radians per second.
pub fn vib_speed(n: f32) -> f32 {
    0.01 * n * n * AUDIO_RATE
}

pub fn vib_depth(n: f32) -> f32 {
    0.5 * n
}

/// A complete sfxr patch, as slider positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SfxrParams {
    pub waveform: Waveform,

    pub base_freq: f32,
    pub freq_limit: f32,
    /// Signed.
    pub freq_ramp: f32,
    /// Signed.
    pub freq_dramp: f32,

    pub vib_strength: f32,
    pub vib_speed: f32,

    pub env_attack: f32,
    pub env_sustain: f32,
    pub env_punch: f32,
    pub env_decay: f32,

    /// Signed.
    pub arp_mod: f32,
    pub arp_speed: f32,

    /// sfxr's "sound volume" slider; 0.5 is unity.
    pub sound_vol: f32,
}

impl Default for SfxrParams {
    fn default() -> Self {
        Self {
            waveform: Waveform::Square,
            base_freq: 0.3,
            freq_limit: 0.0,
            freq_ramp: 0.0,
            freq_dramp: 0.0,
            vib_strength: 0.0,
            vib_speed: 0.0,
            env_attack: 0.0,
            env_sustain: 0.3,
            env_punch: 0.0,
            env_decay: 0.4,
            arp_mod: 0.0,
            arp_speed: 0.0,
            sound_vol: 0.5,
        }
    }
}

impl SfxrParams {
    pub fn envelope(&self) -> EnvelopeParams {
        EnvelopeParams {
            attack_time: slider_to_seconds(self.env_attack),
            decay_time: slider_to_seconds(self.env_sustain),
            sustain_time: 0.0,
            sustain_level: punch_to_level(self.env_punch),
            release_time: slider_to_seconds(self.env_decay),
        }
    }

    pub fn frequency(&self) -> FrequencyParams {
        let start = slider_to_freq(self.base_freq);
        let policy = if self.freq_limit > 0.0 {
            FloorPolicy::Silence
        } else {
            FloorPolicy::Clamp
        };

        FrequencyParams::constant(start)
            .with_slide(ramp_to_slide(self.freq_ramp, start))
            .with_delta_slide(dramp_to_delta_slide(self.freq_dramp, start))
            .with_floor(slider_to_floor(self.freq_limit))
            .with_policy(policy)
    }

    pub fn arpeggio(&self) -> ArpeggioParams {
        ArpeggioParams::new(arp_limit(self.arp_speed), arp_mod(self.arp_mod))
    }

    pub fn vibrato(&self) -> VibratoParams {
        VibratoParams::new(vib_depth(self.vib_strength), vib_speed(self.vib_speed))
    }

    pub fn gain(&self) -> f32 {
        MASTER_VOLUME * 2.0 * self.sound_vol
    }

    /// Convert every slider and build the voice.
    pub fn to_voice(&self) -> Result<Voice, ConfigError> {
        Voice::builder(self.waveform)
            .envelope(self.envelope())
            .frequency(self.frequency())
            .arpeggio(self.arpeggio())
            .vibrato(self.vibrato())
            .gain(self.gain())
            .build()
            .inspect_err(|err| log::warn!("sfxr patch rejected: {err}"))
    }
}
