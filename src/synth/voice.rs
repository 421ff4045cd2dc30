use crate::{
    dsp::{
        arpeggio::{self, ArpeggioParams},
        envelope::{self, EnvelopeParams},
        frequency::{self, FrequencyParams},
        oscillator::Waveform,
        vibrato::{self, VibratoParams},
    },
    error::ConfigError,
};

/*
Voice
=====

A voice is one complete sound effect: envelope, pitch trajectory, arpeggio
step, vibrato, waveform and gain. Once built it never changes; it is a pure
function from elapsed time to amplitude.

    arp    = arp_at(t)
    freq   = freq_at(t)          0 here means the floor cut in → silence
    vib    = vib_at(t)
    phase  = t · freq / (arp · vib)
    sample = wave(phase) · vol_at(t) · gain


Phase Time
----------

A "proper" oscillator integrates frequency into an accumulated phase:

    phase(t) = ∫ f(τ) dτ

This voice instead multiplies elapsed time by the *instantaneous* frequency.
For a constant pitch the two agree exactly. Once the pitch slides they
diverge: with f(t) = f0 + s·t,

    integrated   f0·t + s·t²/2
    here         f0·t + s·t²

so the audible sweep moves twice as fast as the slide parameter alone would
suggest, and acceleration compounds similarly. That is the sound of this
family of synthesizers and it is kept as-is.

Time arrives in f64 and the phase product stays in f64 until the position
within the cycle is taken. The envelope and pitch curves are evaluated in f32.
A drone minutes into its timeline still lands on the right point of its
cycle, where an f32 `t · freq` would have run out of fractional bits.
*/

/// One fully configured, immutable sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    envelope: EnvelopeParams,
    frequency: FrequencyParams,
    arpeggio: ArpeggioParams,
    vibrato: VibratoParams,
    waveform: Waveform,
    gain: f32,
}

impl Voice {
    /// Start describing a voice with the given waveform.
    pub fn builder(waveform: Waveform) -> VoiceBuilder {
        VoiceBuilder::new(waveform)
    }

    /// Amplitude at `t` seconds into the sound.
    ///
    /// `noise` is a uniform draw in `[-1, 1)`, used only by noise voices.
    #[inline]
    pub fn sample_at(&self, t: f64, noise: f32) -> f32 {
        let Some(phase) = self.phase_time(t) else {
            return 0.0;
        };

        let cycle = (phase - phase.floor()) as f32;
        let raw = self.waveform.sample(cycle, noise);
        raw * envelope::vol_at(t as f32, &self.envelope) * self.gain
    }

    /// Warped time fed to the waveform, `None` once the pitch floor has
    /// silenced the voice.
    #[inline]
    pub fn phase_time(&self, t: f64) -> Option<f64> {
        let t32 = t as f32;
        let freq = frequency::freq_at(t32, &self.frequency);
        if freq == 0.0 {
            return None;
        }

        let divisor =
            arpeggio::arp_at(t32, &self.arpeggio) * vibrato::vib_at(t32, &self.vibrato);
        Some(t * freq as f64 / divisor as f64)
    }

    /// Seconds until the envelope falls silent for good.
    pub fn duration(&self) -> f32 {
        self.envelope.duration()
    }

    pub fn envelope(&self) -> &EnvelopeParams {
        &self.envelope
    }

    pub fn frequency(&self) -> &FrequencyParams {
        &self.frequency
    }

    pub fn arpeggio(&self) -> &ArpeggioParams {
        &self.arpeggio
    }

    pub fn vibrato(&self) -> &VibratoParams {
        &self.vibrato
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }
}

/// Builder for [`Voice`]. Nothing is checked until [`VoiceBuilder::build`].
#[derive(Debug, Clone, Copy)]
pub struct VoiceBuilder {
    envelope: EnvelopeParams,
    frequency: FrequencyParams,
    arpeggio: ArpeggioParams,
    vibrato: VibratoParams,
    waveform: Waveform,
    gain: f32,
}

impl VoiceBuilder {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            envelope: EnvelopeParams::default(),
            frequency: FrequencyParams::default(),
            arpeggio: ArpeggioParams::DISABLED,
            vibrato: VibratoParams::DISABLED,
            waveform,
            gain: 0.5,
        }
    }

    pub fn envelope(mut self, envelope: EnvelopeParams) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn frequency(mut self, frequency: FrequencyParams) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn arpeggio(mut self, arpeggio: ArpeggioParams) -> Self {
        self.arpeggio = arpeggio;
        self
    }

    pub fn vibrato(mut self, vibrato: VibratoParams) -> Self {
        self.vibrato = vibrato;
        self
    }

    pub fn waveform(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Master gain applied after the envelope.
    pub fn gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    /// Validate every parameter and freeze the voice.
    pub fn build(self) -> Result<Voice, ConfigError> {
        self.envelope.validate()?;
        self.frequency.validate()?;
        self.arpeggio.validate()?;
        self.vibrato.validate()?;

        if !self.gain.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "gain",
                value: self.gain,
            });
        }

        Ok(Voice {
            envelope: self.envelope,
            frequency: self.frequency,
            arpeggio: self.arpeggio,
            vibrato: self.vibrato,
            waveform: self.waveform,
            gain: self.gain,
        })
    }
}
