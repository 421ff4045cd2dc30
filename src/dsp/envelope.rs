use crate::error::ConfigError;

/*
Stateless ADSR Envelope
=======================

Retro sound effects are one-shot: there is no key to hold and no note_off to
wait for. The whole volume curve is known up front, so instead of a state
machine stepping a level every sample, the envelope is a pure function of
elapsed time.

Vocabulary
----------

  phase         One of Attack, Decay, Sustain, Release. Each has a fixed
                width in seconds and they are laid end to end.

  local time    Time since the start of the current phase (`u` below).

  sustain level Level held during Sustain. Signed and unbounded: sfxr's
                "punch" pushes it above 1.0, and a negative value gives an
                inverted envelope.


The Shape
---------

  Level
    1.0 ┐  ╱╲
        │ ╱  ╲
    S   │╱    ╲__________
        │                ╲
    0.0 └─────────────────╲──→ Time
        A     D      S     R

    Attack   [0, A)        t / A                         0 → 1
    Decay    u in [0, D)   S + ((D - u) / D) * (1 - S)   1 → S
    Sustain  u in [0, S)   S                             flat
    Release  u in [0, R)   S * (R - u) / R               S → 0
    after                  0

Every phase starts exactly where the previous one ended, so the curve is
continuous at the boundaries. The exception is a zero-width phase: it is
skipped outright and its ramp never happens (e.g. attack = 0 starts the sound
at full level).


Zero-Width Phases
-----------------

A phase of width 0 is never divided by. Each phase is tested with
`u < width`, which is false for width 0 whatever `u` is, so evaluation falls
straight through to the next phase.
*/

/// Attack/decay/sustain/release timings for a one-shot sound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeParams {
    /// Seconds to ramp 0 → 1.
    pub attack_time: f32,
    /// Seconds to ramp 1 → sustain_level.
    pub decay_time: f32,
    /// Seconds to hold sustain_level.
    pub sustain_time: f32,
    /// Level held during sustain. May exceed 1.0 or be negative.
    pub sustain_level: f32,
    /// Seconds to ramp sustain_level → 0.
    pub release_time: f32,
}

impl EnvelopeParams {
    pub fn new(
        attack_time: f32,
        decay_time: f32,
        sustain_time: f32,
        sustain_level: f32,
        release_time: f32,
    ) -> Self {
        Self {
            attack_time,
            decay_time,
            sustain_time,
            sustain_level,
            release_time,
        }
    }

    /// Full level forever. Useful for tests and drones.
    pub fn flat() -> Self {
        Self::new(0.0, 0.0, f32::MAX, 1.0, 0.0)
    }

    /// Total time until the envelope reaches silence for good.
    pub fn duration(&self) -> f32 {
        self.attack_time + self.decay_time + self.sustain_time + self.release_time
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("attack_time", self.attack_time),
            ("decay_time", self.decay_time),
            ("sustain_time", self.sustain_time),
            ("release_time", self.release_time),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { name, value });
            }
        }

        if !self.sustain_level.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "sustain_level",
                value: self.sustain_level,
            });
        }

        Ok(())
    }

    /// Volume multiplier at `t` seconds after the sound started.
    #[inline]
    pub fn vol_at(&self, t: f32) -> f32 {
        vol_at(t, self)
    }
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        // sfxr's reset patch: 0.3 sustain, 0.4 decay sliders
        Self::new(0.0, 0.2, 0.0, 1.0, 0.36)
    }
}

/// Evaluate the envelope at `t` seconds.
pub fn vol_at(t: f32, p: &EnvelopeParams) -> f32 {
    if t < 0.0 {
        return 0.0;
    }

    let mut u = t;

    if u < p.attack_time {
        return u / p.attack_time;
    }
    u -= p.attack_time;

    if u < p.decay_time {
        let remaining = (p.decay_time - u) / p.decay_time;
        return p.sustain_level + remaining * (1.0 - p.sustain_level);
    }
    u -= p.decay_time;

    if u < p.sustain_time {
        return p.sustain_level;
    }
    u -= p.sustain_time;

    if u < p.release_time {
        return p.sustain_level * (p.release_time - u) / p.release_time;
    }

    0.0
}
