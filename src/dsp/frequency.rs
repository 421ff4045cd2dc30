use crate::error::ConfigError;

/*
Pitch Trajectory
================

Laser zaps fall, power-ups rise, explosions rumble down into nothing. The pitch
of a retro sound effect is a curve over time, and the curve is borrowed from
high-school kinematics: constant acceleration.

    f(t) = start + slide·t + delta_slide·t²/2

    start        Hz      where the pitch begins ("position")
    slide        Hz/s    how fast it moves at t = 0 ("velocity")
    delta_slide  Hz/s²   how fast the movement itself changes ("acceleration")

There is no state: the frequency at any instant is computed directly from t.


The Floor
---------

A falling pitch eventually drops below anything audible, or through zero into
negative nonsense. Three behaviors are supported:

    Unbounded   Return the raw formula, negative values included.

    Clamp       Hold at min_freq once f(t) reaches it. Only active when
                min_freq > 0.

    Silence     Once f(t) drops to min_freq or below, return 0. The voice
                treats a zero frequency as "stop making sound". Only active
                when min_freq > 0.

Silence is what makes a "dying pitch" sound end cleanly instead of wrapping
into a low buzz.
*/

/// What happens when the pitch falls to `min_freq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloorPolicy {
    /// Raw formula, no floor.
    Unbounded,
    /// Frequency holds at `min_freq`.
    Clamp,
    /// Frequency becomes 0 (silence) at or below `min_freq`.
    #[default]
    Silence,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyParams {
    /// Pitch at t = 0, in Hz.
    pub start_freq: f32,
    /// Floor in Hz. 0 means no floor.
    pub min_freq: f32,
    /// Hz per second.
    pub slide: f32,
    /// Hz per second squared.
    pub delta_slide: f32,
    pub floor: FloorPolicy,
}

impl FrequencyParams {
    /// A constant pitch.
    pub fn constant(freq: f32) -> Self {
        Self {
            start_freq: freq,
            min_freq: 0.0,
            slide: 0.0,
            delta_slide: 0.0,
            floor: FloorPolicy::Silence,
        }
    }

    pub fn with_slide(mut self, slide: f32) -> Self {
        self.slide = slide;
        self
    }

    pub fn with_delta_slide(mut self, delta_slide: f32) -> Self {
        self.delta_slide = delta_slide;
        self
    }

    /// Silence the sound once the pitch falls to `min_freq`.
    pub fn with_floor(mut self, min_freq: f32) -> Self {
        self.min_freq = min_freq;
        self.floor = FloorPolicy::Silence;
        self
    }

    pub fn with_policy(mut self, floor: FloorPolicy) -> Self {
        self.floor = floor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_freq.is_finite() || self.start_freq <= 0.0 {
            return Err(ConfigError::InvalidFrequency {
                name: "start_freq",
                value: self.start_freq,
            });
        }
        if !self.min_freq.is_finite() || self.min_freq < 0.0 {
            return Err(ConfigError::InvalidFrequency {
                name: "min_freq",
                value: self.min_freq,
            });
        }
        for (name, value) in [("slide", self.slide), ("delta_slide", self.delta_slide)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Instantaneous frequency at `t` seconds.
    #[inline]
    pub fn freq_at(&self, t: f32) -> f32 {
        freq_at(t, self)
    }
}

impl Default for FrequencyParams {
    fn default() -> Self {
        Self::constant(440.0)
    }
}

/// `start + slide·t + delta_slide·t²/2`, with the floor policy applied.
pub fn freq_at(t: f32, p: &FrequencyParams) -> f32 {
    let f = p.start_freq + p.slide * t + p.delta_slide * t * t * 0.5;

    match p.floor {
        FloorPolicy::Silence if p.min_freq > 0.0 && f <= p.min_freq => 0.0,
        FloorPolicy::Clamp if p.min_freq > 0.0 && f < p.min_freq => p.min_freq,
        _ => f,
    }
}
