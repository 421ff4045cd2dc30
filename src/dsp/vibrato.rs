//! Periodic pitch wobble.
//!
//! Like the arpeggio step, vibrato is expressed as a frequency divisor:
//! `1 + depth · sin(speed · t)`, with `speed` in radians per second. Depth is
//! kept below 1.0 so the divisor stays positive.

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VibratoParams {
    /// Peak relative deviation, in `[0, 1)`. 0 disables vibrato.
    pub depth: f32,
    /// Radians per second.
    pub speed: f32,
}

impl VibratoParams {
    pub const DISABLED: Self = Self {
        depth: 0.0,
        speed: 0.0,
    };

    pub fn new(depth: f32, speed: f32) -> Self {
        Self { depth, speed }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.depth) {
            return Err(ConfigError::InvalidVibratoDepth(self.depth));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::NonFinite {
                name: "vibrato speed",
                value: self.speed,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn vib_at(&self, t: f32) -> f32 {
        vib_at(t, self)
    }
}

#[inline]
pub fn vib_at(t: f32, p: &VibratoParams) -> f32 {
    if p.depth == 0.0 {
        return 1.0;
    }
    1.0 + p.depth * (p.speed * t).sin()
}
