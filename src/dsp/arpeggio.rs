//! One-shot pitch step.
//!
//! sfxr's "arpeggio" is not a repeating note pattern. It is a single jump in
//! pitch partway through the sound: the classic two-tone coin pickup. Before
//! `limit` the frequency divisor is 1.0; after it, `modulation`.
//!
//! The divisor applies to frequency the way sfxr applies it to the wave
//! period, so `modulation < 1.0` raises the pitch and `> 1.0` lowers it.

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArpeggioParams {
    /// Seconds before the step. `f32::INFINITY` never steps.
    pub limit: f32,
    /// Frequency divisor after the step.
    pub modulation: f32,
}

impl ArpeggioParams {
    /// Never steps.
    pub const DISABLED: Self = Self {
        limit: f32::INFINITY,
        modulation: 1.0,
    };

    pub fn new(limit: f32, modulation: f32) -> Self {
        Self { limit, modulation }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limit.is_nan() || self.limit < 0.0 {
            return Err(ConfigError::InvalidArpeggioLimit(self.limit));
        }
        if !self.modulation.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "arpeggio modulation",
                value: self.modulation,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn arp_at(&self, t: f32) -> f32 {
        arp_at(t, self)
    }
}

impl Default for ArpeggioParams {
    fn default() -> Self {
        Self::DISABLED
    }
}

/// Divisor at `t`: 1.0 up to and including `limit`, `modulation` after.
///
/// A zero modulation is the zero-initialized "no arpeggio" patch, not a
/// request to divide by zero, so it reads as 1.0.
#[inline]
pub fn arp_at(t: f32, p: &ArpeggioParams) -> f32 {
    if t > p.limit && p.modulation != 0.0 {
        p.modulation
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_once_past_the_limit() {
        let p = ArpeggioParams::new(0.1, 0.5);
        let eps = 1e-4;

        assert_eq!(arp_at(0.0, &p), 1.0);
        assert_eq!(arp_at(0.1 - eps, &p), 1.0);
        assert_eq!(arp_at(0.1, &p), 1.0, "limit itself is still before the step");
        assert_eq!(arp_at(0.1 + eps, &p), 0.5);
        assert_eq!(arp_at(30.0, &p), 0.5);
    }

    #[test]
    fn step_edges_for_many_limits() {
        for &limit in &[0.0f32, 0.001, 0.25, 1.0, 7.5] {
            let p = ArpeggioParams::new(limit, 2.0);
            let eps = (limit * 1e-3).max(1e-4);
            assert_eq!(arp_at(limit - eps, &p), 1.0);
            assert_eq!(arp_at(limit + eps, &p), 2.0);
        }
    }

    #[test]
    fn disabled_never_steps() {
        let p = ArpeggioParams::DISABLED;
        for &t in &[0.0, 1.0, 1e9, f32::MAX] {
            assert_eq!(arp_at(t, &p), 1.0);
        }
    }

    #[test]
    fn zero_modulation_is_not_a_divisor() {
        // zero-initialized patch: limit 0, mod 0
        let p = ArpeggioParams::new(0.0, 0.0);
        assert_eq!(arp_at(0.5, &p), 1.0);
    }

    #[test]
    fn validation() {
        assert!(ArpeggioParams::DISABLED.validate().is_ok());
        assert!(ArpeggioParams::new(0.2, 0.6).validate().is_ok());
        assert!(ArpeggioParams::new(-0.1, 0.6).validate().is_err());
        assert!(ArpeggioParams::new(f32::NAN, 0.6).validate().is_err());
        assert!(ArpeggioParams::new(0.2, f32::INFINITY).validate().is_err());
    }
}
