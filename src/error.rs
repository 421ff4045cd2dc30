use crate::synth::voice::Voice;

/// Errors raised while validating a voice or an engine configuration.
///
/// These are only ever produced before audio starts; the render path itself
/// has no failure modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A phase duration (attack, decay, ...) is negative or not finite.
    InvalidDuration { name: &'static str, value: f32 },
    /// A frequency parameter is out of range.
    InvalidFrequency { name: &'static str, value: f32 },
    /// Some other parameter is NaN or infinite where a finite value is needed.
    NonFinite { name: &'static str, value: f32 },
    /// Arpeggio limit is negative or NaN.
    InvalidArpeggioLimit(f32),
    /// Vibrato depth must stay in `[0, 1)` so the frequency divisor never hits zero.
    InvalidVibratoDepth(f32),
    /// Device sample rate is zero, negative or not finite.
    InvalidSampleRate(f32),
    /// Oversampling factor must be at least 1.
    InvalidOversampling(u32),
    /// Handoff queue needs room for at least one voice.
    InvalidHandoffCapacity(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDuration { name, value } => {
                write!(f, "{} must be a finite, non-negative duration, got {}", name, value)
            }
            ConfigError::InvalidFrequency { name, value } => {
                write!(f, "{} is not a usable frequency: {} Hz", name, value)
            }
            ConfigError::NonFinite { name, value } => {
                write!(f, "{} must be finite, got {}", name, value)
            }
            ConfigError::InvalidArpeggioLimit(limit) => {
                write!(f, "arpeggio limit must be >= 0 seconds (or infinite), got {}", limit)
            }
            ConfigError::InvalidVibratoDepth(depth) => {
                write!(f, "vibrato depth must be in [0, 1), got {}", depth)
            }
            ConfigError::InvalidSampleRate(rate) => {
                write!(f, "sample rate must be a positive number of Hz, got {}", rate)
            }
            ConfigError::InvalidOversampling(factor) => {
                write!(f, "oversampling factor must be at least 1, got {}", factor)
            }
            ConfigError::InvalidHandoffCapacity(capacity) => {
                write!(f, "handoff queue capacity must be at least 1, got {}", capacity)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returned to the control thread when a voice could not be handed to the
/// render thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandoffError {
    /// The render side has not drained the queue yet. The rejected voice is
    /// handed back (`None` for a stop request).
    Full(Option<Voice>),
    /// The engine owning the other end of the queue has been dropped.
    Disconnected,
}

impl std::fmt::Display for HandoffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandoffError::Full(_) => {
                write!(f, "voice handoff queue is full (render thread not draining)")
            }
            HandoffError::Disconnected => write!(f, "render engine has been dropped"),
        }
    }
}

impl std::error::Error for HandoffError {}
