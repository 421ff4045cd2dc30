//! Stateless evaluators that make up a retro sound effect.
//!
//! Each one maps elapsed time (or phase time) straight to a value with no
//! internal state, so a voice can be evaluated at any instant, in any order,
//! from any thread. They are allocation-free and realtime-safe.

/// One-shot pitch step partway through a sound.
pub mod arpeggio;
/// Four-phase attack/decay/sustain/release volume curve.
pub mod envelope;
/// Quadratic pitch slide with optional floor.
pub mod frequency;
/// Square, sawtooth, sine and noise shapes.
pub mod oscillator;
/// Periodic pitch wobble.
pub mod vibrato;

pub use arpeggio::ArpeggioParams;
pub use envelope::EnvelopeParams;
pub use frequency::{FloorPolicy, FrequencyParams};
pub use oscillator::{Waveform, NOISE_SCALE};
pub use vibrato::VibratoParams;
