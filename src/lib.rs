pub mod dsp; // Stateless envelope, pitch and waveform evaluators
pub mod error;
pub mod presets; // Randomized sfxr-style sound generators
pub mod sfxr; // Slider values → engine units
pub mod synth; // Voices, render time base, hot-swap handoff

pub use dsp::{
    ArpeggioParams, EnvelopeParams, FloorPolicy, FrequencyParams, VibratoParams, Waveform,
    NOISE_SCALE,
};
pub use error::{ConfigError, HandoffError};
pub use sfxr::SfxrParams;
pub use synth::{Engine, EngineConfig, Voice, VoiceBuilder, VoiceHandle};

/// Largest block a device callback should hand to [`Engine::fill_buffer`] at once.
pub const MAX_BLOCK_SIZE: usize = 2048;
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
pub const DEFAULT_OVERSAMPLING: u32 = 8;
