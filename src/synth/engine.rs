use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    error::ConfigError,
    synth::{
        render::{RenderState, Timebase},
        slot::{SlotChange, VoiceHandle, VoiceSlot},
        voice::Voice,
    },
    DEFAULT_OVERSAMPLING, DEFAULT_SAMPLE_RATE,
};

const DEFAULT_HANDOFF_CAPACITY: usize = 16;

/// Settings fixed for the lifetime of an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Device sample rate in Hz.
    pub sample_rate: f32,
    /// Evaluations per output sample (1 disables oversampling).
    pub oversampling: u32,
    /// Voice commands that may queue up between two render blocks.
    pub handoff_capacity: usize,
    /// Noise generator seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_oversampling(mut self, oversampling: u32) -> Self {
        self.oversampling = oversampling;
        self
    }

    pub fn with_handoff_capacity(mut self, capacity: usize) -> Self {
        self.handoff_capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate));
        }
        if self.oversampling == 0 {
            return Err(ConfigError::InvalidOversampling(self.oversampling));
        }
        if self.handoff_capacity == 0 {
            return Err(ConfigError::InvalidHandoffCapacity(self.handoff_capacity));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            oversampling: DEFAULT_OVERSAMPLING,
            handoff_capacity: DEFAULT_HANDOFF_CAPACITY,
            seed: None,
        }
    }
}

/// The render-thread half of the synthesizer.
///
/// Move it into the audio callback and call [`Engine::fill_buffer`] from
/// there. Keep the [`VoiceHandle`] returned by [`Engine::new`] on the control
/// thread to change what is playing.
pub struct Engine {
    timebase: Timebase,
    state: RenderState,
    slot: VoiceSlot,
    noise: SmallRng,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<(Self, VoiceHandle), ConfigError> {
        config.validate()?;

        let noise = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let (slot, handle) = VoiceSlot::new(config.handoff_capacity);

        log::debug!(
            "engine ready: {} Hz, {}x oversampling, handoff capacity {}",
            config.sample_rate,
            config.oversampling,
            config.handoff_capacity
        );

        let engine = Self {
            timebase: Timebase::new(config.sample_rate, config.oversampling),
            state: RenderState::new(),
            slot,
            noise,
        };
        Ok((engine, handle))
    }

    /// Render `buffer.len()` mono samples.
    ///
    /// Picks up any voice handed over since the last call, then renders the
    /// whole block from that one voice. Realtime-safe: no locks, no
    /// allocation, no logging. An empty buffer is fine.
    pub fn fill_buffer(&mut self, buffer: &mut [f32]) {
        match self.slot.sync() {
            SlotChange::Restarted => self.state.restart_voice(),
            SlotChange::Unchanged | SlotChange::Replaced | SlotChange::Stopped => {}
        }

        self.state
            .render(self.slot.read(), &self.timebase, &mut self.noise, buffer);
    }

    /// Output samples rendered since the engine was created.
    pub fn elapsed_samples(&self) -> u64 {
        self.state.sample_index()
    }

    /// Seconds into the current voice.
    pub fn voice_time(&self) -> f64 {
        self.state.voice_time(&self.timebase)
    }

    /// The voice rendered by the most recent block.
    pub fn active_voice(&self) -> Option<&Voice> {
        self.slot.read()
    }

    pub fn sample_rate(&self) -> f32 {
        self.timebase.sample_rate()
    }

    pub fn oversampling(&self) -> u32 {
        self.timebase.oversampling()
    }
}
