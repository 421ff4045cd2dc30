//! Sample-accurate time base for streaming a voice into device buffers.

use rand::Rng;

use crate::synth::voice::Voice;

/*
Streaming Time Base
===================

An audio device asks for audio in blocks of whatever size it likes: 256
samples now, 441 next, 0 when it is shutting down. The render state turns a
stream of such requests into one continuous timeline.

Vocabulary
----------

  sample_index  Count of output samples rendered since the engine started.
                Advanced once per sample, never reset, never skipped.

  voice_start   The sample_index at which the current voice's t = 0 lies.
                Playing a new voice moves it to "now"; replacing parameters
                without a restart leaves it alone.

  oversampling  K evaluations per output sample, evenly spaced across the
                sample's time span and averaged:

                    t_k = (n + k/K) / sample_rate,   k = 0..K

                The average acts as a crude box filter that tames the
                aliasing of square and sawtooth edges. K = 1 evaluates once,
                exactly at n / sample_rate.


Why f64 For Time
----------------

Indices are u64 and the division by sample rate happens in f64, and the voice
receives that f64. A sound effect lasts seconds, but a drone or a chain of
replacements keeps one timeline running for minutes. Past about 32 s the gap
between f32 values is wider than the spacing of 8x sub-samples, so narrowing
here would hand the voice repeated instants.
*/

/// Anything that can produce an amplitude at a point in time.
///
/// [`Voice`] is the production implementation; tests use recording sources to
/// observe the exact instants the engine asks for.
pub trait SampleSource {
    fn sample_at(&self, t: f64, noise: f32) -> f32;
}

impl SampleSource for Voice {
    #[inline]
    fn sample_at(&self, t: f64, noise: f32) -> f32 {
        Voice::sample_at(self, t, noise)
    }
}

/// Fixed device rate and oversampling factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timebase {
    sample_rate: f64,
    oversampling: u32,
}

impl Timebase {
    /// Callers validate: `sample_rate > 0`, `oversampling >= 1`.
    pub(crate) fn new(sample_rate: f32, oversampling: u32) -> Self {
        Self {
            sample_rate: sample_rate as f64,
            oversampling,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate as f32
    }

    pub fn oversampling(&self) -> u32 {
        self.oversampling
    }
}

/// Render-thread-owned position in the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    sample_index: u64,
    voice_start: u64,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output samples rendered so far.
    pub fn sample_index(&self) -> u64 {
        self.sample_index
    }

    pub fn voice_start(&self) -> u64 {
        self.voice_start
    }

    /// Put the current voice's t = 0 at the next sample to be rendered.
    pub fn restart_voice(&mut self) {
        self.voice_start = self.sample_index;
    }

    /// Seconds into the current voice at the next sample to be rendered.
    pub fn voice_time(&self, timebase: &Timebase) -> f64 {
        (self.sample_index - self.voice_start) as f64 / timebase.sample_rate
    }

    /// Fill `out` from `source`, advancing one sample index per slot.
    ///
    /// With no source the block is silent but time still advances. Never
    /// allocates or blocks.
    pub fn render<S, R>(
        &mut self,
        source: Option<&S>,
        timebase: &Timebase,
        noise: &mut R,
        out: &mut [f32],
    ) where
        S: SampleSource + ?Sized,
        R: Rng,
    {
        let Some(source) = source else {
            out.fill(0.0);
            self.sample_index += out.len() as u64;
            return;
        };

        let k = timebase.oversampling.max(1);
        let k_f64 = k as f64;
        let inv_k = 1.0 / k as f32;

        for slot in out.iter_mut() {
            let n = (self.sample_index - self.voice_start) as f64;
            // one draw per output sample, shared by its sub-samples
            let draw: f32 = noise.random_range(-1.0..1.0);

            *slot = if k == 1 {
                source.sample_at(n / timebase.sample_rate, draw)
            } else {
                let mut acc = 0.0f32;
                for sub in 0..k {
                    let t = (n + sub as f64 / k_f64) / timebase.sample_rate;
                    acc += source.sample_at(t, draw);
                }
                acc * inv_k
            };

            self.sample_index += 1;
        }
    }
}
