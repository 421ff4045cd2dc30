/*
Waveforms
=========

Every waveform here is a pure function of a single number, the "phase time":
a value whose integer part counts completed cycles and whose fractional part
is the position inside the current cycle.

    phase time   0.00  0.25  0.50  0.75  1.00  1.25 ...
    fract        0.00  0.25  0.50  0.75  0.00  0.25 ...

Nothing is accumulated, so evaluating sample 1000 does not require evaluating
samples 0..999 first.


Fractional Part
---------------

fract(x) = x - floor(x), which lands in [0, 1) for any finite x, negative x
included. (Truncating toward zero instead would give -0.3 for -1.3 and push
the sawtooth below -1.)


The Shapes
----------

SQUARE (50% duty)
    -1 for the first half of the cycle, +1 for the second.

        +1 │    ┌────┐    ┌────
           │    │    │    │
        -1 │────┘    └────┘
           0   0.5   1   1.5

SAWTOOTH
    Linear ramp from -1 to +1, snapping back every cycle.

        +1 │   ╱│   ╱│
           │  ╱ │  ╱ │
        -1 │ ╱  │ ╱  │
           0    1    2

SINE
    sin(2π · fract). Bounded by construction.

NOISE
    Ignores phase. The render engine draws one uniform value in [-1, 1) per
    output sample and passes it in; the generator only scales it by
    NOISE_SCALE. White noise at full scale sounds far louder than a sine at the
    same envelope level, so the scale pulls it back down to match.
*/

/// Loudness match for white noise against the pitched waveforms.
///
/// Tuned by ear, not derived. Noise output stays within
/// `[-NOISE_SCALE, NOISE_SCALE]`.
pub const NOISE_SCALE: f32 = 0.6;

/// Oscillator shape for a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Square,
    Sawtooth,
    Sine,
    Noise,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Sine,
        Waveform::Noise,
    ];

    /// Raw amplitude at `phase_time`. `noise` is only read by [`Waveform::Noise`].
    #[inline]
    pub fn sample(self, phase_time: f32, noise: f32) -> f32 {
        match self {
            Waveform::Square => square(phase_time),
            Waveform::Sawtooth => sawtooth(phase_time),
            Waveform::Sine => sine(phase_time),
            Waveform::Noise => scaled_noise(noise),
        }
    }
}

/// Position within the current cycle, in `[0, 1]`.
///
/// The result is `[0, 1)` in exact arithmetic; in f32 a tiny negative input
/// can round up to exactly 1.0.
#[inline]
pub fn fract(phase_time: f32) -> f32 {
    phase_time - phase_time.floor()
}

#[inline]
pub fn square(phase_time: f32) -> f32 {
    if fract(phase_time) > 0.5 {
        1.0
    } else {
        -1.0
    }
}

#[inline]
pub fn sawtooth(phase_time: f32) -> f32 {
    2.0 * fract(phase_time) - 1.0
}

#[inline]
pub fn sine(phase_time: f32) -> f32 {
    (std::f32::consts::TAU * fract(phase_time)).sin()
}

/// Scale a uniform `[-1, 1)` draw to the noise loudness.
#[inline]
pub fn scaled_noise(uniform: f32) -> f32 {
    uniform * NOISE_SCALE
}
