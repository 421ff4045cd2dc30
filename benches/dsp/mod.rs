//! Benchmarks for single evaluators.

mod envelope;
mod oscillator;
mod pitch;

pub use envelope::bench_envelope;
pub use oscillator::bench_oscillator;
pub use pitch::bench_pitch;
