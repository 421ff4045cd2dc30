//! Whole-voice and engine benchmarks.
//!
//! These render the sounds the presets actually produce, through the same
//! path a device callback takes.

mod engine;
mod voices;

pub use engine::bench_engine;
pub use voices::bench_voices;
