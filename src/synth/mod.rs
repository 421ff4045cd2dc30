// Purpose: turn immutable voices into a continuous, glitch-free sample stream
// This layer sits above the dsp evaluators and owns all render-thread state

pub mod engine;
pub mod render;
pub mod slot;
pub mod voice;

pub use engine::{Engine, EngineConfig};
pub use render::{RenderState, SampleSource, Timebase};
pub use slot::{SlotChange, VoiceCommand, VoiceHandle, VoiceSlot};
pub use voice::{Voice, VoiceBuilder};
