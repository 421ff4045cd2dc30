//! Single-owner handoff of voices from a control thread to the render thread.

use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::{error::HandoffError, synth::voice::Voice};

/*
Hot-Swapping Voices
===================

The render thread must never see half of one voice and half of another, and
it must never wait on a lock to find out which voice is current. Both problems
go away if voices are never shared at all:

    control thread                         render thread
    ──────────────                         ─────────────
    build Voice (validated, immutable)
    handle.play(voice) ──► [ queue ] ──►   slot.sync()   (start of each block)
                                           slot.read()   (whole block)

  - A Voice is moved *by value* through a wait-free single-producer,
    single-consumer ring buffer (rtrb). The ring publishes a slot only after
    it is fully written, so the consumer receives either nothing or the whole
    voice.

  - The render side owns its current voice outright. Between two sync() calls
    nothing else can touch it, so one buffer is always rendered from exactly
    one voice.

  - sync() drains what is pending on entry and keeps only the newest command.
    A burst of swaps between two device callbacks collapses to the last one.

  - Voices are plain Copy data: moving them in and out of the ring neither
    allocates nor frees on the render thread.


Commands
--------

    Play(voice)     new sound from its own t = 0
    Replace(voice)  new parameters, current timeline kept
                    (restarts if nothing was playing)
    Stop            silence
*/

/// What the control thread asks the render thread to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoiceCommand {
    Play(Voice),
    Replace(Voice),
    Stop,
}

/// Outcome of draining the handoff queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    /// Nothing was pending.
    Unchanged,
    /// A new voice starts at t = 0.
    Restarted,
    /// Parameters changed, timeline kept.
    Replaced,
    /// Output is now silent.
    Stopped,
}

/// Render-side end: owns the active voice.
pub struct VoiceSlot {
    rx: Consumer<VoiceCommand>,
    active: Option<Voice>,
}

/// Control-side end: hands whole voices to the render thread.
pub struct VoiceHandle {
    tx: Producer<VoiceCommand>,
}

impl VoiceSlot {
    /// Create a connected slot/handle pair. `capacity` bounds how many
    /// commands may be in flight between two render blocks.
    pub fn new(capacity: usize) -> (Self, VoiceHandle) {
        let (tx, rx) = RingBuffer::<VoiceCommand>::new(capacity.max(1));
        (Self { rx, active: None }, VoiceHandle { tx })
    }

    /// Apply pending commands. Only the newest one matters, but a `Play`
    /// anywhere in the burst still restarts the timeline, and so does a voice
    /// arriving in a slot that had nothing playing.
    ///
    /// Drains at most what was queued on entry, so a producer pushing
    /// concurrently cannot keep the render thread here.
    pub fn sync(&mut self) -> SlotChange {
        let pending = self.rx.slots();
        if pending == 0 {
            return SlotChange::Unchanged;
        }

        let mut restart = false;
        for _ in 0..pending {
            let Ok(command) = self.rx.pop() else {
                break;
            };
            match command {
                VoiceCommand::Play(voice) => {
                    restart = true;
                    self.active = Some(voice);
                }
                VoiceCommand::Replace(voice) => {
                    // no timeline to keep
                    restart |= self.active.is_none();
                    self.active = Some(voice);
                }
                VoiceCommand::Stop => self.active = None,
            }
        }

        match self.active {
            None => SlotChange::Stopped,
            Some(_) if restart => SlotChange::Restarted,
            Some(_) => SlotChange::Replaced,
        }
    }

    /// The voice to render this block, if any.
    pub fn read(&self) -> Option<&Voice> {
        self.active.as_ref()
    }

    /// True once the control side has been dropped.
    pub fn is_orphaned(&self) -> bool {
        self.rx.is_abandoned()
    }
}

impl VoiceHandle {
    /// Start `voice` from its beginning.
    pub fn play(&mut self, voice: Voice) -> Result<(), HandoffError> {
        self.send(VoiceCommand::Play(voice))
    }

    /// Swap in `voice` without restarting the timeline.
    pub fn replace(&mut self, voice: Voice) -> Result<(), HandoffError> {
        self.send(VoiceCommand::Replace(voice))
    }

    /// Silence output.
    pub fn stop(&mut self) -> Result<(), HandoffError> {
        self.send(VoiceCommand::Stop)
    }

    /// Commands that can be queued before the render side drains.
    pub fn free_slots(&self) -> usize {
        self.tx.slots()
    }

    fn send(&mut self, command: VoiceCommand) -> Result<(), HandoffError> {
        if self.tx.is_abandoned() {
            return Err(HandoffError::Disconnected);
        }

        match self.tx.push(command) {
            Ok(()) => Ok(()),
            Err(PushError::Full(rejected)) => {
                log::warn!("voice handoff queue full, render thread is not draining");
                let voice = match rejected {
                    VoiceCommand::Play(v) | VoiceCommand::Replace(v) => Some(v),
                    VoiceCommand::Stop => None,
                };
                Err(HandoffError::Full(voice))
            }
        }
    }
}
