//! Device output: owns the cpal stream and the control end of the engine.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};

use plush::{Engine, EngineConfig, Voice, VoiceHandle, MAX_BLOCK_SIZE};

pub struct Player {
    handle: VoiceHandle,
    // dropping the stream stops playback
    _stream: cpal::Stream,
}

impl Player {
    /// Open the default output device and start rendering silence.
    pub fn open() -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        let (mut engine, handle) =
            Engine::new(EngineConfig::default().with_sample_rate(sample_rate))
                .wrap_err("failed to create engine")?;

        log::info!(
            "output: {} @ {} Hz, {} channel(s)",
            device.name().unwrap_or_else(|_| "unknown device".into()),
            sample_rate,
            channels
        );

        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    // Render in blocks, copy mono to every channel
                    for chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
                        let block = &mut render_buf[..chunk.len() / channels];
                        engine.fill_buffer(block);

                        for (frame, &sample) in chunk.chunks_mut(channels).zip(block.iter()) {
                            frame.fill(sample);
                        }
                    }
                },
                |err| log::error!("audio stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        Ok(Self {
            handle,
            _stream: stream,
        })
    }

    pub fn play(&mut self, label: &str, voice: Voice) -> EyreResult<()> {
        log::info!("playing {label} ({:.2} s)", voice.duration());
        self.handle
            .play(voice)
            .wrap_err_with(|| format!("failed to hand off {label}"))
    }

    pub fn stop(&mut self) -> EyreResult<()> {
        self.handle.stop().wrap_err("failed to stop playback")
    }
}
