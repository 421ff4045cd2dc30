//! Roll random sounds from one sfxr category and play them back to back.
//!
//! Run with: cargo run --example preset_player -- [category] [count]
//!
//! Categories: coin, laser, explosion, powerup, hit, jump, blip.

use std::{thread, time::Duration};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use plush::{presets::Preset, Engine, EngineConfig, MAX_BLOCK_SIZE};

fn parse_preset(name: &str) -> Option<Preset> {
    Some(match name {
        "coin" => Preset::PickupCoin,
        "laser" => Preset::LaserShoot,
        "explosion" => Preset::Explosion,
        "powerup" => Preset::Powerup,
        "hit" => Preset::HitHurt,
        "jump" => Preset::Jump,
        "blip" => Preset::BlipSelect,
        _ => return None,
    })
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let preset = match args.next() {
        Some(name) => parse_preset(&name).ok_or_else(|| eyre!("unknown category {name:?}"))?,
        None => Preset::PickupCoin,
    };
    let count: usize = match args.next() {
        Some(n) => n.parse().wrap_err("count must be a number")?,
        None => 8,
    };

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    let channels = config.channels() as usize;

    let (mut engine, mut handle) = Engine::new(
        EngineConfig::default().with_sample_rate(config.sample_rate().0 as f32),
    )?;
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            for chunk in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
                let block = &mut render_buf[..chunk.len() / channels];
                engine.fill_buffer(block);
                for (frame, &s) in chunk.chunks_mut(channels).zip(block.iter()) {
                    frame.fill(s);
                }
            }
        },
        |err| log::error!("audio stream error: {err}"),
        None,
    )?;
    stream.play()?;

    let mut rng = rand::rng();
    for i in 0..count {
        let params = preset.generate(&mut rng);
        let voice = params.to_voice()?;
        println!("{} #{}: {:?}", preset.name(), i + 1, params);

        handle.play(voice)?;
        thread::sleep(Duration::from_secs_f32(voice.duration()) + Duration::from_millis(250));
    }

    Ok(())
}
