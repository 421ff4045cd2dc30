//! Randomized generators for the classic sfxr sound categories.
//!
//! Every call rolls a fresh variation: the same recipe sfxr's category buttons
//! use, expressed as [`SfxrParams`]. Pass a seeded RNG for repeatable results.
//!
//! # Example
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//! use plush::presets;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let coin = presets::pickup_coin(&mut rng).to_voice()?;
//! let boom = presets::explosion(&mut rng).to_voice()?;
//! ```

mod blip;
mod coin;
mod explosion;
mod hit;
mod jump;
mod laser;
mod powerup;

pub use blip::blip_select;
pub use coin::pickup_coin;
pub use explosion::explosion;
pub use hit::hit_hurt;
pub use jump::jump;
pub use laser::laser_shoot;
pub use powerup::powerup;

use rand::Rng;

use crate::sfxr::SfxrParams;

/// The sound categories, for picking one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    PickupCoin,
    LaserShoot,
    Explosion,
    Powerup,
    HitHurt,
    Jump,
    BlipSelect,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::PickupCoin,
        Preset::LaserShoot,
        Preset::Explosion,
        Preset::Powerup,
        Preset::HitHurt,
        Preset::Jump,
        Preset::BlipSelect,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::PickupCoin => "pickup/coin",
            Preset::LaserShoot => "laser/shoot",
            Preset::Explosion => "explosion",
            Preset::Powerup => "powerup",
            Preset::HitHurt => "hit/hurt",
            Preset::Jump => "jump",
            Preset::BlipSelect => "blip/select",
        }
    }

    pub fn generate(self, rng: &mut impl Rng) -> SfxrParams {
        match self {
            Preset::PickupCoin => pickup_coin(rng),
            Preset::LaserShoot => laser_shoot(rng),
            Preset::Explosion => explosion(rng),
            Preset::Powerup => powerup(rng),
            Preset::HitHurt => hit_hurt(rng),
            Preset::Jump => jump(rng),
            Preset::BlipSelect => blip_select(rng),
        }
    }
}

/// Uniform in `[0, range]`.
fn spread(rng: &mut impl Rng, range: f32) -> f32 {
    rng.random_range(0.0..=range)
}

/// True one time in `n`.
fn one_in(rng: &mut impl Rng, n: u32) -> bool {
    rng.random_ratio(1, n)
}
