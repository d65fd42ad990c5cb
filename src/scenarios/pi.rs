//! π scene: a seeded sampler plus the static pieces drawn around it.

use bevy_prng::WyRand;

use crate::SimError;
use crate::mechanics::stoch;
use crate::systems::pi_sampler::{PiConfig, PiSampler};
use crate::view::{self, Series};

/// Samples per arc of the reference circle.
pub const CIRCLE_SAMPLES: usize = 50;

pub struct PiScene {
    pub sampler: PiSampler<WyRand>,
    pub circle: (Series, Series),
    /// Both axes span the unit square.
    pub limits: (f64, f64),
}

pub fn pi_scene(cfg: PiConfig, seed: Option<u64>) -> Result<PiScene, SimError> {
    let rng = stoch::seeded(seed)?;
    Ok(PiScene {
        sampler: PiSampler::new(cfg, rng)?,
        circle: view::circle_outline(CIRCLE_SAMPLES),
        limits: (0.0, 1.0),
    })
}
