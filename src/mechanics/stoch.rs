/// Stochastic mechanics: seeding, uniform draws and Bernoulli trials.
/// Helpers take any `RngCore` by `&mut` so the caller owns the stream;
/// the crate standardises on `bevy_prng::WyRand`.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

use crate::SimError;

/// Golden-ratio increment used to spread per-trial sub-seeds.
const SUB_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// WyRand from an explicit seed, or from OS entropy when `None`.
pub fn seeded(seed: Option<u64>) -> Result<WyRand, SimError> {
    match seed {
        Some(s) => Ok(WyRand::from_seed(s.to_le_bytes())),
        None => WyRand::try_from_os_rng().map_err(|e| SimError::Entropy(e.to_string())),
    }
}

/// Deterministic sub-seed for trial `index` of a batch seeded with `master`.
#[inline]
pub fn sub_seed(master: u64, index: u64) -> u64 {
    master ^ index.wrapping_mul(SUB_SEED_MIX)
}

/// Uniform on [0, 1) from the top 53 bits.
#[inline]
pub fn uniform01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Bernoulli(p): true when a uniform draw falls below `p`.
#[inline]
pub fn bernoulli<R: RngCore + ?Sized>(rng: &mut R, p: f64) -> bool {
    uniform01(rng) < p.clamp(0.0, 1.0)
}

/// Uniform point in the unit square, x drawn before y.
#[inline]
pub fn unit_point<R: RngCore + ?Sized>(rng: &mut R) -> [f64; 2] {
    let x = uniform01(rng);
    let y = uniform01(rng);
    [x, y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_half_open_unit_interval() {
        let mut rng = WyRand::from_seed(7u64.to_le_bytes());
        for _ in 0..10_000 {
            let u = uniform01(&mut rng);
            assert!((0.0..1.0).contains(&u), "out of range: {u}");
        }
    }

    #[test]
    fn bernoulli_extremes_are_certain() {
        let mut rng = WyRand::from_seed(1u64.to_le_bytes());
        for _ in 0..1_000 {
            assert!(!bernoulli(&mut rng, 0.0));
            assert!(bernoulli(&mut rng, 1.0));
        }
    }

    #[test]
    fn sub_seeds_differ_per_index_and_keep_index_zero() {
        assert_eq!(sub_seed(123, 0), 123);
        assert_ne!(sub_seed(123, 1), sub_seed(123, 2));
    }
}
