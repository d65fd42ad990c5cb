//! Flat betting: the same one-unit bet every round for a fixed number of
//! rounds. Covers both the color (18/38, pays 1) and single-number
//! (1/38, pays 35) strategies.

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::{check_capacity, check_positive, check_probability};
use crate::mechanics::{stoch, wheel};
use crate::{ProfitPath, SimError};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatBetConfig {
    pub bets: usize,
    pub win_probability: f64,
    /// Units won on a hit; a miss always loses the one staked unit.
    pub payout: i64,
}

impl Default for FlatBetConfig {
    fn default() -> Self {
        Self::color(10_000)
    }
}

impl FlatBetConfig {
    pub fn color(bets: usize) -> Self {
        Self { bets, win_probability: wheel::COLOR_WIN_P, payout: wheel::COLOR_PAYOUT }
    }

    pub fn number(bets: usize) -> Self {
        Self { bets, win_probability: wheel::NUMBER_WIN_P, payout: wheel::NUMBER_PAYOUT }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        check_probability("flat_bet.win_probability", self.win_probability)?;
        check_positive("flat_bet.payout", self.payout)?;
        check_capacity::<i64>("flat_bet.bets", self.bets.saturating_add(1))
    }
}

/// One round's profit change: `+payout` or `-1`.
#[inline]
pub fn round<R: RngCore + ?Sized>(rng: &mut R, win_probability: f64, payout: i64) -> i64 {
    if stoch::bernoulli(rng, win_probability) { payout } else { -1 }
}

/// Exactly `cfg.bets` rounds; the path has `bets + 1` entries.
pub fn walk<R: RngCore + ?Sized>(cfg: &FlatBetConfig, rng: &mut R) -> Result<ProfitPath, SimError> {
    cfg.validate()?;
    let mut path = ProfitPath::with_rounds(cfg.bets)?;
    for r in 1..=cfg.bets {
        path.push_delta(round(rng, cfg.win_probability, cfg.payout), r)?;
    }
    Ok(path)
}
