//! Martingale doubling: stake starts at `base_stake`, doubles after every
//! loss, and the trial ends at the first win. A won trial always nets
//! exactly `base_stake`.
//!
//! Doubling is checked: a stake that would leave `i64` fails the trial with
//! [`SimError::StakeOverflow`] instead of wrapping. With `base_stake = 1`
//! that takes 63 straight losses. The failing round is not recorded.

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::{check_positive, check_probability};
use crate::mechanics::{stoch, wheel};
use crate::systems::sdk::Trial;
use crate::{ProfitPath, SimError, Status};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MartingaleConfig {
    pub max_trials: usize,
    pub win_probability: f64,
    pub base_stake: i64,
}

impl Default for MartingaleConfig {
    fn default() -> Self {
        Self { max_trials: 1_000, win_probability: wheel::COLOR_WIN_P, base_stake: 1 }
    }
}

impl MartingaleConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        check_probability("martingale.win_probability", self.win_probability)?;
        check_positive("martingale.base_stake", self.base_stake)
    }
}

#[derive(Clone, Debug)]
pub struct Martingale {
    cfg: MartingaleConfig,
    stake: i64,
    losses: u32,
    path: ProfitPath,
    status: Status,
}

impl Martingale {
    pub fn new(cfg: MartingaleConfig) -> Result<Self, SimError> {
        cfg.validate()?;
        let status = if cfg.max_trials == 0 { Status::Abandoned } else { Status::Running };
        Ok(Self {
            stake: cfg.base_stake,
            losses: 0,
            path: ProfitPath::with_rounds(cfg.max_trials.min(64))?,
            status,
            cfg,
        })
    }

    /// Stake for the next round (`base_stake · 2^losses`).
    pub fn stake(&self) -> i64 {
        self.stake
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }
}

impl Trial for Martingale {
    fn step<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<Status, SimError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        let round = self.path.rounds() + 1;
        if stoch::bernoulli(rng, self.cfg.win_probability) {
            self.path.push_delta(self.stake, round)?;
            self.status = Status::Won;
            return Ok(self.status);
        }

        // Every fallible check runs before any field moves: a failed round
        // leaves the trial exactly as it was.
        let next_stake = if round >= self.cfg.max_trials {
            None
        } else {
            let doubled = self
                .stake
                .checked_mul(2)
                .ok_or(SimError::StakeOverflow { round, stake: self.stake })?;
            Some(doubled)
        };
        self.path.push_delta(-self.stake, round)?;
        self.losses += 1;
        match next_stake {
            Some(stake) => self.stake = stake,
            None => self.status = Status::Abandoned,
        }
        Ok(self.status)
    }

    fn status(&self) -> Status {
        self.status
    }

    fn path(&self) -> &ProfitPath {
        &self.path
    }

    fn into_path(self) -> ProfitPath {
        self.path
    }
}
