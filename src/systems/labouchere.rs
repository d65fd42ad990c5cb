//! Labouchere list cancellation.
//!
//! Each round stakes `first + last` of the ledger (just `first` when one
//! entry is left). A win strikes the consumed entries; a loss appends the
//! lost stake. The trial is won when the ledger empties, at which point the
//! profit equals the sum of the starting ledger.
//!
//! Invariant after every round: `sum(ledger) + profit == sum(start)`.

use std::collections::VecDeque;

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::{check_positive, check_probability};
use crate::mechanics::{stoch, wheel};
use crate::systems::sdk::Trial;
use crate::{ProfitPath, SimError, Status};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabouchereConfig {
    pub start: Vec<i64>,
    pub max_trials: usize,
    pub win_probability: f64,
}

impl Default for LabouchereConfig {
    fn default() -> Self {
        Self { start: vec![1, 2, 3, 4], max_trials: 500, win_probability: wheel::COLOR_WIN_P }
    }
}

impl LabouchereConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        check_probability("labouchere.win_probability", self.win_probability)?;
        if self.start.is_empty() {
            return Err(SimError::invalid("labouchere.start", "must not be empty"));
        }
        for &s in &self.start {
            check_positive("labouchere.start", s)?;
        }
        self.start
            .iter()
            .try_fold(0i64, |acc, &s| acc.checked_add(s))
            .ok_or_else(|| SimError::invalid("labouchere.start", "sum overflows i64"))?;
        Ok(())
    }

    /// Profit a won trial ends on.
    pub fn target(&self) -> i64 {
        self.start.iter().sum()
    }
}

#[derive(Clone, Debug)]
pub struct Labouchere {
    max_trials: usize,
    win_probability: f64,
    ledger: VecDeque<i64>,
    path: ProfitPath,
    status: Status,
}

impl Labouchere {
    pub fn new(cfg: &LabouchereConfig) -> Result<Self, SimError> {
        cfg.validate()?;
        let status = if cfg.max_trials == 0 { Status::Abandoned } else { Status::Running };
        Ok(Self {
            max_trials: cfg.max_trials,
            win_probability: cfg.win_probability,
            ledger: cfg.start.iter().copied().collect(),
            path: ProfitPath::new(),
            status,
        })
    }

    pub fn ledger(&self) -> &VecDeque<i64> {
        &self.ledger
    }

    /// Stake for the next round; `None` once the ledger is empty.
    pub fn next_stake(&self) -> Result<Option<i64>, SimError> {
        let round = self.path.rounds() + 1;
        let (Some(&first), Some(&last)) = (self.ledger.front(), self.ledger.back()) else {
            return Ok(None);
        };
        if self.ledger.len() == 1 {
            return Ok(Some(first));
        }
        first
            .checked_add(last)
            .map(Some)
            .ok_or(SimError::StakeOverflow { round, stake: first })
    }
}

impl Trial for Labouchere {
    fn step<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<Status, SimError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        let round = self.path.rounds() + 1;
        let Some(stake) = self.next_stake()? else {
            self.status = Status::Won;
            return Ok(self.status);
        };

        // Profit first: on overflow the ledger is still untouched.
        if stoch::bernoulli(rng, self.win_probability) {
            self.path.push_delta(stake, round)?;
            self.ledger.pop_front();
            self.ledger.pop_back();
        } else {
            self.path.push_delta(-stake, round)?;
            self.ledger.push_back(stake);
        }

        if self.ledger.is_empty() {
            self.status = Status::Won;
        } else if self.path.rounds() >= self.max_trials {
            self.status = Status::Abandoned;
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
