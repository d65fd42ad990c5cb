/*!
`roulette_lab` — seedable Monte Carlo simulators with plot-ready output.

What it does
- Estimates π by sampling the unit square in batches (`systems::pi_sampler`).
- Walks cumulative profit for roulette betting systems on an American wheel:
  * flat color / number betting (`systems::flat_bet`),
  * Martingale doubling (`systems::martingale`),
  * Labouchere list cancellation (`systems::labouchere`).
- Runs batches of independent trials, sequentially on one stream or with
  per-trial sub-seeds (optionally on rayon), and summarises them.

How to use (call surface only)
- Build a generator with `mechanics::seeded(Some(seed))` (or `None` for OS
  entropy). The caller owns it; nothing in the crate is global.
- Build a config (`Default` carries the classic constants), then either
  * step a trial yourself (`Trial::step`) / iterate `PiSampler`, or
  * call `run_trial`, `run_batch`, `run_batch_independent`.
- With the `scenarios` feature, `scenarios::*` bundles outcomes with labelled
  series and axis limits for a renderer.

What it does NOT do
- No drawing, no animation timer, no CLI. A renderer polls the data.
*/

use serde::Serialize;

pub mod config;
pub mod error;
pub mod mechanics;
pub mod systems;
pub mod view;

#[cfg(feature = "scenarios")]
pub mod scenarios;

pub use config::LabConfig;
pub use error::SimError;
pub use systems::sdk::{Hook, Outcome, Trial, run_batch, run_batch_independent, run_trial};

/// Trial state. `Running` moves to `Won` on a qualifying win or to
/// `Abandoned` at the step cap; nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Running,
    Won,
    Abandoned,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Running)
    }
}

/// Cumulative profit after each round, starting at 0. Append-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfitPath {
    values: Vec<i64>,
}

impl Default for ProfitPath {
    fn default() -> Self {
        Self::new()
    }
}

// Never empty: the leading 0 is always present, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl ProfitPath {
    pub fn new() -> Self {
        Self { values: vec![0] }
    }

    /// Room for `rounds` rounds past the leading 0.
    pub fn with_rounds(rounds: usize) -> Result<Self, SimError> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(rounds.saturating_add(1))
            .map_err(|_| SimError::Capacity { field: "profit_path", requested: rounds })?;
        values.push(0);
        Ok(Self { values })
    }

    /// Append `last + delta`; `round` only labels the error. Nothing is
    /// appended on overflow.
    pub(crate) fn push_delta(&mut self, delta: i64, round: usize) -> Result<i64, SimError> {
        let next = self
            .last()
            .checked_add(delta)
            .ok_or(SimError::ProfitOverflow { round })?;
        self.values.push(next);
        Ok(next)
    }

    pub fn last(&self) -> i64 {
        self.values.last().copied().unwrap_or(0)
    }

    /// Rounds played (length minus the leading 0).
    pub fn rounds(&self) -> usize {
        self.values.len() - 1
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Per-round profit changes.
    pub fn deltas(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.windows(2).map(|w| w[1] - w[0])
    }

    pub fn min(&self) -> i64 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}
