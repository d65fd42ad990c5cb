// src/systems/sdk.rs

//! # Systems SDK
//!
//! Shared protocol for **betting systems**: self-contained trials that play
//! rounds against a caller-owned generator until they win or hit a step cap.
//!
//! ## What a system implements
//! A system is a state struct implementing [`Trial`]:
//!
//! - `step(&mut self, rng)` plays **one** round and returns the new
//!   [`Status`]. Once terminal, further calls are no-ops that return the
//!   same status.
//! - `status`, `path` expose the current state; `into_path` hands the
//!   finished [`ProfitPath`] over without cloning.
//!
//! The state machine is `Running → Won | Abandoned`. A trial whose cap is
//! zero starts out `Abandoned`.
//!
//! ## Drivers
//! - [`run_trial`]: drive one trial to a terminal state.
//! - [`run_batch`]: `n` trials on one shared stream; reproducible under a
//!   single seed, inherently sequential.
//! - [`run_batch_independent`]: `n` trials, each on its own generator seeded
//!   with `sub_seed(master, index)`. Output does not depend on execution
//!   order, so the `parallel` feature runs it on rayon unchanged.
//!
//! Batch factories return `Result<T, SimError>`, so a constructor's config
//! validation surfaces as the batch error.
//!
//! ## Hooks
//! Implement [`Hook`] to observe trials without touching the system:
//! `on_step` sees the path after every round, `on_finish` sees the outcome.
//! Hooks are only offered on the sequential drivers.
//!
//! Flat betting has no termination condition and is not a `Trial`; see
//! `systems::flat_bet`.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::mechanics::stoch;
use crate::systems::summary::Summary;
use crate::{ProfitPath, SimError, Status};

/// One betting-system run.
pub trait Trial {
    /// Play one round.
    fn step<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<Status, SimError>;
    fn status(&self) -> Status;
    fn path(&self) -> &ProfitPath;
    fn into_path(self) -> ProfitPath;
}

/// Observer for sequential drivers.
pub trait Hook {
    /// (Optional) called after every round with the updated path.
    fn on_step(&mut self, _trial: usize, _path: &ProfitPath) {}
    /// (Optional) called once per trial after it terminates.
    fn on_finish(&mut self, _outcome: &Outcome) {}
}

/// A finished trial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub index: usize,
    pub status: Status,
    pub path: ProfitPath,
}

impl Outcome {
    pub fn final_profit(&self) -> i64 {
        self.path.last()
    }

    pub fn rounds(&self) -> usize {
        self.path.rounds()
    }

    pub fn won(&self) -> bool {
        self.status == Status::Won
    }
}

fn drive<T, R>(
    index: usize,
    mut trial: T,
    rng: &mut R,
    hooks: &mut [Box<dyn Hook>],
) -> Result<Outcome, SimError>
where
    T: Trial,
    R: RngCore + ?Sized,
{
    while !trial.status().is_terminal() {
        if let Err(e) = trial.step(rng) {
            warn!(trial = index, rounds = trial.path().rounds(), error = %e, "trial aborted");
            return Err(e);
        }
        for h in hooks.iter_mut() {
            h.on_step(index, trial.path());
        }
    }
    let status = trial.status();
    if status == Status::Abandoned {
        debug!(trial = index, profit = trial.path().last(), "trial abandoned at cap");
    }
    let outcome = Outcome { index, status, path: trial.into_path() };
    for h in hooks.iter_mut() {
        h.on_finish(&outcome);
    }
    Ok(outcome)
}

/// Drive one trial until it wins or is abandoned.
pub fn run_trial<T, R>(trial: T, rng: &mut R, hooks: &mut [Box<dyn Hook>]) -> Result<Outcome, SimError>
where
    T: Trial,
    R: RngCore + ?Sized,
{
    drive(0, trial, rng, hooks)
}

/// `trials` runs sharing one generator stream, in index order.
pub fn run_batch<T, R, F>(
    trials: usize,
    rng: &mut R,
    mut factory: F,
    hooks: &mut [Box<dyn Hook>],
) -> Result<Vec<Outcome>, SimError>
where
    T: Trial,
    R: RngCore + ?Sized,
    F: FnMut(usize) -> Result<T, SimError>,
{
    let mut outs = Vec::new();
    outs.try_reserve_exact(trials)
        .map_err(|_| SimError::Capacity { field: "batch.trials", requested: trials })?;
    for i in 0..trials {
        outs.push(drive(i, factory(i)?, rng, hooks)?);
    }
    log_batch("shared", &outs);
    Ok(outs)
}

/// `trials` runs, trial `i` on `WyRand` seeded with `sub_seed(master_seed, i)`.
pub fn run_batch_independent<T, F>(
    master_seed: u64,
    trials: usize,
    factory: F,
) -> Result<Vec<Outcome>, SimError>
where
    T: Trial + Send,
    F: Fn(usize) -> Result<T, SimError> + Sync,
{
    let one = |i: usize| -> Result<Outcome, SimError> {
        let mut rng = WyRand::from_seed(stoch::sub_seed(master_seed, i as u64).to_le_bytes());
        drive(i, factory(i)?, &mut rng, &mut [])
    };

    #[cfg(feature = "parallel")]
    let outs: Vec<Outcome> = {
        use rayon::prelude::*;
        (0..trials).into_par_iter().map(one).collect::<Result<Vec<_>, _>>()?
    };
    #[cfg(not(feature = "parallel"))]
    let outs: Vec<Outcome> = (0..trials).map(one).collect::<Result<Vec<_>, _>>()?;

    log_batch("independent", &outs);
    Ok(outs)
}

fn log_batch(mode: &'static str, outs: &[Outcome]) {
    let s = Summary::from_outcomes(outs);
    info!(
        mode,
        trials = s.trials,
        won = s.won,
        abandoned = s.abandoned,
        mean_profit = s.mean_profit(),
        "batch complete"
    );
}
