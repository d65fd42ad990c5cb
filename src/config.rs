//! Run configuration.
//!
//! Every system owns its own config struct with a `Default` carrying the
//! classic constants. [`LabConfig`] bundles them for callers that want one
//! JSON document; missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::SimError;
use crate::systems::sdk::Outcome;
use crate::systems::flat_bet::FlatBetConfig;
use crate::systems::labouchere::LabouchereConfig;
use crate::systems::martingale::MartingaleConfig;
use crate::systems::pi_sampler::PiConfig;

/// Where each trial of a batch draws its randomness from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchMode {
    /// One stream for the whole batch, trials in order.
    #[default]
    Shared,
    /// One sub-seeded stream per trial; eligible for `parallel`.
    Independent,
}

/// How many trials to run and from which seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub trials: usize,
    /// `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
    pub mode: BatchMode,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { trials: 1_000, seed: None, mode: BatchMode::Shared }
    }
}

impl BatchConfig {
    pub fn seeded(trials: usize, seed: u64) -> Self {
        Self { trials, seed: Some(seed), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        check_capacity::<Outcome>("batch.trials", self.trials)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub batch: BatchConfig,
    pub flat_bet: FlatBetConfig,
    pub martingale: MartingaleConfig,
    pub labouchere: LabouchereConfig,
    pub pi: PiConfig,
}

impl LabConfig {
    /// Parse then validate.
    pub fn from_json(s: &str) -> Result<Self, SimError> {
        let cfg: LabConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.batch.validate()?;
        self.flat_bet.validate()?;
        self.martingale.validate()?;
        self.labouchere.validate()?;
        self.pi.validate()
    }
}

pub(crate) fn check_probability(field: &'static str, p: f64) -> Result<(), SimError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SimError::invalid(field, format!("must be within [0, 1] (got={p})")));
    }
    Ok(())
}

/// `n` elements of `T` must fit in one allocation (at most `isize::MAX` bytes).
pub(crate) fn check_capacity<T>(field: &'static str, n: usize) -> Result<(), SimError> {
    let fits = n
        .checked_mul(std::mem::size_of::<T>())
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        return Err(SimError::invalid(field, format!("too large to allocate (got={n})")));
    }
    Ok(())
}

pub(crate) fn check_positive(field: &'static str, v: i64) -> Result<(), SimError> {
    if v <= 0 {
        return Err(SimError::invalid(field, format!("must be > 0 (got={v})")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = LabConfig::from_json(
            r#"{ "batch": { "seed": 123, "mode": "independent" }, "labouchere": { "max_trials": 50 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.batch.seed, Some(123));
        assert_eq!(cfg.batch.mode, BatchMode::Independent);
        assert_eq!(cfg.batch.trials, 1_000);
        assert_eq!(cfg.labouchere.max_trials, 50);
        assert_eq!(cfg.labouchere.start, vec![1, 2, 3, 4]);
        assert_eq!(cfg.pi, PiConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = LabConfig::from_json(r#"{ "martingale": { "win_probability": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "martingale.win_probability", .. }));

        let err = LabConfig::from_json(r#"{ "pi": { "batch_size": 0 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "pi.batch_size", .. }));

        let err = LabConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn unallocatable_sizes_are_rejected() {
        let err = LabConfig::from_json(r#"{ "pi": { "max_points": 18446744073709551615 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "pi.max_points", .. }));

        let err = LabConfig::from_json(r#"{ "flat_bet": { "bets": 18446744073709551615 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "flat_bet.bets", .. }));

        let err = LabConfig::from_json(r#"{ "batch": { "trials": 18446744073709551615 } }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { field: "batch.trials", .. }));
    }

    #[test]
    fn nan_probability_is_rejected() {
        assert!(check_probability("p", f64::NAN).is_err());
    }
}
