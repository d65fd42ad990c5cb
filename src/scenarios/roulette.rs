//! Roulette scenarios: run a strategy, then package paths as series with
//! the axis limits a renderer needs.

use rand_core::RngCore;
use serde::Serialize;

use crate::config::{BatchConfig, BatchMode};
use crate::mechanics::stoch;
use crate::systems::flat_bet::{self, FlatBetConfig};
use crate::systems::labouchere::{Labouchere, LabouchereConfig};
use crate::systems::martingale::{Martingale, MartingaleConfig};
use crate::systems::sdk::{Outcome, Trial, run_batch, run_batch_independent};
use crate::systems::summary::Summary;
use crate::view::{self, Series};
use crate::{ProfitPath, SimError};

pub const COLOR_LABEL: &str = "Color Betting";
pub const NUMBER_LABEL: &str = "Number Betting";

/// Flat color vs flat number betting over the same number of bets.
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub color: ProfitPath,
    pub number: ProfitPath,
    /// x runs 1..=bets; the leading zero is not plotted.
    pub series: Vec<Series>,
    pub limits: (f64, f64),
}

/// Both walks share one stream: color first, then number.
pub fn color_vs_number(bets: usize, seed: Option<u64>) -> Result<Comparison, SimError> {
    let mut rng = stoch::seeded(seed)?;
    let color = flat_bet::walk(&FlatBetConfig::color(bets), &mut rng)?;
    let number = flat_bet::walk(&FlatBetConfig::number(bets), &mut rng)?;
    let series = vec![
        Series::from_values(COLOR_LABEL, 1, &color.as_slice()[1..]),
        Series::from_values(NUMBER_LABEL, 1, &number.as_slice()[1..]),
    ];
    let limits = view::symmetric_limits(&series);
    Ok(Comparison { color, number, series, limits })
}

#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
    pub summary: Summary,
    pub series: Vec<Series>,
    pub limits: (f64, f64),
}

impl BatchReport {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        let summary = Summary::from_outcomes(&outcomes);
        let series: Vec<Series> = outcomes
            .iter()
            .map(|o| Series::from_path(format!("#{}", o.index), &o.path))
            .collect();
        let limits = view::padded_limits(&series, view::DEFAULT_PADDING, view::DEFAULT_SPAN);
        Self { outcomes, summary, series, limits }
    }
}

pub fn martingale_batch(cfg: MartingaleConfig, batch: BatchConfig) -> Result<BatchReport, SimError> {
    cfg.validate()?;
    let outs = run(&batch, |_| Martingale::new(cfg))?;
    Ok(BatchReport::new(outs))
}

pub fn labouchere_batch(cfg: &LabouchereConfig, batch: BatchConfig) -> Result<BatchReport, SimError> {
    cfg.validate()?;
    let outs = run(&batch, |_| Labouchere::new(cfg))?;
    Ok(BatchReport::new(outs))
}

fn run<T, F>(batch: &BatchConfig, factory: F) -> Result<Vec<Outcome>, SimError>
where
    T: Trial + Send,
    F: Fn(usize) -> Result<T, SimError> + Sync,
{
    batch.validate()?;
    match batch.mode {
        BatchMode::Shared => {
            let mut rng = stoch::seeded(batch.seed)?;
            run_batch(batch.trials, &mut rng, &factory, &mut [])
        }
        BatchMode::Independent => {
            let master = match batch.seed {
                Some(s) => s,
                None => stoch::seeded(None)?.next_u64(),
            };
            run_batch_independent(master, batch.trials, factory)
        }
    }
}
