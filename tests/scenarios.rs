// tests/scenarios.rs
#![cfg(feature = "scenarios")]

use roulette_lab::LabConfig;
use roulette_lab::config::{BatchConfig, BatchMode};
use roulette_lab::scenarios::{self, COLOR_LABEL, NUMBER_LABEL};
use roulette_lab::systems::labouchere::LabouchereConfig;
use roulette_lab::systems::martingale::MartingaleConfig;
use roulette_lab::systems::pi_sampler::PiConfig;

#[test]
fn color_vs_number_plots_from_the_first_bet() {
    let cmp = scenarios::color_vs_number(1_000, Some(1)).unwrap();
    assert_eq!(cmp.series.len(), 2);
    assert_eq!(cmp.series[0].label, COLOR_LABEL);
    assert_eq!(cmp.series[1].label, NUMBER_LABEL);
    for s in &cmp.series {
        assert_eq!(s.points.len(), 1_000);
        assert_eq!(s.points[0].0, 1.0);
        assert_eq!(s.points[999].0, 1_000.0);
    }
    assert_eq!(cmp.color.len(), 1_001);

    let (lo, hi) = cmp.limits;
    assert_eq!(lo, -hi);
    let extreme = cmp.color.min().abs().max(cmp.color.max().abs())
        .max(cmp.number.min().abs())
        .max(cmp.number.max().abs()) as f64;
    assert!(hi >= extreme);
}

#[test]
fn labouchere_batch_reproduces_under_seed() {
    let cfg = LabouchereConfig::default();
    let a = scenarios::labouchere_batch(&cfg, BatchConfig::seeded(1_000, 123)).unwrap();
    let b = scenarios::labouchere_batch(&cfg, BatchConfig::seeded(1_000, 123)).unwrap();
    assert_eq!(a.outcomes, b.outcomes);
    assert_eq!(a.summary.trials, 1_000);
    assert_eq!(a.summary.won + a.summary.abandoned, 1_000);
    assert_eq!(a.series.len(), 1_000);

    let (lo, hi) = a.limits;
    let min = a.summary.min_profit.unwrap() as f64;
    let max = a.summary.max_profit.unwrap() as f64;
    assert!(lo < min.min(0.0) && hi > max.max(0.0));
    for o in a.outcomes.iter().filter(|o| o.won()) {
        assert_eq!(o.final_profit(), cfg.target());
    }
}

#[test]
fn martingale_batch_independent_mode_is_deterministic() {
    let batch = BatchConfig { trials: 500, seed: Some(99), mode: BatchMode::Independent };
    let a = scenarios::martingale_batch(MartingaleConfig::default(), batch).unwrap();
    let b = scenarios::martingale_batch(MartingaleConfig::default(), batch).unwrap();
    assert_eq!(a.outcomes, b.outcomes);
    assert!(a.summary.won > 0);
    assert_eq!(a.summary.max_profit, Some(1));
}

#[test]
fn invalid_config_fails_before_running() {
    let cfg = LabouchereConfig { win_probability: f64::NAN, ..LabouchereConfig::default() };
    assert!(scenarios::labouchere_batch(&cfg, BatchConfig::seeded(10, 1)).is_err());

    let huge = BatchConfig { trials: usize::MAX, seed: Some(1), mode: BatchMode::Independent };
    let err = scenarios::martingale_batch(MartingaleConfig::default(), huge).unwrap_err();
    assert!(matches!(err, roulette_lab::SimError::InvalidConfig { field: "batch.trials", .. }));
}

#[test]
fn pi_scene_wires_a_seeded_sampler() {
    let cfg = PiConfig { batch_size: 500, max_points: 5_000, update_interval_ms: 100 };
    let mut a = scenarios::pi_scene(cfg, Some(7)).unwrap();
    let mut b = scenarios::pi_scene(cfg, Some(7)).unwrap();
    assert_eq!(a.sampler.finish(), b.sampler.finish());
    assert_eq!(a.circle.0.points.len(), scenarios::CIRCLE_SAMPLES);
    assert_eq!(a.limits, (0.0, 1.0));
}

#[test]
fn lab_config_drives_every_scenario() {
    let cfg = LabConfig::from_json(
        r#"{
            "batch": { "trials": 50, "seed": 123 },
            "flat_bet": { "bets": 200 },
            "martingale": { "max_trials": 40 },
            "labouchere": { "start": [2, 2], "max_trials": 60 },
            "pi": { "batch_size": 100, "max_points": 1000 }
        }"#,
    )
    .unwrap();
    let mart = scenarios::martingale_batch(cfg.martingale, cfg.batch).unwrap();
    assert_eq!(mart.summary.trials, 50);
    assert!(mart.outcomes.iter().all(|o| o.rounds() <= 40));

    let lab = scenarios::labouchere_batch(&cfg.labouchere, cfg.batch).unwrap();
    assert!(lab.outcomes.iter().filter(|o| o.won()).all(|o| o.final_profit() == 4));

    let cmp = scenarios::color_vs_number(cfg.flat_bet.bets, cfg.batch.seed).unwrap();
    assert_eq!(cmp.series[0].points.len(), 200);

    let mut scene = scenarios::pi_scene(cfg.pi, cfg.batch.seed).unwrap();
    assert_eq!(scene.sampler.by_ref().count(), 10);
}
