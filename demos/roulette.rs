// demos/roulette.rs
// Run with:
//   cargo run --example roulette
//   RUST_LOG=roulette_lab=debug cargo run --example roulette -- lab.json

use roulette_lab::LabConfig;
use roulette_lab::config::BatchConfig;
use roulette_lab::scenarios::{color_vs_number, labouchere_batch, martingale_batch};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Optional JSON config as the first argument; classic constants otherwise.
    let cfg = match std::env::args().nth(1) {
        Some(path) => LabConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => LabConfig::default(),
    };

    let cmp = color_vs_number(cfg.flat_bet.bets, cfg.batch.seed)?;
    println!("== Color vs Number ({} bets) ==", cfg.flat_bet.bets);
    println!("Color  final -> {}", cmp.color.last());
    println!("Number final -> {}", cmp.number.last());
    println!("y-limits     -> {:?}", cmp.limits);

    let mart = martingale_batch(cfg.martingale, cfg.batch)?;
    println!("== Martingale ({} sims, cap {}) ==", cfg.batch.trials, cfg.martingale.max_trials);
    println!("{}", serde_json::to_string_pretty(&mart.summary)?);
    println!("y-limits -> {:?}", mart.limits);

    // Labouchere keeps its classic fixed seed unless the config sets one.
    let lab_batch = BatchConfig { seed: cfg.batch.seed.or(Some(123)), ..cfg.batch };
    let lab = labouchere_batch(&cfg.labouchere, lab_batch)?;
    println!("== Labouchere (start {:?}, cap {}) ==", cfg.labouchere.start, cfg.labouchere.max_trials);
    println!("{}", serde_json::to_string_pretty(&lab.summary)?);
    println!("y-limits -> {:?}", lab.limits);

    Ok(())
}
