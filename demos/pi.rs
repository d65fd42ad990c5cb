// demos/pi.rs
// Run with:
//   cargo run --example pi

use roulette_lab::mechanics::stoch;
use roulette_lab::systems::pi_sampler::{PiConfig, PiSampler};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), roulette_lab::SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = PiConfig::default();
    let mut sampler = PiSampler::new(cfg, stoch::seeded(None)?)?;
    println!("{}", sampler.label());

    // A renderer would poll one frame per `update_interval`; print every tenth.
    for frame in sampler.by_ref() {
        if frame.frame % 10 == 9 {
            println!("[{:>3}/{}] {}", frame.frame + 1, cfg.frames(), frame);
        }
    }
    info!(points = sampler.total(), inside = sampler.inside(), "sampling complete");
    println!("error -> {:+.7}", sampler.estimate().unwrap_or(0.0) - std::f64::consts::PI);
    Ok(())
}
