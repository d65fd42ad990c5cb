// src/scenarios/mod.rs

// Renderer-facing bundles: run one or more systems and package the results
// as labelled series with axis limits. Feature-gated so library users that
// only need the systems skip them.

pub mod pi;
pub mod roulette;

pub use pi::*;
pub use roulette::*;
