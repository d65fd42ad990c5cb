pub mod sdk;
pub mod summary;

pub mod flat_bet;
pub mod labouchere;
pub mod martingale;
pub mod pi_sampler;
