/// American roulette wheel: 38 pockets (1–36, 0, 00).

pub const POCKETS: u32 = 38;
/// Pockets of one color.
pub const COLOR_POCKETS: u32 = 18;

/// Win probability of an even-money color bet (18/38).
pub const COLOR_WIN_P: f64 = COLOR_POCKETS as f64 / POCKETS as f64;
/// Win probability of a single-number bet (1/38).
pub const NUMBER_WIN_P: f64 = 1.0 / POCKETS as f64;

/// Units won per unit staked.
pub const COLOR_PAYOUT: i64 = 1;
pub const NUMBER_PAYOUT: i64 = 35;

/// Expected profit per unit staked: p·payout − (1 − p).
#[inline]
pub fn expected_value(win_p: f64, payout: i64) -> f64 {
    win_p * payout as f64 - (1.0 - win_p)
}
