//! Batch statistics over finished trials.

use serde::Serialize;

use crate::Status;
use crate::systems::sdk::Outcome;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub trials: u64,
    pub won: u64,
    pub abandoned: u64,
    pub total_profit: f64,
    pub total_profit_sq: f64,
    pub min_profit: Option<i64>,
    pub max_profit: Option<i64>,
    pub longest_rounds: usize,
}

impl Summary {
    pub fn from_outcomes(outs: &[Outcome]) -> Self {
        let mut s = Self::default();
        for o in outs {
            s.add(o);
        }
        s
    }

    pub fn add(&mut self, o: &Outcome) {
        let p = o.final_profit();
        let n = p as f64;
        self.trials += 1;
        match o.status {
            Status::Won => self.won += 1,
            Status::Abandoned => self.abandoned += 1,
            Status::Running => {}
        }
        self.total_profit += n;
        self.total_profit_sq += n * n;
        self.min_profit = Some(self.min_profit.map_or(p, |m| m.min(p)));
        self.max_profit = Some(self.max_profit.map_or(p, |m| m.max(p)));
        self.longest_rounds = self.longest_rounds.max(o.rounds());
    }

    pub fn merge(&mut self, other: &Summary) {
        self.trials += other.trials;
        self.won += other.won;
        self.abandoned += other.abandoned;
        self.total_profit += other.total_profit;
        self.total_profit_sq += other.total_profit_sq;
        self.min_profit = match (self.min_profit, other.min_profit) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_profit = match (self.max_profit, other.max_profit) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.longest_rounds = self.longest_rounds.max(other.longest_rounds);
    }

    pub fn mean_profit(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_profit / self.trials as f64
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.won as f64 / self.trials as f64
        }
    }

    /// Standard error of the mean final profit.
    pub fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_profit();
        let var = (self.total_profit_sq / self.trials as f64) - mean * mean;
        let var = if var < 0.0 { 0.0 } else { var };
        (var / self.trials as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfitPath;

    fn outcome(index: usize, status: Status, deltas: &[i64]) -> Outcome {
        let mut path = ProfitPath::new();
        for (r, d) in deltas.iter().enumerate() {
            path.push_delta(*d, r + 1).unwrap();
        }
        Outcome { index, status, path }
    }

    #[test]
    fn merge_matches_single_pass() {
        let outs = vec![
            outcome(0, Status::Won, &[-1, 2]),
            outcome(1, Status::Abandoned, &[-1, -2, -4]),
            outcome(2, Status::Won, &[1]),
        ];
        let whole = Summary::from_outcomes(&outs);
        let mut left = Summary::from_outcomes(&outs[..1]);
        left.merge(&Summary::from_outcomes(&outs[1..]));
        assert_eq!(whole, left);
        assert_eq!(whole.won, 2);
        assert_eq!(whole.abandoned, 1);
        assert_eq!(whole.min_profit, Some(-7));
        assert_eq!(whole.max_profit, Some(1));
        assert_eq!(whole.longest_rounds, 3);
        assert!((whole.mean_profit() - (-5.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let s = Summary::default();
        assert_eq!(s.mean_profit(), 0.0);
        assert_eq!(s.stderr(), 0.0);
        assert_eq!(s.win_rate(), 0.0);
    }
}
