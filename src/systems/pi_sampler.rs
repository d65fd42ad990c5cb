//! π by uniform sampling.
//!
//! Points land uniformly in the unit square; the fraction inside the circle
//! of radius 1/2 centred at (1/2, 1/2) approaches its area π/4, so
//! `estimate = 4 · inside / total`.
//!
//! [`PiSampler`] is an iterator: every `next()` draws one batch, appends it
//! to the point buffer and yields a [`PiFrame`]. A renderer polls it on its
//! own clock; `PiConfig::update_interval` only reports the intended pace.

use std::fmt;
use std::time::Duration;

use rand_core::RngCore;
use serde::{Deserialize, Serialize};

use crate::SimError;
use crate::config::check_capacity;
use crate::mechanics::stoch;

pub const CENTER: [f64; 2] = [0.5, 0.5];
pub const RADIUS_SQ: f64 = 0.25;

/// Overlay text shown before the first frame.
pub const PENDING_LABEL: &str = "pi ≈ ...";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PiConfig {
    pub batch_size: usize,
    pub max_points: usize,
    pub update_interval_ms: u64,
}

impl Default for PiConfig {
    fn default() -> Self {
        Self { batch_size: 10_000, max_points: 1_000_000, update_interval_ms: 100 }
    }
}

impl PiConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.batch_size == 0 {
            return Err(SimError::invalid("pi.batch_size", "must be > 0"));
        }
        check_capacity::<[f64; 2]>("pi.max_points", self.max_points)
    }

    /// Frame budget: ⌈max_points / batch_size⌉.
    pub fn frames(&self) -> usize {
        self.max_points.div_ceil(self.batch_size.max(1))
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

/// Strictly inside the reference circle.
#[inline]
pub fn inside_circle(p: [f64; 2]) -> bool {
    let dx = p[0] - CENTER[0];
    let dy = p[1] - CENTER[1];
    dx * dx + dy * dy < RADIUS_SQ
}

/// State after one batch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PiFrame {
    /// 0-based frame number.
    pub frame: usize,
    /// Offset of this batch in the point buffer.
    pub batch_start: usize,
    pub batch_len: usize,
    pub batch_inside: usize,
    pub inside: usize,
    pub total: usize,
    pub estimate: f64,
}

impl fmt::Display for PiFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pi ≈ {:.7}", self.estimate)
    }
}

pub struct PiSampler<R> {
    cfg: PiConfig,
    rng: R,
    points: Vec<[f64; 2]>,
    inside: usize,
    frame: usize,
}

impl<R: RngCore> PiSampler<R> {
    pub fn new(cfg: PiConfig, rng: R) -> Result<Self, SimError> {
        cfg.validate()?;
        let mut points = Vec::new();
        points
            .try_reserve_exact(cfg.max_points)
            .map_err(|_| SimError::Capacity { field: "pi.max_points", requested: cfg.max_points })?;
        Ok(Self { points, cfg, rng, inside: 0, frame: 0 })
    }

    pub fn config(&self) -> &PiConfig {
        &self.cfg
    }

    /// Every point drawn so far, in draw order.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn inside(&self) -> usize {
        self.inside
    }

    pub fn total(&self) -> usize {
        self.points.len()
    }

    /// `None` until the first batch.
    pub fn estimate(&self) -> Option<f64> {
        (self.total() > 0).then(|| 4.0 * self.inside as f64 / self.total() as f64)
    }

    /// Current overlay text.
    pub fn label(&self) -> String {
        match self.estimate() {
            Some(e) => format!("pi ≈ {e:.7}"),
            None => PENDING_LABEL.to_string(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.total() >= self.cfg.max_points
    }

    /// Drain the remaining batches and return the final frame.
    pub fn finish(&mut self) -> Option<PiFrame> {
        self.by_ref().last()
    }
}

impl<R: RngCore> Iterator for PiSampler<R> {
    type Item = PiFrame;

    fn next(&mut self) -> Option<PiFrame> {
        let start = self.points.len();
        let to_gen = self.cfg.max_points.saturating_sub(start).min(self.cfg.batch_size);
        if to_gen == 0 {
            return None;
        }

        let mut batch_inside = 0;
        for _ in 0..to_gen {
            let p = stoch::unit_point(&mut self.rng);
            if inside_circle(p) {
                batch_inside += 1;
            }
            self.points.push(p);
        }
        self.inside += batch_inside;

        let frame = PiFrame {
            frame: self.frame,
            batch_start: start,
            batch_len: to_gen,
            batch_inside,
            inside: self.inside,
            total: self.points.len(),
            estimate: 4.0 * self.inside as f64 / self.points.len() as f64,
        };
        self.frame += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cfg.frames().saturating_sub(self.frame);
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_boundary_is_outside() {
        assert!(inside_circle([0.5, 0.5]));
        assert!(!inside_circle([0.0, 0.5]));
        assert!(!inside_circle([0.5, 1.0]));
        assert!(!inside_circle([0.0, 0.0]));
    }

    #[test]
    fn frame_budget_rounds_up() {
        let cfg = PiConfig { batch_size: 3, max_points: 10, update_interval_ms: 100 };
        assert_eq!(cfg.frames(), 4);
        assert_eq!(PiConfig::default().frames(), 100);
        assert_eq!(PiConfig::default().update_interval(), Duration::from_millis(100));
    }
}
