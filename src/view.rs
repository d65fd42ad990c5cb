//! Plot-ready data for an external renderer: labelled series, y-axis limits
//! and the π reference circle. Nothing here draws.

use serde::Serialize;

use crate::ProfitPath;
use crate::systems::pi_sampler::{CENTER, RADIUS_SQ};

pub const DEFAULT_PADDING: f64 = 0.05;
/// Span assumed when every plotted value is equal.
pub const DEFAULT_SPAN: f64 = 1.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points }
    }

    /// x = round index, starting at 0 for the leading zero.
    pub fn from_path(label: impl Into<String>, path: &ProfitPath) -> Self {
        Self::from_values(label, 0, path.as_slice())
    }

    /// x counts up from `x0`.
    pub fn from_values(label: impl Into<String>, x0: usize, values: &[i64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &y)| ((x0 + i) as f64, y as f64))
            .collect();
        Self::new(label, points)
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, &(_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// y-limits covering every series and the x-axis, padded by
/// `padding · span` (`default_span` when the span is zero).
pub fn padded_limits(series: &[Series], padding: f64, default_span: f64) -> (f64, f64) {
    let (lo, hi) = series
        .iter()
        .filter_map(Series::y_range)
        .fold((0.0_f64, 0.0_f64), |(lo, hi), (a, b)| (lo.min(a), hi.max(b)));
    let span = hi - lo;
    let span = if span == 0.0 { default_span } else { span };
    let pad = padding * span;
    (lo - pad, hi + pad)
}

/// y-limits centred on the x-axis: `±max|y|`.
pub fn symmetric_limits(series: &[Series]) -> (f64, f64) {
    let m = series
        .iter()
        .filter_map(Series::y_range)
        .fold(0.0_f64, |m, (lo, hi)| m.max(lo.abs()).max(hi.abs()));
    let m = if m == 0.0 { DEFAULT_SPAN } else { m };
    (-m, m)
}

/// Upper and lower arcs of the π reference circle over `samples` evenly
/// spaced x values in [0, 1].
pub fn circle_outline(samples: usize) -> (Series, Series) {
    let r = RADIUS_SQ.sqrt();
    let xs: Vec<f64> = match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    };
    let upper: Vec<(f64, f64)> = xs
        .iter()
        .map(|&x| {
            let dx = x - CENTER[0];
            (x, (r * r - dx * dx).max(0.0).sqrt() + CENTER[1])
        })
        .collect();
    let lower = upper.iter().map(|&(x, y)| (x, 2.0 * CENTER[1] - y)).collect();
    (Series::new("circle upper", upper), Series::new("circle lower", lower))
}
