//! Distribution of raw metric values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::ClassReport;
use crate::metrics::{Calibration, MetricId};

/// Samples needed before a distribution is considered reliable
const CONFIDENT_SAMPLES: usize = 40;

/// Statistical distribution for a single metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDistribution {
    /// Number of data points (classes)
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub max: f64,
    /// Minimum sample size met for reliable baselines
    pub confident: bool,
}

impl MetricDistribution {
    /// Compute distribution from a list of values (sorted in place).
    /// Non-finite values are ignored.
    pub fn from_values(values: &mut Vec<f64>) -> Self {
        values.retain(|v| v.is_finite());
        if values.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                stddev: 0.0,
                p50: 0.0,
                p75: 0.0,
                p90: 0.0,
                p95: 0.0,
                max: 0.0,
                confident: false,
            };
        }

        values.sort_by(|a, b| a.total_cmp(b));
        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

        Self {
            count: n,
            mean,
            stddev: variance.sqrt(),
            p50: percentile(values, 50.0),
            p75: percentile(values, 75.0),
            p90: percentile(values, 90.0),
            p95: percentile(values, 95.0),
            max: values[n - 1],
            confident: n >= CONFIDENT_SAMPLES,
        }
    }

    /// Calibration with this distribution as baseline.
    ///
    /// `invert` yields a negative sigma, for metrics where a higher raw value
    /// means worse cohesion. None for empty or zero-spread samples.
    pub fn calibration(&self, invert: bool) -> Option<Calibration> {
        if self.count == 0 || self.stddev <= 0.0 {
            return None;
        }
        let sigma = if invert { -self.stddev } else { self.stddev };
        Some(Calibration::new(self.mean, sigma))
    }
}

fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = (pct / 100.0 * (sorted.len() - 1) as f64).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Collect successful raw values per metric across class reports
pub fn summarize(reports: &[ClassReport]) -> BTreeMap<MetricId, MetricDistribution> {
    let mut raw: BTreeMap<MetricId, Vec<f64>> = BTreeMap::new();
    for report in reports {
        for outcome in &report.outcomes {
            if let Some(score) = &outcome.score {
                raw.entry(outcome.metric).or_default().push(score.raw);
            }
        }
    }
    raw.into_iter()
        .map(|(id, mut values)| (id, MetricDistribution::from_values(&mut values)))
        .collect()
}
