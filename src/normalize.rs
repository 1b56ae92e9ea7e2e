//! Normalization of raw metric values into comparable scores
//!
//! Uncalibrated metrics pass through, clamped to their documented bounds.
//! Calibrated metrics go through a logistic of the z-score
//! `(raw - mean) / sigma`; a negative sigma flips the direction so that
//! higher raw values produce lower scores.

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricDefinition, MetricId};

/// Final, reportable value for one metric on one class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedScore {
    pub metric: MetricId,
    /// Algorithm output before normalization
    pub raw: f64,
    /// Bounded score; in `[0, 1]` for calibrated metrics
    pub score: f64,
}

/// Standard logistic function
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

pub fn normalize(raw: f64, definition: &MetricDefinition) -> NormalizedScore {
    let score = match definition.calibration {
        None => definition.id.bounds().clamp(raw),
        Some(calibration) => logistic(calibration.z_score(raw)).clamp(0.0, 1.0),
    };
    NormalizedScore {
        metric: definition.id,
        raw,
        score,
    }
}
