//! Metric catalogue and algorithms
//!
//! Every supported cohesion metric is a [`MetricId`]. The registry attaches a
//! fixed [`MetricDefinition`] (parameter flag and optional calibration) to
//! each id, and [`algorithms::evaluate`] dispatches an id to its formula.

pub mod algorithms;
mod params;
mod registry;
mod view;

pub use params::{MethodFilter, ParameterSet, ParameterValue};
pub use registry::{all, definition, lookup, Calibration, MetricDefinition};
pub use view::ClassView;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MetricError;

/// Identifier of a supported metric, in catalogue declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetricId {
    /// Lack of Cohesion in Methods (Chidamber & Kemerer)
    Lcom,
    /// Cohesion Among Methods of Classes
    Camc,
    /// Method-Method through Attributes Cohesion
    Mmac,
    /// Lack of Cohesion in Methods (Henderson-Sellers)
    Lcom5,
    /// Lack of Cohesion in Methods 4 (Hitz & Montazeri)
    Lcom4,
    /// Normalized Hamming Distance
    Nhd,
    /// Lack of Cohesion in Methods 2
    Lcom2,
    /// Lack of Cohesion in Methods 3 (Henderson-Sellers, over used attributes)
    Lcom3,
    /// Sensitive Class Cohesion Metric
    Scom,
    /// Optimistic Class Cohesion
    Occ,
    /// Pessimistic Class Cohesion
    Pcc,
    /// Tight Class Cohesion
    Tcc,
    /// Loose Class Cohesion
    Lcc,
    /// Class Connection Metric
    Ccm,
    /// Maximal Weighted Entropy
    Mwe,
}

impl MetricId {
    pub fn all() -> &'static [MetricId] {
        &[
            MetricId::Lcom,
            MetricId::Camc,
            MetricId::Mmac,
            MetricId::Lcom5,
            MetricId::Lcom4,
            MetricId::Nhd,
            MetricId::Lcom2,
            MetricId::Lcom3,
            MetricId::Scom,
            MetricId::Occ,
            MetricId::Pcc,
            MetricId::Tcc,
            MetricId::Lcc,
            MetricId::Ccm,
            MetricId::Mwe,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetricId::Lcom => "LCOM",
            MetricId::Camc => "CAMC",
            MetricId::Mmac => "MMAC",
            MetricId::Lcom5 => "LCOM5",
            MetricId::Lcom4 => "LCOM4",
            MetricId::Nhd => "NHD",
            MetricId::Lcom2 => "LCOM2",
            MetricId::Lcom3 => "LCOM3",
            MetricId::Scom => "SCOM",
            MetricId::Occ => "OCC",
            MetricId::Pcc => "PCC",
            MetricId::Tcc => "TCC",
            MetricId::Lcc => "LCC",
            MetricId::Ccm => "CCM",
            MetricId::Mwe => "MWE",
        }
    }

    /// Range the raw algorithm output is documented to fall in
    pub fn bounds(&self) -> Bounds {
        match self {
            MetricId::Lcom | MetricId::Lcom4 => Bounds::NON_NEGATIVE,
            MetricId::Lcom5 => Bounds::new(0.0, 2.0),
            _ => Bounds::UNIT,
        }
    }

    /// Whether larger raw values mean a *less* cohesive class
    pub fn is_lack_of_cohesion(&self) -> bool {
        matches!(
            self,
            MetricId::Lcom | MetricId::Lcom2 | MetricId::Lcom3 | MetricId::Lcom4 | MetricId::Lcom5
        )
    }
}

impl std::fmt::Display for MetricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricId {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MetricId::all()
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MetricError::UnknownMetric(s.to_string()))
    }
}

/// Closed interval a raw value is clamped into; `upper` may be infinite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub const UNIT: Bounds = Bounds::new(0.0, 1.0);
    pub const NON_NEGATIVE: Bounds = Bounds::new(0.0, f64::INFINITY);

    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}
