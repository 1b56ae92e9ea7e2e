//! Error types for metric computation

use thiserror::Error;

use crate::metrics::MetricId;

/// Errors surfaced by the metric core.
///
/// All of these are caller or upstream-parser defects; none are transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Metric {metric} does not accept parameters")]
    UnsupportedParameters { metric: MetricId },

    #[error("Invalid parameter '{name}' for {metric}: {reason}")]
    InvalidParameter {
        metric: MetricId,
        name: String,
        reason: String,
    },

    #[error("Metric {metric} is configured more than once (again as '{name}')")]
    DuplicateOverride { metric: MetricId, name: String },

    #[error("Malformed class structure '{class}': {reason}")]
    MalformedClassStructure { class: String, reason: String },
}

impl MetricError {
    pub(crate) fn malformed(class: &str, reason: impl Into<String>) -> Self {
        MetricError::MalformedClassStructure {
            class: class.to_string(),
            reason: reason.into(),
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;
