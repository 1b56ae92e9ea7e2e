//! Metric facade and batch analyzer
//!
//! [`compute`] is the single computational entry point: resolve the metric,
//! validate parameters, run the algorithm, normalize. [`Analyzer`] drives a
//! configured set of metrics over many classes, recording per-metric failures
//! instead of aborting.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{AnalysisConfig, PlannedMetric};
use crate::error::MetricResult;
use crate::metrics::{
    self, algorithms, ClassView, MethodFilter, MetricDefinition, MetricId, ParameterSet,
};
use crate::models::ClassStructure;
use crate::normalize::{normalize, NormalizedScore};

/// Compute metric `metric` (by name) for `class`.
///
/// # Errors
/// - `UnknownMetric` if the name is not in the catalogue
/// - `UnsupportedParameters` if a non-empty set is passed to a parameter-free metric
/// - `InvalidParameter` for unrecognised keys or values
pub fn compute(
    class: &ClassStructure,
    metric: &str,
    params: Option<&ParameterSet>,
) -> MetricResult<NormalizedScore> {
    compute_with(class, metrics::lookup(metric)?, params)
}

/// Same as [`compute`] for an already-resolved id
pub fn compute_metric(
    class: &ClassStructure,
    metric: MetricId,
    params: Option<&ParameterSet>,
) -> MetricResult<NormalizedScore> {
    compute_with(class, metrics::definition(metric), params)
}

fn compute_with(
    class: &ClassStructure,
    definition: &MetricDefinition,
    params: Option<&ParameterSet>,
) -> MetricResult<NormalizedScore> {
    let filter = MethodFilter::for_metric(definition, params)?;
    let view = ClassView::new(class, &filter);
    let raw = algorithms::evaluate(definition.id, &view);
    let score = normalize(raw, definition);
    debug!(
        "{} {}: raw={:.4} score={:.4} ({} methods, {} attributes)",
        class.name(),
        definition.id,
        raw,
        score.score,
        view.method_count(),
        view.attribute_count()
    );
    Ok(score)
}

/// Result of one metric on one class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricOutcome {
    pub metric: MetricId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<NormalizedScore>,
    /// Error message if the metric failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MetricOutcome {
    pub fn success(score: NormalizedScore) -> Self {
        Self {
            metric: score.metric,
            score: Some(score),
            error: None,
        }
    }

    pub fn failure(metric: MetricId, error: String) -> Self {
        Self {
            metric,
            score: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.score.is_some()
    }
}

/// All metric outcomes for one class, in catalogue order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    pub class_name: String,
    pub outcomes: Vec<MetricOutcome>,
}

impl ClassReport {
    pub fn score(&self, metric: MetricId) -> Option<&NormalizedScore> {
        self.outcomes
            .iter()
            .find(|o| o.metric == metric)
            .and_then(|o| o.score.as_ref())
    }

    pub fn failures(&self) -> impl Iterator<Item = &MetricOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Runs a fixed plan of metrics over classes
#[derive(Debug, Clone)]
pub struct Analyzer {
    plan: Vec<PlannedMetric>,
}

impl Analyzer {
    /// Build from configuration; unknown metrics and bad parameters fail here
    pub fn new(config: &AnalysisConfig) -> MetricResult<Self> {
        let plan = config.plan()?;
        debug!("Analyzer planned {} metrics", plan.len());
        Ok(Self { plan })
    }

    /// Build from an explicit plan without validating it up front; invalid
    /// entries surface as per-metric failures.
    pub fn from_plan(plan: Vec<PlannedMetric>) -> Self {
        Self { plan }
    }

    pub fn metrics(&self) -> impl Iterator<Item = MetricId> + '_ {
        self.plan.iter().map(|p| p.id)
    }

    pub fn analyze_class(&self, class: &ClassStructure) -> ClassReport {
        let outcomes = self
            .plan
            .iter()
            .map(
                |planned| match compute_metric(class, planned.id, planned.params.as_ref()) {
                    Ok(score) => MetricOutcome::success(score),
                    Err(e) => {
                        warn!("Metric {} failed for {}: {}", planned.id, class.name(), e);
                        MetricOutcome::failure(planned.id, e.to_string())
                    }
                },
            )
            .collect();
        ClassReport {
            class_name: class.name().to_string(),
            outcomes,
        }
    }

    /// Analyze classes in parallel; reports come back in input order
    pub fn analyze_classes(&self, classes: &[ClassStructure]) -> Vec<ClassReport> {
        classes
            .par_iter()
            .map(|class| self.analyze_class(class))
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            plan: MetricId::all()
                .iter()
                .map(|&id| PlannedMetric { id, params: None })
                .collect(),
        }
    }
}
