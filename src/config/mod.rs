//! Analysis configuration
//!
//! Loads per-project metric selection and parameter overrides from
//! `cohesion.toml` or `.cohesionrc.json` in a directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # cohesion.toml
//!
//! [metrics.LCOM]
//! params = { include_ctors = false, include_static = false }
//!
//! [metrics.SCOM]
//! params = { include_private = 0 }
//!
//! [metrics.MWE]
//! enabled = false
//! ```
//!
//! Metric names are matched case-insensitively. Metrics not mentioned run with
//! their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{MetricError, MetricResult};
use crate::metrics::{self, MethodFilter, MetricId, ParameterSet};

/// Top-level analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Per-metric overrides keyed by metric name
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricOverride>,
}

/// Configuration override for a specific metric
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricOverride {
    /// Whether the metric runs (default: true)
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Parameters handed to the metric; must be empty for parameter-free metrics
    #[serde(default)]
    pub params: ParameterSet,
}

/// A metric the analyzer will run, with its validated parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedMetric {
    pub id: MetricId,
    pub params: Option<ParameterSet>,
}

impl AnalysisConfig {
    pub const TOML_FILENAME: &'static str = "cohesion.toml";
    pub const JSON_FILENAME: &'static str = ".cohesionrc.json";

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Disable a metric
    pub fn disable(mut self, metric: MetricId) -> Self {
        self.metrics.entry(metric.name().to_string()).or_default().enabled = Some(false);
        self
    }

    /// Set parameters for a metric
    pub fn with_params(mut self, metric: MetricId, params: ParameterSet) -> Self {
        self.metrics.entry(metric.name().to_string()).or_default().params = params;
        self
    }

    /// Resolve the enabled metrics, in catalogue order, validating every
    /// override up front.
    ///
    /// Fails on unknown metric names, on two keys naming the same metric
    /// (`lcom` and `LCOM`), and on parameters a metric cannot take.
    pub fn plan(&self) -> MetricResult<Vec<PlannedMetric>> {
        let mut overrides: BTreeMap<MetricId, &MetricOverride> = BTreeMap::new();
        for (name, entry) in &self.metrics {
            let metric: MetricId = name.parse()?;
            if overrides.insert(metric, entry).is_some() {
                return Err(MetricError::DuplicateOverride {
                    metric,
                    name: name.clone(),
                });
            }
        }

        let mut planned = Vec::new();
        for definition in metrics::all() {
            let Some(entry) = overrides.get(&definition.id) else {
                planned.push(PlannedMetric {
                    id: definition.id,
                    params: None,
                });
                continue;
            };
            if entry.enabled == Some(false) {
                debug!("Metric {} disabled by configuration", definition.id);
                continue;
            }
            MethodFilter::for_metric(definition, Some(&entry.params))?;
            planned.push(PlannedMetric {
                id: definition.id,
                params: (!entry.params.is_empty()).then(|| entry.params.clone()),
            });
        }
        Ok(planned)
    }
}

/// Load analysis configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `cohesion.toml`
/// 2. `.cohesionrc.json`
///
/// Returns default configuration if no config file is found or the file
/// cannot be parsed.
pub fn load_config(dir: &Path) -> AnalysisConfig {
    let toml_path = dir.join(AnalysisConfig::TOML_FILENAME);
    if toml_path.exists() {
        match load_config_file(&toml_path) {
            Ok(config) => {
                debug!("Loaded analysis config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(AnalysisConfig::JSON_FILENAME);
    if json_path.exists() {
        match load_config_file(&json_path) {
            Ok(config) => {
                debug!("Loaded analysis config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No analysis config found, using defaults");
    AnalysisConfig::default()
}

/// Load configuration from an explicit file; `.json` files are read as JSON,
/// everything else as TOML.
pub fn load_config_file(path: &Path) -> anyhow::Result<AnalysisConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        AnalysisConfig::from_json_str(&content)
    } else {
        AnalysisConfig::from_toml_str(&content)
    }
}
