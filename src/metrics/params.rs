//! Tunable metric parameters
//!
//! Metrics flagged `accepts_parameters` take a [`ParameterSet`]. The recognised
//! keys select which methods take part in the computation:
//!
//! | key | default | effect when `false` |
//! |---|---|---|
//! | `include_ctors` | `true` | constructors are skipped |
//! | `include_static` | `true` | static methods are skipped |
//! | `include_private` | `true` | private methods are skipped |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{MetricDefinition, MetricId};
use crate::error::{MetricError, MetricResult};
use crate::models::Method;

/// Any scalar a config file may hold. Only booleans and 0/1 are accepted; the
/// other variants exist so a wrong value fails with `InvalidParameter` rather
/// than a deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        ParameterValue::Boolean(v)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        ParameterValue::Integer(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        ParameterValue::Float(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        ParameterValue::String(v.to_string())
    }
}

/// Named parameter overrides for one metric invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParameterValue>);

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Which methods of a class participate in a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodFilter {
    pub include_ctors: bool,
    pub include_static: bool,
    pub include_private: bool,
}

impl Default for MethodFilter {
    fn default() -> Self {
        Self {
            include_ctors: true,
            include_static: true,
            include_private: true,
        }
    }
}

impl MethodFilter {
    pub const INCLUDE_CTORS: &'static str = "include_ctors";
    pub const INCLUDE_STATIC: &'static str = "include_static";
    pub const INCLUDE_PRIVATE: &'static str = "include_private";

    /// Build a filter from a parameter set, rejecting unknown keys and
    /// non-boolean values.
    pub fn from_parameters(metric: MetricId, params: &ParameterSet) -> MetricResult<Self> {
        let mut filter = Self::default();
        for (name, value) in params.iter() {
            let slot = match name {
                Self::INCLUDE_CTORS => &mut filter.include_ctors,
                Self::INCLUDE_STATIC => &mut filter.include_static,
                Self::INCLUDE_PRIVATE => &mut filter.include_private,
                _ => {
                    return Err(MetricError::InvalidParameter {
                        metric,
                        name: name.to_string(),
                        reason: "unknown parameter".to_string(),
                    })
                }
            };
            *slot = flag(metric, name, value)?;
        }
        Ok(filter)
    }

    /// Validate `params` against a metric definition and build its filter.
    ///
    /// `None` and an empty set both mean "defaults". Anything else is
    /// [`MetricError::UnsupportedParameters`] for parameter-free metrics.
    pub fn for_metric(
        definition: &MetricDefinition,
        params: Option<&ParameterSet>,
    ) -> MetricResult<Self> {
        match params {
            None => Ok(Self::default()),
            Some(p) if p.is_empty() => Ok(Self::default()),
            Some(_) if !definition.accepts_parameters => Err(MetricError::UnsupportedParameters {
                metric: definition.id,
            }),
            Some(p) => Self::from_parameters(definition.id, p),
        }
    }

    pub fn admits(&self, method: &Method) -> bool {
        (self.include_ctors || !method.is_constructor)
            && (self.include_static || !method.is_static)
            && (self.include_private || !method.is_private)
    }
}

/// Booleans, or the integers 0/1 as emitted by flag-style parameter sources
fn flag(metric: MetricId, name: &str, value: &ParameterValue) -> MetricResult<bool> {
    match value {
        ParameterValue::Boolean(b) => Ok(*b),
        ParameterValue::Integer(0) => Ok(false),
        ParameterValue::Integer(1) => Ok(true),
        other => Err(MetricError::InvalidParameter {
            metric,
            name: name.to_string(),
            reason: format!("expected a boolean or 0/1, got {:?}", other),
        }),
    }
}
