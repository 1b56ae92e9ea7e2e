//! Class cohesion metrics
//!
//! Computes cohesion scores (the LCOM family, TCC/LCC, SCOM, CAMC, NHD, OCC,
//! PCC, CCM, MMAC, MWE) for one class at a time, given its structural shape,
//! and normalizes them against calibrated baselines so that scores are
//! comparable across metrics and codebases.
//!
//! # Example
//!
//! ```rust
//! use cohesion_metrics::{compute, Attribute, ClassStructure, Method};
//!
//! let class = ClassStructure::builder("shop.Cart")
//!     .attribute(Attribute::new("items", "java.util.List"))
//!     .method(Method::new("add").using(["items"]))
//!     .method(Method::new("size").reading(["items"]))
//!     .build()?;
//!
//! let tcc = compute(&class, "TCC", None)?;
//! assert_eq!(tcc.score, 1.0);
//! # Ok::<(), cohesion_metrics::MetricError>(())
//! ```
//!
//! Everything here is pure and synchronous; class structures and the metric
//! catalogue are immutable, so callers may fan out across threads freely.

pub mod calibrate;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod normalize;

pub use config::{load_config, AnalysisConfig, MetricOverride, PlannedMetric};
pub use engine::{compute, compute_metric, Analyzer, ClassReport, MetricOutcome};
pub use error::{MetricError, MetricResult};
pub use metrics::{Calibration, MetricDefinition, MetricId, ParameterSet, ParameterValue};
pub use models::{Attribute, ClassStructure, ClassStructureBuilder, Method};
pub use normalize::{normalize, NormalizedScore};
