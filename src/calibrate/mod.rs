//! Baseline calibration from observed raw values
//!
//! Summarises raw metric values across a corpus of classes into
//! distributions, from which a host can derive its own `(mean, sigma)`
//! calibration instead of the built-in catalogue values.

mod profile;

pub use profile::{summarize, MetricDistribution};
