//! Fixed metric catalogue
//!
//! One [`MetricDefinition`] per [`MetricId`], frozen at compile time. The
//! table is the only source of calibration data; there is no way to add,
//! remove, or mutate entries at runtime.

use serde::{Deserialize, Serialize};

use super::MetricId;
use crate::error::MetricResult;

/// Empirical center and spread of a metric's raw values over a reference
/// corpus.
///
/// `sigma` is a signed scale factor: a negative value inverts the direction of
/// the normalized score (higher raw → lower score).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub mean: f64,
    pub sigma: f64,
}

impl Calibration {
    pub const fn new(mean: f64, sigma: f64) -> Self {
        Self { mean, sigma }
    }

    /// Signed distance from the mean in units of sigma
    pub fn z_score(&self, raw: f64) -> f64 {
        (raw - self.mean) / self.sigma
    }
}

/// Registry entry for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDefinition {
    pub id: MetricId,
    /// Whether callers may pass a [`ParameterSet`](super::ParameterSet)
    pub accepts_parameters: bool,
    /// Present only for metrics whose raw output needs rescaling
    pub calibration: Option<Calibration>,
}

const fn entry(
    id: MetricId,
    accepts_parameters: bool,
    calibration: Option<Calibration>,
) -> MetricDefinition {
    MetricDefinition {
        id,
        accepts_parameters,
        calibration,
    }
}

/// Declaration order here is the report order; it must match `MetricId::all()`.
static DEFINITIONS: [MetricDefinition; 15] = [
    entry(MetricId::Lcom, true, None),
    entry(MetricId::Camc, true, None),
    entry(MetricId::Mmac, true, Some(Calibration::new(0.5, 0.1))),
    entry(MetricId::Lcom5, true, Some(Calibration::new(0.5, -0.1))),
    entry(MetricId::Lcom4, true, Some(Calibration::new(0.5, -0.1))),
    entry(MetricId::Nhd, false, None),
    entry(MetricId::Lcom2, true, None),
    entry(MetricId::Lcom3, true, None),
    entry(MetricId::Scom, true, None),
    entry(MetricId::Occ, true, None),
    entry(MetricId::Pcc, false, None),
    entry(MetricId::Tcc, false, None),
    entry(MetricId::Lcc, false, None),
    entry(MetricId::Ccm, false, None),
    entry(MetricId::Mwe, false, None),
];

/// Every metric definition, in declaration order
pub fn all() -> &'static [MetricDefinition] {
    &DEFINITIONS
}

/// Resolve a metric by (case-insensitive) name.
///
/// Fails with [`MetricError::UnknownMetric`](crate::MetricError::UnknownMetric)
/// for anything outside the catalogue.
pub fn lookup(name: &str) -> MetricResult<&'static MetricDefinition> {
    let id: MetricId = name.parse()?;
    Ok(definition(id))
}

/// Definition for an already-resolved id
pub fn definition(id: MetricId) -> &'static MetricDefinition {
    &DEFINITIONS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;

    #[test]
    fn test_table_matches_declaration_order() {
        let ids: Vec<MetricId> = all().iter().map(|d| d.id).collect();
        assert_eq!(ids, MetricId::all());
        for id in MetricId::all() {
            assert_eq!(definition(*id).id, *id);
        }
    }

    #[test]
    fn test_catalogue_contents() {
        let expected: &[(&str, bool, Option<(f64, f64)>)] = &[
            ("LCOM", true, None),
            ("CAMC", true, None),
            ("MMAC", true, Some((0.5, 0.1))),
            ("LCOM5", true, Some((0.5, -0.1))),
            ("LCOM4", true, Some((0.5, -0.1))),
            ("NHD", false, None),
            ("LCOM2", true, None),
            ("LCOM3", true, None),
            ("SCOM", true, None),
            ("OCC", true, None),
            ("PCC", false, None),
            ("TCC", false, None),
            ("LCC", false, None),
            ("CCM", false, None),
            ("MWE", false, None),
        ];
        assert_eq!(all().len(), expected.len());
        for (def, (name, params, calibration)) in all().iter().zip(expected) {
            assert_eq!(def.id.name(), *name);
            assert_eq!(def.accepts_parameters, *params, "{name}");
            assert_eq!(
                def.calibration.map(|c| (c.mean, c.sigma)),
                *calibration,
                "{name}"
            );
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(
            lookup("XYZ").unwrap_err(),
            MetricError::UnknownMetric("XYZ".to_string())
        );
        assert_eq!(lookup("mmac").unwrap().id, MetricId::Mmac);
    }

    #[test]
    fn test_z_score_keeps_sigma_sign() {
        let c = Calibration::new(0.5, -0.1);
        assert!((c.z_score(0.7) + 2.0).abs() < 1e-9);
        assert!((c.z_score(0.3) - 2.0).abs() < 1e-9);
    }
}
