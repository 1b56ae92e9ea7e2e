//! Integration tests for the metric catalogue, facade, and batch analyzer
//!
//! These exercise the public API end to end:
//! - Catalogue lookup and calibration shape
//! - Normalization laws (pass-through, monotonicity, bounds)
//! - Degenerate classes across every metric
//! - Parameter validation
//! - Batch analysis driven by a configuration file

use cohesion_metrics::calibrate::summarize;
use cohesion_metrics::metrics::{self, MethodFilter};
use cohesion_metrics::{
    compute, compute_metric, load_config, normalize, AnalysisConfig, Analyzer, Attribute,
    ClassStructure, Method, MetricError, MetricId, ParameterSet,
};

fn two_methods(m1: &[&str], m2: &[&str]) -> ClassStructure {
    ClassStructure::builder("fixture.Pair")
        .attribute(Attribute::new("a1", "int"))
        .attribute(Attribute::new("a2", "int"))
        .method(Method::new("m1").using(m1.iter().copied()))
        .method(Method::new("m2").using(m2.iter().copied()))
        .build()
        .expect("valid fixture")
}

fn lonely() -> ClassStructure {
    ClassStructure::builder("fixture.Lonely")
        .method(Method::new("only"))
        .build()
        .expect("valid fixture")
}

#[test]
fn test_every_definition_is_consistent() {
    for def in metrics::all() {
        let found = metrics::lookup(def.id.name()).unwrap();
        assert_eq!(found, def);
        if let Some(c) = def.calibration {
            assert!(c.mean.is_finite() && c.sigma.is_finite() && c.sigma != 0.0);
        }
    }
}

#[test]
fn test_lookup_unknown_metric() {
    assert!(matches!(
        metrics::lookup("XYZ"),
        Err(MetricError::UnknownMetric(ref name)) if name == "XYZ"
    ));
}

#[test]
fn test_uncalibrated_pass_through() {
    for def in metrics::all().iter().filter(|d| d.calibration.is_none()) {
        for raw in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_eq!(normalize(raw, def).score, raw);
        }
    }
}

#[test]
fn test_calibrated_monotonic_and_bounded() {
    for def in metrics::all().iter().filter(|d| d.calibration.is_some()) {
        let sigma = def.calibration.unwrap().sigma;
        let mut previous: Option<f64> = None;
        for i in -50..=50 {
            let raw = i as f64 * 0.1;
            let score = normalize(raw, def).score;
            assert!((0.0..=1.0).contains(&score), "{}: {score}", def.id);
            if let Some(prev) = previous {
                if sigma > 0.0 {
                    assert!(score >= prev, "{} should not decrease", def.id);
                } else {
                    assert!(score <= prev, "{} should not increase", def.id);
                }
            }
            previous = Some(score);
        }
    }
}

#[test]
fn test_lcom5_negative_sigma_flips_direction() {
    let low = normalize(0.2, metrics::definition(MetricId::Lcom5)).score;
    let high = normalize(0.8, metrics::definition(MetricId::Lcom5)).score;
    assert!(low > 0.5);
    assert!(high < 0.5);
}

#[test]
fn test_degenerate_class_every_metric() {
    let class = lonely();
    for id in MetricId::all() {
        let score = compute_metric(&class, *id, None).unwrap();
        assert!(score.raw.is_finite(), "{id}");
        assert!(score.score.is_finite(), "{id}");
        let expected_raw = match id {
            MetricId::Lcom | MetricId::Lcom2 | MetricId::Lcom3 | MetricId::Lcom5 => 0.0,
            _ => 1.0,
        };
        assert_eq!(score.raw, expected_raw, "{id}");
    }
}

#[test]
fn test_overlap_scenario() {
    let disjoint = two_methods(&["a1"], &["a2"]);
    let shared = two_methods(&["a1", "a2"], &["a1", "a2"]);

    // lack-of-cohesion metrics peak on the disjoint class, bottom out on the shared one
    for name in ["LCOM", "LCOM2", "LCOM3", "LCOM5"] {
        let d = compute(&disjoint, name, None).unwrap().raw;
        let s = compute(&shared, name, None).unwrap().raw;
        assert!(d > 0.0, "{name}: {d}");
        assert_eq!(s, 0.0, "{name}");
    }
    assert_eq!(compute(&disjoint, "LCOM4", None).unwrap().raw, 2.0);
    assert_eq!(compute(&shared, "LCOM4", None).unwrap().raw, 1.0);

    for name in ["TCC", "LCC", "SCOM", "OCC", "CCM", "MMAC", "MWE"] {
        assert_eq!(compute(&disjoint, name, None).unwrap().raw, 0.0, "{name}");
        assert_eq!(compute(&shared, name, None).unwrap().raw, 1.0, "{name}");
    }
}

#[test]
fn test_uncalibrated_scores_stay_in_unit_range() {
    // five methods, each on its own attribute
    let mut builder = ClassStructure::builder("fixture.Scattered");
    for i in 0..5 {
        let attr = format!("a{i}");
        builder = builder
            .attribute(Attribute::new(attr.clone(), "int"))
            .method(Method::new(format!("m{i}")).reading([attr]));
    }
    let class = builder.build().unwrap();

    let lcom3 = compute(&class, "LCOM3", None).unwrap();
    assert_eq!(lcom3.raw, 1.0);
    assert_eq!(lcom3.score, 1.0);

    for def in metrics::all().iter().filter(|d| d.calibration.is_none()) {
        if matches!(def.id, MetricId::Lcom | MetricId::Lcom4) {
            continue;
        }
        let score = compute_metric(&class, def.id, None).unwrap().score;
        assert!((0.0..=1.0).contains(&score), "{}: {score}", def.id);
    }
}

#[test]
fn test_parameter_free_metrics_reject_parameters() {
    let class = two_methods(&["a1"], &["a2"]);
    let params = ParameterSet::new().with(MethodFilter::INCLUDE_STATIC, false);
    for name in ["NHD", "PCC", "TCC", "LCC", "CCM", "MWE"] {
        let err = compute(&class, name, Some(&params)).unwrap_err();
        assert!(
            matches!(err, MetricError::UnsupportedParameters { .. }),
            "{name}: {err}"
        );
    }
}

#[test]
fn test_compute_is_pure() {
    let class = two_methods(&["a1"], &["a1", "a2"]);
    for id in MetricId::all() {
        let first = compute_metric(&class, *id, None).unwrap();
        let second = compute_metric(&class, *id, None).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_json_class_round_trip() {
    let json = r#"{
        "name": "io.Buffer",
        "attributes": [{"name": "data", "type_name": "byte[]"}, {"name": "pos", "type_name": "int"}],
        "methods": [
            {"name": "read", "reads": ["data", "pos"], "writes": ["pos"], "parameter_types": ["int"]},
            {"name": "reset", "writes": ["pos"], "calls": ["read"]}
        ]
    }"#;
    let class: ClassStructure = serde_json::from_str(json).unwrap();
    assert_eq!(compute(&class, "TCC", None).unwrap().raw, 1.0);

    let reparsed: ClassStructure =
        serde_json::from_str(&serde_json::to_string(&class).unwrap()).unwrap();
    assert_eq!(reparsed, class);
}

#[test]
fn test_malformed_json_rejected() {
    let json = r#"{"name": "Bad", "methods": [{"name": "m", "reads": ["ghost"]}]}"#;
    let err = serde_json::from_str::<ClassStructure>(json).unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn test_configured_batch_analysis() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(AnalysisConfig::TOML_FILENAME),
        r#"
[metrics.LCOM4]
params = { include_ctors = false }

[metrics.NHD]
enabled = false
"#,
    )
    .unwrap();

    let config = load_config(dir.path());
    let analyzer = Analyzer::new(&config).unwrap();
    assert!(!analyzer.metrics().any(|m| m == MetricId::Nhd));

    let with_ctor = ClassStructure::builder("pkg.Point")
        .attribute(Attribute::new("x", "int"))
        .attribute(Attribute::new("y", "int"))
        .method(Method::new("<init>").constructor().writing(["x", "y"]))
        .method(Method::new("getX").reading(["x"]))
        .method(Method::new("getY").reading(["y"]))
        .build()
        .unwrap();
    let classes = vec![with_ctor, lonely()];

    let reports = analyzer.analyze_classes(&classes);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].class_name, "pkg.Point");
    assert_eq!(reports[0].failures().count(), 0);
    // without the constructor the two getters fall apart
    assert_eq!(reports[0].score(MetricId::Lcom4).unwrap().raw, 2.0);

    let summary = summarize(&reports);
    assert_eq!(summary[&MetricId::Lcom4].count, 2);
    assert!(!summary.contains_key(&MetricId::Nhd));
}

#[test]
fn test_invalid_config_fails_fast() {
    let config = AnalysisConfig::from_toml_str("[metrics.CCM]\nparams = { include_ctors = false }\n")
        .unwrap();
    assert!(matches!(
        Analyzer::new(&config),
        Err(MetricError::UnsupportedParameters { metric: MetricId::Ccm })
    ));
}
