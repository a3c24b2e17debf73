use super::*;
use crate::test_fixtures::{base_zone_state, working_zone_state, Fixture};

mod coefficients;
mod extraction;
mod scaling;

// --- Shared test helpers --------------------------------------------------

/// Abs-diff float assertion with context in the failure message.
#[track_caller]
fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() < eps,
        "expected {expected}, got {actual} (eps {eps})"
    );
}

fn zone_def<'a>(fixture: &'a Fixture, id: &str) -> &'a ZoneDef {
    fixture
        .zones
        .iter()
        .find(|zone| zone.id.0 == id)
        .expect("fixture zone")
}

// --- Rules defaults -------------------------------------------------------

#[test]
fn empty_rules_source_takes_all_defaults() {
    let rules: EconomicRules = serde_json::from_str("{}").expect("parse");
    assert_close(rules.probe.base_mining_rate_kg_per_day, 100.0, 1e-12);
    assert_close(rules.probe.base_build_rate_kg_per_day, 20.0, 1e-12);
    assert_close(rules.probe.mass_kg, 100.0, 1e-12);
    assert_close(rules.propulsion.base_isp_seconds, 500.0, 1e-12);
    assert_close(rules.crowding.threshold_ratio, 0.01, 1e-12);
    assert_close(rules.crowding.decay_rate, 4.395, 1e-12);
    assert_close(rules.structures.geometric_scaling_exponent, 3.2, 1e-12);
    assert_close(rules.probe_count_scaling.base_penalty_per_doubling, 0.4, 1e-12);
    assert_close(rules.probe_count_scaling.min_penalty_per_doubling, 0.01, 1e-12);
    assert_close(rules.probe_count_scaling.compute_skill_threshold, 3.18, 1e-12);
    assert_close(rules.global_replication_scaling.threshold, 1e12, 1.0);
    assert_close(rules.global_replication_scaling.halving_factor, 0.5, 1e-12);
    assert!(rules.skill_coefficients.is_empty());
}

#[test]
fn partial_rules_source_fills_missing_fields() {
    let rules: EconomicRules =
        serde_json::from_str(r#"{"crowding": {"decay_rate": 9.0}}"#).expect("parse");
    assert_close(rules.crowding.decay_rate, 9.0, 1e-12);
    // Sibling field inside the same section still defaults.
    assert_close(rules.crowding.threshold_ratio, 0.01, 1e-12);
    assert_close(rules.probe.mass_kg, 100.0, 1e-12);
}

#[test]
fn empty_coefficient_config_selects_legacy_source() {
    let rules = EconomicRules::default();
    assert!(matches!(
        CoefficientSource::from_rules(&rules),
        CoefficientSource::Legacy
    ));
}

#[test]
fn present_coefficient_config_selects_configured_source() {
    let rules: EconomicRules = serde_json::from_str(
        r#"{"skill_coefficients": {"probe_mining": {"mining": 0.5}}}"#,
    )
    .expect("parse");
    assert!(matches!(
        CoefficientSource::from_rules(&rules),
        CoefficientSource::Configured(_)
    ));
}
