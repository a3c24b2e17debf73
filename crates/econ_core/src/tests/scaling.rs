use super::*;

// --- Zone crowding ---------------------------------------------------------

#[test]
fn crowding_is_exactly_one_at_or_below_threshold() {
    let fixture = Fixture::baseline();
    let earth = zone_def(&fixture, "earth");

    let mut state = base_zone_state("earth");
    state.original_mass_kg = 1e20;

    // Exactly at the 1% threshold.
    state.probe_mass_kg = 1e18;
    assert_close(crowding_efficiency(earth, &state, &fixture.rules), 1.0, f64::EPSILON);

    // Below threshold.
    state.probe_mass_kg = 1e15;
    assert_close(crowding_efficiency(earth, &state, &fixture.rules), 1.0, f64::EPSILON);
}

#[test]
fn crowding_two_percent_scenario() {
    // originalMass 1e20, probeMass 2e18 → ratio 2%, threshold 1%,
    // decay 4.395 → exp(−4.395 × 0.01) ≈ 0.957.
    let fixture = Fixture::baseline();
    let earth = zone_def(&fixture, "earth");

    let mut state = base_zone_state("earth");
    state.original_mass_kg = 1e20;
    state.probe_mass_kg = 2e18;

    let eff = crowding_efficiency(earth, &state, &fixture.rules);
    assert_close(eff, (-4.395_f64 * 0.01).exp(), 1e-12);
    assert_close(eff, 0.957, 1e-3);
}

#[test]
fn crowding_is_monotonically_non_increasing() {
    let fixture = Fixture::baseline();
    let earth = zone_def(&fixture, "earth");

    let mut state = base_zone_state("earth");
    state.original_mass_kg = 1e20;

    let mut previous = 1.0;
    for step in 0..200 {
        state.probe_mass_kg = 1e18 * f64::from(step);
        let eff = crowding_efficiency(earth, &state, &fixture.rules);
        assert!(
            eff <= previous + f64::EPSILON,
            "efficiency rose from {previous} to {eff} at step {step}"
        );
        previous = eff;
    }
}

#[test]
fn crowding_exempts_dyson_zone() {
    let fixture = Fixture::baseline();
    let dyson = zone_def(&fixture, "dyson");

    let mut state = base_zone_state("dyson");
    state.original_mass_kg = 1.0;
    state.probe_mass_kg = 1e24; // absurdly crowded, still exempt
    assert_close(crowding_efficiency(dyson, &state, &fixture.rules), 1.0, f64::EPSILON);
}

#[test]
fn crowding_guards_zero_original_mass() {
    let fixture = Fixture::baseline();
    let earth = zone_def(&fixture, "earth");

    let mut state = base_zone_state("earth");
    state.original_mass_kg = 0.0;
    state.probe_mass_kg = 1e18;
    assert_close(crowding_efficiency(earth, &state, &fixture.rules), 1.0, f64::EPSILON);
}

#[test]
fn crowding_is_floored_never_zero() {
    let fixture = Fixture::baseline();
    let earth = zone_def(&fixture, "earth");

    let mut state = base_zone_state("earth");
    state.original_mass_kg = 1e20;
    state.probe_mass_kg = 1e22; // ratio 100 — deep into decay
    let eff = crowding_efficiency(earth, &state, &fixture.rules);
    assert_close(eff, CROWDING_FLOOR, 1e-15);
    assert!(eff > 0.0);
}

// --- Probe-count penalty -----------------------------------------------------

#[test]
fn probe_count_penalty_absent_for_zero_or_one() {
    let rules = EconomicRules::default();
    assert_close(probe_count_efficiency(0.0, 1.0, &rules), 1.0, f64::EPSILON);
    assert_close(probe_count_efficiency(1.0, 1.0, &rules), 1.0, f64::EPSILON);
}

#[test]
fn probe_count_penalty_four_probes_at_base_compute() {
    // Two doublings at the default 0.4 penalty: 0.6² = 0.36.
    let rules = EconomicRules::default();
    assert_close(probe_count_efficiency(4.0, 1.0, &rules), 0.36, 1e-12);
}

#[test]
fn probe_count_penalty_softens_with_compute_skill() {
    let rules = EconomicRules::default();
    let at_base = probe_count_efficiency(1024.0, 1.0, &rules);
    let at_mid = probe_count_efficiency(1024.0, 2.0, &rules);
    let at_threshold = probe_count_efficiency(1024.0, 3.18, &rules);
    assert!(at_base < at_mid && at_mid < at_threshold);

    // At or beyond the threshold the min penalty applies: 0.99^10.
    assert_close(at_threshold, 0.99_f64.powi(10), 1e-12);
    let beyond = probe_count_efficiency(1024.0, 50.0, &rules);
    assert_close(beyond, at_threshold, 1e-15);
}

#[test]
fn probe_count_penalty_is_floored() {
    let rules = EconomicRules::default();
    let eff = probe_count_efficiency(1e18, 1.0, &rules);
    assert_close(eff, PROBE_COUNT_FLOOR, 1e-15);
}

#[test]
fn probe_count_penalty_degenerate_threshold_uses_min_penalty() {
    let mut rules = EconomicRules::default();
    rules.probe_count_scaling.compute_skill_threshold = 1.0;
    // Span collapses: softening treated as fully unlocked.
    assert_close(probe_count_efficiency(4.0, 1.0, &rules), 0.99_f64.powi(2), 1e-12);
}

// --- Global replication penalty ---------------------------------------------

#[test]
fn global_replication_no_penalty_at_threshold() {
    let rules = EconomicRules::default();
    assert_close(global_replication_efficiency(1e12, &rules), 1.0, f64::EPSILON);
    assert_close(global_replication_efficiency(1e9, &rules), 1.0, f64::EPSILON);
}

#[test]
fn global_replication_halves_per_order_of_magnitude() {
    let rules = EconomicRules::default();
    assert_close(global_replication_efficiency(1e13, &rules), 0.5, 1e-12);
    assert_close(global_replication_efficiency(1e14, &rules), 0.25, 1e-12);
}

#[test]
fn global_replication_is_smooth_between_orders() {
    // 5e12 sits between the threshold and one order above; efficiency
    // interpolates smoothly, no discontinuity.
    let rules = EconomicRules::default();
    let eff = global_replication_efficiency(5e12, &rules);
    assert!(eff > 0.5 && eff < 1.0);
    assert_close(eff, 0.5_f64.powf(5e12_f64.log10() - 12.0), 1e-12);
}

#[test]
fn global_replication_is_floored_at_civilization_scale() {
    let rules = EconomicRules::default();
    let eff = global_replication_efficiency(1e40, &rules);
    assert_close(eff, GLOBAL_REPLICATION_FLOOR, 1e-18);
}

#[test]
fn global_replication_guards_nonpositive_threshold() {
    let mut rules = EconomicRules::default();
    rules.global_replication_scaling.threshold = 0.0;
    assert_close(global_replication_efficiency(1e20, &rules), 1.0, f64::EPSILON);
}
