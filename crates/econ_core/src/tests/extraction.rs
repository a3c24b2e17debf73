use super::*;

#[test]
fn extraction_base_is_zone_metallicity() {
    let fixture = Fixture::baseline();
    let ctx = fixture.ctx();
    let state = base_zone_state("mercury");
    let eff = extraction_efficiency(&ctx, zone_def(&fixture, "mercury"), &state);
    assert_close(eff, 0.40, 1e-12);
}

#[test]
fn extraction_research_bonus_is_capped() {
    let mut fixture = Fixture::baseline();
    fixture.skills.set(SkillId::Recycling, 10.0); // would add 2.25 uncapped
    let ctx = fixture.ctx();
    let state = base_zone_state("mercury");

    let eff = extraction_efficiency(&ctx, zone_def(&fixture, "mercury"), &state);
    assert_close(eff, 0.40 + RESEARCH_EXTRACTION_CAP, 1e-12);
}

#[test]
fn extraction_refineries_add_linearly() {
    let fixture = Fixture::baseline();
    let ctx = fixture.ctx();

    let mut state = base_zone_state("mercury");
    state.structures.insert(BuildingId("refinery".to_string()), 3);

    // 0.40 base + 3 × 0.05.
    let eff = extraction_efficiency(&ctx, zone_def(&fixture, "mercury"), &state);
    assert_close(eff, 0.55, 1e-12);
}

#[test]
fn extraction_clamps_to_one() {
    // Base 0.9-equivalent stack: metallicity 0.40 + capped research
    // 0.25 + 20 refineries × 0.05 = 1.65 → clamps to exactly 1.0.
    let mut fixture = Fixture::baseline();
    fixture.skills.set(SkillId::Recycling, 2.5);
    let ctx = fixture.ctx();

    let mut state = base_zone_state("mercury");
    state.structures.insert(BuildingId("refinery".to_string()), 20);

    let eff = extraction_efficiency(&ctx, zone_def(&fixture, "mercury"), &state);
    assert_close(eff, 1.0, f64::EPSILON);
}

#[test]
fn metal_rate_is_mining_times_efficiency() {
    assert_close(metal_production_rate(1000.0, 0.32), 320.0, 1e-9);
    assert_close(metal_production_rate(1000.0, 1.5), 1000.0, 1e-9); // clamped
    assert_close(metal_production_rate(-5.0, 0.32), 0.0, f64::EPSILON);
}

#[test]
fn methalox_follows_zone_volatiles() {
    let fixture = Fixture::baseline();
    let ctx = fixture.ctx();

    // Earth carries 5% volatiles; Mercury none.
    let earth = methalox_production_rate(&ctx, 1000.0, zone_def(&fixture, "earth"));
    assert_close(earth, 50.0, 1e-9);
    let mercury = methalox_production_rate(&ctx, 1000.0, zone_def(&fixture, "mercury"));
    assert_close(mercury, 0.0, f64::EPSILON);
}

#[test]
fn slag_is_the_remainder_and_never_negative() {
    assert_close(slag_production_rate(1000.0, 320.0, 50.0), 630.0, 1e-9);
    assert_close(slag_production_rate(100.0, 90.0, 20.0), 0.0, f64::EPSILON);
}
