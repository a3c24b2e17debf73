use super::*;

#[test]
fn description_key_is_never_a_skill() {
    let table: CoefficientTable = serde_json::from_str(
        r#"{"description": "mining bonuses", "mining": 0.5, "robotics": 0.5}"#,
    )
    .expect("parse");
    assert_eq!(table.description.as_deref(), Some("mining bonuses"));

    let entries = build_entries(&table, &SkillSet::new());
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.name != "description"));
}

#[test]
fn entries_resolve_aliases_and_default_to_neutral() {
    let table = CoefficientTable::from_pairs([("thermal_management", 0.3), ("robotic", 0.7)]);
    let skills = SkillSet::from_named([("conversion", 1.5)]);

    let entries = build_entries(&table, &skills);
    assert_eq!(entries.len(), 2);

    let conversion = entries
        .iter()
        .find(|e| e.skill == SkillId::Conversion)
        .expect("alias resolved");
    assert_close(conversion.value, 1.5, 1e-12);

    // Robotics has no configured value: neutral, not zero.
    let robotics = entries
        .iter()
        .find(|e| e.skill == SkillId::Robotics)
        .expect("alias resolved");
    assert_close(robotics.value, 1.0, 1e-12);
}

#[test]
fn entries_are_sorted_by_name() {
    let table = CoefficientTable::from_pairs([("robotics", 0.5), ("compute", 0.3), ("mining", 0.2)]);
    let entries = build_entries(&table, &SkillSet::new());
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["compute", "mining", "robotics"]);
}

#[test]
fn legacy_source_serves_every_category() {
    let skills = SkillSet::new();
    let source = CoefficientSource::Legacy;
    for cat in [
        category::PROBE_MINING,
        category::PROBE_BUILDING,
        category::STRUCTURE_PERFORMANCE,
        category::SALVAGE_EFFICIENCY,
        category::DELTA_V_REDUCTION,
        category::REPLICATION,
    ] {
        assert!(
            !source.entries(cat, &skills).is_empty(),
            "legacy table missing for {cat}"
        );
    }
}

#[test]
fn legacy_tables_flow_through_the_alias_resolver() {
    // The legacy probe_mining table is written against old names
    // (dexterity, robotic, intelligence); its entries must land on
    // canonical skills.
    let skills = SkillSet::from_named([("manipulation", 2.0)]);
    let entries = CoefficientSource::Legacy.entries(category::PROBE_MINING, &skills);
    let dexterity = entries
        .iter()
        .find(|e| e.name == "dexterity")
        .expect("legacy entry");
    assert_eq!(dexterity.skill, SkillId::Manipulation);
    assert_close(dexterity.value, 2.0, 1e-12);
}

#[test]
fn configured_source_with_missing_category_is_neutral() {
    let rules: EconomicRules = serde_json::from_str(
        r#"{"skill_coefficients": {"probe_mining": {"mining": 0.5}}}"#,
    )
    .expect("parse");
    let source = CoefficientSource::from_rules(&rules);
    let skills = SkillSet::from_named([("recycling", 3.0)]);

    // No fallback to legacy per category: the strategy was selected
    // once at load.
    let entries = source.entries(category::SALVAGE_EFFICIENCY, &skills);
    assert!(entries.is_empty());
    let factor = upgrade_factor(&entries);
    assert_close(factor.factor, 1.0, f64::EPSILON);
}

#[test]
fn unknown_skill_names_still_produce_entries() {
    let table = CoefficientTable::from_pairs([("graviton_shielding", 0.4)]);
    let mut skills = SkillSet::new();
    skills.set(SkillId::Other("graviton_shielding".to_string()), 1.25);

    let entries = build_entries(&table, &skills);
    assert_eq!(entries.len(), 1);
    assert_close(entries[0].value, 1.25, 1e-12);
    let factor = upgrade_factor(&entries);
    assert_close(factor.factor, 1.1, 1e-12);
}
