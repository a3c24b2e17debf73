//! Content loading and validation shared between the CLI and any host
//! scheduler.
//!
//! Reads `economic_rules.json`, `orbital_zones.json`, and
//! `buildings.json` from a content directory. Every rules field is
//! optional with a documented default; a missing rules file means "all
//! defaults" (and therefore the legacy coefficient tables). Zones are
//! required content. Authoring errors panic in `validate_content`;
//! IO/parse errors surface as `anyhow` results with context.

use ahash::AHashMap;
use anyhow::{Context, Result};
use econ_core::{
    BuildingCategory, BuildingDef, BuildingEffects, BuildingId, CoefficientSource, EconomicRules,
    EngineContext, SkillSet, ZoneDef, ZoneId,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Accurate planetary masses, kg — the stock values for zones authored
/// without an explicit mass.
const PLANETARY_MASSES: &[(&str, f64)] = &[
    ("mercury", 3.3011e23),
    ("venus", 4.8675e24),
    ("earth", 5.9724e24),
    ("mars", 6.4171e23),
    ("asteroid_belt", 3e21),
    ("jupiter", 1.8982e27),
    ("saturn", 5.6834e26),
    ("uranus", 8.6810e25),
    ("neptune", 1.02413e26),
    ("kuiper", 5.97e23),
    ("oort_cloud", 3e25),
];

fn planetary_mass_kg(zone_id: &str) -> Option<f64> {
    PLANETARY_MASSES
        .iter()
        .find(|(id, _)| *id == zone_id)
        .map(|(_, mass)| *mass)
}

#[derive(Deserialize)]
struct ZonesFile {
    orbital_zones: Vec<ZoneDef>,
}

#[derive(Deserialize)]
struct BuildingsFile {
    buildings: AHashMap<String, BuildingBody>,
}

/// Building entry as authored: the id lives in the map key.
#[derive(Deserialize)]
struct BuildingBody {
    name: String,
    category: BuildingCategory,
    #[serde(default)]
    effects: BuildingEffects,
    #[serde(default)]
    orbital_efficiency: AHashMap<ZoneId, f64>,
}

/// Everything the engine needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Content {
    pub rules: EconomicRules,
    /// Selected once here — never re-checked per call.
    pub coefficients: CoefficientSource,
    pub zones: Vec<ZoneDef>,
    pub buildings: Vec<BuildingDef>,
}

impl Content {
    /// Assemble a per-tick engine context from this content plus the
    /// host's current research snapshot and probe census.
    pub fn context<'a>(
        &'a self,
        skills: &'a SkillSet,
        total_probe_count: f64,
    ) -> EngineContext<'a> {
        EngineContext {
            rules: &self.rules,
            coefficients: &self.coefficients,
            skills,
            zones: &self.zones,
            buildings: &self.buildings,
            total_probe_count,
        }
    }
}

pub fn load_content(content_dir: &str) -> Result<Content> {
    let dir = Path::new(content_dir);

    // Rules are fully optional: a missing file means all defaults,
    // which also selects the legacy coefficient tables.
    let rules_path = dir.join("economic_rules.json");
    let rules: EconomicRules = if rules_path.exists() {
        serde_json::from_str(
            &std::fs::read_to_string(&rules_path).context("reading economic_rules.json")?,
        )
        .context("parsing economic_rules.json")?
    } else {
        EconomicRules::default()
    };
    let coefficients = CoefficientSource::from_rules(&rules);

    let zones_file: ZonesFile = serde_json::from_str(
        &std::fs::read_to_string(dir.join("orbital_zones.json"))
            .context("reading orbital_zones.json")?,
    )
    .context("parsing orbital_zones.json")?;
    let mut zones = zones_file.orbital_zones;
    for zone in &mut zones {
        if zone.original_mass_kg <= 0.0 && !zone.is_dyson_zone {
            if let Some(mass) = planetary_mass_kg(&zone.id.0) {
                zone.original_mass_kg = mass;
            }
        }
    }

    // Buildings are optional content; probes alone make an economy.
    let buildings_path = dir.join("buildings.json");
    let mut buildings: Vec<BuildingDef> = if buildings_path.exists() {
        let file: BuildingsFile = serde_json::from_str(
            &std::fs::read_to_string(&buildings_path).context("reading buildings.json")?,
        )
        .context("parsing buildings.json")?;
        file.buildings
            .into_iter()
            .map(|(id, body)| BuildingDef {
                id: BuildingId(id),
                name: body.name,
                category: body.category,
                effects: body.effects,
                orbital_efficiency: body.orbital_efficiency,
            })
            .collect()
    } else {
        Vec::new()
    };
    buildings.sort_by(|a, b| a.id.0.cmp(&b.id.0));

    let content = Content {
        rules,
        coefficients,
        zones,
        buildings,
    };
    validate_content(&content);
    Ok(content)
}

/// Validates loaded content, panicking on any authoring error.
///
/// Catches mistakes like: a building's orbital-efficiency table naming
/// an unknown zone, regolith fractions that exceed the whole, or
/// penalty parameters outside their meaningful ranges.
pub fn validate_content(content: &Content) {
    assert!(!content.zones.is_empty(), "no orbital zones loaded");

    let mut zone_ids: HashSet<&str> = HashSet::new();
    for zone in &content.zones {
        assert!(
            zone_ids.insert(zone.id.0.as_str()),
            "duplicate zone id '{}'",
            zone.id.0,
        );
        assert!(
            (0.0..=1.0).contains(&zone.metal_fraction),
            "zone '{}' metal_fraction {} outside [0, 1]",
            zone.id.0,
            zone.metal_fraction,
        );
        assert!(
            (0.0..=1.0).contains(&zone.volatile_fraction),
            "zone '{}' volatile_fraction {} outside [0, 1]",
            zone.id.0,
            zone.volatile_fraction,
        );
        assert!(
            zone.metal_fraction + zone.volatile_fraction <= 1.0,
            "zone '{}' metal + volatile fractions exceed the mined mass",
            zone.id.0,
        );
        assert!(
            zone.is_dyson_zone || zone.original_mass_kg > 0.0,
            "zone '{}' has no mass and no stock planetary-mass entry",
            zone.id.0,
        );
    }

    for building in &content.buildings {
        for zone_id in building.orbital_efficiency.keys() {
            assert!(
                zone_ids.contains(zone_id.0.as_str()),
                "building '{}' orbital_efficiency references unknown zone '{}'",
                building.id.0,
                zone_id.0,
            );
        }
        let effects = &building.effects;
        assert!(
            effects.mass_mining_rate_kg_per_day >= 0.0
                && effects.build_rate_kg_per_day >= 0.0
                && effects.metal_extraction_bonus >= 0.0
                && effects.probe_production_per_day >= 0.0
                && effects.metal_per_probe_kg >= 0.0,
            "building '{}' has a negative effect value",
            building.id.0,
        );
    }

    let rules = &content.rules;
    assert!(
        rules.probe.mass_kg > 0.0,
        "probe.mass_kg must be positive, got {}",
        rules.probe.mass_kg,
    );
    assert!(
        rules.crowding.threshold_ratio >= 0.0 && rules.crowding.decay_rate >= 0.0,
        "crowding parameters must be non-negative",
    );
    assert!(
        rules.structures.geometric_scaling_exponent > 0.0,
        "geometric_scaling_exponent must be positive, got {}",
        rules.structures.geometric_scaling_exponent,
    );
    let scaling = &rules.probe_count_scaling;
    assert!(
        (0.0..=1.0).contains(&scaling.base_penalty_per_doubling)
            && (0.0..=1.0).contains(&scaling.min_penalty_per_doubling),
        "penalty-per-doubling values must lie in [0, 1]",
    );
    assert!(
        scaling.min_penalty_per_doubling <= scaling.base_penalty_per_doubling,
        "min penalty per doubling exceeds the base penalty",
    );
    let global = &rules.global_replication_scaling;
    assert!(
        global.threshold > 0.0,
        "global replication threshold must be positive, got {}",
        global.threshold,
    );
    assert!(
        global.halving_factor > 0.0 && global.halving_factor <= 1.0,
        "halving_factor {} outside (0, 1]",
        global.halving_factor,
    );

    for (category, table) in &rules.skill_coefficients {
        for (name, weight) in &table.weights {
            assert!(
                weight.is_finite(),
                "coefficient '{category}.{name}' is not finite",
            );
        }
    }
}
