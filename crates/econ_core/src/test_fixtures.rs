//! Shared test fixtures for `econ_core` and downstream crates.
//!
//! `Fixture::baseline()` provides default rules, legacy coefficients,
//! neutral skills, a three-zone catalog (Mercury, Earth, the Dyson
//! zone), and a small building set. Tests mutate the owned fields and
//! borrow an [`EngineContext`] via [`Fixture::ctx`].

use ahash::AHashMap;

use crate::{
    Allocations, BuildingCategory, BuildingDef, BuildingEffects, BuildingId, CoefficientSource,
    EconomicRules, EngineContext, SkillSet, ZoneDef, ZoneId, ZoneState,
};

pub struct Fixture {
    pub rules: EconomicRules,
    pub coefficients: CoefficientSource,
    pub skills: SkillSet,
    pub zones: Vec<ZoneDef>,
    pub buildings: Vec<BuildingDef>,
    pub total_probe_count: f64,
}

impl Fixture {
    pub fn baseline() -> Self {
        let rules = EconomicRules::default();
        let coefficients = CoefficientSource::from_rules(&rules);
        Self {
            rules,
            coefficients,
            skills: SkillSet::new(),
            zones: base_zones(),
            buildings: base_buildings(),
            total_probe_count: 1000.0,
        }
    }

    pub fn ctx(&self) -> EngineContext<'_> {
        EngineContext {
            rules: &self.rules,
            coefficients: &self.coefficients,
            skills: &self.skills,
            zones: &self.zones,
            buildings: &self.buildings,
            total_probe_count: self.total_probe_count,
        }
    }

    /// Re-derive the coefficient source after editing `rules`.
    pub fn reload_coefficients(&mut self) {
        self.coefficients = CoefficientSource::from_rules(&self.rules);
    }
}

pub fn base_zones() -> Vec<ZoneDef> {
    vec![
        ZoneDef {
            id: ZoneId("mercury".to_string()),
            name: "Mercury".to_string(),
            radius_au: 0.39,
            delta_v_penalty: 0.05,
            metal_fraction: 0.40,
            volatile_fraction: 0.0,
            mining_rate_multiplier: 1.2,
            is_dyson_zone: false,
            original_mass_kg: 3.3011e23,
        },
        ZoneDef {
            id: ZoneId("earth".to_string()),
            name: "Earth".to_string(),
            radius_au: 1.0,
            delta_v_penalty: 0.1,
            metal_fraction: 0.32,
            volatile_fraction: 0.05,
            mining_rate_multiplier: 1.0,
            is_dyson_zone: false,
            original_mass_kg: 5.9724e24,
        },
        ZoneDef {
            id: ZoneId("dyson".to_string()),
            name: "Dyson Construction Zone".to_string(),
            radius_au: 0.2,
            delta_v_penalty: 0.3,
            metal_fraction: 0.0,
            volatile_fraction: 0.0,
            mining_rate_multiplier: 0.0,
            is_dyson_zone: true,
            original_mass_kg: 0.0,
        },
    ]
}

pub fn base_buildings() -> Vec<BuildingDef> {
    vec![
        BuildingDef {
            id: BuildingId("mining_rig".to_string()),
            name: "Orbital Mining Rig".to_string(),
            category: BuildingCategory::Mining,
            effects: BuildingEffects {
                mass_mining_rate_kg_per_day: 50_000.0,
                ..BuildingEffects::default()
            },
            orbital_efficiency: AHashMap::from_iter([(ZoneId("mercury".to_string()), 1.5)]),
        },
        BuildingDef {
            id: BuildingId("assembly_plant".to_string()),
            name: "Assembly Plant".to_string(),
            category: BuildingCategory::Factory,
            effects: BuildingEffects {
                build_rate_kg_per_day: 10_000.0,
                probe_production_per_day: 5.0,
                metal_per_probe_kg: 100.0,
                ..BuildingEffects::default()
            },
            orbital_efficiency: AHashMap::new(),
        },
        BuildingDef {
            id: BuildingId("refinery".to_string()),
            name: "Volatile Refinery".to_string(),
            category: BuildingCategory::Refinery,
            effects: BuildingEffects {
                metal_extraction_bonus: 0.05,
                ..BuildingEffects::default()
            },
            orbital_efficiency: AHashMap::new(),
        },
        BuildingDef {
            id: BuildingId("dyson_yard".to_string()),
            name: "Dyson Assembly Yard".to_string(),
            category: BuildingCategory::Dyson,
            effects: BuildingEffects {
                build_rate_kg_per_day: 20_000.0,
                ..BuildingEffects::default()
            },
            orbital_efficiency: AHashMap::from_iter([(ZoneId("dyson".to_string()), 1.5)]),
        },
    ]
}

/// A quiet zone snapshot: 100 probes' worth of mass, everything idle.
pub fn base_zone_state(zone_id: &str) -> ZoneState {
    ZoneState {
        zone_id: ZoneId(zone_id.to_string()),
        original_mass_kg: 5.9724e24,
        probe_mass_kg: 10_000.0,
        metal_stored_kg: 0.0,
        structures: AHashMap::new(),
        allocations: Allocations::default(),
    }
}

/// A working zone: 100 probes, 60% harvesting, 20% constructing,
/// 10% replicating.
pub fn working_zone_state(zone_id: &str) -> ZoneState {
    let mut state = base_zone_state(zone_id);
    state.allocations = Allocations {
        harvest: 0.6,
        construct: 0.2,
        replicate: 0.1,
        idle: 0.1,
        ..Allocations::default()
    };
    state
}
