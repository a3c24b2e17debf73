//! Type definitions for `econ_core`.
//!
//! Economic rules, zone/building content, zone-state snapshots, and the
//! output rate bundle. Everything here is plain data: the engine reads
//! these types and never mutates them.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(ZoneId);
string_id!(BuildingId);

// ---------------------------------------------------------------------------
// Economic rules
// ---------------------------------------------------------------------------

/// Tunable economic constants, loaded once at startup and read-only after.
///
/// Every field is optional in the source data; absent fields take the
/// defaults below, so downstream code never re-checks presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicRules {
    pub probe: ProbeRules,
    pub propulsion: PropulsionRules,
    pub crowding: CrowdingRules,
    pub structures: StructureRules,
    pub probe_count_scaling: ProbeCountScalingRules,
    pub global_replication_scaling: GlobalReplicationRules,
    /// Named skill-coefficient sets keyed by production category
    /// (e.g. `probe_mining`, `salvage_efficiency`). Empty means the
    /// legacy hard-coded tables are in effect.
    pub skill_coefficients: AHashMap<String, crate::CoefficientTable>,
}

/// Per-probe base rates. All rates are kg/day (the fundamental time unit
/// is one day).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeRules {
    pub base_mining_rate_kg_per_day: f64,
    pub base_build_rate_kg_per_day: f64,
    pub mass_kg: f64,
}

impl Default for ProbeRules {
    fn default() -> Self {
        Self {
            base_mining_rate_kg_per_day: 100.0,
            base_build_rate_kg_per_day: 20.0,
            mass_kg: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PropulsionRules {
    /// Starting specific impulse, seconds.
    pub base_isp_seconds: f64,
}

impl Default for PropulsionRules {
    fn default() -> Self {
        Self {
            base_isp_seconds: 500.0,
        }
    }
}

/// Zone-crowding penalty parameters. Mining efficiency decays
/// exponentially once accumulated probe mass exceeds `threshold_ratio`
/// of the zone's original mass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CrowdingRules {
    pub threshold_ratio: f64,
    pub decay_rate: f64,
}

impl Default for CrowdingRules {
    fn default() -> Self {
        Self {
            threshold_ratio: 0.01,
            decay_rate: 4.395,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureRules {
    /// Power-law exponent giving co-located structures super-linear
    /// output with count.
    pub geometric_scaling_exponent: f64,
    pub base_mining_rate_kg_per_day: f64,
    pub base_build_rate_kg_per_day: f64,
}

impl Default for StructureRules {
    fn default() -> Self {
        Self {
            geometric_scaling_exponent: 3.2,
            base_mining_rate_kg_per_day: 50_000.0,
            base_build_rate_kg_per_day: 10_000.0,
        }
    }
}

/// Per-zone probe-count penalty parameters. The penalty per doubling is
/// interpolated from `base` down to `min` as the compute skill rises to
/// `compute_skill_threshold`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeCountScalingRules {
    pub base_penalty_per_doubling: f64,
    pub min_penalty_per_doubling: f64,
    pub compute_skill_threshold: f64,
}

impl Default for ProbeCountScalingRules {
    fn default() -> Self {
        Self {
            base_penalty_per_doubling: 0.4,
            min_penalty_per_doubling: 0.01,
            compute_skill_threshold: 3.18,
        }
    }
}

/// Civilization-scale replication damping: above `threshold` total
/// probes, each order of magnitude multiplies output by `halving_factor`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalReplicationRules {
    pub threshold: f64,
    pub halving_factor: f64,
}

impl Default for GlobalReplicationRules {
    fn default() -> Self {
        Self {
            threshold: 1e12,
            halving_factor: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// Content types
// ---------------------------------------------------------------------------

/// Static orbital-zone lookup data. Radii and delta-v are authored
/// constants, not computed physics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDef {
    pub id: ZoneId,
    pub name: String,
    #[serde(default = "default_radius_au")]
    pub radius_au: f64,
    /// Static delta-v difficulty factor for reaching the zone. Used for
    /// transfer pricing only, never computed from orbital mechanics.
    #[serde(default = "default_delta_v_penalty")]
    pub delta_v_penalty: f64,
    /// Metal fraction of mined regolith, in [0, 1].
    #[serde(default = "default_metal_fraction")]
    pub metal_fraction: f64,
    /// Volatile (methalox feedstock) fraction of mined regolith, in [0, 1].
    #[serde(default)]
    pub volatile_fraction: f64,
    #[serde(default = "default_multiplier")]
    pub mining_rate_multiplier: f64,
    /// The Dyson construction zone holds no minable body and is exempt
    /// from crowding.
    #[serde(default)]
    pub is_dyson_zone: bool,
    /// Original planetary mass, kg. Zero means "fill from the stock
    /// planetary-mass table at load time".
    #[serde(default)]
    pub original_mass_kg: f64,
}

fn default_radius_au() -> f64 {
    1.0
}

fn default_delta_v_penalty() -> f64 {
    0.1
}

fn default_metal_fraction() -> f64 {
    0.32
}

fn default_multiplier() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingCategory {
    Mining,
    Factory,
    Refinery,
    Energy,
    Dyson,
}

/// Building definition: per-structure rates and bonuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingDef {
    pub id: BuildingId,
    pub name: String,
    pub category: BuildingCategory,
    #[serde(default)]
    pub effects: BuildingEffects,
    /// Per-zone output multiplier. Zones absent from the map get 1.0.
    #[serde(default)]
    pub orbital_efficiency: AHashMap<ZoneId, f64>,
}

impl BuildingDef {
    /// Orbital-efficiency multiplier for a zone, neutral when unlisted.
    pub fn orbital_efficiency_in(&self, zone_id: &ZoneId) -> f64 {
        self.orbital_efficiency.get(zone_id).copied().unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingEffects {
    /// Mass mined per structure, kg/day, before scaling.
    pub mass_mining_rate_kg_per_day: f64,
    /// Mass assembled per structure, kg/day, before scaling.
    pub build_rate_kg_per_day: f64,
    /// Additive metal-extraction fraction contributed per structure.
    pub metal_extraction_bonus: f64,
    /// Probes fabricated per structure per day (factories).
    pub probe_production_per_day: f64,
    /// Metal cost per fabricated probe, kg.
    pub metal_per_probe_kg: f64,
}

// ---------------------------------------------------------------------------
// Zone state snapshot
// ---------------------------------------------------------------------------

/// Share of a zone's probes assigned to each activity. Fractions sum
/// to at most 1; the remainder is treated as idle regardless of `idle`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Allocations {
    pub harvest: f64,
    pub construct: f64,
    pub replicate: f64,
    pub recycle: f64,
    pub recycle_probes: f64,
    pub dyson: f64,
    pub idle: f64,
}

/// Per-zone snapshot owned by the tick scheduler. The engine reads it
/// and never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneState {
    pub zone_id: ZoneId,
    pub original_mass_kg: f64,
    pub probe_mass_kg: f64,
    #[serde(default)]
    pub metal_stored_kg: f64,
    #[serde(default)]
    pub structures: AHashMap<BuildingId, u64>,
    #[serde(default)]
    pub allocations: Allocations,
}

impl ZoneState {
    /// Number of probes in the zone, derived from accumulated probe mass.
    /// A non-positive per-probe mass yields zero rather than a division
    /// blow-up.
    pub fn probe_count(&self, rules: &EconomicRules) -> f64 {
        if rules.probe.mass_kg <= 0.0 {
            return 0.0;
        }
        (self.probe_mass_kg / rules.probe.mass_kg).max(0.0)
    }

    pub fn structure_count(&self, building_id: &BuildingId) -> u64 {
        self.structures.get(building_id).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Engine context
// ---------------------------------------------------------------------------

/// Read-only inputs shared by every engine call within one tick.
///
/// Borrowed, not owned: the host assembles this from its long-lived
/// rules/content and the current research snapshot. Nothing here is
/// mutated, so a host may evaluate zones in parallel with one context.
#[derive(Debug, Clone, Copy)]
pub struct EngineContext<'a> {
    pub rules: &'a EconomicRules,
    pub coefficients: &'a crate::CoefficientSource,
    pub skills: &'a crate::SkillSet,
    pub zones: &'a [ZoneDef],
    pub buildings: &'a [BuildingDef],
    /// Civilization-wide probe count, for the global replication law.
    pub total_probe_count: f64,
}

impl<'a> EngineContext<'a> {
    pub fn zone_def(&self, zone_id: &ZoneId) -> Option<&'a ZoneDef> {
        self.zones.iter().find(|zone| &zone.id == zone_id)
    }

    pub fn building(&self, building_id: &BuildingId) -> Option<&'a BuildingDef> {
        self.buildings.iter().find(|b| &b.id == building_id)
    }
}

// ---------------------------------------------------------------------------
// Output bundle
// ---------------------------------------------------------------------------

/// Per-zone production rates, kg/day. All fields are non-negative and
/// finite for any input the engine accepts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RateBundle {
    /// Total mass mined: probe + structure contributions.
    pub mining: f64,
    /// Total mass assembled: probe + structure contributions.
    pub building: f64,
    pub probe_mining: f64,
    pub probe_building: f64,
    pub structure_mining: f64,
    pub structure_building: f64,
    /// Metal refined out of the mined mass.
    pub metal_production: f64,
    /// Methalox propellant extracted from zone volatiles.
    pub methalox_production: f64,
    /// Non-metal, non-volatile remainder of the mined mass.
    pub slag_production: f64,
}
