//! Skill-coefficient tables and the entry builder.
//!
//! A coefficient table maps raw skill names to weights for one
//! production category. Tables come from configuration when present;
//! otherwise the legacy hard-coded tables below apply. The choice is
//! made once at load time ([`CoefficientSource::from_rules`]) and never
//! re-checked per call.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{EconomicRules, SkillId, SkillSet};

/// Production category names used by the rate calculator.
pub mod category {
    pub const PROBE_MINING: &str = "probe_mining";
    pub const PROBE_BUILDING: &str = "probe_building";
    pub const STRUCTURE_PERFORMANCE: &str = "structure_performance";
    pub const SALVAGE_EFFICIENCY: &str = "salvage_efficiency";
    pub const DELTA_V_REDUCTION: &str = "delta_v_reduction";
    pub const REPLICATION: &str = "replication";
}

/// Reserved key inside a coefficient table; never treated as a skill.
const RESERVED_DESCRIPTION_KEY: &str = "description";

/// One production category's skill weights, as authored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoefficientTable {
    /// Free-form authoring note, ignored by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub weights: AHashMap<String, f64>,
}

impl CoefficientTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            description: None,
            weights: pairs
                .into_iter()
                .map(|(name, weight)| (name.to_string(), weight))
                .collect(),
        }
    }
}

/// One resolved coefficient: the raw configured name, its canonical
/// skill, the skill's current value, and the authored weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientEntry {
    pub name: String,
    pub skill: SkillId,
    pub value: f64,
    pub weight: f64,
}

pub type CoefficientEntries = SmallVec<[CoefficientEntry; 8]>;

/// Build the entry list for one category table: resolve aliases, read
/// skill values (absent = neutral 1.0), keep authored weights.
///
/// Entries are sorted by raw name so the weighted sum downstream is
/// evaluated in a stable order.
pub fn build_entries(table: &CoefficientTable, skills: &SkillSet) -> CoefficientEntries {
    let mut pairs: Vec<(&str, f64)> = table
        .weights
        .iter()
        .filter(|(name, _)| name.as_str() != RESERVED_DESCRIPTION_KEY)
        .map(|(name, weight)| (name.as_str(), *weight))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    entries_from_pairs(&pairs, skills)
}

fn entries_from_pairs(pairs: &[(&str, f64)], skills: &SkillSet) -> CoefficientEntries {
    pairs
        .iter()
        .map(|(name, weight)| {
            let skill = SkillId::resolve(name);
            let value = skills.value_or_neutral(&skill);
            CoefficientEntry {
                name: (*name).to_string(),
                skill,
                value,
                weight: *weight,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Legacy hard-coded tables
// ---------------------------------------------------------------------------

// The legacy tables are written against the old naming era on purpose:
// they predate the canonical skill list and flow through the alias
// resolver exactly like authored content does.

const LEGACY_PROBE_MINING: &[(&str, f64)] = &[
    ("locomotion", 0.25),
    ("dexterity", 0.35),
    ("robotic", 0.25),
    ("intelligence", 0.15),
];

const LEGACY_PROBE_BUILDING: &[(&str, f64)] = &[
    ("dexterity", 0.40),
    ("robotic", 0.35),
    ("intelligence", 0.25),
];

const LEGACY_STRUCTURE_PERFORMANCE: &[(&str, f64)] = &[
    ("thermal_management", 0.30),
    ("energy", 0.30),
    ("robotic", 0.20),
    ("intelligence", 0.20),
];

const LEGACY_SALVAGE_EFFICIENCY: &[(&str, f64)] = &[
    ("recycling", 0.60),
    ("dexterity", 0.20),
    ("thermal_management", 0.20),
];

const LEGACY_DELTA_V_REDUCTION: &[(&str, f64)] = &[
    ("locomotion", 0.50),
    ("energy_storage", 0.20),
    ("thermal_management", 0.30),
];

const LEGACY_REPLICATION: &[(&str, f64)] = &[
    ("replication", 0.50),
    ("dexterity", 0.25),
    ("intelligence", 0.25),
];

fn legacy_table(category: &str) -> &'static [(&'static str, f64)] {
    match category {
        category::PROBE_MINING => LEGACY_PROBE_MINING,
        category::PROBE_BUILDING => LEGACY_PROBE_BUILDING,
        category::STRUCTURE_PERFORMANCE => LEGACY_STRUCTURE_PERFORMANCE,
        category::SALVAGE_EFFICIENCY => LEGACY_SALVAGE_EFFICIENCY,
        category::DELTA_V_REDUCTION => LEGACY_DELTA_V_REDUCTION,
        category::REPLICATION => LEGACY_REPLICATION,
        _ => &[],
    }
}

// ---------------------------------------------------------------------------
// Coefficient source strategy
// ---------------------------------------------------------------------------

/// Which coefficient tables drive upgrade factors. Selected once when
/// the rules are loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CoefficientSource {
    /// Tables present in the loaded economic rules.
    Configured(AHashMap<String, CoefficientTable>),
    /// Backward-compatible hard-coded tables.
    Legacy,
}

impl CoefficientSource {
    pub fn from_rules(rules: &EconomicRules) -> Self {
        if rules.skill_coefficients.is_empty() {
            CoefficientSource::Legacy
        } else {
            CoefficientSource::Configured(rules.skill_coefficients.clone())
        }
    }

    /// Resolved entries for a production category. A category absent
    /// from a configured source yields no entries, which downstream
    /// reduces to a neutral upgrade factor.
    pub fn entries(&self, category: &str, skills: &SkillSet) -> CoefficientEntries {
        match self {
            CoefficientSource::Configured(tables) => tables
                .get(category)
                .map(|table| build_entries(table, skills))
                .unwrap_or_default(),
            CoefficientSource::Legacy => entries_from_pairs(legacy_table(category), skills),
        }
    }
}
