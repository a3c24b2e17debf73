//! Skill identifiers and the alias-resolution table.
//!
//! Two eras of naming exist in shipped content: the legacy
//! dexterity/energy/intelligence trio and an alternate set of tree
//! names (`thermal_management`, `robotic`, ...). Both resolve onto the
//! same canonical twelve skills through one table; unknown names pass
//! through as [`SkillId::Other`] so configuration written against a
//! future skill keeps working.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Canonical skill identifier. `Other` carries any name the resolver
/// does not recognize — deliberately not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillId {
    Mining,
    Construction,
    Replication,
    Locomotion,
    Manipulation,
    Robotics,
    Compute,
    EnergyCollection,
    Conversion,
    Storage,
    Transport,
    Recycling,
    Other(String),
}

impl SkillId {
    /// Resolve a raw configuration name to its canonical identifier.
    ///
    /// Covers canonical names, the legacy trio, and the alternate-era
    /// tree names. Anything unrecognized passes through unchanged.
    pub fn resolve(name: &str) -> SkillId {
        match name {
            "mining" | "harvesting" => SkillId::Mining,
            "construction" | "fabrication" | "production_efficiency" => SkillId::Construction,
            "replication" => SkillId::Replication,
            "locomotion" | "locomotion_systems" | "attitude_control" | "acds" => {
                SkillId::Locomotion
            }
            "manipulation" | "dexterity" => SkillId::Manipulation,
            "robotics" | "robotic" | "robotic_systems" => SkillId::Robotics,
            "compute" | "intelligence" | "computer_processing" => SkillId::Compute,
            "energy_collection" | "energy" | "solar_concentrators" => SkillId::EnergyCollection,
            "conversion" | "thermal_management" | "energy_conversion" => SkillId::Conversion,
            "storage" | "energy_storage" => SkillId::Storage,
            "transport" | "energy_transport" => SkillId::Transport,
            "recycling" | "recycling_efficiency" | "salvage" => SkillId::Recycling,
            other => SkillId::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SkillId::Mining => "mining",
            SkillId::Construction => "construction",
            SkillId::Replication => "replication",
            SkillId::Locomotion => "locomotion",
            SkillId::Manipulation => "manipulation",
            SkillId::Robotics => "robotics",
            SkillId::Compute => "compute",
            SkillId::EnergyCollection => "energy_collection",
            SkillId::Conversion => "conversion",
            SkillId::Storage => "storage",
            SkillId::Transport => "transport",
            SkillId::Recycling => "recycling",
            SkillId::Other(name) => name,
        }
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiplicative skill values keyed by canonical id, 1.0 = no bonus.
/// Owned by the research subsystem; the engine only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    values: AHashMap<SkillId, f64>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(name, value)` pairs, resolving aliases. Later
    /// duplicates win, so a canonical entry overrides a legacy alias.
    pub fn from_named<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut set = Self::new();
        for (name, value) in pairs {
            set.set(SkillId::resolve(name), value);
        }
        set
    }

    pub fn set(&mut self, id: SkillId, value: f64) {
        self.values.insert(id, value);
    }

    /// Raw lookup without fallbacks.
    pub fn get(&self, id: &SkillId) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Effective value for production math: absent skills are neutral
    /// (1.0), never zero, and compound skills fall back to their base
    /// skill (manipulation reads robotics when unset).
    pub fn value_or_neutral(&self, id: &SkillId) -> f64 {
        if let Some(value) = self.get(id) {
            return value;
        }
        match id {
            SkillId::Manipulation => self.get(&SkillId::Robotics).unwrap_or(1.0),
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_trio_resolves() {
        assert_eq!(SkillId::resolve("dexterity"), SkillId::Manipulation);
        assert_eq!(SkillId::resolve("energy"), SkillId::EnergyCollection);
        assert_eq!(SkillId::resolve("intelligence"), SkillId::Compute);
    }

    #[test]
    fn alternate_era_resolves() {
        assert_eq!(SkillId::resolve("thermal_management"), SkillId::Conversion);
        assert_eq!(SkillId::resolve("robotic"), SkillId::Robotics);
        assert_eq!(SkillId::resolve("attitude_control"), SkillId::Locomotion);
    }

    #[test]
    fn unknown_name_passes_through() {
        let id = SkillId::resolve("quantum_tunneling");
        assert_eq!(id, SkillId::Other("quantum_tunneling".to_string()));
        assert_eq!(id.as_str(), "quantum_tunneling");
    }

    #[test]
    fn absent_skill_is_neutral() {
        let skills = SkillSet::new();
        assert!((skills.value_or_neutral(&SkillId::Mining) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn manipulation_falls_back_to_robotics() {
        let mut skills = SkillSet::new();
        skills.set(SkillId::Robotics, 1.8);
        assert!((skills.value_or_neutral(&SkillId::Manipulation) - 1.8).abs() < 1e-12);

        // An explicit manipulation value wins over the fallback.
        skills.set(SkillId::Manipulation, 1.2);
        assert!((skills.value_or_neutral(&SkillId::Manipulation) - 1.2).abs() < 1e-12);
    }
}
