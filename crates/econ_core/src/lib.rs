//! `econ_core` — deterministic production & economic scaling engine.
//!
//! No IO, no clock, no randomness. Converts a zone's skills,
//! allocations, structures, and accumulated probe/resource mass into
//! per-day production rates. Every call reads immutable snapshots and
//! returns new values; degenerate inputs degrade to numerically safe,
//! clamped outputs instead of errors — the tick loop must never halt
//! on a malformed coefficient table.

mod coefficients;
mod extraction;
mod rates;
mod scaling;
mod skills;
mod types;
mod upgrade;
mod zone;

pub use coefficients::{
    build_entries, category, CoefficientEntries, CoefficientEntry, CoefficientSource,
    CoefficientTable,
};
pub use extraction::{
    extraction_efficiency, metal_production_rate, methalox_production_rate, slag_production_rate,
    RESEARCH_EXTRACTION_CAP,
};
pub use rates::{
    effective_isp, factory_probe_rate, probe_building_rate, probe_mining_rate, structure_building_rate,
    structure_mining_rate, supply_throttle, transfer_energy_cost_per_kg_day,
};
pub use scaling::{
    crowding_efficiency, global_replication_efficiency, probe_count_efficiency, CROWDING_FLOOR,
    GLOBAL_REPLICATION_FLOOR, PROBE_COUNT_FLOOR,
};
pub use skills::{SkillId, SkillSet};
pub use types::*;
pub use upgrade::{upgrade_factor, SkillContribution, UpgradeFactor};
pub use zone::zone_rates;

#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;

#[cfg(test)]
mod tests;
