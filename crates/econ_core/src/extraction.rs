//! Metal, methalox, and slag extraction from mined mass.

use crate::coefficients::category;
use crate::upgrade::upgrade_factor;
use crate::{BuildingCategory, EngineContext, SkillId, ZoneDef, ZoneState};

/// Cap on the recycling-research contribution to extraction efficiency.
pub const RESEARCH_EXTRACTION_CAP: f64 = 0.25;

/// Fraction of mined mass refined into metal, in [0, 1].
///
/// Base is the zone's natural metallicity, improved by recycling
/// research (capped) and by refinery structure bonuses (linear in
/// count), then clamped — base 0.9 plus large bonuses still yields 1.0.
pub fn extraction_efficiency(
    ctx: &EngineContext<'_>,
    zone_def: &ZoneDef,
    state: &ZoneState,
) -> f64 {
    let base = zone_def.metal_fraction.clamp(0.0, 1.0);

    let recycling = ctx.skills.value_or_neutral(&SkillId::Recycling);
    let research_bonus = ((recycling - 1.0) * RESEARCH_EXTRACTION_CAP)
        .clamp(0.0, RESEARCH_EXTRACTION_CAP);

    let mut refinery_bonus = 0.0;
    for (building_id, count) in &state.structures {
        if *count == 0 {
            continue;
        }
        let Some(building) = ctx.building(building_id) else {
            continue;
        };
        if building.category == BuildingCategory::Refinery {
            refinery_bonus += building.effects.metal_extraction_bonus * (*count as f64);
        }
    }

    (base + research_bonus + refinery_bonus).clamp(0.0, 1.0)
}

/// Metal refined per day out of a mass-mining rate.
pub fn metal_production_rate(mass_mining_rate: f64, efficiency: f64) -> f64 {
    (mass_mining_rate * efficiency.clamp(0.0, 1.0)).max(0.0)
}

/// Methalox propellant extracted per day from zone volatiles. Salvage
/// research improves the yield; the total volatile take can never
/// exceed the zone's volatile fraction of the mined mass.
pub fn methalox_production_rate(
    ctx: &EngineContext<'_>,
    mass_mining_rate: f64,
    zone_def: &ZoneDef,
) -> f64 {
    if mass_mining_rate <= 0.0 {
        return 0.0;
    }
    let volatile = zone_def.volatile_fraction.clamp(0.0, 1.0);
    if volatile <= 0.0 {
        return 0.0;
    }
    let salvage =
        upgrade_factor(&ctx.coefficients.entries(category::SALVAGE_EFFICIENCY, ctx.skills)).factor;
    // The upgrade factor scales recovery of the volatile share, capped
    // at full recovery.
    let recovery = salvage.clamp(0.0, 1.0);
    mass_mining_rate * volatile * recovery
}

/// Non-metal, non-volatile remainder of the mined mass, floored at 0.
/// Feeds the host's slag-recycling loop.
pub fn slag_production_rate(
    mass_mining_rate: f64,
    metal_rate: f64,
    methalox_rate: f64,
) -> f64 {
    (mass_mining_rate - metal_rate - methalox_rate).max(0.0)
}
