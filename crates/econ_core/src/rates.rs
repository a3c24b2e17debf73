//! Probe- and structure-driven rate calculators.
//!
//! Shared formula shape for probe labor:
//! `count × (base + skill_bonus) × upgrade_factor × zone_multiplier ×
//! crowding × probe_count_efficiency`.
//!
//! Structures substitute a per-structure base rate, the
//! structure-performance upgrade factor, a per-building orbital
//! efficiency, and geometric growth `count ^ exponent` — deliberately
//! the inverse shape of the probe-count penalty, because co-located
//! infrastructure enjoys economies of scale while parallel probe labor
//! does not.

use crate::coefficients::category;
use crate::scaling::{crowding_efficiency, probe_count_efficiency};
use crate::upgrade::upgrade_factor;
use crate::{BuildingCategory, BuildingDef, EngineContext, SkillId, ZoneDef, ZoneState};

/// Mass mined per day by `probe_count` harvesting probes in a zone.
/// Non-positive counts short-circuit to 0 — not an error.
pub fn probe_mining_rate(
    ctx: &EngineContext<'_>,
    probe_count: f64,
    zone_def: &ZoneDef,
    state: &ZoneState,
) -> f64 {
    probe_rate(
        ctx,
        probe_count,
        zone_def,
        state,
        ctx.rules.probe.base_mining_rate_kg_per_day,
        &SkillId::Mining,
        category::PROBE_MINING,
        zone_def.mining_rate_multiplier,
    )
}

/// Mass assembled per day by `probe_count` constructing probes in a zone.
pub fn probe_building_rate(
    ctx: &EngineContext<'_>,
    probe_count: f64,
    zone_def: &ZoneDef,
    state: &ZoneState,
) -> f64 {
    probe_rate(
        ctx,
        probe_count,
        zone_def,
        state,
        ctx.rules.probe.base_build_rate_kg_per_day,
        &SkillId::Construction,
        category::PROBE_BUILDING,
        1.0,
    )
}

#[allow(clippy::too_many_arguments)]
fn probe_rate(
    ctx: &EngineContext<'_>,
    probe_count: f64,
    zone_def: &ZoneDef,
    state: &ZoneState,
    base_rate: f64,
    direct_skill: &SkillId,
    coefficient_category: &str,
    zone_multiplier: f64,
) -> f64 {
    if probe_count <= 0.0 || !probe_count.is_finite() {
        return 0.0;
    }

    // Additive bonus from the directly matching activity skill, floored
    // so the per-probe rate never goes negative.
    let skill_bonus = base_rate * (ctx.skills.value_or_neutral(direct_skill) - 1.0);
    let per_probe = (base_rate + skill_bonus).max(0.0);

    let factor = upgrade_factor(&ctx.coefficients.entries(coefficient_category, ctx.skills)).factor;

    let compute = ctx.skills.value_or_neutral(&SkillId::Compute);
    let crowding = crowding_efficiency(zone_def, state, ctx.rules);
    // The count penalty keys off total probes in the zone, not just the
    // share assigned to this activity.
    let count_eff = probe_count_efficiency(state.probe_count(ctx.rules), compute, ctx.rules);

    probe_count * per_probe * factor * zone_multiplier * crowding * count_eff
}

/// Mass mined per day by the zone's mining structures.
pub fn structure_mining_rate(
    ctx: &EngineContext<'_>,
    zone_def: &ZoneDef,
    state: &ZoneState,
) -> f64 {
    // The Dyson zone holds no minable body.
    if zone_def.is_dyson_zone {
        return 0.0;
    }
    structure_rate(ctx, zone_def, state, |building| {
        if building.category == BuildingCategory::Mining {
            Some(effective_base(
                building.effects.mass_mining_rate_kg_per_day,
                ctx.rules.structures.base_mining_rate_kg_per_day,
            ))
        } else {
            None
        }
    })
}

/// Mass assembled per day by the zone's fabrication structures
/// (factories and Dyson assembly yards).
pub fn structure_building_rate(
    ctx: &EngineContext<'_>,
    zone_def: &ZoneDef,
    state: &ZoneState,
) -> f64 {
    structure_rate(ctx, zone_def, state, |building| {
        match building.category {
            BuildingCategory::Factory | BuildingCategory::Dyson => Some(effective_base(
                building.effects.build_rate_kg_per_day,
                ctx.rules.structures.base_build_rate_kg_per_day,
            )),
            _ => None,
        }
    })
}

/// A building may author its own per-structure base rate; zero falls
/// back to the rules-wide default.
fn effective_base(authored: f64, fallback: f64) -> f64 {
    if authored > 0.0 {
        authored
    } else {
        fallback
    }
}

fn structure_rate(
    ctx: &EngineContext<'_>,
    zone_def: &ZoneDef,
    state: &ZoneState,
    base_for: impl Fn(&BuildingDef) -> Option<f64>,
) -> f64 {
    if state.structures.is_empty() {
        return 0.0;
    }

    let factor =
        upgrade_factor(&ctx.coefficients.entries(category::STRUCTURE_PERFORMANCE, ctx.skills))
            .factor;
    let crowding = crowding_efficiency(zone_def, state, ctx.rules);
    let exponent = ctx.rules.structures.geometric_scaling_exponent;

    // Sort for a stable summation order across identical inputs.
    let mut counted: Vec<(&crate::BuildingId, u64)> = state
        .structures
        .iter()
        .map(|(id, count)| (id, *count))
        .collect();
    counted.sort_by(|a, b| a.0 .0.cmp(&b.0 .0));

    let mut total = 0.0;
    for (building_id, count) in counted {
        if count == 0 {
            continue;
        }
        let Some(building) = ctx.building(building_id) else {
            continue;
        };
        let Some(base) = base_for(building) else {
            continue;
        };
        let geometric = (count as f64).powf(exponent);
        let orbital = building.orbital_efficiency_in(&zone_def.id);
        total += base * geometric * factor * orbital * crowding;
    }
    total
}

// ---------------------------------------------------------------------------
// Factory probe fabrication
// ---------------------------------------------------------------------------

/// Fraction of demand a supply can serve. Zero demand is "no demand",
/// not a division blow-up.
pub fn supply_throttle(available_per_day: f64, demand_per_day: f64) -> f64 {
    if demand_per_day <= 0.0 {
        return 0.0;
    }
    (available_per_day / demand_per_day).clamp(0.0, 1.0)
}

/// Probes fabricated per day by the zone's factories, throttled by the
/// metal budget the host can feed them. Factories scale linearly with
/// count — fabrication lines do not share the geometric bonus.
pub fn factory_probe_rate(
    ctx: &EngineContext<'_>,
    state: &ZoneState,
    metal_budget_kg_per_day: f64,
) -> f64 {
    let factor = upgrade_factor(&ctx.coefficients.entries(category::REPLICATION, ctx.skills)).factor;

    let mut rate = 0.0;
    let mut metal_demand = 0.0;
    for (building_id, count) in &state.structures {
        if *count == 0 {
            continue;
        }
        let Some(building) = ctx.building(building_id) else {
            continue;
        };
        if building.category != BuildingCategory::Factory {
            continue;
        }
        let produced = building.effects.probe_production_per_day * (*count as f64) * factor;
        rate += produced;
        metal_demand += produced * building.effects.metal_per_probe_kg;
    }

    if rate <= 0.0 {
        return 0.0;
    }
    rate * supply_throttle(metal_budget_kg_per_day, metal_demand)
}

// ---------------------------------------------------------------------------
// Propulsion helpers
// ---------------------------------------------------------------------------

/// Specific impulse after the delta-v-reduction upgrade factor.
pub fn effective_isp(ctx: &EngineContext<'_>) -> f64 {
    let factor =
        upgrade_factor(&ctx.coefficients.entries(category::DELTA_V_REDUCTION, ctx.skills)).factor;
    ctx.rules.propulsion.base_isp_seconds * factor.max(0.0)
}

/// Energy cost (watts) to move one kg/day into a zone:
/// `base × (1 + penalty)²`, with the penalty shrunk by the
/// delta-v-reduction upgrade factor.
pub fn transfer_energy_cost_per_kg_day(
    ctx: &EngineContext<'_>,
    base_cost_watts: f64,
    zone_def: &ZoneDef,
) -> f64 {
    let factor =
        upgrade_factor(&ctx.coefficients.entries(category::DELTA_V_REDUCTION, ctx.skills)).factor;
    let reduced_penalty = if factor > 0.0 {
        zone_def.delta_v_penalty / factor
    } else {
        zone_def.delta_v_penalty
    };
    base_cost_watts * (1.0 + reduced_penalty.max(0.0)).powi(2)
}
