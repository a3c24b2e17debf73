//! Zone aggregation — the single entry point the tick scheduler calls
//! once per zone per tick.

use crate::extraction::{
    extraction_efficiency, metal_production_rate, methalox_production_rate, slag_production_rate,
};
use crate::rates::{
    probe_building_rate, probe_mining_rate, structure_building_rate, structure_mining_rate,
};
use crate::scaling::global_replication_efficiency;
use crate::{EngineContext, RateBundle, ZoneState};

/// Compute the zone's full rate bundle from its state snapshot.
///
/// Allocation fractions are multiplied by the zone's derived probe
/// count to get per-activity labor. Construct and Dyson probes both
/// count as builders; replicating probes also build (probe mass) but
/// their output is additionally damped by the global replication law —
/// construction is not. A zone id missing from the catalog yields an
/// all-zero bundle rather than an error.
pub fn zone_rates(ctx: &EngineContext<'_>, state: &ZoneState) -> RateBundle {
    let Some(zone_def) = ctx.zone_def(&state.zone_id) else {
        return RateBundle::default();
    };

    let probe_count = state.probe_count(ctx.rules);
    let alloc = &state.allocations;

    let harvest_count = probe_count * alloc.harvest.clamp(0.0, 1.0);
    let construct_count = probe_count * (alloc.construct + alloc.dyson).clamp(0.0, 1.0);
    let replicate_count = probe_count * alloc.replicate.clamp(0.0, 1.0);

    let probe_mining = probe_mining_rate(ctx, harvest_count, zone_def, state);

    let replication_eff = global_replication_efficiency(ctx.total_probe_count, ctx.rules);
    let probe_building = probe_building_rate(ctx, construct_count, zone_def, state)
        + probe_building_rate(ctx, replicate_count, zone_def, state) * replication_eff;

    let structure_mining = structure_mining_rate(ctx, zone_def, state);
    let structure_building = structure_building_rate(ctx, zone_def, state);

    let mining = probe_mining + structure_mining;
    let building = probe_building + structure_building;

    let efficiency = extraction_efficiency(ctx, zone_def, state);
    let metal_production = metal_production_rate(mining, efficiency);
    let methalox_production = methalox_production_rate(ctx, mining, zone_def);
    let slag_production = slag_production_rate(mining, metal_production, methalox_production);

    RateBundle {
        mining,
        building,
        probe_mining,
        probe_building,
        structure_mining,
        structure_building,
        metal_production,
        methalox_production,
        slag_production,
    }
}
