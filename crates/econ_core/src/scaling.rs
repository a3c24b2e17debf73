//! Diminishing-returns laws.
//!
//! Three independent penalties, each a scalar in (0, 1] with a
//! documented floor so production never deadlocks at exactly zero.
//! Penalties combine by multiplication, never addition.

use crate::{EconomicRules, ZoneDef, ZoneState};

/// Crowding efficiency never drops below this.
pub const CROWDING_FLOOR: f64 = 1e-3;
/// Probe-count efficiency never drops below this.
pub const PROBE_COUNT_FLOOR: f64 = 1e-3;
/// Global replication efficiency never drops below this.
pub const GLOBAL_REPLICATION_FLOOR: f64 = 1e-4;

/// Zone-crowding penalty: probes consuming a zone's original mass face
/// exponentially harsher returns as the zone depletes.
///
/// The Dyson zone is exempt (no minable body). Below the threshold
/// ratio there is no penalty; above it,
/// `exp(−decay_rate · (ratio − threshold))`, floored at [`CROWDING_FLOOR`].
pub fn crowding_efficiency(zone_def: &ZoneDef, state: &ZoneState, rules: &EconomicRules) -> f64 {
    if zone_def.is_dyson_zone {
        return 1.0;
    }
    // Zero or negative original mass: no meaningful ratio, no penalty.
    if state.original_mass_kg <= 0.0 {
        return 1.0;
    }
    let ratio = (state.probe_mass_kg / state.original_mass_kg).max(0.0);
    let threshold = rules.crowding.threshold_ratio;
    if ratio <= threshold {
        return 1.0;
    }
    let efficiency = (-rules.crowding.decay_rate * (ratio - threshold)).exp();
    efficiency.max(CROWDING_FLOOR)
}

/// Per-zone probe-count penalty: each doubling of probe labor in one
/// zone loses a fraction of marginal output, softened as the compute
/// skill approaches `compute_skill_threshold`.
///
/// `efficiency = (1 − penalty_per_doubling) ^ log2(count)`, floored at
/// [`PROBE_COUNT_FLOOR`]. Zero or one probe takes no penalty.
pub fn probe_count_efficiency(probe_count: f64, compute_skill: f64, rules: &EconomicRules) -> f64 {
    if probe_count.is_nan() || probe_count <= 1.0 {
        return 1.0;
    }
    let scaling = &rules.probe_count_scaling;
    let base = scaling.base_penalty_per_doubling.clamp(0.0, 1.0);
    let min = scaling.min_penalty_per_doubling.clamp(0.0, 1.0);

    // Interpolate penalty from base (compute = 1.0) down to min
    // (compute >= threshold). A degenerate threshold <= 1 means the
    // softening is already maxed out.
    let span = scaling.compute_skill_threshold - 1.0;
    let normalized = if span <= 0.0 {
        1.0
    } else {
        ((compute_skill - 1.0) / span).clamp(0.0, 1.0)
    };
    let penalty = base - (base - min) * normalized;

    let doublings = probe_count.log2();
    let efficiency = (1.0 - penalty).powf(doublings);
    efficiency.max(PROBE_COUNT_FLOOR)
}

/// Global replication penalty: above the total-probe threshold, each
/// order of magnitude multiplies output by `halving_factor`.
///
/// Smooth across the threshold — exactly 1.0 at the threshold itself —
/// and floored at [`GLOBAL_REPLICATION_FLOOR`].
pub fn global_replication_efficiency(total_probes: f64, rules: &EconomicRules) -> f64 {
    let threshold = rules.global_replication_scaling.threshold;
    if threshold <= 0.0 || total_probes <= threshold {
        return 1.0;
    }
    let orders_above = total_probes.log10() - threshold.log10();
    let efficiency = rules
        .global_replication_scaling
        .halving_factor
        .clamp(0.0, 1.0)
        .powf(orders_above);
    efficiency.max(GLOBAL_REPLICATION_FLOOR)
}
