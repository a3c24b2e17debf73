//! Weighted-sum upgrade factor.
//!
//! `factor = 1 + Σ weight · (value − 1)` over valid entries. Linear by
//! design: cheap, monotonic in every skill, and composable across any
//! number of categories without per-category exponent tuning. Skills
//! above 2.0 can dominate a category; that is accepted behavior.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::CoefficientEntry;

/// One skill's share of an upgrade factor, kept for UI display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillContribution {
    pub skill: crate::SkillId,
    pub weight: f64,
    pub value: f64,
    /// `weight · (value − 1)` — this entry's additive share.
    pub contribution: f64,
}

/// A multiplicative production bonus, 1.0 = neutral, never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeFactor {
    pub factor: f64,
    pub contributions: SmallVec<[SkillContribution; 8]>,
}

impl UpgradeFactor {
    pub fn neutral() -> Self {
        Self {
            factor: 1.0,
            contributions: SmallVec::new(),
        }
    }
}

impl Default for UpgradeFactor {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Reduce resolved coefficient entries to a single upgrade factor.
///
/// Entries with a non-finite or non-positive value, or a non-finite
/// weight, are skipped silently — not treated as zero. An empty or
/// all-invalid list yields exactly 1.0. The result is clamped at 0.
pub fn upgrade_factor(entries: &[CoefficientEntry]) -> UpgradeFactor {
    let mut sum = 0.0_f64;
    let mut contributions = SmallVec::new();

    for entry in entries {
        if !entry.value.is_finite() || entry.value <= 0.0 || !entry.weight.is_finite() {
            continue;
        }
        let contribution = entry.weight * (entry.value - 1.0);
        sum += contribution;
        contributions.push(SkillContribution {
            skill: entry.skill.clone(),
            weight: entry.weight,
            value: entry.value,
            contribution,
        });
    }

    UpgradeFactor {
        factor: (1.0 + sum).max(0.0),
        contributions,
    }
}
