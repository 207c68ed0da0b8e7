//! Type effectiveness calculation with immunity overrides.
//!
//! This module combines the injected [`TypeChart`], the generation's
//! [`ChartRevision`] and the per-attack overrides into one multiplier:
//! - Ring Target (negates all type immunities)
//! - Iron Ball / Gravity grounding for Ground vs Flying
//! - Scrappy / Mind's Eye (Normal/Fighting vs Ghost)

use crate::damage::generations::ChartRevision;
use crate::types::{Type, TypeChart, TypeEffectiveness};

/// Per-attack reasons to ignore an immunity cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImmunityOverrides {
    /// Defender holds Ring Target.
    pub ring_target: bool,
    /// Attacker has Scrappy or Mind's Eye.
    pub ignore_ghost_immunity: bool,
    /// Defender is grounded (Gravity, Iron Ball).
    pub grounded: bool,
}

/// Chart cell after the generation revision.
#[inline]
pub fn cell(chart: &TypeChart, revision: ChartRevision, attack: Type, defend: Type) -> TypeEffectiveness {
    revision
        .adjust(attack, defend)
        .unwrap_or_else(|| chart.effectiveness(attack, defend))
}

/// Combined multiplier of `move_type` against every defending type.
///
/// Strict per-type product; any immunity that is not overridden yields 0.
pub fn type_effectiveness(
    chart: &TypeChart,
    revision: ChartRevision,
    move_type: Type,
    defender_types: &[Type],
    overrides: ImmunityOverrides,
) -> f64 {
    let mut product = 1.0;
    for &defend in defender_types {
        let mut effect = cell(chart, revision, move_type, defend);
        if effect == TypeEffectiveness::Immune {
            let lifted = overrides.ring_target
                || (overrides.grounded && move_type == Type::Ground && defend == Type::Flying)
                || (overrides.ignore_ghost_immunity
                    && defend == Type::Ghost
                    && matches!(move_type, Type::Normal | Type::Fighting));
            if !lifted {
                return 0.0;
            }
            effect = TypeEffectiveness::Normal;
        }
        product *= effect.multiplier();
    }
    product
}
