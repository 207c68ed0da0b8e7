//! Effective attacking and defending stats.
//!
//! Everything that changes the stats fed into the base damage formula
//! happens here: stat stages (with the critical-hit rules) followed by the
//! stat-level ability and item tables.

use crate::abilities;
use crate::damage::context::DamageContext;
use crate::effects::{resolve, EffectRule, Resolution};
use crate::items;
use crate::stats::{apply_stage, critical_defense_stage, critical_offense_stage};

/// Scale a stat by whatever `table` resolves to, flooring.
fn scale_stat(
    stat: i32,
    table: &[EffectRule],
    ctx: &DamageContext<'_>,
    attacker_id: Option<&str>,
    defender_id: Option<&str>,
) -> i32 {
    match resolve(table, ctx, attacker_id, defender_id) {
        Resolution::Scaled(modifier) => modifier.apply(stat as f64).floor() as i32,
        Resolution::Unchanged | Resolution::Negated(_) => stat,
    }
}

/// Compute effective attack and defense for this calculation.
///
/// Critical hit rules:
/// - Ignore attacker's negative offensive stages
/// - Ignore defender's positive defensive stages
pub fn compute_effective_stats(ctx: &DamageContext<'_>) -> (i32, i32) {
    let offensive_stat = ctx.move_data.offensive_stat();
    let defensive_stat = ctx.move_data.defensive_stat();

    let mut attack_stage = ctx.attacker.combatant.stages.get(offensive_stat);
    let mut defense_stage = ctx.defender.combatant.stages.get(defensive_stat);
    if ctx.is_crit {
        attack_stage = critical_offense_stage(attack_stage);
        defense_stage = critical_defense_stage(defense_stage);
    }

    let mut attack = apply_stage(ctx.attacker.stats.get(offensive_stat), attack_stage);
    let mut defense = apply_stage(ctx.defender.stats.get(defensive_stat), defense_stage);

    if ctx.profile.modern_mechanics {
        attack = scale_stat(attack, abilities::OFFENSE_STAT_EFFECTS, ctx, ctx.attacker.ability(), None);
        attack = scale_stat(attack, items::OFFENSE_STAT_EFFECTS, ctx, ctx.attacker.item(), None);
        defense = scale_stat(defense, abilities::DEFENSE_STAT_EFFECTS, ctx, None, ctx.defender.ability());
        defense = scale_stat(defense, items::DEFENSE_STAT_EFFECTS, ctx, None, ctx.defender.item());
    }

    (attack.max(1), defense.max(1))
}
