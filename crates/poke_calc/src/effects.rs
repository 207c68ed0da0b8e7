//! Data-driven ability and item effects.
//!
//! Every ability or item effect the calculator understands is one
//! [`EffectRule`] row: who must carry it, the normalized id, a
//! [`Condition`] that decides whether it fires for this attack, and an
//! [`Outcome`]. Supporting a new ability or item means adding rows to a
//! table in [`crate::abilities::registry`] or [`crate::items::registry`].

use crate::catalog::to_id;
use crate::damage::context::DamageContext;
use crate::damage::modifier::Modifier;
use crate::moves::{MoveCategory, MoveFlags};
use crate::state::Weather;
use crate::stats::Stat;
use crate::types::Type;

/// Which side of the attack must carry the ability/item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Attacker,
    Defender,
}

/// What a matching rule does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Multiply(Modifier),
    /// The attack deals no damage at all.
    Negate,
}

/// When a rule fires. "Holder" is the combatant carrying the ability/item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Condition {
    Always,
    MoveType(Type),
    MoveTypeIn(&'static [Type]),
    Category(MoveCategory),
    /// The attacker's stat the move reads, after any override.
    OffensiveStat(Stat),
    /// The defender's stat the move reads, after any override.
    DefensiveStat(Stat),
    Flag(MoveFlags),
    SuperEffective,
    /// Resisted, but not immune.
    NotVeryEffective,
    NotSuperEffective,
    CriticalHit,
    WeatherIn(&'static [Weather]),
    /// Holder at or below 1/3 of its max HP.
    Pinch,
    /// Holder at full HP.
    FullHp,
    /// Holder has a major status condition.
    Statused,
    /// Holder is not touching the ground.
    Airborne,
    /// Holder's species (normalized ids).
    SpeciesIn(&'static [&'static str]),
    /// Base power at or below a threshold.
    PowerAtMost(u16),
    All(&'static [Condition]),
}

impl Condition {
    pub fn holds(&self, ctx: &DamageContext<'_>, role: Role) -> bool {
        let holder = ctx.participant(role);
        match *self {
            Condition::Always => true,
            Condition::MoveType(ty) => ctx.move_type == ty,
            Condition::MoveTypeIn(types) => types.contains(&ctx.move_type),
            Condition::Category(category) => ctx.move_data.category == category,
            Condition::OffensiveStat(stat) => ctx.move_data.offensive_stat() == stat,
            Condition::DefensiveStat(stat) => ctx.move_data.defensive_stat() == stat,
            Condition::Flag(flag) => ctx.move_data.has_flag(flag),
            Condition::SuperEffective => ctx.effectiveness > 1.0,
            Condition::NotVeryEffective => ctx.effectiveness > 0.0 && ctx.effectiveness < 1.0,
            Condition::NotSuperEffective => ctx.effectiveness <= 1.0,
            Condition::CriticalHit => ctx.is_crit,
            Condition::WeatherIn(weathers) => weathers.contains(&ctx.weather),
            Condition::Pinch => holder.hp as i64 * 3 <= holder.max_hp() as i64,
            Condition::FullHp => holder.hp > 0 && holder.hp == holder.max_hp(),
            Condition::Statused => !holder.combatant.status.is_none(),
            Condition::Airborne => !holder.grounded,
            Condition::SpeciesIn(names) => {
                let species = to_id(&holder.combatant.species.name);
                names.contains(&species.as_str())
            }
            Condition::PowerAtMost(limit) => ctx.move_data.base_power <= limit,
            Condition::All(conditions) => conditions.iter().all(|c| c.holds(ctx, role)),
        }
    }
}

/// One row of an effect table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectRule {
    pub role: Role,
    pub id: &'static str,
    pub when: Condition,
    pub outcome: Outcome,
}

/// Multiplier carried by the attacker.
pub const fn offense(id: &'static str, when: Condition, modifier: Modifier) -> EffectRule {
    EffectRule {
        role: Role::Attacker,
        id,
        when,
        outcome: Outcome::Multiply(modifier),
    }
}

/// Multiplier carried by the defender.
pub const fn defense(id: &'static str, when: Condition, modifier: Modifier) -> EffectRule {
    EffectRule {
        role: Role::Defender,
        id,
        when,
        outcome: Outcome::Multiply(modifier),
    }
}

/// Immunity carried by the defender.
pub const fn negate(id: &'static str, when: Condition) -> EffectRule {
    EffectRule {
        role: Role::Defender,
        id,
        when,
        outcome: Outcome::Negate,
    }
}

/// Result of resolving a table against both participants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// No rule fired.
    Unchanged,
    /// At least one multiplier fired; this is their product.
    Scaled(Modifier),
    /// A negating rule fired; carries the rule id.
    Negated(&'static str),
}

/// Walk `table` for the attacker's id, then the defender's id.
///
/// Multipliers of every matching row are multiplied together; the first
/// matching negation wins immediately.
pub fn resolve(
    table: &[EffectRule],
    ctx: &DamageContext<'_>,
    attacker_id: Option<&str>,
    defender_id: Option<&str>,
) -> Resolution {
    let mut product = Modifier::ONE;
    let mut fired = false;

    for (role, id) in [(Role::Attacker, attacker_id), (Role::Defender, defender_id)] {
        let Some(id) = id else { continue };
        for rule in table.iter().filter(|r| r.role == role && r.id == id) {
            if !rule.when.holds(ctx, role) {
                continue;
            }
            match rule.outcome {
                Outcome::Negate => return Resolution::Negated(rule.id),
                Outcome::Multiply(modifier) => {
                    tracing::trace!(id = rule.id, ?role, factor = modifier.val(), "effect fired");
                    product = product * modifier;
                    fired = true;
                }
            }
        }
    }

    if fired {
        Resolution::Scaled(product)
    } else {
        Resolution::Unchanged
    }
}

/// Whether any row of `table` mentions `id`.
pub fn is_known(table: &[EffectRule], id: &str) -> bool {
    table.iter().any(|rule| rule.id == id)
}
