//! Damage calculation engine.
//!
//! ```text
//! Combatant x2 + Move + Field + generation
//!         |
//!         v
//! GenerationProfile::get      -> rule set (stat formula, crit, order)
//! DamageContext::new          -> stats, types, crit, effectiveness, STAB
//! compute_effective_stats     -> stages, stat-level abilities/items
//! formula::base_damage        -> integer base damage
//! pipeline::apply             -> ordered float modifiers
//! formula::snap               -> absorb float error at integers
//! formula::generate_range     -> 16 rolls (the only truncation)
//!         |
//!         v
//! DamageResult
//! ```

pub mod context;
pub mod effectiveness;
pub mod formula;
pub mod generations;
pub mod modifier;
pub mod modifiers;
pub mod pipeline;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

use crate::entities::Combatant;
use crate::error::CalcError;
use crate::moves::Move;
use crate::state::Field;
use crate::types::{TypeChart, STANDARD_CHART};

use context::DamageContext;
use formula::{base_damage, generate_range, snap, ROLL_COUNT};
use generations::GenerationProfile;
use modifiers::compute_effective_stats;
use pipeline::{AppliedModifiers, PipelineOutcome};
use result::{describe, DamageResult, DescriptionParts, NoDamageReason};

/// Damage calculator bound to a type chart.
///
/// The chart is the only configurable piece; every other rule comes from the
/// [`GenerationProfile`] selected per call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    chart: TypeChart,
}

impl Calculator {
    pub fn new(chart: TypeChart) -> Self {
        Self { chart }
    }

    #[inline]
    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    /// Calculate the 16 damage rolls for `attacker` using `move_data` on
    /// `defender` under generation `generation`'s rules.
    ///
    /// Zero-damage outcomes are returned as results carrying a
    /// [`NoDamageReason`]; only invalid input is an error.
    pub fn calculate(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        move_data: &Move,
        field: &Field,
        generation: u8,
    ) -> Result<DamageResult, CalcError> {
        let profile = GenerationProfile::get(generation)?;
        let ctx = DamageContext::new(profile, &self.chart, attacker, defender, move_data, field)?;

        if move_data.is_status() {
            return Ok(no_damage(&ctx, NoDamageReason::StatusMove, AppliedModifiers::empty(), false));
        }
        if move_data.base_power == 0 {
            return Ok(no_damage(&ctx, NoDamageReason::ZeroPower, AppliedModifiers::empty(), false));
        }

        let (attack, defense) = compute_effective_stats(&ctx);
        let base = base_damage(attacker.level, move_data.base_power, attack, defense);

        let (final_damage, applied) = match pipeline::apply(base as f64, &ctx) {
            PipelineOutcome::Damage { value, applied } => (snap(value), applied),
            PipelineOutcome::NoDamage { reason, applied } => {
                return Ok(no_damage(&ctx, reason, applied, ctx.stab.is_some()));
            }
        };
        let damage_values = generate_range(final_damage);

        tracing::debug!(
            generation,
            attacker = %attacker.species.name,
            defender = %defender.species.name,
            move_name = %move_data.name,
            attack,
            defense,
            base,
            final_damage,
            min = damage_values[0],
            max = damage_values[ROLL_COUNT - 1],
            "damage calculated"
        );

        Ok(build_result(&ctx, damage_values, final_damage, applied, ctx.stab.is_some(), None))
    }
}

/// Calculate with the standard type chart.
///
/// See [`Calculator::calculate`].
pub fn calculate(
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &Move,
    field: &Field,
    generation: u8,
) -> Result<DamageResult, CalcError> {
    let calculator = Calculator::new(STANDARD_CHART);
    calculator.calculate(attacker, defender, move_data, field, generation)
}

fn no_damage(
    ctx: &DamageContext<'_>,
    reason: NoDamageReason,
    applied: AppliedModifiers,
    has_stab: bool,
) -> DamageResult {
    build_result(ctx, [0; ROLL_COUNT], 0.0, applied, has_stab, Some(reason))
}

fn build_result(
    ctx: &DamageContext<'_>,
    damage_values: [u32; ROLL_COUNT],
    final_damage: f64,
    applied: AppliedModifiers,
    has_stab: bool,
    no_damage: Option<NoDamageReason>,
) -> DamageResult {
    let description = describe(&DescriptionParts {
        attacker: &ctx.attacker.combatant.species.name,
        move_name: &ctx.move_data.name,
        defender: &ctx.defender.combatant.species.name,
        applied,
        has_stab,
        effectiveness: ctx.effectiveness,
        is_critical_hit: ctx.is_crit,
        weather: ctx.weather,
        terrain: ctx.field.terrain,
    });
    DamageResult {
        damage_values,
        type_effectiveness: ctx.effectiveness,
        is_critical_hit: ctx.is_crit,
        has_stab,
        description,
        applied,
        no_damage,
        final_damage,
        defender_max_hp: ctx.defender.max_hp(),
        defender_hp: ctx.defender.hp,
        multi_hit: ctx.move_data.multi_hit,
    }
}
