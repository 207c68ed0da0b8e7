//! The damage modifier pipeline.
//!
//! Base damage flows through an ordered list of stages, each of which may
//! leave it alone, scale it, or stop the calculation with a zero-damage
//! outcome. The running value is a float; it is truncated once, when the
//! rolls are generated.
//!
//! # Order of operations
//!
//! | # | Gen 6+              | Gen 1-5             |
//! |---|---------------------|---------------------|
//! | 1 | STAB                | STAB                |
//! | 2 | Type effectiveness  | Critical hit        |
//! | 3 | Critical hit        | Type effectiveness  |
//! | 4 | Weather             | Weather             |
//! | 5 | Terrain             | Terrain             |
//! | 6 | Abilities           | Abilities           |
//! | 7 | Items               | Items               |
//! | 8 | Status (burn)       | Status (burn)       |
//! | 9 | Screens             | Screens             |
//!
//! Which column applies is read from
//! [`GenerationProfile::critical_before_effectiveness`].

use bitflags::bitflags;
use serde::Serialize;

use crate::abilities;
use crate::catalog::to_id;
use crate::damage::context::DamageContext;
use crate::damage::generations::GenerationProfile;
use crate::damage::modifier::Modifier;
use crate::damage::result::NoDamageReason;
use crate::effects::{resolve, Resolution};
use crate::items;
use crate::moves::MoveCategory;
use crate::state::{SideConditions, Status, Terrain, Weather};
use crate::types::Type;

bitflags! {
    /// Which stages changed the damage.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
    pub struct AppliedModifiers: u16 {
        const STAB               = 1 << 0;
        const TYPE_EFFECTIVENESS = 1 << 1;
        const CRITICAL_HIT       = 1 << 2;
        const WEATHER            = 1 << 3;
        const TERRAIN            = 1 << 4;
        const ABILITY            = 1 << 5;
        const ITEM               = 1 << 6;
        const BURN               = 1 << 7;
        const SCREEN             = 1 << 8;
    }
}

/// One pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Stab,
    TypeEffectiveness,
    CriticalHit,
    Weather,
    Terrain,
    Abilities,
    Items,
    StatusPenalty,
    Screens,
}

impl Stage {
    pub const fn flag(self) -> AppliedModifiers {
        match self {
            Stage::Stab => AppliedModifiers::STAB,
            Stage::TypeEffectiveness => AppliedModifiers::TYPE_EFFECTIVENESS,
            Stage::CriticalHit => AppliedModifiers::CRITICAL_HIT,
            Stage::Weather => AppliedModifiers::WEATHER,
            Stage::Terrain => AppliedModifiers::TERRAIN,
            Stage::Abilities => AppliedModifiers::ABILITY,
            Stage::Items => AppliedModifiers::ITEM,
            Stage::StatusPenalty => AppliedModifiers::BURN,
            Stage::Screens => AppliedModifiers::SCREEN,
        }
    }
}

const CRIT_AFTER_EFFECTIVENESS: [Stage; 9] = [
    Stage::Stab,
    Stage::TypeEffectiveness,
    Stage::CriticalHit,
    Stage::Weather,
    Stage::Terrain,
    Stage::Abilities,
    Stage::Items,
    Stage::StatusPenalty,
    Stage::Screens,
];

const CRIT_BEFORE_EFFECTIVENESS: [Stage; 9] = [
    Stage::Stab,
    Stage::CriticalHit,
    Stage::TypeEffectiveness,
    Stage::Weather,
    Stage::Terrain,
    Stage::Abilities,
    Stage::Items,
    Stage::StatusPenalty,
    Stage::Screens,
];

/// Stage order for a generation.
pub fn stage_order(profile: &GenerationProfile) -> &'static [Stage] {
    if profile.critical_before_effectiveness {
        &CRIT_BEFORE_EFFECTIVENESS
    } else {
        &CRIT_AFTER_EFFECTIVENESS
    }
}

/// What a single stage decided.
#[derive(Clone, Debug, PartialEq)]
enum Step {
    Skip,
    Scale(Modifier),
    Stop(NoDamageReason),
}

/// Final value of the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineOutcome {
    Damage {
        value: f64,
        applied: AppliedModifiers,
    },
    NoDamage {
        reason: NoDamageReason,
        applied: AppliedModifiers,
    },
}

/// Run every stage over `base_damage`.
pub fn apply(base_damage: f64, ctx: &DamageContext<'_>) -> PipelineOutcome {
    let mut damage = base_damage;
    let mut applied = AppliedModifiers::empty();

    for &stage in stage_order(ctx.profile) {
        match run_stage(stage, ctx) {
            Step::Skip => {}
            Step::Scale(modifier) => {
                damage = modifier.apply(damage);
                applied |= stage.flag();
                tracing::trace!(?stage, factor = modifier.val(), damage, "stage applied");
            }
            Step::Stop(reason) => {
                tracing::debug!(?stage, %reason, "no damage");
                return PipelineOutcome::NoDamage { reason, applied };
            }
        }
    }

    PipelineOutcome::Damage {
        value: damage,
        applied,
    }
}

fn run_stage(stage: Stage, ctx: &DamageContext<'_>) -> Step {
    match stage {
        Stage::Stab => ctx.stab.map_or(Step::Skip, Step::Scale),
        Stage::TypeEffectiveness => type_effectiveness(ctx),
        Stage::CriticalHit => {
            if ctx.is_crit {
                Step::Scale(ctx.profile.critical_multiplier)
            } else {
                Step::Skip
            }
        }
        Stage::Weather => weather(ctx.weather, ctx.move_type),
        Stage::Terrain => terrain(ctx),
        Stage::Abilities => ability_effects(ctx),
        Stage::Items => item_effects(ctx),
        Stage::StatusPenalty => burn(ctx),
        Stage::Screens => screens(ctx),
    }
}

// ============================================================================
// Stages
// ============================================================================

fn type_effectiveness(ctx: &DamageContext<'_>) -> Step {
    match ctx.effectiveness {
        e if e == 0.0 => Step::Stop(NoDamageReason::TypeImmunity),
        e if e == 1.0 => Step::Skip,
        e => Step::Scale(Modifier::new(e)),
    }
}

fn weather(weather: Weather, move_type: Type) -> Step {
    match (weather, move_type) {
        // Primal weather evaporates / extinguishes the opposing type
        (Weather::HarshSun, Type::Water) | (Weather::HeavyRain, Type::Fire) => {
            Step::Stop(NoDamageReason::WeatherSuppressed(weather))
        }
        (Weather::Sun | Weather::HarshSun, Type::Fire) => Step::Scale(Modifier::ONE_POINT_FIVE),
        (Weather::Sun, Type::Water) => Step::Scale(Modifier::HALF),
        (Weather::Rain | Weather::HeavyRain, Type::Water) => Step::Scale(Modifier::ONE_POINT_FIVE),
        (Weather::Rain, Type::Fire) => Step::Scale(Modifier::HALF),
        _ => Step::Skip,
    }
}

fn terrain(ctx: &DamageContext<'_>) -> Step {
    if !ctx.profile.modern_mechanics {
        return Step::Skip;
    }
    match (ctx.field.terrain, ctx.move_type) {
        (Terrain::Electric, Type::Electric) | (Terrain::Grassy, Type::Grass) | (Terrain::Psychic, Type::Psychic)
            if ctx.attacker.grounded =>
        {
            Step::Scale(Modifier::ONE_POINT_THREE)
        }
        (Terrain::Misty, Type::Dragon) if ctx.defender.grounded => Step::Scale(Modifier::HALF),
        _ => Step::Skip,
    }
}

fn ability_effects(ctx: &DamageContext<'_>) -> Step {
    match resolve(abilities::DAMAGE_EFFECTS, ctx, ctx.attacker.ability(), ctx.defender.ability()) {
        Resolution::Unchanged => Step::Skip,
        Resolution::Scaled(modifier) => Step::Scale(modifier),
        Resolution::Negated(id) => {
            let name = ctx.defender.combatant.ability.clone();
            Step::Stop(NoDamageReason::AbilityNegated(name.unwrap_or_else(|| id.to_string())))
        }
    }
}

fn item_effects(ctx: &DamageContext<'_>) -> Step {
    match resolve(items::DAMAGE_EFFECTS, ctx, ctx.attacker.item(), ctx.defender.item()) {
        Resolution::Unchanged => Step::Skip,
        Resolution::Scaled(modifier) => Step::Scale(modifier),
        Resolution::Negated(id) => {
            let name = ctx.defender.combatant.item.clone();
            Step::Stop(NoDamageReason::ItemNegated(name.unwrap_or_else(|| id.to_string())))
        }
    }
}

fn burn(ctx: &DamageContext<'_>) -> Step {
    let attacker = &ctx.attacker;
    if attacker.combatant.status != Status::Burn || ctx.move_data.category != MoveCategory::Physical {
        return Step::Skip;
    }
    let bypass = attacker.ability().is_some_and(abilities::bypasses_burn)
        || (ctx.profile.modern_mechanics && to_id(&ctx.move_data.name) == "facade");
    if bypass {
        Step::Skip
    } else {
        Step::Scale(Modifier::HALF)
    }
}

fn screens(ctx: &DamageContext<'_>) -> Step {
    if ctx.is_crit || ctx.attacker.ability().is_some_and(abilities::bypasses_screens) {
        return Step::Skip;
    }
    let side = ctx.field.defender_side;
    let screened = match ctx.move_data.category {
        MoveCategory::Physical => side.intersects(SideConditions::REFLECT | SideConditions::AURORA_VEIL),
        MoveCategory::Special => side.intersects(SideConditions::LIGHT_SCREEN | SideConditions::AURORA_VEIL),
        MoveCategory::Status => false,
    };
    if screened {
        Step::Scale(Modifier::HALF)
    } else {
        Step::Skip
    }
}
