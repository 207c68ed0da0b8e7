//! Damage calculation context.
//!
//! The `DamageContext` struct holds everything one calculation needs after
//! the inputs have been resolved: the generation profile, both participants
//! with their computed stats and normalized ability/item ids, the effective
//! weather, crit status, type effectiveness and STAB. It is built once and
//! then only read by the pipeline stages and effect conditions.

use crate::abilities;
use crate::damage::effectiveness::{type_effectiveness, ImmunityOverrides};
use crate::damage::generations::GenerationProfile;
use crate::damage::modifier::Modifier;
use crate::effects::Role;
use crate::entities::Combatant;
use crate::error::CalcError;
use crate::items;
use crate::moves::Move;
use crate::state::{Field, Weather};
use crate::stats::StatsTable;
use crate::types::{Type, TypeChart};

/// One side of the attack, resolved.
#[derive(Clone, Debug)]
pub struct Participant<'a> {
    pub combatant: &'a Combatant,
    /// Computed battle stats (no stages applied)
    pub stats: StatsTable,
    /// Current HP, clamped into `0..=stats.hp`
    pub hp: i32,
    /// Normalized ability id; always `None` without modern mechanics
    pub ability: Option<String>,
    /// Normalized item id; always `None` without modern mechanics
    pub item: Option<String>,
    /// Types used for effectiveness (Tera-aware)
    pub types: Vec<Type>,
    pub grounded: bool,
}

impl<'a> Participant<'a> {
    fn new(combatant: &'a Combatant, profile: &GenerationProfile, field: &Field) -> Result<Self, CalcError> {
        let stats = combatant.stats(profile)?;
        let (ability, item) = if profile.modern_mechanics {
            (combatant.ability_id(), combatant.item_id())
        } else {
            (None, None)
        };
        Ok(Self {
            combatant,
            stats,
            hp: combatant.hp_given_max(stats.hp),
            ability,
            item,
            types: combatant.effective_types(profile.terastallization),
            grounded: combatant.is_grounded(field, profile),
        })
    }

    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.stats.hp
    }

    #[inline]
    pub fn ability(&self) -> Option<&str> {
        self.ability.as_deref()
    }

    #[inline]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    #[inline]
    pub fn has_ability(&self, id: &str) -> bool {
        self.ability() == Some(id)
    }

    #[inline]
    pub fn has_item(&self, id: &str) -> bool {
        self.item() == Some(id)
    }
}

/// Context for a single damage calculation.
#[derive(Clone, Debug)]
pub struct DamageContext<'a> {
    pub profile: &'static GenerationProfile,
    pub attacker: Participant<'a>,
    pub defender: Participant<'a>,
    pub move_data: &'a Move,
    pub field: &'a Field,

    // ========================================================================
    // Derived once per calculation
    // ========================================================================
    pub move_type: Type,
    /// Field weather, or `None` while Cloud Nine / Air Lock is out
    pub weather: Weather,
    pub is_crit: bool,
    /// Combined type effectiveness against the defender's types
    pub effectiveness: f64,
    /// STAB multiplier, if the move gets STAB at all
    pub stab: Option<Modifier>,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        profile: &'static GenerationProfile,
        chart: &TypeChart,
        attacker: &'a Combatant,
        defender: &'a Combatant,
        move_data: &'a Move,
        field: &'a Field,
    ) -> Result<Self, CalcError> {
        let attacker = Participant::new(attacker, profile, field)?;
        let defender = Participant::new(defender, profile, field)?;
        let move_type = move_data.move_type;

        let weather_suppressed = [&attacker, &defender]
            .iter()
            .any(|p| p.ability().is_some_and(abilities::suppresses_weather));
        let weather = if weather_suppressed { Weather::None } else { field.weather };

        let crit_requested = field.critical_hit || move_data.will_crit;
        let is_crit = crit_requested && !defender.ability().is_some_and(abilities::blocks_critical_hits);

        let overrides = ImmunityOverrides {
            ring_target: defender.has_item(items::RING_TARGET),
            ignore_ghost_immunity: attacker.ability().is_some_and(abilities::ignores_ghost_immunity),
            grounded: defender.grounded,
        };
        let effectiveness = type_effectiveness(
            chart,
            profile.chart_revision,
            move_type,
            &defender.types,
            overrides,
        );
        let stab = stab_modifier(profile, &attacker, move_type);

        Ok(Self {
            profile,
            attacker,
            defender,
            move_data,
            field,
            move_type,
            weather,
            is_crit,
            effectiveness,
            stab,
        })
    }

    #[inline]
    pub fn participant(&self, role: Role) -> &Participant<'a> {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }
}

/// STAB: the move's type matches an original type or the Tera type.
///
/// Adaptability, or a Tera type matching an original type, raises it to 2x.
fn stab_modifier(profile: &GenerationProfile, attacker: &Participant<'_>, move_type: Type) -> Option<Modifier> {
    let combatant = attacker.combatant;
    let original = combatant.species.has_type(move_type);
    let tera = combatant.tera_type.filter(|_| profile.terastallization);
    if !original && tera != Some(move_type) {
        return None;
    }
    let boosted = attacker.has_ability("adaptability") || (original && tera == Some(move_type));
    Some(if boosted {
        Modifier::DOUBLE
    } else {
        Modifier::ONE_POINT_FIVE
    })
}
