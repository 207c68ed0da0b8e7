//! Ability records and effect tables.

use serde::{Deserialize, Serialize};

use crate::catalog::Keyed;

pub mod registry;

pub use registry::{DAMAGE_EFFECTS, DEFENSE_STAT_EFFECTS, OFFENSE_STAT_EFFECTS};

/// Catalog record for an ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Keyed for AbilityRecord {
    const KIND: &'static str = "ability";

    fn key(&self) -> &str {
        &self.name
    }
}

/// Defender abilities that cancel critical hits.
pub fn blocks_critical_hits(id: &str) -> bool {
    registry::CRIT_BLOCKERS.contains(&id)
}

/// Attacker abilities that keep full power while burned.
pub fn bypasses_burn(id: &str) -> bool {
    registry::BURN_BYPASS.contains(&id)
}

/// Abilities that negate weather while on the field.
pub fn suppresses_weather(id: &str) -> bool {
    registry::WEATHER_SUPPRESSORS.contains(&id)
}

/// Attacker abilities that let Normal/Fighting moves hit Ghost types.
pub fn ignores_ghost_immunity(id: &str) -> bool {
    registry::GHOST_IMMUNITY_BYPASS.contains(&id)
}

/// Attacker abilities that ignore Reflect/Light Screen/Aurora Veil.
pub fn bypasses_screens(id: &str) -> bool {
    registry::SCREEN_BYPASS.contains(&id)
}

/// Whether the calculator models this ability at all.
pub fn is_modeled(id: &str) -> bool {
    use crate::effects::is_known;
    is_known(DAMAGE_EFFECTS, id)
        || is_known(OFFENSE_STAT_EFFECTS, id)
        || is_known(DEFENSE_STAT_EFFECTS, id)
        || [
            registry::CRIT_BLOCKERS,
            registry::BURN_BYPASS,
            registry::WEATHER_SUPPRESSORS,
            registry::GHOST_IMMUNITY_BYPASS,
            registry::SCREEN_BYPASS,
            registry::FLAG_ABILITIES,
        ]
        .iter()
        .any(|list| list.contains(&id))
}
