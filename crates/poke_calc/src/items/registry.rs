//! Item effect tables.

use crate::damage::modifier::Modifier;
use crate::effects::Condition::*;
use crate::effects::{defense, negate, offense, EffectRule};
use crate::moves::MoveCategory::{Physical, Special};
use crate::moves::MoveFlags;
use crate::stats::Stat::{Attack, SpecialAttack, SpecialDefense};
use crate::types::Type;

const TYPE_BOOST: Modifier = Modifier::ONE_POINT_TWO;

/// Resist berries halve a super-effective hit of their type.
const fn resist_berry(id: &'static str, conditions: &'static [crate::effects::Condition]) -> EffectRule {
    defense(id, All(conditions), Modifier::HALF)
}

/// Damage-level item effects.
pub static DAMAGE_EFFECTS: &[EffectRule] = &[
    // =========================================================================
    // Power items
    // =========================================================================
    offense("choiceband", Category(Physical), Modifier::ONE_POINT_FIVE),
    offense("choicespecs", Category(Special), Modifier::ONE_POINT_FIVE),
    offense("lifeorb", Always, Modifier::ONE_POINT_THREE),
    offense("expertbelt", SuperEffective, Modifier::ONE_POINT_TWO),
    offense("muscleband", Category(Physical), Modifier::ONE_POINT_ONE),
    offense("wiseglasses", Category(Special), Modifier::ONE_POINT_ONE),
    offense("punchingglove", Flag(MoveFlags::PUNCH), Modifier::ONE_POINT_ONE),
    // =========================================================================
    // Type-boosting items (1.2x)
    // =========================================================================
    offense("silkscarf", MoveType(Type::Normal), TYPE_BOOST),
    offense("charcoal", MoveType(Type::Fire), TYPE_BOOST),
    offense("mysticwater", MoveType(Type::Water), TYPE_BOOST),
    offense("magnet", MoveType(Type::Electric), TYPE_BOOST),
    offense("miracleseed", MoveType(Type::Grass), TYPE_BOOST),
    offense("nevermeltice", MoveType(Type::Ice), TYPE_BOOST),
    offense("blackbelt", MoveType(Type::Fighting), TYPE_BOOST),
    offense("poisonbarb", MoveType(Type::Poison), TYPE_BOOST),
    offense("softsand", MoveType(Type::Ground), TYPE_BOOST),
    offense("sharpbeak", MoveType(Type::Flying), TYPE_BOOST),
    offense("twistedspoon", MoveType(Type::Psychic), TYPE_BOOST),
    offense("silverpowder", MoveType(Type::Bug), TYPE_BOOST),
    offense("hardstone", MoveType(Type::Rock), TYPE_BOOST),
    offense("spelltag", MoveType(Type::Ghost), TYPE_BOOST),
    offense("dragonfang", MoveType(Type::Dragon), TYPE_BOOST),
    offense("blackglasses", MoveType(Type::Dark), TYPE_BOOST),
    offense("metalcoat", MoveType(Type::Steel), TYPE_BOOST),
    offense("pixieplate", MoveType(Type::Fairy), TYPE_BOOST),
    offense("fairyfeather", MoveType(Type::Fairy), TYPE_BOOST),
    // =========================================================================
    // Defender items
    // =========================================================================
    negate("airballoon", All(&[MoveType(Type::Ground), Airborne])),
    resist_berry("occaberry", &[MoveType(Type::Fire), SuperEffective]),
    resist_berry("passhoberry", &[MoveType(Type::Water), SuperEffective]),
    resist_berry("wacanberry", &[MoveType(Type::Electric), SuperEffective]),
    resist_berry("rindoberry", &[MoveType(Type::Grass), SuperEffective]),
    resist_berry("yacheberry", &[MoveType(Type::Ice), SuperEffective]),
    resist_berry("chopleberry", &[MoveType(Type::Fighting), SuperEffective]),
    resist_berry("kebiaberry", &[MoveType(Type::Poison), SuperEffective]),
    resist_berry("shucaberry", &[MoveType(Type::Ground), SuperEffective]),
    resist_berry("cobaberry", &[MoveType(Type::Flying), SuperEffective]),
    resist_berry("payapaberry", &[MoveType(Type::Psychic), SuperEffective]),
    resist_berry("tangaberry", &[MoveType(Type::Bug), SuperEffective]),
    resist_berry("chartiberry", &[MoveType(Type::Rock), SuperEffective]),
    resist_berry("kasibberry", &[MoveType(Type::Ghost), SuperEffective]),
    resist_berry("habanberry", &[MoveType(Type::Dragon), SuperEffective]),
    resist_berry("colburberry", &[MoveType(Type::Dark), SuperEffective]),
    resist_berry("babiriberry", &[MoveType(Type::Steel), SuperEffective]),
    resist_berry("roseliberry", &[MoveType(Type::Fairy), SuperEffective]),
    // Chilan Berry works on any Normal hit
    defense("chilanberry", MoveType(Type::Normal), Modifier::HALF),
];

/// Attacker items that scale the attacking stat.
pub static OFFENSE_STAT_EFFECTS: &[EffectRule] = &[
    offense("lightball", All(&[SpeciesIn(&["pikachu"]), OffensiveStat(Attack)]), Modifier::DOUBLE),
    offense("lightball", All(&[SpeciesIn(&["pikachu"]), OffensiveStat(SpecialAttack)]), Modifier::DOUBLE),
    offense(
        "thickclub",
        All(&[SpeciesIn(&["cubone", "marowak", "marowakalola"]), OffensiveStat(Attack)]),
        Modifier::DOUBLE,
    ),
];

/// Defender items that scale the defending stat.
pub static DEFENSE_STAT_EFFECTS: &[EffectRule] = &[
    defense("assaultvest", DefensiveStat(SpecialDefense), Modifier::ONE_POINT_FIVE),
];

/// Items that affect grounding (handled by `Combatant::is_grounded`).
pub const GROUNDING_ITEMS: &[&str] = &["ironball", "airballoon"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Outcome;

    #[test]
    fn test_every_type_has_a_booster() {
        for ty in Type::ALL {
            assert!(
                DAMAGE_EFFECTS
                    .iter()
                    .any(|r| r.when == MoveType(ty) && r.outcome == Outcome::Multiply(TYPE_BOOST)),
                "{ty:?}"
            );
        }
    }

    #[test]
    fn test_ids_are_normalized() {
        for rule in DAMAGE_EFFECTS.iter().chain(OFFENSE_STAT_EFFECTS).chain(DEFENSE_STAT_EFFECTS) {
            assert_eq!(crate::catalog::to_id(rule.id), rule.id);
        }
    }
}
