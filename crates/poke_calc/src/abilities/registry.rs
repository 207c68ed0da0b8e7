//! Ability effect tables.
//!
//! Rows are grouped the way the pipeline consumes them: damage-level
//! effects (stage 6 of the modifier pipeline), and stat-level effects that
//! adjust the attacking or defending stat before the base damage formula.

use crate::damage::modifier::Modifier;
use crate::effects::Condition::*;
use crate::effects::{defense, negate, offense, EffectRule};
use crate::moves::MoveCategory::Special;
use crate::moves::MoveFlags;
use crate::state::Weather;
use crate::stats::Stat::{Attack, Defense};
use crate::types::Type;

const PINCH: Modifier = Modifier::ONE_POINT_FIVE;

/// Damage-level ability effects.
pub static DAMAGE_EFFECTS: &[EffectRule] = &[
    // =========================================================================
    // Pinch abilities (HP <= 1/3)
    // =========================================================================
    offense("blaze", All(&[MoveType(Type::Fire), Pinch]), PINCH),
    offense("overgrow", All(&[MoveType(Type::Grass), Pinch]), PINCH),
    offense("torrent", All(&[MoveType(Type::Water), Pinch]), PINCH),
    offense("swarm", All(&[MoveType(Type::Bug), Pinch]), PINCH),
    // =========================================================================
    // Weather-dependent
    // =========================================================================
    offense(
        "solarpower",
        All(&[Category(Special), WeatherIn(&[Weather::Sun, Weather::HarshSun])]),
        Modifier::ONE_POINT_FIVE,
    ),
    offense(
        "sandforce",
        All(&[MoveTypeIn(&[Type::Rock, Type::Ground, Type::Steel]), WeatherIn(&[Weather::Sand])]),
        Modifier::ONE_POINT_THREE,
    ),
    // =========================================================================
    // Move flags and power
    // =========================================================================
    offense("ironfist", Flag(MoveFlags::PUNCH), Modifier::ONE_POINT_TWO),
    offense("toughclaws", Flag(MoveFlags::CONTACT), Modifier::ONE_POINT_THREE),
    offense("strongjaw", Flag(MoveFlags::BITE), Modifier::ONE_POINT_FIVE),
    offense("sharpness", Flag(MoveFlags::SLICING), Modifier::ONE_POINT_FIVE),
    offense("punkrock", Flag(MoveFlags::SOUND), Modifier::ONE_POINT_THREE),
    offense("technician", PowerAtMost(60), Modifier::ONE_POINT_FIVE),
    // =========================================================================
    // Type boosters
    // =========================================================================
    offense("steelworker", MoveType(Type::Steel), Modifier::ONE_POINT_FIVE),
    offense("steelyspirit", MoveType(Type::Steel), Modifier::ONE_POINT_FIVE),
    offense("dragonsmaw", MoveType(Type::Dragon), Modifier::ONE_POINT_FIVE),
    offense("transistor", MoveType(Type::Electric), Modifier::ONE_POINT_THREE),
    offense("rockypayload", MoveType(Type::Rock), Modifier::ONE_POINT_FIVE),
    offense("waterbubble", MoveType(Type::Water), Modifier::DOUBLE),
    // =========================================================================
    // Effectiveness and crits
    // =========================================================================
    offense("tintedlens", NotVeryEffective, Modifier::DOUBLE),
    offense("neuroforce", SuperEffective, Modifier::ONE_POINT_TWO_FIVE),
    offense("sniper", CriticalHit, Modifier::ONE_POINT_FIVE),
    // =========================================================================
    // Defender immunities
    // =========================================================================
    negate("voltabsorb", MoveType(Type::Electric)),
    negate("lightningrod", MoveType(Type::Electric)),
    negate("motordrive", MoveType(Type::Electric)),
    negate("waterabsorb", MoveType(Type::Water)),
    negate("stormdrain", MoveType(Type::Water)),
    negate("dryskin", MoveType(Type::Water)),
    negate("flashfire", MoveType(Type::Fire)),
    negate("wellbakedbody", MoveType(Type::Fire)),
    negate("sapsipper", MoveType(Type::Grass)),
    negate("eartheater", MoveType(Type::Ground)),
    negate("levitate", All(&[MoveType(Type::Ground), Airborne])),
    negate("bulletproof", Flag(MoveFlags::BULLET)),
    negate("soundproof", Flag(MoveFlags::SOUND)),
    negate("wonderguard", NotSuperEffective),
    // =========================================================================
    // Defender reductions
    // =========================================================================
    defense("thickfat", MoveTypeIn(&[Type::Fire, Type::Ice]), Modifier::HALF),
    defense("heatproof", MoveType(Type::Fire), Modifier::HALF),
    defense("waterbubble", MoveType(Type::Fire), Modifier::HALF),
    defense("purifyingsalt", MoveType(Type::Ghost), Modifier::HALF),
    defense("dryskin", MoveType(Type::Fire), Modifier::ONE_POINT_TWO_FIVE),
    defense("fluffy", Flag(MoveFlags::CONTACT), Modifier::HALF),
    defense("fluffy", MoveType(Type::Fire), Modifier::DOUBLE),
    defense("punkrock", Flag(MoveFlags::SOUND), Modifier::HALF),
    defense("icescales", Category(Special), Modifier::HALF),
    defense("multiscale", FullHp, Modifier::HALF),
    defense("shadowshield", FullHp, Modifier::HALF),
    defense("filter", SuperEffective, Modifier::THREE_QUARTERS),
    defense("solidrock", SuperEffective, Modifier::THREE_QUARTERS),
    defense("prismarmor", SuperEffective, Modifier::THREE_QUARTERS),
];

/// Attacker abilities that scale the attacking stat.
pub static OFFENSE_STAT_EFFECTS: &[EffectRule] = &[
    offense("hugepower", OffensiveStat(Attack), Modifier::DOUBLE),
    offense("purepower", OffensiveStat(Attack), Modifier::DOUBLE),
    offense("hustle", OffensiveStat(Attack), Modifier::ONE_POINT_FIVE),
    offense("gorillatactics", OffensiveStat(Attack), Modifier::ONE_POINT_FIVE),
    offense("guts", All(&[Statused, OffensiveStat(Attack)]), Modifier::ONE_POINT_FIVE),
];

/// Defender abilities that scale the defending stat.
pub static DEFENSE_STAT_EFFECTS: &[EffectRule] = &[
    defense("marvelscale", All(&[Statused, DefensiveStat(Defense)]), Modifier::ONE_POINT_FIVE),
    defense("furcoat", DefensiveStat(Defense), Modifier::DOUBLE),
];

pub const CRIT_BLOCKERS: &[&str] = &["battlearmor", "shellarmor"];

pub const BURN_BYPASS: &[&str] = &["guts"];

pub const WEATHER_SUPPRESSORS: &[&str] = &["cloudnine", "airlock"];

pub const GHOST_IMMUNITY_BYPASS: &[&str] = &["scrappy", "mindseye"];

pub const SCREEN_BYPASS: &[&str] = &["infiltrator"];

/// Abilities handled outside the effect tables.
pub const FLAG_ABILITIES: &[&str] = &["adaptability"];
