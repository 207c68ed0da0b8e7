//! Damage calculation results.

use std::fmt;

use serde::Serialize;

use crate::damage::formula::ROLL_COUNT;
use crate::damage::pipeline::AppliedModifiers;
use crate::moves::MultiHit;
use crate::state::{Terrain, Weather};
use crate::types::EffectivenessClass;

/// Why a calculation produced no damage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NoDamageReason {
    StatusMove,
    ZeroPower,
    TypeImmunity,
    /// Defender's ability absorbed or blocked the move (ability name)
    AbilityNegated(String),
    /// Defender's item blocked the move (item name)
    ItemNegated(String),
    /// Harsh sunshine / heavy rain wiped out the move
    WeatherSuppressed(Weather),
}

impl fmt::Display for NoDamageReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusMove => f.write_str("status move"),
            Self::ZeroPower => f.write_str("move has no base power"),
            Self::TypeImmunity => f.write_str("defender is immune to the move's type"),
            Self::AbilityNegated(ability) => write!(f, "negated by {ability}"),
            Self::ItemNegated(item) => write!(f, "negated by {item}"),
            Self::WeatherSuppressed(weather) => write!(f, "suppressed by {}", weather.name()),
        }
    }
}

/// Damage as a percentage of some HP value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct DamagePercentages {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Outcome of one damage calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DamageResult {
    /// The 16 rolls, lowest (85%) first
    pub damage_values: [u32; ROLL_COUNT],
    /// Combined type effectiveness multiplier
    pub type_effectiveness: f64,
    pub is_critical_hit: bool,
    pub has_stab: bool,
    pub description: String,
    /// Pipeline stages that changed the damage
    pub applied: AppliedModifiers,
    /// Set when every roll is zero
    pub no_damage: Option<NoDamageReason>,
    /// Untruncated pipeline output (0.0 on no-damage outcomes)
    pub final_damage: f64,
    pub defender_max_hp: i32,
    /// Defender's current HP when the move was used
    pub defender_hp: i32,
    pub multi_hit: Option<MultiHit>,
}

impl DamageResult {
    #[inline]
    pub fn min_damage(&self) -> u32 {
        self.damage_values.iter().copied().min().unwrap_or(0)
    }

    #[inline]
    pub fn max_damage(&self) -> u32 {
        self.damage_values.iter().copied().max().unwrap_or(0)
    }

    pub fn average_damage(&self) -> f64 {
        let total: u64 = self.damage_values.iter().map(|&d| d as u64).sum();
        total as f64 / ROLL_COUNT as f64
    }

    #[inline]
    pub fn effectiveness_class(&self) -> EffectivenessClass {
        EffectivenessClass::of(self.type_effectiveness)
    }

    /// Min/max/average damage as a percentage of `max_hp`.
    ///
    /// A non-positive `max_hp` gives all zeros.
    pub fn percentage_of(&self, max_hp: i32) -> DamagePercentages {
        if max_hp <= 0 {
            return DamagePercentages::default();
        }
        let hp = max_hp as f64;
        DamagePercentages {
            min: self.min_damage() as f64 * 100.0 / hp,
            max: self.max_damage() as f64 * 100.0 / hp,
            avg: self.average_damage() * 100.0 / hp,
        }
    }

    /// Fraction of rolls that deal at least `hp` damage.
    ///
    /// A target already at 0 HP (or below) is a certain KO.
    pub fn ko_chance(&self, hp: i32) -> f64 {
        if hp <= 0 {
            return 1.0;
        }
        let kos = self.damage_values.iter().filter(|&&d| d as i64 >= hp as i64).count();
        kos as f64 / ROLL_COUNT as f64
    }

    /// The minimum roll is at least 100% of the defender's max HP.
    ///
    /// For a defender that is already damaged use
    /// `ko_chance(result.defender_hp)`.
    #[inline]
    pub fn is_guaranteed_ko(&self) -> bool {
        self.percentage_of(self.defender_max_hp).min >= 100.0
    }

    /// The maximum roll is at least 100% of the defender's max HP.
    #[inline]
    pub fn has_ko_potential(&self) -> bool {
        self.percentage_of(self.defender_max_hp).max >= 100.0
    }

    /// Total (min, max) over the move's hit count; single-hit moves return
    /// the plain damage range.
    pub fn multi_hit_range(&self) -> (u32, u32) {
        let (min_hits, max_hits) = match self.multi_hit {
            Some(hits) => (hits.min as u32, hits.max as u32),
            None => (1, 1),
        };
        (
            self.min_damage().saturating_mul(min_hits),
            self.max_damage().saturating_mul(max_hits),
        )
    }

    /// e.g. `"127-150"`
    pub fn damage_range_text(&self) -> String {
        format!("{}-{}", self.min_damage(), self.max_damage())
    }

    /// e.g. `"52.9%-62.5%"`, relative to the defender's max HP
    pub fn percentage_range_text(&self) -> String {
        let pct = self.percentage_of(self.defender_max_hp);
        format!("{:.1}%-{:.1}%", pct.min, pct.max)
    }
}

// ============================================================================
// Description
// ============================================================================

/// Everything the description mentions, taken from structured flags.
pub(crate) struct DescriptionParts<'a> {
    pub attacker: &'a str,
    pub move_name: &'a str,
    pub defender: &'a str,
    pub applied: AppliedModifiers,
    pub has_stab: bool,
    pub effectiveness: f64,
    pub is_critical_hit: bool,
    pub weather: Weather,
    pub terrain: Terrain,
}

/// `"Pikachu Thunderbolt vs Gyarados (STAB, Super Effective)"`
pub(crate) fn describe(parts: &DescriptionParts<'_>) -> String {
    let mut tags: Vec<String> = Vec::new();
    if parts.has_stab {
        tags.push("STAB".to_string());
    }
    if let Some(label) = EffectivenessClass::of(parts.effectiveness).label() {
        tags.push(label.to_string());
    }
    if parts.is_critical_hit {
        tags.push("Critical Hit".to_string());
    }
    if parts.applied.contains(AppliedModifiers::WEATHER) {
        tags.push(parts.weather.name().to_string());
    }
    if parts.applied.contains(AppliedModifiers::TERRAIN) {
        tags.push(format!("{:?} Terrain", parts.terrain));
    }
    if parts.applied.contains(AppliedModifiers::BURN) {
        tags.push("Burned".to_string());
    }
    if parts.applied.contains(AppliedModifiers::SCREEN) {
        tags.push("Screen".to_string());
    }

    let mut description = format!("{} {} vs {}", parts.attacker, parts.move_name, parts.defender);
    if !tags.is_empty() {
        description.push_str(" (");
        description.push_str(&tags.join(", "));
        description.push(')');
    }
    description
}
