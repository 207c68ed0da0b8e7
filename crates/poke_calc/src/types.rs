//! Pokemon types and the type effectiveness chart.
//!
//! The chart is a dense `[defender][attacker]` matrix of
//! [`TypeEffectiveness`] cells. [`TypeChart::standard`] builds the modern
//! (Gen 6+) chart at compile time; callers may inject any other chart into a
//! [`Calculator`](crate::damage::Calculator). Generation-specific deltas
//! live in [`ChartRevision`](crate::damage::generations::ChartRevision).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::to_id;
use crate::error::CatalogError;

/// Pokemon type (18 types).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// Total number of types
    pub const COUNT: usize = 18;

    /// Every type, in discriminant order.
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let id = to_id(s);
        Self::ALL.into_iter().find(|t| to_id(t.name()) == id)
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type effectiveness multiplier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum TypeEffectiveness {
    /// 1.0x damage
    #[default]
    Normal = 0,
    /// 2.0x damage
    SuperEffective = 1,
    /// 0.5x damage
    Resistant = 2,
    /// 0.0x damage (immune)
    Immune = 3,
}

impl TypeEffectiveness {
    #[inline]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::SuperEffective => 2.0,
            Self::Resistant => 0.5,
            Self::Immune => 0.0,
        }
    }

    /// Snap an arbitrary multiplier onto the nearest chart cell.
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier <= 0.0 {
            Self::Immune
        } else if multiplier < 1.0 {
            Self::Resistant
        } else if multiplier > 1.0 {
            Self::SuperEffective
        } else {
            Self::Normal
        }
    }
}

/// Display classification of a combined effectiveness multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EffectivenessClass {
    Immune,
    Resisted,
    Neutral,
    SuperEffective,
}

impl EffectivenessClass {
    pub fn of(multiplier: f64) -> Self {
        if multiplier == 0.0 {
            Self::Immune
        } else if multiplier < 1.0 {
            Self::Resisted
        } else if multiplier > 1.0 {
            Self::SuperEffective
        } else {
            Self::Neutral
        }
    }

    /// Label used in result descriptions; `None` for neutral hits.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Immune => Some("No Effect"),
            Self::Resisted => Some("Not Very Effective"),
            Self::Neutral => None,
            Self::SuperEffective => Some("Super Effective"),
        }
    }
}

use Type::*;
use TypeEffectiveness::{Immune as X, Resistant as H, SuperEffective as S};

/// Non-neutral matchups of the modern chart: (attacking, defending, effect).
const STANDARD_ENTRIES: &[(Type, Type, TypeEffectiveness)] = &[
    (Normal, Rock, H), (Normal, Ghost, X), (Normal, Steel, H),
    (Fire, Fire, H), (Fire, Water, H), (Fire, Grass, S), (Fire, Ice, S),
    (Fire, Bug, S), (Fire, Rock, H), (Fire, Dragon, H), (Fire, Steel, S),
    (Water, Fire, S), (Water, Water, H), (Water, Grass, H), (Water, Ground, S),
    (Water, Rock, S), (Water, Dragon, H),
    (Electric, Water, S), (Electric, Electric, H), (Electric, Grass, H),
    (Electric, Ground, X), (Electric, Flying, S), (Electric, Dragon, H),
    (Grass, Fire, H), (Grass, Water, S), (Grass, Grass, H), (Grass, Poison, H),
    (Grass, Ground, S), (Grass, Flying, H), (Grass, Bug, H), (Grass, Rock, S),
    (Grass, Dragon, H), (Grass, Steel, H),
    (Ice, Fire, H), (Ice, Water, H), (Ice, Grass, S), (Ice, Ice, H),
    (Ice, Ground, S), (Ice, Flying, S), (Ice, Dragon, S), (Ice, Steel, H),
    (Fighting, Normal, S), (Fighting, Ice, S), (Fighting, Poison, H),
    (Fighting, Flying, H), (Fighting, Psychic, H), (Fighting, Bug, H),
    (Fighting, Rock, S), (Fighting, Ghost, X), (Fighting, Dark, S),
    (Fighting, Steel, S), (Fighting, Fairy, H),
    (Poison, Grass, S), (Poison, Poison, H), (Poison, Ground, H),
    (Poison, Rock, H), (Poison, Ghost, H), (Poison, Steel, X), (Poison, Fairy, S),
    (Ground, Fire, S), (Ground, Electric, S), (Ground, Grass, H),
    (Ground, Poison, S), (Ground, Flying, X), (Ground, Bug, H),
    (Ground, Rock, S), (Ground, Steel, S),
    (Flying, Electric, H), (Flying, Grass, S), (Flying, Fighting, S),
    (Flying, Bug, S), (Flying, Rock, H), (Flying, Steel, H),
    (Psychic, Fighting, S), (Psychic, Poison, S), (Psychic, Psychic, H),
    (Psychic, Dark, X), (Psychic, Steel, H),
    (Bug, Fire, H), (Bug, Grass, S), (Bug, Fighting, H), (Bug, Poison, H),
    (Bug, Flying, H), (Bug, Psychic, S), (Bug, Ghost, H), (Bug, Dark, S),
    (Bug, Steel, H), (Bug, Fairy, H),
    (Rock, Fire, S), (Rock, Ice, S), (Rock, Fighting, H), (Rock, Ground, H),
    (Rock, Flying, S), (Rock, Bug, S), (Rock, Steel, H),
    (Ghost, Normal, X), (Ghost, Psychic, S), (Ghost, Ghost, S), (Ghost, Dark, H),
    (Dragon, Dragon, S), (Dragon, Steel, H), (Dragon, Fairy, X),
    (Dark, Fighting, H), (Dark, Psychic, S), (Dark, Ghost, S), (Dark, Dark, H),
    (Dark, Fairy, H),
    (Steel, Fire, H), (Steel, Water, H), (Steel, Electric, H), (Steel, Ice, S),
    (Steel, Rock, S), (Steel, Steel, H), (Steel, Fairy, S),
    (Fairy, Fire, H), (Fairy, Fighting, S), (Fairy, Poison, H), (Fairy, Dragon, S),
    (Fairy, Dark, S), (Fairy, Steel, H),
];

/// The modern chart, built at compile time.
pub static STANDARD_CHART: TypeChart = TypeChart::standard();

/// One serialized chart cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub attack: Type,
    pub defend: Type,
    pub multiplier: f64,
}

/// Type chart: `cells[defender][attacker]` = effectiveness.
///
/// Absent (never written) cells are neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeChart {
    cells: [[TypeEffectiveness; Type::COUNT]; Type::COUNT],
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

impl TypeChart {
    /// A chart where every matchup is neutral.
    pub const fn neutral() -> Self {
        Self {
            cells: [[TypeEffectiveness::Normal; Type::COUNT]; Type::COUNT],
        }
    }

    /// The modern (Gen 6+) chart.
    pub const fn standard() -> Self {
        let mut chart = Self::neutral();
        let mut i = 0;
        while i < STANDARD_ENTRIES.len() {
            let (attack, defend, effect) = STANDARD_ENTRIES[i];
            chart.cells[defend as usize][attack as usize] = effect;
            i += 1;
        }
        chart
    }

    /// Build a chart from explicit entries on top of a neutral chart.
    pub fn from_entries(entries: impl IntoIterator<Item = ChartEntry>) -> Self {
        entries.into_iter().fold(Self::neutral(), |chart, entry| {
            chart.with_entry(
                entry.attack,
                entry.defend,
                TypeEffectiveness::from_multiplier(entry.multiplier),
            )
        })
    }

    /// Load a chart from a JSON array of `{attack, defend, multiplier}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ChartEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Copy of this chart with one cell replaced.
    pub const fn with_entry(mut self, attack: Type, defend: Type, effect: TypeEffectiveness) -> Self {
        self.cells[defend as usize][attack as usize] = effect;
        self
    }

    #[inline]
    pub const fn effectiveness(&self, attack: Type, defend: Type) -> TypeEffectiveness {
        self.cells[defend as usize][attack as usize]
    }

    /// Multiplier for one attacking type against one defending type.
    #[inline]
    pub const fn get(&self, attack: Type, defend: Type) -> f64 {
        self.effectiveness(attack, defend).multiplier()
    }

    /// Product over every defending type. Any immunity yields exactly 0.
    pub fn total(&self, attack: Type, defend: &[Type]) -> f64 {
        let mut product = 1.0;
        for &defender in defend {
            let factor = self.get(attack, defender);
            if factor == 0.0 {
                return 0.0;
            }
            product *= factor;
        }
        product
    }

    /// Classification of a multiplier for display.
    pub fn describe(multiplier: f64) -> EffectivenessClass {
        EffectivenessClass::of(multiplier)
    }

    /// All non-neutral cells.
    pub fn entries(&self) -> Vec<ChartEntry> {
        let mut out = Vec::new();
        for attack in Type::ALL {
            for defend in Type::ALL {
                let effect = self.effectiveness(attack, defend);
                if effect != TypeEffectiveness::Normal {
                    out.push(ChartEntry {
                        attack,
                        defend,
                        multiplier: effect.multiplier(),
                    });
                }
            }
        }
        out
    }
}
