//! Generation-specific rule configuration.
//!
//! Each generation is one frozen [`GenerationProfile`] row in a static
//! table. Nothing about a calculation's ruleset is decided anywhere else:
//! the pipeline, the stat model and the type chart all read the profile.
//!
//! | Gen | Stat formula | Crit | Crit before effectiveness | Abilities/items | Chart |
//! |-----|--------------|------|---------------------------|-----------------|-------|
//! | 1   | Legacy       | 2.0  | yes                       | no              | Gen 1 |
//! | 2   | Legacy       | 2.0  | yes                       | no              | Gen 2-5 |
//! | 3-5 | Modern       | 2.0  | yes                       | yes             | Gen 2-5 |
//! | 6-9 | Modern       | 1.5  | no                        | yes             | current |

use serde::Serialize;

use crate::damage::modifier::Modifier;
use crate::error::ArgumentError;
use crate::stats::StatFormula;
use crate::types::{Type, TypeEffectiveness};

/// Type chart deltas relative to the modern chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ChartRevision {
    /// Ghost does not affect Psychic, Poison and Bug are mutually super
    /// effective, Ice is neutral on Fire.
    Gen1,
    /// Steel still resists Ghost and Dark.
    Gen2To5,
    /// Chart used as given.
    Current,
}

impl ChartRevision {
    /// Override for one (attacking, defending) pair, if this revision has one.
    pub const fn adjust(self, attack: Type, defend: Type) -> Option<TypeEffectiveness> {
        match self {
            ChartRevision::Gen1 => match (attack, defend) {
                (Type::Ghost, Type::Psychic) => Some(TypeEffectiveness::Immune),
                (Type::Poison, Type::Bug) | (Type::Bug, Type::Poison) => {
                    Some(TypeEffectiveness::SuperEffective)
                }
                (Type::Ice, Type::Fire) => Some(TypeEffectiveness::Normal),
                _ => None,
            },
            ChartRevision::Gen2To5 => match (attack, defend) {
                (Type::Ghost, Type::Steel) | (Type::Dark, Type::Steel) => {
                    Some(TypeEffectiveness::Resistant)
                }
                _ => None,
            },
            ChartRevision::Current => None,
        }
    }
}

/// Frozen rule configuration for one generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GenerationProfile {
    pub generation: u8,
    pub stat_formula: StatFormula,
    pub critical_multiplier: Modifier,
    /// Crit applies before type effectiveness (Gen 1-5) instead of after.
    pub critical_before_effectiveness: bool,
    /// Abilities, held items and terrain exist (Gen 3+).
    pub modern_mechanics: bool,
    pub chart_revision: ChartRevision,
    pub terastallization: bool,
}

const fn profile(
    generation: u8,
    stat_formula: StatFormula,
    critical_multiplier: Modifier,
    critical_before_effectiveness: bool,
    modern_mechanics: bool,
    chart_revision: ChartRevision,
) -> GenerationProfile {
    GenerationProfile {
        generation,
        stat_formula,
        critical_multiplier,
        critical_before_effectiveness,
        modern_mechanics,
        chart_revision,
        terastallization: generation == 9,
    }
}

use ChartRevision::*;
use StatFormula::{Legacy, Modern};

static PROFILES: [GenerationProfile; 9] = [
    profile(1, Legacy, Modifier::DOUBLE, true, false, Gen1),
    profile(2, Legacy, Modifier::DOUBLE, true, false, Gen2To5),
    profile(3, Modern, Modifier::DOUBLE, true, true, Gen2To5),
    profile(4, Modern, Modifier::DOUBLE, true, true, Gen2To5),
    profile(5, Modern, Modifier::DOUBLE, true, true, Gen2To5),
    profile(6, Modern, Modifier::ONE_POINT_FIVE, false, true, Current),
    profile(7, Modern, Modifier::ONE_POINT_FIVE, false, true, Current),
    profile(8, Modern, Modifier::ONE_POINT_FIVE, false, true, Current),
    profile(9, Modern, Modifier::ONE_POINT_FIVE, false, true, Current),
];

impl GenerationProfile {
    /// Profile for generation 1-9.
    pub fn get(generation: u8) -> Result<&'static GenerationProfile, ArgumentError> {
        match generation {
            1..=9 => Ok(&PROFILES[generation as usize - 1]),
            _ => Err(ArgumentError::Generation(generation)),
        }
    }

    /// Every profile, oldest first.
    pub fn all() -> &'static [GenerationProfile] {
        &PROFILES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table() {
        for generation in 1..=9u8 {
            let p = GenerationProfile::get(generation).unwrap();
            assert_eq!(p.generation, generation);
            assert_eq!(p.stat_formula == StatFormula::Legacy, generation <= 2);
            assert_eq!(p.modern_mechanics, generation >= 3);
            assert_eq!(p.critical_before_effectiveness, generation <= 5);
            let expected_crit = if generation <= 5 { 2.0 } else { 1.5 };
            assert_eq!(p.critical_multiplier.val(), expected_crit);
            assert_eq!(p.terastallization, generation == 9);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(GenerationProfile::get(0), Err(ArgumentError::Generation(0)));
        assert_eq!(GenerationProfile::get(10), Err(ArgumentError::Generation(10)));
        assert_eq!(GenerationProfile::all().len(), 9);
    }

    #[test]
    fn test_chart_revisions() {
        assert_eq!(
            ChartRevision::Gen1.adjust(Type::Ghost, Type::Psychic),
            Some(TypeEffectiveness::Immune)
        );
        assert_eq!(
            ChartRevision::Gen1.adjust(Type::Bug, Type::Poison),
            Some(TypeEffectiveness::SuperEffective)
        );
        assert_eq!(
            ChartRevision::Gen2To5.adjust(Type::Dark, Type::Steel),
            Some(TypeEffectiveness::Resistant)
        );
        assert_eq!(ChartRevision::Current.adjust(Type::Dark, Type::Steel), None);
        assert_eq!(ChartRevision::Gen1.adjust(Type::Fire, Type::Grass), None);
    }
}
