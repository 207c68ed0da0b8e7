//! Stat tables, stat formulas and stat stages.

use serde::{Deserialize, Serialize};

use crate::damage::generations::GenerationProfile;
use crate::error::{ArgumentError, CalcError, ValueKind};
use crate::natures::NatureId;

/// One of the six permanent stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];
}

/// {HP, Atk, Def, SpA, SpD, Spe}. Used for base stats, IVs, EVs and
/// computed stats alike. Signed so that negative input can be rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatsTable {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
}

impl StatsTable {
    pub const fn new(
        hp: i32,
        attack: i32,
        defense: i32,
        special_attack: i32,
        special_defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Same value in every slot.
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    #[inline]
    pub const fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub const fn with(mut self, stat: Stat, value: i32) -> Self {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }
}

/// Default IVs (31 in all stats)
pub const PERFECT_IVS: StatsTable = StatsTable::splat(31);

/// Default EVs (0 in all stats)
pub const ZERO_EVS: StatsTable = StatsTable::splat(0);

/// In-battle stat stages. HP has no stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
}

impl StatStages {
    #[inline]
    pub const fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Hp => 0,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Setting the HP stage is a no-op.
    pub const fn with(mut self, stat: Stat, stage: i8) -> Self {
        match stat {
            Stat::Hp => {}
            Stat::Attack => self.attack = stage,
            Stat::Defense => self.defense = stage,
            Stat::SpecialAttack => self.special_attack = stage,
            Stat::SpecialDefense => self.special_defense = stage,
            Stat::Speed => self.speed = stage,
        }
        self
    }
}

/// Which stat formula a generation uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatFormula {
    /// Gens 1-2: square-rooted stat experience, no natures.
    Legacy,
    /// Gens 3+: EV/4, natures.
    Modern,
}

impl StatFormula {
    /// Compute one stat. Inputs must already be validated.
    ///
    /// The arithmetic runs in `i64` and saturates at `i32::MAX`, so
    /// oversized EVs, IVs or base stats cannot overflow.
    pub fn compute(self, stat: Stat, base: i32, iv: i32, ev: i32, level: i32, nature: NatureId) -> i32 {
        let (base, iv, ev, level) = (base as i64, iv as i64, ev as i64, level as i64);
        match (self, stat) {
            // Shedinja
            (StatFormula::Modern, Stat::Hp) if base == 1 => 1,
            (StatFormula::Modern, Stat::Hp) => saturate((2 * base + iv + ev / 4) * level / 100 + level + 10),
            (StatFormula::Modern, _) => {
                let raw = saturate((2 * base + iv + ev / 4) * level / 100 + 5);
                nature.apply(stat, raw)
            }
            (StatFormula::Legacy, Stat::Hp) => saturate(legacy_core(base, iv, ev, level) + level + 10),
            (StatFormula::Legacy, _) => saturate(legacy_core(base, iv, ev, level) + 5),
        }
    }
}

/// Clamp a widened intermediate back into `i32`.
#[inline]
pub(crate) const fn saturate(value: i64) -> i32 {
    if value > i32::MAX as i64 {
        i32::MAX
    } else if value < i32::MIN as i64 {
        i32::MIN
    } else {
        value as i32
    }
}

/// `((base + iv) * 2 + floor(sqrt(ev)) / 4) * level / 100`
fn legacy_core(base: i64, iv: i64, ev: i64, level: i64) -> i64 {
    ((base + iv) * 2 + isqrt(ev) / 4) * level / 100
}

fn isqrt(value: i64) -> i64 {
    let mut root = (value as f64).sqrt() as i64;
    // Guard against float error around perfect squares.
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}

/// Compute all six battle stats for a generation.
pub fn compute_stats(
    base: &StatsTable,
    ivs: &StatsTable,
    evs: &StatsTable,
    level: u8,
    nature: NatureId,
    generation: u8,
) -> Result<StatsTable, CalcError> {
    let profile = GenerationProfile::get(generation)?;
    compute_stats_with(profile.stat_formula, base, ivs, evs, level, nature)
}

/// Compute all six battle stats with an explicit formula.
pub fn compute_stats_with(
    formula: StatFormula,
    base: &StatsTable,
    ivs: &StatsTable,
    evs: &StatsTable,
    level: u8,
    nature: NatureId,
) -> Result<StatsTable, CalcError> {
    if !(1..=100).contains(&level) {
        return Err(ArgumentError::Level(level).into());
    }
    for (table, kind) in [
        (base, ValueKind::BaseStat),
        (ivs, ValueKind::IndividualValue),
        (evs, ValueKind::EffortValue),
    ] {
        if let Some((stat, value)) = table.iter().find(|&(_, value)| value < 0) {
            return Err(ArgumentError::Negative { kind, stat, value }.into());
        }
    }

    let level = level as i32;
    let mut out = StatsTable::default();
    for stat in Stat::ALL {
        let value = formula.compute(stat, base.get(stat), ivs.get(stat), evs.get(stat), level, nature);
        out = out.with(stat, value);
    }
    Ok(out)
}

/// Stat boost multipliers: index = stage + 6.
/// Index 0 = -6, Index 6 = 0, Index 12 = +6
const BOOST_TABLE: [(i32, i32); 13] = [
    (2, 8), // -6: 0.25x
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4), // -2: 0.5x
    (2, 3),
    (2, 2), //  0: 1.0x
    (3, 2),
    (4, 2), // +2: 2.0x
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2), // +6: 4.0x
];

/// Apply a stat stage (clamped to -6..=6), flooring.
pub fn apply_stage(stat: i32, stage: i8) -> i32 {
    let stage = stage.clamp(-6, 6);
    let (num, den) = BOOST_TABLE[(stage + 6) as usize];
    saturate(stat as i64 * num as i64 / den as i64)
}

/// Stage used for the attacking stat on a critical hit: drops are ignored.
#[inline]
pub fn critical_offense_stage(stage: i8) -> i8 {
    stage.max(0)
}

/// Stage used for the defending stat on a critical hit: raises are ignored.
#[inline]
pub fn critical_defense_stage(stage: i8) -> i8 {
    stage.min(0)
}
