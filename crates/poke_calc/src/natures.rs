//! Natures.

use serde::{Deserialize, Serialize};

use crate::catalog::to_id;
use crate::stats::{saturate, Stat};

/// Pokemon nature (affects stat growth)
/// Ordered in a 5x5 grid: nature_id = plus_stat * 5 + minus_stat
/// Diagonal entries (where plus == minus) are neutral natures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy,
    Lonely,
    Adamant,
    Naughty,
    Brave,
    Bold,
    Docile,
    Impish,
    Lax,
    Relaxed,
    Modest,
    Mild,
    Bashful,
    Rash,
    Quiet,
    Calm,
    Gentle,
    Careful,
    Quirky,
    Sassy,
    Timid,
    Hasty,
    Jolly,
    Naive,
    Serious,
}

impl NatureId {
    pub const ALL: [NatureId; 25] = [
        NatureId::Hardy,
        NatureId::Lonely,
        NatureId::Adamant,
        NatureId::Naughty,
        NatureId::Brave,
        NatureId::Bold,
        NatureId::Docile,
        NatureId::Impish,
        NatureId::Lax,
        NatureId::Relaxed,
        NatureId::Modest,
        NatureId::Mild,
        NatureId::Bashful,
        NatureId::Rash,
        NatureId::Quiet,
        NatureId::Calm,
        NatureId::Gentle,
        NatureId::Careful,
        NatureId::Quirky,
        NatureId::Sassy,
        NatureId::Timid,
        NatureId::Hasty,
        NatureId::Jolly,
        NatureId::Naive,
        NatureId::Serious,
    ];

    /// Parse nature from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let id = to_id(s);
        Self::ALL
            .into_iter()
            .find(|nature| to_id(&format!("{nature:?}")) == id)
    }

    /// Grid column/row of a nature-affected stat. HP has none.
    const fn grid_index(stat: Stat) -> Option<u8> {
        match stat {
            Stat::Hp => None,
            Stat::Attack => Some(0),
            Stat::Defense => Some(1),
            Stat::SpecialAttack => Some(2),
            Stat::SpecialDefense => Some(3),
            Stat::Speed => Some(4),
        }
    }

    /// Get stat modifier for a given stat
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%)
    /// Multiply by stat/10 to apply
    #[inline]
    pub const fn stat_modifier(self, stat: Stat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;
        let Some(stat_idx) = Self::grid_index(stat) else {
            return 10;
        };

        if plus == minus {
            10 // Neutral nature
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    /// Check if this is a neutral nature (no stat changes)
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }

    /// Apply this nature to an already computed stat, flooring and
    /// saturating at the `i32` bounds.
    #[inline]
    pub const fn apply(self, stat: Stat, value: i32) -> i32 {
        saturate(value as i64 * self.stat_modifier(stat) as i64 / 10)
    }
}
