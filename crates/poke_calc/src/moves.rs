//! Move records.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::catalog::Keyed;
use crate::stats::Stat;
use crate::types::Type;

/// Move category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

bitflags! {
    /// Move flags consulted by ability and item effects
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MoveFlags: u8 {
        const CONTACT = 1 << 0;
        const SOUND = 1 << 1;
        const PUNCH = 1 << 2;
        const BITE = 1 << 3;
        const BULLET = 1 << 4;
        const SLICING = 1 << 5;
    }
}

/// Inclusive hit-count range of a multi-hit move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiHit {
    pub min: u8,
    pub max: u8,
}

/// Static move data consumed by the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    pub base_power: u16,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub flags: MoveFlags,
    /// Always lands a critical hit (Frost Breath, Wicked Blow...)
    #[serde(default)]
    pub will_crit: bool,
    /// Attack with a stat other than the category default (Body Press)
    #[serde(default)]
    pub offensive_stat: Option<Stat>,
    /// Hit a stat other than the category default (Psyshock)
    #[serde(default)]
    pub defensive_stat: Option<Stat>,
    #[serde(default)]
    pub multi_hit: Option<MultiHit>,
}

impl Move {
    pub fn new(name: impl Into<String>, move_type: Type, category: MoveCategory, base_power: u16) -> Self {
        Self {
            name: name.into(),
            move_type,
            category,
            base_power,
            priority: 0,
            flags: MoveFlags::empty(),
            will_crit: false,
            offensive_stat: None,
            defensive_stat: None,
            multi_hit: None,
        }
    }

    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_will_crit(mut self, will_crit: bool) -> Self {
        self.will_crit = will_crit;
        self
    }

    pub fn with_offensive_stat(mut self, stat: Stat) -> Self {
        self.offensive_stat = Some(stat);
        self
    }

    pub fn with_defensive_stat(mut self, stat: Stat) -> Self {
        self.defensive_stat = Some(stat);
        self
    }

    pub fn with_multi_hit(mut self, min: u8, max: u8) -> Self {
        self.multi_hit = Some(MultiHit { min, max });
        self
    }

    #[inline]
    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        self.category == MoveCategory::Special
    }

    #[inline]
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    #[inline]
    pub fn has_flag(&self, flag: MoveFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Attacking stat: override, else Attack for physical and Sp. Atk otherwise.
    pub fn offensive_stat(&self) -> Stat {
        self.offensive_stat.unwrap_or(match self.category {
            MoveCategory::Physical => Stat::Attack,
            _ => Stat::SpecialAttack,
        })
    }

    /// Defending stat: override, else Defense for physical and Sp. Def otherwise.
    pub fn defensive_stat(&self) -> Stat {
        self.defensive_stat.unwrap_or(match self.category {
            MoveCategory::Physical => Stat::Defense,
            _ => Stat::SpecialDefense,
        })
    }
}

impl Keyed for Move {
    const KIND: &'static str = "move";

    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_follow_category() {
        let earthquake = Move::new("Earthquake", Type::Ground, MoveCategory::Physical, 100);
        assert_eq!(earthquake.offensive_stat(), Stat::Attack);
        assert_eq!(earthquake.defensive_stat(), Stat::Defense);

        let surf = Move::new("Surf", Type::Water, MoveCategory::Special, 90);
        assert_eq!(surf.offensive_stat(), Stat::SpecialAttack);
        assert_eq!(surf.defensive_stat(), Stat::SpecialDefense);
    }

    #[test]
    fn test_stat_overrides() {
        let psyshock = Move::new("Psyshock", Type::Psychic, MoveCategory::Special, 80)
            .with_defensive_stat(Stat::Defense);
        assert_eq!(psyshock.offensive_stat(), Stat::SpecialAttack);
        assert_eq!(psyshock.defensive_stat(), Stat::Defense);

        let body_press = Move::new("Body Press", Type::Fighting, MoveCategory::Physical, 80)
            .with_offensive_stat(Stat::Defense);
        assert_eq!(body_press.offensive_stat(), Stat::Defense);
    }

    #[test]
    fn test_deserialize_move_record() {
        let json = r#"{
            "name": "Drain Punch",
            "type": "Fighting",
            "category": "Physical",
            "base_power": 75,
            "flags": "CONTACT | PUNCH"
        }"#;
        let mv: Move = serde_json::from_str(json).unwrap();
        assert_eq!(mv.move_type, Type::Fighting);
        assert!(mv.has_flag(MoveFlags::PUNCH));
        assert!(mv.has_flag(MoveFlags::CONTACT));
        assert!(!mv.has_flag(MoveFlags::SOUND));
        assert_eq!(mv.priority, 0);
        assert!(mv.multi_hit.is_none());
    }
}
