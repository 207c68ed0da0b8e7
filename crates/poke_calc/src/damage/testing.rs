//! Shared fixtures for unit tests.

use crate::moves::{Move, MoveCategory, MoveFlags};
use crate::species::Species;
use crate::stats::StatsTable;
use crate::types::Type;

pub fn pikachu() -> Species {
    Species::new("Pikachu", Type::Electric, None, StatsTable::new(35, 55, 40, 50, 50, 90))
}

pub fn gyarados() -> Species {
    Species::new("Gyarados", Type::Water, Some(Type::Flying), StatsTable::new(95, 125, 79, 60, 100, 81))
}

pub fn charizard() -> Species {
    Species::new("Charizard", Type::Fire, Some(Type::Flying), StatsTable::new(78, 84, 78, 109, 85, 100))
}

pub fn garchomp() -> Species {
    Species::new("Garchomp", Type::Dragon, Some(Type::Ground), StatsTable::new(108, 130, 95, 80, 85, 102))
}

pub fn snorlax() -> Species {
    Species::new("Snorlax", Type::Normal, None, StatsTable::new(160, 110, 65, 65, 110, 30))
}

pub fn venusaur() -> Species {
    Species::new("Venusaur", Type::Grass, Some(Type::Poison), StatsTable::new(80, 82, 83, 100, 100, 80))
}

pub fn thunderbolt() -> Move {
    Move::new("Thunderbolt", Type::Electric, MoveCategory::Special, 90)
}

pub fn flamethrower() -> Move {
    Move::new("Flamethrower", Type::Fire, MoveCategory::Special, 90)
}

pub fn surf() -> Move {
    Move::new("Surf", Type::Water, MoveCategory::Special, 90)
}

pub fn earthquake() -> Move {
    Move::new("Earthquake", Type::Ground, MoveCategory::Physical, 100)
}

pub fn body_slam() -> Move {
    Move::new("Body Slam", Type::Normal, MoveCategory::Physical, 85).with_flags(MoveFlags::CONTACT)
}

pub fn thunder_punch() -> Move {
    Move::new("Thunder Punch", Type::Electric, MoveCategory::Physical, 75)
        .with_flags(MoveFlags::CONTACT | MoveFlags::PUNCH)
}
