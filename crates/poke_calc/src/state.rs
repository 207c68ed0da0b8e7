//! Field state: weather, terrain, global flags and per-side conditions.
//!
//! Everything here is a plain value; the calculator never mutates it.

use serde::{Deserialize, Serialize};

/// Major status conditions (only one can be active at a time)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    None,
    Sleep,
    Poison,
    Burn,
    Freeze,
    Paralysis,
    BadlyPoisoned,
}

impl Status {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Status::None)
    }
}

/// Weather conditions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,        // Gen 9 replaced Hail with Snow
    HarshSun,    // Primal Groudon
    HeavyRain,   // Primal Kyogre
    StrongWinds, // Mega Rayquaza
}

impl Weather {
    #[inline]
    pub const fn is_sun(self) -> bool {
        matches!(self, Weather::Sun | Weather::HarshSun)
    }

    #[inline]
    pub const fn is_rain(self) -> bool {
        matches!(self, Weather::Rain | Weather::HeavyRain)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weather::None => "None",
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sand",
            Weather::Hail => "Hail",
            Weather::Snow => "Snow",
            Weather::HarshSun => "Harsh Sunshine",
            Weather::HeavyRain => "Heavy Rain",
            Weather::StrongWinds => "Strong Winds",
        }
    }
}

/// Terrain conditions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Psychic,
    Misty,
}

bitflags::bitflags! {
    /// Side conditions (team-wide effects like hazards and screens)
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SideConditions: u16 {
        // Entry hazards
        const STEALTH_ROCK  = 1 << 0;
        const SPIKES        = 1 << 1;
        const TOXIC_SPIKES  = 1 << 2;
        const STICKY_WEB    = 1 << 3;

        // Screens
        const REFLECT       = 1 << 4;
        const LIGHT_SCREEN  = 1 << 5;
        const AURORA_VEIL   = 1 << 6;

        // Other
        const TAILWIND      = 1 << 7;
        const SAFEGUARD     = 1 << 8;
        const MIST          = 1 << 9;
    }
}

/// Battlefield state as seen by one attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub weather: Weather,
    pub terrain: Terrain,
    pub trick_room: bool,
    pub gravity: bool,
    /// Request a critical hit for this calculation.
    pub critical_hit: bool,
    pub attacker_side: SideConditions,
    pub defender_side: SideConditions,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_trick_room(mut self, trick_room: bool) -> Self {
        self.trick_room = trick_room;
        self
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_critical_hit(mut self, critical_hit: bool) -> Self {
        self.critical_hit = critical_hit;
        self
    }

    pub fn with_attacker_side(mut self, conditions: SideConditions) -> Self {
        self.attacker_side = conditions;
        self
    }

    pub fn with_defender_side(mut self, conditions: SideConditions) -> Self {
        self.defender_side = conditions;
        self
    }
}
