//! Combatant configuration.
//!
//! The `Combatant` struct serves as a builder pattern for describing one
//! side of an attack. It is an immutable value as far as the calculator is
//! concerned: stats are derived from it per calculation, never stored back.

use serde::{Deserialize, Serialize};

use crate::catalog::to_id;
use crate::damage::generations::GenerationProfile;
use crate::error::CalcError;
use crate::natures::NatureId;
use crate::species::Species;
use crate::state::{Field, Status};
use crate::stats::{compute_stats_with, Stat, StatStages, StatsTable, PERFECT_IVS, ZERO_EVS};
use crate::types::Type;

/// Default level
pub const DEFAULT_LEVEL: u8 = 50;

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

fn default_ivs() -> StatsTable {
    PERFECT_IVS
}

/// One battler, as far as damage is concerned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Species (determines base stats and types)
    pub species: Species,

    /// Level (1-100, validated at calculation time)
    #[serde(default = "default_level")]
    pub level: u8,

    #[serde(default)]
    pub nature: NatureId,

    /// Individual Values
    #[serde(default = "default_ivs")]
    pub ivs: StatsTable,

    /// Effort Values
    #[serde(default)]
    pub evs: StatsTable,

    /// Stat stages, each clamped to -6..=6 on use
    #[serde(default)]
    pub stages: StatStages,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub ability: Option<String>,

    #[serde(default)]
    pub item: Option<String>,

    /// Terastallized type (Gen 9 only)
    #[serde(default)]
    pub tera_type: Option<Type>,

    /// Current HP; `None` means full
    #[serde(default)]
    pub current_hp: Option<i32>,
}

impl Combatant {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            level: DEFAULT_LEVEL,
            nature: NatureId::default(),
            ivs: PERFECT_IVS,
            evs: ZERO_EVS,
            stages: StatStages::default(),
            status: Status::None,
            ability: None,
            item: None,
            tera_type: None,
            current_hp: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn nature(mut self, nature: NatureId) -> Self {
        self.nature = nature;
        self
    }

    pub fn ivs(mut self, ivs: StatsTable) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn evs(mut self, evs: StatsTable) -> Self {
        self.evs = evs;
        self
    }

    /// Set a single stat stage
    pub fn stage(mut self, stat: Stat, stage: i8) -> Self {
        self.stages = self.stages.with(stat, stage);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn tera_type(mut self, tera_type: Type) -> Self {
        self.tera_type = Some(tera_type);
        self
    }

    /// Set current HP (for partially damaged combatants)
    pub fn current_hp(mut self, hp: i32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    // ========================================================================
    // Derived data
    // ========================================================================

    /// Battle stats under a generation's stat formula.
    pub fn stats(&self, profile: &GenerationProfile) -> Result<StatsTable, CalcError> {
        compute_stats_with(
            profile.stat_formula,
            &self.species.base_stats,
            &self.ivs,
            &self.evs,
            self.level,
            self.nature,
        )
    }

    /// Current HP clamped into `0..=max_hp`.
    pub fn hp_given_max(&self, max_hp: i32) -> i32 {
        self.current_hp.map_or(max_hp, |hp| hp.clamp(0, max_hp))
    }

    /// Normalized ability id, if any.
    pub fn ability_id(&self) -> Option<String> {
        self.ability.as_deref().map(to_id).filter(|id| !id.is_empty())
    }

    /// Normalized item id, if any.
    pub fn item_id(&self) -> Option<String> {
        self.item.as_deref().map(to_id).filter(|id| !id.is_empty())
    }

    /// Types used when this combatant is hit: `[tera]` when Terastallized
    /// under rules that allow it, else the species types.
    pub fn effective_types(&self, terastallization: bool) -> Vec<Type> {
        match self.tera_type {
            Some(tera) if terastallization => vec![tera],
            _ => self.species.types().collect(),
        }
    }

    /// Whether the combatant touches the ground.
    ///
    /// Gravity and Iron Ball ground everyone; otherwise Flying types,
    /// Levitate and Air Balloon keep it airborne.
    pub fn is_grounded(&self, field: &Field, profile: &GenerationProfile) -> bool {
        if field.gravity {
            return true;
        }
        let item = if profile.modern_mechanics { self.item_id() } else { None };
        if item.as_deref() == Some("ironball") {
            return true;
        }
        if self.effective_types(profile.terastallization).contains(&Type::Flying) {
            return false;
        }
        let ability = if profile.modern_mechanics { self.ability_id() } else { None };
        ability.as_deref() != Some("levitate") && item.as_deref() != Some("airballoon")
    }
}
