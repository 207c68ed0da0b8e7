//! poke_calc - Generation-aware Pokemon battle damage calculator
//!
//! Given an attacking combatant, a defending combatant, a move, the field
//! and a ruleset generation (1-9), computes the 16 possible damage rolls
//! together with type effectiveness, STAB, critical-hit status and KO
//! statistics. All calculations are pure functions over immutable inputs.

/// Error types
pub mod error;

/// Type definitions and type chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Stat tables, stat formulas and stat stages
pub mod stats;

/// Species records
pub mod species;

/// Move records
pub mod moves;

/// Combatant configuration
pub mod entities;

/// Field state (weather, terrain, side conditions)
pub mod state;

/// Read-only reference catalogs
pub mod catalog;

/// Shared ability/item effect table machinery
pub mod effects;

/// Ability records and effect tables
pub mod abilities;

/// Item records and effect tables
pub mod items;

/// Damage calculation
pub mod damage;

// Re-export commonly used types
pub use catalog::{to_id, Catalog, Keyed, MemoryCatalog};
pub use damage::generations::{ChartRevision, GenerationProfile};
pub use damage::modifier::Modifier;
pub use damage::result::{DamagePercentages, DamageResult, NoDamageReason};
pub use damage::{calculate, Calculator};
pub use entities::Combatant;
pub use error::{ArgumentError, CalcError, CatalogError};
pub use moves::{Move, MoveCategory, MoveFlags, MultiHit};
pub use natures::NatureId;
pub use species::Species;
pub use state::{Field, SideConditions, Status, Terrain, Weather};
pub use stats::{compute_stats, Stat, StatFormula, StatStages, StatsTable};
pub use types::{EffectivenessClass, Type, TypeChart, TypeEffectiveness};
