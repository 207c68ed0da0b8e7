//! Item records and effect tables.

use serde::{Deserialize, Serialize};

use crate::catalog::Keyed;

pub mod registry;

pub use registry::{DAMAGE_EFFECTS, DEFENSE_STAT_EFFECTS, OFFENSE_STAT_EFFECTS};

/// Defender item that turns type immunities neutral.
pub const RING_TARGET: &str = "ringtarget";

/// Catalog record for a held item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Keyed for ItemRecord {
    const KIND: &'static str = "item";

    fn key(&self) -> &str {
        &self.name
    }
}

/// Whether the calculator models this item at all.
pub fn is_modeled(id: &str) -> bool {
    use crate::effects::is_known;
    is_known(DAMAGE_EFFECTS, id)
        || is_known(OFFENSE_STAT_EFFECTS, id)
        || is_known(DEFENSE_STAT_EFFECTS, id)
        || registry::GROUNDING_ITEMS.contains(&id)
        || id == RING_TARGET
}
