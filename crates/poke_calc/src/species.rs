//! Species records.

use serde::{Deserialize, Serialize};

use crate::catalog::Keyed;
use crate::stats::StatsTable;
use crate::types::Type;

/// Static species data consumed by the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub primary_type: Type,
    #[serde(default)]
    pub secondary_type: Option<Type>,
    pub base_stats: StatsTable,
}

impl Species {
    pub fn new(
        name: impl Into<String>,
        primary_type: Type,
        secondary_type: Option<Type>,
        base_stats: StatsTable,
    ) -> Self {
        Self {
            name: name.into(),
            primary_type,
            secondary_type,
            base_stats,
        }
    }

    /// One or two types, primary first.
    pub fn types(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary_type).chain(self.secondary_type)
    }

    pub fn has_type(&self, ty: Type) -> bool {
        self.primary_type == ty || self.secondary_type == Some(ty)
    }
}

impl Keyed for Species {
    const KIND: &'static str = "species";

    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types() {
        let charizard = Species::new(
            "Charizard",
            Type::Fire,
            Some(Type::Flying),
            StatsTable::new(78, 84, 78, 109, 85, 100),
        );
        assert_eq!(charizard.types().collect::<Vec<_>>(), vec![Type::Fire, Type::Flying]);
        assert!(charizard.has_type(Type::Flying));
        assert!(!charizard.has_type(Type::Dragon));

        let pikachu = Species::new("Pikachu", Type::Electric, None, StatsTable::new(35, 55, 40, 50, 50, 90));
        assert_eq!(pikachu.types().count(), 1);
    }

    #[test]
    fn test_deserialize_without_secondary_type() {
        let json = r#"{
            "name": "Pikachu",
            "primary_type": "Electric",
            "base_stats": {"hp": 35, "attack": 55, "defense": 40,
                           "special_attack": 50, "special_defense": 50, "speed": 90}
        }"#;
        let species: Species = serde_json::from_str(json).unwrap();
        assert_eq!(species.secondary_type, None);
        assert_eq!(species.base_stats.speed, 90);
    }
}
