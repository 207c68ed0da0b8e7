//! Fixture data structures for damage calculation tests.
//!
//! These types are deserialized from `tests/fixtures/damage_cases.json`.

use serde::Deserialize;

/// Root structure for the damage fixture file.
#[derive(Deserialize)]
pub struct DamageFixture {
    #[allow(dead_code)]
    pub meta: Option<serde_json::Value>,
    pub cases: Vec<DamageTestCase>,
}

/// A single damage calculation test case.
#[derive(Deserialize, Debug, Clone)]
pub struct DamageTestCase {
    pub id: String,
    pub gen: u8,
    #[serde(rename = "testName")]
    pub test_name: String,
    pub attacker: PokemonData,
    pub defender: PokemonData,
    #[serde(rename = "move")]
    pub move_data: MoveData,
    pub field: Option<FieldData>,
    pub expected: ExpectedResult,
}

/// Combatant configuration from fixture.
#[derive(Deserialize, Debug, Clone)]
pub struct PokemonData {
    pub name: String,
    pub level: Option<u8>,
    pub item: Option<String>,
    pub ability: Option<String>,
    pub nature: Option<String>,
    pub evs: Option<StatsData>,
    pub ivs: Option<StatsData>,
    pub boosts: Option<BoostsData>,
    pub status: Option<String>,
    #[serde(rename = "curHP")]
    pub cur_hp: Option<i32>,
    #[serde(rename = "teraType")]
    pub tera_type: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct StatsData {
    pub hp: Option<i32>,
    pub atk: Option<i32>,
    pub def: Option<i32>,
    pub spa: Option<i32>,
    pub spd: Option<i32>,
    pub spe: Option<i32>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct BoostsData {
    pub atk: Option<i8>,
    pub def: Option<i8>,
    pub spa: Option<i8>,
    pub spd: Option<i8>,
    pub spe: Option<i8>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MoveData {
    pub name: String,
    #[serde(rename = "isCrit")]
    pub is_crit: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct FieldData {
    pub weather: Option<String>,
    pub terrain: Option<String>,
    #[serde(rename = "isGravity")]
    pub is_gravity: Option<bool>,
    #[serde(rename = "attackerSide")]
    pub attacker_side: Option<SideData>,
    #[serde(rename = "defenderSide")]
    pub defender_side: Option<SideData>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct SideData {
    #[serde(rename = "isReflect")]
    pub is_reflect: Option<bool>,
    #[serde(rename = "isLightScreen")]
    pub is_light_screen: Option<bool>,
    #[serde(rename = "isAuroraVeil")]
    pub is_aurora_veil: Option<bool>,
    #[serde(rename = "isTailwind")]
    pub is_tailwind: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedResult {
    pub damage: Vec<u32>,
    pub desc: String,
}
