//! Test helper functions for damage calculation tests.
//!
//! These helpers turn fixture data into calculator inputs and verify results.

use std::fs;

use poke_calc::{
    calculate, Catalog, Combatant, Field, MemoryCatalog, Move, NatureId, SideConditions, Species, Stat,
    StatsTable, Status, Terrain, Type, Weather,
};

use super::fixtures::{DamageFixture, DamageTestCase, FieldData, PokemonData, SideData, StatsData};

pub const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

/// Species and move catalogs used by the fixtures.
pub struct Catalogs {
    pub species: MemoryCatalog<Species>,
    pub moves: MemoryCatalog<Move>,
}

fn read_fixture(name: &str) -> String {
    let path = format!("{FIXTURE_DIR}/{name}");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
}

pub fn load_catalogs() -> Catalogs {
    Catalogs {
        species: MemoryCatalog::from_json(&read_fixture("species.json")).expect("species.json parses"),
        moves: MemoryCatalog::from_json(&read_fixture("moves.json")).expect("moves.json parses"),
    }
}

pub fn load_cases() -> Vec<DamageTestCase> {
    let fixture: DamageFixture =
        serde_json::from_str(&read_fixture("damage_cases.json")).expect("Failed to parse damage_cases.json");
    fixture.cases
}

/// Log calculator events while fixtures run; filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Target generation from `POKE_TEST_GEN` ("all" or unset means every generation).
pub fn target_gen() -> Option<u8> {
    let gen_str = std::env::var("POKE_TEST_GEN").ok()?;
    if gen_str.eq_ignore_ascii_case("all") {
        return None;
    }
    gen_str.parse::<u8>().ok()
}

fn stats_table(data: &StatsData, default: i32) -> StatsTable {
    StatsTable::new(
        data.hp.unwrap_or(default),
        data.atk.unwrap_or(default),
        data.def.unwrap_or(default),
        data.spa.unwrap_or(default),
        data.spd.unwrap_or(default),
        data.spe.unwrap_or(default),
    )
}

fn parse_status(status: &str) -> Status {
    match status {
        "brn" => Status::Burn,
        "par" => Status::Paralysis,
        "slp" => Status::Sleep,
        "frz" => Status::Freeze,
        "psn" => Status::Poison,
        "tox" => Status::BadlyPoisoned,
        _ => Status::None,
    }
}

/// Build a combatant from fixture data.
pub fn build_combatant(data: &PokemonData, catalogs: &Catalogs) -> Result<Combatant, String> {
    let species = catalogs.species.require(&data.name).map_err(|e| e.to_string())?;

    // Level (default 100)
    let mut combatant = Combatant::new(species.clone()).level(data.level.unwrap_or(100));

    if let Some(ref nature_str) = data.nature {
        let nature = NatureId::from_str(nature_str).ok_or_else(|| format!("Unknown nature: {nature_str}"))?;
        combatant = combatant.nature(nature);
    }
    if let Some(ref ability) = data.ability {
        combatant = combatant.ability(ability.clone());
    }
    if let Some(ref item) = data.item {
        combatant = combatant.item(item.clone());
    }
    if let Some(ref evs) = data.evs {
        combatant = combatant.evs(stats_table(evs, 0));
    }
    if let Some(ref ivs) = data.ivs {
        combatant = combatant.ivs(stats_table(ivs, 31));
    }
    if let Some(ref boosts) = data.boosts {
        combatant = combatant
            .stage(Stat::Attack, boosts.atk.unwrap_or_default())
            .stage(Stat::Defense, boosts.def.unwrap_or_default())
            .stage(Stat::SpecialAttack, boosts.spa.unwrap_or_default())
            .stage(Stat::SpecialDefense, boosts.spd.unwrap_or_default())
            .stage(Stat::Speed, boosts.spe.unwrap_or_default());
    }
    if let Some(ref status) = data.status {
        combatant = combatant.status(parse_status(status));
    }
    if let Some(cur_hp) = data.cur_hp {
        combatant = combatant.current_hp(cur_hp);
    }
    if let Some(ref tera) = data.tera_type {
        let tera = Type::from_str(tera).ok_or_else(|| format!("Unknown type: {tera}"))?;
        combatant = combatant.tera_type(tera);
    }
    Ok(combatant)
}

fn side_conditions(side: &Option<SideData>) -> SideConditions {
    let Some(side) = side else {
        return SideConditions::empty();
    };
    let mut conditions = SideConditions::empty();
    conditions.set(SideConditions::REFLECT, side.is_reflect == Some(true));
    conditions.set(SideConditions::LIGHT_SCREEN, side.is_light_screen == Some(true));
    conditions.set(SideConditions::AURORA_VEIL, side.is_aurora_veil == Some(true));
    conditions.set(SideConditions::TAILWIND, side.is_tailwind == Some(true));
    conditions
}

/// Build the field from fixture data.
pub fn build_field(field: &Option<FieldData>, is_crit: bool) -> Field {
    let mut out = Field::new().with_critical_hit(is_crit);
    let Some(field) = field else { return out };

    if let Some(ref weather_str) = field.weather {
        out = out.with_weather(match weather_str.to_lowercase().as_str() {
            "sun" | "sunlight" => Weather::Sun,
            "rain" => Weather::Rain,
            "sand" | "sandstorm" => Weather::Sand,
            "hail" => Weather::Hail,
            "snow" => Weather::Snow,
            "harsh sunshine" | "harsh sun" => Weather::HarshSun,
            "heavy rain" => Weather::HeavyRain,
            "strong winds" => Weather::StrongWinds,
            _ => Weather::None,
        });
    }

    if let Some(ref terrain_str) = field.terrain {
        out = out.with_terrain(match terrain_str.to_lowercase().as_str() {
            "electric" | "electric terrain" => Terrain::Electric,
            "grassy" | "grassy terrain" => Terrain::Grassy,
            "psychic" | "psychic terrain" => Terrain::Psychic,
            "misty" | "misty terrain" => Terrain::Misty,
            _ => Terrain::None,
        });
    }

    out.with_gravity(field.is_gravity == Some(true))
        .with_attacker_side(side_conditions(&field.attacker_side))
        .with_defender_side(side_conditions(&field.defender_side))
}

// ============================================================================
// Test Runner
// ============================================================================

pub fn run_damage_test(case: &DamageTestCase, catalogs: &Catalogs) -> Result<(), String> {
    let attacker =
        build_combatant(&case.attacker, catalogs).map_err(|e| format!("Attacker setup failed: {e}"))?;
    let defender =
        build_combatant(&case.defender, catalogs).map_err(|e| format!("Defender setup failed: {e}"))?;
    let move_data = catalogs.moves.require(&case.move_data.name).map_err(|e| e.to_string())?;
    let field = build_field(&case.field, case.move_data.is_crit.unwrap_or_default());

    let result = calculate(&attacker, &defender, move_data, &field, case.gen).map_err(|e| e.to_string())?;

    let expected = &case.expected.damage;
    if expected.len() != result.damage_values.len() {
        return Err(format!("Expected 16 rolls, fixture has {}", expected.len()));
    }
    for (i, (&exp, &got)) in expected.iter().zip(result.damage_values.iter()).enumerate() {
        if exp != got {
            return Err(format!(
                "Roll {i} mismatch: expected {exp}, got {got}\n  Expected: {expected:?}\n  Actual:   {:?}",
                result.damage_values
            ));
        }
    }

    if result.description != case.expected.desc {
        return Err(format!(
            "Description mismatch:\n  Expected: {}\n  Actual:   {}",
            case.expected.desc, result.description
        ));
    }

    Ok(())
}

/// Sanitize test name for use as a test identifier
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
