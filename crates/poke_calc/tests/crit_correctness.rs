//! Correctness tests for critical hit mechanics.
//!
//! Across every generation a critical hit:
//! - ignores the attacker's negative offensive stages,
//! - ignores the defender's positive defensive stages,
//! - keeps the stages that favour the attacker,
//! - ignores Reflect / Light Screen / Aurora Veil.
//!
//! Battle Armor / Shell Armor only exist from Gen 3 on.

use poke_calc::{
    calculate, Combatant, Field, Move, MoveCategory, SideConditions, Species, Stat, StatsTable, Type,
};

fn rattata() -> Species {
    Species::new("Rattata", Type::Normal, None, StatsTable::new(30, 56, 35, 25, 35, 72))
}

fn tackle() -> Move {
    Move::new("Tackle", Type::Normal, MoveCategory::Physical, 40)
}

fn max_damage(attacker: &Combatant, defender: &Combatant, field: &Field, generation: u8) -> u32 {
    calculate(attacker, defender, &tackle(), field, generation)
        .unwrap()
        .max_damage()
}

#[test]
fn test_crit_ignores_negative_attack_stages() {
    let crit = Field::new().with_critical_hit(true);
    let defender = Combatant::new(rattata());
    for generation in 1..=9 {
        let lowered = Combatant::new(rattata()).stage(Stat::Attack, -2);
        let plain = Combatant::new(rattata());
        assert_eq!(
            max_damage(&lowered, &defender, &crit, generation),
            max_damage(&plain, &defender, &crit, generation),
            "gen {generation}: crit should ignore -2 Atk"
        );
        // Without a crit the drop matters
        assert!(
            max_damage(&lowered, &defender, &Field::new(), generation)
                < max_damage(&plain, &defender, &Field::new(), generation)
        );
    }
}

#[test]
fn test_crit_ignores_positive_defense_stages() {
    let crit = Field::new().with_critical_hit(true);
    let attacker = Combatant::new(rattata());
    for generation in 1..=9 {
        let raised = Combatant::new(rattata()).stage(Stat::Defense, 2);
        let plain = Combatant::new(rattata());
        assert_eq!(
            max_damage(&attacker, &raised, &crit, generation),
            max_damage(&attacker, &plain, &crit, generation),
            "gen {generation}: crit should ignore +2 Def"
        );
    }
}

#[test]
fn test_crit_keeps_favourable_stages() {
    let crit = Field::new().with_critical_hit(true);
    let defender = Combatant::new(rattata());
    for generation in 1..=9 {
        let boosted = Combatant::new(rattata()).stage(Stat::Attack, 2);
        let plain = Combatant::new(rattata());
        assert!(
            max_damage(&boosted, &defender, &crit, generation) > max_damage(&plain, &defender, &crit, generation),
            "gen {generation}: crit should keep +2 Atk"
        );
    }
}

#[test]
fn test_crit_ignores_screens() {
    let attacker = Combatant::new(rattata());
    let defender = Combatant::new(rattata());
    for screen in [SideConditions::REFLECT, SideConditions::AURORA_VEIL] {
        for generation in 1..=9 {
            let screened = Field::new().with_critical_hit(true).with_defender_side(screen);
            let open = Field::new().with_critical_hit(true);
            assert_eq!(
                max_damage(&attacker, &defender, &screened, generation),
                max_damage(&attacker, &defender, &open, generation)
            );
        }
    }
}

#[test]
fn test_shell_armor_blocks_crits_from_gen3() {
    let crit = Field::new().with_critical_hit(true);
    let attacker = Combatant::new(rattata());
    let armored = Combatant::new(rattata()).ability("Shell Armor");

    let gen2 = calculate(&attacker, &armored, &tackle(), &crit, 2).unwrap();
    assert!(gen2.is_critical_hit);

    for generation in 3..=9 {
        let result = calculate(&attacker, &armored, &tackle(), &crit, generation).unwrap();
        assert!(!result.is_critical_hit, "gen {generation}");
        assert!(!result.description.contains("Critical Hit"));
    }
}

#[test]
fn test_will_crit_moves() {
    let attacker = Combatant::new(rattata());
    let defender = Combatant::new(rattata());
    let always = tackle().with_will_crit(true);
    let result = calculate(&attacker, &defender, &always, &Field::new(), 9).unwrap();
    assert!(result.is_critical_hit);
    assert!(result.description.contains("Critical Hit"));
}
