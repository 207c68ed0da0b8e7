//! Core damage formula and roll expansion.
//!
//! The base damage formula is integer math with truncation at each step,
//! exactly as the games compute it. Everything after it runs on a floating
//! running value; [`truncate`] is the single point where that value becomes
//! an integer again.

/// Number of damage rolls.
pub const ROLL_COUNT: usize = 16;

/// Lowest roll percentage (85%..=100%).
pub const MIN_ROLL_PERCENT: u32 = 85;

/// Absorbs float error such as `0.1 * 3 = 0.30000000000000004` below an
/// integer boundary (e.g. `149.99999999997` must floor to 150).
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Base damage before any modifier.
///
/// `floor(floor(floor(2 * L / 5 + 2) * BP * A / D) / 50) + 2`
///
/// A defense of zero or less is treated as 1.
pub fn base_damage(level: u8, base_power: u16, attack: i32, defense: i32) -> u32 {
    let level_factor = 2 * level as u64 / 5 + 2;
    let attack = attack.max(0) as u64;
    let defense = defense.max(1) as u64;
    let damage = level_factor * base_power as u64 * attack / defense / 50 + 2;
    damage.min(u32::MAX as u64) as u32
}

/// Pull a value lying within the epsilon of an integer onto that integer.
///
/// After snapping, `floor(value)` and [`truncate`] agree.
#[inline]
pub fn snap(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() < TRUNCATION_EPSILON {
        nearest
    } else {
        value
    }
}

/// The one truncation point: floor with an epsilon guard.
#[inline]
pub fn truncate(value: f64) -> u32 {
    if value <= 0.0 {
        return 0;
    }
    (value + TRUNCATION_EPSILON).floor() as u32
}

/// Expand a final (untruncated) damage value into the 16 random rolls.
///
/// Roll `i` is `max(1, floor(final * (85 + i) / 100))`; a final damage of
/// exactly zero yields sixteen zeros.
pub fn generate_range(final_damage: f64) -> [u32; ROLL_COUNT] {
    let mut rolls = [0u32; ROLL_COUNT];
    if final_damage <= 0.0 {
        return rolls;
    }
    for (i, roll) in rolls.iter_mut().enumerate() {
        let percent = (MIN_ROLL_PERCENT + i as u32) as f64;
        *roll = truncate(final_damage * percent / 100.0).max(1);
    }
    rolls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_damage() {
        // L50, 90 BP, 100 Atk vs 100 Def: 22 * 90 * 100 / 100 / 50 + 2 = 41
        assert_eq!(base_damage(50, 90, 100, 100), 41);
        // L100: 42 * 90 * 100 / 100 / 50 + 2 = 77
        assert_eq!(base_damage(100, 90, 100, 100), 77);
        assert_eq!(base_damage(50, 90, 70, 120), 25);
    }

    #[test]
    fn test_defense_is_floored_to_one() {
        assert_eq!(base_damage(50, 40, 10, 0), base_damage(50, 40, 10, 1));
        assert_eq!(base_damage(50, 40, 10, -20), base_damage(50, 40, 10, 1));
    }

    #[test]
    fn test_rolls_exact() {
        let rolls = generate_range(150.0);
        assert_eq!(
            rolls,
            [127, 129, 130, 132, 133, 135, 136, 138, 139, 141, 142, 144, 145, 147, 148, 150]
        );
    }

    #[test]
    fn test_rolls_are_non_decreasing_and_end_at_floor() {
        for final_damage in [1.0, 2.5, 37.5, 99.99, 150.0, 351.0, 1234.56] {
            let rolls = generate_range(final_damage);
            assert!(rolls.windows(2).all(|w| w[0] <= w[1]), "{final_damage}");
            assert_eq!(rolls[15], truncate(final_damage));
        }
    }

    #[test]
    fn test_minimum_roll_is_one() {
        assert_eq!(generate_range(0.5), [1; ROLL_COUNT]);
        assert_eq!(generate_range(1.0)[0], 1);
    }

    #[test]
    fn test_zero_final_damage_is_all_zero() {
        assert_eq!(generate_range(0.0), [0; ROLL_COUNT]);
    }

    #[test]
    fn test_truncation_absorbs_float_error() {
        // 125 * 1.2 = 150.00000000000003 / 149.99999999999997 depending on order
        assert_eq!(truncate(149.99999999999997), 150);
        assert_eq!(truncate(150.00000000000003), 150);
        assert_eq!(truncate(149.5), 149);
    }

    #[test]
    fn test_snap_pulls_float_error_onto_integers() {
        // 0.7 * 3 * 100 = 209.99999999999997
        assert_eq!(snap(0.7 * 3.0 * 100.0), 210.0);
        assert_eq!(snap(150.00000000000003), 150.0);
        assert_eq!(snap(59.9999999), 59.9999999);
        assert_eq!(snap(37.5), 37.5);
    }

    #[test]
    fn test_top_roll_is_floor_just_below_an_integer() {
        assert_eq!(generate_range(59.9999999)[15], 59);
        for whole in 2..500 {
            for offset in [-1e-7, -1e-12, 0.0, 1e-12, 0.9999999] {
                let final_damage = snap(whole as f64 + offset);
                assert_eq!(
                    generate_range(final_damage)[15],
                    final_damage.floor() as u32,
                    "{whole} + {offset}"
                );
            }
        }
    }
}
