//! Type-safe damage modifier.

use serde::Serialize;

/// A multiplicative damage modifier.
///
/// Modifiers are applied to a floating running value and the product is
/// truncated exactly once, when rolls are generated.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
pub struct Modifier(pub f64);

impl Modifier {
    /// 0x modifier (full suppression).
    pub const ZERO: Self = Self(0.0);

    /// 0.5x modifier.
    pub const HALF: Self = Self(0.5);

    /// 0.75x modifier (Filter/Solid Rock/Prism Armor).
    pub const THREE_QUARTERS: Self = Self(0.75);

    /// 1.0x modifier.
    pub const ONE: Self = Self(1.0);

    /// 1.1x modifier (Muscle Band, Wise Glasses).
    pub const ONE_POINT_ONE: Self = Self(1.1);

    /// 1.2x modifier (type-boosting items).
    pub const ONE_POINT_TWO: Self = Self(1.2);

    /// 1.25x modifier.
    pub const ONE_POINT_TWO_FIVE: Self = Self(1.25);

    /// 1.3x modifier (Life Orb, Tough Claws, terrain).
    pub const ONE_POINT_THREE: Self = Self(1.3);

    /// 1.5x modifier (STAB, weather, pinch abilities).
    pub const ONE_POINT_FIVE: Self = Self(1.5);

    /// 2.0x modifier.
    pub const DOUBLE: Self = Self(2.0);

    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    pub const fn val(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        value * self.0
    }

    #[inline]
    pub fn is_one(self) -> bool {
        self.0 == 1.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::ops::Mul for Modifier {
    type Output = Modifier;

    fn mul(self, rhs: Modifier) -> Modifier {
        Modifier(self.0 * rhs.0)
    }
}
