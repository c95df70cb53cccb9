use core::fmt;

use serde::{Deserialize, Serialize};

/// Количество кредитов (баланс, ставка, выигрыш).
/// Обёртка над u64, чтобы не путать с количеством линий или индексами.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Credits(pub u64);

impl Credits {
    pub const ZERO: Credits = Credits(0);

    pub const fn new(amount: u64) -> Self {
        Credits(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Сложение без молчаливого насыщения: для бухгалтерии баланса.
    pub fn checked_add(self, other: Credits) -> Option<Credits> {
        self.0.checked_add(other.0).map(Credits)
    }

    /// Вычитание, которое не даёт уйти в минус (None вместо underflow).
    pub fn checked_sub(self, other: Credits) -> Option<Credits> {
        self.0.checked_sub(other.0).map(Credits)
    }

    /// Умножение на множитель (ставка × линии, ставка × ценность символа).
    pub fn checked_mul(self, factor: u64) -> Option<Credits> {
        self.0.checked_mul(factor).map(Credits)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
