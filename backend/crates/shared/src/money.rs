//! Money - fixed-point monetary amount
//!
//! Amounts are stored as an integer count of hundredths of the base
//! currency unit. There is no floating point anywhere in the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount in hundredths of the base unit
///
/// Serializes as a bare integer (`950000` is 9,500.00).
///
/// ```
/// use kernel::money::Money;
///
/// let balance = Money::from_major(9_000);
/// let credited = balance.checked_add(Money::from_major(500)).unwrap();
/// assert_eq!(credited.to_string(), "9500.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Hundredths per base unit
    pub const SCALE: i64 = 100;

    /// Create from a count of hundredths
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create from whole base units (`from_major(5)` is 5.00)
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Self(major * Self::SCALE)
    }

    /// Count of hundredths
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Addition that reports overflow instead of wrapping
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Money(sum)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_minor() {
        assert_eq!(Money::from_major(10_000).minor(), 1_000_000);
        assert_eq!(Money::from_minor(250).minor(), 250);
        assert_eq!(Money::ZERO, Money::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(950_000).to_string(), "9500.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-150).to_string(), "-1.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_minor(i64::MAX);
        assert!(max.checked_add(Money::from_minor(1)).is_none());
        assert_eq!(
            Money::from_minor(1).checked_add(Money::from_minor(2)),
            Some(Money::from_minor(3))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_minor(12_345)).unwrap();
        assert_eq!(json, "12345");
        let back: Money = serde_json::from_str("12345").unwrap();
        assert_eq!(back, Money::from_minor(12_345));
    }
}
